//! Event-driven bridge between a design tool's document tree and a font
//! replacement panel: summarize which fonts the current selection uses,
//! grouped by enclosing container, and bulk-replace fonts on command.
//!
//! The host runtime (document tree, font registry, notifications) sits
//! behind the capability traits in [`host`]; [`host::InMemoryHost`] is the
//! in-process stand-in used by the demo binary and the tests.

pub mod bridge;
pub mod fonts;
pub mod host;
pub mod selection;
