mod memory;

use std::fmt;

use thiserror::Error;

pub use memory::InMemoryHost;

/// Opaque host-assigned node identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Node classification, as far as this plugin cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Text,
    Frame,
    Group,
    Page,
    Other,
}

/// A font asset reference: must be loaded through the catalog before it can
/// be written onto a text node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontName {
    pub family: String,
    pub style: String,
}

impl FontName {
    pub fn new(family: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            style: style.into(),
        }
    }
}

impl fmt::Display for FontName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.family, self.style)
    }
}

#[derive(Debug, Error)]
pub enum HostError {
    #[error("font catalog unavailable: {0}")]
    CatalogUnavailable(String),
    #[error("font not available: {family} ({style})")]
    FontUnavailable { family: String, style: String },
}

/// Read/write access to the host's live document tree. The tree is owned by
/// the host runtime; every call reads fresh state. Resolution by id is
/// fallible: a deleted node resolves to `None`.
pub trait DocumentTree {
    fn selection(&self) -> Vec<NodeId>;
    fn current_page(&self) -> NodeId;
    fn node_kind(&self, id: &NodeId) -> Option<NodeKind>;
    fn node_name(&self, id: &NodeId) -> Option<String>;
    fn parent(&self, id: &NodeId) -> Option<NodeId>;
    /// Display characters of a text node.
    fn characters(&self, id: &NodeId) -> Option<String>;
    fn font_of(&self, id: &NodeId) -> Option<FontName>;
    fn set_font(&mut self, id: &NodeId, font: &FontName);
    /// All text nodes under `root`, recursively, in document order.
    fn find_text_descendants(&self, root: &NodeId) -> Vec<NodeId>;
}

/// The host's font registry.
pub trait FontCatalog {
    /// Every (family, style) pair the host knows. The fetch itself can fail.
    fn list_available(&self) -> Result<Vec<FontName>, HostError>;
    /// Load a font asset so it may be assigned. Fails when the family/style
    /// combination is not installed.
    fn load_font(&mut self, font: &FontName) -> Result<(), HostError>;
}

/// Host shell operations outside the document: transient user toasts and
/// plugin restart.
pub trait Shell {
    fn notify(&mut self, message: &str);
    fn reload(&mut self);
}
