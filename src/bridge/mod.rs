mod channel;
mod protocol;
mod server;

use std::io::{self, BufReader};

pub use channel::{FramedChannel, MemoryChannel, UiChannel};
pub use protocol::{
    text_entry_html, ContainerView, FontFamilyRecord, InboundMessage, OutboundMessage,
    SelectedNode,
};
pub use server::{PluginServer, APPLY_FAILED_NOTICE, CATALOG_FAILED_NOTICE};

use crate::host::{DocumentTree, FontCatalog, Shell};

/// Serve the framed panel protocol on stdin/stdout until the panel closes
/// the stream. Diagnostics go to stderr; stdout carries frames only.
pub fn run_stdio<H>(host: H) -> io::Result<()>
where
    H: DocumentTree + FontCatalog + Shell,
{
    let channel = FramedChannel::new(BufReader::new(io::stdin()), io::stdout());
    PluginServer::new(host, channel).run()
}
