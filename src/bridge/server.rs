use std::io;

use super::channel::UiChannel;
use super::protocol::{
    text_entry_html, ContainerView, FontFamilyRecord, InboundMessage, OutboundMessage,
};
use crate::fonts;
use crate::host::{DocumentTree, FontCatalog, FontName, NodeId, Shell};
use crate::selection;

pub const CATALOG_FAILED_NOTICE: &str = "Failed to load fonts. Please try again later.";
pub const APPLY_FAILED_NOTICE: &str = "Failed to apply font. Please try a different weight/style.";

/// The plugin core: owns the host handles and the panel channel, and
/// handles one event at a time to completion.
pub struct PluginServer<H, C> {
    host: H,
    channel: C,
}

impl<H, C> PluginServer<H, C>
where
    H: DocumentTree + FontCatalog + Shell,
    C: UiChannel,
{
    pub fn new(host: H, channel: C) -> Self {
        Self { host, channel }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn into_parts(self) -> (H, C) {
        (self.host, self.channel)
    }

    /// Runs once when the plugin opens: current selection summary, then the
    /// font catalog.
    pub fn startup(&mut self) -> io::Result<()> {
        self.refresh_selection()?;
        self.load_catalog()
    }

    /// Summarize the selection and push it to the panel: the empty-state
    /// visibility flag always, the grouped payload only when something
    /// matched.
    pub fn refresh_selection(&mut self) -> io::Result<()> {
        let groups = selection::summarize(&self.host);
        let show_message = groups.is_empty();

        self.channel
            .send(&OutboundMessage::UpdateMessageVisibility { show_message })?;

        if show_message {
            return Ok(());
        }

        let view = groups
            .into_iter()
            .map(|g| ContainerView {
                frame_name: g.frame_name,
                texts: g
                    .texts
                    .iter()
                    .map(|t| text_entry_html(t.id.as_str(), &t.font))
                    .collect(),
            })
            .collect();

        self.channel.send(&OutboundMessage::UpdateSelectedText {
            selected_texts_with_fonts: view,
        })
    }

    /// Fetch the font catalog and populate the panel's family list. A fetch
    /// failure is logged and notified; the panel gets no message.
    pub fn load_catalog(&mut self) -> io::Result<()> {
        match self.host.list_available() {
            Ok(entries) => {
                let fonts = fonts::family_names(&entries)
                    .into_iter()
                    .map(|family| FontFamilyRecord { family })
                    .collect();
                self.channel.send(&OutboundMessage::PopulateFonts { fonts })
            }
            Err(e) => {
                eprintln!("Error fetching available fonts: {e}");
                self.host.notify(CATALOG_FAILED_NOTICE);
                Ok(())
            }
        }
    }

    fn handle_replace_font(
        &mut self,
        family: String,
        style: String,
        ids: Vec<NodeId>,
    ) -> io::Result<()> {
        let font = FontName::new(family, style);
        match fonts::replace_selected(&mut self.host, &font, &ids) {
            Ok(_) => {
                self.host
                    .notify(&format!("Replaced fonts with {font}!"));
                self.refresh_selection()
            }
            Err(e) => {
                eprintln!("Error applying {}: {e}", font.family);
                self.host.notify(APPLY_FAILED_NOTICE);
                Ok(())
            }
        }
    }

    fn handle_replace_all(&mut self, family: String, style: String) -> io::Result<()> {
        let font = FontName::new(family, style);
        match fonts::replace_all(&mut self.host, &font) {
            Ok(_) => {
                self.host
                    .notify(&format!("Replaced all text fonts with {font}!"));
            }
            Err(e) => {
                eprintln!("Error applying {}: {e}", font.family);
                self.host.notify(APPLY_FAILED_NOTICE);
            }
        }
        Ok(())
    }

    fn handle_check_weights(&mut self, family: String) -> io::Result<()> {
        match self.host.list_available() {
            Ok(entries) => {
                let weights = fonts::weights_for(&entries, &family);
                self.channel
                    .send(&OutboundMessage::AvailableWeights { weights })
            }
            Err(e) => {
                eprintln!("Error fetching available fonts: {e}");
                self.host.notify(CATALOG_FAILED_NOTICE);
                Ok(())
            }
        }
    }

    fn handle_restart(&mut self) -> io::Result<()> {
        self.host.reload();
        self.startup()
    }

    pub fn dispatch(&mut self, msg: InboundMessage) -> io::Result<()> {
        match msg {
            InboundMessage::ReplaceFont {
                font,
                weight,
                selected_nodes,
            } => {
                let ids = selected_nodes
                    .into_iter()
                    .map(|n| NodeId::new(n.id))
                    .collect();
                self.handle_replace_font(font, weight, ids)
            }
            InboundMessage::ReplaceAllFonts { font, weight } => {
                self.handle_replace_all(font, weight)
            }
            InboundMessage::CheckFontWeights { family } => self.handle_check_weights(family),
            InboundMessage::RestartPlugin => self.handle_restart(),
            InboundMessage::SelectionChanged => self.refresh_selection(),
        }
    }

    /// Full plugin lifetime: startup, then one message at a time until the
    /// channel closes.
    pub fn run(&mut self) -> io::Result<()> {
        self.startup()?;
        loop {
            match self.channel.receive() {
                Ok(Some(msg)) => self.dispatch(msg)?,
                Ok(None) => break,
                Err(e) => {
                    eprintln!("Unreadable panel message, shutting down: {e}");
                    break;
                }
            }
        }
        Ok(())
    }
}
