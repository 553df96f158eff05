use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use super::protocol::{InboundMessage, OutboundMessage};

/// Bidirectional message channel to the panel process. Messages are
/// delivered in emission order, one at a time.
pub trait UiChannel {
    fn send(&mut self, msg: &OutboundMessage) -> io::Result<()>;
    /// Next inbound message; `Ok(None)` means the channel closed.
    fn receive(&mut self) -> io::Result<Option<InboundMessage>>;
}

/// Content-Length framed JSON over a reader/writer pair.
/// Frame format is exactly "Content-Length: {len}\r\n\r\n{json}".
pub struct FramedChannel<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> FramedChannel<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> UiChannel for FramedChannel<R, W> {
    fn send(&mut self, msg: &OutboundMessage) -> io::Result<()> {
        let json = serde_json::to_string(msg)?;
        write!(self.writer, "Content-Length: {}\r\n\r\n{}", json.len(), json)?;
        self.writer.flush()
    }

    fn receive(&mut self) -> io::Result<Option<InboundMessage>> {
        let mut content_length = 0usize;

        loop {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let line = line.trim_end_matches(['\r', '\n']);
            if line.is_empty() {
                break;
            }
            if let Some(rest) = line.strip_prefix("Content-Length:") {
                content_length = rest.trim().parse().unwrap_or(0);
            }
        }

        if content_length == 0 {
            return Ok(None);
        }

        let mut buf = vec![0u8; content_length];
        self.reader.read_exact(&mut buf)?;
        let msg = serde_json::from_slice(&buf)?;
        Ok(Some(msg))
    }
}

/// In-memory channel double: scripted inbound queue, recorded outbound log.
#[derive(Default)]
pub struct MemoryChannel {
    inbound: VecDeque<InboundMessage>,
    pub sent: Vec<OutboundMessage>,
}

impl MemoryChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scripted(messages: impl IntoIterator<Item = InboundMessage>) -> Self {
        Self {
            inbound: messages.into_iter().collect(),
            sent: Vec::new(),
        }
    }

    pub fn push(&mut self, msg: InboundMessage) {
        self.inbound.push_back(msg);
    }
}

impl UiChannel for MemoryChannel {
    fn send(&mut self, msg: &OutboundMessage) -> io::Result<()> {
        self.sent.push(msg.clone());
        Ok(())
    }

    fn receive(&mut self) -> io::Result<Option<InboundMessage>> {
        Ok(self.inbound.pop_front())
    }
}
