// Simulates whole panel sessions: startup through commands to shutdown,
// both over the in-memory channel and over the framed wire format.

use std::io::Cursor;

use font_swap::bridge::{
    FramedChannel, InboundMessage, MemoryChannel, OutboundMessage, PluginServer,
};
use font_swap::host::{DocumentTree, FontName, InMemoryHost};

fn demo_host() -> InMemoryHost {
    let mut host = InMemoryHost::new("Landing");
    host.install_font("Inter", "Regular");
    host.install_font("Inter", "Bold");
    host.install_font("Roboto", "Medium");

    let page = host.page();
    let hero = host.add_frame(&page, "Hero");
    host.add_text(&hero, "Build faster", FontName::new("Inter", "Regular"));
    host.add_text(&page, "Footnote", FontName::new("Inter", "Regular"));
    host.set_selection(&[hero]);
    host
}

// Pull every framed JSON body out of a raw outbound byte stream
fn decode_frames(bytes: &[u8]) -> Vec<serde_json::Value> {
    let mut rest = bytes;
    let mut out = Vec::new();
    while !rest.is_empty() {
        let text = std::str::from_utf8(rest).expect("frames are utf-8");
        let header_end = text.find("\r\n\r\n").expect("frame header") + 4;
        let len: usize = text[..header_end]
            .trim()
            .strip_prefix("Content-Length:")
            .expect("length header")
            .trim()
            .parse()
            .expect("numeric length");
        let body = &rest[header_end..header_end + len];
        out.push(serde_json::from_slice(body).expect("frame body is JSON"));
        rest = &rest[header_end + len..];
    }
    out
}

fn encode_frame(value: &serde_json::Value) -> String {
    let body = value.to_string();
    format!("Content-Length: {}\r\n\r\n{}", body.len(), body)
}

#[cfg(test)]
mod session_tests {
    use super::*;

    #[test]
    fn full_session_orders_messages_per_event() {
        let host = demo_host();
        let channel = MemoryChannel::scripted([
            InboundMessage::CheckFontWeights {
                family: "Inter".to_string(),
            },
            InboundMessage::ReplaceAllFonts {
                font: "Roboto".to_string(),
                weight: "Medium".to_string(),
            },
            InboundMessage::SelectionChanged,
        ]);

        let mut server = PluginServer::new(host, channel);
        server.run().unwrap();

        let (host, channel) = server.into_parts();

        // Startup: summary (visibility + payload), then the catalog
        assert!(matches!(
            channel.sent[0],
            OutboundMessage::UpdateMessageVisibility {
                show_message: false
            }
        ));
        assert!(matches!(
            channel.sent[1],
            OutboundMessage::UpdateSelectedText { .. }
        ));
        assert!(matches!(
            channel.sent[2],
            OutboundMessage::PopulateFonts { .. }
        ));

        // Weight query answer
        assert_eq!(
            channel.sent[3],
            OutboundMessage::AvailableWeights {
                weights: vec!["Regular".to_string(), "Bold".to_string()]
            }
        );

        // Replace-all sends nothing; the later selection event refreshes
        assert!(matches!(
            channel.sent[4],
            OutboundMessage::UpdateMessageVisibility {
                show_message: false
            }
        ));
        let OutboundMessage::UpdateSelectedText {
            selected_texts_with_fonts,
        } = &channel.sent[5]
        else {
            panic!("expected refreshed selection payload");
        };
        // The refreshed payload reflects the page-wide mutation
        assert!(selected_texts_with_fonts[0].texts[0].contains("Roboto"));
        assert_eq!(channel.sent.len(), 6);
        assert_eq!(
            host.notifications,
            vec!["Replaced all text fonts with Roboto (Medium)!"]
        );
    }

    #[test]
    fn restart_repeats_startup_sequence() {
        let mut host = demo_host();
        host.set_selection(&[]);
        let channel = MemoryChannel::scripted([InboundMessage::RestartPlugin]);

        let mut server = PluginServer::new(host, channel);
        server.run().unwrap();

        let (host, channel) = server.into_parts();
        assert_eq!(host.reloads, 1);
        // Empty-state visibility + catalog, twice
        assert_eq!(channel.sent.len(), 4);
        assert_eq!(channel.sent[0], channel.sent[2]);
        assert_eq!(channel.sent[1], channel.sent[3]);
    }

    #[test]
    fn framed_wire_session_round_trips() {
        let host = demo_host();

        let request = serde_json::json!({
            "type": "replace-font",
            "font": "Inter",
            "weight": "Bold",
            "selectedNodes": [{"id": "1:2", "font": "Inter", "weight": "Regular"}]
        });
        let inbound = encode_frame(&request);

        let mut out = Vec::new();
        {
            let channel = FramedChannel::new(Cursor::new(inbound.into_bytes()), &mut out);
            let mut server = PluginServer::new(host, channel);
            server.run().unwrap();

            let (host, _) = server.into_parts();
            let title = font_swap::host::NodeId::new("1:2");
            assert_eq!(host.font_of(&title), Some(FontName::new("Inter", "Bold")));
        }

        let frames = decode_frames(&out);
        let kinds: Vec<&str> = frames
            .iter()
            .map(|f| f["type"].as_str().unwrap())
            .collect();
        // Startup summary + catalog, then the post-replace refresh
        assert_eq!(
            kinds,
            vec![
                "update-message-visibility",
                "update-selected-text",
                "populate-fonts",
                "update-message-visibility",
                "update-selected-text",
            ]
        );
        assert_eq!(frames[0]["showMessage"], false);
        assert_eq!(
            frames[2]["fonts"],
            serde_json::json!([
                {"family": "Inter"},
                {"family": "Inter"},
                {"family": "Roboto"}
            ])
        );
    }
}
