use serde::{Deserialize, Serialize};

/// One `{id, font, weight}` entry from the panel's checked list. Only the id
/// drives the mutation; the font/weight echoes are informational.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedNode {
    pub id: String,
    #[serde(default)]
    pub font: String,
    #[serde(default)]
    pub weight: String,
}

/// Messages arriving from the panel, plus the host's selection event
/// forwarded on the same stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum InboundMessage {
    ReplaceFont {
        font: String,
        weight: String,
        #[serde(rename = "selectedNodes")]
        selected_nodes: Vec<SelectedNode>,
    },
    ReplaceAllFonts {
        font: String,
        weight: String,
    },
    CheckFontWeights {
        family: String,
    },
    RestartPlugin,
    SelectionChanged,
}

/// One catalog entry as the panel's font dropdown wants it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontFamilyRecord {
    pub family: String,
}

/// One container group in the panel's selection view; each text entry is a
/// pre-rendered HTML fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerView {
    #[serde(rename = "frameName")]
    pub frame_name: String,
    pub texts: Vec<String>,
}

/// Messages pushed to the panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum OutboundMessage {
    PopulateFonts {
        fonts: Vec<FontFamilyRecord>,
    },
    UpdateMessageVisibility {
        #[serde(rename = "showMessage")]
        show_message: bool,
    },
    UpdateSelectedText {
        #[serde(rename = "selectedTextsWithFonts")]
        selected_texts_with_fonts: Vec<ContainerView>,
    },
    AvailableWeights {
        weights: Vec<String>,
    },
}

/// Render one selection entry: a default-checked checkbox keyed by node id
/// plus the font family, shown in that family.
pub fn text_entry_html(id: &str, family: &str) -> String {
    format!(
        "<div>\
         <input type=\"checkbox\" id=\"{id}\" value=\"{id}\" checked>\
         <span style=\"font-family: {family};\">{family}</span>\
         </div>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn inbound_wire_names_are_kebab_and_camel_case() {
        let msg: InboundMessage = serde_json::from_value(json!({
            "type": "replace-font",
            "font": "Roboto",
            "weight": "Bold",
            "selectedNodes": [{"id": "1:2", "font": "Inter", "weight": "Regular"}]
        }))
        .unwrap();
        assert_eq!(
            msg,
            InboundMessage::ReplaceFont {
                font: "Roboto".to_string(),
                weight: "Bold".to_string(),
                selected_nodes: vec![SelectedNode {
                    id: "1:2".to_string(),
                    font: "Inter".to_string(),
                    weight: "Regular".to_string(),
                }],
            }
        );

        let restart: InboundMessage =
            serde_json::from_value(json!({"type": "restart-plugin"})).unwrap();
        assert_eq!(restart, InboundMessage::RestartPlugin);
    }

    #[test]
    fn outbound_wire_names_match_panel_expectations() {
        let value = serde_json::to_value(OutboundMessage::UpdateSelectedText {
            selected_texts_with_fonts: vec![ContainerView {
                frame_name: "FRAME: Hero".to_string(),
                texts: vec![text_entry_html("1:2", "Inter")],
            }],
        })
        .unwrap();
        assert_eq!(value["type"], "update-selected-text");
        assert_eq!(
            value["selectedTextsWithFonts"][0]["frameName"],
            "FRAME: Hero"
        );

        let vis = serde_json::to_value(OutboundMessage::UpdateMessageVisibility {
            show_message: true,
        })
        .unwrap();
        assert_eq!(vis["type"], "update-message-visibility");
        assert_eq!(vis["showMessage"], true);
    }

    #[test]
    fn text_entry_html_embeds_id_and_family() {
        let html = text_entry_html("1:7", "Lato");
        assert!(html.contains("id=\"1:7\""));
        assert!(html.contains("value=\"1:7\""));
        assert!(html.contains("font-family: Lato;"));
        assert!(html.contains("checked"));
    }
}
