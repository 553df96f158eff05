use std::collections::BTreeMap;

use crate::host::{DocumentTree, NodeId, NodeKind};

/// Label for texts whose enclosing container is not a frame, group or page.
pub const UNGROUPED_LABEL: &str = "Normal Texts";

/// One matched text element, derived fresh per selection event.
#[derive(Debug, Clone, PartialEq)]
pub struct TextNodeInfo {
    pub id: NodeId,
    pub text: String,
    pub font: String,
}

/// A grouping bucket: every matched text under one container label. The key
/// is the label string only, so two distinct containers sharing a name
/// collapse into one bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerData {
    pub frame_name: String,
    pub texts: Vec<TextNodeInfo>,
}

/// Display label for a container, by kind and name.
pub fn container_label(kind: NodeKind, name: &str) -> String {
    match kind {
        NodeKind::Frame => format!("FRAME: {name}"),
        NodeKind::Group => format!("GROUP: {name}"),
        NodeKind::Page => format!("PAGE: {name}"),
        NodeKind::Text | NodeKind::Other => UNGROUPED_LABEL.to_string(),
    }
}

fn label_of_parent(doc: &impl DocumentTree, text: &NodeId) -> String {
    let Some(parent) = doc.parent(text) else {
        return UNGROUPED_LABEL.to_string();
    };
    match (doc.node_kind(&parent), doc.node_name(&parent)) {
        (Some(kind), Some(name)) => container_label(kind, &name),
        _ => UNGROUPED_LABEL.to_string(),
    }
}

/// Summarize the current selection: selected texts directly, else all text
/// descendants of selected frames, grouped by the immediate enclosing
/// container's label. Groups come back sorted alphabetically by label; an
/// empty result means "nothing matched".
pub fn summarize(doc: &impl DocumentTree) -> Vec<ContainerData> {
    let selection = doc.selection();

    let mut matched: Vec<NodeId> = selection
        .iter()
        .filter(|id| doc.node_kind(id) == Some(NodeKind::Text))
        .cloned()
        .collect();

    if matched.is_empty() {
        for id in &selection {
            if doc.node_kind(id) == Some(NodeKind::Frame) {
                matched.extend(doc.find_text_descendants(id));
            }
        }
    }

    let mut groups: BTreeMap<String, Vec<TextNodeInfo>> = BTreeMap::new();
    for id in matched {
        let label = label_of_parent(doc, &id);
        let info = TextNodeInfo {
            text: doc.characters(&id).unwrap_or_default(),
            font: doc.font_of(&id).map(|f| f.family).unwrap_or_default(),
            id,
        };
        groups.entry(label).or_default().push(info);
    }

    groups
        .into_iter()
        .map(|(frame_name, texts)| ContainerData { frame_name, texts })
        .collect()
}
