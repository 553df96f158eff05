use std::collections::{HashMap, HashSet};

use super::{DocumentTree, FontCatalog, FontName, HostError, NodeId, NodeKind, Shell};

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    name: String,
    characters: String,
    font: Option<FontName>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// In-memory stand-in for the host runtime: one page, a mutable node tree,
/// a font registry, and recorded notifications/reloads. Backs the demo
/// binary and every test.
pub struct InMemoryHost {
    nodes: HashMap<NodeId, NodeData>,
    page: NodeId,
    selection: Vec<NodeId>,
    catalog: Vec<FontName>,
    installed: HashSet<(String, String)>,
    catalog_down: bool,
    pub notifications: Vec<String>,
    pub reloads: usize,
    next_id: u32,
}

impl InMemoryHost {
    pub fn new(page_name: &str) -> Self {
        let page = NodeId::new("0:0");
        let mut nodes = HashMap::new();
        nodes.insert(
            page.clone(),
            NodeData {
                kind: NodeKind::Page,
                name: page_name.to_string(),
                characters: String::new(),
                font: None,
                parent: None,
                children: Vec::new(),
            },
        );
        Self {
            nodes,
            page,
            selection: Vec::new(),
            catalog: Vec::new(),
            installed: HashSet::new(),
            catalog_down: false,
            notifications: Vec::new(),
            reloads: 0,
            next_id: 0,
        }
    }

    pub fn page(&self) -> NodeId {
        self.page.clone()
    }

    fn insert(&mut self, parent: &NodeId, data: NodeData) -> NodeId {
        self.next_id += 1;
        let id = NodeId::new(format!("1:{}", self.next_id));
        self.nodes.insert(id.clone(), data);
        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(id.clone());
        }
        id
    }

    fn add_container(&mut self, parent: &NodeId, kind: NodeKind, name: &str) -> NodeId {
        let parent_id = parent.clone();
        self.insert(
            parent,
            NodeData {
                kind,
                name: name.to_string(),
                characters: String::new(),
                font: None,
                parent: Some(parent_id),
                children: Vec::new(),
            },
        )
    }

    pub fn add_frame(&mut self, parent: &NodeId, name: &str) -> NodeId {
        self.add_container(parent, NodeKind::Frame, name)
    }

    pub fn add_group(&mut self, parent: &NodeId, name: &str) -> NodeId {
        self.add_container(parent, NodeKind::Group, name)
    }

    /// A container the grouping rule has no label for (component, shape...).
    pub fn add_other(&mut self, parent: &NodeId, name: &str) -> NodeId {
        self.add_container(parent, NodeKind::Other, name)
    }

    pub fn add_text(&mut self, parent: &NodeId, characters: &str, font: FontName) -> NodeId {
        let parent_id = parent.clone();
        self.insert(
            parent,
            NodeData {
                kind: NodeKind::Text,
                name: characters.to_string(),
                characters: characters.to_string(),
                font: Some(font),
                parent: Some(parent_id),
                children: Vec::new(),
            },
        )
    }

    pub fn remove_node(&mut self, id: &NodeId) {
        if let Some(data) = self.nodes.remove(id) {
            if let Some(parent) = data.parent {
                if let Some(p) = self.nodes.get_mut(&parent) {
                    p.children.retain(|c| c != id);
                }
            }
        }
    }

    pub fn set_selection(&mut self, ids: &[NodeId]) {
        self.selection = ids.to_vec();
    }

    /// Register a font as both listed in the catalog and loadable.
    pub fn install_font(&mut self, family: &str, style: &str) {
        self.catalog.push(FontName::new(family, style));
        self.installed
            .insert((family.to_string(), style.to_string()));
    }

    /// Make catalog fetches fail from now on.
    pub fn fail_catalog(&mut self) {
        self.catalog_down = true;
    }

    fn collect_texts(&self, id: &NodeId, out: &mut Vec<NodeId>) {
        if let Some(data) = self.nodes.get(id) {
            for child in &data.children {
                if let Some(c) = self.nodes.get(child) {
                    if c.kind == NodeKind::Text {
                        out.push(child.clone());
                    }
                    self.collect_texts(child, out);
                }
            }
        }
    }
}

impl DocumentTree for InMemoryHost {
    fn selection(&self) -> Vec<NodeId> {
        self.selection.clone()
    }

    fn current_page(&self) -> NodeId {
        self.page.clone()
    }

    fn node_kind(&self, id: &NodeId) -> Option<NodeKind> {
        self.nodes.get(id).map(|n| n.kind)
    }

    fn node_name(&self, id: &NodeId) -> Option<String> {
        self.nodes.get(id).map(|n| n.name.clone())
    }

    fn parent(&self, id: &NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|n| n.parent.clone())
    }

    fn characters(&self, id: &NodeId) -> Option<String> {
        self.nodes.get(id).map(|n| n.characters.clone())
    }

    fn font_of(&self, id: &NodeId) -> Option<FontName> {
        self.nodes.get(id).and_then(|n| n.font.clone())
    }

    fn set_font(&mut self, id: &NodeId, font: &FontName) {
        if let Some(n) = self.nodes.get_mut(id) {
            n.font = Some(font.clone());
        }
    }

    fn find_text_descendants(&self, root: &NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_texts(root, &mut out);
        out
    }
}

impl FontCatalog for InMemoryHost {
    fn list_available(&self) -> Result<Vec<FontName>, HostError> {
        if self.catalog_down {
            return Err(HostError::CatalogUnavailable(
                "registry did not respond".to_string(),
            ));
        }
        Ok(self.catalog.clone())
    }

    fn load_font(&mut self, font: &FontName) -> Result<(), HostError> {
        let key = (font.family.clone(), font.style.clone());
        if self.installed.contains(&key) {
            Ok(())
        } else {
            Err(HostError::FontUnavailable {
                family: font.family.clone(),
                style: font.style.clone(),
            })
        }
    }
}

impl Shell for InMemoryHost {
    fn notify(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }

    fn reload(&mut self) {
        self.reloads += 1;
    }
}
