use std::collections::BTreeMap;

/// Index into the document's node arena.
pub type NodeId = usize;

#[derive(Debug, Clone)]
pub enum NodeKind {
    Element {
        tag: String,
        attributes: BTreeMap<String, String>,
    },
    Text(String),
}

#[derive(Debug, Clone)]
pub struct Node {
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

/// A parsed HTML document: a flat node arena plus an ordered root list.
///
/// This is the only surface the rest of the engine sees. Nothing
/// downstream of the parser knows about HTML syntax, so the whole
/// pipeline runs identically headless and in tests.
#[derive(Debug, Clone)]
pub struct DocumentModel {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
}

impl DocumentModel {
    pub fn empty() -> Self {
        DocumentModel {
            nodes: Vec::new(),
            roots: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].parent
    }

    /// Tag name if the node is an element.
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        match &self.nodes[id].kind {
            NodeKind::Element { tag, .. } => Some(tag.as_str()),
            NodeKind::Text(_) => None,
        }
    }

    /// Attribute value if the node is an element carrying the attribute.
    /// Valueless attributes (`required`, `multiple`) resolve to `""`.
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        match &self.nodes[id].kind {
            NodeKind::Element { attributes, .. } => attributes.get(name).map(|v| v.as_str()),
            NodeKind::Text(_) => None,
        }
    }

    pub fn has_attr(&self, id: NodeId, name: &str) -> bool {
        self.attr(id, name).is_some()
    }

    pub fn attributes(&self, id: NodeId) -> BTreeMap<String, String> {
        match &self.nodes[id].kind {
            NodeKind::Element { attributes, .. } => attributes.clone(),
            NodeKind::Text(_) => BTreeMap::new(),
        }
    }

    /// All element nodes in document order (depth-first).
    pub fn elements(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        for &root in &self.roots {
            self.collect_elements(root, &mut out);
        }
        out
    }

    fn collect_elements(&self, id: NodeId, out: &mut Vec<NodeId>) {
        if matches!(self.nodes[id].kind, NodeKind::Element { .. }) {
            out.push(id);
        }
        for &child in &self.nodes[id].children {
            self.collect_elements(child, out);
        }
    }

    /// Descendant element nodes of `id` in document order, excluding `id`.
    pub fn descendant_elements(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        for &child in &self.nodes[id].children {
            self.collect_elements(child, &mut out);
        }
        out
    }

    /// Walk the parent chain looking for an ancestor with the given tag.
    pub fn ancestor_with_tag(&self, id: NodeId, tag: &str) -> Option<NodeId> {
        let mut current = self.nodes[id].parent;
        while let Some(p) = current {
            if self.tag(p) == Some(tag) {
                return Some(p);
            }
            current = self.nodes[p].parent;
        }
        None
    }

    /// Concatenated descendant text with whitespace collapsed.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut pieces = Vec::new();
        self.collect_text(id, &mut pieces);
        pieces
            .join(" ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn collect_text(&self, id: NodeId, out: &mut Vec<String>) {
        match &self.nodes[id].kind {
            NodeKind::Text(text) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    out.push(trimmed.to_string());
                }
            }
            NodeKind::Element { .. } => {
                for &child in &self.nodes[id].children {
                    self.collect_text(child, out);
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Construction (used by the parser only)
    // ------------------------------------------------------------------

    pub(crate) fn push_element(
        &mut self,
        tag: String,
        attributes: BTreeMap<String, String>,
        parent: Option<NodeId>,
    ) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node {
            kind: NodeKind::Element { tag, attributes },
            parent,
            children: Vec::new(),
        });
        self.attach(id, parent);
        id
    }

    pub(crate) fn push_text(&mut self, text: String, parent: Option<NodeId>) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node {
            kind: NodeKind::Text(text),
            parent,
            children: Vec::new(),
        });
        self.attach(id, parent);
        id
    }

    fn attach(&mut self, id: NodeId, parent: Option<NodeId>) {
        match parent {
            Some(p) => self.nodes[p].children.push(id),
            None => self.roots.push(id),
        }
    }
}
