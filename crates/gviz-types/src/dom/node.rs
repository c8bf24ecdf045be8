use serde::Serialize;
use std::fmt;

/// Index of a node in a [`Document`](super::Document) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// The document node every arena starts with.
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Element {
        /// Lowercase tag name
        tag: String,
        /// Attributes in source order
        attrs: Vec<(String, String)>,
    },
    Text(String),
}

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn can_have_children(&self) -> bool {
        matches!(self.kind, NodeKind::Document | NodeKind::Element { .. })
    }

    pub fn attrs(&self) -> Option<&[(String, String)]> {
        match &self.kind {
            NodeKind::Element { attrs, .. } => Some(attrs),
            _ => None,
        }
    }

    pub fn attrs_mut(&mut self) -> Option<&mut Vec<(String, String)>> {
        match &mut self.kind {
            NodeKind::Element { attrs, .. } => Some(attrs),
            _ => None,
        }
    }
}
