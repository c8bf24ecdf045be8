use super::node::{Node, NodeId, NodeKind};
use cssparser::{Parser, ParserInput, Token};

/// A page stored in arena format.
///
/// Node 0 is always the document node. Nodes removed from the tree stay in
/// the arena (detached) so previously handed-out ids remain valid.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeKind::Document)],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Number of nodes in the arena, detached ones included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::new(kind));
        id
    }

    // ---------------------------------------------------------------
    // Construction
    // ---------------------------------------------------------------

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(NodeKind::Element {
            tag: tag.to_ascii_lowercase(),
            attrs: Vec::new(),
        })
    }

    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(NodeKind::Text(text.to_string()))
    }

    /// Shallow copy of an element (tag and attributes, no children).
    pub fn clone_node(&mut self, id: NodeId) -> Option<NodeId> {
        let kind = self.node(id)?.kind.clone();
        match kind {
            NodeKind::Document => None,
            kind => Some(self.push(kind)),
        }
    }

    // ---------------------------------------------------------------
    // Inspection
    // ---------------------------------------------------------------

    pub fn kind(&self, id: NodeId) -> Option<&NodeKind> {
        self.node(id).map(|n| &n.kind)
    }

    pub fn is_element(&self, id: NodeId) -> bool {
        matches!(self.kind(id), Some(NodeKind::Element { .. }))
    }

    pub fn tag(&self, id: NodeId) -> Option<&str> {
        match self.kind(id)? {
            NodeKind::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    pub fn text(&self, id: NodeId) -> Option<&str> {
        match self.kind(id)? {
            NodeKind::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id)?.parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.children(id).first().copied()
    }

    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.children(id).last().copied()
    }

    /// Strict ancestors, nearest first, ending at the document node.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            doc: self,
            next: self.parent(id),
        }
    }

    /// Strict descendants in document (pre-)order.
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        let mut stack: Vec<NodeId> = self.children(id).to_vec();
        stack.reverse();
        Descendants { doc: self, stack }
    }

    pub fn is_ancestor_of(&self, ancestor: NodeId, id: NodeId) -> bool {
        self.ancestors(id).any(|a| a == ancestor)
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self, id: NodeId) -> String {
        if let Some(text) = self.text(id) {
            return text.to_string();
        }
        self.descendants(id)
            .filter_map(|d| self.text(d))
            .collect::<String>()
    }

    // ---------------------------------------------------------------
    // Tree mutation
    // ---------------------------------------------------------------

    /// Detach `id` from its current parent, if any.
    pub fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.parent(id) else {
            return;
        };
        if let Some(p) = self.node_mut(parent) {
            p.children.retain(|c| *c != id);
        }
        if let Some(n) = self.node_mut(id) {
            n.parent = None;
        }
    }

    fn can_attach(&self, parent: NodeId, child: NodeId) -> bool {
        let parent_ok = self.node(parent).is_some_and(|n| n.can_have_children());
        let child_ok = child != NodeId::ROOT && self.contains(child);
        parent_ok && child_ok && child != parent && !self.is_ancestor_of(child, parent)
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if !self.can_attach(parent, child) {
            return;
        }
        self.detach(child);
        if let Some(p) = self.node_mut(parent) {
            p.children.push(child);
        }
        if let Some(c) = self.node_mut(child) {
            c.parent = Some(parent);
        }
    }

    /// Insert `child` into `parent` before `reference`. Falls back to
    /// appending when `reference` is not a child of `parent`.
    pub fn insert_before(&mut self, parent: NodeId, child: NodeId, reference: NodeId) {
        if !self.can_attach(parent, child) {
            return;
        }
        self.detach(child);
        let Some(p) = self.node_mut(parent) else {
            return;
        };
        match p.children.iter().position(|c| *c == reference) {
            Some(pos) => p.children.insert(pos, child),
            None => p.children.push(child),
        }
        if let Some(c) = self.node_mut(child) {
            c.parent = Some(parent);
        }
    }

    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) {
        if self.parent(child) == Some(parent) {
            self.detach(child);
        }
    }

    /// Drop every node created at or after `len`.
    ///
    /// Refused (returns `false`) when one of those nodes still hangs below an
    /// older node, so ids handed out before `len` never dangle.
    pub fn truncate(&mut self, len: usize) -> bool {
        if len == 0 || len >= self.nodes.len() {
            return false;
        }
        let attached = self.nodes[len..]
            .iter()
            .any(|n| n.parent.is_some_and(|p| p.index() < len));
        if attached {
            return false;
        }
        self.nodes.truncate(len);
        true
    }

    // ---------------------------------------------------------------
    // Attributes
    // ---------------------------------------------------------------

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.node(id)?
            .attrs()?
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_attr(&self, id: NodeId, name: &str) -> bool {
        self.attr(id, name).is_some()
    }

    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) {
        let Some(attrs) = self.node_mut(id).and_then(|n| n.attrs_mut()) else {
            return;
        };
        match attrs.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value.to_string(),
            None => attrs.push((name.to_string(), value.to_string())),
        }
    }

    pub fn remove_attr(&mut self, id: NodeId, name: &str) {
        if let Some(attrs) = self.node_mut(id).and_then(|n| n.attrs_mut()) {
            attrs.retain(|(k, _)| k != name);
        }
    }

    // ---------------------------------------------------------------
    // Class flags
    // ---------------------------------------------------------------

    pub fn classes(&self, id: NodeId) -> impl Iterator<Item = &str> + '_ {
        self.attr(id, "class").unwrap_or("").split_whitespace()
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.classes(id).any(|c| c == class)
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if !self.is_element(id) || self.has_class(id, class) {
            return;
        }
        let value = match self.attr(id, "class") {
            Some(existing) if !existing.trim().is_empty() => format!("{} {}", existing.trim(), class),
            _ => class.to_string(),
        };
        self.set_attr(id, "class", &value);
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        if !self.has_class(id, class) {
            return;
        }
        let value = self
            .classes(id)
            .filter(|c| *c != class)
            .collect::<Vec<_>>()
            .join(" ");
        self.set_attr(id, "class", &value);
    }

    // ---------------------------------------------------------------
    // Inline style
    // ---------------------------------------------------------------

    fn style_decls(&self, id: NodeId) -> Vec<(String, String)> {
        match self.attr(id, "style") {
            Some(text) => parse_declarations(text),
            None => Vec::new(),
        }
    }

    pub fn style(&self, id: NodeId, property: &str) -> Option<String> {
        self.style_decls(id)
            .into_iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value)
    }

    /// Set an inline style property; an empty value removes it.
    pub fn set_style(&mut self, id: NodeId, property: &str, value: &str) {
        if !self.is_element(id) {
            return;
        }
        let mut decls = self.style_decls(id);
        decls.retain(|(name, _)| name != property);
        if !value.is_empty() {
            decls.push((property.to_string(), value.to_string()));
        }
        if decls.is_empty() {
            self.remove_attr(id, "style");
        } else {
            let text = decls
                .iter()
                .map(|(name, value)| format!("{}: {}", name, value))
                .collect::<Vec<_>>()
                .join("; ");
            self.set_attr(id, "style", &text);
        }
    }

    // ---------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------

    pub fn element_by_id(&self, value: &str) -> Option<NodeId> {
        self.descendants(self.root())
            .find(|id| self.attr(*id, "id") == Some(value))
    }

    /// Elements strictly inside `scope` carrying `class`, in document order.
    pub fn elements_with_class<'a>(
        &'a self,
        scope: NodeId,
        class: &'a str,
    ) -> impl Iterator<Item = NodeId> + 'a {
        self.descendants(scope)
            .filter(move |id| self.has_class(*id, class))
    }

    /// Element children of `parent` with tag `tag` and class `class`.
    pub fn child_elements(&self, parent: NodeId, tag: &str, class: &str) -> Vec<NodeId> {
        self.children(parent)
            .iter()
            .copied()
            .filter(|c| self.tag(*c) == Some(tag) && self.has_class(*c, class))
            .collect()
    }
}

/// Parse an inline `style` attribute into `(property, value)` pairs.
///
/// Malformed declarations are skipped up to the next `;`.
fn parse_declarations(text: &str) -> Vec<(String, String)> {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    let mut decls = Vec::new();

    while !parser.is_exhausted() {
        parser.skip_whitespace();
        if parser.is_exhausted() {
            break;
        }

        let name = parser.try_parse(|p| p.expect_ident().map(|n| n.to_ascii_lowercase()));
        let Ok(name) = name else {
            skip_declaration(&mut parser);
            continue;
        };
        if parser.try_parse(|p| p.expect_colon()).is_err() {
            skip_declaration(&mut parser);
            continue;
        }

        let start = parser.position();
        skip_declaration(&mut parser);
        let value = parser
            .slice_from(start)
            .trim()
            .trim_end_matches(';')
            .trim_end();
        decls.push((name, value.to_string()));
    }

    decls
}

/// Consume tokens through the next top-level `;`.
fn skip_declaration(parser: &mut Parser<'_, '_>) {
    loop {
        match parser.next() {
            Ok(Token::Semicolon) | Err(_) => break,
            Ok(_) => {}
        }
    }
}

/// Iterator over strict ancestors, nearest first.
pub struct Ancestors<'a> {
    doc: &'a Document,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.next?;
        self.next = self.doc.parent(id);
        Some(id)
    }
}

/// Pre-order iterator over strict descendants.
pub struct Descendants<'a> {
    doc: &'a Document,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.doc.children(id).iter().rev().copied());
        Some(id)
    }
}
