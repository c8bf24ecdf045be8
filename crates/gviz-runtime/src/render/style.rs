//! Display rules for the terminal layout.
//!
//! This is the stylesheet of the page, expressed as code: which elements
//! are hidden, which start a block and which flow inline.

use gviz_types::classes::{
    ABBREVIATED, ABV, ABV_WRAPPER, CURRENT, DIARESIS, ENTRY, MULTILINE, OR, SLIDESHOW,
};
use gviz_types::{Document, NodeId, NodeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    None,
    Block,
    Inline,
    /// Table cell: inline, separated from the previous cell by a space
    Cell,
    /// Line break
    Break,
}

const HIDDEN_TAGS: &[&str] = &["head", "script", "style", "title", "template"];

const BLOCK_TAGS: &[&str] = &[
    "html", "body", "div", "p", "ul", "ol", "li", "table", "thead", "tbody", "tfoot", "tr", "h1",
    "h2", "h3", "h4", "h5", "h6", "pre", "section",
];

pub fn display(doc: &Document, id: NodeId) -> Display {
    let tag = match doc.kind(id) {
        Some(NodeKind::Element { tag, .. }) => tag.as_str(),
        Some(NodeKind::Text(_)) => return Display::Inline,
        Some(NodeKind::Document) => return Display::Block,
        None => return Display::None,
    };

    if HIDDEN_TAGS.contains(&tag) || hidden_by_class(doc, id) {
        return Display::None;
    }
    if tag == "br" {
        return Display::Break;
    }
    if doc
        .style(id, "float")
        .is_some_and(|f| f == "left" || f == "right")
    {
        return Display::Block;
    }
    if tag == "td" || tag == "th" {
        return Display::Cell;
    }
    if BLOCK_TAGS.contains(&tag) {
        return Display::Block;
    }
    Display::Inline
}

fn hidden_by_class(doc: &Document, id: NodeId) -> bool {
    let parent = doc.parent(id);
    let parent_has = |class: &str| parent.is_some_and(|p| doc.has_class(p, class));

    if doc.has_class(id, DIARESIS) {
        return !parent_has(ABBREVIATED);
    }
    if doc.has_class(id, ABV) && parent_has(ABV_WRAPPER) && parent_has(ABBREVIATED) {
        return true;
    }
    doc.tag(id) == Some("li")
        && doc.has_class(id, ENTRY)
        && !doc.has_class(id, CURRENT)
        && parent_has(SLIDESHOW)
}

/// Whether `id` and all of its ancestors are displayed.
pub fn is_rendered(doc: &Document, id: NodeId) -> bool {
    doc.contains(id)
        && display(doc, id) != Display::None
        && doc
            .ancestors(id)
            .all(|a| display(doc, a) != Display::None)
}

/// Children of a multiline alternation each start a new line.
pub fn starts_own_line(doc: &Document, id: NodeId) -> bool {
    doc.is_element(id)
        && doc
            .parent(id)
            .is_some_and(|p| doc.has_class(p, OR) && doc.has_class(p, MULTILINE))
}

/// Nearest ancestor-or-self laid out as a block.
pub fn containing_block(doc: &Document, id: NodeId) -> NodeId {
    if display(doc, id) == Display::Block {
        return id;
    }
    doc.ancestors(id)
        .find(|a| display(doc, *a) == Display::Block)
        .unwrap_or(doc.root())
}

/// Columns of list indentation `id` starts at, from enclosing list items.
pub fn list_indent(doc: &Document, id: NodeId) -> usize {
    2 * doc
        .ancestors(id)
        .filter(|a| doc.tag(*a) == Some("li"))
        .count()
}
