//! HTML loading.
//!
//! The page is parsed with html5ever and copied into the arena document.
//! Only elements and text survive; comments, doctypes and processing
//! instructions have no bearing on layout.

use gviz_types::{Document, NodeId};
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use std::path::Path;

use crate::Result;

/// Parse an HTML string into a [`Document`].
///
/// Parsing never fails: malformed markup is repaired the way a browser
/// would repair it (implied `html`, `head`, `body` and `tbody` included).
pub fn parse_html(input: &str) -> Document {
    let dom = parse_document(RcDom::default(), Default::default()).one(input);

    let mut doc = Document::new();
    let root = doc.root();

    // Explicit stack; generated pages nest deeply.
    let mut stack: Vec<(Handle, NodeId)> = dom
        .document
        .children
        .borrow()
        .iter()
        .rev()
        .map(|child| (child.clone(), root))
        .collect();

    while let Some((handle, parent)) = stack.pop() {
        let id = match &handle.data {
            NodeData::Element { name, attrs, .. } => {
                let el = doc.create_element(&name.local);
                for attr in attrs.borrow().iter() {
                    doc.set_attr(el, &attr.name.local, &attr.value);
                }
                el
            }
            NodeData::Text { contents } => doc.create_text(&contents.borrow()),
            _ => continue,
        };
        doc.append_child(parent, id);

        for child in handle.children.borrow().iter().rev() {
            stack.push((child.clone(), id));
        }
    }

    doc
}

/// Read and parse the HTML file at `path`.
pub fn load_html(path: &Path) -> Result<Document> {
    let input = std::fs::read_to_string(path)?;
    Ok(parse_html(&input))
}
