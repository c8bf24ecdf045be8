//! Fixtures for sample pages and hand-built documents.
//!
//! The sample page has the shape of a generated parse log: a `#grammar`
//! table of productions with nested collapsible references, and a
//! `#parse-log` list with one `li.entry` per parser event.

use gviz_types::classes::ABV;
use gviz_types::{Document, NodeId};

/// A three-production grammar and three log entries.
///
/// At 100 columns nothing needs abbreviating. At 40 columns both references
/// in `Stmt` collapse, in the grammar and in the second entry. At 10
/// columns the `Num` alternation no longer fits on one line.
pub const SAMPLE_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Parse log</title></head>
<body>
<table id="grammar" class="grammar">
<tr><th id="def:Stmt" class="def">Stmt</th><th>::==</th><td><span class="seq detail:short abv">Statement <span class="ref detail:tiny abv">LongIdentifierNumberOne</span> then <span class="ref detail:tiny abv">LongIdentifierNumberTwo</span> end</span></td></tr>
<tr><th id="def:Num" class="def">Num</th><th>::==</th><td><span class="or detail:long"><span class="lit">"0"</span> | <span class="lit">"1"</span> | <span class="lit">"2"</span></span></td></tr>
<tr><th id="def:Opt" class="def">Opt</th><th>::==</th><td><span class="or detail:long"><span class="ref">Num</span> | <span class="empty">()</span></span></td></tr>
</table>
<ul id="parse-log">
<li class="entry"><div class="input">0 1</div><div class="event entered">entered <span class="ref detail:short abv">Stmt</span></div></li>
<li class="entry"><div class="input">0 1</div><div class="event matched">matched <span class="seq detail:short abv">Statement <span class="ref detail:tiny abv">LongIdentifierNumberOne</span> then <span class="ref detail:tiny abv">LongIdentifierNumberTwo</span></span></div></li>
<li class="entry"><div class="input">1</div><div class="event failed">failed <span class="ref detail:short abv">Num</span></div></li>
</ul>
</body>
</html>
"#;

/// A page with `count` short log entries and no grammar table.
pub fn page_with_entries(count: usize) -> String {
    let mut html = String::from("<html><body><ul id=\"parse-log\">");
    for i in 1..=count {
        html.push_str(&format!(
            "<li class=\"entry\"><div class=\"event\">step {} <span class=\"ref abv\">R{}</span></div></li>",
            i, i
        ));
    }
    html.push_str("</ul></body></html>");
    html
}

/// Append a `span.abv` holding `text` to `parent`.
pub fn collapsible(doc: &mut Document, parent: NodeId, text: &str) -> NodeId {
    let el = element(doc, parent, "span");
    doc.add_class(el, ABV);
    let t = doc.create_text(text);
    doc.append_child(el, t);
    el
}

/// Append a plain element to `parent`.
pub fn element(doc: &mut Document, parent: NodeId, tag: &str) -> NodeId {
    let el = doc.create_element(tag);
    doc.append_child(parent, el);
    el
}

/// Three nested regions A > B > C inside a `div` container, with
/// non-collapsible elements between each level.
pub struct NestedRegions {
    pub doc: Document,
    pub container: NodeId,
    pub a: NodeId,
    pub b: NodeId,
    pub c: NodeId,
}

pub fn nested_regions() -> NestedRegions {
    let mut doc = Document::new();
    let root = doc.root();
    let container = element(&mut doc, root, "div");
    let a = collapsible(&mut doc, container, "a ");
    let bold = element(&mut doc, a, "b");
    let b = collapsible(&mut doc, bold, "b ");
    let italic = element(&mut doc, b, "i");
    let em = element(&mut doc, italic, "em");
    let c = collapsible(&mut doc, em, "c");

    NestedRegions {
        doc,
        container,
        a,
        b,
        c,
    }
}
