//! Page bootstrap and the slideshow host.
//!
//! A [`Page`] owns the parsed document and the layout it is measured with.
//! [`Page::init`] runs the one-time setup: the grammar table is abbreviated,
//! long alternations are checked for wrapping, and the parse log becomes a
//! slideshow showing its first entry. Entry passes run lazily as entries
//! are first shown.

use crate::html;
use crate::render::TextLayout;
use crate::{Error, Result};
use gviz_engine::{
    Abbreviation, LineFit, NavCommand, Navigator, RegionId, SlideHost, abbreviate,
    mark_multiline_ors,
};
use gviz_types::classes::{
    ABBREVIATED, CURRENT, DIARESIS, ENTRY, GRAMMAR_ID, OVERFLOWS, PARSE_LOG_ID, SLIDESHOW,
};
use gviz_types::{Document, NodeId};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, info_span};

/// One region of an abbreviation pass, as reported to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionReport {
    pub id: RegionId,
    pub parent: Option<RegionId>,
    pub children: Vec<RegionId>,
    pub depth: usize,
    /// Visible text of the region with nested ellipses left out
    pub text: String,
    pub abbreviated: bool,
    pub overflows: bool,
}

pub struct Page {
    doc: Document,
    layout: TextLayout,
    entries: Vec<NodeId>,
    navigator: Navigator,
    counter: String,
    grammar: Option<Abbreviation>,
    entry_passes: BTreeMap<usize, Abbreviation>,
    multiline: usize,
    initialized: bool,
}

impl Page {
    pub fn new(doc: Document, layout: TextLayout) -> Self {
        let navigator = Navigator::new(0);
        let counter = navigator.counter();
        Self {
            doc,
            layout,
            entries: Vec::new(),
            navigator,
            counter,
            grammar: None,
            entry_passes: BTreeMap::new(),
            multiline: 0,
            initialized: false,
        }
    }

    pub fn from_html(input: &str, layout: TextLayout) -> Self {
        Self::new(html::parse_html(input), layout)
    }

    pub fn load(path: &Path, layout: TextLayout) -> Result<Self> {
        let doc = html::load_html(path)?;
        debug!(path = %path.display(), nodes = doc.len(), "loaded page");
        Ok(Self::new(doc, layout))
    }

    /// Run the one-time page setup. Calling it again does nothing.
    pub fn init(&mut self) {
        if self.initialized {
            return;
        }
        let _span = info_span!("page_init").entered();
        let started = Instant::now();
        let root = self.doc.root();

        if let Some(grammar) = self.doc.element_by_id(GRAMMAR_ID) {
            let step = Instant::now();
            let mut oracle = LineFit::new(&self.layout);
            let pass = abbreviate(&mut self.doc, grammar, Some(&mut oracle));
            debug!(
                regions = pass.tree.len(),
                abbreviated = pass.outcome.abbreviated.len(),
                elapsed_ms = step.elapsed().as_secs_f64() * 1000.0,
                "grammar abbreviated"
            );
            self.grammar = Some(pass);
        } else {
            debug!("page has no grammar table");
        }

        {
            let _step_span = info_span!("multiline").entered();
            let step = Instant::now();
            let mut oracle = LineFit::new(&self.layout);
            self.multiline = mark_multiline_ors(&mut self.doc, root, &mut oracle);
            debug!(
                marked = self.multiline,
                elapsed_ms = step.elapsed().as_secs_f64() * 1000.0,
                "alternations measured"
            );
        }

        if let Some(log) = self.doc.element_by_id(PARSE_LOG_ID) {
            self.entries = self.doc.child_elements(log, "li", ENTRY);
            self.doc.add_class(log, SLIDESHOW);
        }
        self.navigator = Navigator::new(self.entries.len());
        self.entry_passes.clear();
        self.initialized = true;
        self.set_current(0);

        info!(
            entries = self.entries.len(),
            multiline = self.multiline,
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            "page initialized"
        );
    }

    pub fn apply(&mut self, command: NavCommand) {
        self.drive(|navigator, host| navigator.apply(command, host));
    }

    /// Show entry `index` (0-based, clamped).
    pub fn set_current(&mut self, index: usize) {
        self.drive(|navigator, host| navigator.set_current(index, host));
    }

    fn drive(&mut self, step: impl FnOnce(&mut Navigator, &mut EntryHost<'_>)) {
        let Page {
            doc,
            layout,
            entries,
            navigator,
            counter,
            entry_passes,
            ..
        } = self;
        let mut host = EntryHost {
            doc,
            layout: &*layout,
            entries: entries.as_slice(),
            counter,
            passes: entry_passes,
        };
        step(navigator, &mut host);
    }

    /// `"{n}/{total}"`, 1-based, `"0/{total}"` before any entry is shown.
    pub fn counter(&self) -> &str {
        &self.counter
    }

    pub fn current_entry(&self) -> Option<usize> {
        self.navigator.current()
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn multiline_count(&self) -> usize {
        self.multiline
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn layout(&self) -> &TextLayout {
        &self.layout
    }

    pub fn render_lines(&self) -> Vec<String> {
        self.layout.render_lines(&self.doc, self.doc.root())
    }

    pub fn grammar_abbreviation(&self) -> Option<&Abbreviation> {
        self.grammar.as_ref()
    }

    pub fn entry_abbreviation(&self, entry: usize) -> Option<&Abbreviation> {
        self.entry_passes.get(&entry)
    }

    /// Regions of the grammar table, or of `entry` when given.
    pub fn region_report(&self, entry: Option<usize>) -> Result<Vec<RegionReport>> {
        let pass = match entry {
            None => self.grammar.as_ref(),
            Some(i) => Some(self.entry_passes.get(&i).ok_or_else(|| {
                Error::MissingElement(format!("no abbreviation pass for entry {}", i + 1))
            })?),
        };
        Ok(pass.map(|p| self.report(p)).unwrap_or_default())
    }

    fn report(&self, pass: &Abbreviation) -> Vec<RegionReport> {
        pass.tree
            .iter()
            .map(|(id, region)| RegionReport {
                id,
                parent: region.parent,
                children: region.children.clone(),
                depth: region.depth,
                text: region_text(&self.doc, region.element),
                abbreviated: self.doc.has_class(region.wrapper, ABBREVIATED),
                overflows: self.doc.has_class(region.element, OVERFLOWS),
            })
            .collect()
    }
}

fn region_text(doc: &Document, el: NodeId) -> String {
    let mut text = String::new();
    for id in doc.descendants(el) {
        let in_ellipsis = doc
            .ancestors(id)
            .take_while(|a| *a != el)
            .any(|a| doc.has_class(a, DIARESIS));
        if !in_ellipsis && let Some(t) = doc.text(id) {
            text.push_str(t);
        }
    }
    text.split_ascii_whitespace().collect::<Vec<_>>().join(" ")
}

/// Applies slideshow transitions to the document.
struct EntryHost<'p> {
    doc: &'p mut Document,
    layout: &'p TextLayout,
    entries: &'p [NodeId],
    counter: &'p mut String,
    passes: &'p mut BTreeMap<usize, Abbreviation>,
}

impl SlideHost for EntryHost<'_> {
    fn deactivate(&mut self, entry: usize) {
        if let Some(&el) = self.entries.get(entry) {
            self.doc.remove_class(el, CURRENT);
        }
    }

    fn activate(&mut self, entry: usize) {
        if let Some(&el) = self.entries.get(entry) {
            self.doc.add_class(el, CURRENT);
        }
    }

    fn show_counter(&mut self, counter: &str) {
        self.counter.clear();
        self.counter.push_str(counter);
    }

    fn abbreviate(&mut self, entry: usize) {
        let Some(&el) = self.entries.get(entry) else {
            return;
        };
        let _span = info_span!("entry", entry).entered();
        let mut oracle = LineFit::new(self.layout);
        let pass = abbreviate(self.doc, el, Some(&mut oracle));
        self.passes.insert(entry, pass);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gviz_testing::fixtures::{SAMPLE_PAGE, page_with_entries};

    fn page(html: &str, width: u16) -> Page {
        let mut page = Page::from_html(html, TextLayout::with_width(width));
        page.init();
        page
    }

    #[test]
    fn test_wide_page_is_not_abbreviated() {
        let page = page(SAMPLE_PAGE, 100);
        let grammar = page.grammar_abbreviation().unwrap();

        assert_eq!(grammar.tree.len(), 3);
        assert!(grammar.outcome.is_empty());
        assert_eq!(page.counter(), "1/3");
        assert_eq!(page.multiline_count(), 0);
    }

    #[test]
    fn test_narrow_grammar_collapses_children() {
        let page = page(SAMPLE_PAGE, 40);
        let report = page.region_report(None).unwrap();

        assert_eq!(report.len(), 3);
        assert!(report[0].overflows);
        assert!(!report[0].abbreviated);
        assert!(report[1].abbreviated && report[2].abbreviated);
        assert_eq!(
            report[0].text,
            "Statement LongIdentifierNumberOne then LongIdentifierNumberTwo end"
        );
        assert_eq!(page.render_lines()[0], "Stmt ::== Statement \u{2026} then \u{2026} end");
    }

    #[test]
    fn test_only_current_entry_is_rendered() {
        let mut page = page(SAMPLE_PAGE, 100);
        let lines = page.render_lines();
        assert!(lines.contains(&"  entered Stmt".to_string()));
        assert!(!lines.iter().any(|l| l.contains("failed")));

        page.apply(NavCommand::Last);
        let lines = page.render_lines();
        assert_eq!(page.counter(), "3/3");
        assert!(lines.contains(&"  failed Num".to_string()));
        assert!(!lines.iter().any(|l| l.contains("entered")));
    }

    #[test]
    fn test_entries_abbreviated_lazily() {
        let mut page = page(SAMPLE_PAGE, 40);
        assert!(page.entry_abbreviation(0).is_some());
        assert!(page.entry_abbreviation(1).is_none());
        assert!(page.region_report(Some(1)).is_err());

        page.apply(NavCommand::Forward1);
        let pass = page.entry_abbreviation(1).unwrap();
        assert_eq!(pass.outcome.abbreviated.len(), 2);
        assert!(
            page.render_lines()
                .contains(&"  matched Statement \u{2026} then \u{2026}".to_string())
        );
    }

    #[test]
    fn test_init_is_one_shot() {
        let mut page = page(SAMPLE_PAGE, 40);
        page.apply(NavCommand::Last);
        let nodes = page.document().len();

        page.init();
        assert_eq!(page.current_entry(), Some(2));
        assert_eq!(page.document().len(), nodes);
    }

    #[test]
    fn test_page_without_log() {
        let page = page("<p>nothing here</p>", 40);
        assert_eq!(page.counter(), "0/0");
        assert_eq!(page.current_entry(), None);
        assert!(page.grammar_abbreviation().is_none());
        assert_eq!(page.render_lines(), vec!["nothing here"]);
    }

    #[test]
    fn test_entries_are_direct_log_children() {
        let html = concat!(
            "<ul id=\"parse-log\">",
            "<li class=\"entry\">one<ul><li class=\"entry\">nested</li></ul></li>",
            "<li>note</li>",
            "<li class=\"entry\">two</li>",
            "</ul>",
            "<ul><li class=\"entry\">elsewhere</li></ul>",
        );
        let page = page(html, 40);

        assert_eq!(page.entry_count(), 2);
        assert_eq!(page.counter(), "1/2");
        let log = page.document().element_by_id("parse-log").unwrap();
        assert!(page.document().has_class(log, SLIDESHOW));
    }

    #[test]
    fn test_narrow_alternation_goes_multiline() {
        let page = page(SAMPLE_PAGE, 10);
        assert_eq!(page.multiline_count(), 1);

        let lines = page.render_lines();
        assert!(lines.contains(&"\"0\" |".to_string()));
        assert!(lines.contains(&"\"2\"".to_string()));
    }

    #[test]
    fn test_many_entries_clamp() {
        let mut page = page(&page_with_entries(25), 80);
        page.apply(NavCommand::Forward10);
        page.apply(NavCommand::Forward10);
        page.apply(NavCommand::Forward10);
        assert_eq!(page.counter(), "25/25");

        page.apply(NavCommand::Back10);
        assert_eq!(page.counter(), "15/25");
    }
}
