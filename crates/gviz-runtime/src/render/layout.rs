//! Text-flow layout for a terminal.
//!
//! Blocks stack vertically, inline content flows into lines of at most
//! `width` columns and wraps between words. Heights are rows multiplied by a
//! fixed row height, which is what the fit oracle sees as pixels.

use super::style::{self, Display};
use crate::config::{DEFAULT_ROW_HEIGHT, DEFAULT_WIDTH, LayoutConfig};
use gviz_engine::LayoutEngine;
use gviz_types::{Document, NodeId};
use std::collections::HashMap;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextLayout {
    width: usize,
    row_height: u32,
    declare_line_height: bool,
}

impl TextLayout {
    pub fn new(width: u16, config: &LayoutConfig) -> Self {
        Self {
            width: usize::from(width.max(1)),
            row_height: config.row_height,
            declare_line_height: config.declare_line_height,
        }
    }

    pub fn with_width(width: u16) -> Self {
        Self::new(width, &LayoutConfig::default())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn row_height(&self) -> u32 {
        self.row_height
    }

    /// Lay out `root` as if it were the only content on screen, starting at
    /// the list indentation of its position in the document.
    pub fn flow(&self, doc: &Document, root: NodeId) -> Flowed {
        Flow::new(doc, self.width, style::list_indent(doc, root)).run(root)
    }

    pub fn render_lines(&self, doc: &Document, root: NodeId) -> Vec<String> {
        self.flow(doc, root).lines
    }
}

impl Default for TextLayout {
    fn default() -> Self {
        Self {
            width: usize::from(DEFAULT_WIDTH),
            row_height: DEFAULT_ROW_HEIGHT,
            declare_line_height: false,
        }
    }
}

impl LayoutEngine for TextLayout {
    fn offset_height(&self, doc: &Document, el: NodeId) -> u32 {
        if !style::is_rendered(doc, el) {
            return 0;
        }
        let block = style::containing_block(doc, el);
        let rows = self.flow(doc, block).rows(el);
        u32::try_from(rows)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.row_height)
    }

    fn line_height(&self, _doc: &Document, _el: NodeId) -> Option<u32> {
        self.declare_line_height.then_some(self.row_height)
    }
}

/// Result of a layout: the lines and the rows each element touched.
#[derive(Debug, Clone, Default)]
pub struct Flowed {
    pub lines: Vec<String>,
    spans: HashMap<NodeId, (usize, usize)>,
}

impl Flowed {
    /// First and last row occupied by `id`.
    pub fn span(&self, id: NodeId) -> Option<(usize, usize)> {
        self.spans.get(&id).copied()
    }

    /// Number of rows occupied by `id`; 0 when it produced no content.
    pub fn rows(&self, id: NodeId) -> usize {
        self.span(id).map_or(0, |(first, last)| last - first + 1)
    }
}

struct Flow<'d> {
    doc: &'d Document,
    width: usize,
    indent: usize,
    /// List marker waiting for the first content line of an item
    marker: Option<String>,
    lines: Vec<String>,
    line: String,
    content_width: usize,
    has_content: bool,
    space_pending: bool,
    /// Pieces of the word being assembled, each with the elements it belongs to
    word: Vec<(String, Vec<NodeId>)>,
    word_width: usize,
    open: Vec<NodeId>,
    spans: HashMap<NodeId, (usize, usize)>,
}

impl<'d> Flow<'d> {
    fn new(doc: &'d Document, width: usize, indent: usize) -> Self {
        Self {
            doc,
            width,
            indent,
            marker: None,
            lines: Vec::new(),
            line: String::new(),
            content_width: 0,
            has_content: false,
            space_pending: false,
            word: Vec::new(),
            word_width: 0,
            open: Vec::new(),
            spans: HashMap::new(),
        }
    }

    fn run(mut self, root: NodeId) -> Flowed {
        self.walk(root);
        self.flush_word();
        self.end_line(false);
        Flowed {
            lines: self.lines,
            spans: self.spans,
        }
    }

    fn walk(&mut self, id: NodeId) {
        let doc = self.doc;
        if let Some(text) = doc.text(id) {
            self.text(text);
            return;
        }

        match style::display(doc, id) {
            Display::None => {}
            Display::Break => {
                self.flush_word();
                record(&mut self.spans, self.lines.len(), &self.open);
                self.end_line(true);
            }
            Display::Block => self.block(id),
            Display::Inline => self.inline(id, false),
            Display::Cell => self.inline(id, true),
        }
    }

    fn block(&mut self, id: NodeId) {
        let doc = self.doc;
        self.flush_word();
        self.end_line(false);

        let saved_indent = self.indent;
        let item = doc.tag(id) == Some("li");
        if item {
            self.marker = Some(format!("{}- ", " ".repeat(self.indent)));
            self.indent += 2;
        }

        self.open.push(id);
        for &child in doc.children(id) {
            self.walk(child);
        }
        self.flush_word();
        self.end_line(false);
        self.open.pop();

        self.indent = saved_indent;
        if item {
            self.marker = None;
        }
    }

    fn inline(&mut self, id: NodeId, cell: bool) {
        let doc = self.doc;
        if style::starts_own_line(doc, id) {
            self.flush_word();
            self.end_line(false);
        } else if cell {
            self.flush_word();
            if self.has_content {
                self.space_pending = true;
            }
        }

        self.open.push(id);
        for &child in doc.children(id) {
            self.walk(child);
        }
        self.open.pop();
    }

    /// Collapse whitespace; a word may continue into the next text node.
    fn text(&mut self, text: &str) {
        let mut piece = String::new();
        for c in text.chars() {
            if c.is_ascii_whitespace() {
                self.push_piece(std::mem::take(&mut piece));
                self.flush_word();
                self.space_pending = true;
            } else {
                piece.push(c);
            }
        }
        self.push_piece(piece);
    }

    fn push_piece(&mut self, piece: String) {
        if piece.is_empty() {
            return;
        }
        self.word_width += piece.width();
        self.word.push((piece, self.open.clone()));
    }

    fn flush_word(&mut self) {
        if self.word.is_empty() {
            return;
        }
        let pieces = std::mem::take(&mut self.word);
        let width = std::mem::take(&mut self.word_width);

        let available = self.width.saturating_sub(self.indent).max(1);
        let mut gap = usize::from(self.has_content && self.space_pending);
        if self.has_content && self.content_width + gap + width > available {
            self.end_line(false);
            gap = 0;
        }

        self.begin_line();
        if gap == 1 {
            self.line.push(' ');
        }
        self.content_width += gap + width;
        let row = self.lines.len();
        for (text, owners) in pieces {
            self.line.push_str(&text);
            record(&mut self.spans, row, &owners);
        }
        self.has_content = true;
        self.space_pending = false;
    }

    fn begin_line(&mut self) {
        if self.has_content {
            return;
        }
        self.line = match self.marker.take() {
            Some(marker) => marker,
            None => " ".repeat(self.indent),
        };
        self.content_width = 0;
    }

    fn end_line(&mut self, force: bool) {
        if !self.has_content && !force {
            return;
        }
        let line = std::mem::take(&mut self.line);
        self.lines.push(line.trim_end().to_string());
        self.has_content = false;
        self.space_pending = false;
        self.content_width = 0;
    }
}

fn record(spans: &mut HashMap<NodeId, (usize, usize)>, row: usize, owners: &[NodeId]) {
    for id in owners {
        spans
            .entry(*id)
            .and_modify(|span| span.1 = span.1.max(row))
            .or_insert((row, row));
    }
}
