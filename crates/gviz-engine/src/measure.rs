//! The one-line fit oracle.
//!
//! Whether an element "fits on one line" cannot be derived from its text:
//! it depends on the container width, the position the element starts at and
//! its siblings. The engine therefore asks a [`LayoutEngine`] for live
//! measurements and applies a fixed tolerance on top.

use gviz_types::classes::DATA_LINE_HEIGHT;
use gviz_types::{Document, NodeId};
use tracing::trace;

/// An element fits when its height is at most this many line heights.
pub const ONE_LINE_TOLERANCE: f64 = 1.5;

/// Measurement side of the rendering engine.
pub trait LayoutEngine {
    /// Rendered height of `el` in pixels, 0 when it is not rendered.
    fn offset_height(&self, doc: &Document, el: NodeId) -> u32;

    /// Computed line height of `el` in pixels, or `None` when the computed
    /// value is not a plain length (e.g. `normal`).
    fn line_height(&self, doc: &Document, el: NodeId) -> Option<u32>;
}

/// Answers "does this element currently fit on one line".
///
/// Takes the document mutably: an oracle may need to insert probe content
/// or cache measurements on the element.
pub trait FitOracle {
    fn fits(&mut self, doc: &mut Document, el: NodeId) -> bool;
}

impl<F> FitOracle for F
where
    F: FnMut(&mut Document, NodeId) -> bool,
{
    fn fits(&mut self, doc: &mut Document, el: NodeId) -> bool {
        self(doc, el)
    }
}

/// [`FitOracle`] backed by a [`LayoutEngine`] and the 1.5-line rule.
pub struct LineFit<'e, E: LayoutEngine + ?Sized> {
    engine: &'e E,
}

impl<'e, E: LayoutEngine + ?Sized> LineFit<'e, E> {
    pub fn new(engine: &'e E) -> Self {
        Self { engine }
    }

    /// Line height of `el` in pixels (0 when it cannot be determined).
    ///
    /// Resolution order: cached `data-line-height`, the computed line
    /// height, then a probe comparing one-line and two-line content. The
    /// result is cached on the element.
    pub fn line_height(&self, doc: &mut Document, el: NodeId) -> u32 {
        if let Some(cached) = doc.attr(el, DATA_LINE_HEIGHT) {
            return cached.trim().parse().unwrap_or(0);
        }

        let line_height = match self.engine.line_height(doc, el) {
            Some(px) => px,
            None => self.probe_line_height(doc, el),
        };

        doc.set_attr(el, DATA_LINE_HEIGHT, &line_height.to_string());
        line_height
    }

    /// Append a shallow clone holding one, then two, line breaks and take
    /// the height difference. The clone and its breaks are dropped from the
    /// arena again.
    fn probe_line_height(&self, doc: &mut Document, el: NodeId) -> u32 {
        let mark = doc.len();
        let Some(probe) = doc.clone_node(el) else {
            return 0;
        };
        doc.append_child(el, probe);

        let first = doc.create_element("br");
        doc.append_child(probe, first);
        let single = self.engine.offset_height(doc, probe);

        let second = doc.create_element("br");
        doc.append_child(probe, second);
        let double = self.engine.offset_height(doc, probe);

        doc.remove_child(el, probe);
        doc.truncate(mark);
        trace!(el = %el, single, double, "probed line height");
        double.saturating_sub(single)
    }
}

impl<E: LayoutEngine + ?Sized> FitOracle for LineFit<'_, E> {
    fn fits(&mut self, doc: &mut Document, el: NodeId) -> bool {
        let height = self.engine.offset_height(doc, el);
        let line_height = match self.line_height(doc, el) {
            0 => 1,
            px => px,
        };
        !(f64::from(height) / f64::from(line_height) > ONE_LINE_TOLERANCE)
    }
}
