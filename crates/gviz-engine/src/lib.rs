// Engine module - abbreviation and navigation logic over a parse-log document.
// This layer sits between the document model (types) and the layout/runtime layer.
// It never measures anything itself; all measurement goes through FitOracle.

pub mod abbrev;
pub mod measure;
pub mod multiline;
pub mod navigator;
pub mod region;

pub use abbrev::{AbbrevOutcome, Abbreviation, abbreviate, decide};
pub use measure::{FitOracle, LayoutEngine, LineFit, ONE_LINE_TOLERANCE};
pub use multiline::mark_multiline_ors;
pub use navigator::{NavCommand, Navigator, SlideHost};
pub use region::{Region, RegionId, RegionTree};

use gviz_types::{Document, NodeId};

// Façade API - Stable public interface for the runtime layer

/// Build the region tree under `container`, wrapping every collapsible element.
pub fn build_regions(doc: &mut Document, container: NodeId) -> RegionTree {
    RegionTree::build(doc, container)
}
