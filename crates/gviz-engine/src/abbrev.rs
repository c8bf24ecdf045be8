//! Abbreviation decisions.
//!
//! Regions are visited deepest first. A region is abbreviated when some
//! strict ancestor region currently fails the fit test; that ancestor is
//! flagged as overflowing. Measurements are taken live, once per
//! (region, ancestor) pair, in a single pass: earlier abbreviations in the
//! same pass may change later measurements, but decisions are never
//! revisited.

use crate::measure::FitOracle;
use crate::region::{RegionId, RegionTree};
use gviz_types::classes::{ABBREVIATED, ABV, OVERFLOWS};
use gviz_types::{Document, NodeId};
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info_span};

/// What a decision pass changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AbbrevOutcome {
    /// Regions whose wrapper received `abbreviated`, in decision order
    pub abbreviated: Vec<RegionId>,
    /// Ancestor regions newly flagged `overflows`
    pub overflowing: Vec<RegionId>,
}

impl AbbrevOutcome {
    pub fn is_empty(&self) -> bool {
        self.abbreviated.is_empty() && self.overflowing.is_empty()
    }
}

/// A region tree together with the decisions made over it.
#[derive(Debug, Clone, Default)]
pub struct Abbreviation {
    pub tree: RegionTree,
    pub outcome: AbbrevOutcome,
}

/// Decide which regions of `tree` to abbreviate.
pub fn decide<O>(doc: &mut Document, tree: &RegionTree, oracle: &mut O) -> AbbrevOutcome
where
    O: FitOracle + ?Sized,
{
    let mut outcome = AbbrevOutcome::default();

    for &id in tree.by_depth().iter().rev() {
        let Some(overflowing) = tree
            .ancestors(id)
            .find(|a| !oracle.fits(doc, tree[*a].element))
        else {
            continue;
        };

        doc.add_class(tree[id].wrapper, ABBREVIATED);
        outcome.abbreviated.push(id);

        let ancestor = tree[overflowing].element;
        if !doc.has_class(ancestor, OVERFLOWS) {
            doc.add_class(ancestor, OVERFLOWS);
            outcome.overflowing.push(overflowing);
        }
    }

    outcome
}

/// Build the region tree of `container` and run the decision pass.
///
/// Without an oracle, or when the container holds no collapsible element,
/// the document is left untouched.
pub fn abbreviate(
    doc: &mut Document,
    container: NodeId,
    oracle: Option<&mut dyn FitOracle>,
) -> Abbreviation {
    let Some(oracle) = oracle else {
        debug!(container = %container, "no fit oracle available; skipping abbreviation");
        return Abbreviation::default();
    };
    if doc.elements_with_class(container, ABV).next().is_none() {
        return Abbreviation::default();
    }

    let _span = info_span!("abbrev", container = %container).entered();
    let started = Instant::now();

    let tree = RegionTree::build(doc, container);
    let built_ms = started.elapsed().as_secs_f64() * 1000.0;
    let outcome = decide(doc, &tree, oracle);

    debug!(
        regions = tree.len(),
        abbreviated = outcome.abbreviated.len(),
        overflowing = outcome.overflowing.len(),
        build_ms = built_ms,
        total_ms = started.elapsed().as_secs_f64() * 1000.0,
        "abbreviation pass finished"
    );

    Abbreviation { tree, outcome }
}
