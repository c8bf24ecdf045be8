use crate::measure::FitOracle;
use gviz_types::classes::{DETAIL_LONG, EMPTY, MULTILINE, OR};
use gviz_types::{Document, NodeId};
use tracing::debug;

/// Flag long-form alternations that cannot be laid out on one line.
///
/// Each `.or.detail:long` under `scope` is measured while floated, so it is
/// laid out on its own rather than continuing a line started by a sibling.
/// Alternations ending in an `empty` alternative (`x?` and `x*`) are
/// rendered inline and skipped. Returns how many were marked `multiline`.
pub fn mark_multiline_ors<O>(doc: &mut Document, scope: NodeId, oracle: &mut O) -> usize
where
    O: FitOracle + ?Sized,
{
    let ors: Vec<NodeId> = doc
        .descendants(scope)
        .filter(|id| doc.has_class(*id, OR) && doc.has_class(*id, DETAIL_LONG))
        .collect();

    let mut marked = 0;
    for or in &ors {
        if let Some(last) = doc.last_child(*or)
            && doc.has_class(last, EMPTY)
        {
            continue;
        }

        doc.set_style(*or, "float", "left");
        if !oracle.fits(doc, *or) {
            doc.add_class(*or, MULTILINE);
            marked += 1;
        }
        doc.set_style(*or, "float", "");
    }

    debug!(candidates = ors.len(), marked, "marked multiline alternations");
    marked
}
