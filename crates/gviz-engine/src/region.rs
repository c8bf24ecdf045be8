//! Region tree construction.
//!
//! A region is one collapsible element (class `abv`). Regions nest through
//! arbitrary non-collapsible structure; the tree only records the nearest
//! collapsible ancestor of each region. Regions live in an arena and refer
//! to each other by [`RegionId`].

use gviz_types::classes::{ABV, ABV_WRAPPER, DIARESIS, ELLIPSIS};
use gviz_types::{Document, NodeId};
use serde::Serialize;
use std::collections::HashMap;
use std::ops::Index;
use tracing::trace;

/// Index of a region in its [`RegionTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RegionId(usize);

impl RegionId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    /// The collapsible element itself
    pub element: NodeId,
    /// `span.abv-wrapper` hosting the element and its ellipsis
    pub wrapper: NodeId,
    pub parent: Option<RegionId>,
    /// Child regions in document order
    pub children: Vec<RegionId>,
    /// 0 for roots, otherwise parent depth + 1
    pub depth: usize,
}

#[derive(Debug, Clone, Default)]
pub struct RegionTree {
    regions: Vec<Region>,
}

impl RegionTree {
    /// Scan `container` for collapsible elements and build their tree.
    ///
    /// Every region is wrapped before any parent link is resolved. Elements
    /// that already sit in a wrapper keep it, so scanning the same container
    /// twice never nests wrappers.
    pub fn build(doc: &mut Document, container: NodeId) -> Self {
        let elements: Vec<NodeId> = doc.elements_with_class(container, ABV).collect();

        let wrappers: Vec<NodeId> = elements.iter().map(|el| wrap(doc, *el)).collect();

        let index: HashMap<NodeId, usize> = elements
            .iter()
            .enumerate()
            .map(|(i, el)| (*el, i))
            .collect();

        let parents: Vec<Option<usize>> = elements
            .iter()
            .map(|el| {
                doc.ancestors(*el)
                    .take_while(|a| *a != container)
                    .find_map(|a| index.get(&a).copied())
            })
            .collect();

        let depths = compute_depths(&parents);

        let mut regions: Vec<Region> = elements
            .iter()
            .zip(wrappers)
            .zip(&parents)
            .zip(depths)
            .map(|(((element, wrapper), parent), depth)| Region {
                element: *element,
                wrapper,
                parent: parent.map(RegionId),
                children: Vec::new(),
                depth,
            })
            .collect();

        for (i, parent) in parents.iter().enumerate() {
            if let Some(p) = parent {
                regions[*p].children.push(RegionId(i));
            }
        }

        trace!(container = %container, regions = regions.len(), "built region tree");
        Self { regions }
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn get(&self, id: RegionId) -> Option<&Region> {
        self.regions.get(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (RegionId, &Region)> {
        self.regions
            .iter()
            .enumerate()
            .map(|(i, r)| (RegionId(i), r))
    }

    pub fn roots(&self) -> impl Iterator<Item = RegionId> + '_ {
        self.iter()
            .filter(|(_, r)| r.parent.is_none())
            .map(|(id, _)| id)
    }

    /// Region ids sorted by ascending depth, document order within a depth.
    pub fn by_depth(&self) -> Vec<RegionId> {
        let mut order: Vec<RegionId> = (0..self.regions.len()).map(RegionId).collect();
        order.sort_by_key(|id| self.regions[id.0].depth);
        order
    }

    /// Strict ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: RegionId) -> RegionAncestors<'_> {
        RegionAncestors {
            tree: self,
            next: self.get(id).and_then(|r| r.parent),
        }
    }

    pub fn find_by_element(&self, element: NodeId) -> Option<RegionId> {
        self.iter()
            .find(|(_, r)| r.element == element)
            .map(|(id, _)| id)
    }
}

impl Index<RegionId> for RegionTree {
    type Output = Region;

    fn index(&self, id: RegionId) -> &Region {
        &self.regions[id.0]
    }
}

pub struct RegionAncestors<'a> {
    tree: &'a RegionTree,
    next: Option<RegionId>,
}

impl Iterator for RegionAncestors<'_> {
    type Item = RegionId;

    fn next(&mut self) -> Option<RegionId> {
        let id = self.next?;
        self.next = self.tree.get(id).and_then(|r| r.parent);
        Some(id)
    }
}

/// Put `el` inside `span.abv-wrapper` next to a `span.diaresis` ellipsis.
fn wrap(doc: &mut Document, el: NodeId) -> NodeId {
    if let Some(parent) = doc.parent(el)
        && doc.has_class(parent, ABV_WRAPPER)
    {
        return parent;
    }

    let wrapper = doc.create_element("span");
    doc.add_class(wrapper, ABV_WRAPPER);
    let diaresis = doc.create_element("span");
    doc.add_class(diaresis, DIARESIS);
    let ellipsis = doc.create_text(ELLIPSIS);
    doc.append_child(diaresis, ellipsis);

    if let Some(parent) = doc.parent(el) {
        doc.insert_before(parent, wrapper, el);
    }
    doc.append_child(wrapper, el);
    doc.append_child(wrapper, diaresis);
    wrapper
}

/// Depth of every entry given parent indices, without recursion.
///
/// Each region's chain is climbed only until a memoized ancestor is found,
/// so the whole pass is linear in the number of regions.
fn compute_depths(parents: &[Option<usize>]) -> Vec<usize> {
    let mut memo: Vec<Option<usize>> = vec![None; parents.len()];

    for start in 0..parents.len() {
        let mut chain = Vec::new();
        let mut cursor = Some(start);
        let mut base = None;
        while let Some(i) = cursor {
            if let Some(depth) = memo[i] {
                base = Some(depth);
                break;
            }
            chain.push(i);
            cursor = parents[i];
        }

        let mut depth = base.map_or(0, |d| d + 1);
        for &i in chain.iter().rev() {
            memo[i] = Some(depth);
            depth += 1;
        }
    }

    memo.into_iter().map(|d| d.unwrap_or(0)).collect()
}
