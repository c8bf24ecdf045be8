//! Abbreviation Pass Tests
//!
//! Drives region building and the decision pass through scripted fit
//! oracles, checking which regions collapse and in what order the engine
//! measures.

use anyhow::Result;
use gviz_engine::{RegionTree, abbreviate, build_regions, decide};
use gviz_testing::ScriptedOracle;
use gviz_testing::assertions::{assert_abbreviated_texts, assert_region_tree_consistent};
use gviz_testing::fixtures::{collapsible, element, nested_regions};
use gviz_types::Document;
use gviz_types::classes::{ABBREVIATED, ABV_WRAPPER, OVERFLOWS};

#[test]
fn test_overflowing_root_collapses_both_descendants() -> Result<()> {
    // Given: A > B > C where only A fails to fit
    let mut fx = nested_regions();
    let mut oracle = ScriptedOracle::overflowing([fx.a]);

    // When
    let pass = abbreviate(&mut fx.doc, fx.container, Some(&mut oracle));

    // Then: C and B collapse, A is flagged but stays expanded
    let tree = &pass.tree;
    let ids: Vec<_> = [fx.a, fx.b, fx.c]
        .iter()
        .map(|el| tree.find_by_element(*el).unwrap())
        .collect();
    assert_eq!(tree.by_depth(), ids);
    assert_eq!(pass.outcome.abbreviated, vec![ids[2], ids[1]]);
    assert_eq!(pass.outcome.overflowing, vec![ids[0]]);

    assert!(fx.doc.has_class(fx.a, OVERFLOWS));
    assert!(!fx.doc.has_class(tree[ids[0]].wrapper, ABBREVIATED));
    assert!(fx.doc.has_class(tree[ids[1]].wrapper, ABBREVIATED));
    assert!(fx.doc.has_class(tree[ids[2]].wrapper, ABBREVIATED));

    // C asks B then A; B asks A
    assert_eq!(oracle.calls(), &[fx.b, fx.a, fx.a]);

    assert_region_tree_consistent(&fx.doc, tree)?;
    Ok(())
}

#[test]
fn test_nearest_failing_ancestor_is_flagged() -> Result<()> {
    let mut fx = nested_regions();
    let mut oracle = ScriptedOracle::overflowing([fx.a, fx.b]);

    let pass = abbreviate(&mut fx.doc, fx.container, Some(&mut oracle));

    // C stops at B; B then finds A
    assert!(fx.doc.has_class(fx.b, OVERFLOWS));
    assert!(fx.doc.has_class(fx.a, OVERFLOWS));
    assert_eq!(pass.outcome.overflowing.len(), 2);
    assert_eq!(oracle.calls(), &[fx.b, fx.a]);
    Ok(())
}

#[test]
fn test_everything_fits_marks_nothing() -> Result<()> {
    let mut fx = nested_regions();
    let mut oracle = ScriptedOracle::new();

    let pass = abbreviate(&mut fx.doc, fx.container, Some(&mut oracle));

    assert!(pass.outcome.is_empty());
    assert_abbreviated_texts(&fx.doc, &pass.tree, &[])?;
    assert!(
        !fx.doc
            .descendants(fx.container)
            .any(|id| fx.doc.has_class(id, OVERFLOWS))
    );
    Ok(())
}

#[test]
fn test_overflow_flag_is_never_removed() -> Result<()> {
    // Given: a pass that flags A
    let mut fx = nested_regions();
    let mut oracle = ScriptedOracle::overflowing([fx.a]);
    abbreviate(&mut fx.doc, fx.container, Some(&mut oracle));

    // When: a second decision pass runs with A fitting
    oracle.resolve(fx.a);
    let tree = build_regions(&mut fx.doc, fx.container);
    let outcome = decide(&mut fx.doc, &tree, &mut oracle);

    // Then: nothing new is decided and old flags stay
    assert!(outcome.is_empty());
    assert!(fx.doc.has_class(fx.a, OVERFLOWS));
    Ok(())
}

#[test]
fn test_build_twice_keeps_single_wrapper() -> Result<()> {
    let mut fx = nested_regions();
    let first = build_regions(&mut fx.doc, fx.container);
    let nodes = fx.doc.len();

    let second = build_regions(&mut fx.doc, fx.container);

    assert_eq!(fx.doc.len(), nodes);
    assert_eq!(first.len(), second.len());
    for ((_, a), (_, b)) in first.iter().zip(second.iter()) {
        assert_eq!(a.wrapper, b.wrapper);
        let parent = fx.doc.parent(a.wrapper).unwrap();
        assert!(!fx.doc.has_class(parent, ABV_WRAPPER));
    }
    assert_region_tree_consistent(&fx.doc, &second)?;
    Ok(())
}

#[test]
fn test_siblings_and_depths() -> Result<()> {
    // Given: two roots, the second with three children at varying nesting
    let mut doc = Document::new();
    let root = doc.root();
    let container = element(&mut doc, root, "td");
    collapsible(&mut doc, container, "first");
    let second = collapsible(&mut doc, container, "second ");
    collapsible(&mut doc, second, "x");
    let wrap = element(&mut doc, second, "span");
    collapsible(&mut doc, wrap, "y");
    let deeper = element(&mut doc, wrap, "b");
    let z = collapsible(&mut doc, deeper, "z ");
    collapsible(&mut doc, z, "w");

    // When
    let tree = RegionTree::build(&mut doc, container);

    // Then
    assert_eq!(tree.len(), 6);
    assert_eq!(tree.roots().count(), 2);
    let depths: Vec<usize> = tree.iter().map(|(_, r)| r.depth).collect();
    assert_eq!(depths, vec![0, 0, 1, 1, 1, 2]);

    let order: Vec<usize> = tree.by_depth().iter().map(|id| id.index()).collect();
    assert_eq!(order, vec![0, 1, 2, 3, 4, 5]);

    let second_id = tree.find_by_element(second).unwrap();
    assert_eq!(tree[second_id].children.len(), 3);
    assert_region_tree_consistent(&doc, &tree)?;
    Ok(())
}

#[test]
fn test_container_bounds_the_ancestor_walk() -> Result<()> {
    // Given: a collapsible element enclosing the container
    let mut doc = Document::new();
    let root = doc.root();
    let outer = collapsible(&mut doc, root, "outer ");
    let container = element(&mut doc, outer, "div");
    let inner = collapsible(&mut doc, container, "inner");

    let tree = RegionTree::build(&mut doc, container);

    // Then: the outer element is neither a region nor a parent
    assert_eq!(tree.len(), 1);
    let id = tree.find_by_element(inner).unwrap();
    assert_eq!(tree[id].parent, None);
    assert_eq!(tree[id].depth, 0);
    Ok(())
}

#[test]
fn test_leaf_texts_after_collapse() -> Result<()> {
    let mut doc = Document::new();
    let root = doc.root();
    let container = element(&mut doc, root, "div");
    let top = collapsible(&mut doc, container, "top ");
    collapsible(&mut doc, top, "left");
    collapsible(&mut doc, top, "right");

    let mut oracle = ScriptedOracle::overflowing([top]);
    let pass = abbreviate(&mut doc, container, Some(&mut oracle));

    assert_abbreviated_texts(&doc, &pass.tree, &["left", "right"])?;
    Ok(())
}
