//! Custom assertions for gviz-specific validation.
//!
//! - Region tree shape (parent/child agreement, depth rule, document order)
//! - Abbreviation flags in a document
//! - JSON structure of `render` and `regions` output

use anyhow::{Context, Result};
use gviz_engine::RegionTree;
use gviz_types::Document;
use gviz_types::classes::{ABBREVIATED, ABV_WRAPPER};
use serde_json::Value;

/// Assert the structural rules every region tree must satisfy.
pub fn assert_region_tree_consistent(doc: &Document, tree: &RegionTree) -> Result<()> {
    for (id, region) in tree.iter() {
        match region.parent {
            None if region.depth != 0 => {
                anyhow::bail!("Root region {:?} has depth {}", id, region.depth)
            }
            Some(parent) => {
                let parent_region = tree
                    .get(parent)
                    .with_context(|| format!("Region {:?} has dangling parent", id))?;
                if region.depth != parent_region.depth + 1 {
                    anyhow::bail!(
                        "Region {:?} has depth {} under parent of depth {}",
                        id,
                        region.depth,
                        parent_region.depth
                    );
                }
                if !parent_region.children.contains(&id) {
                    anyhow::bail!("Region {:?} missing from its parent's children", id);
                }
                if !doc.is_ancestor_of(parent_region.element, region.element) {
                    anyhow::bail!("Region {:?} is not inside its parent element", id);
                }
            }
            None => {}
        }

        for child in &region.children {
            let child_region = tree
                .get(*child)
                .with_context(|| format!("Region {:?} has dangling child", id))?;
            if child_region.parent != Some(id) {
                anyhow::bail!("Child {:?} does not point back to {:?}", child, id);
            }
        }

        if doc.parent(region.element) != Some(region.wrapper)
            || !doc.has_class(region.wrapper, ABV_WRAPPER)
        {
            anyhow::bail!("Region {:?} is not hosted by its wrapper", id);
        }
    }

    Ok(())
}

/// Assert exactly which regions ended up abbreviated, by element text.
pub fn assert_abbreviated_texts(doc: &Document, tree: &RegionTree, expected: &[&str]) -> Result<()> {
    let actual: Vec<String> = tree
        .iter()
        .filter(|(_, r)| doc.has_class(r.wrapper, ABBREVIATED))
        .map(|(_, r)| doc.text_content(r.element))
        .collect();

    if actual != expected {
        anyhow::bail!("Expected abbreviated {:?}, got {:?}", expected, actual);
    }

    Ok(())
}

/// Assert `render --format json` output shape and counter.
pub fn assert_render_json(json: &Value, counter: &str) -> Result<()> {
    let actual = json["counter"]
        .as_str()
        .context("Expected 'counter' string in JSON")?;
    if actual != counter {
        anyhow::bail!("Expected counter {}, got {}", counter, actual);
    }

    json["lines"]
        .as_array()
        .context("Expected 'lines' array in JSON")?;

    Ok(())
}

/// Assert the number of regions in `regions --format json` output.
pub fn assert_region_count(json: &Value, expected: usize) -> Result<()> {
    let regions = json["regions"]
        .as_array()
        .context("Expected 'regions' array in JSON")?;

    if regions.len() != expected {
        anyhow::bail!("Expected {} regions, got {}", expected, regions.len());
    }

    Ok(())
}
