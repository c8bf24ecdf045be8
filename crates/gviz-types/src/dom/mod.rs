//! Arena-based document model.
//!
//! The page the visualizer works on is stored as an arena of nodes addressed
//! by [`NodeId`]. Parent and child links are indices, so regions, wrappers and
//! the layout engine can all hold node references without shared ownership.
//!
//! Presentation helpers (`add_class`, `set_attr`, `set_style`, ...) are silent
//! no-ops when handed a node that does not exist or is not an element.

mod document;
mod node;

pub use document::{Ancestors, Descendants, Document};
pub use node::{NodeId, NodeKind};
