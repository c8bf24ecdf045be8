pub mod classes;
pub mod dom;

pub use dom::{Ancestors, Descendants, Document, NodeId, NodeKind};
