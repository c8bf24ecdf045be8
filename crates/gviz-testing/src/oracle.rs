use gviz_engine::FitOracle;
use gviz_types::{Document, NodeId};
use std::collections::HashSet;

/// Fit oracle answering from a fixed set of overflowing elements.
///
/// Every query is recorded, so tests can check both the answers the engine
/// acted on and the order it asked in.
#[derive(Debug, Default, Clone)]
pub struct ScriptedOracle {
    overflowing: HashSet<NodeId>,
    calls: Vec<NodeId>,
}

impl ScriptedOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Oracle for which every element in `overflowing` fails to fit.
    pub fn overflowing(overflowing: impl IntoIterator<Item = NodeId>) -> Self {
        Self {
            overflowing: overflowing.into_iter().collect(),
            calls: Vec::new(),
        }
    }

    /// Make `el` fit from now on.
    pub fn resolve(&mut self, el: NodeId) {
        self.overflowing.remove(&el);
    }

    pub fn calls(&self) -> &[NodeId] {
        &self.calls
    }
}

impl FitOracle for ScriptedOracle {
    fn fits(&mut self, _doc: &mut Document, el: NodeId) -> bool {
        self.calls.push(el);
        !self.overflowing.contains(&el)
    }
}
