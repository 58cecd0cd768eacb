//! Serialized flow-graph output shape.

use serde::{Deserialize, Serialize};

use crate::types::{NodeIndex, NodeLabel, Weight};

/// A directed, weighted link between node positions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowLink {
    /// Index of the source label in the graph's node sequence.
    pub source: NodeIndex,
    /// Index of the target label in the graph's node sequence.
    pub target: NodeIndex,
    /// Number of transitions that collapsed to this edge (>= 1).
    pub value: Weight,
}

/// Aggregated Sankey graph: unique labels plus indexed weighted links.
///
/// Immutable once built; owned by the caller that requested the
/// transformation. Node order is first-seen order, link order is
/// first-observation order, and every link endpoint resolves to a valid
/// position in `nodes`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowGraph {
    /// Unique node labels in first-seen order.
    pub nodes: Vec<NodeLabel>,
    /// Weighted links with endpoints resolved against `nodes`.
    pub links: Vec<FlowLink>,
}

impl FlowGraph {
    /// True when the graph carries no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Sum of all link weights.
    pub fn total_weight(&self) -> Weight {
        self.links.iter().map(|link| link.value).sum()
    }

    /// Label at `index`, if in range.
    pub fn label(&self, index: NodeIndex) -> Option<&str> {
        self.nodes.get(index).map(String::as_str)
    }

    /// The three parallel arrays (sources, targets, values) consumed by the
    /// rendering collaborator.
    pub fn parallel_arrays(&self) -> (Vec<NodeIndex>, Vec<NodeIndex>, Vec<Weight>) {
        let sources = self.links.iter().map(|link| link.source).collect();
        let targets = self.links.iter().map(|link| link.target).collect();
        let values = self.links.iter().map(|link| link.value).collect();
        (sources, targets, values)
    }
}
