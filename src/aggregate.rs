//! Transition aggregation into a frozen flow graph.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::extract::Transition;
use crate::graph::{FlowGraph, FlowLink};
use crate::types::{NodeIndex, NodeLabel, Weight};

/// Accumulates transitions into an ordered node registry and per-edge counts.
///
/// Labels enter the registry on first sight (source or target) and keep that
/// position. Edge identity is the composite `(source, target)` label pair; a
/// delimiter-joined string key would silently merge distinct edges whenever
/// a label contains the delimiter.
#[derive(Debug, Default)]
pub struct GraphAccumulator {
    labels: Vec<NodeLabel>,
    // Incremental label -> index map; resolving by scanning `labels` would
    // make serialization quadratic in the number of edges.
    index_by_label: HashMap<NodeLabel, NodeIndex>,
    edge_counts: IndexMap<(NodeLabel, NodeLabel), Weight>,
}

impl GraphAccumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `label`, appending it on first sight, and return its index.
    pub fn register_node(&mut self, label: &str) -> NodeIndex {
        if let Some(index) = self.index_by_label.get(label) {
            return *index;
        }
        let index = self.labels.len();
        self.labels.push(label.to_string());
        self.index_by_label.insert(label.to_string(), index);
        index
    }

    /// Count one transition, registering both endpoints as needed.
    pub fn record_transition(&mut self, transition: Transition) {
        self.register_node(&transition.source);
        self.register_node(&transition.target);
        *self
            .edge_counts
            .entry((transition.source, transition.target))
            .or_insert(0) += 1;
    }

    /// Number of registered nodes.
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of distinct edges seen so far.
    pub fn edge_count(&self) -> usize {
        self.edge_counts.len()
    }

    /// Freeze the accumulator into its serialized graph shape.
    ///
    /// Nodes keep registry order; links come out in first-observation order
    /// of each distinct edge, with endpoints resolved to node indices.
    pub fn into_graph(self) -> FlowGraph {
        let Self {
            labels,
            index_by_label,
            edge_counts,
        } = self;
        let links = edge_counts
            .into_iter()
            .map(|((source, target), value)| FlowLink {
                source: *index_by_label
                    .get(&source)
                    .expect("edge endpoints are registered nodes"),
                target: *index_by_label
                    .get(&target)
                    .expect("edge endpoints are registered nodes"),
                value,
            })
            .collect();
        FlowGraph {
            nodes: labels,
            links,
        }
    }
}
