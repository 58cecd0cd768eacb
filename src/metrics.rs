//! Aggregate flow metrics for a serialized graph.

use crate::graph::FlowGraph;
use crate::types::{NodeLabel, Weight};

/// Per-node flow totals and share of total throughput.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeFlow {
    /// Node label.
    pub label: NodeLabel,
    /// Total weight entering the node.
    pub inflow: Weight,
    /// Total weight leaving the node.
    pub outflow: Weight,
    /// `(inflow + outflow) / (2 * total)`; sums to 1.0 across nodes.
    pub share: f64,
}

/// Flow-balance summary for a graph.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowBalance {
    /// Sum of all link weights.
    pub total: Weight,
    /// Per-node flows, heaviest throughput first, ties by label.
    pub nodes: Vec<NodeFlow>,
}

/// Compute per-node inflow/outflow from a graph's links.
///
/// Returns `None` for a graph with no links. Nodes without any linked flow
/// still appear, with zero totals.
pub fn flow_balance(graph: &FlowGraph) -> Option<FlowBalance> {
    if graph.links.is_empty() {
        return None;
    }
    let mut inflow = vec![0u64; graph.nodes.len()];
    let mut outflow = vec![0u64; graph.nodes.len()];
    for link in &graph.links {
        outflow[link.source] += link.value;
        inflow[link.target] += link.value;
    }
    let total: Weight = graph.total_weight();
    let mut nodes: Vec<NodeFlow> = graph
        .nodes
        .iter()
        .enumerate()
        .map(|(index, label)| NodeFlow {
            label: label.clone(),
            inflow: inflow[index],
            outflow: outflow[index],
            share: if total == 0 {
                0.0
            } else {
                (inflow[index] + outflow[index]) as f64 / (2.0 * total as f64)
            },
        })
        .collect();
    nodes.sort_by(|a, b| {
        (b.inflow + b.outflow)
            .cmp(&(a.inflow + a.outflow))
            .then_with(|| a.label.cmp(&b.label))
    });
    Some(FlowBalance { total, nodes })
}
