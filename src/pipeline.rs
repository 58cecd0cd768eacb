//! One-call transformation from a record batch to a flow graph.

use tracing::debug;

use crate::aggregate::GraphAccumulator;
use crate::config::FlowConfig;
use crate::errors::FlowError;
use crate::extract::TransitionExtractor;
use crate::graph::FlowGraph;
use crate::record::RecordBatch;
use crate::validate::validate_batch;

/// Validate, extract, aggregate, and serialize one batch.
///
/// The transformation is synchronous and runs to completion in one call:
/// validation failures abort the whole batch before any extraction, and no
/// partial graph is ever returned. Output is deterministic for a given
/// record order and mode.
pub fn build_flow_graph(batch: &RecordBatch, config: &FlowConfig) -> Result<FlowGraph, FlowError> {
    validate_batch(batch, config.mode)?;

    let extractor = TransitionExtractor::for_batch(config.mode, batch, config);
    let mut accumulator = GraphAccumulator::new();
    for label in extractor.seed_labels() {
        accumulator.register_node(label);
    }
    for record in batch.records() {
        for transition in extractor.extract(record, config) {
            accumulator.record_transition(transition);
        }
    }

    debug!(
        "[sankey_flows] mode={} records={} nodes={} edges={}",
        config.mode,
        batch.len(),
        accumulator.node_count(),
        accumulator.edge_count()
    );
    Ok(accumulator.into_graph())
}
