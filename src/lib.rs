#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Transition aggregation into ordered node/edge registries.
pub mod aggregate;
/// Extraction mode and transformation configuration types.
pub mod config;
/// Centralized constants used across validation, extraction, and parsing.
pub mod constants;
/// Reusable demo runners shared by downstream binaries.
pub mod example_apps;
/// Transition extraction strategies.
pub mod extract;
/// Serialized graph output types.
pub mod graph;
/// Flow-balance metrics helpers.
pub mod metrics;
/// One-call batch-to-graph pipeline.
pub mod pipeline;
/// Record and cell-value types plus the JSON ingestion seam.
pub mod record;
/// Cell timestamp parsing helpers.
pub mod timestamp;
/// Shared type aliases.
pub mod types;
/// Batch precondition checks per extraction mode.
pub mod validate;

mod errors;

pub use aggregate::GraphAccumulator;
pub use config::{ExtractionMode, FlowConfig};
pub use errors::FlowError;
pub use extract::{Transition, TransitionExtractor};
pub use graph::{FlowGraph, FlowLink};
pub use metrics::{flow_balance, FlowBalance, NodeFlow};
pub use pipeline::build_flow_graph;
pub use record::{CellValue, Record, RecordBatch};
pub use types::{FieldName, NodeIndex, NodeLabel, Weight};
