//! Transition extraction strategies.
//!
//! Ownership model:
//! - `TransitionExtractor` is resolved once per batch from the configured
//!   mode and owns any batch-derived state (the stage-column set).
//! - Per-record extraction is read-only and infallible: shape problems are
//!   either coerced (pairwise placeholder) or skipped (unparseable cells).

use chrono::{DateTime, Utc};

use crate::config::{ExtractionMode, FlowConfig};
use crate::constants::pairwise;
use crate::record::{CellValue, Record, RecordBatch};
use crate::timestamp::cell_instant;
use crate::types::{FieldName, NodeLabel};

/// One directed observation of movement between two labels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// Label the entity moved away from.
    pub source: NodeLabel,
    /// Label the entity moved into.
    pub target: NodeLabel,
}

impl Transition {
    /// Build a transition from label pair.
    pub fn new(source: impl Into<NodeLabel>, target: impl Into<NodeLabel>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Closed set of extraction strategies, dispatched once per batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransitionExtractor {
    /// Explicit old/new fields; one transition per record.
    Pairwise,
    /// Stage columns ordered per record by parsed timestamps.
    Chronological {
        /// Candidate stage columns: the batch field set minus reserved
        /// fields, in declared column order.
        stage_fields: Vec<FieldName>,
    },
}

impl TransitionExtractor {
    /// Resolve the strategy for `mode`, capturing batch-derived state.
    pub fn for_batch(mode: ExtractionMode, batch: &RecordBatch, config: &FlowConfig) -> Self {
        match mode {
            ExtractionMode::Pairwise => Self::Pairwise,
            ExtractionMode::Chronological => Self::Chronological {
                stage_fields: stage_fields(batch, config),
            },
        }
    }

    /// Labels that enter the node universe before any transition is seen.
    ///
    /// Chronological mode registers every stage column unconditionally, even
    /// when no record ever yields a valid timestamp for it.
    pub fn seed_labels(&self) -> &[NodeLabel] {
        match self {
            Self::Pairwise => &[],
            Self::Chronological { stage_fields } => stage_fields,
        }
    }

    /// Derive the transitions contributed by one record.
    pub fn extract(&self, record: &Record, config: &FlowConfig) -> Vec<Transition> {
        match self {
            Self::Pairwise => vec![pairwise_transition(record, config)],
            Self::Chronological { stage_fields } => {
                chronological_transitions(record, stage_fields)
            }
        }
    }
}

/// Stage-column candidates for a batch: first-record fields minus reserved.
fn stage_fields(batch: &RecordBatch, config: &FlowConfig) -> Vec<FieldName> {
    batch
        .field_names()
        .into_iter()
        .filter(|field| !config.reserved_fields.iter().any(|r| r == field))
        .collect()
}

/// Coerce both pairwise cells to labels; blank or absent cells become the
/// configured placeholder so every record yields exactly one transition.
fn pairwise_transition(record: &Record, config: &FlowConfig) -> Transition {
    Transition {
        source: label_for(record.get(pairwise::FIELD_OLD_VALUE), config),
        target: label_for(record.get(pairwise::FIELD_NEW_VALUE), config),
    }
}

fn label_for(cell: Option<&CellValue>, config: &FlowConfig) -> NodeLabel {
    cell.and_then(CellValue::to_label)
        .unwrap_or_else(|| config.missing_value_label.clone())
}

/// Order this record's validly-timestamped stage columns and emit one
/// transition per consecutive pair. Ties keep declared column order; fewer
/// than two valid timestamps yield nothing.
fn chronological_transitions(record: &Record, stage_fields: &[FieldName]) -> Vec<Transition> {
    let mut staged: Vec<(&FieldName, DateTime<Utc>)> = stage_fields
        .iter()
        .filter_map(|field| {
            record
                .get(field)
                .and_then(cell_instant)
                .map(|instant| (field, instant))
        })
        .collect();
    // Vec::sort_by_key is stable, which preserves declared order on ties.
    staged.sort_by_key(|(_, instant)| *instant);
    staged
        .windows(2)
        .map(|pair| Transition::new(pair[0].0.clone(), pair[1].0.clone()))
        .collect()
}
