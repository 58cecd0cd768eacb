//! Batch precondition checks for each extraction mode.

use crate::config::ExtractionMode;
use crate::constants::pairwise;
use crate::errors::FlowError;
use crate::record::RecordBatch;
use crate::types::FieldName;

/// Confirm that `batch` satisfies the preconditions of `mode`.
///
/// An empty batch fails with [`FlowError::EmptyDataset`] regardless of mode.
/// Pairwise mode additionally requires the batch field set (the first
/// record's keys) to carry both required columns, failing with
/// [`FlowError::MissingColumns`] naming exactly the absent ones.
///
/// Never mutates the batch; no extraction is attempted on failure.
pub fn validate_batch(batch: &RecordBatch, mode: ExtractionMode) -> Result<(), FlowError> {
    let Some(first) = batch.records().first() else {
        return Err(FlowError::EmptyDataset);
    };
    match mode {
        ExtractionMode::Pairwise => {
            let missing: Vec<FieldName> = [pairwise::FIELD_OLD_VALUE, pairwise::FIELD_NEW_VALUE]
                .iter()
                .filter(|field| !first.contains_field(field))
                .map(|field| (*field).to_string())
                .collect();
            if missing.is_empty() {
                Ok(())
            } else {
                Err(FlowError::MissingColumns { missing })
            }
        }
        ExtractionMode::Chronological => Ok(()),
    }
}
