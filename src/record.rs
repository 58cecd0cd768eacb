use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;

use crate::errors::FlowError;
use crate::types::{FieldName, NodeLabel};

/// Scalar cell content observed in one record field.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Free-form text.
    Text(String),
    /// Numeric value; may encode a spreadsheet serial date.
    Number(f64),
    /// Already-typed absolute instant.
    Timestamp(DateTime<Utc>),
    /// Absent or null cell.
    Empty,
}

impl CellValue {
    /// True when the cell carries no usable content.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(text) => text.trim().is_empty(),
            Self::Number(_) | Self::Timestamp(_) => false,
        }
    }

    /// String form used as a node label, or `None` for blank cells.
    ///
    /// Numbers with no fractional part render without a trailing `.0`;
    /// timestamps render as RFC 3339.
    pub fn to_label(&self) -> Option<NodeLabel> {
        match self {
            Self::Text(text) => {
                if text.trim().is_empty() {
                    None
                } else {
                    Some(text.clone())
                }
            }
            Self::Number(value) => Some(format_number(*value)),
            Self::Timestamp(ts) => Some(ts.to_rfc3339()),
            Self::Empty => None,
        }
    }
}

/// Render a cell number the way a spreadsheet displays it.
fn format_number(value: f64) -> String {
    // i64-exact range; larger magnitudes keep the default float rendering.
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 9_007_199_254_740_992.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// One observed row: an ordered mapping from field name to cell value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    fields: IndexMap<FieldName, CellValue>,
}

impl Record {
    /// Build a record from `(field, value)` pairs, preserving pair order.
    pub fn from_fields<I>(fields: I) -> Self
    where
        I: IntoIterator<Item = (FieldName, CellValue)>,
    {
        Self {
            fields: fields.into_iter().collect(),
        }
    }

    /// Cell value for `field`, or `None` when the field is absent.
    pub fn get(&self, field: &str) -> Option<&CellValue> {
        self.fields.get(field)
    }

    /// True when the record carries `field`, regardless of cell content.
    pub fn contains_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Field names in declared order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of fields in this record.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Ordered batch of records for one transformation call.
///
/// The batch field set derives from the first record's keys. Records are not
/// retained by the crate after a graph is produced.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordBatch {
    records: Vec<Record>,
}

impl RecordBatch {
    /// Wrap an ordered record sequence.
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Convert the JSON row-object shape produced by worksheet-to-rows
    /// collaborators (an array of flat objects) into typed records.
    ///
    /// Null cells become [`CellValue::Empty`], booleans stringify, and any
    /// non-object row or nested value fails the whole batch as
    /// [`FlowError::MalformedRecord`]; no partial batch is returned.
    pub fn from_json_rows(rows: &[serde_json::Value]) -> Result<Self, FlowError> {
        let mut records = Vec::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            let object = row.as_object().ok_or_else(|| FlowError::MalformedRecord {
                index,
                details: "row is not a JSON object".to_string(),
            })?;
            let mut fields = IndexMap::with_capacity(object.len());
            for (name, value) in object {
                fields.insert(name.clone(), cell_from_json(index, name, value)?);
            }
            records.push(Record { fields });
        }
        Ok(Self { records })
    }

    /// Records in batch order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Batch field set: the first record's field names in declared order.
    pub fn field_names(&self) -> Vec<FieldName> {
        self.records
            .first()
            .map(|record| record.field_names().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Number of records in the batch.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the batch has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Convert one JSON cell into a `CellValue`.
fn cell_from_json(
    index: usize,
    field: &str,
    value: &serde_json::Value,
) -> Result<CellValue, FlowError> {
    match value {
        serde_json::Value::Null => Ok(CellValue::Empty),
        serde_json::Value::Bool(flag) => Ok(CellValue::Text(flag.to_string())),
        serde_json::Value::Number(number) => number.as_f64().map(CellValue::Number).ok_or_else(
            || FlowError::MalformedRecord {
                index,
                details: format!("field '{field}' holds a non-finite number"),
            },
        ),
        serde_json::Value::String(text) => Ok(CellValue::Text(text.clone())),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
            Err(FlowError::MalformedRecord {
                index,
                details: format!("field '{field}' holds a nested value"),
            })
        }
    }
}
