use std::fmt;
use std::str::FromStr;

use crate::constants::{chronological, pairwise};
use crate::errors::FlowError;
use crate::types::{FieldName, NodeLabel};

/// Strategy used to derive transitions from each record.
///
/// The set is closed: dispatch happens once per batch, not per record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExtractionMode {
    /// Explicit `old_value` / `new_value` fields; one transition per record.
    Pairwise,
    /// Stage columns ordered by parsed timestamps; zero or more transitions
    /// per record.
    Chronological,
}

impl ExtractionMode {
    /// Canonical lowercase name for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pairwise => "pairwise",
            Self::Chronological => "chronological",
        }
    }
}

impl fmt::Display for ExtractionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExtractionMode {
    type Err = FlowError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pairwise" => Ok(Self::Pairwise),
            "chronological" => Ok(Self::Chronological),
            other => Err(FlowError::Configuration(format!(
                "unrecognized extraction mode '{other}'"
            ))),
        }
    }
}

/// Top-level transformation configuration.
#[derive(Clone, Debug)]
pub struct FlowConfig {
    /// Extraction strategy for this batch.
    pub mode: ExtractionMode,
    /// Label substituted when a pairwise cell is absent or blank.
    pub missing_value_label: NodeLabel,
    /// Field names excluded from chronological stage-column candidates.
    pub reserved_fields: Vec<FieldName>,
}

impl FlowConfig {
    /// Default configuration for `mode`.
    pub fn new(mode: ExtractionMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            mode: ExtractionMode::Pairwise,
            missing_value_label: pairwise::MISSING_VALUE_LABEL.to_string(),
            reserved_fields: chronological::RESERVED_FIELDS
                .iter()
                .map(|field| (*field).to_string())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_round_trips_through_names() {
        assert_eq!(
            "pairwise".parse::<ExtractionMode>().unwrap(),
            ExtractionMode::Pairwise
        );
        assert_eq!(
            "chronological".parse::<ExtractionMode>().unwrap(),
            ExtractionMode::Chronological
        );
        assert_eq!(ExtractionMode::Pairwise.to_string(), "pairwise");
    }

    #[test]
    fn mode_rejects_unknown_names() {
        let err = "sideways".parse::<ExtractionMode>().unwrap_err();
        assert!(matches!(
            err,
            FlowError::Configuration(msg) if msg.contains("sideways")
        ));
    }

    #[test]
    fn default_config_carries_reserved_fields() {
        let config = FlowConfig::default();
        assert_eq!(config.reserved_fields, vec!["id", "name", "description"]);
        assert_eq!(config.missing_value_label, "(missing)");
    }
}
