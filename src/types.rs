/// Unique node label within a flow graph.
/// Examples: `Open`, `In Progress`, `shipped`
pub type NodeLabel = String;
/// Column/field name within a record batch.
/// Examples: `old_value`, `new_value`, `stage_packed`
pub type FieldName = String;
/// Node position within a serialized graph's label sequence.
pub type NodeIndex = usize;
/// Aggregated link weight (transition occurrence count, always >= 1).
pub type Weight = u64;
