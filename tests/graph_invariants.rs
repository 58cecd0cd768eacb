use std::collections::HashSet;

use sankey_flows::{
    build_flow_graph, flow_balance, CellValue, ExtractionMode, FlowConfig, FlowError, Record,
    RecordBatch,
};

fn text(value: &str) -> CellValue {
    CellValue::Text(value.to_string())
}

fn pairwise_record(old: &str, new: &str) -> Record {
    Record::from_fields([
        ("old_value".to_string(), text(old)),
        ("new_value".to_string(), text(new)),
    ])
}

fn stage_record(cells: &[(&str, CellValue)]) -> Record {
    Record::from_fields(
        cells
            .iter()
            .map(|(field, value)| ((*field).to_string(), value.clone())),
    )
}

fn pairwise(batch: &RecordBatch) -> Result<sankey_flows::FlowGraph, FlowError> {
    build_flow_graph(batch, &FlowConfig::new(ExtractionMode::Pairwise))
}

fn chronological(batch: &RecordBatch) -> Result<sankey_flows::FlowGraph, FlowError> {
    build_flow_graph(batch, &FlowConfig::new(ExtractionMode::Chronological))
}

#[test]
fn pairwise_scenario_counts_repeated_transitions() {
    let batch = RecordBatch::from_records(vec![
        pairwise_record("A", "B"),
        pairwise_record("A", "B"),
        pairwise_record("B", "C"),
    ]);
    let graph = pairwise(&batch).unwrap();

    assert_eq!(graph.nodes, vec!["A", "B", "C"]);
    let (sources, targets, values) = graph.parallel_arrays();
    assert_eq!(sources, vec![0, 1]);
    assert_eq!(targets, vec![1, 2]);
    assert_eq!(values, vec![2, 1]);
}

#[test]
fn chronological_scenario_links_consecutive_stages_only() {
    let batch = RecordBatch::from_records(vec![stage_record(&[
        ("start", text("Jan 1")),
        ("middle", text("Jan 2")),
        ("end", text("Jan 3")),
    ])]);
    let graph = chronological(&batch).unwrap();

    assert_eq!(graph.nodes, vec!["start", "middle", "end"]);
    let (sources, targets, values) = graph.parallel_arrays();
    assert_eq!(sources, vec![0, 1]);
    assert_eq!(targets, vec![1, 2]);
    assert_eq!(values, vec![1, 1]);
    // No direct start -> end edge.
    assert!(!graph
        .links
        .iter()
        .any(|link| link.source == 0 && link.target == 2));
}

#[test]
fn pairwise_validation_failure_names_both_columns() {
    let batch = RecordBatch::from_records(vec![Record::from_fields([(
        "foo".to_string(),
        CellValue::Number(1.0),
    )])]);
    let err = pairwise(&batch).unwrap_err();
    assert!(matches!(
        err,
        FlowError::MissingColumns { missing }
            if missing == vec!["old_value".to_string(), "new_value".to_string()]
    ));
}

#[test]
fn empty_batch_fails_in_either_mode() {
    let batch = RecordBatch::default();
    assert!(matches!(pairwise(&batch), Err(FlowError::EmptyDataset)));
    assert!(matches!(
        chronological(&batch),
        Err(FlowError::EmptyDataset)
    ));
}

#[test]
fn partial_timestamps_keep_all_stage_columns_as_nodes() {
    let batch = RecordBatch::from_records(vec![stage_record(&[
        ("start", text("2024-01-01")),
        ("middle", CellValue::Empty),
        ("end", text("not a date")),
    ])]);
    let graph = chronological(&batch).unwrap();

    assert_eq!(graph.nodes, vec!["start", "middle", "end"]);
    assert!(graph.links.is_empty());
}

#[test]
fn reserved_columns_never_become_nodes() {
    let batch = RecordBatch::from_records(vec![stage_record(&[
        ("id", CellValue::Number(7.0)),
        ("name", text("order-7")),
        ("description", text("late shipment")),
        ("packed", text("2024-01-01")),
        ("shipped", text("2024-01-02")),
    ])]);
    let graph = chronological(&batch).unwrap();
    assert_eq!(graph.nodes, vec!["packed", "shipped"]);
}

#[test]
fn node_labels_are_unique_for_any_input() {
    let batch = RecordBatch::from_records(vec![
        pairwise_record("A", "A"),
        pairwise_record("A", "B"),
        pairwise_record("B", "A"),
        pairwise_record("A", "B"),
    ]);
    let graph = pairwise(&batch).unwrap();
    let unique: HashSet<&String> = graph.nodes.iter().collect();
    assert_eq!(unique.len(), graph.nodes.len());
}

#[test]
fn pairwise_weights_conserve_record_count() {
    let batch = RecordBatch::from_records(vec![
        pairwise_record("A", "B"),
        pairwise_record("B", "C"),
        pairwise_record("C", "A"),
        pairwise_record("A", "B"),
        pairwise_record("A", "A"),
    ]);
    let graph = pairwise(&batch).unwrap();
    assert_eq!(graph.total_weight(), batch.len() as u64);
}

#[test]
fn chronological_weights_conserve_valid_timestamp_counts() {
    // Valid-timestamp counts per record: 3, 2, 1, 0 -> expected total 2+1+0+0.
    let batch = RecordBatch::from_records(vec![
        stage_record(&[
            ("a", text("2024-01-01")),
            ("b", text("2024-01-02")),
            ("c", text("2024-01-03")),
        ]),
        stage_record(&[
            ("a", text("2024-02-01")),
            ("b", CellValue::Empty),
            ("c", text("2024-02-02")),
        ]),
        stage_record(&[
            ("a", text("2024-03-01")),
            ("b", CellValue::Empty),
            ("c", CellValue::Empty),
        ]),
        stage_record(&[
            ("a", CellValue::Empty),
            ("b", CellValue::Empty),
            ("c", CellValue::Empty),
        ]),
    ]);
    let graph = chronological(&batch).unwrap();
    assert_eq!(graph.total_weight(), 3);
}

#[test]
fn identical_batches_produce_identical_graphs() {
    let records = vec![
        pairwise_record("Open", "In Progress"),
        pairwise_record("In Progress", "Closed"),
        pairwise_record("Open", "Closed"),
        pairwise_record("In Progress", "Closed"),
    ];
    let first = pairwise(&RecordBatch::from_records(records.clone())).unwrap();
    let second = pairwise(&RecordBatch::from_records(records)).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn chronological_orders_mixed_serial_and_text_cells() {
    // 45292 = 2024-01-01 in spreadsheet serial form.
    let batch = RecordBatch::from_records(vec![stage_record(&[
        ("received", CellValue::Number(45292.0)),
        ("shipped", text("2024-01-03")),
        ("packed", CellValue::Number(45293.5)),
    ])]);
    let graph = chronological(&batch).unwrap();
    assert_eq!(graph.nodes, vec!["received", "shipped", "packed"]);
    let labeled: Vec<(&str, &str)> = graph
        .links
        .iter()
        .map(|link| {
            (
                graph.label(link.source).unwrap(),
                graph.label(link.target).unwrap(),
            )
        })
        .collect();
    assert_eq!(labeled, vec![("received", "packed"), ("packed", "shipped")]);
}

#[test]
fn later_records_missing_pairwise_fields_use_the_placeholder() {
    let batch = RecordBatch::from_records(vec![
        pairwise_record("A", "B"),
        Record::from_fields([("old_value".to_string(), text("B"))]),
    ]);
    let graph = pairwise(&batch).unwrap();
    assert_eq!(graph.nodes, vec!["A", "B", "(missing)"]);
    assert_eq!(graph.total_weight(), 2);
}

#[test]
fn flow_balance_matches_link_totals() {
    let batch = RecordBatch::from_records(vec![
        pairwise_record("A", "B"),
        pairwise_record("A", "B"),
        pairwise_record("B", "C"),
    ]);
    let graph = pairwise(&batch).unwrap();
    let balance = flow_balance(&graph).expect("balance");
    assert_eq!(balance.total, graph.total_weight());
    let inflow_total: u64 = balance.nodes.iter().map(|node| node.inflow).sum();
    let outflow_total: u64 = balance.nodes.iter().map(|node| node.outflow).sum();
    assert_eq!(inflow_total, graph.total_weight());
    assert_eq!(outflow_total, graph.total_weight());
}
