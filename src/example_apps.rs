use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};

use crate::config::{ExtractionMode, FlowConfig};
use crate::errors::FlowError;
use crate::metrics::flow_balance;
use crate::pipeline::build_flow_graph;
use crate::record::RecordBatch;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Pairwise,
    Chronological,
}

impl From<ModeArg> for ExtractionMode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Pairwise => ExtractionMode::Pairwise,
            ModeArg::Chronological => ExtractionMode::Chronological,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "sankey_demo",
    disable_help_subcommand = true,
    about = "Build a Sankey flow graph from JSON rows",
    long_about = "Load a JSON array of flat row objects (the worksheet-to-rows shape), \
run the selected extraction mode, and print the resulting graph."
)]
struct SankeyDemoCli {
    #[arg(value_name = "ROWS_JSON", help = "Path to a JSON array of row objects")]
    rows_path: PathBuf,
    #[arg(
        long,
        value_enum,
        default_value = "pairwise",
        help = "Transition extraction mode"
    )]
    mode: ModeArg,
    #[arg(long, help = "Print the full graph as JSON instead of a summary")]
    json: bool,
}

/// Parse process arguments and run the demo transformation.
pub fn run_sankey_demo() -> Result<(), FlowError> {
    let cli = SankeyDemoCli::parse();
    run_sankey_demo_at(&cli.rows_path, cli.mode.into(), cli.json)
}

/// Run the demo transformation against `path` and print the result.
pub fn run_sankey_demo_at(path: &Path, mode: ExtractionMode, as_json: bool) -> Result<(), FlowError> {
    let raw = fs::read_to_string(path)?;
    let rows: Vec<serde_json::Value> = serde_json::from_str(&raw)?;
    let batch = RecordBatch::from_json_rows(&rows)?;
    let graph = build_flow_graph(&batch, &FlowConfig::new(mode))?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&graph)?);
        return Ok(());
    }

    println!(
        "mode={mode} records={} nodes={} links={} total_weight={}",
        batch.len(),
        graph.nodes.len(),
        graph.links.len(),
        graph.total_weight()
    );
    for link in &graph.links {
        let source = graph.label(link.source).unwrap_or("?");
        let target = graph.label(link.target).unwrap_or("?");
        println!("  {source} -> {target} ({})", link.value);
    }
    if let Some(balance) = flow_balance(&graph) {
        for node in balance.nodes {
            println!(
                "  [{}] in={} out={} share={:.2}",
                node.label, node.inflow, node.outflow, node.share
            );
        }
    }
    Ok(())
}
