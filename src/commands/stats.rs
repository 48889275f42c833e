//! `pathgraph stats` command - node and edge totals

use crate::cli::{OutputFormat, StatsArgs};
use crate::commands::dispatch::CommandContext;
use crate::loader;
use pathgraph_core::error::Result;

/// Execute the stats command
pub fn execute(ctx: &CommandContext, args: &StatsArgs) -> Result<()> {
    let (nodes, edges) = if args.weighted {
        let graph = loader::load_weighted(&args.graph, &ctx.config.search)?;
        (graph.total_nodes(), graph.total_edges())
    } else {
        let graph = loader::load_labeled(&args.graph, &ctx.config.search)?;
        (graph.total_nodes(), graph.total_edges())
    };

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "nodes": nodes,
                "edges": edges,
                "weighted": args.weighted,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("nodes: {}", nodes);
            println!("edges: {}", edges);
        }
    }

    Ok(())
}
