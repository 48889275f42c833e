//! `pathgraph hops` command - fewest-edge path in a labeled graph
//!
//! Prints one line per edge (`A to B via label`), or `no path found`.

use tracing::debug;

use crate::cli::{OutputFormat, PairArgs};
use crate::commands::dispatch::CommandContext;
use crate::loader;
use pathgraph_core::error::Result;
use pathgraph_core::format::edge_lines;
use pathgraph_core::graph::find_unweighted_path_with;

/// Execute the hops command
pub fn execute(ctx: &CommandContext, args: &PairArgs) -> Result<()> {
    let from = loader::required(Some(&args.from), "start node")?.to_string();
    let to = loader::required(Some(&args.to), "destination node")?.to_string();

    let graph = loader::load_labeled(&args.graph, &ctx.config.search)?;
    debug!(elapsed = ?ctx.start.elapsed(), "load_graph");

    let path = find_unweighted_path_with(&graph, &from, &to, &ctx.config.search)?;
    debug!(elapsed = ?ctx.start.elapsed(), found = path.is_some(), "search");

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "from": from,
                "to": to,
                "found": path.is_some(),
                "hops": path.as_ref().map(Vec::len),
                "edges": path,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => match path {
            Some(edges) => {
                if !ctx.cli.quiet {
                    println!("path from {} to {}:", from, to);
                }
                for line in edge_lines(&edges) {
                    println!("{}", line);
                }
            }
            None => println!("no path found"),
        },
    }

    Ok(())
}
