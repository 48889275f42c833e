//! `pathgraph route` command - least-cost route between two locations
//!
//! Nodes are `"x,y"` points and edges carry costs. Either endpoint may be a
//! building short name from the file's `[[buildings]]` table. Prints one line
//! per segment followed by the total cost, or `no path found`.

use tracing::debug;

use crate::cli::{OutputFormat, PairArgs};
use crate::commands::dispatch::CommandContext;
use crate::loader;
use pathgraph_core::error::Result;
use pathgraph_core::format::segment_lines;
use pathgraph_core::CampusMap;

/// Execute the route command
pub fn execute(ctx: &CommandContext, args: &PairArgs) -> Result<()> {
    let campus = loader::load_campus(&args.graph, &ctx.config.search)?;
    debug!(elapsed = ?ctx.start.elapsed(), "load_graph");

    let from = campus.locate(&args.from)?;
    let to = campus.locate(&args.to)?;
    let path = campus.find_route(&args.from, &args.to, &ctx.config.search)?;
    debug!(elapsed = ?ctx.start.elapsed(), found = path.is_some(), "search");

    let precision = ctx.config.output.precision;
    match ctx.cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "from": from,
                "to": to,
                "from_building": building_name(&campus, &args.from),
                "to_building": building_name(&campus, &args.to),
                "found": path.is_some(),
                "path": path,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => match path {
            Some(path) => {
                if !ctx.cli.quiet {
                    let from = building_name(&campus, &args.from)
                        .unwrap_or_else(|| from.to_string());
                    let to = building_name(&campus, &args.to).unwrap_or_else(|| to.to_string());
                    println!("path from {} to {}:", from, to);
                }
                for line in segment_lines(&path, precision) {
                    println!("{}", line);
                }
            }
            None => println!("no path found"),
        },
    }

    Ok(())
}

/// Long name when `name` is a building short name
fn building_name(campus: &CampusMap, name: &str) -> Option<String> {
    campus
        .long_name_for_short(name.trim())
        .ok()
        .map(str::to_string)
}
