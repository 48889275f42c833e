//! `pathgraph buildings` command - list the named buildings of a campus file

use crate::cli::{GraphArgs, OutputFormat};
use crate::commands::dispatch::CommandContext;
use crate::loader;
use pathgraph_core::error::Result;

/// Execute the buildings command
pub fn execute(ctx: &CommandContext, args: &GraphArgs) -> Result<()> {
    let campus = loader::load_campus(&args.graph, &ctx.config.search)?;

    match ctx.cli.format {
        OutputFormat::Json => {
            let buildings: Vec<_> = campus.buildings().collect();
            println!("{}", serde_json::to_string_pretty(&buildings)?);
        }
        OutputFormat::Human => {
            for (short, long) in campus.building_names() {
                println!("{}: {}", short, long);
            }
        }
    }

    Ok(())
}
