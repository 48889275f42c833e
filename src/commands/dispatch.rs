//! Command dispatch logic for pathgraph

use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::commands;
use pathgraph_core::config::PathgraphConfig;
use pathgraph_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: PathgraphConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Result<Self> {
        let config = PathgraphConfig::load_or_default(cli.config.as_deref())?;
        debug!(elapsed = ?start.elapsed(), "load_config");
        Ok(Self { cli, config, start })
    }
}

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    match &cli.command {
        None => {
            print_banner();
            Ok(())
        }
        Some(command) => {
            let ctx = CommandContext::new(cli, start)?;
            match command {
                Commands::Hops(args) => commands::hops::execute(&ctx, args),
                Commands::Route(args) => commands::route::execute(&ctx, args),
                Commands::Stats(args) => commands::stats::execute(&ctx, args),
                Commands::Buildings(args) => commands::buildings::execute(&ctx, args),
            }
        }
    }
}

fn print_banner() {
    println!("pathgraph {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Shortest paths over labeled directed multigraphs.");
    println!();
    println!("Run `pathgraph --help` for usage information.");
}
