//! CLI argument parsing for pathgraph
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod args;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{GraphArgs, PairArgs, StatsArgs};
pub use pathgraph_core::format::OutputFormat;

/// Pathgraph - shortest paths over labeled directed multigraphs
#[derive(Parser, Debug)]
#[command(name = "pathgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human or json)
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (error, warn, info, debug, trace) or a full directive
    #[arg(long, global = true, env = "PATHGRAPH_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (TOML)
    #[arg(long, global = true, env = "PATHGRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fewest-edge path between two nodes of a labeled graph
    Hops(PairArgs),

    /// Least-cost route between two points or buildings of a weighted graph
    Route(PairArgs),

    /// Node and edge totals of a graph file
    Stats(StatsArgs),

    /// Named buildings of a weighted graph file
    Buildings(GraphArgs),
}
