//! Argument structs shared by subcommands

use clap::Args;
use std::path::PathBuf;

/// A graph file and the two endpoints of a search
#[derive(Args, Debug, Clone)]
pub struct PairArgs {
    /// Graph description file (TOML)
    pub graph: PathBuf,

    /// Start node
    pub from: String,

    /// Destination node
    pub to: String,
}

#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Graph description file (TOML)
    pub graph: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    /// Graph description file (TOML)
    pub graph: PathBuf,

    /// Read edges as weighted (`cost`, nodes are "x,y" points)
    #[arg(long)]
    pub weighted: bool,
}
