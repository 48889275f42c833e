//! CLI commands for pathgraph

pub mod buildings;
pub mod dispatch;
pub mod hops;
pub mod route;
pub mod stats;
