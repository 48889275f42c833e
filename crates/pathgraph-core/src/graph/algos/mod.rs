//! Graph algorithm implementations
//!
//! - `bfs`: fewest-edge path search over any label type
//! - `dijkstra`: minimum-cost path search over non-negative [`Cost`] labels
//!
//! [`Cost`]: crate::graph::Cost

pub mod bfs;
pub mod dijkstra;

pub use bfs::{find_unweighted_path, find_unweighted_path_with};
pub use dijkstra::{find_weighted_path, find_weighted_path_with};
