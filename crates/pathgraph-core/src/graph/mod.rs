//! Labeled directed multigraph and path search
//!
//! - `multigraph`: the mutable [`Graph`] ADT
//! - `frozen`: immutable [`FrozenGraph`] snapshots with pre-sorted adjacency
//! - `path`: weighted [`Path`] values returned by the weighted search
//! - `algos`: BFS (fewest edges) and Dijkstra (least cost) searches
//! - `traversal`: the [`GraphView`] trait both searches consume

pub mod algos;
pub mod edge;
pub mod frozen;
pub mod multigraph;
pub mod path;
pub mod traversal;
pub mod types;

pub use algos::{
    find_unweighted_path, find_unweighted_path_with, find_weighted_path, find_weighted_path_with,
};
pub use edge::Edge;
pub use frozen::FrozenGraph;
pub use multigraph::Graph;
pub use path::{Path, Segment};
pub use traversal::{GraphView, Label, NodeId};
pub use types::{Cost, Point};
