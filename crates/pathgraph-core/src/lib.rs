//! Pathgraph Core Library
//!
//! A generic labeled directed multigraph with exact shortest-path searches:
//! breadth-first search for fewest hops and Dijkstra for least total cost.

pub mod campus;
pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;

pub use campus::{Building, CampusMap};
pub use error::{GraphError, Result};
pub use graph::{
    find_unweighted_path, find_weighted_path, Cost, Edge, FrozenGraph, Graph, GraphView, Path,
    Point, Segment,
};
