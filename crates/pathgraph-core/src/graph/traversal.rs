use crate::error::Result;
use crate::graph::Edge;
use std::fmt::Debug;
use std::hash::Hash;

/// Requirements on node identifiers: value equality, hashing, cheap cloning.
pub trait NodeId: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> NodeId for T {}

/// Requirements on edge labels.
pub trait Label: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> Label for T {}

/// Read-only adjacency consumed by the path searches
pub trait GraphView<N, L> {
    fn contains_node(&self, node: &N) -> bool;

    /// Outgoing edges of `node`, ordered by child then label.
    /// Fails with `UnknownNode` when `node` is absent.
    fn sorted_edges(&self, node: &N) -> Result<Vec<&Edge<N, L>>>;

    /// Every edge of the graph, in no particular order
    fn all_edges(&self) -> Box<dyn Iterator<Item = &Edge<N, L>> + '_>;

    /// Assert representation invariants, panicking on violation
    fn check_rep(&self) {}

    /// Hook run once before a search starts
    fn before_search(&self) {}
}
