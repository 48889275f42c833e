//! Mutable labeled directed multigraph
//!
//! Each node owns the set of its outgoing edges. Several edges may connect the
//! same ordered pair of nodes as long as their labels differ. Every mutator
//! either succeeds completely or leaves the graph untouched.

use crate::bail_unknown_node;
use crate::error::{GraphError, Result};
use crate::graph::edge::expansion_order;
use crate::graph::frozen::FrozenGraph;
use crate::graph::traversal::{GraphView, Label, NodeId};
use crate::graph::Edge;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
pub struct Graph<N, L> {
    adjacency: HashMap<N, HashSet<Edge<N, L>>>,
    total_edges: usize,
    check_invariants: bool,
}

impl<N: NodeId, L: Label> Default for Graph<N, L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeId, L: Label> Graph<N, L> {
    /// Create an empty graph.
    ///
    /// Invariant checks run after each mutation in test builds and when the
    /// `invariant-checks` feature is enabled.
    pub fn new() -> Self {
        Graph {
            adjacency: HashMap::new(),
            total_edges: 0,
            check_invariants: cfg!(any(test, feature = "invariant-checks")),
        }
    }

    /// Force invariant checking on or off for this graph
    pub fn with_invariant_checks(mut self, enabled: bool) -> Self {
        self.check_invariants = enabled;
        self
    }

    pub(crate) fn from_parts(
        adjacency: HashMap<N, HashSet<Edge<N, L>>>,
        total_edges: usize,
        check_invariants: bool,
    ) -> Self {
        let graph = Graph {
            adjacency,
            total_edges,
            check_invariants,
        };
        graph.maybe_check_rep();
        graph
    }

    /// Insert `node` with no outgoing edges
    pub fn add_node(&mut self, node: N) -> Result<()> {
        if self.adjacency.contains_key(&node) {
            tracing::debug!(node = ?node, "add_node rejected: duplicate");
            return Err(GraphError::duplicate_node(&node));
        }
        tracing::trace!(node = ?node, "add_node");
        self.adjacency.insert(node, HashSet::new());
        self.maybe_check_rep();
        Ok(())
    }

    /// Insert the edge `parent -> child` labeled `label`.
    ///
    /// Both endpoints must already be nodes of the graph, and no edge with the
    /// same (parent, child, label) may exist.
    pub fn add_edge(&mut self, parent: N, child: N, label: L) -> Result<()> {
        if !self.adjacency.contains_key(&child) {
            tracing::debug!(child = ?child, "add_edge rejected: unknown child");
            bail_unknown_node!(&child);
        }
        let Some(edges) = self.adjacency.get_mut(&parent) else {
            tracing::debug!(parent = ?parent, "add_edge rejected: unknown parent");
            bail_unknown_node!(&parent);
        };

        let edge = Edge::new(parent, child, label);
        if edges.contains(&edge) {
            tracing::debug!(edge = ?edge, "add_edge rejected: duplicate");
            return Err(GraphError::duplicate_edge(
                edge.parent(),
                edge.child(),
                edge.label(),
            ));
        }

        tracing::trace!(edge = ?edge, "add_edge");
        edges.insert(edge);
        self.total_edges += 1;
        self.maybe_check_rep();
        Ok(())
    }

    /// All nodes of the graph, in no particular order
    pub fn list_nodes(&self) -> HashSet<&N> {
        self.adjacency.keys().collect()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }

    /// Every edge of the graph, in no particular order
    pub fn edges(&self) -> impl Iterator<Item = &Edge<N, L>> {
        self.adjacency.values().flatten()
    }

    /// Distinct destinations of the outgoing edges of `parent`
    pub fn list_children(&self, parent: &N) -> Result<HashSet<&N>> {
        Ok(self.list_edges(parent)?.iter().map(Edge::child).collect())
    }

    /// Outgoing edges of `node`
    pub fn list_edges(&self, node: &N) -> Result<&HashSet<Edge<N, L>>> {
        match self.adjacency.get(node) {
            Some(edges) => Ok(edges),
            None => bail_unknown_node!(node),
        }
    }

    /// Labels of the edges running directly from `parent` to `child`
    pub fn get_labels(&self, parent: &N, child: &N) -> Result<HashSet<&L>> {
        self.require_node(child)?;
        Ok(self
            .list_edges(parent)?
            .iter()
            .filter(|edge| edge.child() == child)
            .map(Edge::label)
            .collect())
    }

    /// Number of edges running directly from `parent` to `child`
    pub fn total_num_edges(&self, parent: &N, child: &N) -> Result<usize> {
        self.require_node(child)?;
        Ok(self
            .list_edges(parent)?
            .iter()
            .filter(|edge| edge.child() == child)
            .count())
    }

    fn require_node(&self, node: &N) -> Result<()> {
        if !self.adjacency.contains_key(node) {
            bail_unknown_node!(node);
        }
        Ok(())
    }

    pub fn total_nodes(&self) -> usize {
        self.adjacency.len()
    }

    pub fn total_edges(&self) -> usize {
        self.total_edges
    }

    pub fn contains_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Remove every node and edge
    pub fn clear(&mut self) {
        self.adjacency.clear();
        self.total_edges = 0;
        self.maybe_check_rep();
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Turn the graph into an immutable snapshot with pre-sorted adjacency
    pub fn freeze(self) -> FrozenGraph<N, L>
    where
        N: Ord,
        L: Ord,
    {
        FrozenGraph::from_graph(self.adjacency, self.total_edges, self.check_invariants)
    }

    /// Assert the representation invariants:
    /// every edge starts at the node that stores it, every edge endpoint is a
    /// node of the graph, and the cached edge count matches the stored edges.
    ///
    /// Panics on violation.
    pub fn check_rep(&self) {
        let mut counted = 0;
        for (node, edges) in &self.adjacency {
            for edge in edges {
                assert!(
                    edge.parent() == node,
                    "edge {:?} stored under {:?}",
                    edge,
                    node
                );
                assert!(
                    self.adjacency.contains_key(edge.child()),
                    "edge {:?} points outside the graph",
                    edge
                );
            }
            counted += edges.len();
        }
        assert_eq!(
            counted, self.total_edges,
            "cached edge count out of sync with stored edges"
        );
    }

    fn maybe_check_rep(&self) {
        if self.check_invariants {
            self.check_rep();
        }
    }
}

impl<N: NodeId + Ord, L: Label + Ord> GraphView<N, L> for Graph<N, L> {
    fn contains_node(&self, node: &N) -> bool {
        Graph::contains_node(self, node)
    }

    fn sorted_edges(&self, node: &N) -> Result<Vec<&Edge<N, L>>> {
        let mut edges: Vec<&Edge<N, L>> = self.list_edges(node)?.iter().collect();
        edges.sort_by(|a, b| expansion_order(a, b));
        Ok(edges)
    }

    fn all_edges(&self) -> Box<dyn Iterator<Item = &Edge<N, L>> + '_> {
        Box::new(self.edges())
    }

    fn check_rep(&self) {
        Graph::check_rep(self);
    }

    fn before_search(&self) {
        self.maybe_check_rep();
    }
}
