//! Immutable graph snapshot
//!
//! A loader builds a [`Graph`] and freezes it before querying. The snapshot
//! keeps each node's outgoing edges sorted by (child, label), so searches do
//! not re-sort adjacency on every expansion.

use crate::bail_unknown_node;
use crate::error::Result;
use crate::graph::edge::expansion_order;
use crate::graph::traversal::{GraphView, Label, NodeId};
use crate::graph::{Edge, Graph};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
pub struct FrozenGraph<N, L> {
    adjacency: HashMap<N, Vec<Edge<N, L>>>,
    total_edges: usize,
    check_invariants: bool,
}

impl<N: NodeId + Ord, L: Label + Ord> FrozenGraph<N, L> {
    pub(crate) fn from_graph(
        adjacency: HashMap<N, HashSet<Edge<N, L>>>,
        total_edges: usize,
        check_invariants: bool,
    ) -> Self {
        let adjacency = adjacency
            .into_iter()
            .map(|(node, edges)| {
                let mut edges: Vec<Edge<N, L>> = edges.into_iter().collect();
                edges.sort_by(expansion_order);
                (node, edges)
            })
            .collect();
        tracing::debug!(total_edges, "froze graph");
        FrozenGraph {
            adjacency,
            total_edges,
            check_invariants,
        }
    }

    /// Turn the snapshot back into a mutable graph
    pub fn thaw(self) -> Graph<N, L> {
        let adjacency = self
            .adjacency
            .into_iter()
            .map(|(node, edges)| (node, edges.into_iter().collect()))
            .collect();
        Graph::from_parts(adjacency, self.total_edges, self.check_invariants)
    }

    pub fn list_nodes(&self) -> HashSet<&N> {
        self.adjacency.keys().collect()
    }

    /// Nodes in ascending order
    pub fn sorted_nodes(&self) -> Vec<&N> {
        let mut nodes: Vec<&N> = self.adjacency.keys().collect();
        nodes.sort();
        nodes
    }

    /// Every edge of the snapshot, in no particular order
    pub fn edges(&self) -> impl Iterator<Item = &Edge<N, L>> {
        self.adjacency.values().flatten()
    }

    pub fn list_children(&self, parent: &N) -> Result<HashSet<&N>> {
        Ok(self.list_edges(parent)?.iter().map(Edge::child).collect())
    }

    /// Outgoing edges of `node`, ordered by child then label
    pub fn list_edges(&self, node: &N) -> Result<&[Edge<N, L>]> {
        match self.adjacency.get(node) {
            Some(edges) => Ok(edges.as_slice()),
            None => bail_unknown_node!(node),
        }
    }

    pub fn get_labels(&self, parent: &N, child: &N) -> Result<HashSet<&L>> {
        if !self.adjacency.contains_key(child) {
            bail_unknown_node!(child);
        }
        Ok(self
            .list_edges(parent)?
            .iter()
            .filter(|edge| edge.child() == child)
            .map(Edge::label)
            .collect())
    }

    pub fn total_num_edges(&self, parent: &N, child: &N) -> Result<usize> {
        Ok(self.get_labels(parent, child)?.len())
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

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

impl<N: NodeId + Ord, L: Label + Ord> GraphView<N, L> for FrozenGraph<N, L> {
    fn contains_node(&self, node: &N) -> bool {
        FrozenGraph::contains_node(self, node)
    }

    fn sorted_edges(&self, node: &N) -> Result<Vec<&Edge<N, L>>> {
        Ok(self.list_edges(node)?.iter().collect())
    }

    fn all_edges(&self) -> Box<dyn Iterator<Item = &Edge<N, L>> + '_> {
        Box::new(self.edges())
    }

    fn check_rep(&self) {
        let mut counted = 0;
        for (node, edges) in &self.adjacency {
            assert!(
                edges.windows(2).all(|w| expansion_order(&w[0], &w[1]).is_lt()),
                "adjacency of {:?} out of order or duplicated",
                node
            );
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
        assert_eq!(counted, self.total_edges, "cached edge count out of sync");
    }

    fn before_search(&self) {
        if self.check_invariants {
            GraphView::check_rep(self);
        }
    }
}
