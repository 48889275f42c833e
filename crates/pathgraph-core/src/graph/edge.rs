use serde::Serialize;
use std::cmp::Ordering;

/// A single immutable directed edge from `parent` to `child` carrying `label`.
///
/// Edges are plain values: they hold no reference to the graph that stores
/// them, and two edges are equal when all three fields are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge<N, L> {
    parent: N,
    child: N,
    label: L,
}

impl<N, L> Edge<N, L> {
    pub fn new(parent: N, child: N, label: L) -> Self {
        Edge {
            parent,
            child,
            label,
        }
    }

    pub fn parent(&self) -> &N {
        &self.parent
    }

    pub fn child(&self) -> &N {
        &self.child
    }

    pub fn label(&self) -> &L {
        &self.label
    }

    pub fn into_parts(self) -> (N, N, L) {
        (self.parent, self.child, self.label)
    }
}

impl<N: Clone, L: Clone> Edge<N, L> {
    /// The same connection in the opposite direction
    pub fn reversed(&self) -> Self {
        Edge::new(self.child.clone(), self.parent.clone(), self.label.clone())
    }
}

/// Expansion order used by the searches: destination first, then label.
pub(crate) fn expansion_order<N: Ord, L: Ord>(a: &Edge<N, L>, b: &Edge<N, L>) -> Ordering {
    a.child.cmp(&b.child).then_with(|| a.label.cmp(&b.label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_accessors() {
        let edge = Edge::new("Hulk", "Thor", "AVF 4");
        assert_eq!(*edge.parent(), "Hulk");
        assert_eq!(*edge.child(), "Thor");
        assert_eq!(*edge.label(), "AVF 4");
    }

    #[test]
    fn test_edge_equality_is_by_value() {
        let a = Edge::new("A".to_string(), "B".to_string(), "x".to_string());
        let b = Edge::new("A".to_string(), "B".to_string(), "x".to_string());
        let c = Edge::new("A".to_string(), "B".to_string(), "y".to_string());
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_edge_reversed() {
        let edge = Edge::new("A", "B", 3);
        assert_eq!(edge.reversed(), Edge::new("B", "A", 3));
    }

    #[test]
    fn test_expansion_order_child_then_label() {
        let mut edges = vec![
            Edge::new("S", "B", "a"),
            Edge::new("S", "A", "z"),
            Edge::new("S", "A", "b"),
        ];
        edges.sort_by(expansion_order);
        assert_eq!(
            edges,
            vec![
                Edge::new("S", "A", "b"),
                Edge::new("S", "A", "z"),
                Edge::new("S", "B", "a"),
            ]
        );
    }
}
