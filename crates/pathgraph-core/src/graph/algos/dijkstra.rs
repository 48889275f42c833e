use crate::config::{SearchConfig, TieBreak};
use crate::error::{GraphError, Result};
use crate::graph::traversal::{GraphView, NodeId};
use crate::graph::types::Cost;
use crate::graph::Path;
use crate::trace_time;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};
use std::time::Instant;

/// Partial path waiting in the priority queue.
///
/// Ordered by cumulative cost, then by the configured tie-break, then by push
/// order, so no two entries ever compare equal.
#[derive(Debug, Clone)]
pub(crate) struct HeapEntry<N> {
    pub(crate) path: Path<N>,
    pub(crate) seq: u64,
    pub(crate) tie_break: TieBreak,
}

impl<N: Ord> PartialEq for HeapEntry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N: Ord> Eq for HeapEntry<N> {}

impl<N: Ord> PartialOrd for HeapEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: Ord> Ord for HeapEntry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.path
            .cmp_cost(&other.path)
            .then_with(|| match self.tie_break {
                TieBreak::NodeSequence => self.path.nodes().cmp(other.path.nodes()),
                TieBreak::Insertion => Ordering::Equal,
            })
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// State tracked during a weighted search
struct DijkstraState<N> {
    finalized: HashSet<N>,
    heap: BinaryHeap<Reverse<HeapEntry<N>>>,
    next_seq: u64,
    tie_break: TieBreak,
    stale: usize,
}

impl<N: NodeId + Ord> DijkstraState<N> {
    fn new(tie_break: TieBreak) -> Self {
        Self {
            finalized: HashSet::new(),
            heap: BinaryHeap::new(),
            next_seq: 0,
            tie_break,
            stale: 0,
        }
    }

    fn push(&mut self, path: Path<N>) {
        self.heap.push(Reverse(HeapEntry {
            path,
            seq: self.next_seq,
            tie_break: self.tie_break,
        }));
        self.next_seq += 1;
    }
}

/// Find a minimum-cost path from `start` to `destination`.
///
/// Every edge cost in the graph must be non-negative; a negative or NaN cost
/// anywhere fails the search with `InvalidCost` before any node is expanded.
/// Equal-cost candidates are ordered by their node sequence, so results are
/// reproducible.
///
/// Returns `Ok(None)` when `destination` is unreachable and a zero-segment
/// path when `start == destination`.
pub fn find_weighted_path<N, G>(graph: &G, start: &N, destination: &N) -> Result<Option<Path<N>>>
where
    N: NodeId + Ord,
    G: GraphView<N, Cost> + ?Sized,
{
    find_weighted_path_with(graph, start, destination, &SearchConfig::default())
}

/// [`find_weighted_path`] with explicit search configuration
#[tracing::instrument(level = "debug", skip_all, fields(start = ?start, destination = ?destination, tie_break = ?config.tie_break))]
pub fn find_weighted_path_with<N, G>(
    graph: &G,
    start: &N,
    destination: &N,
    config: &SearchConfig,
) -> Result<Option<Path<N>>>
where
    N: NodeId + Ord,
    G: GraphView<N, Cost> + ?Sized,
{
    if !graph.contains_node(start) {
        return Err(GraphError::unknown_node(start));
    }
    if !graph.contains_node(destination) {
        return Err(GraphError::unknown_node(destination));
    }
    if config.check_invariants {
        graph.check_rep();
    } else {
        graph.before_search();
    }
    if let Some(edge) = graph.all_edges().find(|edge| !edge.label().is_valid()) {
        tracing::debug!(edge = ?edge, "invalid edge cost");
        return Err(GraphError::InvalidCost {
            value: edge.label().value(),
        });
    }

    let started = Instant::now();
    let mut state = DijkstraState::new(config.tie_break);
    state.push(Path::singleton(start.clone()));

    while let Some(Reverse(HeapEntry { path, .. })) = state.heap.pop() {
        let end = path.end();

        if state.finalized.contains(end) {
            state.stale += 1;
            continue;
        }

        if end == destination {
            trace_time!(
                started,
                "find_weighted_path",
                finalized = state.finalized.len()
            );
            tracing::debug!(
                finalized = state.finalized.len(),
                stale = state.stale,
                segments = path.len(),
                cost = path.cost().value(),
                "path found"
            );
            return Ok(Some(path));
        }

        state.finalized.insert(end.clone());

        for edge in graph.sorted_edges(end)? {
            let cost = *edge.label();
            if !state.finalized.contains(edge.child()) {
                tracing::trace!(from = ?end, to = ?edge.child(), cost = cost.value(), "relax");
                let extended = path.extend(edge.child().clone(), cost)?;
                state.push(extended);
            }
        }
    }

    trace_time!(
        started,
        "find_weighted_path",
        finalized = state.finalized.len()
    );
    tracing::debug!(
        finalized = state.finalized.len(),
        stale = state.stale,
        "no path found"
    );
    Ok(None)
}
