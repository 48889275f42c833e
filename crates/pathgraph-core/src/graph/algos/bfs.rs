use crate::config::SearchConfig;
use crate::error::{GraphError, Result};
use crate::graph::traversal::{GraphView, Label, NodeId};
use crate::graph::Edge;
use crate::trace_time;
use std::collections::{HashMap, VecDeque};
use std::time::Instant;

/// How each discovered node was first reached; `None` marks the start node
type Predecessors<'g, N, L> = HashMap<&'g N, Option<&'g Edge<N, L>>>;

/// Find a path with the fewest edges from `start` to `destination`.
///
/// Outgoing edges are expanded in ascending (child, label) order, so among
/// equally short paths the one returned is the first under that order, and
/// repeated searches on an unchanged graph return identical results.
///
/// Returns `Ok(None)` when `destination` is unreachable and an empty edge list
/// when `start == destination`.
pub fn find_unweighted_path<N, L, G>(
    graph: &G,
    start: &N,
    destination: &N,
) -> Result<Option<Vec<Edge<N, L>>>>
where
    N: NodeId + Ord,
    L: Label + Ord,
    G: GraphView<N, L> + ?Sized,
{
    find_unweighted_path_with(graph, start, destination, &SearchConfig::default())
}

/// [`find_unweighted_path`] with explicit search configuration
#[tracing::instrument(level = "debug", skip_all, fields(start = ?start, destination = ?destination))]
pub fn find_unweighted_path_with<N, L, G>(
    graph: &G,
    start: &N,
    destination: &N,
    config: &SearchConfig,
) -> Result<Option<Vec<Edge<N, L>>>>
where
    N: NodeId + Ord,
    L: Label + Ord,
    G: GraphView<N, L> + ?Sized,
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

    let started = Instant::now();
    let mut discovered: Predecessors<'_, N, L> = HashMap::new();
    let mut queue: VecDeque<&N> = VecDeque::new();
    let mut expanded = 0usize;

    discovered.insert(start, None);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current == destination {
            let path = reconstruct_path(&discovered, current);
            trace_time!(started, "find_unweighted_path", expanded = expanded);
            tracing::debug!(expanded, hops = path.len(), "path found");
            return Ok(Some(path));
        }

        expanded += 1;
        for edge in graph.sorted_edges(current)? {
            let child = edge.child();
            if !discovered.contains_key(child) {
                tracing::trace!(from = ?current, to = ?child, label = ?edge.label(), "discovered");
                discovered.insert(child, Some(edge));
                queue.push_back(child);
            }
        }
    }

    trace_time!(started, "find_unweighted_path", expanded = expanded);
    tracing::debug!(expanded, "no path found");
    Ok(None)
}

/// Walk predecessor edges back from `target` to the start node
fn reconstruct_path<N: NodeId, L: Label>(
    discovered: &Predecessors<'_, N, L>,
    target: &N,
) -> Vec<Edge<N, L>> {
    let mut edges = Vec::new();
    let mut current = target;
    while let Some(Some(edge)) = discovered.get(current) {
        edges.push((*edge).clone());
        current = edge.parent();
    }
    edges.reverse();
    edges
}
