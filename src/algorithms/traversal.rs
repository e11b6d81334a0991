//! Bounded breadth-first traversal with subgraph edge collection

use crate::error::Result;
use crate::storage::{CsrGraph, NodeId};
use std::collections::VecDeque;

/// Output of [`bounded_bfs`]: discovery order plus the edges seen while
/// expanding the explored region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BfsResult {
    /// Nodes in discovery order; the start node is always first.
    pub visit_order: Vec<u32>,
    /// Every outgoing edge inspected during expansion, tree edges and edges
    /// to already-discovered nodes alike.
    pub subgraph_edges: Vec<(u32, u32)>,
}

/// Level-order BFS from `start`, bounded by `max_depth`
///
/// Each node is enqueued at most once. A node is expanded only while its
/// discovered distance is strictly below `max_depth`; nodes at exactly
/// `max_depth` are visited but contribute no further discoveries, so
/// `max_depth <= 0` yields only the start node and no edges.
///
/// While a node `u` is expanded, *every* outgoing edge `(u, v)` is recorded,
/// not just tree edges. The result is the full edge set incident to the
/// explored region (which can include edges to nodes discovered earlier at
/// a shallower depth), the useful shape for subgraph extraction.
///
/// # Errors
///
/// Returns [`crate::GraphError::OutOfRange`] if `start` is not a valid node.
///
/// # Example
///
/// ```
/// use csr_graph::{bounded_bfs, CsrGraph, NodeId};
///
/// let graph = CsrGraph::from_edges(3, vec![(0, 1), (1, 2)], true).unwrap();
/// let result = bounded_bfs(&graph, NodeId(0), 1).unwrap();
///
/// assert_eq!(result.visit_order, vec![0, 1]); // node 2 is two hops away
/// assert_eq!(result.subgraph_edges, vec![(0, 1)]);
/// ```
#[allow(clippy::cast_possible_truncation)] // Graphs >4B nodes not supported
pub fn bounded_bfs(graph: &CsrGraph, start: NodeId, max_depth: i32) -> Result<BfsResult> {
    let start_idx = graph.check_node(start)?;
    let n = graph.num_nodes();

    let mut visit_order = vec![start.0];
    let mut subgraph_edges = Vec::new();
    let mut visited = vec![false; n];
    let mut dist = vec![0_i32; n];
    let mut frontier = VecDeque::new();

    visited[start_idx] = true;
    frontier.push_back(start_idx);

    while let Some(u) = frontier.pop_front() {
        if dist[u] >= max_depth {
            continue; // visited, not expanded
        }

        for &v in graph.neighbor_slice(u) {
            let v_idx = v as usize;
            if !visited[v_idx] {
                visited[v_idx] = true;
                dist[v_idx] = dist[u] + 1;
                frontier.push_back(v_idx);
                visit_order.push(v);
            }
            subgraph_edges.push((u as u32, v));
        }
    }

    Ok(BfsResult {
        visit_order,
        subgraph_edges,
    })
}
