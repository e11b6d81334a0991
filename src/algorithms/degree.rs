//! Degree-extremal node queries
//!
//! Out-degree comes straight from the offset table (O(V) scan overall);
//! in-degree needs a full pass over the neighbor array first, because the
//! forward-only CSR keeps no reverse index. Both scans use a strict `>`
//! comparison, so ties resolve to the smallest internal id.

use crate::storage::{CsrGraph, NodeId};

/// Node with the largest out-degree, or `None` for an empty graph
///
/// Ties resolve to the smallest internal id. O(V).
#[must_use]
#[allow(clippy::cast_possible_truncation)] // Graphs >4B nodes not supported
pub fn max_out_degree_node(graph: &CsrGraph) -> Option<NodeId> {
    let (offsets, _) = graph.csr_components();
    let mut best: Option<(NodeId, u32)> = None;

    for i in 0..graph.num_nodes() {
        let deg = offsets[i + 1] - offsets[i];
        // Strict > keeps the smallest id on ties
        if best.map_or(true, |(_, max)| deg > max) {
            best = Some((NodeId(i as u32), deg));
        }
    }

    best.map(|(node, _)| node)
}

/// Node with the largest in-degree, or `None` for an empty graph
///
/// Counts in-degrees with one scan over the whole neighbor array, then
/// resolves ties like [`max_out_degree_node`]. O(V + E) — deliberately more
/// expensive than the out-degree query.
#[must_use]
#[allow(clippy::cast_possible_truncation)] // Graphs >4B nodes not supported
pub fn max_in_degree_node(graph: &CsrGraph) -> Option<NodeId> {
    let n = graph.num_nodes();
    if n == 0 {
        return None;
    }

    let (_, neighbors) = graph.csr_components();
    let mut in_degree = vec![0_u32; n];
    for &v in neighbors {
        in_degree[v as usize] += 1;
    }

    let mut best: Option<(NodeId, u32)> = None;
    for (i, &deg) in in_degree.iter().enumerate() {
        if best.map_or(true, |(_, max)| deg > max) {
            best = Some((NodeId(i as u32), deg));
        }
    }

    best.map(|(node, _)| node)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph_has_no_extremal_nodes() {
        let graph = CsrGraph::new();
        assert_eq!(max_out_degree_node(&graph), None);
        assert_eq!(max_in_degree_node(&graph), None);
    }

    #[test]
    fn test_out_degree_hub() {
        // 1 fans out to three nodes
        let graph = CsrGraph::from_edges(4, vec![(1, 0), (1, 2), (1, 3), (0, 2)], true).unwrap();
        assert_eq!(max_out_degree_node(&graph), Some(NodeId(1)));
    }

    #[test]
    fn test_in_degree_sink() {
        // Everything points at 3
        let graph = CsrGraph::from_edges(4, vec![(0, 3), (1, 3), (2, 3), (0, 1)], true).unwrap();
        assert_eq!(max_in_degree_node(&graph), Some(NodeId(3)));
    }

    #[test]
    fn test_tie_break_prefers_smallest_id() {
        // Nodes 0 and 1 both have out-degree 1 and in-degree 1
        let graph = CsrGraph::from_edges(2, vec![(0, 1), (1, 0)], true).unwrap();
        assert_eq!(max_out_degree_node(&graph), Some(NodeId(0)));
        assert_eq!(max_in_degree_node(&graph), Some(NodeId(0)));
    }

    #[test]
    fn test_edgeless_graph_returns_first_node() {
        // All degrees zero; the strict > scan keeps node 0
        let graph = CsrGraph::from_edges(3, vec![], true).unwrap();
        assert_eq!(max_out_degree_node(&graph), Some(NodeId(0)));
        assert_eq!(max_in_degree_node(&graph), Some(NodeId(0)));
    }

    #[test]
    fn test_undirected_degrees_symmetric() {
        // Star centered on 0, undirected: 0 has out- and in-degree 3
        let graph = CsrGraph::from_edges(4, vec![(0, 1), (0, 2), (0, 3)], false).unwrap();
        assert_eq!(max_out_degree_node(&graph), Some(NodeId(0)));
        assert_eq!(max_in_degree_node(&graph), Some(NodeId(0)));
    }
}
