//! Integration tests for csr-graph
//!
//! End-to-end scenarios: edge file on disk → CSR graph → queries.

use csr_graph::{
    bounded_bfs, connected_components, max_in_degree_node, max_out_degree_node, CsrGraph,
    GraphError, NodeId,
};
use std::io::Write;

fn edge_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_undirected_load_and_queries() {
    let file = edge_file("0 1\n0 2\n1 2\n2 3\n");
    let graph = CsrGraph::from_edge_file(file.path(), false).unwrap();

    // 4 nodes, 4 edges each mirrored
    assert_eq!(graph.size(), (4, 8));

    // Adjacency: 0:{1,2}  1:{0,2}  2:{0,1,3}  3:{2}
    assert_eq!(graph.neighbors_of(NodeId(0)).unwrap(), vec![1, 2]);
    assert_eq!(graph.neighbors_of(NodeId(2)).unwrap(), vec![0, 1, 3]);
    assert_eq!(graph.out_degree(NodeId(3)).unwrap(), 1);

    // Node 2 touches everything; it wins both degree scans
    assert_eq!(max_out_degree_node(&graph), Some(NodeId(2)));
    assert_eq!(max_in_degree_node(&graph), Some(NodeId(2)));

    // Depth 1 reaches {0, 1, 2}; depth 2 also picks up node 3
    let shallow = bounded_bfs(&graph, NodeId(0), 1).unwrap();
    assert_eq!(shallow.visit_order, vec![0, 1, 2]);

    let deep = bounded_bfs(&graph, NodeId(0), 2).unwrap();
    assert_eq!(deep.visit_order.len(), 4);

    assert_eq!(connected_components(&graph), 1);
}

#[test]
fn test_directed_load_and_traversal() {
    let file = edge_file("0 1\n0 2\n1 2\n2 3\n");
    let graph = CsrGraph::from_edge_file(file.path(), true).unwrap();

    assert_eq!(graph.size(), (4, 4));

    // Forward reachability covers the whole chain from node 0
    let result = bounded_bfs(&graph, NodeId(0), 10).unwrap();
    assert_eq!(result.visit_order, vec![0, 1, 2, 3]);

    // Node 3 has no outgoing edges
    let sink = bounded_bfs(&graph, NodeId(3), 10).unwrap();
    assert_eq!(sink.visit_order, vec![3]);
    assert!(sink.subgraph_edges.is_empty());

    assert_eq!(connected_components(&graph), 1);
}

#[test]
fn test_bfs_subgraph_contains_non_tree_edges() {
    let file = edge_file("0 1\n0 2\n1 2\n2 3\n");
    let graph = CsrGraph::from_edge_file(file.path(), true).unwrap();

    let result = bounded_bfs(&graph, NodeId(0), 2).unwrap();
    // (1, 2) is recorded even though node 2 was discovered from node 0
    assert!(result.subgraph_edges.contains(&(1, 2)));
    assert_eq!(result.subgraph_edges.len(), 4);
}

#[test]
fn test_empty_file_yields_empty_graph() {
    let file = edge_file("");
    let graph = CsrGraph::from_edge_file(file.path(), false).unwrap();

    assert_eq!(graph.size(), (0, 0));
    assert_eq!(max_out_degree_node(&graph), None);
    assert_eq!(max_in_degree_node(&graph), None);
    assert_eq!(connected_components(&graph), 0);
}

#[test]
fn test_comment_only_file_yields_empty_graph() {
    let file = edge_file("# just\n# comments\n\n");
    let graph = CsrGraph::from_edge_file(file.path(), true).unwrap();
    assert_eq!(graph.size(), (0, 0));
}

#[test]
fn test_negative_id_aborts_load() {
    let file = edge_file("0 1\n5 -1\n");
    let err = CsrGraph::from_edge_file(file.path(), false).unwrap_err();
    assert!(matches!(err, GraphError::NegativeId(-1)));
}

#[test]
fn test_sparse_snap_style_ids() {
    // Non-contiguous ids as found in SNAP dumps; remapped densely in
    // first-occurrence order: 101 → 0, 3 → 1, 420000 → 2, 7 → 3
    let file = edge_file("# FromNodeId ToNodeId\n101 3\n3 420000\n101 7\n");
    let graph = CsrGraph::from_edge_file(file.path(), true).unwrap();

    assert_eq!(graph.num_nodes(), 4);
    assert_eq!(graph.neighbors_of(NodeId(0)).unwrap(), vec![1, 3]);
    assert_eq!(graph.neighbors_of(NodeId(1)).unwrap(), vec![2]);
}

#[test]
fn test_messy_input_produces_sorted_deduplicated_adjacency() {
    let file = edge_file("2 1\n2 0\n2 1\n# noise\nbogus line\n2 3\n");
    let graph = CsrGraph::from_edge_file(file.path(), true).unwrap();

    // Internal ids: 2 → 0, 1 → 1, 0 → 2, 3 → 3; duplicates collapsed
    let neighbors = graph.neighbors_of(NodeId(0)).unwrap();
    assert_eq!(neighbors, vec![1, 2, 3]);
    assert!(neighbors.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_repeated_load_is_identical() {
    let file = edge_file("9 4\n4 9\n9 11\n11 4\n");
    let a = CsrGraph::from_edge_file(file.path(), false).unwrap();
    let b = CsrGraph::from_edge_file(file.path(), false).unwrap();

    assert_eq!(a.size(), b.size());
    assert_eq!(a.csr_components(), b.csr_components());
}

#[test]
fn test_query_errors_leave_graph_usable() {
    let file = edge_file("0 1\n");
    let graph = CsrGraph::from_edge_file(file.path(), true).unwrap();

    assert!(graph.neighbors_of(NodeId(7)).is_err());
    assert!(bounded_bfs(&graph, NodeId(7), 1).is_err());

    // Out-of-range queries are local failures; the graph still answers
    assert_eq!(graph.neighbors_of(NodeId(0)).unwrap(), vec![1]);
    assert_eq!(connected_components(&graph), 1);
}
