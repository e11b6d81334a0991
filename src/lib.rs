//! csr-graph: embedded CSR graph engine for sparse edge lists
//!
//! # Overview
//!
//! csr-graph loads a line-oriented edge list into an immutable CSR
//! (Compressed Sparse Row) structure and answers queries over it: sizes,
//! neighbor lookup, degree-extremal nodes, bounded-depth BFS with subgraph
//! edge collection, and connected-component counting. It is built for
//! graphs with sparse, non-contiguous node identifiers and edge counts in
//! the millions, where a dense adjacency matrix is infeasible.
//!
//! # Quick Start
//!
//! ```
//! use csr_graph::{bounded_bfs, connected_components, CsrGraph, NodeId};
//!
//! # fn example() -> csr_graph::Result<()> {
//! // Build from an in-memory edge list (or from a file via `from_edge_file`)
//! let graph = CsrGraph::from_edges(3, vec![(0, 1), (0, 2), (1, 2)], true)?;
//!
//! // Neighbor queries return owned, sorted copies
//! assert_eq!(graph.neighbors_of(NodeId(0))?, vec![1, 2]);
//!
//! // Bounded traversal from node 0, one level deep
//! let bfs = bounded_bfs(&graph, NodeId(0), 1)?;
//! assert_eq!(bfs.visit_order, vec![0, 1, 2]);
//!
//! assert_eq!(connected_components(&graph), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! # Architecture
//!
//! - **Storage**: CSR offset/neighbor arrays, built once, read-only after
//!   construction
//! - **Ingestion**: two-pass edge-list loading with dense identifier
//!   remapping (first-occurrence order)
//! - **Algorithms**: free functions over `&CsrGraph` (BFS, components,
//!   degree scans); single-threaded, no suspension points

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod algorithms;
pub mod error;
pub mod storage;

// Re-export core types
pub use algorithms::{
    bounded_bfs, connected_components, max_in_degree_node, max_out_degree_node, BfsResult,
};
pub use error::{GraphError, Result};
pub use storage::{CsrGraph, NodeId};
