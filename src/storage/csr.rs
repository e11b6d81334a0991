//! CSR (Compressed Sparse Row) graph representation
//!
//! # CSR Format
//!
//! ```text
//! Graph: 0 → 1, 0 → 2, 1 → 2
//!
//! CSR:
//!   offsets:   [0, 2, 3, 3]  // Node 0: edges [0..2), Node 1: [2..3), Node 2: [3..3)
//!   neighbors: [1, 2, 2]     // destinations, grouped by source, ascending
//! ```
//!
//! The structure is immutable once built: construction symmetrizes
//! (undirected graphs), sorts, deduplicates, and compacts the edge list,
//! and no operation afterwards may append, remove, or reorder edges.

use crate::error::{GraphError, Result};
use tracing::debug;

/// Node identifier (zero-indexed, dense internal id)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

/// CSR (Compressed Sparse Row) graph
///
/// Optimized for:
/// - O(1) amortized out-degree and neighbor-slice location (via offsets)
/// - Cache-friendly sequential traversal of adjacency
/// - Millions of edges over sparse, remapped node ids
///
/// In-degree queries deliberately cost O(V + E): CSR stores no reverse
/// index, and the asymmetry is an accepted trade-off.
///
/// # Example
///
/// ```
/// use csr_graph::{CsrGraph, NodeId};
///
/// let graph = CsrGraph::from_edges(3, vec![(0, 1), (0, 2)], true).unwrap();
///
/// assert_eq!(graph.size(), (3, 2));
/// assert_eq!(graph.neighbors_of(NodeId(0)).unwrap(), vec![1, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct CsrGraph {
    /// Row offsets: node i's neighbors live at `neighbors[offsets[i]..offsets[i+1]]`
    /// Length: `num_nodes` + 1, non-decreasing, `offsets[0] == 0`
    offsets: Vec<u32>,

    /// Edge destinations, grouped by source, strictly ascending per group
    /// Length: `num_edges`
    neighbors: Vec<u32>,

    /// Number of nodes (dense id range `0..num_nodes`)
    num_nodes: usize,

    /// False means every stored `(u, v)` with `u != v` has a stored mirror
    directed: bool,
}

impl CsrGraph {
    /// Create new empty graph
    #[must_use]
    pub fn new() -> Self {
        Self {
            offsets: vec![0], // Start with single offset
            neighbors: Vec::new(),
            num_nodes: 0,
            directed: true,
        }
    }

    /// Build a graph from an edge list over dense internal ids
    ///
    /// When `directed` is false, every `(u, v)` with `u != v` is mirrored as
    /// `(v, u)` before compaction; self-loops are never duplicated. The edge
    /// list is then sorted lexicographically and exact repeats are collapsed,
    /// so the stored structure never contains parallel edges.
    ///
    /// Isolated nodes are representable: `num_nodes` fixes the id range and
    /// may exceed the largest endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::OutOfRange`] if any endpoint is `>= num_nodes`.
    ///
    /// # Example
    ///
    /// ```
    /// use csr_graph::CsrGraph;
    ///
    /// // Undirected: 2 input edges become 4 stored edges
    /// let graph = CsrGraph::from_edges(3, vec![(0, 1), (1, 2)], false).unwrap();
    /// assert_eq!(graph.num_edges(), 4);
    /// ```
    pub fn from_edges(num_nodes: usize, mut edges: Vec<(u32, u32)>, directed: bool) -> Result<Self> {
        for &(u, v) in &edges {
            for id in [u, v] {
                if id as usize >= num_nodes {
                    return Err(GraphError::OutOfRange { id, num_nodes });
                }
            }
        }

        if !directed {
            // Mirror the original edges only; dedup below collapses repeats
            for i in 0..edges.len() {
                let (u, v) = edges[i];
                if u != v {
                    edges.push((v, u));
                }
            }
        }

        edges.sort_unstable();
        edges.dedup();
        let num_edges = edges.len();

        // Degree histogram into offsets[src + 1], then in-place prefix sum
        let mut offsets = vec![0_u32; num_nodes + 1];
        for &(src, _) in &edges {
            offsets[src as usize + 1] += 1;
        }
        for i in 0..num_nodes {
            offsets[i + 1] += offsets[i];
        }

        // The edge list is sorted by source, so destinations fill in order
        let neighbors: Vec<u32> = edges.iter().map(|&(_, dst)| dst).collect();

        debug!(nodes = num_nodes, edges = num_edges, directed, "built CSR structure");

        Ok(Self {
            offsets,
            neighbors,
            num_nodes,
            directed,
        })
    }

    /// Get number of nodes
    #[must_use]
    pub const fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Get number of stored edges (after symmetrization and deduplication)
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.neighbors.len()
    }

    /// Get `(num_nodes, num_edges)` in one call
    #[must_use]
    pub fn size(&self) -> (usize, usize) {
        (self.num_nodes, self.neighbors.len())
    }

    /// Whether the graph was loaded as directed
    #[must_use]
    pub const fn is_directed(&self) -> bool {
        self.directed
    }

    /// Out-degree of a node, `offsets[u+1] - offsets[u]`
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::OutOfRange`] if the node id is out of bounds
    pub fn out_degree(&self, node: NodeId) -> Result<usize> {
        let idx = self.check_node(node)?;
        Ok((self.offsets[idx + 1] - self.offsets[idx]) as usize)
    }

    /// Outgoing neighbors of a node, as an owned sorted copy
    ///
    /// The copy keeps the graph read-only and leaves the caller free to
    /// mutate the result.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::OutOfRange`] if the node id is out of bounds
    pub fn neighbors_of(&self, node: NodeId) -> Result<Vec<u32>> {
        let idx = self.check_node(node)?;
        Ok(self.neighbor_slice(idx).to_vec())
    }

    /// Get raw CSR components `(offsets, neighbors)` (for invariant checks
    /// and downstream integration)
    #[must_use]
    pub fn csr_components(&self) -> (&[u32], &[u32]) {
        (&self.offsets, &self.neighbors)
    }

    /// Bounds-check a node id, returning it as an index
    pub(crate) fn check_node(&self, node: NodeId) -> Result<usize> {
        let idx = node.0 as usize;
        if idx >= self.num_nodes {
            return Err(GraphError::OutOfRange {
                id: node.0,
                num_nodes: self.num_nodes,
            });
        }
        Ok(idx)
    }

    /// Adjacency slice for a known-valid index (hot path, no copy)
    pub(crate) fn neighbor_slice(&self, idx: usize) -> &[u32] {
        let start = self.offsets[idx] as usize;
        let end = self.offsets[idx + 1] as usize;
        &self.neighbors[start..end]
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self::new()
    }
}
