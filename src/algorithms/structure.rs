//! Connected-component counting

use crate::storage::CsrGraph;

/// Count connected components using forward adjacency only
///
/// Iterates nodes `0..V`; each unvisited node seeds an iterative
/// depth-first exploration (explicit stack, so stack depth is independent
/// of graph diameter) that marks everything reachable through stored
/// edges. O(V + E).
///
/// Reachability follows stored edges regardless of the `directed` flag.
/// For graphs loaded undirected the mirrored edges make this exact weak
/// connectivity; for directed graphs with one-way-only connectivity it can
/// overcount relative to true weak connectivity. That simplification is
/// intentional and kept from the original design.
///
/// # Example
///
/// ```
/// use csr_graph::{connected_components, CsrGraph};
///
/// let graph = CsrGraph::from_edges(4, vec![(0, 1), (2, 3)], false).unwrap();
/// assert_eq!(connected_components(&graph), 2);
/// ```
#[must_use]
pub fn connected_components(graph: &CsrGraph) -> usize {
    let n = graph.num_nodes();
    let mut visited = vec![false; n];
    let mut components = 0;
    let mut stack = Vec::new();

    for start in 0..n {
        if visited[start] {
            continue;
        }
        components += 1;
        visited[start] = true;
        stack.push(start);

        while let Some(u) = stack.pop() {
            for &v in graph.neighbor_slice(u) {
                let v = v as usize;
                if !visited[v] {
                    visited[v] = true;
                    stack.push(v);
                }
            }
        }
    }

    components
}
