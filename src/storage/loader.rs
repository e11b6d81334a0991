//! Two-pass edge-list ingestion with identifier remapping
//!
//! Input is line-oriented text: blank lines and lines whose first non-space
//! byte is `#` are comments; anything else is expected to start with two
//! whitespace-separated non-negative integers `u v`. Lines that do not
//! parse as two integers are skipped silently (tolerant parsing is the
//! policy for noise lines), while a *negative* id fails the whole load.
//!
//! Pass 1 discovers node ids and assigns dense internal ids in
//! first-occurrence order; pass 2 re-streams the file and materializes the
//! edge list in internal ids. Two file scans trade I/O for bounded memory:
//! only the id map lives through pass 1, and the raw edge buffer exists
//! only between pass 2 and CSR compaction.

use crate::error::{GraphError, Result};
use crate::storage::CsrGraph;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Interning map from external node ids to dense internal ids `0..V`.
///
/// Assignment is first-occurrence order, which makes remapping (and hence
/// the whole load) deterministic. The remapper lives only for the duration
/// of a load; the graph's public surface speaks internal ids.
#[derive(Debug, Default)]
struct IdRemapper {
    map: HashMap<u64, u32>,
}

impl IdRemapper {
    /// Intern an external id, assigning the next dense id on first sight.
    #[allow(clippy::cast_possible_truncation)] // Graphs >4B nodes not supported
    fn intern(&mut self, external: u64) -> u32 {
        let next = self.map.len() as u32;
        *self.map.entry(external).or_insert(next)
    }

    fn len(&self) -> usize {
        self.map.len()
    }
}

/// Parse the first two whitespace-separated integers of a line.
///
/// Returns `None` for blank lines, comments, and lines that do not yield
/// two integers. Signed parse so negative ids surface for validation.
fn parse_edge(line: &str) -> Option<(i64, i64)> {
    let line = line.trim_start();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let mut fields = line.split_whitespace();
    let u = fields.next()?.parse().ok()?;
    let v = fields.next()?.parse().ok()?;
    Some((u, v))
}

fn check_non_negative(u: i64, v: i64) -> Result<()> {
    if u < 0 {
        return Err(GraphError::NegativeId(u));
    }
    if v < 0 {
        return Err(GraphError::NegativeId(v));
    }
    Ok(())
}

impl CsrGraph {
    /// Load a graph from a line-oriented edge file
    ///
    /// Scans the file twice: once to discover and remap node ids, once to
    /// materialize edges. When `directed` is false, construction mirrors
    /// every non-self-loop edge. No partial graph is observable on failure.
    ///
    /// # Errors
    ///
    /// - [`GraphError::Io`] if the path cannot be opened or read
    /// - [`GraphError::NegativeId`] if any parsed node id is negative
    #[allow(clippy::cast_sign_loss)] // ids are validated non-negative first
    pub fn from_edge_file<P: AsRef<Path>>(path: P, directed: bool) -> Result<Self> {
        let path = path.as_ref();

        // Pass 1: discover node ids, assign dense internal ids
        let mut remapper = IdRemapper::default();
        let reader = BufReader::new(File::open(path)?);
        for line in reader.lines() {
            let Some((u, v)) = parse_edge(&line?) else {
                continue;
            };
            check_non_negative(u, v)?;
            remapper.intern(u as u64);
            remapper.intern(v as u64);
        }

        let num_nodes = remapper.len();
        debug!(path = %path.display(), nodes = num_nodes, "edge file pass 1 complete");

        // Pass 2: re-stream and translate to internal ids
        let reader = BufReader::new(File::open(path)?);
        let mut edges = Vec::new();
        for line in reader.lines() {
            let Some((u, v)) = parse_edge(&line?) else {
                continue;
            };
            check_non_negative(u, v)?;
            edges.push((remapper.intern(u as u64), remapper.intern(v as u64)));
        }

        let graph = Self::from_edges(num_nodes, edges, directed)?;
        info!(
            path = %path.display(),
            nodes = graph.num_nodes(),
            edges = graph.num_edges(),
            directed,
            "loaded edge list"
        );
        Ok(graph)
    }
}
