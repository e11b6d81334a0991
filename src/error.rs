//! Error taxonomy for loading and querying graphs
//!
//! Three failure kinds exist, and nothing retries:
//! - [`GraphError::Io`]: the edge file cannot be opened or read. Fatal.
//! - [`GraphError::NegativeId`]: a negative node id in the input. Fatal for
//!   the whole load; a partially-built graph would break the dense-id range.
//! - [`GraphError::OutOfRange`]: a query named a node outside `[0, V)`.
//!   Local to the call; the graph itself is untouched.
//!
//! Malformed input lines are *not* errors: the loader skips them silently
//! (see [`crate::storage::loader`]).

use thiserror::Error;

/// Errors produced while building or querying a [`crate::CsrGraph`].
#[derive(Debug, Error)]
pub enum GraphError {
    /// Edge file could not be opened or read.
    #[error("edge list I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A node id in the input was negative.
    #[error("negative node id {0} in edge list")]
    NegativeId(i64),

    /// A query referenced a node outside the graph's id range.
    #[error("node id {id} out of range for graph with {num_nodes} nodes")]
    OutOfRange {
        /// The offending node id.
        id: u32,
        /// Number of nodes actually in the graph.
        num_nodes: usize,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GraphError>;
