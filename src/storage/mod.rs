//! Graph storage layer
//!
//! Provides the CSR (Compressed Sparse Row) representation and the two-pass
//! edge-list loader that builds it.

pub mod csr;
pub mod loader;

pub use csr::{CsrGraph, NodeId};
