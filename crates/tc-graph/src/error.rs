//! Graph-subsystem error type.

use thiserror::Error;

use tc_core::{EdgeId, VertexId};

/// Errors produced by `tc-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("no route from {from} to {to}")]
    NoRoute { from: VertexId, to: VertexId },

    #[error("{vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange { vertex: VertexId, vertex_count: usize },

    #[error("edge {edge} has invalid weight {weight}; weights must be finite and non-negative")]
    InvalidWeight { edge: EdgeId, weight: f64 },
}

pub type GraphResult<T> = Result<T, GraphError>;
