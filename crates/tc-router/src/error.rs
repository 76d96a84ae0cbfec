use thiserror::Error;

use tc_core::CoreError;
use tc_graph::GraphError;

/// Errors raised while building the transit graph.
///
/// Itinerary queries report "no route" as `None`, not as an error.
#[derive(Debug, Error)]
pub enum RouterError {
    #[error(transparent)]
    Settings(#[from] CoreError),

    #[error("transit graph construction failed: {0}")]
    Graph(#[from] GraphError),
}

pub type RouterResult<T> = Result<T, RouterError>;
