use thiserror::Error;

/// Errors produced while populating the catalogue.
///
/// Queries never return these: an unknown name in a query is an empty
/// result, not an error.
#[derive(Debug, Error)]
pub enum CatalogueError {
    /// A route or distance referenced a stop that was never added.  Callers
    /// are expected to add every stop first, so this signals a bug upstream.
    #[error("unknown stop {0:?}")]
    UnknownStop(String),

    /// A road distance that is negative, NaN or infinite.
    #[error("invalid road distance {meters} m from {from:?} to {to:?}")]
    InvalidDistance { from: String, to: String, meters: f64 },
}

pub type CatalogueResult<T> = Result<T, CatalogueError>;
