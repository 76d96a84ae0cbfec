//! Error types for tc-json.

use thiserror::Error;

use tc_catalogue::CatalogueError;
use tc_router::RouterError;

#[derive(Debug, Error)]
pub enum JsonError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid base request: {0}")]
    Catalogue(#[from] CatalogueError),

    #[error(transparent)]
    Router(#[from] RouterError),
}

pub type JsonResult<T> = Result<T, JsonError>;
