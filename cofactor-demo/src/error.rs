//! Errors surfaced by the demo binary

use cofactor_core::MatrixError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("cannot read config {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Matrix(#[from] MatrixError),
}
