//! CLI input error types

use thiserror::Error;

/// error parsing a CLI payload into a declaration or config
#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid JSON payload: {0}")]
    Json(#[from] json5::Error),

    #[error("config must be a JSON object or an array of flag tokens")]
    ConfigShape,

    #[error("batch payload must be a JSON object of name -> config pairs")]
    BatchShape,
}
