use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("nesting exceeds the configured maximum depth of {max_depth}")]
    DepthExceeded { max_depth: usize },

    #[error("decoding TOON is not implemented")]
    DecodeUnsupported,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("serde_json error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
