use std::path::PathBuf;

use thiserror::Error;

/// Errors loading an options file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid options file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("options file lists no options")]
    NoOptions,

    #[error("initial value {0} is not one of the options")]
    UnknownValue(String),

    #[error("single-select options file lists {0} initial values")]
    TooManyValues(usize),
}
