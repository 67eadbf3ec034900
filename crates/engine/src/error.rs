use std::path::PathBuf;

use thiserror::Error;
use xwc_core::{CapacityError, SortError};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("could not open file: {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error while reading {name}")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("capacity exceeded")]
    Capacity(#[from] CapacityError),

    #[error(transparent)]
    Sort(#[from] SortError),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
