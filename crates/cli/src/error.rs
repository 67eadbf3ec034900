// crates/cli/src/error.rs
use std::error::Error as StdError;
use std::fmt::Write as _;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] xwc_engine::error::EngineError),

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("JSON error")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Formats `err` followed by each of its sources, `: `-separated.
#[must_use]
pub fn report(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut cause = err.source();
    while let Some(c) = cause {
        let _ = write!(message, ": {c}");
        cause = c.source();
    }
    message
}
