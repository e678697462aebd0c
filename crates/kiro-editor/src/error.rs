//! Error types for kiro-editor

use std::path::PathBuf;

use crate::BRAND;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] kiro_fs::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration at {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("[{}] Failed to launch {program}: {source}", BRAND)]
    Launch {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
