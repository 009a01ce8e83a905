//! Error types for fwhook-core

use thiserror::Error;

/// Errors that can occur in hook operations
#[derive(Debug, Error)]
pub enum HookError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse build environment '{path}': {message}")]
    EnvParse { path: String, message: String },

    #[error("failed to serialize build environment: {message}")]
    EnvSerialize { message: String },

    #[error("project option not set: {0}")]
    MissingOption(String),
}
