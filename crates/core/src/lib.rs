//! fwhook-core: build hook logic for the firmware pipeline
//!
//! This crate provides the two hooks the build orchestrator runs around
//! firmware production: program naming at configuration time and gzip
//! compression of the produced binary for compressed OTA delivery.

mod compress;
mod defines;
mod env;
mod error;
mod naming;

pub use compress::{CompressionReport, compress_firmware};
pub use defines::extract_define;
pub use env::BuildEnv;
pub use error::HookError;
pub use naming::{LANGUAGE_OPTION, NamingOptions, run_naming_hook};

/// Result type for hook operations
pub type Result<T> = std::result::Result<T, HookError>;
