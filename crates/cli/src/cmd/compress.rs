//! Implementation of the `fwhook compress` command.
//!
//! Post-build hook: gzip-compresses `<build_dir>/<progname>.bin` next to
//! itself and reports the size change.

use std::path::Path;

use anyhow::{Context, Result};

use fwhook_core::{BuildEnv, compress_firmware};

/// Execute the compress command.
///
/// The firmware binary must already exist; ordering is guaranteed by the
/// orchestrator's post-action mechanism. The reported percentage is the
/// compressed size relative to the original.
pub fn cmd_compress(env_path: &Path, json: bool) -> Result<()> {
    let env = BuildEnv::load(env_path)
        .with_context(|| format!("failed to load build environment {}", env_path.display()))?;

    let report = compress_firmware(&env).context("firmware compression failed")?;

    if json {
        let report = serde_json::to_string_pretty(&report)
            .context("failed to serialize compression report")?;
        println!("{}", report);
    } else {
        println!(
            "Compression reduced firmware size by {:.0}% (was {} bytes, now {} bytes)",
            report.ratio_percent(),
            report.original_size,
            report.compressed_size
        );
    }

    Ok(())
}
