//! Implementation of the `fwhook name` command.
//!
//! Configuration-time hook: derives the program name from header defines and
//! the orchestrator's language option, then writes it back into the build
//! environment for the rest of the pipeline to pick up.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use fwhook_core::{BuildEnv, NamingOptions, run_naming_hook};

/// Execute the name command.
///
/// Loads the build environment, derives `{name}-{language}-{version}` from
/// the header, overwrites the environment's program name, and saves the
/// environment back. Prints the chosen name for visibility.
pub fn cmd_name(
    env_path: &Path,
    header: &Path,
    name_define: &str,
    version_define: &str,
) -> Result<()> {
    let mut env = BuildEnv::load(env_path)
        .with_context(|| format!("failed to load build environment {}", env_path.display()))?;

    let options = NamingOptions {
        header: header.to_path_buf(),
        name_define: name_define.to_string(),
        version_define: version_define.to_string(),
    };

    let progname = run_naming_hook(&mut env, &options)?;

    env.save(env_path)
        .with_context(|| format!("failed to update build environment {}", env_path.display()))?;
    info!(env = %env_path.display(), "build environment updated");

    println!("Program name set to: {}", progname);

    Ok(())
}
