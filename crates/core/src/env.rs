//! Build environment exchanged with the build orchestrator.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{HookError, Result};

/// Key-value build environment owned by the build orchestrator.
///
/// The orchestrator materializes its variables into a TOML file before the
/// hooks run. Hooks read the file; the naming hook writes the updated
/// program name back through [`BuildEnv::save`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildEnv {
    /// Directory the compiler/linker places artifacts in.
    pub build_dir: PathBuf,
    /// Base name for output artifacts, without extension.
    pub progname: String,
    /// Project options forwarded by the orchestrator.
    #[serde(default)]
    pub options: BTreeMap<String, String>,
}

impl BuildEnv {
    /// Load a build environment from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let env: Self = toml::from_str(&content).map_err(|e| HookError::EnvParse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        debug!(path = %path.display(), "loaded build environment");
        Ok(env)
    }

    /// Write the build environment back to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| HookError::EnvSerialize {
            message: e.to_string(),
        })?;
        fs::write(path, content)?;
        debug!(path = %path.display(), "saved build environment");
        Ok(())
    }

    /// Look up a project option by key.
    pub fn option(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }

    /// Path of the firmware binary produced by the build.
    pub fn firmware_path(&self) -> PathBuf {
        self.build_dir.join(format!("{}.bin", self.progname))
    }
}
