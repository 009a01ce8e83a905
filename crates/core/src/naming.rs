//! Program naming hook.
//!
//! Runs at configuration time, before the firmware is linked. Derives the
//! output binary's base name from two header defines and the language the
//! orchestrator selected, then overwrites the program name in the build
//! environment.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::defines::extract_define;
use crate::env::BuildEnv;
use crate::{HookError, Result};

/// Project option holding the firmware language identifier.
///
/// Must be set by the orchestrator before the naming hook runs.
pub const LANGUAGE_OPTION: &str = "custom_language";

/// Where the naming hook looks for its defines.
#[derive(Debug, Clone)]
pub struct NamingOptions {
    /// Header file containing the defines.
    pub header: PathBuf,
    /// Define holding the device name.
    pub name_define: String,
    /// Define holding the firmware version.
    pub version_define: String,
}

/// Derive the program name and set it in the build environment.
///
/// The name is composed as `{name}-{language}-{version}`. A define that
/// cannot be extracted (unreadable header, missing declaration) degrades to
/// the literal `None` instead of aborting; a missing language option is a
/// hard error. The caller is responsible for persisting the updated
/// environment.
pub fn run_naming_hook(env: &mut BuildEnv, options: &NamingOptions) -> Result<String> {
    debug!(header = %options.header.display(), "extracting defines");

    let name = extract_define(&options.header, &options.name_define);
    let version = extract_define(&options.header, &options.version_define);
    let language = env
        .option(LANGUAGE_OPTION)
        .ok_or_else(|| HookError::MissingOption(LANGUAGE_OPTION.to_string()))?;

    let progname = format!(
        "{}-{}-{}",
        name.as_deref().unwrap_or("None"),
        language,
        version.as_deref().unwrap_or("None")
    );

    info!(progname = %progname, "program name derived");
    env.progname = progname.clone();

    Ok(progname)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn env_with_language(language: &str) -> BuildEnv {
        BuildEnv {
            build_dir: PathBuf::from(".build"),
            progname: "firmware".to_string(),
            options: BTreeMap::from([(LANGUAGE_OPTION.to_string(), language.to_string())]),
        }
    }

    fn naming_options(header: &Path) -> NamingOptions {
        NamingOptions {
            header: header.to_path_buf(),
            name_define: "HOSTNAME".to_string(),
            version_define: "VERSION".to_string(),
        }
    }

    #[test]
    fn composes_name_language_version() {
        let temp = tempdir().unwrap();
        let header = temp.path().join("GlobalVar.h");
        fs::write(&header, "#define HOSTNAME \"foo\"\n#define VERSION 1.2.3\n").unwrap();

        let mut env = env_with_language("cpp");
        let progname = run_naming_hook(&mut env, &naming_options(&header)).unwrap();

        assert_eq!(progname, "foo-cpp-1.2.3");
        assert_eq!(env.progname, "foo-cpp-1.2.3");
    }

    #[test]
    fn missing_header_degrades_to_none_components() {
        let mut env = env_with_language("cpp");
        let options = naming_options(Path::new("/nonexistent/GlobalVar.h"));

        let progname = run_naming_hook(&mut env, &options).unwrap();
        assert_eq!(progname, "None-cpp-None");
    }

    #[test]
    fn missing_define_degrades_to_none() {
        let temp = tempdir().unwrap();
        let header = temp.path().join("GlobalVar.h");
        fs::write(&header, "#define HOSTNAME \"foo\"\n").unwrap();

        let mut env = env_with_language("fr");
        let progname = run_naming_hook(&mut env, &naming_options(&header)).unwrap();

        assert_eq!(progname, "foo-fr-None");
    }

    #[test]
    fn missing_language_option_is_an_error() {
        let temp = tempdir().unwrap();
        let header = temp.path().join("GlobalVar.h");
        fs::write(&header, "#define HOSTNAME \"foo\"\n#define VERSION 1.2.3\n").unwrap();

        let mut env = env_with_language("cpp");
        env.options.clear();

        let err = run_naming_hook(&mut env, &naming_options(&header)).unwrap_err();
        assert!(matches!(err, HookError::MissingOption(ref key) if key == LANGUAGE_OPTION));
    }
}
