//! Extraction of C preprocessor defines from source headers.

use std::fs;
use std::path::Path;

use tracing::warn;

/// Extract the value of a `#define NAME value` declaration from a source file.
///
/// The file is scanned in order and the first matching declaration wins. A
/// value wrapped in double quotes has the quotes stripped; anything else is
/// kept verbatim up to the end of the line. Returns `None` when the file
/// cannot be read or no declaration matches; a read failure is logged but
/// never aborts the caller.
pub fn extract_define(path: &Path, name: &str) -> Option<String> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read define source");
            return None;
        }
    };

    content.lines().find_map(|line| match_define(line, name))
}

/// Match `#define <name> <value>` anywhere in a single line.
///
/// Whitespace is required after `#define` and after the name, so a define
/// whose name merely starts with `name` does not match. The value ends at
/// the first `"` or at the end of the line, whichever comes first.
fn match_define(line: &str, name: &str) -> Option<String> {
    let (_, rest) = line.split_once("#define")?;
    if !rest.starts_with(|c: char| c.is_whitespace()) {
        return None;
    }
    let rest = rest.trim_start().strip_prefix(name)?;
    if !rest.starts_with(|c: char| c.is_whitespace()) {
        return None;
    }
    let rest = rest.trim_start();
    let rest = rest.strip_prefix('"').unwrap_or(rest);

    let value: String = rest.chars().take_while(|c| *c != '"').collect();
    if value.is_empty() { None } else { Some(value) }
}
