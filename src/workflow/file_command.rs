//! GitHub Actions file commands and message escaping.

use std::io::Write;

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs::OpenOptions;
use cap_std::fs_utf8::Dir;
use tracing::trace;

use crate::error::GateError;

/// Escapes a workflow command message so it stays on one line.
#[must_use]
pub fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Appends a `name=value` line to a runner file such as `GITHUB_OUTPUT`.
///
/// The file is created when missing; existing content is preserved.
///
/// # Errors
///
/// Returns [`GateError::Io`] when the directory cannot be opened or the line
/// cannot be written.
pub fn append_file_command(path: &Utf8Path, name: &str, value: &str) -> Result<(), GateError> {
    let parent = path
        .parent()
        .filter(|dir| !dir.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let file_name = path.file_name().ok_or_else(|| GateError::Io {
        message: format!("invalid file command path '{path}': no file name"),
    })?;

    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|error| GateError::Io {
        message: format!("failed to open directory '{parent}': {error}"),
    })?;

    let mut options = OpenOptions::new();
    options.append(true).create(true);
    let mut file = dir
        .open_with(file_name, &options)
        .map_err(|error| GateError::Io {
            message: format!("failed to open '{path}': {error}"),
        })?;

    trace!(%path, name, "appending file command");
    writeln!(file, "{name}={value}").map_err(|error| GateError::Io {
        message: format!("failed to append to '{path}': {error}"),
    })
}
