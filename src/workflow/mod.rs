//! Host primitives of the workflow runner.
//!
//! The gate reports through a [`WorkflowHost`] rather than writing to
//! process-global streams, so tests can record every message. The
//! production implementation speaks the GitHub Actions protocol: plain lines
//! on stdout for information, `::error::` workflow commands for failures,
//! and `name=value` lines appended to the files named by `GITHUB_OUTPUT` and
//! `GITHUB_ENV`.

mod file_command;

use std::env;
use std::io::{self, Write};

use camino::Utf8PathBuf;
use tracing::debug;

use crate::error::GateError;
use crate::gate::QuotaSnapshot;

pub use file_command::{append_file_command, escape_data};

/// Environment variable naming the step output file.
pub const OUTPUT_FILE_VAR: &str = "GITHUB_OUTPUT";

/// Environment variable naming the exported environment file.
pub const ENV_FILE_VAR: &str = "GITHUB_ENV";

/// Exported variable carrying the remaining request count.
pub const REMAINING_QUOTA_VAR: &str = "GITHUB_REMAINING_API_QUOTA";

/// Capabilities the workflow runner offers to a step.
pub trait WorkflowHost: Send + Sync {
    /// Emits an informational message.
    fn info(&self, message: &str);

    /// Marks the step as failed with `message`.
    fn fail(&self, message: &str);

    /// Sets a step output for downstream steps.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::Io`] when the output cannot be recorded.
    fn set_output(&self, name: &str, value: &str) -> Result<(), GateError>;

    /// Exports an environment variable to downstream steps.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::Io`] when the variable cannot be recorded.
    fn export_variable(&self, name: &str, value: &str) -> Result<(), GateError>;
}

/// Publishes the snapshot for downstream steps: `remaining_abs` and
/// `remaining_rel` outputs plus the `GITHUB_REMAINING_API_QUOTA` variable.
///
/// # Errors
///
/// Propagates the first host failure.
pub fn publish_quota(host: &dyn WorkflowHost, snapshot: &QuotaSnapshot) -> Result<(), GateError> {
    let remaining = snapshot.remaining().to_string();
    host.export_variable(REMAINING_QUOTA_VAR, &remaining)?;
    host.set_output("remaining_abs", &remaining)?;
    host.set_output("remaining_rel", &snapshot.remaining_ratio().to_string())
}

/// GitHub Actions runner host.
#[derive(Debug, Clone, Default)]
pub struct GithubActionsHost {
    output_file: Option<Utf8PathBuf>,
    env_file: Option<Utf8PathBuf>,
}

impl GithubActionsHost {
    /// Creates a host writing outputs and variables to the given files.
    ///
    /// `None` means the value is only logged, as happens outside a runner.
    #[must_use]
    pub const fn new(output_file: Option<Utf8PathBuf>, env_file: Option<Utf8PathBuf>) -> Self {
        Self {
            output_file,
            env_file,
        }
    }

    /// Creates a host from the runner's `GITHUB_OUTPUT` and `GITHUB_ENV`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(file_from_env(OUTPUT_FILE_VAR), file_from_env(ENV_FILE_VAR))
    }
}

fn file_from_env(name: &str) -> Option<Utf8PathBuf> {
    env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(Utf8PathBuf::from)
}

impl WorkflowHost for GithubActionsHost {
    fn info(&self, message: &str) {
        let _ignored = writeln_stdout(message);
    }

    fn fail(&self, message: &str) {
        let _ignored = writeln_stdout(&format!("::error::{}", escape_data(message)));
    }

    fn set_output(&self, name: &str, value: &str) -> Result<(), GateError> {
        match &self.output_file {
            Some(path) => append_file_command(path, name, value),
            None => {
                debug!(name, value, "no output file; step output not recorded");
                Ok(())
            }
        }
    }

    fn export_variable(&self, name: &str, value: &str) -> Result<(), GateError> {
        match &self.env_file {
            Some(path) => append_file_command(path, name, value),
            None => {
                debug!(name, value, "no environment file; variable not exported");
                Ok(())
            }
        }
    }
}

fn writeln_stdout(message: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{message}")
}

#[cfg(test)]
mod tests;
