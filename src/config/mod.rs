//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – `threshold = "10%"`, `action_to_take = "sweep"`,
//!    `resource = "core"`
//! 2. **Configuration file** – `.quotawatch.toml` in the current directory,
//!    home directory, or XDG config directory
//! 3. **Environment variables** – `QUOTAWATCH_THRESHOLD`,
//!    `QUOTAWATCH_TOKEN`, and so on; `GITHUB_TOKEN` and `GITHUB_API_URL` are
//!    consulted last for the token and API base
//! 4. **Command-line arguments** – `--threshold`/`-t`,
//!    `--action-to-take`/`-a`, `--alarm`, `--delay`, `--resource`/`-r`,
//!    `--token`/`-T`, `--api-url`
//!
//! # Configuration File
//!
//! ```toml
//! threshold = "20%"
//! action_to_take = "sleep"
//! alarm = 900
//! delay = 5
//! resource = "graphql"
//! ```

use std::env;
use std::error::Error;
use std::iter;

use clap::error::ErrorKind;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::GateError;
use crate::gate::GateInputs;
use crate::gate::reaction::DEFAULT_ACTION;
use crate::gate::resource::DEFAULT_RESOURCE;
use crate::gate::threshold::DEFAULT_THRESHOLD;
use crate::github::DEFAULT_API_URL;

/// Legacy token variable provided by GitHub Actions.
pub const GITHUB_TOKEN_VAR: &str = "GITHUB_TOKEN";

/// API base variable provided by GitHub Actions runners.
pub const GITHUB_API_URL_VAR: &str = "GITHUB_API_URL";

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use quotawatch::QuotawatchConfig;
///
/// let config = QuotawatchConfig::load().expect("failed to load configuration");
/// assert_eq!(config.resource(), "core");
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "QUOTAWATCH",
    discovery(
        dotfile_name = ".quotawatch.toml",
        config_file_name = "quotawatch.toml",
        app_name = "quotawatch"
    )
)]
pub struct QuotawatchConfig {
    /// Remaining-quota threshold: an absolute count (`250`), a fraction
    /// below one (`0.2`), or a percentage (`20%`). Defaults to `10%`.
    #[ortho_config()]
    pub threshold: Option<String>,

    /// Reaction to a low quota: `sleep`, `peep`, or anything else to cancel
    /// the workflow. Defaults to `sweep`.
    #[ortho_config(cli_short = 'a')]
    pub action_to_take: Option<String>,

    /// Longest time to reset, in seconds, that `sleep` may wait.
    #[ortho_config()]
    pub alarm: Option<f64>,

    /// Seconds that `sleep` waits past the reset.
    #[ortho_config()]
    pub delay: Option<f64>,

    /// Rate-limited resource to check. Defaults to `core`.
    #[ortho_config(cli_short = 'r')]
    pub resource: Option<String>,

    /// Personal access token for GitHub API authentication.
    ///
    /// Falls back to `GITHUB_TOKEN` when unset.
    #[ortho_config(cli_short = 'T')]
    pub token: Option<String>,

    /// REST API base URL, for GitHub Enterprise Server.
    ///
    /// Falls back to `GITHUB_API_URL`, then to `https://api.github.com`.
    #[ortho_config()]
    pub api_url: Option<String>,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.trim().is_empty())
}

impl QuotawatchConfig {
    /// Threshold specification, or `10%` when unset or blank.
    #[must_use]
    pub fn threshold(&self) -> &str {
        non_blank(self.threshold.as_deref()).unwrap_or(DEFAULT_THRESHOLD)
    }

    /// Action name, or `sweep` when unset or blank.
    #[must_use]
    pub fn action_to_take(&self) -> &str {
        non_blank(self.action_to_take.as_deref()).unwrap_or(DEFAULT_ACTION)
    }

    /// Resource name, or `core` when unset or blank.
    #[must_use]
    pub fn resource(&self) -> &str {
        non_blank(self.resource.as_deref()).unwrap_or(DEFAULT_RESOURCE)
    }

    /// Raw inputs for [`GateSettings::from_inputs`](crate::gate::GateSettings::from_inputs).
    #[must_use]
    pub fn gate_inputs(&self) -> GateInputs<'_> {
        GateInputs {
            threshold: Some(self.threshold()),
            action_to_take: self.action_to_take(),
            alarm: self.alarm,
            delay: self.delay,
            resource: self.resource(),
        }
    }

    /// Resolves the token from configuration or the `GITHUB_TOKEN`
    /// environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::MissingToken`] when no token source provides a
    /// value.
    pub fn resolve_token(&self) -> Result<String, GateError> {
        non_blank(self.token.as_deref())
            .map(ToOwned::to_owned)
            .or_else(|| env::var(GITHUB_TOKEN_VAR).ok())
            .filter(|token| !token.trim().is_empty())
            .ok_or(GateError::MissingToken)
    }

    /// Resolves the REST API base from configuration, `GITHUB_API_URL`, or
    /// the github.com default.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::InvalidUrl`] when the URL cannot be parsed.
    pub fn api_base(&self) -> Result<Url, GateError> {
        let raw = non_blank(self.api_url.as_deref()).map_or_else(
            || {
                env::var(GITHUB_API_URL_VAR)
                    .ok()
                    .filter(|value| !value.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_API_URL.to_owned())
            },
            ToOwned::to_owned,
        );

        Url::parse(raw.trim()).map_err(|error| GateError::InvalidUrl(format!("{raw}: {error}")))
    }
}

/// Finds a `--help` or `--version` request in a configuration load error.
///
/// Clap reports both as errors; the binary prints them and exits
/// successfully instead of failing the step.
#[must_use]
pub fn cli_display_request<'error>(
    error: &'error (dyn Error + 'static),
) -> Option<&'error clap::Error> {
    iter::successors(Some(error), |current: &&'error (dyn Error + 'static)| (*current).source())
        .find_map(|current| {
            current.downcast_ref::<clap::Error>().or_else(|| {
                current
                    .downcast_ref::<Box<clap::Error>>()
                    .map(|boxed| &**boxed)
            })
        })
        .filter(|clap_error| {
            matches!(
                clap_error.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            )
        })
}

#[cfg(test)]
mod tests;
