//! Error types surfaced by the quota gate.
//!
//! Every variant is terminal for the current run: the binary reports the
//! message through the workflow failure channel and exits non-zero.

use thiserror::Error;

/// Errors raised while validating inputs, talking to GitHub, or reacting to
/// a low quota.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GateError {
    /// The threshold could not be interpreted as a positive number.
    #[error("The threshold must be a positive number, but {input} was provided.")]
    InvalidThreshold {
        /// The threshold string exactly as supplied.
        input: String,
    },

    /// The resource is not one of the rate-limited API categories.
    #[error(
        "The resource must be either core, graphql, search, integration_manifest, or code_scanning_upload."
    )]
    InvalidResource,

    /// The `sleep` action was requested without a positive alarm.
    #[error("Alarm must be a positive number")]
    InvalidAlarm,

    /// The `sleep` action was requested without a non-negative delay.
    #[error("Delay must be a positive number")]
    InvalidDelay,

    /// GitHub answered, but the requested resource carried no usable quota.
    #[error("Github API rateLimit could not be retrieved.")]
    QuotaUnavailable,

    /// The quota is low and the action was neither `sleep` nor `peep`.
    #[error("Workflow run was cancelled because of a low {resource} API quota.")]
    UnrecognizedAction {
        /// Resource whose quota triggered the cancellation.
        resource: String,
    },

    /// The reset lies further away than the alarm allows the step to wait.
    #[error(
        "Your alarm set to {minutes} minutes and {seconds} seconds went off: Sleep is overrated."
    )]
    AlarmElapsed {
        /// Whole minutes of the alarm.
        minutes: f64,
        /// Seconds left over after the whole minutes.
        seconds: f64,
    },

    /// No token was configured and `GITHUB_TOKEN` is unset.
    #[error("Please provide a GitHub token")]
    MissingToken,

    /// The authentication token was rejected by GitHub.
    #[error("GitHub rejected the token: {message}")]
    Authentication {
        /// GitHub error message returned with the 401/403 response.
        message: String,
    },

    /// GitHub returned a non-authentication API error.
    #[error("GitHub API error: {message}")]
    Api {
        /// Response detail from GitHub describing the failure.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The configured API base URL could not be parsed.
    #[error("API URL is invalid: {0}")]
    InvalidUrl(String),

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Writing a step output or exported variable failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}
