//! Quotawatch library crate: a workflow step that gates a CI run on the
//! remaining GitHub API quota.
//!
//! The library parses a threshold, reads the rate limit of one resource via
//! Octocrab, and either lets the workflow continue, waits for the quota to
//! reset, or fails the run. Host primitives (logging, failure, step outputs)
//! and the clock are injected so every decision can be exercised in tests.

pub mod clock;
pub mod config;
pub mod error;
pub mod gate;
pub mod github;
pub mod workflow;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use clock::{Clock, SystemClock};
pub use config::QuotawatchConfig;
pub use error::GateError;
pub use gate::{
    Action, GateInputs, GateOutcome, GateSettings, QuotaGate, QuotaSnapshot, ReactionDecision,
    Resource, Threshold,
};
pub use github::{OctocrabQuotaGateway, PersonalAccessToken, QuotaGateway};
pub use workflow::{GithubActionsHost, WorkflowHost};
