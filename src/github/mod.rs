//! GitHub rate limit retrieval.
//!
//! This module wraps Octocrab to read `GET /rate_limit` and reduce the
//! response to a [`QuotaSnapshot`](crate::gate::QuotaSnapshot) for one
//! resource. Octocrab errors are mapped into [`GateError`](crate::GateError)
//! variants so callers never see Octocrab internals.

pub mod gateway;
pub mod models;
pub mod token;

pub use gateway::{DEFAULT_API_URL, OctocrabQuotaGateway, QuotaGateway};
pub use token::PersonalAccessToken;

#[cfg(test)]
pub use gateway::MockQuotaGateway;
