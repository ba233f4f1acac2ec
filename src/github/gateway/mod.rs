//! Gateways for loading rate limits through Octocrab.
//!
//! The trait-based design enables mocking in tests while the Octocrab
//! implementation handles real HTTP requests.

mod error_mapping;
mod rate_limit;

pub use rate_limit::{DEFAULT_API_URL, OctocrabQuotaGateway};

use async_trait::async_trait;

use crate::error::GateError;
use crate::gate::{QuotaSnapshot, Resource};

/// Gateway that can report the quota of a resource.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuotaGateway: Send + Sync {
    /// Fetch the current quota for `resource`.
    async fn rate_limit(&self, resource: Resource) -> Result<QuotaSnapshot, GateError>;
}
