//! Octocrab implementation of the quota gateway.

use async_trait::async_trait;
use http::Uri;
use octocrab::Octocrab;
use tracing::debug;
use url::Url;

use crate::error::GateError;
use crate::gate::{QuotaSnapshot, Resource};
use crate::github::models::ApiRateLimit;
use crate::github::token::PersonalAccessToken;

use super::QuotaGateway;
use super::error_mapping::map_octocrab_error;

/// REST API base for github.com.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const RATE_LIMIT_PATH: &str = "/rate_limit";

/// Octocrab-backed gateway.
pub struct OctocrabQuotaGateway {
    client: Octocrab,
}

impl OctocrabQuotaGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Authenticates with `token` against the REST API at `api_base`.
    ///
    /// # Errors
    ///
    /// Returns `GateError::InvalidUrl` when `api_base` is not a valid URI and
    /// `GateError::Api` when Octocrab rejects the client configuration.
    pub fn for_token(token: &PersonalAccessToken, api_base: &Url) -> Result<Self, GateError> {
        let base_uri = api_base
            .as_str()
            .parse::<Uri>()
            .map_err(|error| GateError::InvalidUrl(format!("{api_base}: {error}")))?;

        let client = Octocrab::builder()
            .personal_token(token.value())
            .base_uri(base_uri)
            .map_err(|error| GateError::Api {
                message: format!("configure client failed: {error}"),
            })?
            .build()
            .map_err(|error| map_octocrab_error("configure client", &error))?;
        Ok(Self::new(client))
    }
}

#[async_trait]
impl QuotaGateway for OctocrabQuotaGateway {
    async fn rate_limit(&self, resource: Resource) -> Result<QuotaSnapshot, GateError> {
        let response = self
            .client
            .get::<ApiRateLimit, _, _>(RATE_LIMIT_PATH, None::<&()>)
            .await
            .map_err(|error| map_octocrab_error("rate limit", &error))?;
        debug!(?response, "rate limit response");
        response.snapshot_for(resource)
    }
}
