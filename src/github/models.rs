//! Wire models for the `GET /rate_limit` response.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::GateError;
use crate::gate::{QuotaSnapshot, Resource};

/// Body of `GET /rate_limit`, keyed by resource name.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiRateLimit {
    pub(crate) resources: BTreeMap<String, ApiRate>,
}

/// Quota of a single resource.
#[derive(Debug, Clone, Copy, Deserialize)]
pub(crate) struct ApiRate {
    pub(crate) limit: u32,
    pub(crate) remaining: u32,
    pub(crate) reset: u64,
    #[serde(default)]
    pub(crate) used: u32,
}

impl From<ApiRate> for QuotaSnapshot {
    fn from(value: ApiRate) -> Self {
        Self::new(value.limit, value.remaining, value.reset, value.used)
    }
}

impl ApiRateLimit {
    /// Extracts the snapshot for `resource`.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::QuotaUnavailable`] when GitHub did not report the
    /// resource.
    pub(crate) fn snapshot_for(&self, resource: Resource) -> Result<QuotaSnapshot, GateError> {
        self.resources
            .get(resource.as_str())
            .copied()
            .map(QuotaSnapshot::from)
            .ok_or(GateError::QuotaUnavailable)
    }
}
