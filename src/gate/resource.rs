//! Rate-limited GitHub API categories.

use std::fmt;
use std::str::FromStr;

use crate::error::GateError;

/// Resource checked when none is configured.
pub const DEFAULT_RESOURCE: &str = "core";

/// A GitHub API category with its own independent rate limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    /// REST API requests.
    Core,
    /// Search API requests.
    Search,
    /// GraphQL API requests.
    Graphql,
    /// GitHub App manifest conversions.
    IntegrationManifest,
    /// Code scanning SARIF uploads.
    CodeScanningUpload,
}

impl Resource {
    /// Every resource the gate accepts.
    pub const ALL: [Self; 5] = [
        Self::Core,
        Self::Search,
        Self::Graphql,
        Self::IntegrationManifest,
        Self::CodeScanningUpload,
    ];

    /// Validates a resource name. Matching is case-sensitive.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::InvalidResource`] for any name outside
    /// [`Resource::ALL`].
    pub fn parse(name: &str) -> Result<Self, GateError> {
        Self::ALL
            .into_iter()
            .find(|resource| resource.as_str() == name)
            .ok_or(GateError::InvalidResource)
    }

    /// Returns the key GitHub uses for this resource in `/rate_limit`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Search => "search",
            Self::Graphql => "graphql",
            Self::IntegrationManifest => "integration_manifest",
            Self::CodeScanningUpload => "code_scanning_upload",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Resource {
    type Err = GateError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::parse(name)
    }
}
