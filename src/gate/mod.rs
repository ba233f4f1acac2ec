//! Quota gate: compares the remaining quota against a threshold and reacts.
//!
//! Inputs are validated up front into [`GateSettings`]; [`QuotaGate::run`]
//! then fetches one snapshot, publishes it for downstream steps, and either
//! reports a plentiful quota or hands over to the [`ReactionEngine`].

pub mod reaction;
pub mod resource;
pub mod snapshot;
pub mod threshold;

pub use reaction::{Action, ReactionDecision, ReactionEngine, SleepWindow};
pub use resource::Resource;
pub use snapshot::QuotaSnapshot;
pub use threshold::{Threshold, resolve_cutoff};

use tracing::debug;

use crate::clock::Clock;
use crate::error::GateError;
use crate::github::QuotaGateway;
use crate::workflow::{WorkflowHost, publish_quota};

/// Raw gate inputs as supplied by configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GateInputs<'input> {
    /// Threshold specification, e.g. `10%`, `0.3` or `250`. Without one the
    /// gate uses a cutoff of [`threshold::DEFAULT_CUTOFF`] requests.
    pub threshold: Option<&'input str>,
    /// Reaction name: `sleep`, `peep`, or anything else to cancel.
    pub action_to_take: &'input str,
    /// Alarm in seconds, required for `sleep`.
    pub alarm: Option<f64>,
    /// Delay past the reset in seconds, required for `sleep`.
    pub delay: Option<f64>,
    /// Resource name.
    pub resource: &'input str,
}

/// Validated gate inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GateSettings {
    threshold: Option<Threshold>,
    action: Action,
    resource: Resource,
}

impl GateSettings {
    /// Validates inputs in order: threshold, then alarm and delay (for
    /// `sleep` only), then resource.
    ///
    /// # Errors
    ///
    /// Returns the first of [`GateError::InvalidThreshold`],
    /// [`GateError::InvalidAlarm`], [`GateError::InvalidDelay`] or
    /// [`GateError::InvalidResource`] that applies.
    pub fn from_inputs(inputs: &GateInputs<'_>) -> Result<Self, GateError> {
        let threshold = inputs.threshold.map(Threshold::parse).transpose()?;
        let action = Action::from_inputs(inputs.action_to_take, inputs.alarm, inputs.delay)?;
        let resource = Resource::parse(inputs.resource)?;
        Ok(Self {
            threshold,
            action,
            resource,
        })
    }

    /// Parsed threshold, if any.
    #[must_use]
    pub const fn threshold(&self) -> Option<Threshold> {
        self.threshold
    }

    /// Reaction to a low quota.
    #[must_use]
    pub const fn action(&self) -> Action {
        self.action
    }

    /// Resource to check.
    #[must_use]
    pub const fn resource(&self) -> Resource {
        self.resource
    }
}

/// Successful result of a gate run.
#[derive(Debug, Clone, PartialEq)]
pub enum GateOutcome {
    /// More requests remain than the cutoff.
    Plentiful {
        /// Snapshot the decision was based on.
        snapshot: QuotaSnapshot,
        /// Cutoff derived from the threshold.
        cutoff: f64,
    },
    /// The quota was at or below the cutoff and the reaction completed.
    Reacted {
        /// Snapshot the decision was based on.
        snapshot: QuotaSnapshot,
        /// Cutoff derived from the threshold.
        cutoff: f64,
        /// Reaction that was carried out.
        decision: ReactionDecision,
    },
}

/// Runs the gate against a quota gateway.
pub struct QuotaGate<'deps, Gateway>
where
    Gateway: QuotaGateway,
{
    gateway: &'deps Gateway,
    host: &'deps dyn WorkflowHost,
    clock: &'deps dyn Clock,
}

impl<'deps, Gateway> QuotaGate<'deps, Gateway>
where
    Gateway: QuotaGateway,
{
    /// Creates a gate using the provided collaborators.
    #[must_use]
    pub const fn new(
        gateway: &'deps Gateway,
        host: &'deps dyn WorkflowHost,
        clock: &'deps dyn Clock,
    ) -> Self {
        Self {
            gateway,
            host,
            clock,
        }
    }

    /// Fetches the quota and reacts when it is at or below the cutoff.
    ///
    /// # Errors
    ///
    /// Propagates gateway and host failures, and the failure of the reaction
    /// (an elapsed alarm or a cancellation).
    pub async fn run(&self, settings: &GateSettings) -> Result<GateOutcome, GateError> {
        let resource = settings.resource();
        let snapshot = self.gateway.rate_limit(resource).await?;
        debug!(?snapshot, %resource, "fetched rate limit");

        publish_quota(self.host, &snapshot)?;

        let cutoff = resolve_cutoff(settings.threshold(), snapshot.limit());
        debug!(cutoff, threshold = ?settings.threshold(), "resolved cutoff");

        let summary = format!(
            "{} of {} requests on {resource} remain.",
            snapshot.remaining(),
            snapshot.limit()
        );

        if f64::from(snapshot.remaining()) > cutoff {
            self.host
                .info(&format!("The API quota is plentiful: {summary}"));
            return Ok(GateOutcome::Plentiful { snapshot, cutoff });
        }

        self.host
            .info(&format!("The API quota is below the threshold: {summary}"));
        let engine = ReactionEngine::new(self.host, self.clock);
        let decision = engine
            .act(&settings.action(), &snapshot, resource)
            .await?;
        Ok(GateOutcome::Reacted {
            snapshot,
            cutoff,
            decision,
        })
    }
}
