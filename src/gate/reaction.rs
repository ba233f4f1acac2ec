//! Reaction to a quota at or below the cutoff.
//!
//! The engine makes one decision per run. `sleep` waits for the reset when
//! it is due before the alarm and fails otherwise, `peep` only inspects, and
//! any other action cancels the workflow.

use std::time::Duration;

use tracing::debug;

use super::resource::Resource;
use super::snapshot::QuotaSnapshot;
use crate::clock::Clock;
use crate::error::GateError;
use crate::workflow::WorkflowHost;

/// Action taken when none is configured.
pub const DEFAULT_ACTION: &str = "sweep";

/// Alarm and delay for the `sleep` action, both in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SleepWindow {
    alarm: f64,
    delay: f64,
}

impl SleepWindow {
    /// Validates the alarm and the delay past the reset.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::InvalidAlarm`] unless the alarm is a finite,
    /// strictly positive number, then [`GateError::InvalidDelay`] unless the
    /// delay is a non-negative number that fits in a [`Duration`].
    pub fn new(alarm: Option<f64>, delay: Option<f64>) -> Result<Self, GateError> {
        let valid_alarm = alarm
            .filter(|value| value.is_finite() && *value > 0.0)
            .ok_or(GateError::InvalidAlarm)?;
        let valid_delay = delay
            .filter(|value| value.is_finite() && *value >= 0.0)
            .filter(|value| Duration::try_from_secs_f64(*value).is_ok())
            .ok_or(GateError::InvalidDelay)?;
        Ok(Self {
            alarm: valid_alarm,
            delay: valid_delay,
        })
    }

    /// Longest time to reset, in seconds, the step is allowed to wait.
    #[must_use]
    pub const fn alarm(&self) -> f64 {
        self.alarm
    }

    /// Extra seconds to wait past the reset.
    #[must_use]
    pub const fn delay(&self) -> f64 {
        self.delay
    }
}

/// What to do once the quota is at or below the cutoff.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Wait for the reset, within the alarm.
    Sleep(SleepWindow),
    /// Inspect only.
    Peep,
    /// Cancel the workflow. Every unrecognised action name lands here.
    Cancel,
}

impl Action {
    /// Builds an action from its name. Alarm and delay are only validated
    /// for `sleep`.
    ///
    /// # Errors
    ///
    /// Propagates [`SleepWindow::new`] failures for `sleep`.
    pub fn from_inputs(
        name: &str,
        alarm: Option<f64>,
        delay: Option<f64>,
    ) -> Result<Self, GateError> {
        match name {
            "sleep" => SleepWindow::new(alarm, delay).map(Self::Sleep),
            "peep" => Ok(Self::Peep),
            other => {
                debug!(action = other, "treating action as a cancellation");
                Ok(Self::Cancel)
            }
        }
    }
}

/// Outcome of the reaction, decided once.
#[derive(Debug, Clone, PartialEq)]
pub enum ReactionDecision {
    /// Nothing to do.
    NoAction,
    /// Wait for the duration, then let the workflow proceed.
    WaitThenProceed(Duration),
    /// Halt the workflow.
    Fail(GateError),
}

/// Decides the reaction for an action given the seconds left until reset.
#[must_use]
pub fn decide(action: &Action, seconds_to_reset: i64, resource: Resource) -> ReactionDecision {
    match action {
        Action::Sleep(window) => decide_sleep(*window, seconds_to_reset),
        Action::Peep => ReactionDecision::NoAction,
        Action::Cancel => ReactionDecision::Fail(GateError::UnrecognizedAction {
            resource: resource.to_string(),
        }),
    }
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "alarm and delay accept fractional seconds"
)]
fn decide_sleep(window: SleepWindow, seconds_to_reset: i64) -> ReactionDecision {
    let seconds = seconds_to_reset as f64;
    if seconds >= window.alarm {
        return ReactionDecision::Fail(GateError::AlarmElapsed {
            minutes: (window.alarm / 60.0).floor(),
            seconds: window.alarm % 60.0,
        });
    }

    let wait = (seconds + window.delay).max(0.0);
    Duration::try_from_secs_f64(wait).map_or(
        ReactionDecision::Fail(GateError::InvalidDelay),
        ReactionDecision::WaitThenProceed,
    )
}

/// Formats a countdown as GitHub Actions users know it.
///
/// Minutes are floored and seconds keep the sign of the countdown, so a
/// reset five seconds in the past reads `-1 minutes and -5 seconds`.
#[must_use]
pub fn countdown_message(seconds_to_reset: i64) -> String {
    format!(
        "The API quota will reset in {} minutes and {} seconds.",
        seconds_to_reset.div_euclid(60),
        seconds_to_reset.wrapping_rem(60)
    )
}

/// Executes reactions against the injected host and clock.
pub struct ReactionEngine<'deps> {
    host: &'deps dyn WorkflowHost,
    clock: &'deps dyn Clock,
}

impl<'deps> ReactionEngine<'deps> {
    /// Creates an engine reporting through `host` and reading time from
    /// `clock`.
    #[must_use]
    pub const fn new(host: &'deps dyn WorkflowHost, clock: &'deps dyn Clock) -> Self {
        Self { host, clock }
    }

    /// Seconds until the snapshot's window resets. Negative once the reset
    /// has passed.
    #[must_use]
    pub fn seconds_to_reset(&self, snapshot: &QuotaSnapshot) -> i64 {
        i64::try_from(snapshot.reset())
            .unwrap_or(i64::MAX)
            .saturating_sub(self.clock.now())
    }

    /// Decides and carries out the reaction.
    ///
    /// For `sleep` the countdown is reported before the alarm is checked,
    /// and the wait, if any, is not cancellable.
    ///
    /// # Errors
    ///
    /// Returns the failure carried by [`ReactionDecision::Fail`]:
    /// [`GateError::AlarmElapsed`] when the reset is too far away, or
    /// [`GateError::UnrecognizedAction`] for cancellations.
    pub async fn act(
        &self,
        action: &Action,
        snapshot: &QuotaSnapshot,
        resource: Resource,
    ) -> Result<ReactionDecision, GateError> {
        let seconds_to_reset = self.seconds_to_reset(snapshot);
        if matches!(action, Action::Sleep(_)) {
            self.host.info(&countdown_message(seconds_to_reset));
        }

        let decision = decide(action, seconds_to_reset, resource);
        debug!(?decision, seconds_to_reset, "reaction decided");

        match decision {
            ReactionDecision::NoAction => Ok(decision),
            ReactionDecision::WaitThenProceed(wait) => {
                tokio::time::sleep(wait).await;
                self.host.info(&format!(
                    "The API quota has been reset to {} requests. Farewell!",
                    snapshot.limit()
                ));
                Ok(decision)
            }
            ReactionDecision::Fail(error) => Err(error),
        }
    }
}

#[cfg(test)]
#[path = "reaction_tests.rs"]
mod tests;
