//! Test doubles for the host and clock capabilities.
//!
//! Available to unit tests and, through the `test-support` feature, to the
//! behavioural tests under `tests/`.

use std::sync::{Mutex, PoisonError};

use crate::clock::Clock;
use crate::error::GateError;
use crate::workflow::WorkflowHost;

/// Clock frozen at a fixed Unix time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now(&self) -> i64 {
        self.0
    }
}

/// Host that records everything reported to it.
#[derive(Debug, Default)]
pub struct RecordingHost {
    infos: Mutex<Vec<String>>,
    failures: Mutex<Vec<String>>,
    outputs: Mutex<Vec<(String, String)>>,
    variables: Mutex<Vec<(String, String)>>,
}

impl RecordingHost {
    /// Informational messages in the order they were reported.
    #[must_use]
    pub fn infos(&self) -> Vec<String> {
        snapshot(&self.infos)
    }

    /// Failure messages in the order they were reported.
    #[must_use]
    pub fn failures(&self) -> Vec<String> {
        snapshot(&self.failures)
    }

    /// Step outputs as `(name, value)` pairs.
    #[must_use]
    pub fn outputs(&self) -> Vec<(String, String)> {
        snapshot(&self.outputs)
    }

    /// Exported variables as `(name, value)` pairs.
    #[must_use]
    pub fn variables(&self) -> Vec<(String, String)> {
        snapshot(&self.variables)
    }
}

fn snapshot<T: Clone>(entries: &Mutex<Vec<T>>) -> Vec<T> {
    entries
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

fn push<T>(entries: &Mutex<Vec<T>>, entry: T) {
    entries
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(entry);
}

impl WorkflowHost for RecordingHost {
    fn info(&self, message: &str) {
        push(&self.infos, message.to_owned());
    }

    fn fail(&self, message: &str) {
        push(&self.failures, message.to_owned());
    }

    fn set_output(&self, name: &str, value: &str) -> Result<(), GateError> {
        push(&self.outputs, (name.to_owned(), value.to_owned()));
        Ok(())
    }

    fn export_variable(&self, name: &str, value: &str) -> Result<(), GateError> {
        push(&self.variables, (name.to_owned(), value.to_owned()));
        Ok(())
    }
}
