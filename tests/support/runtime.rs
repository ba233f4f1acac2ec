//! Tokio runtime and mock GitHub server shared across the steps of a scenario.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use rstest_bdd::Slot;
use tokio::runtime::{Builder, Runtime};
use wiremock::MockServer;

/// Runtime handle that can live in an `rstest-bdd` slot.
#[derive(Clone)]
pub struct SharedRuntime(Rc<RefCell<Runtime>>);

impl SharedRuntime {
    fn start() -> io::Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self(Rc::new(RefCell::new(runtime))))
    }

    /// Drives `future` to completion on the scenario runtime.
    pub fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.0.borrow().block_on(future)
    }
}

/// Starts the runtime and the mock server on first use and returns the
/// runtime.
///
/// # Errors
///
/// Returns an error when the runtime cannot be built.
pub fn ensure_runtime_and_server(
    runtime: &Slot<SharedRuntime>,
    server: &Slot<MockServer>,
) -> io::Result<SharedRuntime> {
    let shared_runtime = match runtime.get() {
        Some(existing) => existing,
        None => {
            let started = SharedRuntime::start()?;
            runtime.set(started.clone());
            started
        }
    };

    if server.with_ref(|_| ()).is_none() {
        server.set(shared_runtime.block_on(MockServer::start()));
    }

    Ok(shared_runtime)
}
