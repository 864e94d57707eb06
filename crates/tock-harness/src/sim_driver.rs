//! Simulation driver implementing the Driver trait.
//!
//! `SimDriver` provides the same interface as `TerminalDriver` but for
//! deterministic testing. It implements [`Driver`] so the same
//! [`tock_app::Runtime`] orchestration code runs in both production and
//! simulation.
//!
//! Input comes from a script: each entry is either an event or an idle poll
//! that runs out its timeout. Time is virtual; waits add to
//! [`SimDriver::elapsed`] instead of blocking.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use tock_app::{App, AppEvent, Driver, KeyInput};
use tock_core::RenderedFrame;

use crate::invariants::{InvariantRegistry, RenderSnapshot};

/// Error type for simulation driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimDriverError {
    /// The loop polled after the script ran out.
    ScriptExhausted,
    /// Render number `n` (zero-based) was scripted to fail.
    RenderFailed(usize),
    /// A render broke an invariant.
    Invariant(String),
}

impl std::fmt::Display for SimDriverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ScriptExhausted => write!(f, "SimDriverError: input script exhausted"),
            Self::RenderFailed(n) => write!(f, "SimDriverError: render {n} failed"),
            Self::Invariant(message) => write!(f, "SimDriverError: {message}"),
        }
    }
}

impl std::error::Error for SimDriverError {}

/// One render captured by the driver.
pub type RecordedRender = RenderSnapshot;

/// Shared state for script injection and inspection.
///
/// This allows a test to keep a handle after the driver moves into a runtime.
#[derive(Default)]
struct SharedState {
    script: VecDeque<Option<AppEvent>>,
    renders: Vec<RecordedRender>,
    polls: Vec<Duration>,
    sleeps: Vec<Duration>,
    elapsed: Duration,
    stop_calls: usize,
    fail_render: Option<usize>,
}

/// Simulation driver for deterministic testing.
///
/// Implements [`Driver`] trait so the same [`tock_app::Runtime`]
/// orchestration code runs in both production TUI and simulation tests.
/// Clones share state.
#[derive(Clone, Default)]
pub struct SimDriver {
    state: Arc<Mutex<SharedState>>,
    invariants: Option<Arc<InvariantRegistry>>,
}

impl SimDriver {
    /// Create a new simulation driver with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check every render against `registry`.
    #[must_use]
    pub fn with_invariants(mut self, registry: InvariantRegistry) -> Self {
        self.invariants = Some(Arc::new(registry));
        self
    }

    fn shared(&self) -> MutexGuard<'_, SharedState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Queue an event for a future poll.
    pub fn inject_event(&self, event: AppEvent) {
        self.shared().script.push_back(Some(event));
    }

    /// Queue a key press.
    pub fn inject_key(&self, key: KeyInput) {
        self.inject_event(AppEvent::Key(key));
    }

    /// Queue a poll that times out with no input.
    pub fn inject_idle(&self) {
        self.shared().script.push_back(None);
    }

    /// Make render number `n` (zero-based) fail.
    pub fn fail_render_at(&self, n: usize) {
        self.shared().fail_render = Some(n);
    }

    /// Check if there are scripted polls left.
    pub fn has_pending(&self) -> bool {
        !self.shared().script.is_empty()
    }

    /// Every render so far, oldest first.
    pub fn renders(&self) -> Vec<RecordedRender> {
        self.shared().renders.clone()
    }

    /// Timeout passed to each poll, oldest first.
    pub fn polls(&self) -> Vec<Duration> {
        self.shared().polls.clone()
    }

    /// Duration passed to each sleep, oldest first.
    pub fn sleeps(&self) -> Vec<Duration> {
        self.shared().sleeps.clone()
    }

    /// Virtual time spent waiting on input and sleeping.
    pub fn elapsed(&self) -> Duration {
        self.shared().elapsed
    }

    /// Number of times [`Driver::stop`] was called.
    pub fn stop_calls(&self) -> usize {
        self.shared().stop_calls
    }

    fn next_scripted(&self, timeout: Duration) -> Result<Option<AppEvent>, SimDriverError> {
        let mut state = self.shared();
        state.polls.push(timeout);

        match state.script.pop_front() {
            Some(Some(event)) => Ok(Some(event)),
            Some(None) => {
                state.elapsed += timeout;
                Ok(None)
            },
            None => Err(SimDriverError::ScriptExhausted),
        }
    }

    fn record_sleep(&self, duration: Duration) {
        let mut state = self.shared();
        state.sleeps.push(duration);
        state.elapsed += duration;
    }

    fn check_invariants(&self, snapshot: &RenderSnapshot) -> Result<(), SimDriverError> {
        let Some(registry) = &self.invariants else {
            return Ok(());
        };
        registry.check_all(snapshot).map_err(|violations| {
            let messages: Vec<_> = violations.iter().map(ToString::to_string).collect();
            SimDriverError::Invariant(messages.join("; "))
        })
    }
}

impl Driver for SimDriver {
    type Error = SimDriverError;

    async fn poll_event(&mut self, timeout: Duration) -> Result<Option<AppEvent>, Self::Error> {
        self.next_scripted(timeout)
    }

    fn render(&mut self, app: &App, frame: &RenderedFrame) -> Result<(), Self::Error> {
        let snapshot = RenderSnapshot { state: *app.state(), frame: frame.clone() };

        let mut state = self.shared();
        let n = state.renders.len();
        if state.fail_render == Some(n) {
            return Err(SimDriverError::RenderFailed(n));
        }
        state.renders.push(snapshot.clone());
        drop(state);

        self.check_invariants(&snapshot)
    }

    async fn sleep(&mut self, duration: Duration) {
        self.record_sleep(duration);
    }

    fn stop(&mut self) -> Result<(), Self::Error> {
        self.shared().stop_calls += 1;
        tracing::debug!("sim driver stopped");
        Ok(())
    }
}
