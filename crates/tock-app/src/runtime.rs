//! Generic runtime for the display loop.
//!
//! The Runtime drives the tick loop, coordinating between:
//! - [`App`]: interaction state machine
//! - [`Clock`]: time source
//! - [`Driver`]: Platform-specific I/O

use std::time::Duration;

use tock_core::{Clock, render};

use crate::{App, AppAction, Driver};

/// Timing knobs for the display loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Longest wait for input in a single tick.
    pub poll_timeout: Duration,
    /// Pause at the end of each tick.
    pub idle_sleep: Duration,
}

/// One-second input wait plus a 100 ms pause.
impl Default for RuntimeConfig {
    fn default() -> Self {
        Self { poll_timeout: Duration::from_secs(1), idle_sleep: Duration::from_millis(100) }
    }
}

/// Generic runtime that orchestrates App, Clock, and Driver.
///
/// # Type Parameters
///
/// - `D`: Platform-specific I/O driver
/// - `C`: Time source sampled on every render
pub struct Runtime<D, C>
where
    D: Driver,
    C: Clock,
{
    driver: D,
    clock: C,
    app: App,
    config: RuntimeConfig,
}

impl<D, C> Runtime<D, C>
where
    D: Driver,
    C: Clock,
{
    /// Create a new runtime with default timing.
    pub fn new(driver: D, clock: C) -> Self {
        Self::with_config(driver, clock, RuntimeConfig::default())
    }

    /// Create a new runtime with explicit timing.
    pub fn with_config(driver: D, clock: C, config: RuntimeConfig) -> Self {
        Self { driver, clock, app: App::new(), config }
    }

    /// Start from `app` instead of the default state.
    #[must_use]
    pub fn with_app(mut self, app: App) -> Self {
        self.app = app;
        self
    }

    /// Current application state.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Run ticks until the app quits.
    ///
    /// [`Driver::stop`] is called exactly once on the way out, on both the
    /// success and the error path.
    ///
    /// # Errors
    ///
    /// Returns the loop's error if it failed, otherwise any error from
    /// [`Driver::stop`].
    pub async fn run(mut self) -> Result<App, D::Error> {
        tracing::info!(style = %self.app.style(), "display loop starting");

        let result = self.run_loop().await;
        let stopped = self.driver.stop();
        let result = result.and(stopped);

        match &result {
            Ok(()) => tracing::info!("display loop stopped"),
            Err(e) => tracing::error!(error = %e, "display loop failed"),
        }
        result.map(|()| self.app)
    }

    async fn run_loop(&mut self) -> Result<(), D::Error> {
        while self.app.is_running() {
            self.tick().await?;
        }
        Ok(())
    }

    /// Process one tick of the loop.
    ///
    /// 1. Sample the clock and draw the frame
    /// 2. Wait (bounded) for one input event and apply it
    /// 3. Pause, unless the event stopped the app
    async fn tick(&mut self) -> Result<(), D::Error> {
        self.draw()?;

        if let Some(event) = self.driver.poll_event(self.config.poll_timeout).await? {
            let actions = self.app.handle(event);
            self.process_actions(actions)?;
        }

        if self.app.is_running() {
            self.driver.sleep(self.config.idle_sleep).await;
        }
        Ok(())
    }

    /// Process actions returned by the App.
    fn process_actions(&mut self, actions: Vec<AppAction>) -> Result<(), D::Error> {
        for action in actions {
            match action {
                AppAction::Render => self.draw()?,
                AppAction::Quit => break,
            }
        }
        Ok(())
    }

    fn draw(&mut self) -> Result<(), D::Error> {
        let frame = render(self.clock.now(), self.app.style());
        self.driver.render(&self.app, &frame)
    }
}
