//! Driver trait for abstracting I/O operations.
//!
//! The [`Driver`] trait decouples the display loop from specific I/O
//! implementations. Each frontend implements the trait to provide
//! platform-specific I/O, while the generic [`crate::Runtime`] handles all
//! orchestration.

use std::{future::Future, time::Duration};

use tock_core::RenderedFrame;

use crate::{App, AppEvent};

/// Abstracts I/O operations for the display loop.
///
/// Implementations provide platform-specific I/O while the generic
/// [`Runtime`](crate::Runtime) handles orchestration logic. This ensures
/// the same orchestration code runs in the terminal and in simulation.
///
/// # Implementations
///
/// - **TUI**: crossterm for terminal events, ratatui for drawing
/// - **Simulation**: scripted events, recorded frames, virtual time
pub trait Driver: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Wait up to `timeout` for one input event.
    ///
    /// Returns the event, or `None` if the wait elapsed or the terminal
    /// produced something the app does not care about. Never blocks longer
    /// than `timeout`.
    fn poll_event(
        &mut self,
        timeout: Duration,
    ) -> impl Future<Output = Result<Option<AppEvent>, Self::Error>> + Send;

    /// Draw `frame` centred on the output surface, plus the help footer when
    /// the app has it enabled, and present the result.
    ///
    /// Content that does not fit is dropped, never reported as an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface itself fails.
    fn render(&mut self, app: &App, frame: &RenderedFrame) -> Result<(), Self::Error>;

    /// Idle between ticks.
    fn sleep(&mut self, duration: Duration) -> impl Future<Output = ()> + Send;

    /// Release platform resources. Called once when the loop ends, whether it
    /// ended cleanly or with an error.
    ///
    /// # Errors
    ///
    /// Returns an error if a resource could not be restored.
    fn stop(&mut self) -> Result<(), Self::Error>;
}
