//! Application side-effects.
//!
//! This module defines the [`AppAction`] enum, which represents instructions
//! produced by the [`crate::App`] state machine for the runtime to execute.

/// Actions produced by the App state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// The visible frame is stale; redraw now.
    Render,

    /// Quit the application.
    Quit,
}
