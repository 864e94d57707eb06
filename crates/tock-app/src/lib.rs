//! Application layer for tock
//!
//! Pure interaction state machine and a generic display loop, so the same
//! orchestration runs against a real terminal and against a simulation.
//!
//! # Components
//!
//! - [`App`]: interaction state machine (style selection, footer, quit)
//! - [`Driver`]: Trait for platform-specific I/O abstraction
//! - [`Runtime`]: Generic tick loop using Driver and a [`tock_core::Clock`]

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
mod driver;
mod event;
mod input;
mod runtime;
mod state;

pub use action::AppAction;
pub use app::App;
pub use driver::Driver;
pub use event::AppEvent;
pub use input::{Command, KeyInput};
pub use runtime::{Runtime, RuntimeConfig};
pub use state::AppState;
