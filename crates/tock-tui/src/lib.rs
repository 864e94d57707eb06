//! Terminal UI for tock
//!
//! A thin shell over [`tock_app::Driver`] that provides terminal-specific
//! I/O and the local wall clock. All orchestration logic lives in the generic
//! [`tock_app::Runtime`].

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod system_clock;
pub mod terminal;
pub mod ui;

pub use system_clock::SystemClock;
pub use terminal::{TerminalDriver, TerminalError};
pub use tock_app::{App, AppAction, AppEvent, Driver, KeyInput, Runtime, RuntimeConfig};
