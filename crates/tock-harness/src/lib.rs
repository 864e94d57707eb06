//! Deterministic simulation harness for tock.
//!
//! Scripted implementations of the [`tock_app::Driver`] and
//! [`tock_core::Clock`] traits so the real [`tock_app::Runtime`] can be run
//! tick by tick without a terminal or a wall clock.
//!
//! # Invariant Testing
//!
//! The `invariants` module checks every rendered frame against properties
//! that must hold regardless of input. Use [`InvariantRegistry::standard()`]
//! for the common set.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod invariants;
pub mod sim_clock;
pub mod sim_driver;

pub use invariants::{
    FrameMatchesStyle, Invariant, InvariantRegistry, InvariantResult, RenderSnapshot,
    StyleIndexInRange, Violation,
};
pub use sim_clock::SimClock;
pub use sim_driver::{RecordedRender, SimDriver, SimDriverError};
