//! Core model for the tock terminal clock.
//!
//! Everything here is pure: a [`TimeOfDay`] goes in, a [`RenderedFrame`] comes
//! out. No terminal, no wall clock, no allocation beyond the frame itself.
//!
//! # Components
//!
//! - [`TimeOfDay`]: validated hour/minute/second triple
//! - [`Style`]: the closed, cyclic set of display styles
//! - [`render`]: turns a time and a style into text lines
//! - [`Clock`]: source of the current time (system clock or simulation)

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod clock;
pub mod error;
pub mod glyph;
pub mod render;
pub mod style;
pub mod time;
pub mod words;

pub use clock::Clock;
pub use error::TimeError;
pub use render::{RenderedFrame, render};
pub use style::Style;
pub use time::TimeOfDay;
