//! Observable application state.
//!
//! [`AppState`] is the whole of the clock's mutable state. It is owned by
//! [`crate::App`] and only changes in response to a [`crate::Command`].

use tock_core::Style;

/// Interaction state of the clock.
///
/// # Invariants
///
/// - `style_index < Style::COUNT`
/// - Once `running` is false it never becomes true again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppState {
    /// Index into [`Style::ALL`] of the selected style.
    pub style_index: usize,
    /// Whether the help footer is drawn.
    pub show_footer: bool,
    /// Cleared by quit; the display loop stops when this is false.
    pub running: bool,
}

impl AppState {
    /// Selected style.
    pub fn style(&self) -> Style {
        Style::from_index(self.style_index)
    }
}

/// Digital style, footer visible, running.
impl Default for AppState {
    fn default() -> Self {
        Self { style_index: Style::Digital.index(), show_footer: true, running: true }
    }
}
