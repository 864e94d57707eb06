//! Application state machine.
//!
//! This module defines the [`App`] state machine, which manages the
//! interactive state of the clock completely decoupled from I/O.
//!
//! This is a pure state machine: it consumes [`crate::AppEvent`] inputs and
//! produces [`crate::AppAction`] instructions for the runtime to execute.
//!
//! # Responsibilities
//!
//! - Tracks the selected style and cycles it in both directions.
//! - Tracks footer visibility and the running flag.
//! - Stores terminal dimensions to handle resize events.

use tock_core::Style;

use crate::{AppAction, AppEvent, AppState, Command};

/// Application state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable in simulation.
#[derive(Debug, Clone)]
pub struct App {
    /// Style, footer and running flag.
    state: AppState,
    /// Terminal dimensions (columns, rows).
    terminal_size: (u16, u16),
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a running App showing the digital style with the footer.
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    /// Create an App from an explicit state.
    ///
    /// An out-of-range style index is wrapped into range.
    pub fn with_state(mut state: AppState) -> Self {
        state.style_index %= Style::COUNT;
        Self { state, terminal_size: (80, 24) }
    }

    /// Process an event and return actions.
    ///
    /// Keys without a binding and ticks leave the state untouched and return
    /// no actions.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Tick => vec![],
            AppEvent::Resize(cols, rows) => {
                self.terminal_size = (cols, rows);
                vec![AppAction::Render]
            },
            AppEvent::Key(key) => match Command::from_key(key) {
                Some(command) => self.apply(command),
                None => vec![],
            },
        }
    }

    /// Apply a command and return actions.
    pub fn apply(&mut self, command: Command) -> Vec<AppAction> {
        match command {
            Command::PreviousStyle => self.previous_style(),
            Command::NextStyle => self.next_style(),
            Command::ToggleFooter => self.toggle_footer(),
            Command::Quit => self.quit(),
        }
    }

    /// Select the preceding style, wrapping to the last.
    pub fn previous_style(&mut self) -> Vec<AppAction> {
        self.select_style((self.state.style_index + Style::COUNT - 1) % Style::COUNT)
    }

    /// Select the following style, wrapping to the first.
    pub fn next_style(&mut self) -> Vec<AppAction> {
        self.select_style((self.state.style_index + 1) % Style::COUNT)
    }

    /// Flip footer visibility.
    pub fn toggle_footer(&mut self) -> Vec<AppAction> {
        self.state.show_footer = !self.state.show_footer;
        tracing::debug!(show_footer = self.state.show_footer, "footer toggled");
        vec![AppAction::Render]
    }

    /// Quit the application.
    pub fn quit(&mut self) -> Vec<AppAction> {
        self.state.running = false;
        tracing::debug!("quit requested");
        vec![AppAction::Quit]
    }

    fn select_style(&mut self, index: usize) -> Vec<AppAction> {
        self.state.style_index = index;
        tracing::debug!(style = %self.style(), "style selected");
        vec![AppAction::Render]
    }

    /// Current state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Selected style.
    pub fn style(&self) -> Style {
        self.state.style()
    }

    /// Whether the help footer is drawn.
    pub fn show_footer(&self) -> bool {
        self.state.show_footer
    }

    /// `false` once quit has been requested.
    pub fn is_running(&self) -> bool {
        self.state.running
    }

    /// Terminal dimensions (columns, rows).
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KeyInput;

    #[test]
    fn starts_on_digital_with_footer() {
        let app = App::new();
        assert_eq!(app.style(), Style::Digital);
        assert!(app.show_footer());
        assert!(app.is_running());
    }

    #[test]
    fn arrows_cycle_styles() {
        let mut app = App::new();

        let actions = app.handle(AppEvent::Key(KeyInput::Right));
        assert_eq!(actions, [AppAction::Render]);
        assert_eq!(app.style(), Style::Simple);

        app.handle(AppEvent::Key(KeyInput::Left));
        app.handle(AppEvent::Key(KeyInput::Left));
        assert_eq!(app.style(), Style::Words);
    }

    #[test]
    fn h_toggles_footer() {
        let mut app = App::new();

        app.handle(AppEvent::Key(KeyInput::Char('h')));
        assert!(!app.show_footer());

        app.handle(AppEvent::Key(KeyInput::Char('H')));
        assert!(app.show_footer());
    }

    #[test]
    fn q_quits() {
        let mut app = App::new();
        let actions = app.handle(AppEvent::Key(KeyInput::Char('Q')));

        assert_eq!(actions, [AppAction::Quit]);
        assert!(!app.is_running());
    }

    #[test]
    fn unbound_keys_and_ticks_are_ignored() {
        let mut app = App::new();
        let before = *app.state();

        assert!(app.handle(AppEvent::Key(KeyInput::Char('x'))).is_empty());
        assert!(app.handle(AppEvent::Key(KeyInput::Up)).is_empty());
        assert!(app.handle(AppEvent::Tick).is_empty());
        assert_eq!(*app.state(), before);
    }

    #[test]
    fn resize_requests_render() {
        let mut app = App::new();
        let actions = app.handle(AppEvent::Resize(120, 40));

        assert_eq!(actions, [AppAction::Render]);
        assert_eq!(app.terminal_size(), (120, 40));
    }

    #[test]
    fn with_state_wraps_style_index() {
        let app = App::with_state(AppState { style_index: Style::COUNT + 1, ..AppState::default() });
        assert_eq!(app.style(), Style::Simple);
    }
}
