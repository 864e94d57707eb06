//! Terminal-agnostic keyboard input.

/// Keyboard input abstraction.
///
/// Decouples application logic from terminal libraries (crossterm, termion,
/// etc.) enabling deterministic simulation testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Printable character.
    Char(char),
    /// Enter/Return key.
    Enter,
    /// Backspace key.
    Backspace,
    /// Tab key.
    Tab,
    /// Escape key.
    Esc,
    /// Left arrow key.
    Left,
    /// Right arrow key.
    Right,
    /// Up arrow key.
    Up,
    /// Down arrow key.
    Down,
    /// Ctrl+C. Raw mode delivers it as a key instead of a signal.
    Interrupt,
}

/// Commands understood by the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Select the preceding style.
    PreviousStyle,
    /// Select the following style.
    NextStyle,
    /// Show or hide the help footer.
    ToggleFooter,
    /// Stop the display loop.
    Quit,
}

impl Command {
    /// Command bound to `key`. `None` for unbound keys.
    pub fn from_key(key: KeyInput) -> Option<Self> {
        match key {
            KeyInput::Left => Some(Self::PreviousStyle),
            KeyInput::Right => Some(Self::NextStyle),
            KeyInput::Char('h' | 'H') => Some(Self::ToggleFooter),
            KeyInput::Char('q' | 'Q') | KeyInput::Interrupt => Some(Self::Quit),
            _ => None,
        }
    }
}
