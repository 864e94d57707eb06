//! Terminal driver for the TUI.
//!
//! Implements the [`Driver`] trait for terminal I/O using crossterm for
//! keyboard events and ratatui for rendering.

use std::{
    io::{self, Stdout, stdout},
    time::Duration,
};

use crossterm::{
    ExecutableCommand, cursor,
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use thiserror::Error;
use tock_app::{App, AppEvent, Driver, KeyInput};
use tock_core::RenderedFrame;

use crate::ui;

/// Terminal driver errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Raw mode and alternate screen, held for the life of the driver.
///
/// Acquired before anything else so that a failure partway through setup
/// still restores the terminal when the guard drops.
struct ScreenGuard {
    active: bool,
}

impl ScreenGuard {
    fn acquire() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self { active: true };
        stdout().execute(EnterAlternateScreen)?;
        Ok(guard)
    }

    /// Put the terminal back the way we found it. Every step is attempted;
    /// the first failure is returned. Idempotent.
    fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        let shown = stdout().execute(cursor::Show).map(|_| ());
        let left = stdout().execute(LeaveAlternateScreen).map(|_| ());
        let raw = disable_raw_mode();
        shown.and(left).and(raw)
    }
}

impl Drop for ScreenGuard {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

/// Terminal driver implementing the [`Driver`] trait.
///
/// Handles terminal I/O (crossterm) and rendering (ratatui). The terminal is
/// restored by [`Driver::stop`], or on drop if the loop never got there.
pub struct TerminalDriver {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    event_stream: EventStream,
    // Declared last so it drops after the terminal.
    guard: ScreenGuard,
}

impl TerminalDriver {
    /// Enter raw mode and the alternate screen.
    pub fn new() -> Result<Self, TerminalError> {
        let guard = ScreenGuard::acquire()?;

        let backend = CrosstermBackend::new(stdout());
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        terminal.clear()?;
        let event_stream = EventStream::new();

        tracing::debug!("terminal acquired");
        Ok(Self { terminal, event_stream, guard })
    }

    /// Convert a crossterm key event to `KeyInput`.
    fn convert_key(key: KeyEvent) -> Option<KeyInput> {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(KeyInput::Interrupt)
            },
            KeyCode::Char(c) => Some(KeyInput::Char(c)),
            KeyCode::Enter => Some(KeyInput::Enter),
            KeyCode::Backspace => Some(KeyInput::Backspace),
            KeyCode::Tab => Some(KeyInput::Tab),
            KeyCode::Esc => Some(KeyInput::Esc),
            KeyCode::Left => Some(KeyInput::Left),
            KeyCode::Right => Some(KeyInput::Right),
            KeyCode::Up => Some(KeyInput::Up),
            KeyCode::Down => Some(KeyInput::Down),
            _ => None,
        }
    }

    /// Convert a crossterm event to `AppEvent`.
    fn convert_event(event: Event) -> Option<AppEvent> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                Self::convert_key(key).map(AppEvent::Key)
            },
            Event::Resize(cols, rows) => Some(AppEvent::Resize(cols, rows)),
            _ => None,
        }
    }
}

impl Driver for TerminalDriver {
    type Error = TerminalError;

    async fn poll_event(&mut self, timeout: Duration) -> Result<Option<AppEvent>, Self::Error> {
        tokio::select! {
            biased;

            // Terminal events
            maybe_event = self.event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => Ok(Self::convert_event(event)),
                    Some(Err(e)) => Err(TerminalError::Io(e)),
                    None => Ok(None),
                }
            }

            // Input timeout
            () = tokio::time::sleep(timeout) => Ok(None),
        }
    }

    fn render(&mut self, app: &App, frame: &RenderedFrame) -> Result<(), Self::Error> {
        self.terminal.draw(|f| {
            ui::render(f, app, frame);
        })?;
        Ok(())
    }

    async fn sleep(&mut self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    fn stop(&mut self) -> Result<(), Self::Error> {
        self.guard.restore()?;
        tracing::debug!("terminal restored");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent::new_with_kind(code, modifiers, kind))
    }

    fn press(code: KeyCode) -> Event {
        key(code, KeyModifiers::NONE, KeyEventKind::Press)
    }

    #[test]
    fn arrows_and_letters_convert() {
        assert_eq!(
            TerminalDriver::convert_event(press(KeyCode::Left)),
            Some(AppEvent::Key(KeyInput::Left))
        );
        assert_eq!(
            TerminalDriver::convert_event(press(KeyCode::Char('q'))),
            Some(AppEvent::Key(KeyInput::Char('q')))
        );
    }

    #[test]
    fn ctrl_c_is_interrupt() {
        let event = key(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyEventKind::Press);
        assert_eq!(TerminalDriver::convert_event(event), Some(AppEvent::Key(KeyInput::Interrupt)));
    }

    #[test]
    fn releases_and_unknown_keys_are_dropped() {
        let release = key(KeyCode::Char('q'), KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(TerminalDriver::convert_event(release), None);
        assert_eq!(TerminalDriver::convert_event(press(KeyCode::F(1))), None);
        assert_eq!(TerminalDriver::convert_event(Event::FocusGained), None);
    }

    #[test]
    fn resize_converts() {
        let event = Event::Resize(100, 30);
        assert_eq!(TerminalDriver::convert_event(event), Some(AppEvent::Resize(100, 30)));
    }
}
