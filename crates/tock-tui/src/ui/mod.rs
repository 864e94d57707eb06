//! UI rendering
//!
//! Draws a rendered clock frame centred on the terminal, with the help footer
//! near the bottom edge. Placement lives in [`layout`]; this module only
//! writes the placed lines into the frame buffer.

pub mod layout;

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
};
use tock_core::RenderedFrame;

use crate::App;

/// Help text shown when the footer is enabled.
pub const FOOTER_TEXT: &str = "H - hide  Arrow - change style";

/// Rows between the footer and the bottom edge of the terminal.
const FOOTER_ROWS_FROM_BOTTOM: u16 = 2;

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App, clock: &RenderedFrame) {
    let area = frame.area();
    draw(frame.buffer_mut(), area, app, clock);
}

/// Draw into an explicit buffer region.
pub fn draw(buf: &mut Buffer, area: Rect, app: &App, clock: &RenderedFrame) {
    for placed in layout::center_block(clock.lines(), area.width, area.height) {
        buf.set_string(area.x + placed.x, area.y + placed.y, placed.text, Style::default());
    }

    if app.show_footer()
        && let Some(placed) = layout::center_from_bottom(
            FOOTER_TEXT,
            FOOTER_ROWS_FROM_BOTTOM,
            area.width,
            area.height,
        )
    {
        buf.set_string(
            area.x + placed.x,
            area.y + placed.y,
            placed.text,
            Style::default().fg(Color::DarkGray),
        );
    }
}
