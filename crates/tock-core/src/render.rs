//! Style renderer.
//!
//! [`render`] is the single entry point: a pure, total function from a time
//! and a style to the lines that make up one frame. Placement on screen is
//! the terminal surface's job.

use crate::{
    Style, TimeOfDay,
    glyph::{GLYPH_HEIGHT, glyph},
    words,
};

/// Gap appended after every glyph in the digital style.
const GLYPH_GAP: &str = "  ";

/// Bits shown per binary field.
const BINARY_BITS: usize = 6;

/// Ruler printed under each binary field.
const BINARY_RULER: &str = "  6  5  4  3  2  1";

/// Lit and unlit binary dots.
const DOT_ON: char = '●';
const DOT_OFF: char = '○';

/// Lines produced by one render call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedFrame {
    lines: Vec<String>,
}

impl RenderedFrame {
    /// Wrap prepared lines.
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Lines, top first.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines.
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Character count of the widest line.
    pub fn width(&self) -> usize {
        self.lines.iter().map(|line| line.chars().count()).max().unwrap_or(0)
    }

    /// Consume the frame, returning its lines.
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

/// Render `time` in `style`.
pub fn render(time: TimeOfDay, style: Style) -> RenderedFrame {
    let lines = match style {
        Style::Digital => digital(time),
        Style::Simple => vec![time.to_string()],
        Style::Binary => binary(time),
        Style::Words => vec![words::phrase(time)],
    };
    RenderedFrame::new(lines)
}

fn digital(time: TimeOfDay) -> Vec<String> {
    let mut lines = vec![String::new(); GLYPH_HEIGHT];
    for c in time.to_string().chars() {
        for (line, row) in lines.iter_mut().zip(glyph(c)) {
            line.push_str(row);
            line.push_str(GLYPH_GAP);
        }
    }
    lines
}

fn binary(time: TimeOfDay) -> Vec<String> {
    let fields = [('H', time.hour() % 24), ('M', time.minute()), ('S', time.second())];

    let mut lines = Vec::with_capacity(fields.len() * 3 - 1);
    for (i, (label, value)) in fields.into_iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.push(dot_row(label, value));
        lines.push(BINARY_RULER.to_string());
    }
    lines
}

/// `"<label> "` then one dot and a space per bit, MSB first.
fn dot_row(label: char, value: u8) -> String {
    let mut row = String::with_capacity(2 + BINARY_BITS * 4);
    row.push(label);
    row.push(' ');
    for bit in (0..BINARY_BITS).rev() {
        row.push(if (value >> bit) & 1 == 1 { DOT_ON } else { DOT_OFF });
        row.push(' ');
    }
    row
}
