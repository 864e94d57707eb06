//! Standard invariant checks.
//!
//! These invariants capture behavioral properties that must always hold.
//! They verify WHAT must be true, not specific test scenarios.

use tock_core::{Style, glyph::GLYPH_HEIGHT};

use super::{Invariant, InvariantResult, RenderSnapshot, Violation};

/// Selected style index must name a real style.
///
/// `style_index` is wrapped on every transition; an out-of-range index means
/// a transition skipped the modulo.
pub struct StyleIndexInRange;

impl Invariant for StyleIndexInRange {
    fn name(&self) -> &'static str {
        "StyleIndexInRange"
    }

    fn check(&self, snapshot: &RenderSnapshot) -> InvariantResult {
        let index = snapshot.state.style_index;
        if index >= Style::COUNT {
            return Err(Violation {
                invariant: self.name(),
                message: format!("style_index {index} >= {}", Style::COUNT),
            });
        }
        Ok(())
    }
}

/// The frame drawn must have the shape of the selected style.
///
/// Digital is one line per glyph row, binary is three fields of value and
/// ruler with blank separators, simple and words are a single line. A
/// mismatch means the surface was handed a frame for a different style.
pub struct FrameMatchesStyle;

impl FrameMatchesStyle {
    fn expected_height(style: Style) -> usize {
        match style {
            Style::Digital => GLYPH_HEIGHT,
            Style::Simple | Style::Words => 1,
            Style::Binary => 8,
        }
    }
}

impl Invariant for FrameMatchesStyle {
    fn name(&self) -> &'static str {
        "FrameMatchesStyle"
    }

    fn check(&self, snapshot: &RenderSnapshot) -> InvariantResult {
        let style = snapshot.state.style();
        let expected = Self::expected_height(style);
        let actual = snapshot.frame.height();
        if actual != expected {
            return Err(Violation {
                invariant: self.name(),
                message: format!("{style} frame has {actual} lines, expected {expected}"),
            });
        }
        Ok(())
    }
}
