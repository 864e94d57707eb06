//! Centering and clipping.
//!
//! Pure placement math: which lines land where inside an area of a given
//! size. Anything that does not fit is dropped here, so drawing never has to
//! deal with out-of-bounds positions.

use ratatui::text::Span;

/// A line positioned relative to the top-left of its area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placed<'a> {
    /// Column offset.
    pub x: u16,
    /// Row offset.
    pub y: u16,
    /// Text to draw.
    pub text: &'a str,
}

/// Display width of `text` in terminal cells.
pub fn text_width(text: &str) -> usize {
    Span::raw(text).width()
}

/// Centre `lines` as a block inside a `width` x `height` area.
///
/// The block starts at row `floor((height - lines) / 2)`, which is negative
/// when the block is taller than the area; rows outside the area are dropped.
/// Each line is centred on its own and dropped if wider than the area.
pub fn center_block<S: AsRef<str>>(lines: &[S], width: u16, height: u16) -> Vec<Placed<'_>> {
    let top = (i64::from(height) - lines.len() as i64).div_euclid(2);

    lines
        .iter()
        .enumerate()
        .filter_map(|(i, line)| {
            let y = row_in(top + i as i64, height)?;
            place(line.as_ref(), y, width)
        })
        .collect()
}

/// Centre `text` horizontally on `rows_from_bottom` rows above the bottom
/// edge. `None` if the row or the text does not fit.
pub fn center_from_bottom(
    text: &str,
    rows_from_bottom: u16,
    width: u16,
    height: u16,
) -> Option<Placed<'_>> {
    let y = row_in(i64::from(height) - i64::from(rows_from_bottom), height)?;
    place(text, y, width)
}

fn place(text: &str, y: u16, width: u16) -> Option<Placed<'_>> {
    let gap = i64::from(width) - text_width(text) as i64;
    if gap < 0 {
        return None;
    }
    Some(Placed { x: (gap / 2) as u16, y, text })
}

fn row_in(y: i64, height: u16) -> Option<u16> {
    (0..i64::from(height)).contains(&y).then_some(y as u16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line_is_centred() {
        let placed = center_block(&["12:34:56"], 20, 5);
        assert_eq!(placed, [Placed { x: 6, y: 2, text: "12:34:56" }]);
    }

    #[test]
    fn odd_gaps_round_down() {
        let placed = center_block(&["abc"], 8, 4);
        assert_eq!(placed, [Placed { x: 2, y: 1, text: "abc" }]);
    }

    #[test]
    fn wide_lines_are_dropped() {
        let placed = center_block(&["short", "much too wide"], 10, 4);
        assert_eq!(placed, [Placed { x: 2, y: 1, text: "short" }]);
    }

    #[test]
    fn tall_blocks_keep_the_middle_rows() {
        let lines: Vec<String> = (0..8).map(|i| i.to_string()).collect();
        let placed = center_block(&lines, 10, 4);

        let texts: Vec<_> = placed.iter().map(|p| (p.y, p.text)).collect();
        assert_eq!(texts, [(0, "2"), (1, "3"), (2, "4"), (3, "5")]);
    }

    #[test]
    fn block_chars_are_one_cell_wide() {
        assert_eq!(text_width(" ████ "), 6);
        assert_eq!(text_width("H ● ○ "), 6);
    }

    #[test]
    fn bottom_row_needs_room() {
        assert_eq!(center_from_bottom("hi", 2, 10, 6), Some(Placed { x: 4, y: 4, text: "hi" }));
        assert_eq!(center_from_bottom("hi", 2, 10, 1), None);
        assert_eq!(center_from_bottom("hi", 2, 1, 6), None);
    }

    #[test]
    fn empty_area_places_nothing() {
        assert!(center_block(&["x"], 0, 0).is_empty());
        assert_eq!(center_from_bottom("x", 2, 0, 0), None);
    }
}
