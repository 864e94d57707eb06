//! Large block-character glyphs for the digital style.
//!
//! Every glyph is [`GLYPH_HEIGHT`] rows of [`GLYPH_WIDTH`] columns. The table
//! is a compile-time constant and covers the digits and `:`.

/// Rows per glyph.
pub const GLYPH_HEIGHT: usize = 6;

/// Columns per glyph row.
pub const GLYPH_WIDTH: usize = 6;

/// One glyph, top row first.
pub type Glyph = [&'static str; GLYPH_HEIGHT];

/// Glyph for `c`.
///
/// Characters outside `0-9` and `:` get the `'0'` glyph. Callers only pass
/// formatted times, so the fallback is not expected to trigger.
pub fn glyph(c: char) -> &'static Glyph {
    match c {
        '0' => &[
            " ████ ",
            "█    █",
            "█    █",
            "█    █",
            "█    █",
            " ████ ",
        ],
        '1' => &[
            "  █   ",
            " ██   ",
            "  █   ",
            "  █   ",
            "  █   ",
            " ████ ",
        ],
        '2' => &[
            " ████ ",
            "█    █",
            "     █",
            "    █ ",
            "   █  ",
            " █████",
        ],
        '3' => &[
            " ████ ",
            "     █",
            "  ███ ",
            "     █",
            "     █",
            " ████ ",
        ],
        '4' => &[
            "█     ",
            "█  █  ",
            "█████ ",
            "    █ ",
            "    █ ",
            "    █ ",
        ],
        '5' => &[
            " █████",
            "█     ",
            "█████ ",
            "     █",
            "     █",
            " ████ ",
        ],
        '6' => &[
            " ████ ",
            "█     ",
            "█████ ",
            "█    █",
            "█    █",
            " ████ ",
        ],
        '7' => &[
            " █████",
            "     █",
            "    █ ",
            "   █  ",
            "  █   ",
            "  █   ",
        ],
        '8' => &[
            " ████ ",
            "█    █",
            " ████ ",
            "█    █",
            "█    █",
            " ████ ",
        ],
        '9' => &[
            " ████ ",
            "█    █",
            " █████",
            "     █",
            "     █",
            " ████ ",
        ],
        ':' => &[
            "      ",
            "  ██  ",
            "  ██  ",
            "  ██  ",
            "  ██  ",
            "      ",
        ],
        _ => glyph('0'),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_glyph_is_square() {
        for c in "0123456789:".chars() {
            for row in glyph(c) {
                assert_eq!(row.chars().count(), GLYPH_WIDTH, "glyph {c:?} row {row:?}");
            }
        }
    }

    #[test]
    fn unknown_characters_fall_back_to_zero() {
        assert_eq!(glyph('x'), glyph('0'));
        assert_ne!(glyph('8'), glyph('0'));
    }
}
