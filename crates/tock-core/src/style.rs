//! Display styles.
//!
//! The set of styles is closed and ordered. Selection cycles through
//! [`Style::ALL`] and wraps at both ends.

use std::fmt;

/// One of the selectable clock renderings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Style {
    /// Large block-glyph digits.
    #[default]
    Digital,
    /// Plain `HH:MM:SS`.
    Simple,
    /// Dot grid, one row per field, most significant bit first.
    Binary,
    /// Hour and minute spelled out in capitals.
    Words,
}

impl Style {
    /// Every style, in cycling order.
    pub const ALL: [Self; 4] = [Self::Digital, Self::Simple, Self::Binary, Self::Words];

    /// Number of styles.
    pub const COUNT: usize = Self::ALL.len();

    /// Position of this style in [`Style::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::Digital => 0,
            Self::Simple => 1,
            Self::Binary => 2,
            Self::Words => 3,
        }
    }

    /// Style at `index`, wrapping modulo [`Style::COUNT`].
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::COUNT]
    }

    /// The following style, wrapping from last to first.
    #[must_use]
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// The preceding style, wrapping from first to last.
    #[must_use]
    pub fn previous(self) -> Self {
        Self::from_index(self.index() + Self::COUNT - 1)
    }

    /// Lowercase label.
    pub fn name(self) -> &'static str {
        match self {
            Self::Digital => "digital",
            Self::Simple => "simple",
            Self::Binary => "binary",
            Self::Words => "words",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_position_in_all() {
        for (i, style) in Style::ALL.iter().enumerate() {
            assert_eq!(style.index(), i);
            assert_eq!(Style::from_index(i), *style);
        }
    }

    #[test]
    fn cycling_wraps_both_ends() {
        assert_eq!(Style::Words.next(), Style::Digital);
        assert_eq!(Style::Digital.previous(), Style::Words);
        assert_eq!(Style::from_index(Style::COUNT + 2), Style::Binary);
    }
}
