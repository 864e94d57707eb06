//! Property-based tests for the style renderer.
//!
//! Each style has a fixed shape for every valid time. These tests check the
//! shape and, where the encoding allows it, decode the frame back to the time.

use proptest::prelude::*;
use tock_core::{
    Style, TimeOfDay,
    glyph::{GLYPH_HEIGHT, glyph},
    render,
};

/// Generate any valid time of day.
fn time_strategy() -> impl Strategy<Value = TimeOfDay> {
    (0u32..86_400).prop_map(TimeOfDay::from_seconds_since_midnight)
}

/// Read a binary value line back into a number, MSB first.
fn decode_dots(line: &str) -> u8 {
    line.chars().filter(|c| matches!(c, '●' | '○')).fold(0, |acc, c| (acc << 1) | u8::from(c == '●'))
}

proptest! {
    #[test]
    fn prop_simple_is_one_padded_line(time in time_strategy()) {
        let frame = render(time, Style::Simple);
        let expected = format!("{:02}:{:02}:{:02}", time.hour(), time.minute(), time.second());
        prop_assert_eq!(frame.lines(), [expected]);
    }

    #[test]
    fn prop_digital_concatenates_glyph_rows(time in time_strategy()) {
        let frame = render(time, Style::Digital);
        prop_assert_eq!(frame.height(), GLYPH_HEIGHT);

        let text = time.to_string();
        for (row, line) in frame.lines().iter().enumerate() {
            let expected: String = text.chars().map(|c| format!("{}  ", glyph(c)[row])).collect();
            prop_assert_eq!(line, &expected);
        }
    }

    #[test]
    fn prop_binary_decodes_to_time(time in time_strategy()) {
        let frame = render(time, Style::Binary);
        let lines = frame.lines();
        prop_assert_eq!(lines.len(), 8);

        prop_assert_eq!(decode_dots(&lines[0]), time.hour() % 24);
        prop_assert_eq!(decode_dots(&lines[3]), time.minute());
        prop_assert_eq!(decode_dots(&lines[6]), time.second());

        prop_assert!(lines[2].is_empty());
        prop_assert!(lines[5].is_empty());
        for ruler in [&lines[1], &lines[4], &lines[7]] {
            prop_assert_eq!(ruler.as_str(), "  6  5  4  3  2  1");
        }
    }

    #[test]
    fn prop_words_is_one_line_led_by_hour(time in time_strategy()) {
        let frame = render(time, Style::Words);
        prop_assert_eq!(frame.height(), 1);

        let hour = tock_core::words::hour_word(time.hour());
        prop_assert!(frame.lines()[0].starts_with(hour));
        prop_assert_eq!(frame.lines()[0].ends_with(" O'CLOCK"), time.minute() == 0);
    }

    #[test]
    fn prop_render_is_deterministic(time in time_strategy(), index in 0usize..Style::COUNT) {
        let style = Style::from_index(index);
        prop_assert_eq!(render(time, style), render(time, style));
    }
}

#[test]
fn words_examples() {
    let cases = [
        ((0, 0), "TWELVE O'CLOCK"),
        ((13, 15), "ONE FIFTEEN"),
        ((9, 45), "NINE FORTY-FIVE"),
        ((5, 1), "FIVE ONE"),
        ((5, 54), "FIVE FORTY-FOURTEEN"),
    ];
    for ((hour, minute), expected) in cases {
        let time = TimeOfDay::new(hour, minute, 0).unwrap();
        assert_eq!(render(time, Style::Words).lines(), [expected], "{time}");
    }
}
