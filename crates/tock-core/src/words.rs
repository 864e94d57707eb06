//! Spelled-out time for the words style.
//!
//! Hours use the 12-hour convention. Minutes past the half hour are composed
//! as `FORTY-<word for minute - 40>`, which yields `FORTY-FOURTEEN` for 54 and
//! `FORTY--9` for 31. That composition is kept literally.

use std::borrow::Cow;

use crate::TimeOfDay;

const ONES: [&str; 20] = [
    "ZERO", "ONE", "TWO", "THREE", "FOUR", "FIVE", "SIX", "SEVEN", "EIGHT", "NINE", "TEN",
    "ELEVEN", "TWELVE", "THIRTEEN", "FOURTEEN", "FIFTEEN", "SIXTEEN", "SEVENTEEN", "EIGHTEEN",
    "NINETEEN",
];

/// Word for `n`.
///
/// Covers `1..=29`. Anything else is written as decimal digits.
pub fn number_word(n: i32) -> Cow<'static, str> {
    match n {
        1..=19 => Cow::Borrowed(ONES[n as usize]),
        20 => Cow::Borrowed("TWENTY"),
        21..=29 => Cow::Owned(format!("TWENTY-{}", ONES[(n - 20) as usize])),
        _ => Cow::Owned(n.to_string()),
    }
}

/// Word for `hour` on a 12-hour dial, with 0 and 12 both reading `TWELVE`.
pub fn hour_word(hour: u8) -> &'static str {
    match hour % 12 {
        0 => ONES[12],
        h => ONES[h as usize],
    }
}

/// Phrase for `minute`, or `None` on the hour.
pub fn minute_phrase(minute: u8) -> Option<Cow<'static, str>> {
    let phrase = match minute {
        0 => return None,
        1 => Cow::Borrowed("ONE"),
        15 => Cow::Borrowed("FIFTEEN"),
        30 => Cow::Borrowed("THIRTY"),
        45 => Cow::Borrowed("FORTY-FIVE"),
        m if m < 30 => number_word(i32::from(m)),
        m => Cow::Owned(format!("FORTY-{}", number_word(i32::from(m) - 40))),
    };
    Some(phrase)
}

/// Full phrase for `time`: `"<HOUR> O'CLOCK"` on the hour, otherwise
/// `"<HOUR> <MINUTE>"`. Seconds are ignored.
pub fn phrase(time: TimeOfDay) -> String {
    let hour = hour_word(time.hour());
    match minute_phrase(time.minute()) {
        None => format!("{hour} O'CLOCK"),
        Some(minute) => format!("{hour} {minute}"),
    }
}
