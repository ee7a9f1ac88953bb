//! Numeric date formatting.
//!
//! Turns `month/day/year` text such as `3/3/3` into `March 3rd 2003`. There is
//! no calendar validation: the month only selects a name, the day only selects
//! a suffix.

use std::fmt;

use chrono::Month;

use crate::scan::{skip_ascii_ws, split_int};

/// Rendered in place of a date that could not be scanned.
pub const INVALID_DATE: &str = "Invalid Date";

/// Rendered in place of a month number outside `1..=12`.
pub const UNKNOWN_MONTH: &str = "Unknown";

/// A date as written in the schedule file, with the two-digit year expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericDate {
    pub month: i32,
    pub day: i32,
    pub year: i32,
}

impl NumericDate {
    /// Scan `month/day/year`.
    ///
    /// ASCII whitespace is allowed before each number and each slash, numbers may be
    /// signed, and anything after the year is ignored. Years below 100 are
    /// read as `2000 + year`.
    pub fn parse(s: &str) -> Option<NumericDate> {
        let mut scan = Scanner { rest: s };
        let month = scan.int()?;
        scan.slash()?;
        let day = scan.int()?;
        scan.slash()?;
        let mut year = scan.int()?;

        if year < 100 {
            year += 2000;
        }

        Some(NumericDate { month, day, year })
    }
}

impl fmt::Display for NumericDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}{} {}",
            month_name(self.month),
            self.day,
            ordinal_suffix(self.day),
            self.year
        )
    }
}

/// Format a numeric date, falling back to [`INVALID_DATE`].
pub fn format_date(date: &str) -> String {
    match NumericDate::parse(date) {
        Some(d) => d.to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// English month name for `1..=12`, otherwise [`UNKNOWN_MONTH`].
pub fn month_name(month: i32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or(UNKNOWN_MONTH)
}

/// Ordinal suffix for a day number.
///
/// Only 1/21/31, 2/22 and 3/23 are special; 11, 12 and 13 fall through to
/// "th" like every other value.
pub fn ordinal_suffix(day: i32) -> &'static str {
    match day {
        1 | 21 | 31 => "st",
        2 | 22 => "nd",
        3 | 23 => "rd",
        _ => "th",
    }
}

/// Minimal cursor with stream-extraction rules (ASCII whitespace only).
struct Scanner<'a> {
    rest: &'a str,
}

impl Scanner<'_> {
    fn skip_ws(&mut self) {
        self.rest = skip_ascii_ws(self.rest);
    }

    fn int(&mut self) -> Option<i32> {
        self.skip_ws();
        let (digits, rest) = split_int(self.rest)?;
        let value = digits.parse::<i32>().ok()?;
        self.rest = rest;
        Some(value)
    }

    fn slash(&mut self) -> Option<()> {
        self.skip_ws();
        self.rest = self.rest.strip_prefix('/')?;
        Some(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_year_is_expanded() {
        assert_eq!(format_date("3/3/3"), "March 3rd 2003");
        assert_eq!(format_date("3/3/25"), "March 3rd 2025");
        assert_eq!(format_date("1/11/99"), "January 11th 2099");
    }

    #[test]
    fn four_digit_year_passes_through() {
        assert_eq!(format_date("12/25/2024"), "December 25th 2024");
        assert_eq!(format_date("5/5/100"), "May 5th 100");
    }

    #[test]
    fn month_out_of_range_is_unknown() {
        assert_eq!(format_date("13/1/2024"), "Unknown 1st 2024");
        assert_eq!(format_date("0/2/2024"), "Unknown 2nd 2024");
        assert_eq!(format_date("-1/2/2024"), "Unknown 2nd 2024");
        assert_eq!(month_name(300), UNKNOWN_MONTH);
    }

    #[test]
    fn unparseable_dates() {
        assert_eq!(format_date("abc"), INVALID_DATE);
        assert_eq!(format_date(""), INVALID_DATE);
        assert_eq!(format_date("3/3"), INVALID_DATE);
        assert_eq!(format_date("3-3-2025"), INVALID_DATE);
        assert_eq!(format_date("3/x/2025"), INVALID_DATE);
        assert_eq!(format_date("99999999999/1/1"), INVALID_DATE);
    }

    #[test]
    fn suffixes() {
        let cases = [
            (1, "st"),
            (2, "nd"),
            (3, "rd"),
            (4, "th"),
            (11, "th"),
            (12, "th"),
            (13, "th"),
            (21, "st"),
            (22, "nd"),
            (23, "rd"),
            (30, "th"),
            (31, "st"),
            (0, "th"),
        ];
        for (day, suffix) in cases {
            assert_eq!(ordinal_suffix(day), suffix, "day {day}");
        }
    }

    #[test]
    fn scanner_tolerates_whitespace_and_trailing_text() {
        assert_eq!(format_date(" 4 / 1 / 26"), "April 1st 2026");
        assert_eq!(format_date("4/1/26 11:59PM"), "April 1st 2026");
        assert_eq!(format_date("+4/1/2026"), "April 1st 2026");
    }

    #[test]
    fn only_ascii_whitespace_is_skipped() {
        assert_eq!(format_date("\t3/\n4/ 5"), "March 4th 2005");
        assert_eq!(format_date("\u{a0}3/4/5"), INVALID_DATE);
        assert_eq!(format_date("3/\u{2003}4/5"), INVALID_DATE);
    }

    #[test]
    fn negative_year_gets_century_added() {
        assert_eq!(format_date("3/4/-5"), "March 4th 1995");
    }

    #[test]
    fn no_day_bounds_check() {
        assert_eq!(format_date("2/31/2025"), "February 31st 2025");
        assert_eq!(format_date("2/45/2025"), "February 45th 2025");
    }

    #[test]
    fn parse_exposes_components() {
        let d = NumericDate::parse("10/9/7").unwrap();
        assert_eq!(
            d,
            NumericDate {
                month: 10,
                day: 9,
                year: 2007
            }
        );
        assert_eq!(d.to_string(), "October 9th 2007");
    }
}
