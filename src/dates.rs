// Copyright 2025 Cowboy AI, LLC.

//! Calendar helpers for stays
//!
//! Dates are `chrono::NaiveDate`: whole calendar days with no time zone, so
//! the number of nights is an exact day difference.

use crate::errors::{HotelError, HotelResult};
use chrono::NaiveDate;

/// Input format accepted by [`parse_date`]
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Whole nights between check-in and check-out (negative if reversed)
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    (check_out - check_in).num_days()
}

/// Check-out must be strictly after check-in
pub fn is_valid_range(check_in: NaiveDate, check_out: NaiveDate) -> bool {
    check_out > check_in
}

/// Fails with `InvalidDateRange` unless check-out is after check-in
pub fn ensure_valid_range(check_in: NaiveDate, check_out: NaiveDate) -> HotelResult<()> {
    if is_valid_range(check_in, check_out) {
        Ok(())
    } else {
        Err(HotelError::InvalidDateRange {
            check_in,
            check_out,
        })
    }
}

/// Parse a `YYYY-MM-DD` date, mapping malformed input to `InvalidInput`
pub fn parse_date(input: &str) -> HotelResult<NaiveDate> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|e| HotelError::invalid_input(format!("invalid date '{trimmed}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_nights_between() {
        assert_eq!(nights_between(date(2025, 1, 1), date(2025, 1, 4)), 3);
        assert_eq!(nights_between(date(2024, 2, 28), date(2024, 3, 1)), 2);
        assert_eq!(nights_between(date(2025, 12, 31), date(2026, 1, 1)), 1);
        assert_eq!(nights_between(date(2025, 1, 4), date(2025, 1, 1)), -3);
    }

    #[test]
    fn test_valid_range_requires_checkout_after_checkin() {
        assert!(is_valid_range(date(2025, 1, 1), date(2025, 1, 2)));
        assert!(!is_valid_range(date(2025, 1, 1), date(2025, 1, 1)));
        assert!(!is_valid_range(date(2025, 1, 2), date(2025, 1, 1)));
    }

    #[test]
    fn test_ensure_valid_range_reports_both_dates() {
        let err = ensure_valid_range(date(2025, 3, 5), date(2025, 3, 5)).unwrap_err();
        assert_eq!(
            err,
            HotelError::InvalidDateRange {
                check_in: date(2025, 3, 5),
                check_out: date(2025, 3, 5),
            }
        );
    }

    #[test]
    fn test_parse_date_accepts_iso_format() {
        assert_eq!(parse_date("2025-01-04").unwrap(), date(2025, 1, 4));
        assert_eq!(parse_date(" 2025-01-04\n").unwrap(), date(2025, 1, 4));
    }

    #[test_case("" ; "empty")]
    #[test_case("2025/01/04" ; "slashes")]
    #[test_case("2025-02-30" ; "no such day")]
    #[test_case("04-01-2025" ; "day first")]
    fn test_parse_date_rejects_malformed(input: &str) {
        let err = parse_date(input).unwrap_err();
        assert!(matches!(err, HotelError::InvalidInput(_)));
    }
}
