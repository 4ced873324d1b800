//! Calendar-month value object.
//!
//! Forecast points and recommendation windows are addressed by calendar
//! month. Chronological order is (year, month) lexicographic.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A (year, month) pair with month in 1..=12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Creates a YearMonth, rejecting months outside 1..=12.
    pub fn new(year: i32, month: u32) -> Result<Self, ValidationError> {
        if !(1..=12).contains(&month) {
            return Err(ValidationError::out_of_range("month", 1, 12, month as i64));
        }
        Ok(Self { year, month })
    }

    /// The calendar month containing the given date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The month `n` calendar months after this one.
    pub fn plus_months(&self, n: u32) -> Self {
        let total = self.ordinal() + n as i64;
        Self::from_ordinal(total)
    }

    /// Signed number of calendar months from `self` to `other`.
    ///
    /// Positive when `other` is later.
    pub fn months_until(&self, other: YearMonth) -> i64 {
        other.ordinal() - self.ordinal()
    }

    // Months since year 0, January = 0.
    fn ordinal(&self) -> i64 {
        self.year as i64 * 12 + (self.month as i64 - 1)
    }

    fn from_ordinal(ordinal: i64) -> Self {
        Self {
            year: ordinal.div_euclid(12) as i32,
            month: (ordinal.rem_euclid(12) + 1) as u32,
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    #[test]
    fn rejects_month_zero_and_thirteen() {
        assert!(YearMonth::new(2025, 0).is_err());
        assert!(YearMonth::new(2025, 13).is_err());
    }

    #[test]
    fn orders_by_year_then_month() {
        assert!(ym(2024, 12) < ym(2025, 1));
        assert!(ym(2025, 3) < ym(2025, 4));
    }

    #[test]
    fn plus_months_rolls_over_year_boundary() {
        assert_eq!(ym(2025, 10).plus_months(6), ym(2026, 4));
        assert_eq!(ym(2025, 1).plus_months(0), ym(2025, 1));
    }

    #[test]
    fn months_until_is_signed() {
        assert_eq!(ym(2025, 1).months_until(ym(2025, 4)), 3);
        assert_eq!(ym(2025, 4).months_until(ym(2025, 1)), -3);
        assert_eq!(ym(2024, 11).months_until(ym(2025, 2)), 3);
    }

    #[test]
    fn from_date_takes_calendar_month() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 31).unwrap();
        assert_eq!(YearMonth::from_date(date), ym(2025, 7));
    }

    #[test]
    fn displays_zero_padded() {
        assert_eq!(ym(2025, 3).to_string(), "2025-03");
    }
}
