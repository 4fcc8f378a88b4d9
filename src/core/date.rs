//! Canonical puzzle date keys
//!
//! A `DateKey` is a calendar day in `YYYY-MM-DD` form. Puzzles are keyed and
//! seeded by it.

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar day used to key daily puzzles
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateKey(NaiveDate);

/// Error type for malformed or out-of-range date keys
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("\"{0}\" is not a YYYY-MM-DD date")]
    Malformed(String),
    #[error("date arithmetic from {0} by {1} days is out of range")]
    OutOfRange(DateKey, i64),
}

impl DateKey {
    /// Parse a `YYYY-MM-DD` key
    ///
    /// # Errors
    /// Returns `DateError::Malformed` unless the input is exactly four year
    /// digits, two month digits and two day digits forming a real date.
    ///
    /// # Examples
    /// ```
    /// use word_rung::core::DateKey;
    ///
    /// let date = DateKey::parse("2026-02-06").unwrap();
    /// assert_eq!(date.to_string(), "2026-02-06");
    /// assert_eq!(date.seed(), 20_260_206);
    ///
    /// assert!(DateKey::parse("2026-2-6").is_err());
    /// assert!(DateKey::parse("2026-02-30").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, DateError> {
        let malformed = || DateError::Malformed(text.to_string());

        let bytes = text.as_bytes();
        let shaped = bytes.len() == 10
            && bytes.iter().enumerate().all(|(i, &b)| match i {
                4 | 7 => b == b'-',
                _ => b.is_ascii_digit(),
            });
        if !shaped {
            return Err(malformed());
        }

        NaiveDate::parse_from_str(text, DATE_FORMAT)
            .map(Self)
            .map_err(|_| malformed())
    }

    /// Today's date in UTC
    #[must_use]
    pub fn today() -> Self {
        Self(Utc::now().date_naive())
    }

    /// The key `days` days after (or before, if negative) this one
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the result leaves the four-digit year range.
    pub fn add_days(self, days: i64) -> Result<Self, DateError> {
        let out_of_range = || DateError::OutOfRange(self, days);

        let shifted = if days >= 0 {
            self.0.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            self.0.checked_sub_days(Days::new(days.unsigned_abs()))
        }
        .ok_or_else(out_of_range)?;

        Self::from_naive(shifted).ok_or_else(out_of_range)
    }

    /// Whole days from `self` to `other` (negative if `other` is earlier)
    #[must_use]
    pub fn diff_days(self, other: Self) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Deterministic seed made of the date's digits, e.g. `2026-02-06` -> `20260206`
    #[must_use]
    pub fn seed(self) -> u64 {
        // from_naive keeps the year within 0..=9999
        let year = u64::from(self.0.year().unsigned_abs());
        year * 10_000 + u64::from(self.0.month()) * 100 + u64::from(self.0.day())
    }

    /// Midnight UTC at the start of this day
    #[must_use]
    pub fn midnight_utc(self) -> DateTime<Utc> {
        self.0.and_time(NaiveTime::MIN).and_utc()
    }

    /// Midnight UTC as an RFC 3339 timestamp with millisecond precision
    #[must_use]
    pub fn timestamp(self) -> String {
        self.midnight_utc()
            .to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Long human-readable form, e.g. "Friday, February 6, 2026"
    #[must_use]
    pub fn format_long(self) -> String {
        self.0.format("%A, %B %-d, %Y").to_string()
    }

    fn from_naive(date: NaiveDate) -> Option<Self> {
        (0..=9999).contains(&date.year()).then_some(Self(date))
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for DateKey {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DateKey {
    type Error = DateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DateKey> for String {
    fn from(date: DateKey) -> Self {
        date.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(text: &str) -> DateKey {
        DateKey::parse(text).unwrap()
    }

    #[test]
    fn parse_rejects_malformed_keys() {
        for bad in ["", "2026-02-6", "2026/02/06", "26-02-06", "2026-13-01", "2026-02-29", "20260206xx"] {
            assert!(
                matches!(DateKey::parse(bad), Err(DateError::Malformed(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn parse_accepts_leap_day() {
        assert_eq!(key("2028-02-29").to_string(), "2028-02-29");
    }

    #[test]
    fn add_days_crosses_month_and_year() {
        assert_eq!(key("2026-02-27").add_days(2).unwrap(), key("2026-03-01"));
        assert_eq!(key("2026-12-31").add_days(1).unwrap(), key("2027-01-01"));
        assert_eq!(key("2026-01-01").add_days(-1).unwrap(), key("2025-12-31"));
        assert_eq!(key("2026-01-01").add_days(0).unwrap(), key("2026-01-01"));
    }

    #[test]
    fn add_days_out_of_range() {
        assert!(matches!(
            key("9999-12-31").add_days(1),
            Err(DateError::OutOfRange(_, 1))
        ));
    }

    #[test]
    fn diff_days_is_signed() {
        assert_eq!(key("2026-02-06").diff_days(key("2026-02-09")), 3);
        assert_eq!(key("2026-02-09").diff_days(key("2026-02-06")), -3);
    }

    #[test]
    fn seed_uses_date_digits() {
        assert_eq!(key("2026-02-06").seed(), 20_260_206);
        assert_eq!(key("0001-01-01").seed(), 10_101);
    }

    #[test]
    fn timestamp_is_midnight_utc() {
        assert_eq!(key("2026-02-06").timestamp(), "2026-02-06T00:00:00.000Z");
    }

    #[test]
    fn format_long_spells_out_the_day() {
        assert_eq!(key("2026-02-06").format_long(), "Friday, February 6, 2026");
    }

    #[test]
    fn serde_uses_the_key_string() {
        let date = key("2026-02-06");
        assert_eq!(serde_json::to_string(&date).unwrap(), "\"2026-02-06\"");
        assert_eq!(
            serde_json::from_str::<DateKey>("\"2026-02-06\"").unwrap(),
            date
        );
        assert!(serde_json::from_str::<DateKey>("\"tomorrow\"").is_err());
    }
}
