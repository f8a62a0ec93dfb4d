//! Civil calendar dates.
//!
//! A [`CalendarDate`] is a wall-clock date with no time-of-day and no time
//! zone. It can only be constructed through validation, so every function
//! that accepts one may assume it names a real day of the proleptic
//! Gregorian calendar.

use std::fmt;
use std::str::FromStr;

use chrono::format::ParseErrorKind;
use chrono::{Datelike, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, CalendarResult};

/// Earliest year accepted for roster dates.
pub const MIN_YEAR: i32 = 1;
/// Latest year accepted for roster dates.
pub const MAX_YEAR: i32 = 9999;

/// A validated civil date (year, month 1-12, day 1-31).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Build a date, validating the month and the day against the month
    /// length of that year.
    pub fn new(year: i32, month: u32, day: u32) -> CalendarResult<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CalendarError::invalid_date(
                year,
                month,
                day,
                format!("year must be between {MIN_YEAR} and {MAX_YEAR}"),
            ));
        }
        if !(1..=12).contains(&month) {
            return Err(CalendarError::invalid_date(year, month, day, "month must be 1-12"));
        }

        NaiveDate::from_ymd_opt(year, month, day)
            .map(CalendarDate)
            .ok_or_else(|| CalendarError::invalid_date(year, month, day, "day is out of range for this month"))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// (month, day) pair, used for birthday-style comparisons that ignore the year.
    pub fn month_day(&self) -> (u32, u32) {
        (self.month(), self.day())
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    pub fn to_naive(self) -> NaiveDate {
        self.0
    }

    /// Signed number of days from `self` to `later`.
    pub fn days_until(&self, later: &CalendarDate) -> i64 {
        later.0.signed_duration_since(self.0).num_days()
    }
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = CalendarError;

    fn try_from(date: NaiveDate) -> CalendarResult<Self> {
        CalendarDate::new(date.year(), date.month(), date.day())
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.0
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Parse `YYYY-MM-DD`. Well-formed text naming an impossible day
/// (e.g. `2025-02-29`) fails with `InvalidDate`, not `Parse`.
impl FromStr for CalendarDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> CalendarResult<Self> {
        let s = s.trim();
        let bad_format = || CalendarError::Parse(format!("'{}' is not a YYYY-MM-DD date", s));

        // chrono accepts unpadded fields and signed years
        let well_formed = s.len() == 10
            && s.bytes()
                .enumerate()
                .all(|(i, b)| if i == 4 || i == 7 { b == b'-' } else { b.is_ascii_digit() });
        if !well_formed {
            return Err(bad_format());
        }

        match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            Ok(date) => CalendarDate::try_from(date),
            Err(e) if matches!(e.kind(), ParseErrorKind::OutOfRange | ParseErrorKind::Impossible) => {
                Err(CalendarError::invalid_date(
                    s[0..4].parse().unwrap_or_default(),
                    s[5..7].parse().unwrap_or_default(),
                    s[8..10].parse().unwrap_or_default(),
                    e.to_string(),
                ))
            }
            Err(_) => Err(bad_format()),
        }
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = CalendarError;

    fn try_from(s: String) -> CalendarResult<Self> {
        s.parse()
    }
}

impl From<CalendarDate> for String {
    fn from(date: CalendarDate) -> Self {
        date.to_string()
    }
}

pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// Number of days in `month` of `year`.
pub fn days_in_month(year: i32, month: u32) -> CalendarResult<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or(CalendarError::InvalidMonth(month))?;
    let next = first
        .checked_add_months(Months::new(1))
        .ok_or_else(|| CalendarError::invalid_date(year, month, 1, "month is past the supported range"))?;
    Ok(next.signed_duration_since(first).num_days() as u32)
}
