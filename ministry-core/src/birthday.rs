//! Age and birthday arithmetic.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::date::{CalendarDate, is_leap_year};
use crate::error::{CalendarError, CalendarResult};

/// Which day a February 29 birthday is observed on in a non-leap year.
///
/// Age follows the policy: the year counts as completed on the observed day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeapDayPolicy {
    /// Observe on March 1.
    #[default]
    March1,
    /// Observe on February 28.
    February28,
}

impl LeapDayPolicy {
    /// The (month, day) a birthday falls on in `year`.
    fn observed_month_day(self, birth: &CalendarDate, year: i32) -> (u32, u32) {
        match (birth.month_day(), is_leap_year(year)) {
            ((2, 29), false) => match self {
                LeapDayPolicy::March1 => (3, 1),
                LeapDayPolicy::February28 => (2, 28),
            },
            (md, _) => md,
        }
    }

    /// Observed birthday as a plain chrono date, which may lie past [`crate::date::MAX_YEAR`].
    fn observed_naive(self, birth: &CalendarDate, year: i32) -> CalendarResult<NaiveDate> {
        let (month, day) = self.observed_month_day(birth, year);
        NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| CalendarError::invalid_date(year, month, day, "not a calendar date"))
    }

    fn next_observed(self, birth: &CalendarDate, today: &CalendarDate) -> CalendarResult<NaiveDate> {
        let this_year = self.observed_naive(birth, today.year())?;
        if this_year < today.to_naive() {
            self.observed_naive(birth, today.year() + 1)
        } else {
            Ok(this_year)
        }
    }

    /// The date a birthday is celebrated on in `year`.
    pub fn observed_birthday(self, birth: &CalendarDate, year: i32) -> CalendarResult<CalendarDate> {
        let (month, day) = self.observed_month_day(birth, year);
        CalendarDate::new(year, month, day)
    }

    pub fn is_birthday_today(self, birth: &CalendarDate, today: &CalendarDate) -> bool {
        self.observed_month_day(birth, today.year()) == today.month_day()
    }

    /// The first observed birthday on or after `today`.
    ///
    /// Fails when that birthday falls after year 9999, even though
    /// [`LeapDayPolicy::days_until_next_birthday`] still answers for it.
    pub fn next_birthday(self, birth: &CalendarDate, today: &CalendarDate) -> CalendarResult<CalendarDate> {
        CalendarDate::try_from(self.next_observed(birth, today)?)
    }

    /// Whole days from `today` to the next observed birthday; 0 on the day itself.
    pub fn days_until_next_birthday(self, birth: &CalendarDate, today: &CalendarDate) -> CalendarResult<u32> {
        let next = self.next_observed(birth, today)?;
        let days = next.signed_duration_since(today.to_naive()).num_days();
        u32::try_from(days).map_err(|_| {
            CalendarError::invalid_date(next.year(), next.month(), next.day(), "next birthday precedes today")
        })
    }

    /// Completed years of age on `today`, counting a leap-day birthday as
    /// reached on its observed day. A birth date after `today` is rejected
    /// rather than clamped.
    pub fn compute_age(self, birth: &CalendarDate, today: &CalendarDate) -> CalendarResult<u32> {
        if today < birth {
            return Err(CalendarError::invalid_date(
                birth.year(),
                birth.month(),
                birth.day(),
                format!("birth date is after the reference date {}", today),
            ));
        }
        let mut years = today.year() - birth.year();
        if today.month_day() < self.observed_month_day(birth, today.year()) {
            years -= 1;
        }
        u32::try_from(years)
            .map_err(|_| CalendarError::invalid_date(birth.year(), birth.month(), birth.day(), "negative age"))
    }
}

/// Completed years from `start` to `end`, or `None` when `end` is before `start`.
pub(crate) fn completed_years(start: &CalendarDate, end: &CalendarDate) -> Option<u32> {
    if end < start {
        return None;
    }
    let mut years = end.year() - start.year();
    if end.month_day() < start.month_day() {
        years -= 1;
    }
    u32::try_from(years).ok()
}

/// Completed years of age on `today`, with a February 29 birthday reached on
/// March 1 in non-leap years.
pub fn compute_age(birth: &CalendarDate, today: &CalendarDate) -> CalendarResult<u32> {
    LeapDayPolicy::default().compute_age(birth, today)
}

pub fn is_birthday_today(birth: &CalendarDate, today: &CalendarDate) -> bool {
    LeapDayPolicy::default().is_birthday_today(birth, today)
}

pub fn next_birthday(birth: &CalendarDate, today: &CalendarDate) -> CalendarResult<CalendarDate> {
    LeapDayPolicy::default().next_birthday(birth, today)
}

pub fn days_until_next_birthday(birth: &CalendarDate, today: &CalendarDate) -> CalendarResult<u32> {
    LeapDayPolicy::default().days_until_next_birthday(birth, today)
}
