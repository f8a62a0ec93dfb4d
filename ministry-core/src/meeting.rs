//! Monthly meeting anchor: the first Sunday of the month.

use chrono::NaiveTime;
use serde::Serialize;

use crate::date::{CalendarDate, days_in_month};
use crate::error::{CalendarError, CalendarResult};

/// Day of the month (1-7) of the first Sunday of `month` in `year`.
pub fn first_sunday_of_month(year: i32, month: u32) -> CalendarResult<u32> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth(month));
    }
    let first = CalendarDate::new(year, month, 1)?;
    let past_sunday = first.weekday().num_days_from_sunday();
    if past_sunday == 0 {
        Ok(1)
    } else {
        Ok(1 + (7 - past_sunday))
    }
}

/// The meeting date for one month.
///
/// Defaults to the first Sunday. A caller may pin another day, but the pin
/// belongs to the month it was set for: [`MeetingSchedule::select_month`]
/// drops it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeetingSchedule {
    year: i32,
    month: u32,
    override_day: Option<u32>,
    time: NaiveTime,
}

impl MeetingSchedule {
    pub fn new(year: i32, month: u32, time: NaiveTime) -> CalendarResult<Self> {
        first_sunday_of_month(year, month)?;
        Ok(MeetingSchedule {
            year,
            month,
            override_day: None,
            time,
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    pub fn is_overridden(&self) -> bool {
        self.override_day.is_some()
    }

    /// Switch to another month. Any pinned day is discarded.
    pub fn select_month(&mut self, year: i32, month: u32) -> CalendarResult<()> {
        first_sunday_of_month(year, month)?;
        self.year = year;
        self.month = month;
        self.override_day = None;
        Ok(())
    }

    /// Pin the meeting to `day` of the current month.
    pub fn set_day(&mut self, day: u32) -> CalendarResult<()> {
        let max_day = days_in_month(self.year, self.month)?;
        if day == 0 || day > max_day {
            return Err(CalendarError::invalid_date(
                self.year,
                self.month,
                day,
                format!("day must be 1-{max_day} for this month"),
            ));
        }
        self.override_day = Some(day);
        Ok(())
    }

    pub fn clear_override(&mut self) {
        self.override_day = None;
    }

    pub fn set_time(&mut self, time: NaiveTime) {
        self.time = time;
    }

    pub fn day(&self) -> CalendarResult<u32> {
        match self.override_day {
            Some(day) => Ok(day),
            None => first_sunday_of_month(self.year, self.month),
        }
    }

    pub fn date(&self) -> CalendarResult<CalendarDate> {
        CalendarDate::new(self.year, self.month, self.day()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn noon() -> NaiveTime {
        NaiveTime::from_hms_opt(12, 0, 0).unwrap()
    }

    #[test]
    fn test_first_sunday_known_months() {
        // Feb 2026 starts on a Sunday
        assert_eq!(first_sunday_of_month(2026, 2).unwrap(), 1);
        // Jul 1 2025 is a Tuesday
        assert_eq!(first_sunday_of_month(2025, 7).unwrap(), 6);
        // Jun 1 2025 is a Sunday
        assert_eq!(first_sunday_of_month(2025, 6).unwrap(), 1);
        // Mar 1 2025 is a Saturday
        assert_eq!(first_sunday_of_month(2025, 3).unwrap(), 2);
    }

    #[test]
    fn test_first_sunday_is_always_sunday() {
        for year in 1999..=2031 {
            for month in 1..=12 {
                let day = first_sunday_of_month(year, month).unwrap();
                assert!((1..=7).contains(&day));
                let date = CalendarDate::new(year, month, day).unwrap();
                assert_eq!(date.weekday(), Weekday::Sun, "{}", date);
            }
        }
    }

    #[test]
    fn test_first_sunday_rejects_bad_month() {
        assert!(matches!(first_sunday_of_month(2025, 0), Err(CalendarError::InvalidMonth(0))));
        assert!(matches!(first_sunday_of_month(2025, 13), Err(CalendarError::InvalidMonth(13))));
    }

    #[test]
    fn test_schedule_defaults_to_first_sunday() {
        let schedule = MeetingSchedule::new(2025, 7, noon()).unwrap();
        assert_eq!(schedule.date().unwrap(), CalendarDate::new(2025, 7, 6).unwrap());
        assert!(!schedule.is_overridden());
    }

    #[test]
    fn test_override_is_dropped_when_month_changes() {
        let mut schedule = MeetingSchedule::new(2025, 7, noon()).unwrap();
        schedule.set_day(13).unwrap();
        assert_eq!(schedule.day().unwrap(), 13);

        schedule.select_month(2026, 2).unwrap();
        assert!(!schedule.is_overridden());
        assert_eq!(schedule.date().unwrap(), CalendarDate::new(2026, 2, 1).unwrap());
    }

    #[test]
    fn test_override_validated_against_month_length() {
        let mut schedule = MeetingSchedule::new(2025, 2, noon()).unwrap();
        assert!(schedule.set_day(29).is_err());
        assert!(schedule.set_day(0).is_err());
        assert!(schedule.set_day(28).is_ok());
    }
}
