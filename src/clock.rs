use chrono::Local;
use ministry_core::{CalendarDate, CalendarResult, ReferenceClock};

/// Today's date in the local time zone.
pub struct SystemClock;

impl ReferenceClock for SystemClock {
    fn today(&self) -> CalendarResult<CalendarDate> {
        CalendarDate::try_from(Local::now().date_naive())
    }
}
