//! Injected "today".
//!
//! Nothing in this crate reads the system clock. Callers pick a clock and
//! pass its date into every computation; tests use [`FixedClock`].

use crate::date::CalendarDate;
use crate::error::CalendarResult;

/// Source of the reference date for fact derivation.
pub trait ReferenceClock {
    fn today(&self) -> CalendarResult<CalendarDate>;
}

/// A clock frozen on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub CalendarDate);

impl ReferenceClock for FixedClock {
    fn today(&self) -> CalendarResult<CalendarDate> {
        Ok(self.0)
    }
}
