//! Calendar and tenure facts for a ministry roster.
//!
//! Everything here is a pure function of its arguments, including the
//! reference date, which callers inject instead of reading the system clock:
//! - `birthday`: age, birthday-today, days until the next birthday
//! - `tenure`: years of service and the service tier derived from it
//! - `meeting`: first Sunday of a month as the monthly meeting date
//! - `query`: upcoming birthdays and month listings over a roster
//! - `attendance`: monthly meeting attendance and dues sheet

pub mod attendance;
pub mod birthday;
pub mod clock;
pub mod config;
pub mod date;
pub mod error;
pub mod meeting;
pub mod person;
pub mod query;
pub mod tenure;

pub use birthday::{LeapDayPolicy, compute_age, days_until_next_birthday, is_birthday_today, next_birthday};
pub use clock::{FixedClock, ReferenceClock};
pub use date::CalendarDate;
pub use error::{CalendarError, CalendarResult};
pub use meeting::{MeetingSchedule, first_sunday_of_month};
pub use person::{DerivedFacts, FactRules, PersonRecord, derive_facts, format_member_name};
pub use query::{UpcomingBirthday, birthdays_in_month, birthdays_today, upcoming_within};
pub use tenure::{ServiceTier, TierThresholds, classify_service_tier, compute_years_of_service};
