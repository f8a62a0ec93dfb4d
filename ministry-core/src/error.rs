//! Error types for ministry calendar computations.

use thiserror::Error;

/// Errors that can occur while deriving calendar facts.
#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("Invalid date {year:04}-{month:02}-{day:02}: {reason}")]
    InvalidDate {
        year: i32,
        month: u32,
        day: u32,
        reason: String,
    },

    #[error("Invalid month {0}: expected 1-12")]
    InvalidMonth(u32),

    #[error("Date parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Attendance error: {0}")]
    Attendance(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CalendarError {
    pub(crate) fn invalid_date(year: i32, month: u32, day: u32, reason: impl Into<String>) -> Self {
        CalendarError::InvalidDate {
            year,
            month,
            day,
            reason: reason.into(),
        }
    }
}

/// Result type alias for calendar operations.
pub type CalendarResult<T> = Result<T, CalendarError>;
