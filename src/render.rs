//! Terminal rendering for roster facts.

use owo_colors::OwoColorize;

use ministry_core::{ServiceTier, UpcomingBirthday};

use crate::roster::MemberStatus;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for ServiceTier {
    fn render(&self) -> String {
        match self {
            ServiceTier::Neophyte => self.label().blue().to_string(),
            ServiceTier::Junior => self.label().green().to_string(),
            ServiceTier::SeniorServer => self.label().magenta().to_string(),
        }
    }
}

impl Render for MemberStatus {
    fn render(&self) -> String {
        let label = self.to_string();
        match self {
            MemberStatus::Active => label.green().to_string(),
            MemberStatus::Inactive => label.dimmed().to_string(),
            MemberStatus::Suspended => label.red().to_string(),
            MemberStatus::Alumni => label.yellow().to_string(),
        }
    }
}

impl Render for UpcomingBirthday<'_> {
    fn render(&self) -> String {
        let when = match self.days_until {
            0 => "today".to_string(),
            1 => "tomorrow".to_string(),
            n => format!("in {} days", n),
        };
        format!(
            "{} turns {} on {} {}",
            self.person.name.bold(),
            self.turning,
            self.date.to_naive().format("%b %-d"),
            format!("({})", when).dimmed()
        )
    }
}

pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES
        .get((month as usize).wrapping_sub(1))
        .copied()
        .unwrap_or("?")
}
