//! Person records and the facts derived from them.

use serde::{Deserialize, Serialize};

use crate::birthday::LeapDayPolicy;
use crate::date::CalendarDate;
use crate::error::CalendarResult;
use crate::tenure::{ServiceTier, TierThresholds, compute_years_of_service};

/// A roster member as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    /// Display name
    pub name: String,
    pub birth_date: CalendarDate,
    /// Investiture / join date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenure_start: Option<CalendarDate>,
}

impl PersonRecord {
    pub fn new(name: impl Into<String>, birth_date: CalendarDate) -> Self {
        PersonRecord {
            name: name.into(),
            birth_date,
            tenure_start: None,
        }
    }

    pub fn with_tenure_start(mut self, start: CalendarDate) -> Self {
        self.tenure_start = Some(start);
        self
    }
}

/// Facts about one person as of a reference date. Never stored; recompute
/// whenever the date or the record changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedFacts {
    pub age: u32,
    pub is_birthday_today: bool,
    pub days_until_next_birthday: u32,
    pub next_birthday: CalendarDate,
    pub years_of_service: Option<u32>,
    pub service_tier: Option<ServiceTier>,
}

/// The policies fact derivation depends on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactRules {
    #[serde(default)]
    pub leap_day: LeapDayPolicy,
    #[serde(default)]
    pub tiers: TierThresholds,
}

impl FactRules {
    pub fn derive(&self, person: &PersonRecord, today: &CalendarDate) -> CalendarResult<DerivedFacts> {
        let age = self.leap_day.compute_age(&person.birth_date, today)?;
        let next_birthday = self.leap_day.next_birthday(&person.birth_date, today)?;
        let days_until_next_birthday = self.leap_day.days_until_next_birthday(&person.birth_date, today)?;
        let years_of_service = person
            .tenure_start
            .map(|start| compute_years_of_service(&start, today));

        Ok(DerivedFacts {
            age,
            is_birthday_today: self.leap_day.is_birthday_today(&person.birth_date, today),
            days_until_next_birthday,
            next_birthday,
            years_of_service,
            service_tier: years_of_service.map(|years| self.tiers.classify(years)),
        })
    }
}

/// Derive facts with the default leap-day policy and tier thresholds.
pub fn derive_facts(person: &PersonRecord, today: &CalendarDate) -> CalendarResult<DerivedFacts> {
    FactRules::default().derive(person, today)
}

/// Format a name as "Surname, G.M." from the surname and the given names.
pub fn format_member_name(surname: &str, given_names: &str) -> String {
    let initials: Vec<String> = given_names
        .split_whitespace()
        .filter_map(|name| name.chars().next())
        .map(|c| c.to_uppercase().collect())
        .collect();

    if initials.is_empty() {
        return surname.trim().to_string();
    }
    format!("{}, {}.", surname.trim(), initials.join("."))
}
