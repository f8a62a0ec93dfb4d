//! Years of service and the tier derived from it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::birthday::completed_years;
use crate::date::CalendarDate;
use crate::error::{CalendarError, CalendarResult};

/// Completed years since `start`. A start date in the future counts as 0.
pub fn compute_years_of_service(start: &CalendarDate, today: &CalendarDate) -> u32 {
    completed_years(start, today).unwrap_or(0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceTier {
    Neophyte,
    Junior,
    SeniorServer,
}

impl ServiceTier {
    pub const ALL: [ServiceTier; 3] = [ServiceTier::Neophyte, ServiceTier::Junior, ServiceTier::SeniorServer];

    pub fn label(self) -> &'static str {
        match self {
            ServiceTier::Neophyte => "Neophyte",
            ServiceTier::Junior => "Junior",
            ServiceTier::SeniorServer => "Senior Server",
        }
    }
}

impl fmt::Display for ServiceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ServiceTier {
    type Err = CalendarError;

    fn from_str(s: &str) -> CalendarResult<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "neophyte" => Ok(ServiceTier::Neophyte),
            "junior" => Ok(ServiceTier::Junior),
            "senior" | "seniorserver" => Ok(ServiceTier::SeniorServer),
            _ => Err(CalendarError::Parse(format!(
                "unknown service tier '{}' (expected neophyte, junior or senior-server)",
                s
            ))),
        }
    }
}

/// Lower bounds (in completed years) of the Junior and Senior Server tiers.
///
/// Anything below `junior_from` is Neophyte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierThresholds {
    pub junior_from: u32,
    pub senior_from: u32,
}

impl Default for TierThresholds {
    fn default() -> Self {
        TierThresholds {
            junior_from: 3,
            senior_from: 5,
        }
    }
}

impl TierThresholds {
    pub fn validate(&self) -> CalendarResult<()> {
        if self.junior_from == 0 || self.junior_from >= self.senior_from {
            return Err(CalendarError::Config(format!(
                "tier thresholds must satisfy 0 < junior_from < senior_from (got {} and {})",
                self.junior_from, self.senior_from
            )));
        }
        Ok(())
    }

    pub fn classify(&self, years_of_service: u32) -> ServiceTier {
        if years_of_service >= self.senior_from {
            ServiceTier::SeniorServer
        } else if years_of_service >= self.junior_from {
            ServiceTier::Junior
        } else {
            ServiceTier::Neophyte
        }
    }
}

/// 0-2 years Neophyte, 3-4 Junior, 5 and up Senior Server.
pub fn classify_service_tier(years_of_service: u32) -> ServiceTier {
    TierThresholds::default().classify(years_of_service)
}
