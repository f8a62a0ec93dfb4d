//! Global configuration at ~/.config/ministry/config.toml

use std::path::{Path, PathBuf};

use chrono::NaiveTime;
use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::attendance::DEFAULT_DUE_AMOUNT_CENTS;
use crate::birthday::LeapDayPolicy;
use crate::error::{CalendarError, CalendarResult};
use crate::person::FactRules;
use crate::tenure::TierThresholds;

static DEFAULT_ROSTER_PATH: &str = "~/ministry/roster.toml";
static DEFAULT_MEETING_TIME: &str = "12:00";
const DEFAULT_UPCOMING_WINDOW_DAYS: u32 = 30;

fn default_roster_path() -> PathBuf {
    PathBuf::from(DEFAULT_ROSTER_PATH)
}

fn default_upcoming_window_days() -> u32 {
    DEFAULT_UPCOMING_WINDOW_DAYS
}

fn default_meeting_time() -> String {
    DEFAULT_MEETING_TIME.to_string()
}

fn default_due_amount() -> u64 {
    DEFAULT_DUE_AMOUNT_CENTS
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MinistryConfig {
    #[serde(default = "default_roster_path")]
    pub roster: PathBuf,

    #[serde(default = "default_upcoming_window_days")]
    pub upcoming_window_days: u32,

    #[serde(default)]
    pub leap_day: LeapDayPolicy,

    #[serde(default)]
    pub tiers: TierThresholds,

    /// "HH:MM"
    #[serde(default = "default_meeting_time")]
    pub meeting_time: String,

    /// Cents
    #[serde(default = "default_due_amount")]
    pub default_due_amount: u64,
}

impl Default for MinistryConfig {
    fn default() -> Self {
        MinistryConfig {
            roster: default_roster_path(),
            upcoming_window_days: DEFAULT_UPCOMING_WINDOW_DAYS,
            leap_day: LeapDayPolicy::default(),
            tiers: TierThresholds::default(),
            meeting_time: default_meeting_time(),
            default_due_amount: DEFAULT_DUE_AMOUNT_CENTS,
        }
    }
}

impl MinistryConfig {
    pub fn config_path() -> CalendarResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CalendarError::Config("Could not determine config directory".into()))?
            .join("ministry");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the global config, writing a commented template on first run.
    pub fn load() -> CalendarResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::info!("Creating default config at {}", config_path.display());
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from an explicit path. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> CalendarResult<Self> {
        tracing::debug!("Loading config from {}", path.display());

        let config: MinistryConfig = Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .build()
            .map_err(|e| CalendarError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CalendarError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> CalendarResult<()> {
        self.tiers.validate()?;
        self.meeting_time()?;
        Ok(())
    }

    /// Roster path with `~` expanded.
    pub fn roster_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.roster.to_string_lossy()).into_owned();
        PathBuf::from(full_path_str)
    }

    pub fn meeting_time(&self) -> CalendarResult<NaiveTime> {
        NaiveTime::parse_from_str(self.meeting_time.trim(), "%H:%M").map_err(|_| {
            CalendarError::Config(format!(
                "meeting_time '{}' is not a HH:MM time",
                self.meeting_time
            ))
        })
    }

    pub fn fact_rules(&self) -> FactRules {
        FactRules {
            leap_day: self.leap_day,
            tiers: self.tiers,
        }
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CalendarResult<()> {
        let contents = format!(
            "\
# ministry configuration

# Roster file (.toml or .csv):
# roster = \"{}\"

# How far ahead `ministry upcoming` looks, in days:
# upcoming_window_days = {}

# Where Feb 29 birthdays fall in other years (\"march1\" or \"february28\"):
# leap_day = \"march1\"

# Years of service at which the Junior and Senior Server tiers start:
# [tiers]
# junior_from = 3
# senior_from = 5

# Monthly meeting time:
# meeting_time = \"{}\"

# Monthly dues in cents:
# default_due_amount = {}
",
            DEFAULT_ROSTER_PATH, DEFAULT_UPCOMING_WINDOW_DAYS, DEFAULT_MEETING_TIME, DEFAULT_DUE_AMOUNT_CENTS
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CalendarError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CalendarError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
