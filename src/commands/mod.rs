pub mod attendance;
pub mod meeting;
pub mod members;
pub mod month;
pub mod tier;
pub mod today;
pub mod upcoming;

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use ministry_core::config::MinistryConfig;
use ministry_core::{CalendarDate, FactRules, ReferenceClock};

use crate::roster::Roster;

/// What every command needs: config, the reference date and the fact rules.
pub struct Context {
    pub config: MinistryConfig,
    pub today: CalendarDate,
    pub rules: FactRules,
    roster_path: PathBuf,
}

impl Context {
    pub fn load(roster_override: Option<PathBuf>, clock: &dyn ReferenceClock) -> Result<Self> {
        let config = MinistryConfig::load().context("Could not load ministry config")?;
        let today = clock.today().context("Could not determine today's date")?;
        let roster_path = roster_override.unwrap_or_else(|| config.roster_path());
        tracing::debug!("Reference date {}, roster {}", today, roster_path.display());

        Ok(Context::new(config, today, roster_path))
    }

    pub fn new(config: MinistryConfig, today: CalendarDate, roster_path: PathBuf) -> Self {
        Context {
            rules: config.fact_rules(),
            config,
            today,
            roster_path,
        }
    }

    pub fn roster(&self) -> Result<Roster> {
        if !self.roster_path.exists() {
            anyhow::bail!(
                "Roster not found at {}\n\n\
                Point `roster` in {} at your roster file, or pass --roster <PATH>.",
                self.roster_path.display(),
                MinistryConfig::config_path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|_| "config.toml".to_string())
            );
        }
        Roster::load(&self.roster_path)
    }
}
