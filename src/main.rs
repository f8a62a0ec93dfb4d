mod clock;
mod commands;
mod logging;
mod render;
mod roster;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use ministry_core::{CalendarDate, FixedClock, ReferenceClock, ServiceTier};

use crate::clock::SystemClock;
use crate::commands::Context;
use crate::roster::{MemberStatus, RosterFilter};

#[derive(Parser)]
#[command(name = "ministry")]
#[command(about = "Birthdays, service tiers and meeting dates for your ministry roster")]
struct Cli {
    /// Roster file (.toml or .csv); defaults to `roster` in config.toml
    #[arg(long, global = true)]
    roster: Option<PathBuf>,

    /// Compute as of this date (YYYY-MM-DD) instead of today
    #[arg(long, global = true)]
    today: Option<CalendarDate>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show today's birthdays
    Today,
    /// Show birthdays coming up soon
    Upcoming {
        /// Window in days (defaults to upcoming_window_days from config)
        #[arg(short, long)]
        days: Option<u32>,
    },
    /// Show birthdays in a month
    Month {
        /// Month number 1-12 (defaults to the current month)
        month: Option<u32>,
    },
    /// List members with age, next birthday, years of service and tier
    Members {
        /// Match name, member number or email
        #[arg(short, long)]
        search: Option<String>,

        #[arg(long, value_enum)]
        status: Option<MemberStatus>,

        /// neophyte, junior or senior-server
        #[arg(long)]
        tier: Option<ServiceTier>,
    },
    /// Show the monthly meeting date (first Sunday unless overridden)
    Meeting {
        #[arg(long)]
        year: Option<i32>,

        #[arg(long)]
        month: Option<u32>,

        /// Pin the meeting to this day of the month
        #[arg(long)]
        day: Option<u32>,
    },
    /// Show the service tier for a tenure length
    Tier {
        /// Completed years of service
        #[arg(conflicts_with = "since")]
        years: Option<u32>,

        /// Investiture date to count years from
        #[arg(long)]
        since: Option<CalendarDate>,
    },
    /// Summarize a monthly attendance sheet
    Attendance {
        /// Sheet file (TOML)
        sheet: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let clock: Box<dyn ReferenceClock> = match cli.today {
        Some(date) => Box::new(FixedClock(date)),
        None => Box::new(SystemClock),
    };
    let ctx = Context::load(cli.roster, clock.as_ref())?;

    match cli.command {
        Commands::Today => commands::today::run(&ctx),
        Commands::Upcoming { days } => commands::upcoming::run(&ctx, days),
        Commands::Month { month } => commands::month::run(&ctx, month),
        Commands::Members { search, status, tier } => {
            commands::members::run(&ctx, RosterFilter { search, status, tier })
        }
        Commands::Meeting { year, month, day } => commands::meeting::run(&ctx, year, month, day),
        Commands::Tier { years, since } => commands::tier::run(&ctx, years, since),
        Commands::Attendance { sheet } => commands::attendance::run(&ctx, &sheet),
    }
}
