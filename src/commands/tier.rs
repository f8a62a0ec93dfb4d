use anyhow::Result;

use ministry_core::{CalendarDate, TierThresholds, compute_years_of_service};

use super::Context;
use crate::render::{Render, pluralize};

pub fn run(ctx: &Context, years: Option<u32>, since: Option<CalendarDate>) -> Result<()> {
    let years = match (years, since) {
        (Some(years), _) => years,
        (None, Some(start)) => compute_years_of_service(&start, &ctx.today),
        (None, None) => anyhow::bail!("Pass a number of years or --since <YYYY-MM-DD>"),
    };
    println!("{}", describe(&ctx.rules.tiers, years));
    Ok(())
}

fn describe(tiers: &TierThresholds, years: u32) -> String {
    format!(
        "{} {} of service: {}",
        years,
        pluralize("year", years as usize),
        tiers.classify(years).render()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        let tiers = TierThresholds::default();
        assert!(describe(&tiers, 1).starts_with("1 year of service"));
        assert!(describe(&tiers, 4).contains("Junior"));
        assert!(describe(&tiers, 5).contains("Senior Server"));
    }
}
