use anyhow::Result;
use owo_colors::OwoColorize;

use ministry_core::{CalendarDate, FactRules, PersonRecord};

use super::Context;
use crate::render::{Render, pluralize};

pub fn run(ctx: &Context, days: Option<u32>) -> Result<()> {
    let window = days.unwrap_or(ctx.config.upcoming_window_days);
    let roster = ctx.roster()?;
    let people = roster.people_born_by(&ctx.today);

    for line in lines(&ctx.rules, &people, &ctx.today, window)? {
        println!("{}", line);
    }
    Ok(())
}

fn lines(rules: &FactRules, people: &[PersonRecord], today: &CalendarDate, window: u32) -> Result<Vec<String>> {
    let upcoming = rules.upcoming_within(people, today, window)?;
    let header = format!("Upcoming birthdays (next {} {})", window, pluralize("day", window as usize));

    if upcoming.is_empty() {
        return Ok(vec![header.bold().to_string(), "   None".dimmed().to_string()]);
    }

    let mut lines = vec![header.bold().to_string()];
    lines.extend(upcoming.iter().map(|b| format!("   {}", b.render())));
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_nearest_first_and_today_excluded() {
        let people = vec![
            PersonRecord::new("Mark Anthony Dela Cruz", date("2006-02-14")),
            PersonRecord::new("Sarah Joy Kim", date("2005-02-03")),
            PersonRecord::new("Birthday Today", date("2000-01-20")),
            PersonRecord::new("Far Away", date("2000-06-01")),
        ];
        let lines = lines(&FactRules::default(), &people, &date("2025-01-20"), 30).unwrap();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("Sarah Joy Kim"));
        assert!(lines[1].contains("in 14 days"));
        assert!(lines[2].contains("Mark Anthony Dela Cruz"));
    }

    #[test]
    fn test_empty_window() {
        let people = vec![PersonRecord::new("Far Away", date("2000-06-01"))];
        let lines = lines(&FactRules::default(), &people, &date("2025-01-20"), 1).unwrap();
        assert!(lines[0].contains("next 1 day)"));
        assert!(lines[1].contains("None"));
    }
}
