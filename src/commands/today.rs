use anyhow::Result;
use owo_colors::OwoColorize;

use ministry_core::{CalendarDate, FactRules, PersonRecord};

use super::Context;
use crate::render::Render;

pub fn run(ctx: &Context) -> Result<()> {
    let roster = ctx.roster()?;
    let people = roster.people_born_by(&ctx.today);

    for line in lines(&ctx.rules, &people, &ctx.today)? {
        println!("{}", line);
    }
    Ok(())
}

fn lines(rules: &FactRules, people: &[PersonRecord], today: &CalendarDate) -> Result<Vec<String>> {
    let celebrating = rules.birthdays_within(people, today, 0, true)?;

    if celebrating.is_empty() {
        return Ok(vec![format!("No birthdays today ({})", today).dimmed().to_string()]);
    }

    let mut lines = vec![format!("🎂 Today's birthdays ({})", today).bold().to_string()];
    lines.extend(celebrating.iter().map(|b| format!("   {}", b.render())));
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_lists_only_todays_birthdays() {
        let people = vec![
            PersonRecord::new("Maria Grace Cruz", date("2006-07-22")),
            PersonRecord::new("Father Rodriguez", date("1975-06-15")),
        ];
        let lines = lines(&FactRules::default(), &people, &date("2025-07-22")).unwrap();

        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("Maria Grace Cruz"));
        assert!(lines[1].contains("turns 19"));
    }

    #[test]
    fn test_no_birthdays() {
        let people = vec![PersonRecord::new("Father Rodriguez", date("1975-06-15"))];
        let lines = lines(&FactRules::default(), &people, &date("2025-07-22")).unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("No birthdays today"));
    }
}
