use anyhow::Result;
use owo_colors::OwoColorize;

use ministry_core::{PersonRecord, birthdays_in_month};

use super::Context;
use crate::render::month_name;

pub fn run(ctx: &Context, month: Option<u32>) -> Result<()> {
    let month = month.unwrap_or(ctx.today.month());
    let roster = ctx.roster()?;
    let people = roster.people();

    for line in lines(&people, month)? {
        println!("{}", line);
    }
    Ok(())
}

fn lines(people: &[PersonRecord], month: u32) -> Result<Vec<String>> {
    let born = birthdays_in_month(people, month)?;
    let mut lines = vec![format!("Birthdays in {}", month_name(month)).bold().to_string()];

    if born.is_empty() {
        lines.push("   None".dimmed().to_string());
    }
    for person in born {
        lines.push(format!(
            "   {:>2}  {} {}",
            person.birth_date.day(),
            person.name,
            format!("({})", person.birth_date.year()).dimmed()
        ));
    }
    Ok(lines)
}
