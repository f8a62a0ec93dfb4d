use anyhow::Result;
use owo_colors::OwoColorize;

use ministry_core::{CalendarDate, FactRules};

use super::Context;
use crate::render::{Render, pluralize};
use crate::roster::{Roster, RosterFilter};

pub fn run(ctx: &Context, filter: RosterFilter) -> Result<()> {
    let roster = ctx.roster()?;
    for line in lines(&ctx.rules, &roster, &filter, &ctx.today) {
        println!("{}", line);
    }
    Ok(())
}

fn lines(rules: &FactRules, roster: &Roster, filter: &RosterFilter, today: &CalendarDate) -> Vec<String> {
    let mut rows = Vec::new();

    for entry in &roster.entries {
        let facts = match rules.derive(&entry.person, today) {
            Ok(facts) => facts,
            Err(e) => {
                tracing::warn!("Skipping {}: {}", entry.person.name, e);
                continue;
            }
        };
        if !filter.matches(entry, facts.service_tier) {
            continue;
        }

        let next = if facts.is_birthday_today {
            "today 🎂".to_string()
        } else {
            format!("{} ({}d)", facts.next_birthday, facts.days_until_next_birthday)
        };
        let service = match facts.years_of_service {
            Some(years) => format!("{} {}", years, pluralize("yr", years as usize)),
            None => "-".to_string(),
        };
        let tier = facts
            .service_tier
            .map(|t| t.render())
            .unwrap_or_else(|| "-".dimmed().to_string());

        let mut row = format!(
            "   {:<28} {:>3}  {:<20} {:<8}  {}  {}",
            entry.display_name(),
            facts.age,
            next,
            service,
            tier,
            entry.status.render()
        );
        if let Some(position) = &entry.position {
            row.push_str(&format!("  {}", position.dimmed()));
        }
        rows.push(row);
    }

    let mut lines = vec![format!("{} {}", rows.len(), pluralize("member", rows.len())).bold().to_string()];
    lines.extend(rows);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::MemberStatus;
    use ministry_core::ServiceTier;

    const ROSTER: &str = r#"
[[members]]
member_number = "AS001"
surname = "Doe"
given_names = "John Michael"
birth_date = "2010-05-15"
tenure_start = "2024-01-15"
position = "Assistant Secretary"

[[members]]
member_number = "AS002"
name = "Maria Santos"
birth_date = "2008-08-22"
tenure_start = "2019-03-10"

[[members]]
member_number = "AS003"
name = "Future Baby"
birth_date = "2030-01-01"
status = "inactive"
"#;

    fn today() -> CalendarDate {
        "2025-07-22".parse().unwrap()
    }

    #[test]
    fn test_all_members_with_facts() {
        let roster = Roster::from_toml_str(ROSTER).unwrap();
        let lines = lines(&FactRules::default(), &roster, &RosterFilter::default(), &today());

        // the future birth date is skipped
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("2 members"));
        assert!(lines[1].contains("Doe, J.M."));
        assert!(lines[1].contains("Neophyte"));
        assert!(lines[1].contains("Assistant Secretary"));
        assert!(lines[2].contains("Maria Santos"));
        assert!(lines[2].contains("Senior Server"));
    }

    #[test]
    fn test_filters_apply() {
        let roster = Roster::from_toml_str(ROSTER).unwrap();
        let filter = RosterFilter {
            tier: Some(ServiceTier::SeniorServer),
            status: Some(MemberStatus::Active),
            ..Default::default()
        };
        let lines = lines(&FactRules::default(), &roster, &filter, &today());
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("Maria Santos"));
    }
}
