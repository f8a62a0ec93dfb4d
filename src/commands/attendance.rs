use std::path::Path;

use anyhow::{Context as _, Result};
use owo_colors::OwoColorize;

use ministry_core::CalendarDate;
use ministry_core::attendance::{MonthlySheet, format_amount};

use super::Context;
use crate::render::month_name;
use crate::roster::Roster;

pub fn run(ctx: &Context, sheet_path: &Path) -> Result<()> {
    let sheet = MonthlySheet::load(sheet_path, ctx.config.default_due_amount)
        .with_context(|| format!("Could not read attendance sheet {}", sheet_path.display()))?;

    // names are a nicety; ids are enough without a roster
    let roster = match ctx.roster() {
        Ok(roster) => Some(roster),
        Err(e) => {
            tracing::debug!("Showing member ids only: {:#}", e);
            None
        }
    };

    for line in lines(&sheet, roster.as_ref(), &ctx.today) {
        println!("{}", line);
    }
    Ok(())
}

fn mark(flag: bool, label: &str) -> String {
    if flag {
        label.to_string()
    } else {
        "·".dimmed().to_string()
    }
}

fn lines(sheet: &MonthlySheet, roster: Option<&Roster>, today: &CalendarDate) -> Vec<String> {
    let state = if sheet.is_editable(today) {
        "open".green().to_string()
    } else {
        "read-only".dimmed().to_string()
    };
    let mut lines = vec![format!(
        "{} {} {}",
        format!("Monthly meeting {} {}", month_name(sheet.month), sheet.year).bold(),
        "-".dimmed(),
        state
    )];

    for (id, entry) in &sheet.entries {
        let name = roster
            .and_then(|r| r.find(id))
            .map(|e| e.display_name())
            .unwrap_or_else(|| id.clone());
        let mut line = format!(
            "   {:<28} {} {} {}  {:>8}",
            name,
            mark(entry.present, "P"),
            mark(entry.absent, "A"),
            mark(entry.excused, "E"),
            format_amount(entry.due_amount_cents)
        );
        if !entry.excuse_letter.is_empty() {
            line.push_str(&format!("  {}", entry.excuse_letter.dimmed()));
        }
        lines.push(line);
    }

    let totals = sheet.totals();
    lines.push(format!(
        "   Present {}  Absent {}  Excused {}  Dues paid {}  Collected {}",
        totals.present,
        totals.absent,
        totals.excused,
        totals.dues_paid,
        format_amount(totals.total_amount_cents).bold()
    ));
    lines
}
