use anyhow::Result;
use owo_colors::OwoColorize;

use ministry_core::MeetingSchedule;

use super::Context;

pub fn run(ctx: &Context, year: Option<i32>, month: Option<u32>, day: Option<u32>) -> Result<()> {
    let time = ctx.config.meeting_time()?;
    let mut schedule = MeetingSchedule::new(ctx.today.year(), ctx.today.month(), time)?;

    if year.is_some() || month.is_some() {
        schedule.select_month(year.unwrap_or(ctx.today.year()), month.unwrap_or(ctx.today.month()))?;
    }
    if let Some(day) = day {
        schedule.set_day(day)?;
    }

    println!("{}", describe(&schedule)?);
    Ok(())
}

fn describe(schedule: &MeetingSchedule) -> Result<String> {
    let date = schedule.date()?;
    let note = if schedule.is_overridden() {
        "custom date"
    } else {
        "first Sunday"
    };

    Ok(format!(
        "Monthly meeting: {} at {} {}",
        date.to_naive().format("%A, %B %-d %Y"),
        schedule.time().format("%H:%M"),
        format!("({})", note).dimmed()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn test_describe_first_sunday() {
        let schedule = MeetingSchedule::new(2025, 7, NaiveTime::from_hms_opt(12, 0, 0).unwrap()).unwrap();
        let text = describe(&schedule).unwrap();
        assert!(text.contains("Sunday, July 6 2025"));
        assert!(text.contains("12:00"));
        assert!(text.contains("first Sunday"));
    }

    #[test]
    fn test_describe_override() {
        let mut schedule = MeetingSchedule::new(2025, 7, NaiveTime::from_hms_opt(9, 30, 0).unwrap()).unwrap();
        schedule.set_day(13).unwrap();
        let text = describe(&schedule).unwrap();
        assert!(text.contains("Sunday, July 13 2025"));
        assert!(text.contains("09:30"));
        assert!(text.contains("custom date"));
    }
}
