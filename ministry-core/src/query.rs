//! Roster-wide birthday listings.

use serde::Serialize;

use crate::date::CalendarDate;
use crate::error::{CalendarError, CalendarResult};
use crate::person::{FactRules, PersonRecord};

/// One entry of an upcoming-birthdays listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday<'a> {
    pub person: &'a PersonRecord,
    pub days_until: u32,
    pub date: CalendarDate,
    /// Age reached on `date`, counting an observed leap-day birthday as reached
    pub turning: u32,
}

impl FactRules {
    /// Birthdays falling within `window_days` of `today`, nearest first.
    /// Equal distances are ordered by name; the sort is stable, so equal
    /// names keep their input order.
    pub fn birthdays_within<'a>(
        &self,
        people: &'a [PersonRecord],
        today: &CalendarDate,
        window_days: u32,
        include_today: bool,
    ) -> CalendarResult<Vec<UpcomingBirthday<'a>>> {
        let mut upcoming = Vec::new();

        for person in people {
            // rejects birth dates after today, whatever the window
            self.leap_day.compute_age(&person.birth_date, today)?;
            let days_until = self.leap_day.days_until_next_birthday(&person.birth_date, today)?;
            if days_until > window_days {
                continue;
            }
            if !include_today && self.leap_day.is_birthday_today(&person.birth_date, today) {
                continue;
            }
            let date = self.leap_day.next_birthday(&person.birth_date, today)?;
            upcoming.push(UpcomingBirthday {
                person,
                days_until,
                date,
                turning: date.year().abs_diff(person.birth_date.year()),
            });
        }

        upcoming.sort_by(|a, b| {
            a.days_until
                .cmp(&b.days_until)
                .then_with(|| a.person.name.cmp(&b.person.name))
        });
        Ok(upcoming)
    }

    /// Upcoming birthdays, excluding anyone whose birthday is today.
    pub fn upcoming_within<'a>(
        &self,
        people: &'a [PersonRecord],
        today: &CalendarDate,
        window_days: u32,
    ) -> CalendarResult<Vec<UpcomingBirthday<'a>>> {
        self.birthdays_within(people, today, window_days, false)
    }

    /// Everyone celebrating on `today`, ordered by name.
    pub fn birthdays_today<'a>(&self, people: &'a [PersonRecord], today: &CalendarDate) -> Vec<&'a PersonRecord> {
        let mut celebrating: Vec<&PersonRecord> = people
            .iter()
            .filter(|p| self.leap_day.is_birthday_today(&p.birth_date, today))
            .collect();
        celebrating.sort_by(|a, b| a.name.cmp(&b.name));
        celebrating
    }
}

pub fn upcoming_within<'a>(
    people: &'a [PersonRecord],
    today: &CalendarDate,
    window_days: u32,
) -> CalendarResult<Vec<UpcomingBirthday<'a>>> {
    FactRules::default().upcoming_within(people, today, window_days)
}

pub fn birthdays_today<'a>(people: &'a [PersonRecord], today: &CalendarDate) -> Vec<&'a PersonRecord> {
    FactRules::default().birthdays_today(people, today)
}

/// People born in `month` (1-12), ordered by day of month, then name.
pub fn birthdays_in_month(people: &[PersonRecord], month: u32) -> CalendarResult<Vec<&PersonRecord>> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth(month));
    }

    let mut born: Vec<&PersonRecord> = people.iter().filter(|p| p.birth_date.month() == month).collect();
    born.sort_by(|a, b| {
        a.birth_date
            .day()
            .cmp(&b.birth_date.day())
            .then_with(|| a.name.cmp(&b.name))
    });
    Ok(born)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    fn roster() -> Vec<PersonRecord> {
        vec![
            PersonRecord::new("Admin Admin", date("1990-02-05")),
            PersonRecord::new("Father Rodriguez", date("1975-06-15")),
            PersonRecord::new("John Michael Santos", date("2005-03-15")),
            PersonRecord::new("Maria Grace Cruz", date("2006-07-22")),
            PersonRecord::new("David Paul Rodriguez", date("2004-11-08")),
            PersonRecord::new("Sarah Joy Kim", date("2005-02-03")),
            PersonRecord::new("Mark Anthony Dela Cruz", date("2006-02-14")),
        ]
    }

    #[test]
    fn test_upcoming_thirty_days() {
        let people = roster();
        let upcoming = upcoming_within(&people, &date("2025-01-20"), 30).unwrap();
        let names: Vec<&str> = upcoming.iter().map(|u| u.person.name.as_str()).collect();

        assert_eq!(names, vec!["Sarah Joy Kim", "Admin Admin", "Mark Anthony Dela Cruz"]);
        assert_eq!(upcoming[0].days_until, 14);
        assert_eq!(upcoming[0].turning, 20);
        assert_eq!(upcoming[1].days_until, 16);
        assert_eq!(upcoming[2].days_until, 25);
    }

    #[test]
    fn test_upcoming_excludes_today() {
        let people = roster();
        let today = date("2025-07-22");
        let upcoming = upcoming_within(&people, &today, 30).unwrap();
        assert!(upcoming.iter().all(|u| u.person.name != "Maria Grace Cruz"));

        let celebrating = birthdays_today(&people, &today);
        assert_eq!(celebrating.len(), 1);
        assert_eq!(celebrating[0].name, "Maria Grace Cruz");
    }

    #[test]
    fn test_turning_counts_observed_leap_birthday() {
        let people = vec![PersonRecord::new("Leap", date("2004-02-29"))];
        let rules = FactRules {
            leap_day: crate::birthday::LeapDayPolicy::February28,
            ..Default::default()
        };
        let listed = rules.birthdays_within(&people, &date("2025-02-20"), 30, true).unwrap();
        assert_eq!(listed[0].date, date("2025-02-28"));
        assert_eq!(listed[0].turning, 21);
    }

    #[test]
    fn test_future_birth_is_an_error() {
        let people = vec![PersonRecord::new("Not Yet", date("2025-12-01"))];
        assert!(upcoming_within(&people, &date("2025-06-01"), 366).is_err());
    }

    #[test]
    fn test_future_birth_outside_window_is_still_an_error() {
        let people = vec![
            PersonRecord::new("Born Already", date("2000-06-10")),
            PersonRecord::new("Not Yet", date("2025-12-01")),
        ];
        let today = date("2025-06-01");
        assert!(matches!(
            upcoming_within(&people, &today, 30),
            Err(CalendarError::InvalidDate { .. })
        ));
        assert!(upcoming_within(&people, &today, 366).is_err());
    }

    #[test]
    fn test_ties_broken_by_name() {
        let people = vec![
            PersonRecord::new("Zed", date("2000-05-01")),
            PersonRecord::new("Amy", date("1999-05-01")),
        ];
        let upcoming = upcoming_within(&people, &date("2025-04-30"), 30).unwrap();
        assert_eq!(upcoming[0].person.name, "Amy");
        assert_eq!(upcoming[1].person.name, "Zed");
    }

    #[test]
    fn test_birthdays_in_month_sorted_by_day() {
        let people = roster();
        let february = birthdays_in_month(&people, 2).unwrap();
        let names: Vec<&str> = february.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Sarah Joy Kim", "Admin Admin", "Mark Anthony Dela Cruz"]);

        assert!(birthdays_in_month(&people, 9).unwrap().is_empty());
        assert!(birthdays_in_month(&people, 13).is_err());
    }
}
