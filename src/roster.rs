//! Roster files.
//!
//! A roster is either TOML (`[[members]]` tables) or CSV with a header row.
//! Rows that cannot be turned into a valid [`PersonRecord`] are skipped with
//! a warning; the rest of the roster still loads.

use std::fmt;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Deserialize;

use ministry_core::{CalendarDate, PersonRecord, ServiceTier, format_member_name};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum MemberStatus {
    #[default]
    Active,
    Inactive,
    Suspended,
    Alumni,
}

impl fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MemberStatus::Active => "active",
            MemberStatus::Inactive => "inactive",
            MemberStatus::Suspended => "suspended",
            MemberStatus::Alumni => "alumni",
        };
        f.write_str(label)
    }
}

impl FromStr for MemberStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(MemberStatus::Active),
            "inactive" => Ok(MemberStatus::Inactive),
            "suspended" => Ok(MemberStatus::Suspended),
            "alumni" => Ok(MemberStatus::Alumni),
            other => anyhow::bail!("unknown member status '{}'", other),
        }
    }
}

/// A row as written in the file, before validation.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RosterRow {
    id: Option<String>,
    member_number: Option<String>,
    name: Option<String>,
    surname: Option<String>,
    given_names: Option<String>,
    birth_date: Option<String>,
    tenure_start: Option<String>,
    status: Option<String>,
    email: Option<String>,
    position: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RosterFile {
    #[serde(default)]
    members: Vec<RosterRow>,
}

/// CSV leaves absent cells as empty strings.
fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, PartialEq)]
pub struct RosterEntry {
    pub id: String,
    pub member_number: Option<String>,
    pub person: PersonRecord,
    pub surname: Option<String>,
    pub given_names: Option<String>,
    pub status: MemberStatus,
    pub email: Option<String>,
    pub position: Option<String>,
}

impl RosterEntry {
    fn from_row(row: RosterRow, line: usize) -> Result<Self> {
        let surname = non_empty(row.surname);
        let given_names = non_empty(row.given_names);
        let name = match (non_empty(row.name), &surname, &given_names) {
            (Some(name), _, _) => name,
            (None, Some(surname), Some(given)) => format!("{} {}", given, surname),
            (None, Some(surname), None) => surname.clone(),
            _ => anyhow::bail!("missing name"),
        };

        let birth_date: CalendarDate = non_empty(row.birth_date)
            .context("missing birth_date")?
            .parse()
            .context("bad birth_date")?;

        let mut person = PersonRecord::new(name, birth_date);
        if let Some(start) = non_empty(row.tenure_start) {
            person = person.with_tenure_start(start.parse().context("bad tenure_start")?);
        }

        let status = match non_empty(row.status) {
            Some(status) => status.parse()?,
            None => MemberStatus::default(),
        };

        let member_number = non_empty(row.member_number);
        let id = non_empty(row.id)
            .or_else(|| member_number.clone())
            .unwrap_or_else(|| format!("row-{}", line));

        Ok(RosterEntry {
            id,
            member_number,
            person,
            surname,
            given_names,
            status,
            email: non_empty(row.email),
            position: non_empty(row.position),
        })
    }

    /// "Surname, G.M." when the name parts are known, else the full name.
    pub fn display_name(&self) -> String {
        match (&self.surname, &self.given_names) {
            (Some(surname), Some(given)) => format_member_name(surname, given),
            _ => self.person.name.clone(),
        }
    }
}

#[derive(Debug, Default)]
pub struct Roster {
    pub entries: Vec<RosterEntry>,
    pub skipped: usize,
}

impl Roster {
    pub fn load(path: &Path) -> Result<Self> {
        tracing::debug!("Loading roster from {}", path.display());

        let roster = match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => {
                let file = std::fs::File::open(path)
                    .with_context(|| format!("Could not open roster {}", path.display()))?;
                Self::from_csv_reader(file)?
            }
            _ => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("Could not read roster {}", path.display()))?;
                Self::from_toml_str(&content)
                    .with_context(|| format!("Could not parse roster {}", path.display()))?
            }
        };

        tracing::info!(
            "Loaded {} members ({} skipped) from {}",
            roster.entries.len(),
            roster.skipped,
            path.display()
        );
        Ok(roster)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: RosterFile = toml::from_str(content)?;
        let mut roster = Roster::default();
        for (i, row) in file.members.into_iter().enumerate() {
            roster.push_row(row, i + 1);
        }
        Ok(roster)
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let mut roster = Roster::default();

        for (i, record) in csv_reader.deserialize::<RosterRow>().enumerate() {
            // header is line 1
            let line = i + 2;
            match record {
                Ok(row) => roster.push_row(row, line),
                Err(e) => {
                    tracing::warn!("Skipping roster line {}: {}", line, e);
                    roster.skipped += 1;
                }
            }
        }
        Ok(roster)
    }

    fn push_row(&mut self, row: RosterRow, line: usize) {
        match RosterEntry::from_row(row, line) {
            Ok(entry) => self.entries.push(entry),
            Err(e) => {
                tracing::warn!("Skipping roster entry {}: {:#}", line, e);
                self.skipped += 1;
            }
        }
    }

    pub fn people(&self) -> Vec<PersonRecord> {
        self.entries.iter().map(|e| e.person.clone()).collect()
    }

    /// People already born on `today`. Later birth dates are data errors;
    /// they are reported and left out so one bad row doesn't sink a listing.
    pub fn people_born_by(&self, today: &CalendarDate) -> Vec<PersonRecord> {
        self.entries
            .iter()
            .filter(|e| {
                let born = e.person.birth_date <= *today;
                if !born {
                    tracing::warn!(
                        "Skipping {}: birth date {} is after {}",
                        e.person.name,
                        e.person.birth_date,
                        today
                    );
                }
                born
            })
            .map(|e| e.person.clone())
            .collect()
    }

    pub fn find(&self, id: &str) -> Option<&RosterEntry> {
        self.entries.iter().find(|e| e.id == id)
    }
}

/// Member-list filters. Unset fields match everything.
#[derive(Debug, Default, Clone)]
pub struct RosterFilter {
    pub search: Option<String>,
    pub status: Option<MemberStatus>,
    pub tier: Option<ServiceTier>,
}

impl RosterFilter {
    /// `tier` is the entry's derived tier, if it has one.
    pub fn matches(&self, entry: &RosterEntry, tier: Option<ServiceTier>) -> bool {
        if let Some(term) = &self.search {
            let term = term.to_lowercase();
            let hit = |field: Option<&str>| field.is_some_and(|f| f.to_lowercase().contains(&term));
            if !(hit(Some(entry.person.name.as_str())) || hit(entry.member_number.as_deref()) || hit(entry.email.as_deref())) {
                return false;
            }
        }
        if let Some(status) = self.status
            && entry.status != status
        {
            return false;
        }
        if let Some(wanted) = self.tier
            && tier != Some(wanted)
        {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOML_ROSTER: &str = r#"
[[members]]
member_number = "AS001"
surname = "Doe"
given_names = "John Michael"
birth_date = "2010-05-15"
tenure_start = "2024-01-15"
email = "john.doe@email.com"
position = "Assistant Secretary"

[[members]]
member_number = "AS002"
name = "Maria Santos"
birth_date = "2008-08-22"
tenure_start = "2019-03-10"
status = "ACTIVE"

[[members]]
name = "Broken Date"
birth_date = "2011-02-30"

[[members]]
member_number = "AS004"
name = "Miguel Rodriguez"
birth_date = "2011-12-03"
status = "alumni"
"#;

    #[test]
    fn test_toml_roster_skips_invalid_rows() {
        let roster = Roster::from_toml_str(TOML_ROSTER).unwrap();
        assert_eq!(roster.entries.len(), 3);
        assert_eq!(roster.skipped, 1);

        let john = roster.find("AS001").unwrap();
        assert_eq!(john.person.name, "John Michael Doe");
        assert_eq!(john.display_name(), "Doe, J.M.");
        assert_eq!(john.status, MemberStatus::Active);

        assert_eq!(roster.find("AS004").unwrap().status, MemberStatus::Alumni);
    }

    #[test]
    fn test_csv_roster() {
        let csv = "\
id,name,birth_date,tenure_start,status,email
m1,Sarah Joy Kim,2005-02-03,2018-06-01,active,
m2,Mark Anthony Dela Cruz,2006-02-14,,inactive,mark@example.com
m3,No Birthday,,,active,
";
        let roster = Roster::from_csv_reader(csv.as_bytes()).unwrap();
        assert_eq!(roster.entries.len(), 2);
        assert_eq!(roster.skipped, 1);

        let sarah = roster.find("m1").unwrap();
        assert!(sarah.person.tenure_start.is_some());
        assert_eq!(sarah.email, None);

        let mark = roster.find("m2").unwrap();
        assert_eq!(mark.person.tenure_start, None);
        assert_eq!(mark.status, MemberStatus::Inactive);
    }

    #[test]
    fn test_load_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let toml_path = dir.path().join("roster.toml");
        std::fs::write(&toml_path, TOML_ROSTER).unwrap();
        assert_eq!(Roster::load(&toml_path).unwrap().entries.len(), 3);

        let csv_path = dir.path().join("roster.CSV");
        std::fs::write(&csv_path, "name,birth_date\nAmy,1999-05-01\n").unwrap();
        assert_eq!(Roster::load(&csv_path).unwrap().entries.len(), 1);

        assert!(Roster::load(&dir.path().join("missing.toml")).is_err());
    }

    #[test]
    fn test_people_born_by_drops_future_births() {
        let roster = Roster::from_toml_str(TOML_ROSTER).unwrap();
        let cutoff: CalendarDate = "2010-01-01".parse().unwrap();
        let people = roster.people_born_by(&cutoff);
        assert_eq!(people.len(), 1);
        assert_eq!(people[0].name, "Maria Santos");
        assert_eq!(roster.people().len(), 3);
    }

    #[test]
    fn test_filter() {
        let roster = Roster::from_toml_str(TOML_ROSTER).unwrap();
        let john = roster.find("AS001").unwrap();
        let miguel = roster.find("AS004").unwrap();

        let by_email = RosterFilter {
            search: Some("DOE@".into()),
            ..Default::default()
        };
        assert!(by_email.matches(john, None));
        assert!(!by_email.matches(miguel, None));

        let by_number = RosterFilter {
            search: Some("as004".into()),
            ..Default::default()
        };
        assert!(by_number.matches(miguel, None));

        let alumni = RosterFilter {
            status: Some(MemberStatus::Alumni),
            ..Default::default()
        };
        assert!(alumni.matches(miguel, None));
        assert!(!alumni.matches(john, None));

        let juniors = RosterFilter {
            tier: Some(ServiceTier::Junior),
            ..Default::default()
        };
        assert!(juniors.matches(john, Some(ServiceTier::Junior)));
        assert!(!juniors.matches(john, Some(ServiceTier::Neophyte)));
        assert!(!juniors.matches(miguel, None));
    }
}
