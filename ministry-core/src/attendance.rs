//! Monthly meeting attendance and dues.
//!
//! A [`MonthlySheet`] holds one [`AttendanceEntry`] per member for a single
//! month. Only the sheet of the reference month can be edited; past and
//! future months are read-only.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::date::CalendarDate;
use crate::error::{CalendarError, CalendarResult};

/// Dues credited when the dues box is ticked, in cents.
pub const DEFAULT_DUE_AMOUNT_CENTS: u64 = 2000;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttendanceEntry {
    pub present: bool,
    pub absent: bool,
    pub excused: bool,
    pub excuse_letter: String,
    pub due_paid: bool,
    pub due_amount_cents: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AttendanceTotals {
    pub present: usize,
    pub absent: usize,
    pub excused: usize,
    pub dues_paid: usize,
    pub total_amount_cents: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlySheet {
    pub year: i32,
    pub month: u32,
    /// Amount credited by ticking the dues box; also the paid threshold.
    pub due_amount_cents: u64,
    /// Keyed by member id
    pub entries: BTreeMap<String, AttendanceEntry>,
}

/// On-disk shape of a sheet; the dues amount may be left to the caller.
#[derive(Debug, Deserialize)]
struct SheetFile {
    year: i32,
    month: u32,
    due_amount_cents: Option<u64>,
    #[serde(default)]
    entries: BTreeMap<String, AttendanceEntry>,
}

impl MonthlySheet {
    pub fn new(year: i32, month: u32) -> CalendarResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth(month));
        }
        Ok(MonthlySheet {
            year,
            month,
            due_amount_cents: DEFAULT_DUE_AMOUNT_CENTS,
            entries: BTreeMap::new(),
        })
    }

    /// Read a sheet saved as TOML. A sheet that does not name its own
    /// `due_amount_cents` uses `default_due_cents`.
    pub fn load(path: &Path, default_due_cents: u64) -> CalendarResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content, default_due_cents)
    }

    pub fn from_toml_str(content: &str, default_due_cents: u64) -> CalendarResult<Self> {
        let file: SheetFile = toml::from_str(content).map_err(|e| CalendarError::Attendance(e.to_string()))?;
        if !(1..=12).contains(&file.month) {
            return Err(CalendarError::InvalidMonth(file.month));
        }
        Ok(MonthlySheet {
            year: file.year,
            month: file.month,
            due_amount_cents: file.due_amount_cents.unwrap_or(default_due_cents),
            entries: file.entries,
        })
    }

    /// A sheet with a blank entry for each member id.
    pub fn for_members<I, S>(member_ids: I, year: i32, month: u32) -> CalendarResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut sheet = MonthlySheet::new(year, month)?;
        for id in member_ids {
            sheet.entries.entry(id.into()).or_default();
        }
        Ok(sheet)
    }

    pub fn with_due_amount(mut self, cents: u64) -> Self {
        self.due_amount_cents = cents;
        self
    }

    pub fn is_editable(&self, today: &CalendarDate) -> bool {
        self.year == today.year() && self.month == today.month()
    }

    pub fn entry(&self, member_id: &str) -> Option<&AttendanceEntry> {
        self.entries.get(member_id)
    }

    fn entry_mut(&mut self, member_id: &str, today: &CalendarDate) -> CalendarResult<&mut AttendanceEntry> {
        if !self.is_editable(today) {
            return Err(CalendarError::Attendance(format!(
                "sheet for {:04}-{:02} is read-only on {}",
                self.year, self.month, today
            )));
        }
        self.entries
            .get_mut(member_id)
            .ok_or_else(|| CalendarError::Attendance(format!("no member '{}' on this sheet", member_id)))
    }

    /// Present and absent exclude each other.
    pub fn toggle_present(&mut self, member_id: &str, today: &CalendarDate) -> CalendarResult<()> {
        let entry = self.entry_mut(member_id, today)?;
        entry.present = !entry.present;
        entry.absent = false;
        Ok(())
    }

    pub fn toggle_absent(&mut self, member_id: &str, today: &CalendarDate) -> CalendarResult<()> {
        let entry = self.entry_mut(member_id, today)?;
        entry.absent = !entry.absent;
        entry.present = false;
        Ok(())
    }

    pub fn toggle_excused(&mut self, member_id: &str, today: &CalendarDate) -> CalendarResult<()> {
        let entry = self.entry_mut(member_id, today)?;
        entry.excused = !entry.excused;
        Ok(())
    }

    pub fn set_excuse_letter(&mut self, member_id: &str, text: &str, today: &CalendarDate) -> CalendarResult<()> {
        let entry = self.entry_mut(member_id, today)?;
        entry.excuse_letter = text.to_string();
        Ok(())
    }

    /// Ticking credits the standard amount, unticking resets it to zero.
    pub fn toggle_due(&mut self, member_id: &str, today: &CalendarDate) -> CalendarResult<()> {
        let standard = self.due_amount_cents;
        let entry = self.entry_mut(member_id, today)?;
        entry.due_paid = !entry.due_paid;
        entry.due_amount_cents = if entry.due_paid { standard } else { 0 };
        Ok(())
    }

    /// Record an amount. Reaching the standard amount marks dues paid; a
    /// smaller amount leaves the paid flag as it was.
    pub fn set_due_amount(&mut self, member_id: &str, cents: u64, today: &CalendarDate) -> CalendarResult<()> {
        let standard = self.due_amount_cents;
        let entry = self.entry_mut(member_id, today)?;
        entry.due_amount_cents = cents;
        if cents >= standard {
            entry.due_paid = true;
        }
        Ok(())
    }

    pub fn totals(&self) -> AttendanceTotals {
        self.entries.values().fold(AttendanceTotals::default(), |mut acc, e| {
            acc.present += usize::from(e.present);
            acc.absent += usize::from(e.absent);
            acc.excused += usize::from(e.excused);
            acc.dues_paid += usize::from(e.due_paid);
            acc.total_amount_cents += e.due_amount_cents;
            acc
        })
    }
}

/// Render cents as "20.00".
pub fn format_amount(cents: u64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}
