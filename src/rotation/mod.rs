mod lookup;
mod month;
mod offday;
mod types;

pub use lookup::{floor_div, shift_of, PERIOD_DAYS};
pub use month::{build_calendar, count_shifts, days_in_month, label_for};
pub use offday::{prior_working_day, prior_working_shift, working_shift, DEFAULT_OFF_SHIFT};
pub use types::RotationError;

use crate::model::{DayRecord, MonthSummary, Roster, RosterEntry, ShiftLabel};
use chrono::NaiveDate;

/// Engine : interface de requête au-dessus d'un Roster validé
#[derive(Debug, Default)]
pub struct Engine {
    roster: Roster,
}

impl Engine {
    pub fn new(roster: Roster) -> Self {
        Self { roster }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn entry(&self, name: &str) -> Result<&RosterEntry, RotationError> {
        self.roster
            .find_by_name(name)
            .ok_or_else(|| RotationError::UnknownEmployee(name.to_string()))
    }

    /// Synthèse de tous les employés, dans l'ordre du roster.
    pub fn month_summary(&self, year: i32, month: u32) -> Result<Vec<MonthSummary>, RotationError> {
        month_summary(self.roster.entries(), year, month)
    }

    /// Calendrier d'un employé ; `None` pour une sélection vide.
    pub fn employee_calendar(
        &self,
        name: &str,
        year: i32,
        month: u32,
    ) -> Result<Option<Vec<DayRecord>>, RotationError> {
        if name.trim().is_empty() {
            return Ok(None);
        }
        let entry = self.entry(name)?;
        employee_calendar(entry, year, month).map(Some)
    }

    /// Poste de travail d'une date (les repos ne sont pas pris en compte).
    pub fn shift_on(&self, name: &str, date: NaiveDate) -> Result<ShiftLabel, RotationError> {
        Ok(working_shift(self.entry(name)?, date))
    }
}

pub fn month_summary(
    entries: &[RosterEntry],
    year: i32,
    month: u32,
) -> Result<Vec<MonthSummary>, RotationError> {
    let total = days_in_month(year, month)?;
    #[cfg(feature = "logging")]
    tracing::debug!(year, month, employees = entries.len(), "computing month summary");
    entries
        .iter()
        .map(|entry| {
            let (day_units, night_units) = count_shifts(entry, year, month)?;
            debug_assert_eq!(day_units + night_units, total);
            Ok(MonthSummary {
                employee: entry.employee.name.clone(),
                shift_type: entry.employee.shift_type,
                year,
                month,
                day_units,
                night_units,
                total,
            })
        })
        .collect()
}

pub fn employee_calendar(
    entry: &RosterEntry,
    year: i32,
    month: u32,
) -> Result<Vec<DayRecord>, RotationError> {
    #[cfg(feature = "logging")]
    tracing::debug!(employee = %entry.employee.name, year, month, "building calendar");
    build_calendar(entry, year, month)
}
