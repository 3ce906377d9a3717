use super::lookup::shift_of;
use crate::model::{Pattern, RosterEntry, ShiftLabel};
use chrono::{Datelike, NaiveDate};

/// Poste par défaut quand aucun jour travaillé ne précède dans le mois.
pub const DEFAULT_OFF_SHIFT: ShiftLabel = ShiftLabel::Day;

/// Premier jour travaillé strictement avant `date`, dans le même mois.
pub fn prior_working_day(entry: &RosterEntry, date: NaiveDate) -> Option<NaiveDate> {
    let mut candidate = date.pred_opt()?;
    while candidate.month() == date.month() && candidate.year() == date.year() {
        if !entry.employee.is_off(candidate.weekday()) {
            return Some(candidate);
        }
        candidate = candidate.pred_opt()?;
    }
    None
}

/// Poste auquel est rattaché un jour de repos.
pub fn prior_working_shift(entry: &RosterEntry, date: NaiveDate) -> ShiftLabel {
    match prior_working_day(entry, date) {
        Some(day) => working_shift(entry, day),
        None => DEFAULT_OFF_SHIFT,
    }
}

/// Poste d'un jour travaillé, sans tenir compte des repos.
pub fn working_shift(entry: &RosterEntry, date: NaiveDate) -> ShiftLabel {
    match &entry.pattern {
        Pattern::DayOnly => ShiftLabel::Day,
        Pattern::DayNight(anchor) => shift_of(anchor, date),
    }
}
