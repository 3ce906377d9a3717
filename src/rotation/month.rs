use super::offday::{prior_working_shift, working_shift};
use super::types::RotationError;
use crate::model::{DayLabel, DayRecord, RosterEntry, ShiftLabel};
use chrono::{Datelike, NaiveDate};

/// Nombre de jours du mois ; `InvalidMonth` hors de 1..=12.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, RotationError> {
    let (first, next) = month_bounds(year, month)?;
    Ok(next.signed_duration_since(first).num_days() as u32)
}

fn month_bounds(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate), RotationError> {
    let invalid = || RotationError::InvalidMonth { year, month };
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(invalid)?;
    Ok((first, next))
}

/// Dates du mois, dans l'ordre croissant.
pub fn month_dates(year: i32, month: u32) -> Result<impl Iterator<Item = NaiveDate>, RotationError> {
    let (first, next) = month_bounds(year, month)?;
    Ok(first.iter_days().take_while(move |d| *d < next))
}

pub fn label_for(entry: &RosterEntry, date: NaiveDate) -> DayLabel {
    if entry.employee.is_off(date.weekday()) {
        DayLabel::Off(prior_working_shift(entry, date))
    } else {
        DayLabel::Working(working_shift(entry, date))
    }
}

/// Compteurs `(day_units, night_units)` du mois, repos inclus.
pub fn count_shifts(
    entry: &RosterEntry,
    year: i32,
    month: u32,
) -> Result<(u32, u32), RotationError> {
    let mut day = 0u32;
    let mut night = 0u32;
    for date in month_dates(year, month)? {
        match label_for(entry, date).unit() {
            ShiftLabel::Day => day += 1,
            ShiftLabel::Night => night += 1,
        }
    }
    Ok((day, night))
}

/// Calendrier jour par jour du mois.
pub fn build_calendar(
    entry: &RosterEntry,
    year: i32,
    month: u32,
) -> Result<Vec<DayRecord>, RotationError> {
    Ok(month_dates(year, month)?
        .map(|date| DayRecord {
            date,
            weekday: date.weekday(),
            label: label_for(entry, date),
        })
        .collect())
}
