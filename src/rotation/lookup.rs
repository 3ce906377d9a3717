use crate::model::{RotationAnchor, ShiftLabel};
use chrono::NaiveDate;

/// Longueur d'une demi-période de rotation, en jours.
pub const PERIOD_DAYS: i64 = 14;

/// Division entière arrondie vers -∞ (`-17 / 14 == -2`, `-14 / 14 == -1`).
///
/// Panique si `b == 0`.
pub fn floor_div(a: i64, b: i64) -> i64 {
    let q = a / b;
    if a % b != 0 && ((a < 0) != (b < 0)) {
        q - 1
    } else {
        q
    }
}

/// Poste d'une date pour une ancre donnée.
///
/// Les périodes paires reprennent `start_shift`, les impaires l'inversent ;
/// la fonction est totale, y compris avant `threshold`.
pub fn shift_of(anchor: &RotationAnchor, date: NaiveDate) -> ShiftLabel {
    let delta_days = date.signed_duration_since(anchor.threshold).num_days();
    let period = floor_div(delta_days, PERIOD_DAYS);
    if period % 2 == 0 {
        anchor.start_shift
    } else {
        anchor.start_shift.opposite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn floor_div_rounds_down() {
        assert_eq!(floor_div(-17, 14), -2);
        assert_eq!(floor_div(-14, 14), -1);
        assert_eq!(floor_div(-1, 14), -1);
        assert_eq!(floor_div(0, 14), 0);
        assert_eq!(floor_div(13, 14), 0);
        assert_eq!(floor_div(15, 14), 1);
        assert_eq!(floor_div(7, -2), -4);
    }

    #[test]
    fn threshold_keeps_start_shift() {
        let anchor = RotationAnchor::new(d(2025, 5, 28), ShiftLabel::Night);
        assert_eq!(shift_of(&anchor, d(2025, 5, 28)), ShiftLabel::Night);
        assert_eq!(shift_of(&anchor, d(2025, 6, 10)), ShiftLabel::Night);
        assert_eq!(shift_of(&anchor, d(2025, 6, 11)), ShiftLabel::Day);
    }

    #[test]
    fn dates_before_threshold() {
        let anchor = RotationAnchor::new(d(2025, 5, 28), ShiftLabel::Night);
        // -1 .. -14 → période -1
        assert_eq!(shift_of(&anchor, d(2025, 5, 27)), ShiftLabel::Day);
        assert_eq!(shift_of(&anchor, d(2025, 5, 14)), ShiftLabel::Day);
        // -17 → période -2
        assert_eq!(shift_of(&anchor, d(2025, 5, 11)), ShiftLabel::Night);
        assert_eq!(shift_of(&anchor, d(2025, 4, 30)), ShiftLabel::Night);
    }

    #[test]
    fn fourteen_day_periodicity() {
        let anchor = RotationAnchor::new(d(2025, 5, 31), ShiftLabel::Day);
        let mut date = d(2024, 11, 1);
        while date < d(2026, 3, 1) {
            let later = date + chrono::Duration::days(PERIOD_DAYS);
            assert_ne!(shift_of(&anchor, date), shift_of(&anchor, later));
            let cycle = date + chrono::Duration::days(2 * PERIOD_DAYS);
            assert_eq!(shift_of(&anchor, date), shift_of(&anchor, cycle));
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn multiples_of_cycle_before_threshold() {
        let anchor = RotationAnchor::new(d(2025, 5, 28), ShiftLabel::Day);
        for k in 1..=20i64 {
            let date = anchor.threshold - chrono::Duration::days(2 * PERIOD_DAYS * k);
            assert_eq!(shift_of(&anchor, date), ShiftLabel::Day);
        }
    }
}
