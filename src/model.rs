use chrono::{Month, NaiveDate, Weekday};
use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Type de poste d'un employé
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftType {
    #[serde(alias = "Day Shift Only")]
    DayOnly,
    #[serde(alias = "Day/Night Shift")]
    DayNight,
}

impl fmt::Display for ShiftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShiftType::DayOnly => f.write_str("Day Shift Only"),
            ShiftType::DayNight => f.write_str("Day/Night Shift"),
        }
    }
}

/// Poste effectif d'une journée travaillée
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftLabel {
    Day,
    Night,
}

impl ShiftLabel {
    pub fn opposite(self) -> Self {
        match self {
            ShiftLabel::Day => ShiftLabel::Night,
            ShiftLabel::Night => ShiftLabel::Day,
        }
    }
}

impl fmt::Display for ShiftLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShiftLabel::Day => f.write_str("Day"),
            ShiftLabel::Night => f.write_str("Night"),
        }
    }
}

/// Jours de repos hebdomadaires (masque sur 7 bits, lundi = bit 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WeekOffs(u8);

impl WeekOffs {
    pub const fn none() -> Self {
        Self(0)
    }

    pub fn with(self, day: Weekday) -> Self {
        Self(self.0 | (1 << day.num_days_from_monday()))
    }

    pub fn contains(self, day: Weekday) -> bool {
        (self.0 >> day.num_days_from_monday()) & 1 != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Jours dans l'ordre lundi → dimanche.
    pub fn iter(self) -> impl Iterator<Item = Weekday> {
        (0..7u8)
            .filter_map(|i| Weekday::try_from(i).ok())
            .filter(move |d| self.contains(*d))
    }
}

impl FromIterator<Weekday> for WeekOffs {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        iter.into_iter().fold(Self::none(), Self::with)
    }
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

impl Serialize for WeekOffs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(None)?;
        for day in self.iter() {
            seq.serialize_element(weekday_name(day))?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for WeekOffs {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct WeekOffsVisitor;

        impl<'de> Visitor<'de> for WeekOffsVisitor {
            type Value = WeekOffs;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a list of weekday names")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<WeekOffs, A::Error> {
                let mut offs = WeekOffs::none();
                while let Some(raw) = seq.next_element::<String>()? {
                    let day: Weekday = raw
                        .trim()
                        .parse()
                        .map_err(|_| de::Error::custom(format!("unknown weekday: {raw}")))?;
                    offs = offs.with(day);
                }
                Ok(offs)
            }
        }

        deserializer.deserialize_seq(WeekOffsVisitor)
    }
}

/// Employé (défini au démarrage, immuable)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    pub shift_type: ShiftType,
    #[serde(default)]
    pub week_offs: WeekOffs,
}

impl Employee {
    pub fn new<N: Into<String>>(name: N, shift_type: ShiftType, week_offs: &[Weekday]) -> Self {
        Self {
            name: name.into(),
            shift_type,
            week_offs: week_offs.iter().copied().collect(),
        }
    }

    pub fn is_off(&self, day: Weekday) -> bool {
        self.week_offs.contains(day)
    }
}

/// Origine de phase du cycle de 14 jours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationAnchor {
    pub threshold: NaiveDate,
    pub start_shift: ShiftLabel,
}

impl RotationAnchor {
    pub fn new(threshold: NaiveDate, start_shift: ShiftLabel) -> Self {
        Self {
            threshold,
            start_shift,
        }
    }
}

/// Libellé d'une journée du calendrier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayLabel {
    Working(ShiftLabel),
    /// Repos rattaché au poste du dernier jour travaillé du mois.
    Off(ShiftLabel),
}

impl DayLabel {
    /// Compteur (Day/Night) auquel la journée est imputée.
    pub fn unit(self) -> ShiftLabel {
        match self {
            DayLabel::Working(s) | DayLabel::Off(s) => s,
        }
    }

    pub fn is_off(self) -> bool {
        matches!(self, DayLabel::Off(_))
    }
}

impl fmt::Display for DayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayLabel::Working(s) => write!(f, "{s}"),
            DayLabel::Off(s) => write!(f, "Off-({s})"),
        }
    }
}

impl Serialize for DayLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Une ligne du calendrier mensuel d'un employé
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayRecord {
    pub date: NaiveDate,
    #[serde(serialize_with = "serialize_weekday")]
    pub weekday: Weekday,
    pub label: DayLabel,
}

fn serialize_weekday<S: Serializer>(day: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(weekday_name(*day))
}

/// Synthèse Day/Night d'un employé sur un mois
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthSummary {
    pub employee: String,
    pub shift_type: ShiftType,
    pub year: i32,
    pub month: u32,
    pub day_units: u32,
    pub night_units: u32,
    pub total: u32,
}

impl MonthSummary {
    /// `"May 2025"`
    pub fn month_label(&self) -> String {
        month_label(self.year, self.month)
    }
}

pub fn month_label(year: i32, month: u32) -> String {
    match u8::try_from(month).ok().and_then(|m| Month::try_from(m).ok()) {
        Some(m) => format!("{} {year}", m.name()),
        None => format!("{month:02}/{year}"),
    }
}

/// Motif de rotation résolu d'un employé
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    DayOnly,
    DayNight(RotationAnchor),
}

impl Pattern {
    pub fn anchor(&self) -> Option<&RotationAnchor> {
        match self {
            Pattern::DayOnly => None,
            Pattern::DayNight(anchor) => Some(anchor),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub employee: Employee,
    pub pattern: Pattern,
}

/// Table validée des employés et de leurs ancres (voir `Roster::new`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    pub(crate) entries: Vec<RosterEntry>,
}

impl Roster {
    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find_by_name<'a>(&'a self, name: &str) -> Option<&'a RosterEntry> {
        self.entries.iter().find(|e| e.employee.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.employee.name.as_str())
    }
}
