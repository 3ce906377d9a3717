#![forbid(unsafe_code)]
//! Rotation — moteur de roulement Jour/Nuit sur 14 jours (sans BD).
//!
//! - Rotation par ancre (date seuil + poste de départ), division arrondie vers -∞.
//! - Jours de repos rattachés au dernier poste travaillé du mois.
//! - Synthèse mensuelle et calendrier par employé ; rendu et exports en dehors du moteur.

pub mod config;
pub mod io;
pub mod model;
pub mod render;
pub mod rotation;

pub use config::{load_roster, ConfigFile, ConfigSource, RosterConfig};
pub use model::{
    DayLabel, DayRecord, Employee, MonthSummary, Pattern, Roster, RosterEntry, RotationAnchor,
    ShiftLabel, ShiftType, WeekOffs,
};
pub use render::{TableRenderer, TextTable};
pub use rotation::{Engine, RotationError};
