use crate::model::{
    Employee, Pattern, Roster, RosterEntry, RotationAnchor, ShiftLabel, ShiftType,
};
use crate::rotation::RotationError;
use anyhow::Context;
use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Configuration de démarrage : employés + ancres de rotation par nom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RosterConfig {
    pub employees: Vec<Employee>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub anchors: BTreeMap<String, RotationAnchor>,
}

impl RosterConfig {
    /// Roster livré par défaut.
    pub fn builtin() -> Self {
        use Weekday::*;
        let employees = vec![
            Employee::new("Periyasamy", ShiftType::DayOnly, &[Tue, Wed]),
            Employee::new("Sundar", ShiftType::DayNight, &[Mon, Tue]),
            Employee::new("Jalapathy", ShiftType::DayNight, &[Thu, Fri]),
            Employee::new("Samyugtha", ShiftType::DayNight, &[Mon, Tue]),
            Employee::new("Durgeshini", ShiftType::DayOnly, &[Fri]),
        ];
        let anchor = |y, m, d, shift| {
            NaiveDate::from_ymd_opt(y, m, d).map(|date| RotationAnchor::new(date, shift))
        };
        let anchors = [
            ("Sundar", anchor(2025, 5, 28, ShiftLabel::Night)),
            ("Samyugtha", anchor(2025, 5, 28, ShiftLabel::Day)),
            ("Jalapathy", anchor(2025, 5, 31, ShiftLabel::Day)),
        ]
        .into_iter()
        .filter_map(|(name, a)| a.map(|a| (name.to_string(), a)))
        .collect();
        Self { employees, anchors }
    }

    /// Valide la configuration et résout les ancres.
    pub fn into_roster(self) -> Result<Roster, RotationError> {
        Roster::new(self.employees, self.anchors)
    }
}

impl Roster {
    pub fn new(
        employees: Vec<Employee>,
        mut anchors: BTreeMap<String, RotationAnchor>,
    ) -> Result<Self, RotationError> {
        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(employees.len());
        for employee in employees {
            if employee.name.trim().is_empty() {
                return Err(RotationError::EmptyName);
            }
            if !seen.insert(employee.name.clone()) {
                return Err(RotationError::DuplicateEmployee(employee.name));
            }
            let anchor = anchors.remove(&employee.name);
            let pattern = match (employee.shift_type, anchor) {
                (ShiftType::DayNight, Some(a)) => Pattern::DayNight(a),
                (ShiftType::DayNight, None) => {
                    return Err(RotationError::MissingAnchor(employee.name))
                }
                (ShiftType::DayOnly, Some(_)) => {
                    #[cfg(feature = "logging")]
                    tracing::warn!(employee = %employee.name, "anchor ignored for day-only employee");
                    Pattern::DayOnly
                }
                (ShiftType::DayOnly, None) => Pattern::DayOnly,
            };
            entries.push(RosterEntry { employee, pattern });
        }
        if let Some(name) = anchors.into_keys().next() {
            return Err(RotationError::OrphanAnchor(name));
        }
        #[cfg(feature = "logging")]
        tracing::debug!(employees = entries.len(), "roster ready");
        Ok(Self { entries })
    }

    /// Reconstruit la configuration équivalente.
    pub fn to_config(&self) -> RosterConfig {
        RosterConfig {
            employees: self.entries.iter().map(|e| e.employee.clone()).collect(),
            anchors: self
                .entries
                .iter()
                .filter_map(|e| e.pattern.anchor().map(|a| (e.employee.name.clone(), *a)))
                .collect(),
        }
    }
}

pub trait ConfigSource {
    /// Charge la configuration depuis un support.
    fn load(&self) -> anyhow::Result<RosterConfig>;
    /// Sauvegarde de manière atomique.
    fn save(&self, config: &RosterConfig) -> anyhow::Result<()>;
}

pub struct ConfigFile {
    path: PathBuf,
}

impl ConfigFile {
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigSource for ConfigFile {
    fn load(&self) -> anyhow::Result<RosterConfig> {
        let data =
            fs::read(&self.path).with_context(|| format!("reading {}", self.path.display()))?;
        let config: RosterConfig = serde_json::from_slice(&data)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(config)
    }

    fn save(&self, config: &RosterConfig) -> anyhow::Result<()> {
        let json = serde_json::to_vec_pretty(config)?;
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).context("creating temp file")?;
        tmp.write_all(&json)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).context("atomic rename")?;
        Ok(())
    }
}

/// Charge et valide un roster depuis un fichier JSON.
pub fn load_roster<P: AsRef<Path>>(path: P) -> anyhow::Result<Roster> {
    let file = ConfigFile::open(path);
    let roster = file
        .load()?
        .into_roster()
        .with_context(|| format!("invalid roster in {}", file.path().display()))?;
    Ok(roster)
}
