#![forbid(unsafe_code)]
use rotation::{
    load_roster, model::Pattern, ConfigFile, ConfigSource, RosterConfig, RotationError,
};
use std::fs;
use tempfile::tempdir;

#[test]
fn save_and_load_config_roundtrip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("roster.json");
    let file = ConfigFile::open(&path);
    file.save(&RosterConfig::builtin()).unwrap();

    let loaded = file.load().unwrap();
    assert_eq!(loaded, RosterConfig::builtin());

    let roster = load_roster(&path).unwrap();
    assert_eq!(roster.len(), 5);
    assert_eq!(roster.to_config(), RosterConfig::builtin());
}

#[test]
fn parses_display_shift_types_and_weekday_names() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("roster.json");
    fs::write(
        &path,
        r#"{
            "employees": [
                {"name": "Asha", "shift_type": "Day/Night Shift", "week_offs": ["Sunday"]},
                {"name": "Bala", "shift_type": "Day Shift Only", "week_offs": ["sat", "Sun"]}
            ],
            "anchors": {
                "Asha": {"threshold": "2025-01-06", "start_shift": "Day"}
            }
        }"#,
    )
    .unwrap();

    let roster = load_roster(&path).unwrap();
    let asha = roster.find_by_name("Asha").unwrap();
    assert!(matches!(asha.pattern, Pattern::DayNight(_)));
    let bala = roster.find_by_name("Bala").unwrap();
    assert_eq!(bala.pattern, Pattern::DayOnly);
    assert_eq!(bala.employee.week_offs.iter().count(), 2);
}

#[test]
fn day_night_without_anchor_is_rejected() {
    let mut config = RosterConfig::builtin();
    config.anchors.remove("Jalapathy");
    match config.into_roster() {
        Err(RotationError::MissingAnchor(name)) => assert_eq!(name, "Jalapathy"),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn orphan_and_duplicate_entries_are_rejected() {
    let mut config = RosterConfig::builtin();
    let anchor = config.anchors["Sundar"];
    config.anchors.insert("Ghost".into(), anchor);
    assert!(matches!(
        config.into_roster(),
        Err(RotationError::OrphanAnchor(name)) if name == "Ghost"
    ));

    let mut config = RosterConfig::builtin();
    let dup = config.employees[0].clone();
    config.employees.push(dup);
    assert!(matches!(
        config.into_roster(),
        Err(RotationError::DuplicateEmployee(name)) if name == "Periyasamy"
    ));
}

#[test]
fn anchor_on_day_only_employee_is_ignored() {
    let mut config = RosterConfig::builtin();
    let anchor = config.anchors["Sundar"];
    config.anchors.insert("Durgeshini".into(), anchor);
    let roster = config.into_roster().unwrap();
    assert_eq!(
        roster.find_by_name("Durgeshini").unwrap().pattern,
        Pattern::DayOnly
    );
}

#[test]
fn missing_file_reports_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let err = load_roster(&path).unwrap_err();
    assert!(format!("{err:#}").contains("absent.json"));
}
