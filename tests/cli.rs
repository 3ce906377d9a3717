#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn cli() -> Command {
    Command::cargo_bin("rotation-cli").unwrap()
}

#[test]
fn summary_prints_every_employee() {
    cli()
        .args(["summary", "--year", "2025", "--month", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sundar     | Day/Night Shift | May 2025 | 14"))
        .stdout(predicate::str::contains("Durgeshini"));
}

#[test]
fn summary_rejects_month_out_of_range() {
    cli()
        .args(["summary", "--year", "2025", "--month", "13"])
        .assert()
        .failure();
}

#[test]
fn calendar_with_empty_selection_prints_nothing() {
    cli()
        .args(["calendar", "--employee", "", "--year", "2025", "--month", "5"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn calendar_unknown_employee_fails() {
    cli()
        .args(["calendar", "--employee", "Nobody", "--month", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown employee: Nobody"));
}

#[test]
fn shift_lookup_before_threshold() {
    cli()
        .args(["shift", "--employee", "Sundar", "--date", "2025-05-11"])
        .assert()
        .success()
        .stdout("Night\n");
}

#[test]
fn init_then_calendar_export_from_config() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("roster.json");
    let out = dir.path().join("cal.csv");

    cli()
        .args(["init", "--out"])
        .arg(&config)
        .assert()
        .success();

    cli()
        .arg("--config")
        .arg(&config)
        .args(["calendar", "--employee", "Sundar", "--year", "2025", "--month", "5"])
        .arg("--out-csv")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-05-05 | Monday    | Off-(Night)"));

    let csv = fs::read_to_string(&out).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("date,weekday,shift"));
    assert_eq!(lines.next(), Some("2025-05-01,Thursday,Night"));
    assert_eq!(csv.lines().count(), 32);
}

#[test]
fn summary_csv_export() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("summary.csv");
    cli()
        .args(["summary", "--year", "2025", "--month", "2", "--out-csv"])
        .arg(&out)
        .assert()
        .success();
    let csv = fs::read_to_string(&out).unwrap();
    assert!(csv.starts_with("name,shift_type,month,day_units,night_units,total\n"));
    assert!(csv.contains("Periyasamy,Day Shift Only,February 2025,28,0,28"));
    assert!(csv.contains("Sundar,Day/Night Shift,February 2025,14,14,28"));
}
