use crate::model::{weekday_name, DayRecord, MonthSummary};
use csv::WriterBuilder;
use std::fs;
use std::path::Path;

/// Export CSV de la synthèse: header `name,shift_type,month,day_units,night_units,total`
pub fn export_summary_csv<P: AsRef<Path>>(path: P, rows: &[MonthSummary]) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record([
        "name",
        "shift_type",
        "month",
        "day_units",
        "night_units",
        "total",
    ])?;
    let mut day = itoa::Buffer::new();
    let mut night = itoa::Buffer::new();
    let mut total = itoa::Buffer::new();
    for r in rows {
        let shift_type = r.shift_type.to_string();
        let month = r.month_label();
        w.write_record([
            r.employee.as_str(),
            shift_type.as_str(),
            month.as_str(),
            day.format(r.day_units),
            night.format(r.night_units),
            total.format(r.total),
        ])?;
    }
    w.flush()?;
    Ok(())
}

/// Export JSON de la synthèse (jolie mise en forme)
pub fn export_summary_json<P: AsRef<Path>>(path: P, rows: &[MonthSummary]) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(rows)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV d'un calendrier: header `date,weekday,shift`
pub fn export_calendar_csv<P: AsRef<Path>>(path: P, records: &[DayRecord]) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["date", "weekday", "shift"])?;
    for rec in records {
        let date = rec.date.format("%Y-%m-%d").to_string();
        let label = rec.label.to_string();
        w.write_record([date.as_str(), weekday_name(rec.weekday), label.as_str()])?;
    }
    w.flush()?;
    Ok(())
}
