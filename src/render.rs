use crate::model::{weekday_name, DayRecord, MonthSummary};

/// Permet de customiser le rendu des tableaux (texte, markdown, etc.).
pub trait TableRenderer {
    fn render_summary(&self, rows: &[MonthSummary]) -> String;
    fn render_calendar(&self, records: &[DayRecord]) -> String;
}

/// Tableau texte aligné, colonnes séparées par ` | `.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextTable;

impl TableRenderer for TextTable {
    fn render_summary(&self, rows: &[MonthSummary]) -> String {
        let body = rows
            .iter()
            .map(|r| {
                vec![
                    r.employee.clone(),
                    r.shift_type.to_string(),
                    r.month_label(),
                    r.day_units.to_string(),
                    r.night_units.to_string(),
                    r.total.to_string(),
                ]
            })
            .collect::<Vec<_>>();
        table(
            &["Name", "Shift Type", "Month", "Day-units", "Night-units", "Total"],
            &body,
        )
    }

    fn render_calendar(&self, records: &[DayRecord]) -> String {
        let body = records
            .iter()
            .map(|r| {
                vec![
                    r.date.format("%Y-%m-%d").to_string(),
                    weekday_name(r.weekday).to_string(),
                    r.label.to_string(),
                ]
            })
            .collect::<Vec<_>>();
        table(&["Date", "Weekday", "Shift"], &body)
    }
}

fn table(header: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, header.iter().copied(), &widths);
    let rule = widths
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join("-+-");
    out.push_str(&rule);
    out.push('\n');
    for row in rows {
        push_line(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line = cells
        .zip(widths)
        .map(|(cell, &w)| format!("{cell:<w$}"))
        .collect::<Vec<_>>()
        .join(" | ");
    out.push_str(line.trim_end());
    out.push('\n');
}
