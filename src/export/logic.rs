// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{HeaderLanguage, get_headers, row_to_strings, summary_rows};
use crate::export::xlsx::export_xlsx;
use crate::export::{ExportFormat, notify_export_success};
use crate::models::Roster;
use crate::ui::messages::{header, info};
use crate::utils::table::{Align, Column, Table};
use std::path::Path;

/// Renders the accumulated counters; reads the roster, never mutates it.
pub struct SummaryWriter;

impl SummaryWriter {
    /// Write the summary file, replacing any existing one.
    pub fn write(
        roster: &Roster,
        format: ExportFormat,
        lang: HeaderLanguage,
        path: &Path,
    ) -> AppResult<()> {
        info(format!(
            "Writing {} summary for {} people: {}",
            format.as_str(),
            roster.len(),
            path.display()
        ));

        let rows = summary_rows(roster);

        match format {
            ExportFormat::Xlsx => export_xlsx(&rows, lang, path)?,
            ExportFormat::Csv => export_csv(&rows, lang, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        notify_export_success(&format.as_str().to_uppercase(), path);
        Ok(())
    }

    /// Console rendering of the same table.
    pub fn render_table(roster: &Roster, lang: HeaderLanguage) -> String {
        let columns = get_headers(lang)
            .iter()
            .enumerate()
            .map(|(i, h)| Column {
                header: h.to_string(),
                align: if i == 0 { Align::Left } else { Align::Right },
            })
            .collect();

        let mut table = Table::new(columns);
        for row in summary_rows(roster) {
            table.add_row(row_to_strings(&row));
        }
        table.render()
    }

    pub fn print_table(roster: &Roster, lang: HeaderLanguage) {
        header("Attendance summary");
        print!("{}", Self::render_table(roster, lang));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Identity;

    fn roster() -> Roster {
        let mut r = Roster::new();
        let a = r.get_or_insert("Alice", Identity::default());
        a.counters.late_arrivals = 1;
        a.counters.absences = 3;
        a.counters.study_hours = 7.75;
        r.get_or_insert("Bob", Identity::default());
        r
    }

    #[test]
    fn table_lists_every_person_in_order() {
        let out = SummaryWriter::render_table(&roster(), HeaderLanguage::En);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("name"));
        assert!(lines[0].ends_with("lab study hours"));
        assert!(lines[2].starts_with("Alice"));
        assert!(lines[2].ends_with("7.75"));
        assert!(lines[3].starts_with("Bob"));
        assert!(lines[3].ends_with("0.00"));
    }

    #[test]
    fn chinese_header() {
        let out = SummaryWriter::render_table(&roster(), HeaderLanguage::Zh);
        assert!(out.lines().next().unwrap().starts_with("姓名"));
    }
}
