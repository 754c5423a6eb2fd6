//! Spreadsheet (`.xlsx`, `.xls`, `.ods`) access: the first worksheet as rows
//! of text cells, so both loaders share the CSV parsing pipeline.

use crate::errors::{AppError, AppResult};
use crate::utils::date::excel_serial_to_text;
use calamine::{Data, Reader, open_workbook_auto};
use csv::StringRecord;
use std::path::Path;

const SPREADSHEET_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Input container, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Csv,
    Spreadsheet,
}

impl InputKind {
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        if SPREADSHEET_EXTENSIONS.contains(&ext.as_str()) {
            InputKind::Spreadsheet
        } else {
            InputKind::Csv
        }
    }
}

/// Text of one cell. Native date/time cells become `YYYY-MM-DD`,
/// `HH:MM:SS` or both; integral numbers lose their `.0`.
pub(crate) fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        Data::DateTime(dt) => excel_serial_to_text(dt.as_f64()),
        Data::DateTimeIso(s) => s.replace('T', " "),
        other => other.to_string(),
    }
}

/// All rows of the first worksheet, as text.
pub(crate) fn read_first_sheet(path: &Path) -> AppResult<Vec<StringRecord>> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::NoWorksheet(path.to_path_buf()))??;

    Ok(range
        .rows()
        .map(|row| row.iter().map(cell_text).collect::<StringRecord>())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_follows_extension() {
        assert_eq!(InputKind::from_path(Path::new("a.xlsx")), InputKind::Spreadsheet);
        assert_eq!(InputKind::from_path(Path::new("考勤.XLS")), InputKind::Spreadsheet);
        assert_eq!(InputKind::from_path(Path::new("a.csv")), InputKind::Csv);
        assert_eq!(InputKind::from_path(Path::new("punches")), InputKind::Csv);
    }

    #[test]
    fn cell_texts() {
        assert_eq!(cell_text(&Data::Empty), "");
        assert_eq!(cell_text(&Data::String(" Alice ".into())), "Alice");
        assert_eq!(cell_text(&Data::Float(1001.0)), "1001");
        assert_eq!(cell_text(&Data::Int(7)), "7");
        assert_eq!(
            cell_text(&Data::DateTimeIso("2024-05-06T08:30:00".into())),
            "2024-05-06 08:30:00"
        );
    }
}
