use super::sheet::{InputKind, read_first_sheet};
use crate::errors::AppResult;
use crate::models::WorkCalendar;
use crate::ui::messages::{info, warning};
use crate::utils::date::parse_date;
use crate::utils::path::require_file;
use chrono::NaiveDate;
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScheduleImport {
    pub rows: usize,
    pub dropped: usize,
}

/// Read required days from the first column of a header-less CSV.
///
/// Blank or unparseable cells (a header line included) are dropped,
/// duplicates keep their first position.
pub fn read_schedule<R: Read>(reader: R) -> AppResult<(WorkCalendar, ScheduleImport)> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut cells = Vec::new();
    for record in rdr.records() {
        cells.push(record?.get(0).unwrap_or_default().to_string());
    }

    Ok(collect_days(cells))
}

/// Read required days from the first column of the first worksheet.
/// Native date cells and date text are both accepted; empty rows are skipped.
pub fn read_schedule_sheet(path: &Path) -> AppResult<(WorkCalendar, ScheduleImport)> {
    let cells = read_first_sheet(path)?
        .into_iter()
        .filter(|r| r.iter().any(|c| !c.is_empty()))
        .map(|r| r.get(0).unwrap_or_default().to_string());

    Ok(collect_days(cells))
}

fn collect_days<I: IntoIterator<Item = String>>(cells: I) -> (WorkCalendar, ScheduleImport) {
    let mut stats = ScheduleImport::default();
    let mut days: Vec<NaiveDate> = Vec::new();

    for cell in cells {
        stats.rows += 1;
        match parse_date(&cell) {
            Some(day) => days.push(day),
            None => stats.dropped += 1,
        }
    }

    (WorkCalendar::from_days(days), stats)
}

/// Load the schedule, as CSV or as a workbook depending on the extension.
pub fn load_schedule(path: &Path) -> AppResult<WorkCalendar> {
    require_file(path)?;
    let (calendar, stats) = match InputKind::from_path(path) {
        InputKind::Spreadsheet => read_schedule_sheet(path)?,
        InputKind::Csv => read_schedule(File::open(path)?)?,
    };

    info(format!(
        "Work schedule loaded: {} required days ({} rows, {} dropped)",
        calendar.len(),
        stats.rows,
        stats.dropped
    ));
    if calendar.is_empty() {
        warning(format!("No required days found in {}", path.display()));
    }

    Ok(calendar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, day).unwrap()
    }

    #[test]
    fn drops_header_blanks_and_duplicates() {
        let csv = "work date\n2024-05-07\n\n2024/05/06,extra\nnot a date\n2024-05-07 00:00:00\n";
        let (cal, stats) = read_schedule(csv.as_bytes()).unwrap();
        assert_eq!(cal.days(), &[d(7), d(6)]);
        assert_eq!(stats.dropped, 2);
    }

    #[test]
    fn empty_input_gives_empty_calendar() {
        let (cal, stats) = read_schedule("".as_bytes()).unwrap();
        assert!(cal.is_empty());
        assert_eq!(stats, ScheduleImport::default());
    }

    #[test]
    fn workbook_first_column_dates() {
        let path = std::env::temp_dir().join(format!(
            "rattendance_{}_schedule_sheet.xlsx",
            std::process::id()
        ));
        let date_fmt = Format::new().set_num_format("yyyy-mm-dd");

        let mut wb = Workbook::new();
        let ws = wb.add_worksheet();
        ws.write_string(0, 0, "工作日").unwrap();
        ws.write_datetime_with_format(1, 0, &ExcelDateTime::from_ymd(2024, 5, 7).unwrap(), &date_fmt)
            .unwrap();
        ws.write_datetime_with_format(2, 0, &ExcelDateTime::from_ymd(2024, 5, 6).unwrap(), &date_fmt)
            .unwrap();
        ws.write_string(2, 1, "note").unwrap();
        ws.write_string(4, 0, "2024-05-07").unwrap();
        wb.save(&path).unwrap();

        let cal = load_schedule(&path);
        let (_, stats) = read_schedule_sheet(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(cal.unwrap().days(), &[d(7), d(6)]);
        // header dropped, blank row 4 skipped
        assert_eq!(stats, ScheduleImport { rows: 4, dropped: 1 });
    }
}
