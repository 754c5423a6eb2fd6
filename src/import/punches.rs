use super::sheet::{InputKind, read_first_sheet};
use crate::errors::{AppError, AppResult};
use crate::models::{Identity, Roster};
use crate::ui::messages::{info, warning};
use crate::utils::date::{iso, parse_date};
use crate::utils::path::require_file;
use crate::utils::time::split_punch_cell;
use csv::{ReaderBuilder, StringRecord, Trim};
use regex::Regex;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One row of the device export. Chinese headers are accepted as aliases.
#[derive(Debug, Deserialize)]
struct PunchRow {
    #[serde(default, alias = "设备工号")]
    device_id: Option<String>,
    #[serde(default, alias = "员工工号")]
    employee_id: Option<String>,
    #[serde(alias = "姓名")]
    name: String,
    #[serde(default, alias = "部门")]
    department: Option<String>,
    #[serde(alias = "考勤日期")]
    date: String,
    #[serde(alias = "考勤时间")]
    times: String,
}

const REQUIRED_COLUMNS: [(&str, &str); 3] = [
    ("name", "姓名"),
    ("date", "考勤日期"),
    ("times", "考勤时间"),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PunchImport {
    pub rows: usize,
    pub replaced: usize,
}

fn check_headers(headers: &StringRecord, source: &str) -> AppResult<()> {
    for (en, zh) in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == en || h == zh) {
            return Err(AppError::MissingColumn {
                file: source.to_string(),
                column: en.to_string(),
            });
        }
    }
    Ok(())
}

/// Read punch rows from any CSV source into `roster`.
///
/// People are created on first sighting of their name. A second row for
/// the same (name, date) replaces the first.
pub fn read_punches<R: Read>(
    reader: R,
    source: &str,
    separator: &Regex,
    roster: &mut Roster,
) -> AppResult<PunchImport> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let headers = rdr.headers()?.clone();
    let records = rdr.into_records().map(|r| r.map_err(AppError::from));

    ingest_rows(&headers, records, source, separator, roster)
}

/// Read punch rows from the first worksheet of a workbook. The first row
/// holds the headers; native date cells are accepted in the date column.
pub fn read_punch_sheet(path: &Path, separator: &Regex, roster: &mut Roster) -> AppResult<PunchImport> {
    let source = path.display().to_string();
    let mut rows = read_first_sheet(path)?.into_iter();
    let headers = rows.next().unwrap_or_default();
    let records = rows
        .filter(|r| r.iter().any(|c| !c.is_empty()))
        .map(Ok);

    ingest_rows(&headers, records, &source, separator, roster)
}

fn ingest_rows<I>(
    headers: &StringRecord,
    records: I,
    source: &str,
    separator: &Regex,
    roster: &mut Roster,
) -> AppResult<PunchImport>
where
    I: IntoIterator<Item = AppResult<StringRecord>>,
{
    check_headers(headers, source)?;

    let mut stats = PunchImport::default();

    for (idx, record) in records.into_iter().enumerate() {
        let row: PunchRow = record?.deserialize(Some(headers))?;
        // header is line 1
        let line = idx + 2;

        let day = parse_date(&row.date).ok_or_else(|| {
            AppError::InvalidDate(format!("'{}' ({} line {})", row.date, source, line))
        })?;

        let punches = split_punch_cell(&row.times, separator).map_err(|e| match e {
            AppError::InvalidTime(msg) => {
                AppError::InvalidTime(format!("{} ({} line {})", msg, source, line))
            }
            other => other,
        })?;

        let identity = Identity {
            device_id: row.device_id,
            employee_id: row.employee_id,
            department: row.department,
        };

        let person = roster.get_or_insert(&row.name, identity);
        if person.punches.insert(day, punches).is_some() {
            stats.replaced += 1;
            warning(format!(
                "Duplicate record for {} on {} ({} line {}): keeping the later row",
                row.name,
                iso(day),
                source,
                line
            ));
        }

        stats.rows += 1;
    }

    Ok(stats)
}

/// Load the punch log, as CSV or as a workbook depending on the extension.
pub fn load_punches(path: &Path, separator: &Regex, roster: &mut Roster) -> AppResult<PunchImport> {
    require_file(path)?;

    let stats = match InputKind::from_path(path) {
        InputKind::Spreadsheet => read_punch_sheet(path, separator, roster)?,
        InputKind::Csv => {
            let file = File::open(path)?;
            read_punches(file, &path.display().to_string(), separator, roster)?
        }
    };

    info(format!(
        "Punch data loaded: {} rows, {} people, {} day records",
        stats.rows,
        roster.len(),
        roster.record_count()
    ));

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::time::{DEFAULT_PUNCH_SEPARATOR, compile_separator, parse_time};
    use chrono::NaiveDate;
    use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
    use std::path::PathBuf;

    fn load(csv: &str) -> AppResult<(Roster, PunchImport)> {
        let sep = compile_separator(DEFAULT_PUNCH_SEPARATOR)?;
        let mut roster = Roster::new();
        let stats = read_punches(csv.as_bytes(), "test.csv", &sep, &mut roster)?;
        Ok((roster, stats))
    }

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, day).unwrap()
    }

    #[test]
    fn english_headers() {
        let csv = "device_id,employee_id,name,department,date,times\n\
                   1,1001,Alice,Lab,2024-05-06,08:30:00  13:00:00  18:15:00\n\
                   2,1002,Bob,Lab,2024/05/06,09:30:00\n\
                   1,1001,Alice,Lab,2024-05-07,07:55:00  18:01:00\n";
        let (roster, stats) = load(csv).unwrap();

        assert_eq!(stats.rows, 3);
        assert_eq!(roster.len(), 2);

        let alice = roster.find("Alice").unwrap();
        assert_eq!(alice.identity.employee_id.as_deref(), Some("1001"));
        assert_eq!(alice.identity.department.as_deref(), Some("Lab"));
        assert_eq!(alice.punches.len(), 2);
        assert_eq!(
            alice.punches.get(d(6)).map(<[_]>::len),
            Some(3),
        );

        let bob = roster.find("Bob").unwrap();
        assert_eq!(bob.punches.get(d(6)), Some(&[parse_time("09:30:00").unwrap()][..]));
    }

    #[test]
    fn chinese_headers_and_optional_columns() {
        let csv = "姓名,考勤日期,考勤时间\n张三,2024-05-06 00:00:00,08:00:00  18:00:00\n";
        let (roster, _) = load(csv).unwrap();
        let p = roster.find("张三").unwrap();
        assert!(p.punches.get(d(6)).is_some());
        assert_eq!(p.identity, Identity::default());
    }

    #[test]
    fn later_row_replaces_same_day() {
        let csv = "name,date,times\nAlice,2024-05-06,08:00:00\nAlice,2024-05-06,09:00:00  18:00:00\n";
        let (roster, stats) = load(csv).unwrap();
        assert_eq!(stats.replaced, 1);
        assert_eq!(
            roster.find("Alice").unwrap().punches.get(d(6)).map(<[_]>::len),
            Some(2)
        );
    }

    #[test]
    fn missing_required_column() {
        let err = load("name,date\nAlice,2024-05-06\n").unwrap_err();
        assert!(matches!(err, AppError::MissingColumn { ref column, .. } if column == "times"));
    }

    #[test]
    fn bad_date_is_fatal() {
        let err = load("name,date,times\nAlice,06/05/2024,08:00:00\n").unwrap_err();
        assert!(matches!(err, AppError::InvalidDate(ref m) if m.contains("line 2")));
    }

    #[test]
    fn bad_time_is_fatal() {
        let err = load("name,date,times\nAlice,2024-05-06,08:00:00  25:61:00\n").unwrap_err();
        assert!(matches!(err, AppError::InvalidTime(_)));

        let err = load("name,date,times\nAlice,2024-05-06,\n").unwrap_err();
        assert!(matches!(err, AppError::InvalidTime(_)));
    }

    fn sheet_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("rattendance_{}_{}.xlsx", std::process::id(), name))
    }

    #[test]
    fn workbook_with_native_date_cells() {
        let path = sheet_path("punch_sheet");
        let date_fmt = Format::new().set_num_format("yyyy-mm-dd");

        let mut wb = Workbook::new();
        let ws = wb.add_worksheet();
        for (col, h) in ["员工工号", "姓名", "部门", "考勤日期", "考勤时间"].iter().enumerate() {
            ws.write_string(0, col as u16, *h).unwrap();
        }
        ws.write_number(1, 0, 1001).unwrap();
        ws.write_string(1, 1, "张三").unwrap();
        ws.write_string(1, 2, "Lab").unwrap();
        ws.write_datetime_with_format(1, 3, &ExcelDateTime::from_ymd(2024, 5, 6).unwrap(), &date_fmt)
            .unwrap();
        ws.write_string(1, 4, "08:30:00  13:00:00  18:15:00").unwrap();
        // date typed as text still goes through the same parser
        ws.write_number(2, 0, 1001).unwrap();
        ws.write_string(2, 1, "张三").unwrap();
        ws.write_string(2, 3, "2024/05/07").unwrap();
        ws.write_string(2, 4, "07:55:00  18:01:00").unwrap();
        wb.save(&path).unwrap();

        let sep = compile_separator(DEFAULT_PUNCH_SEPARATOR).unwrap();
        let mut roster = Roster::new();
        let stats = load_punches(&path, &sep, &mut roster).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(stats.rows, 2);
        let p = roster.find("张三").unwrap();
        assert_eq!(p.identity.employee_id.as_deref(), Some("1001"));
        assert_eq!(p.identity.department.as_deref(), Some("Lab"));
        assert_eq!(p.punches.get(d(6)).map(<[_]>::len), Some(3));
        assert_eq!(
            p.punches.get(d(7)),
            Some(&[parse_time("07:55:00").unwrap(), parse_time("18:01:00").unwrap()][..])
        );
    }

    #[test]
    fn workbook_missing_column_is_fatal() {
        let path = sheet_path("punch_sheet_missing");
        let mut wb = Workbook::new();
        let ws = wb.add_worksheet();
        ws.write_string(0, 0, "name").unwrap();
        ws.write_string(0, 1, "date").unwrap();
        ws.write_string(1, 0, "Alice").unwrap();
        ws.write_string(1, 1, "2024-05-06").unwrap();
        wb.save(&path).unwrap();

        let sep = compile_separator(DEFAULT_PUNCH_SEPARATOR).unwrap();
        let err = load_punches(&path, &sep, &mut Roster::new()).unwrap_err();
        let _ = std::fs::remove_file(&path);

        assert!(matches!(err, AppError::MissingColumn { ref column, .. } if column == "times"));
    }
}
