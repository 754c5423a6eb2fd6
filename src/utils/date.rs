use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d"];
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse a calendar day from the forms spreadsheet exports produce.
/// A date-time value keeps only its date part.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                .map(|dt| dt.date())
        })
}

/// ISO form used as the day key everywhere (`YYYY-MM-DD`).
pub fn iso(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// Render an Excel serial (days since 1899-12-30, fraction = time of day)
/// as text the date/time parsers accept.
///
/// Pure times (serial below 1) become `HH:MM:SS`, midnight dates become
/// `YYYY-MM-DD`, anything else `YYYY-MM-DD HH:MM:SS`.
pub fn excel_serial_to_text(serial: f64) -> String {
    let total = (serial * 86_400.0).round() as i64;
    let days = total.div_euclid(86_400);
    let secs = total.rem_euclid(86_400) as u32;

    let time = NaiveTime::from_num_seconds_from_midnight_opt(secs, 0).unwrap_or(NaiveTime::MIN);
    if days == 0 {
        return time.format("%H:%M:%S").to_string();
    }

    let date = NaiveDate::from_ymd_opt(1899, 12, 30)
        .and_then(|epoch| epoch.checked_add_signed(Duration::days(days)));

    match date {
        Some(d) if secs == 0 => iso(d),
        Some(d) => d.and_time(time).format("%Y-%m-%d %H:%M:%S").to_string(),
        None => serial.to_string(),
    }
}
