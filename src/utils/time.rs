//! Time utilities: parsing punch times and splitting punch cells.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;
use regex::Regex;

const TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

/// Default separator between punches in one cell: the device export uses
/// a double space, longer runs of whitespace are tolerated.
pub const DEFAULT_PUNCH_SEPARATOR: &str = r"\s{2,}";

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(t, fmt).ok())
}

pub fn parse_required_time(t: &str) -> AppResult<NaiveTime> {
    parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

/// Split a punch cell (`"08:30:00  13:00:00  18:15:00"`) into ordered times.
///
/// Order is kept exactly as recorded; an empty cell is an input error.
pub fn split_punch_cell(cell: &str, separator: &Regex) -> AppResult<Vec<NaiveTime>> {
    let punches = separator
        .split(cell.trim())
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(parse_required_time)
        .collect::<AppResult<Vec<_>>>()?;

    if punches.is_empty() {
        return Err(AppError::InvalidTime(format!("empty punch cell '{}'", cell)));
    }

    Ok(punches)
}

pub fn compile_separator(pattern: &str) -> AppResult<Regex> {
    Regex::new(pattern)
        .map_err(|e| AppError::Config(format!("invalid punch_separator '{}': {}", pattern, e)))
}
