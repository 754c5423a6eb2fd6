// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::model::{HeaderLanguage, SummaryRow, get_headers};
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// JSON pretty-printed; keys are the field names regardless of language.
pub(crate) fn export_json(rows: &[SummaryRow], path: &Path) -> AppResult<()> {
    let json_data = serde_json::to_string_pretty(rows)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;
    file.write_all(b"\n")?;
    Ok(())
}

/// CSV with the localized header row.
pub(crate) fn export_csv(rows: &[SummaryRow], lang: HeaderLanguage, path: &Path) -> AppResult<()> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_path(path)?;

    wtr.write_record(get_headers(lang))?;
    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}
