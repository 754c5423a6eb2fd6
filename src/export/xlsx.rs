// src/export/xlsx.rs

use crate::errors::AppResult;
use crate::export::model::{HeaderLanguage, SummaryRow, get_headers};
use crate::utils::formatting::hours2readable;
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// XLSX summary: centred, wrapped header and one row per person.
pub(crate) fn export_xlsx(rows: &[SummaryRow], lang: HeaderLanguage, path: &Path) -> AppResult<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(match lang {
        HeaderLanguage::En => "Summary",
        HeaderLanguage::Zh => "统计结果",
    })?;

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers(lang);

    let header_format = Format::new()
        .set_bold()
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_text_wrap()
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, *header, &header_format)?;
    }

    worksheet.set_freeze_panes(1, 0)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let text_format = Format::new().set_border(FormatBorder::Thin);
    let count_format = Format::new()
        .set_align(FormatAlign::Right)
        .set_border(FormatBorder::Thin);
    let hours_format = Format::new()
        .set_num_format("0.00")
        .set_align(FormatAlign::Right)
        .set_border(FormatBorder::Thin);

    // ---------------------------
    // Rows
    // ---------------------------
    for (i, r) in rows.iter().enumerate() {
        let row = (i + 1) as u32;

        worksheet.write_with_format(row, 0, r.name.as_str(), &text_format)?;
        col_widths[0] = col_widths[0].max(UnicodeWidthStr::width(r.name.as_str()));

        let counts = [r.late_arrivals, r.early_departures, r.missed_midday, r.absences];
        for (j, n) in counts.iter().enumerate() {
            worksheet.write_number_with_format(row, (j + 1) as u16, *n, &count_format)?;
        }

        worksheet.write_number_with_format(row, 5, r.study_hours, &hours_format)?;
        col_widths[5] = col_widths[5].max(hours2readable(r.study_hours).len());
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet.set_column_width(c as u16, *w as f64 + 2.0)?;
    }

    workbook.save(path)?;
    Ok(())
}
