// src/export/model.rs

use crate::models::{Person, Roster};
use crate::utils::formatting::hours2readable;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Language of the summary header row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderLanguage {
    #[default]
    En,
    Zh,
}

/// One output row per person.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SummaryRow {
    pub name: String,
    pub late_arrivals: u32,
    pub early_departures: u32,
    pub missed_midday: u32,
    pub absences: u32,
    pub study_hours: f64,
}

impl From<&Person> for SummaryRow {
    fn from(p: &Person) -> Self {
        let c = &p.counters;
        Self {
            name: p.name.clone(),
            late_arrivals: c.late_arrivals,
            early_departures: c.early_departures,
            missed_midday: c.missed_midday,
            absences: c.absences,
            study_hours: c.study_hours,
        }
    }
}

/// Rows in roster (first-sighting) order.
pub fn summary_rows(roster: &Roster) -> Vec<SummaryRow> {
    roster.iter().map(SummaryRow::from).collect()
}

/// Header for CSV / XLSX / console output.
pub(crate) fn get_headers(lang: HeaderLanguage) -> [&'static str; 6] {
    match lang {
        HeaderLanguage::En => [
            "name",
            "late arrivals",
            "early departures",
            "no midday punch",
            "absences",
            "lab study hours",
        ],
        HeaderLanguage::Zh => [
            "姓名",
            "迟到次数",
            "早退次数",
            "中午未打卡次数",
            "缺勤次数",
            "在实验室学习时长",
        ],
    }
}

/// Row rendered as strings (console table).
pub(crate) fn row_to_strings(r: &SummaryRow) -> Vec<String> {
    vec![
        r.name.clone(),
        r.late_arrivals.to_string(),
        r.early_departures.to_string(),
        r.missed_midday.to_string(),
        r.absences.to_string(),
        hours2readable(r.study_hours),
    ]
}
