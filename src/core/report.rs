use crate::config::Config;
use crate::core::engine::AttendanceEngine;
use crate::core::window;
use crate::errors::AppResult;
use crate::export::{ExportFormat, HeaderLanguage, SummaryWriter};
use crate::import::{load_punches, load_schedule};
use crate::models::{Roster, RunContext};
use crate::ui::messages::info;
use crate::utils::time::compile_separator;
use std::path::PathBuf;

/// Fully resolved inputs of one report run.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRequest {
    pub punch_file: PathBuf,
    pub schedule_file: PathBuf,
    pub output_file: PathBuf,
    pub format: ExportFormat,
    pub language: HeaderLanguage,
    pub separator: String,
    pub print: bool,
}

impl ReportRequest {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            punch_file: cfg.punch_path(),
            schedule_file: cfg.schedule_path(),
            output_file: cfg.output_path(),
            format: cfg.output_format,
            language: cfg.header_language,
            separator: cfg.punch_separator.clone(),
            print: false,
        }
    }
}

pub struct ReportLogic;

impl ReportLogic {
    /// Load both inputs, classify every required day, write the summary.
    ///
    /// Nothing is written unless loading and classification succeed.
    pub fn run(req: &ReportRequest) -> AppResult<RunContext> {
        let separator = compile_separator(&req.separator)?;

        let mut roster = Roster::new();
        load_punches(&req.punch_file, &separator, &mut roster)?;
        let calendar = load_schedule(&req.schedule_file)?;

        let mut ctx = RunContext { roster, calendar };

        info(format!(
            "Windows: morning {} (late {}), midday {} (late {}), evening {} (early {})",
            window::MORNING_ON_TIME,
            window::MORNING_LATE,
            window::MIDDAY_ON_TIME,
            window::MIDDAY_LATE,
            window::EVENING_ON_TIME,
            window::EVENING_EARLY
        ));

        let stats = AttendanceEngine::run(&mut ctx);
        info(format!(
            "Attendance evaluated: {} days x {} people ({} with punches, {} missing)",
            stats.required_days, stats.people, stats.evaluated, stats.missing
        ));

        SummaryWriter::write(&ctx.roster, req.format, req.language, &req.output_file)?;

        if req.print {
            SummaryWriter::print_table(&ctx.roster, req.language);
        }

        Ok(ctx)
    }
}
