use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{ReportLogic, ReportRequest};
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;

/// Handle the `report` subcommand; command-line values win over the config.
pub fn handle(cmd: Option<&Commands>, cfg: &Config) -> AppResult<()> {
    let mut req = ReportRequest::from_config(cfg);

    if let Some(Commands::Report {
        punches,
        schedule,
        output,
        format,
        lang,
        print,
    }) = cmd
    {
        if let Some(p) = punches {
            req.punch_file = expand_tilde(p);
        }
        if let Some(s) = schedule {
            req.schedule_file = expand_tilde(s);
        }
        if let Some(o) = output {
            req.output_file = expand_tilde(o);
        }
        if let Some(f) = format {
            req.format = *f;
        }
        if let Some(l) = lang {
            req.language = *l;
        }
        req.print = *print;
    }

    ReportLogic::run(&req)?;
    Ok(())
}
