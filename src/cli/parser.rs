use crate::export::{ExportFormat, HeaderLanguage};
use clap::{Parser, Subcommand};

/// Command-line interface definition for rAttendance
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "Turn time-clock punch records into a per-person attendance summary",
    long_about = None
)]
pub struct Cli {
    /// Use this configuration file instead of the default one
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Only print warnings and errors
    #[arg(global = true, long, short = 'q')]
    pub quiet: bool,

    /// Defaults to `report` with the configured paths
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the attendance summary (the default command)
    Report {
        #[arg(long, value_name = "FILE", help = "Punch-log CSV export")]
        punches: Option<String>,

        #[arg(long, value_name = "FILE", help = "Work schedule CSV (one date per row)")]
        schedule: Option<String>,

        #[arg(long, short = 'o', value_name = "FILE", help = "Summary file to (re)write")]
        output: Option<String>,

        #[arg(long, value_enum, help = "Summary file format")]
        format: Option<ExportFormat>,

        #[arg(long, value_enum, help = "Header language of the summary")]
        lang: Option<HeaderLanguage>,

        #[arg(long = "print", help = "Also print the summary table")]
        print: bool,
    },

    /// Show or initialize the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "init", help = "Write a configuration file with default values")]
        init: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long, short = 'f', requires = "init", help = "Overwrite an existing file")]
        force: bool,
    },
}
