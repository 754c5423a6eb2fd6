//! Console log lines for a run.
//!
//! Every line carries a local timestamp and a level tag:
//! `2024-06-05 22:02:00 - INFO - Punch data loaded`.

use ansi_term::{Colour, Style};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

/// Suppress `info` and `success` lines (warnings and errors still print).
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn tag(self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Success => "OK",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
        }
    }

    fn style(self) -> Style {
        match self {
            Level::Info => Colour::Blue.bold(),
            Level::Success => Colour::Green.bold(),
            Level::Warning => Colour::Yellow.bold(),
            Level::Error => Colour::Red.bold(),
        }
    }
}

fn line<T: fmt::Display>(level: Level, msg: T) -> String {
    let stamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    format!("{} - {} - {}", stamp, level.style().paint(level.tag()), msg)
}

pub fn info<T: fmt::Display>(msg: T) {
    if !is_quiet() {
        println!("{}", line(Level::Info, msg));
    }
}

pub fn success<T: fmt::Display>(msg: T) {
    if !is_quiet() {
        println!("{}", line(Level::Success, msg));
    }
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(Level::Warning, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(Level::Error, msg));
}

/// Section header, printed before a rendered table.
pub fn header<T: fmt::Display>(msg: T) {
    if !is_quiet() {
        println!("{}", Colour::Blue.bold().paint(format!("===== {} =====", msg)));
    }
}
