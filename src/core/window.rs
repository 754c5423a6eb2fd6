//! Inclusive time-of-day windows and the presence predicate every rule uses.

use chrono::{NaiveTime, Timelike};
use std::fmt;

const fn secs(h: u32, m: u32, s: u32) -> u32 {
    h * 3600 + m * 60 + s
}

/// `[start, end]`, both ends inclusive, with one-second resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start: u32,
    end: u32,
}

impl TimeWindow {
    pub const fn new(start: (u32, u32, u32), end: (u32, u32, u32)) -> Self {
        Self {
            start: secs(start.0, start.1, start.2),
            end: secs(end.0, end.1, end.2),
        }
    }

    pub fn contains(&self, t: NaiveTime) -> bool {
        let s = t.num_seconds_from_midnight();
        self.start <= s && s <= self.end
    }

    /// True iff at least one punch falls inside the window.
    pub fn any(&self, punches: &[NaiveTime]) -> bool {
        punches.iter().any(|t| self.contains(*t))
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hms = |s: u32| format!("{:02}:{:02}:{:02}", s / 3600, s / 60 % 60, s % 60);
        write!(f, "[{}, {}]", hms(self.start), hms(self.end))
    }
}

pub const MORNING_ON_TIME: TimeWindow = TimeWindow::new((7, 0, 0), (9, 0, 0));
pub const MORNING_LATE: TimeWindow = TimeWindow::new((9, 0, 0), (10, 0, 0));

pub const MIDDAY_ON_TIME: TimeWindow = TimeWindow::new((12, 50, 0), (13, 30, 0));
pub const MIDDAY_LATE: TimeWindow = TimeWindow::new((13, 30, 0), (14, 30, 0));

pub const EVENING_ON_TIME: TimeWindow = TimeWindow::new((18, 0, 0), (23, 59, 59));
pub const EVENING_EARLY: TimeWindow = TimeWindow::new((17, 0, 0), (18, 0, 0));

/// Presence windows deciding whether the lunch allowance is deducted.
pub const STUDY_MORNING_PRESENCE: TimeWindow = TimeWindow::new((7, 0, 0), (11, 0, 0));
pub const STUDY_AFTERNOON_PRESENCE: TimeWindow = TimeWindow::new((12, 50, 0), (23, 59, 59));
