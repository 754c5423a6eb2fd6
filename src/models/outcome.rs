//! Per-rule outcomes of a classified day.
//!
//! Each rule yields exactly one variant; the counter changes live in
//! `ResultCounters::apply`.

use serde::Serialize;

/// 07:00-10:00 arrival check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MorningOutcome {
    OnTime,
    Late,
    Absent,
}

/// 12:50-14:30 midday check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MiddayOutcome {
    OnTime,
    Late,
    Missed,
}

/// 17:00-23:59:59 departure check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EveningOutcome {
    OnTime,
    EarlyDeparture,
    Absent,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayOutcome {
    pub morning: MorningOutcome,
    pub midday: MiddayOutcome,
    pub evening: EveningOutcome,
    /// `None` when fewer than two punches were recorded.
    pub study_hours: Option<f64>,
}
