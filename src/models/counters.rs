use crate::models::outcome::{DayOutcome, EveningOutcome, MiddayOutcome, MorningOutcome};
use crate::utils::round2;
use serde::Serialize;

/// Running attendance counters for one person.
///
/// Counters only ever grow; `study_hours` is kept rounded to two decimals
/// after every addition.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultCounters {
    pub late_arrivals: u32,
    pub early_departures: u32,
    pub missed_midday: u32,
    pub absences: u32,
    pub study_hours: f64,
}

impl ResultCounters {
    /// Penalty for a required day with no punch record at all.
    pub const MISSING_DAY_ABSENCES: u32 = 2;
    pub const MISSING_DAY_MIDDAY: u32 = 1;

    /// Fold one classified day into the counters.
    pub fn apply(&mut self, day: &DayOutcome) {
        match day.morning {
            MorningOutcome::OnTime => {}
            MorningOutcome::Late => self.late_arrivals += 1,
            MorningOutcome::Absent => self.absences += 1,
        }

        match day.midday {
            MiddayOutcome::OnTime => {}
            MiddayOutcome::Late => self.late_arrivals += 1,
            MiddayOutcome::Missed => self.missed_midday += 1,
        }

        match day.evening {
            EveningOutcome::OnTime => {}
            EveningOutcome::EarlyDeparture => self.early_departures += 1,
            EveningOutcome::Absent => self.absences += 1,
        }

        if let Some(hours) = day.study_hours {
            self.add_study_hours(hours);
        }
    }

    /// Absence fast path: no rule is evaluated, a fixed penalty is charged.
    pub fn apply_missing_day(&mut self) {
        self.absences += Self::MISSING_DAY_ABSENCES;
        self.missed_midday += Self::MISSING_DAY_MIDDAY;
    }

    pub fn add_study_hours(&mut self, hours: f64) {
        self.study_hours = round2(self.study_hours + hours.max(0.0));
    }
}
