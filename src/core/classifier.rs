//! Day classification: turns one day's punches into rule outcomes.
//!
//! Each rule is a first-match decision table: windows are tried in order,
//! the first one containing any punch decides the outcome, otherwise the
//! fallback applies.

use crate::core::window::{self, TimeWindow};
use crate::models::outcome::{DayOutcome, EveningOutcome, MiddayOutcome, MorningOutcome};
use crate::utils::round2;
use chrono::NaiveTime;

/// Lunch/break allowance deducted from a day spanning morning and afternoon.
pub const LUNCH_ALLOWANCE_HOURS: f64 = 2.0;

const MORNING_RULES: [(TimeWindow, MorningOutcome); 2] = [
    (window::MORNING_ON_TIME, MorningOutcome::OnTime),
    (window::MORNING_LATE, MorningOutcome::Late),
];

const MIDDAY_RULES: [(TimeWindow, MiddayOutcome); 2] = [
    (window::MIDDAY_ON_TIME, MiddayOutcome::OnTime),
    (window::MIDDAY_LATE, MiddayOutcome::Late),
];

// 18:00:00 belongs to both windows; on-time is listed first and wins.
const EVENING_RULES: [(TimeWindow, EveningOutcome); 2] = [
    (window::EVENING_ON_TIME, EveningOutcome::OnTime),
    (window::EVENING_EARLY, EveningOutcome::EarlyDeparture),
];

fn first_match<T: Copy>(punches: &[NaiveTime], rules: &[(TimeWindow, T)], fallback: T) -> T {
    rules
        .iter()
        .find(|(w, _)| w.any(punches))
        .map(|(_, outcome)| *outcome)
        .unwrap_or(fallback)
}

pub fn classify_morning(punches: &[NaiveTime]) -> MorningOutcome {
    first_match(punches, &MORNING_RULES, MorningOutcome::Absent)
}

pub fn classify_midday(punches: &[NaiveTime]) -> MiddayOutcome {
    first_match(punches, &MIDDAY_RULES, MiddayOutcome::Missed)
}

pub fn classify_evening(punches: &[NaiveTime]) -> EveningOutcome {
    first_match(punches, &EVENING_RULES, EveningOutcome::Absent)
}

/// Hours spent in the lab for one day.
///
/// Spread between the first and the last recorded punch (recorded order,
/// not sorted), rounded to two decimals, minus the lunch allowance when the
/// day has both a morning and an afternoon presence, floored at zero.
/// `None` with fewer than two punches.
pub fn study_hours(punches: &[NaiveTime]) -> Option<f64> {
    let (first, last) = match punches {
        [first, .., last] => (*first, *last),
        _ => return None,
    };

    let elapsed = round2((last - first).num_seconds() as f64 / 3600.0);

    let spans_lunch = window::STUDY_AFTERNOON_PRESENCE.any(punches)
        && window::STUDY_MORNING_PRESENCE.any(punches);

    let hours = if spans_lunch {
        elapsed - LUNCH_ALLOWANCE_HOURS
    } else {
        elapsed
    };

    Some(hours.max(0.0))
}

pub struct DayClassifier;

impl DayClassifier {
    /// Evaluate the three window rules and the duration rule, once each.
    pub fn classify(punches: &[NaiveTime]) -> DayOutcome {
        DayOutcome {
            morning: classify_morning(punches),
            midday: classify_midday(punches),
            evening: classify_evening(punches),
            study_hours: study_hours(punches),
        }
    }
}
