//! Drives the day classifier over every (required day, person) pair.

use crate::core::classifier::DayClassifier;
use crate::models::{Person, RunContext};
use chrono::NaiveDate;

/// What happened to one (person, day) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStep {
    /// The day had punches and all four rules were evaluated.
    Evaluated,
    /// No record for the day: the fixed absence penalty was charged.
    MissingDay,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub required_days: usize,
    pub people: usize,
    pub evaluated: usize,
    pub missing: usize,
}

pub struct AttendanceEngine;

impl AttendanceEngine {
    /// Apply one required day to one person.
    pub fn step(person: &mut Person, day: NaiveDate) -> DayStep {
        match person.punches.get(day) {
            Some(punches) => {
                let outcome = DayClassifier::classify(punches);
                person.counters.apply(&outcome);
                DayStep::Evaluated
            }
            None => {
                person.counters.apply_missing_day();
                DayStep::MissingDay
            }
        }
    }

    /// Run every required day against every person, strictly in order.
    ///
    /// Counters accumulate on top of their current values; call
    /// `Roster::reset_counters` first to re-run from scratch.
    pub fn run(ctx: &mut RunContext) -> RunStats {
        let mut stats = RunStats {
            required_days: ctx.calendar.len(),
            people: ctx.roster.len(),
            ..Default::default()
        };

        for day in ctx.calendar.days() {
            for person in ctx.roster.iter_mut() {
                match Self::step(person, *day) {
                    DayStep::Evaluated => stats.evaluated += 1,
                    DayStep::MissingDay => stats.missing += 1,
                }
            }
        }

        stats
    }
}
