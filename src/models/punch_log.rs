use chrono::{NaiveDate, NaiveTime};
use std::collections::BTreeMap;

/// Punches of one person, keyed by calendar day.
///
/// Each day keeps its punches in the order they were recorded, which is not
/// necessarily chronological. A present key always has at least one punch.
#[derive(Debug, Clone, Default)]
pub struct PunchLog {
    days: BTreeMap<NaiveDate, Vec<NaiveTime>>,
}

impl PunchLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the punches of `day`, replacing any earlier record for it.
    /// Returns the replaced punches, if any.
    pub fn insert(&mut self, day: NaiveDate, punches: Vec<NaiveTime>) -> Option<Vec<NaiveTime>> {
        debug_assert!(!punches.is_empty());
        self.days.insert(day, punches)
    }

    pub fn get(&self, day: NaiveDate) -> Option<&[NaiveTime]> {
        self.days.get(&day).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
