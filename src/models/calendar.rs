use chrono::NaiveDate;
use std::collections::HashSet;

/// Required work days, in schedule order, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkCalendar {
    days: Vec<NaiveDate>,
}

impl WorkCalendar {
    pub fn from_days<I: IntoIterator<Item = NaiveDate>>(days: I) -> Self {
        let mut seen = HashSet::new();
        let days = days.into_iter().filter(|d| seen.insert(*d)).collect();
        Self { days }
    }

    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
