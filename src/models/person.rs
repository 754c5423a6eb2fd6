use crate::models::counters::ResultCounters;
use crate::models::punch_log::PunchLog;
use serde::Serialize;

/// Synthetic identity, assigned in first-sighting order.
///
/// People are still grouped by name when punches are loaded; the id only
/// decouples the rest of the program from the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PersonId(pub usize);

/// Descriptive attributes from the punch export; never used for logic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    pub device_id: Option<String>,
    pub employee_id: Option<String>,
    pub department: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub identity: Identity,
    pub punches: PunchLog,
    pub counters: ResultCounters,
}

impl Person {
    pub fn new(id: PersonId, name: impl Into<String>, identity: Identity) -> Self {
        Self {
            id,
            name: name.into(),
            identity,
            punches: PunchLog::new(),
            counters: ResultCounters::default(),
        }
    }
}
