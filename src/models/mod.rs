pub mod calendar;
pub mod counters;
pub mod outcome;
pub mod person;
pub mod punch_log;
pub mod roster;

pub use calendar::WorkCalendar;
pub use counters::ResultCounters;
pub use person::{Identity, Person, PersonId};
pub use punch_log::PunchLog;
pub use roster::Roster;

/// Everything one report run works on, owned by the orchestrator and
/// lent to the engine and the writers.
#[derive(Debug, Clone, Default)]
pub struct RunContext {
    pub roster: Roster,
    pub calendar: WorkCalendar,
}
