pub mod classifier;
pub mod engine;
pub mod report;
pub mod window;

pub use classifier::DayClassifier;
pub use engine::{AttendanceEngine, DayStep, RunStats};
pub use report::{ReportLogic, ReportRequest};
