//! Readers for the two inputs, the punch-log export and the work schedule.
//! Each is read as CSV or as a workbook (`.xlsx`, `.xls`, `.ods`), chosen
//! by file extension.

mod punches;
mod schedule;
mod sheet;

pub use punches::{PunchImport, load_punches, read_punch_sheet, read_punches};
pub use schedule::{ScheduleImport, load_schedule, read_schedule, read_schedule_sheet};
pub use sheet::InputKind;
