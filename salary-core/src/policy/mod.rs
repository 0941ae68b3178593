//! Policy data: the canonical, versioned tax tables.
//!
//! Everything the calculators need — federal schedules per year, the
//! jurisdiction map, payroll parameters — lives in one [`PolicyTables`]
//! value constructed once at startup. The calculators take it by
//! reference; there are no policy literals inside engine logic.

mod builtin;
mod loader;
mod tables;

pub use loader::{FederalScheduleLoader, FederalScheduleRecord, PolicyLoadError};
pub use tables::PolicyTables;
