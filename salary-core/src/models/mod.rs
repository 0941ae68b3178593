mod filing_status;
mod jurisdiction;
mod payroll_config;
mod salary_breakdown;
mod tax_bracket;
mod tax_year;

pub use filing_status::FilingStatus;
pub use jurisdiction::{Jurisdiction, JurisdictionRule, LocalTax};
pub use payroll_config::PayrollConfig;
pub use salary_breakdown::SalaryBreakdown;
pub use tax_bracket::{FederalSchedule, TaxBracket};
pub use tax_year::TaxYear;
