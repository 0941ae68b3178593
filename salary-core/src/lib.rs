//! Tax engine for a US salary-after-tax calculator.
//!
//! Pure functions mapping (gross income, jurisdiction, tax year, options)
//! to a structured breakdown of federal, state, local and payroll taxes
//! plus net pay. All policy data (bracket tables, deductions, payroll
//! caps) lives in a single versioned [`PolicyTables`] structure passed
//! into the calculators; nothing here performs I/O or keeps state.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use salary_core::{CalculationOptions, PolicyTables, SalaryCalculator, SalaryInput, TaxYear};
//!
//! let tables = PolicyTables::builtin();
//! let calculator = SalaryCalculator::new(&tables);
//!
//! let breakdown = calculator
//!     .calculate(&SalaryInput {
//!         gross_income: dec!(100000),
//!         state_code: "TX".to_string(),
//!         tax_year: TaxYear::Y2025,
//!         options: CalculationOptions::default(),
//!     })
//!     .unwrap();
//!
//! assert_eq!(breakdown.federal_tax, dec!(13775));
//! assert_eq!(breakdown.state_tax, dec!(0));
//! assert_eq!(breakdown.net_salary, dec!(78575));
//! ```

pub mod calculations;
pub mod error;
pub mod models;
pub mod policy;

pub use calculations::{CalculationOptions, SalaryCalculator, SalaryInput};
pub use error::EngineError;
pub use models::*;
pub use policy::{FederalScheduleLoader, PolicyLoadError, PolicyTables};
