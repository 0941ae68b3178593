//! Tax calculations.
//!
//! The progressive bracket evaluator plus the federal, state and
//! payroll component calculators, composed by [`SalaryCalculator`] into
//! a full [`crate::SalaryBreakdown`].

pub mod brackets;
pub mod common;
pub mod federal;
pub mod payroll;
pub mod salary;
pub mod state;

pub use payroll::PayrollTaxes;
pub use salary::{CalculationOptions, SalaryCalculator, SalaryInput};
pub use state::StateTaxes;
