use rust_decimal::Decimal;
use thiserror::Error;

/// Errors the tax engine can produce.
///
/// This is a closed set: the engine itself is pure arithmetic over the
/// policy tables, so the only failure modes are inputs the tables do not
/// cover.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Gross income below zero. Zero income is allowed and yields an
    /// all-zero breakdown.
    #[error("income must be non-negative, got {0}")]
    InvalidIncome(Decimal),

    /// The jurisdiction code has no entry in the policy tables.
    #[error("unsupported jurisdiction '{0}'")]
    UnsupportedJurisdiction(String),

    /// The year has no federal schedule.
    #[error("unsupported tax year {0}")]
    UnsupportedTaxYear(i32),
}
