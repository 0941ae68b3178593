//! Batch generation of precomputed salary-breakdown records.
//!
//! For a grid of salaries and jurisdictions, runs the tax engine and
//! persists every breakdown as one JSON document the static pages can
//! look up directly by `(salary, state code, year)`.

pub mod generator;
pub mod record;

pub use generator::{GenerateError, GridConfig, generate};
pub use record::{Benefits, BenefitsConfig, PageRecord, RecordError};
