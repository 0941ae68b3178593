//! The batch grid generator.
//!
//! A pure map over the salary × jurisdiction grid: every tuple is
//! calculated independently and written to its own file, so no two
//! writes can conflict and regeneration is byte-identical.

use std::fs;
use std::path::PathBuf;

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, info};

use salary_core::{
    CalculationOptions, EngineError, PolicyTables, SalaryCalculator, SalaryInput, TaxYear,
};

use crate::record::{BenefitsConfig, PageRecord, RecordError};

/// The state codes the static pages are published for.
pub const DEFAULT_STATE_CODES: [&str; 18] = [
    "CA", "NY", "NJ", "MN", "HI", "DC", "GA", "VA", "PA", "IL", "MA", "CO", "AZ", "NC", "TX", "FL",
    "WA", "NV",
];

/// Errors from a batch generation run.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("record error: {0}")]
    Record(#[from] RecordError),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("salary step must be positive, got {0}")]
    InvalidStep(i64),
}

/// The salary × jurisdiction grid to materialize.
#[derive(Debug, Clone)]
pub struct GridConfig {
    pub salary_min: i64,
    pub salary_max: i64,
    pub salary_step: i64,
    pub tax_year: TaxYear,
    pub state_codes: Vec<String>,
    pub output_dir: PathBuf,
    pub benefits: BenefitsConfig,
}

impl GridConfig {
    /// The published grid: every $1,000 from $40,000 to $500,000 across
    /// the default state set.
    pub fn standard(
        tax_year: TaxYear,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            salary_min: 40_000,
            salary_max: 500_000,
            salary_step: 1_000,
            tax_year,
            state_codes: DEFAULT_STATE_CODES.iter().map(|s| s.to_string()).collect(),
            output_dir: output_dir.into(),
            benefits: BenefitsConfig::default(),
        }
    }
}

/// Runs the full grid and writes one pretty-printed JSON document per
/// (salary, state) tuple under `output_dir/{year}/`, named
/// `{salary}_{stateCode}_single_{year}.json`. Returns the number of
/// records written.
///
/// The Medicare surtax is enabled for batch records; the local-tax
/// toggle is not (the published pages carry state-level figures only).
pub fn generate(
    tables: &PolicyTables,
    config: &GridConfig,
) -> Result<usize, GenerateError> {
    if config.salary_step <= 0 {
        return Err(GenerateError::InvalidStep(config.salary_step));
    }

    let year_dir = config.output_dir.join(config.tax_year.as_i32().to_string());
    fs::create_dir_all(&year_dir).map_err(|source| GenerateError::Io {
        path: year_dir.clone(),
        source,
    })?;

    let calculator = SalaryCalculator::new(tables);
    let options = CalculationOptions {
        include_local_tax: false,
        include_medicare_surtax: true,
    };

    let mut written = 0usize;

    for code in &config.state_codes {
        let jurisdiction = tables
            .jurisdiction(code)
            .ok_or_else(|| EngineError::UnsupportedJurisdiction(code.clone()))?;

        let mut salary = config.salary_min;
        while salary <= config.salary_max {
            let breakdown = calculator.calculate(&SalaryInput {
                gross_income: Decimal::from(salary),
                state_code: code.clone(),
                tax_year: config.tax_year,
                options,
            })?;
            let record = PageRecord::new(&breakdown, jurisdiction, &config.benefits)?;

            let path = year_dir.join(record.file_name());
            let json = serde_json::to_vec_pretty(&record)?;
            fs::write(&path, json).map_err(|source| GenerateError::Io { path, source })?;

            written += 1;
            salary += config.salary_step;
        }

        debug!(state = code.as_str(), "state grid complete");
    }

    info!(
        records = written,
        dir = %year_dir.display(),
        "grid generation complete"
    );

    Ok(written)
}
