use std::io::Read;

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::models::{FederalSchedule, TaxBracket, TaxYear};
use crate::policy::tables::{PolicyTables, validate_brackets};

/// Errors that can occur when loading or validating policy data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PolicyLoadError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("tax year {0} has no enum variant; add it before loading a schedule for it")]
    UnsupportedYear(i32),

    #[error("invalid bracket table for {context}: {reason}")]
    InvalidBracketTable { context: String, reason: String },

    #[error("standard deduction differs between rows of year {0}")]
    InconsistentDeduction(i32),
}

impl From<csv::Error> for PolicyLoadError {
    fn from(err: csv::Error) -> Self {
        PolicyLoadError::CsvParse(err.to_string())
    }
}

/// A single record from a federal schedule CSV file.
///
/// Columns:
/// - `tax_year`: the year the row belongs to (e.g. 2026)
/// - `standard_deduction`: repeated on every row of a year
/// - `upper_limit`: bracket ceiling (empty for the unbounded top bracket)
/// - `rate`: the marginal rate as a decimal (e.g. 0.22)
///
/// Rows must appear in bracket order within a year.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FederalScheduleRecord {
    pub tax_year: i32,
    pub standard_deduction: Decimal,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub upper_limit: Option<Decimal>,
    pub rate: Decimal,
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Loader for federal schedule data from CSV files.
///
/// Lets a corrected or newly published schedule replace a builtin one
/// without touching calculator code: parse the CSV, then merge it into
/// a [`PolicyTables`].
pub struct FederalScheduleLoader;

impl FederalScheduleLoader {
    /// Parse schedule records from a CSV reader.
    ///
    /// The reader can be any type that implements `Read`, such as a
    /// file or a string slice.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<FederalScheduleRecord>, PolicyLoadError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: FederalScheduleRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Assembles one schedule per year from `records`, validates each,
    /// and replaces that year's schedule in `tables`. Returns the years
    /// that were replaced.
    ///
    /// Years that have no [`TaxYear`] variant are rejected rather than
    /// silently skipped.
    pub fn merge(
        tables: &mut PolicyTables,
        records: &[FederalScheduleRecord],
    ) -> Result<Vec<TaxYear>, PolicyLoadError> {
        let mut replaced = Vec::new();

        for (year, rows) in group_by_year(records) {
            let tax_year =
                TaxYear::from_year(year).map_err(|_| PolicyLoadError::UnsupportedYear(year))?;

            let standard_deduction = rows[0].standard_deduction;
            if rows.iter().any(|r| r.standard_deduction != standard_deduction) {
                return Err(PolicyLoadError::InconsistentDeduction(year));
            }

            let brackets: Vec<TaxBracket> = rows
                .iter()
                .map(|r| TaxBracket {
                    upper_limit: r.upper_limit,
                    rate: r.rate,
                })
                .collect();
            validate_brackets(&format!("federal {year}"), &brackets)?;

            tables.set_federal_schedule(
                tax_year,
                FederalSchedule {
                    standard_deduction,
                    brackets,
                },
            );
            replaced.push(tax_year);
        }

        Ok(replaced)
    }
}

/// Groups records by year, preserving row order within each year and
/// first-seen order across years.
fn group_by_year(records: &[FederalScheduleRecord]) -> Vec<(i32, Vec<&FederalScheduleRecord>)> {
    let mut groups: Vec<(i32, Vec<&FederalScheduleRecord>)> = Vec::new();

    for record in records {
        match groups.iter_mut().find(|(year, _)| *year == record.tax_year) {
            Some((_, rows)) => rows.push(record),
            None => groups.push((record.tax_year, vec![record])),
        }
    }

    groups
}
