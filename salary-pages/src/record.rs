//! The persisted record format.
//!
//! One JSON document per (salary, jurisdiction, year) tuple, consumed
//! by the presentation pages via direct file lookup. Dollar fields are
//! plain integers in the JSON; the effective rate is a number with two
//! decimal places.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use salary_core::calculations::common::round_to_dollar;
use salary_core::{FilingStatus, Jurisdiction, SalaryBreakdown};

/// Errors building a record from a breakdown.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A breakdown amount does not fit the record's integer dollars.
    #[error("amount {0} out of range for a record")]
    OutOfRange(Decimal),
}

/// Employer-benefit assumptions attached to every record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitsConfig {
    pub employer_401k_match_rate: Decimal,
    pub health_insurance_value: Decimal,
}

impl Default for BenefitsConfig {
    fn default() -> Self {
        Self {
            employer_401k_match_rate: dec!(0.03),
            health_insurance_value: dec!(6000),
        }
    }
}

/// Benefits block of the persisted record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Benefits {
    pub employer_401k_match: i64,
    pub health_insurance_value: i64,
}

/// One persisted salary × state × year document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRecord {
    pub salary: i64,
    pub gross_salary: i64,
    pub state: String,
    pub state_code: String,
    pub filing_status: FilingStatus,
    pub tax_year: i32,
    pub federal_tax: i64,
    pub state_tax: i64,
    pub social_security: i64,
    pub medicare: i64,
    pub medicare_surtax: i64,
    pub total_tax: i64,
    pub effective_tax_rate: f64,
    pub net_salary: i64,
    pub monthly_take_home: i64,
    pub biweekly_take_home: i64,
    pub benefits: Benefits,
    pub total_compensation: i64,
}

impl PageRecord {
    /// Builds the record for one breakdown.
    ///
    /// Local tax, when present, is folded into `state_tax` — the record
    /// format has no separate local field, and folding keeps
    /// `total_tax` equal to the sum of the record's components.
    pub fn new(
        breakdown: &SalaryBreakdown,
        jurisdiction: &Jurisdiction,
        benefits: &BenefitsConfig,
    ) -> Result<Self, RecordError> {
        let salary = dollars(breakdown.gross_salary)?;
        let employer_401k_match =
            dollars(round_to_dollar(breakdown.gross_salary * benefits.employer_401k_match_rate))?;
        let health_insurance_value = dollars(benefits.health_insurance_value)?;

        Ok(Self {
            salary,
            gross_salary: salary,
            state: jurisdiction.name.clone(),
            state_code: jurisdiction.code.clone(),
            filing_status: FilingStatus::Single,
            tax_year: breakdown.tax_year.as_i32(),
            federal_tax: dollars(breakdown.federal_tax)?,
            state_tax: dollars(breakdown.state_tax + breakdown.local_tax)?,
            social_security: dollars(breakdown.social_security)?,
            medicare: dollars(breakdown.medicare)?,
            medicare_surtax: dollars(breakdown.medicare_surtax)?,
            total_tax: dollars(breakdown.total_tax)?,
            effective_tax_rate: breakdown
                .effective_tax_rate
                .to_f64()
                .ok_or(RecordError::OutOfRange(breakdown.effective_tax_rate))?,
            net_salary: dollars(breakdown.net_salary)?,
            monthly_take_home: dollars(breakdown.monthly_take_home)?,
            biweekly_take_home: dollars(breakdown.biweekly_take_home)?,
            benefits: Benefits {
                employer_401k_match,
                health_insurance_value,
            },
            total_compensation: salary + employer_401k_match + health_insurance_value,
        })
    }

    /// The file name the record is persisted under:
    /// `{salary}_{stateCode}_single_{year}.json`.
    pub fn file_name(&self) -> String {
        format!(
            "{}_{}_{}_{}.json",
            self.salary,
            self.state_code,
            self.filing_status.slug(),
            self.tax_year
        )
    }
}

fn dollars(amount: Decimal) -> Result<i64, RecordError> {
    amount.to_i64().ok_or(RecordError::OutOfRange(amount))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use salary_core::{
        CalculationOptions, PolicyTables, SalaryCalculator, SalaryInput, TaxYear,
    };

    use super::*;

    fn breakdown_for(
        tables: &PolicyTables,
        gross: Decimal,
        code: &str,
    ) -> SalaryBreakdown {
        SalaryCalculator::new(tables)
            .calculate(&SalaryInput {
                gross_income: gross,
                state_code: code.to_string(),
                tax_year: TaxYear::Y2025,
                options: CalculationOptions {
                    include_local_tax: false,
                    include_medicare_surtax: true,
                },
            })
            .unwrap()
    }

    #[test]
    fn record_mirrors_breakdown_amounts() {
        let tables = PolicyTables::builtin();
        let breakdown = breakdown_for(&tables, dec!(100000), "TX");
        let jurisdiction = tables.jurisdiction("TX").unwrap();

        let record = PageRecord::new(&breakdown, jurisdiction, &BenefitsConfig::default()).unwrap();

        assert_eq!(record.salary, 100_000);
        assert_eq!(record.gross_salary, 100_000);
        assert_eq!(record.state, "Texas");
        assert_eq!(record.federal_tax, 13_775);
        assert_eq!(record.state_tax, 0);
        assert_eq!(record.social_security, 6_200);
        assert_eq!(record.medicare, 1_450);
        assert_eq!(record.total_tax, 21_425);
        assert_eq!(record.net_salary, 78_575);
        assert_eq!(record.effective_tax_rate, 21.43);
    }

    #[test]
    fn benefits_and_total_compensation() {
        let tables = PolicyTables::builtin();
        let breakdown = breakdown_for(&tables, dec!(100000), "TX");
        let jurisdiction = tables.jurisdiction("TX").unwrap();

        let record = PageRecord::new(&breakdown, jurisdiction, &BenefitsConfig::default()).unwrap();

        assert_eq!(record.benefits.employer_401k_match, 3_000);
        assert_eq!(record.benefits.health_insurance_value, 6_000);
        assert_eq!(record.total_compensation, 109_000);
    }

    #[test]
    fn file_name_follows_lookup_convention() {
        let tables = PolicyTables::builtin();
        let breakdown = breakdown_for(&tables, dec!(40000), "CA");
        let jurisdiction = tables.jurisdiction("CA").unwrap();

        let record = PageRecord::new(&breakdown, jurisdiction, &BenefitsConfig::default()).unwrap();

        assert_eq!(record.file_name(), "40000_CA_single_2025.json");
    }

    #[test]
    fn record_totals_stay_consistent() {
        let tables = PolicyTables::builtin();
        let breakdown = breakdown_for(&tables, dec!(250000), "NJ");
        let jurisdiction = tables.jurisdiction("NJ").unwrap();

        let record = PageRecord::new(&breakdown, jurisdiction, &BenefitsConfig::default()).unwrap();

        assert_eq!(
            record.total_tax,
            record.federal_tax
                + record.state_tax
                + record.social_security
                + record.medicare
                + record.medicare_surtax
        );
        assert_eq!(record.net_salary, record.gross_salary - record.total_tax);
    }

    #[test]
    fn serialized_record_round_trips() {
        let tables = PolicyTables::builtin();
        let breakdown = breakdown_for(&tables, dec!(100000), "MN");
        let jurisdiction = tables.jurisdiction("MN").unwrap();
        let record = PageRecord::new(&breakdown, jurisdiction, &BenefitsConfig::default()).unwrap();

        let json = serde_json::to_string_pretty(&record).unwrap();
        let parsed: PageRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, record);
    }
}
