//! The salary breakdown aggregator.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{round_rate, round_to_dollar};
use crate::calculations::{federal, payroll, state};
use crate::error::EngineError;
use crate::models::{SalaryBreakdown, TaxYear};
use crate::policy::PolicyTables;

/// Toggles for the optional tax components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationOptions {
    /// Adds the local (city) tax where the jurisdiction defines one.
    pub include_local_tax: bool,

    /// Adds the 0.9% additional Medicare tax on wages above the
    /// threshold. Off by default, matching the interactive calculator;
    /// the batch generator turns it on.
    pub include_medicare_surtax: bool,
}

/// One calculation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryInput {
    pub gross_income: Decimal,
    pub state_code: String,
    pub tax_year: TaxYear,
    pub options: CalculationOptions,
}

/// Composes the federal, state and payroll calculators into a full
/// [`SalaryBreakdown`].
///
/// Borrows the policy tables; every call is pure and deterministic —
/// identical inputs always yield identical output.
#[derive(Debug, Clone)]
pub struct SalaryCalculator<'a> {
    tables: &'a PolicyTables,
}

impl<'a> SalaryCalculator<'a> {
    pub fn new(tables: &'a PolicyTables) -> Self {
        Self { tables }
    }

    /// Calculates the breakdown for one gross salary.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if the income is negative or the state
    /// code has no entry in the policy tables. Zero income is valid and
    /// yields an all-zero breakdown.
    pub fn calculate(
        &self,
        input: &SalaryInput,
    ) -> Result<SalaryBreakdown, EngineError> {
        let gross = input.gross_income;
        if gross < Decimal::ZERO {
            return Err(EngineError::InvalidIncome(gross));
        }

        let jurisdiction = self
            .tables
            .jurisdiction(&input.state_code)
            .ok_or_else(|| EngineError::UnsupportedJurisdiction(input.state_code.clone()))?;

        let schedule = self.tables.federal_schedule(input.tax_year);
        let federal_tax = federal::federal_tax(gross, schedule);
        let state::StateTaxes {
            state_tax,
            local_tax,
        } = state::state_tax(gross, &jurisdiction.rule, input.options.include_local_tax);
        let payroll = payroll::payroll_tax(
            gross,
            self.tables.payroll(),
            input.options.include_medicare_surtax,
        );

        let total_tax = federal_tax
            + state_tax
            + local_tax
            + payroll.social_security
            + payroll.medicare
            + payroll.medicare_surtax;
        let net_salary = gross - total_tax;

        Ok(SalaryBreakdown {
            gross_salary: gross,
            federal_tax,
            state_tax,
            local_tax,
            social_security: payroll.social_security,
            medicare: payroll.medicare,
            medicare_surtax: payroll.medicare_surtax,
            total_tax,
            net_salary,
            effective_tax_rate: effective_rate(total_tax, gross),
            monthly_take_home: round_to_dollar(net_salary / dec!(12)),
            biweekly_take_home: round_to_dollar(net_salary / dec!(26)),
            tax_year: input.tax_year,
        })
    }
}

/// Total tax as a percentage of gross, two decimal places. Zero gross
/// has no meaningful rate and reports zero.
fn effective_rate(
    total_tax: Decimal,
    gross: Decimal,
) -> Decimal {
    if gross.is_zero() {
        Decimal::ZERO
    } else {
        round_rate(total_tax / gross * dec!(100))
    }
}
