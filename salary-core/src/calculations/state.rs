//! State and local income tax.

use rust_decimal::Decimal;

use crate::calculations::brackets::marginal_tax;
use crate::calculations::common::round_to_dollar;
use crate::models::{JurisdictionRule, TaxBracket};

/// State and local components for one jurisdiction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateTaxes {
    pub state_tax: Decimal,
    pub local_tax: Decimal,
}

/// State income tax plus, when requested, the jurisdiction's local tax.
///
/// The match over [`JurisdictionRule`] is exhaustive; a code with no
/// rule never reaches this function. Flat rates apply to gross income
/// with no deduction. The local table likewise applies to gross income
/// and is only computed when `include_local` is set.
pub fn state_tax(
    gross_income: Decimal,
    rule: &JurisdictionRule,
    include_local: bool,
) -> StateTaxes {
    match rule {
        JurisdictionRule::None => StateTaxes {
            state_tax: Decimal::ZERO,
            local_tax: Decimal::ZERO,
        },
        JurisdictionRule::Flat { rate } => StateTaxes {
            state_tax: round_to_dollar(gross_income * rate),
            local_tax: Decimal::ZERO,
        },
        JurisdictionRule::Progressive {
            standard_deduction,
            brackets,
        } => StateTaxes {
            state_tax: progressive_state_tax(gross_income, *standard_deduction, brackets),
            local_tax: Decimal::ZERO,
        },
        JurisdictionRule::ProgressiveWithLocal {
            standard_deduction,
            brackets,
            local,
        } => {
            let local_tax = if include_local {
                marginal_tax(gross_income, &local.brackets)
            } else {
                Decimal::ZERO
            };
            StateTaxes {
                state_tax: progressive_state_tax(gross_income, *standard_deduction, brackets),
                local_tax,
            }
        }
    }
}

fn progressive_state_tax(
    gross_income: Decimal,
    standard_deduction: Decimal,
    brackets: &[TaxBracket],
) -> Decimal {
    let taxable = (gross_income - standard_deduction).max(Decimal::ZERO);
    marginal_tax(taxable, brackets)
}
