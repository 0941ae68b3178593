use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::TaxBracket;

/// A secondary local income tax layered on top of a state's progressive
/// table (the New York City resident tax). It has its own bracket table,
/// applies to gross income with no deduction, and is only computed when
/// the caller asks for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalTax {
    pub name: String,
    pub brackets: Vec<TaxBracket>,
}

/// How a jurisdiction taxes wage income.
///
/// A tagged variant per mechanism keeps the dispatch exhaustive: there
/// is no fallthrough path, and a code missing from the policy tables is
/// an error rather than an implicit zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JurisdictionRule {
    /// No state income tax.
    None,

    /// A single marginal rate on gross income, no deduction.
    Flat { rate: Decimal },

    /// A standard deduction plus a marginal bracket table. Each state
    /// carries its own numbers; none are shared with the federal
    /// schedule.
    Progressive {
        standard_deduction: Decimal,
        brackets: Vec<TaxBracket>,
    },

    /// Progressive state tax plus an optional local tax table.
    ProgressiveWithLocal {
        standard_deduction: Decimal,
        brackets: Vec<TaxBracket>,
        local: LocalTax,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jurisdiction {
    pub code: String,
    pub name: String,
    pub rule: JurisdictionRule,
}
