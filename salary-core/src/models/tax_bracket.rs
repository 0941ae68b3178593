use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One marginal tax bracket.
///
/// The slice of taxable income between the previous bracket's limit and
/// `upper_limit` is taxed at `rate`. A table is ordered ascending by
/// limit and therefore contiguous by construction; the final bracket
/// carries `upper_limit: None` as the unbounded sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub upper_limit: Option<Decimal>,
    pub rate: Decimal,
}

impl TaxBracket {
    pub fn bounded(
        upper_limit: Decimal,
        rate: Decimal,
    ) -> Self {
        Self {
            upper_limit: Some(upper_limit),
            rate,
        }
    }

    pub fn unbounded(rate: Decimal) -> Self {
        Self {
            upper_limit: None,
            rate,
        }
    }
}

/// Federal schedule for one tax year: the standard deduction plus the
/// bracket table applied to income net of that deduction.
///
/// Schedules are versioned policy data, keyed by [`crate::TaxYear`]
/// inside the policy tables; 2025 and 2026 carry materially different
/// numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FederalSchedule {
    pub standard_deduction: Decimal,
    pub brackets: Vec<TaxBracket>,
}
