use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// FICA payroll parameters.
///
/// Social security applies up to `ss_wage_cap`; Medicare is uncapped,
/// with an additional surtax on wages above
/// `medicare_surtax_threshold`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollConfig {
    pub ss_wage_cap: Decimal,
    pub ss_tax_rate: Decimal,
    pub medicare_tax_rate: Decimal,
    pub medicare_surtax_threshold: Decimal,
    pub medicare_surtax_rate: Decimal,
}
