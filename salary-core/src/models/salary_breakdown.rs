use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::TaxYear;

/// Full tax breakdown for one gross salary.
///
/// All amounts are whole dollars, rounded at the point each component
/// was computed; `effective_tax_rate` is a percentage with two decimal
/// places. The arithmetic invariants hold exactly:
/// `total_tax` is the sum of the six tax components and
/// `net_salary = gross_salary - total_tax`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    pub gross_salary: Decimal,
    pub federal_tax: Decimal,
    pub state_tax: Decimal,
    pub local_tax: Decimal,
    pub social_security: Decimal,
    pub medicare: Decimal,
    pub medicare_surtax: Decimal,
    pub total_tax: Decimal,
    pub net_salary: Decimal,
    pub effective_tax_rate: Decimal,
    pub monthly_take_home: Decimal,
    pub biweekly_take_home: Decimal,
    pub tax_year: TaxYear,
}
