//! The progressive bracket evaluator.

use rust_decimal::Decimal;

use crate::calculations::common::round_to_dollar;
use crate::models::TaxBracket;

/// Computes tax over an ordered marginal bracket table.
///
/// Each bracket taxes only the slice of income that falls inside it,
/// never the whole income at one marginal rate; the scan stops as soon
/// as no income remains. The result is rounded to whole dollars.
///
/// Callers clamp negative taxable income to zero before calling (a
/// deduction may exceed income). Malformed tables are a policy
/// construction bug caught by table validation, not handled here.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::TaxBracket;
/// use salary_core::calculations::brackets::marginal_tax;
///
/// let table = vec![
///     TaxBracket::bounded(dec!(10000), dec!(0.10)),
///     TaxBracket::bounded(dec!(40000), dec!(0.20)),
///     TaxBracket::unbounded(dec!(0.30)),
/// ];
///
/// // 10000 * 0.10 + 20000 * 0.20 = 5000
/// assert_eq!(marginal_tax(dec!(30000), &table), dec!(5000));
/// ```
pub fn marginal_tax(
    taxable_income: Decimal,
    brackets: &[TaxBracket],
) -> Decimal {
    debug_assert!(taxable_income >= Decimal::ZERO);

    let mut tax = Decimal::ZERO;
    let mut remaining = taxable_income;
    let mut floor = Decimal::ZERO;

    for bracket in brackets {
        if remaining <= Decimal::ZERO {
            break;
        }

        let slice = match bracket.upper_limit {
            Some(limit) => (limit - floor).min(remaining),
            None => remaining,
        };
        tax += slice * bracket.rate;
        remaining -= slice;

        if let Some(limit) = bracket.upper_limit {
            floor = limit;
        }
    }

    round_to_dollar(tax)
}
