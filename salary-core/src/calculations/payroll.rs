//! FICA payroll taxes.

use rust_decimal::Decimal;

use crate::calculations::common::round_to_dollar;
use crate::models::PayrollConfig;

/// Payroll tax components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayrollTaxes {
    pub social_security: Decimal,
    pub medicare: Decimal,
    pub medicare_surtax: Decimal,
}

/// Social security and Medicare taxes on gross wages.
///
/// Social security is `min(income, wage cap) * rate`; Medicare is
/// uncapped. The additional Medicare surtax on wages above the
/// threshold is only computed when `include_surtax` is set — the
/// interactive calculator leaves it off, the batch generator turns it
/// on. Each component rounds to whole dollars independently.
pub fn payroll_tax(
    gross_income: Decimal,
    config: &PayrollConfig,
    include_surtax: bool,
) -> PayrollTaxes {
    let social_security = round_to_dollar(gross_income.min(config.ss_wage_cap) * config.ss_tax_rate);
    let medicare = round_to_dollar(gross_income * config.medicare_tax_rate);

    let medicare_surtax = if include_surtax && gross_income > config.medicare_surtax_threshold {
        round_to_dollar((gross_income - config.medicare_surtax_threshold) * config.medicare_surtax_rate)
    } else {
        Decimal::ZERO
    };

    PayrollTaxes {
        social_security,
        medicare,
        medicare_surtax,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use crate::policy::PolicyTables;

    use super::*;

    fn config() -> PayrollConfig {
        PolicyTables::builtin().payroll().clone()
    }

    #[test]
    fn hundred_thousand_below_the_cap() {
        let result = payroll_tax(dec!(100000), &config(), false);

        assert_eq!(result.social_security, dec!(6200));
        assert_eq!(result.medicare, dec!(1450));
        assert_eq!(result.medicare_surtax, dec!(0));
    }

    #[test]
    fn social_security_caps_at_wage_maximum() {
        let at_cap = payroll_tax(dec!(160200), &config(), false);
        let far_past_cap = payroll_tax(dec!(1000000), &config(), false);

        // round(160200 * 0.062) = 9932 regardless of how much higher
        // income goes.
        assert_eq!(at_cap.social_security, dec!(9932));
        assert_eq!(far_past_cap.social_security, dec!(9932));
    }

    #[test]
    fn medicare_is_uncapped() {
        let result = payroll_tax(dec!(1000000), &config(), false);

        assert_eq!(result.medicare, dec!(14500));
    }

    #[test]
    fn surtax_applies_above_threshold_when_enabled() {
        let result = payroll_tax(dec!(250000), &config(), true);

        // round(50000 * 0.009) = 450.
        assert_eq!(result.medicare_surtax, dec!(450));
    }

    #[test]
    fn surtax_zero_below_threshold_even_when_enabled() {
        let result = payroll_tax(dec!(150000), &config(), true);

        assert_eq!(result.medicare_surtax, dec!(0));
    }

    #[test]
    fn surtax_zero_when_disabled() {
        let result = payroll_tax(dec!(250000), &config(), false);

        assert_eq!(result.medicare_surtax, dec!(0));
    }
}
