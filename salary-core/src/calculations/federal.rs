//! Federal income tax.

use rust_decimal::Decimal;

use crate::calculations::brackets::marginal_tax;
use crate::models::FederalSchedule;

/// Federal income tax for one year's schedule: gross income less the
/// standard deduction (clamped at zero), run through the bracket table.
///
/// Year dispatch happens where the schedule is looked up
/// ([`crate::PolicyTables::federal_schedule`], keyed by the
/// [`crate::TaxYear`] enum), so there is no unsupported-year path here.
pub fn federal_tax(
    gross_income: Decimal,
    schedule: &FederalSchedule,
) -> Decimal {
    let taxable = (gross_income - schedule.standard_deduction).max(Decimal::ZERO);
    marginal_tax(taxable, &schedule.brackets)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use crate::models::TaxYear;
    use crate::policy::PolicyTables;

    use super::*;

    #[test]
    fn hundred_thousand_single_2025() {
        let tables = PolicyTables::builtin();
        let schedule = tables.federal_schedule(TaxYear::Y2025);

        // Taxable 85100: 1160 + 4266 + 8349.
        let result = federal_tax(dec!(100000), schedule);

        assert_eq!(result, dec!(13775));
    }

    #[test]
    fn hundred_thousand_single_2026_uses_projected_table() {
        let tables = PolicyTables::builtin();
        let schedule = tables.federal_schedule(TaxYear::Y2026);

        // Taxable 84650: 1185 + 4356 + 8030.
        let result = federal_tax(dec!(100000), schedule);

        assert_eq!(result, dec!(13571));
    }

    #[test]
    fn income_below_deduction_owes_nothing() {
        let tables = PolicyTables::builtin();
        let schedule = tables.federal_schedule(TaxYear::Y2025);

        let result = federal_tax(dec!(12000), schedule);

        assert_eq!(result, dec!(0));
    }

    #[test]
    fn zero_income_owes_nothing() {
        let tables = PolicyTables::builtin();
        let schedule = tables.federal_schedule(TaxYear::Y2025);

        let result = federal_tax(dec!(0), schedule);

        assert_eq!(result, dec!(0));
    }
}
