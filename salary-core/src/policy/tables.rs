use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::models::{FederalSchedule, Jurisdiction, JurisdictionRule, PayrollConfig, TaxBracket, TaxYear};
use crate::policy::builtin;
use crate::policy::loader::PolicyLoadError;

/// Federal schedules, one per supported year.
///
/// A plain struct rather than a map keeps the year dispatch exhaustive:
/// every [`TaxYear`] variant has a schedule by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FederalTables {
    pub(crate) y2025: FederalSchedule,
    pub(crate) y2026: FederalSchedule,
}

impl FederalTables {
    fn get(
        &self,
        year: TaxYear,
    ) -> &FederalSchedule {
        match year {
            TaxYear::Y2025 => &self.y2025,
            TaxYear::Y2026 => &self.y2026,
        }
    }

    fn get_mut(
        &mut self,
        year: TaxYear,
    ) -> &mut FederalSchedule {
        match year {
            TaxYear::Y2025 => &mut self.y2025,
            TaxYear::Y2026 => &mut self.y2026,
        }
    }
}

/// The single canonical source of tax policy.
///
/// Consolidates what used to be two divergent embedded copies of the
/// jurisdiction tables (interactive calculator vs. batch generator)
/// into one structure consumed by both paths. Immutable once built,
/// apart from [`PolicyTables::set_federal_schedule`] which lets a
/// loaded configuration replace a year's schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyTables {
    pub(crate) federal: FederalTables,
    pub(crate) jurisdictions: BTreeMap<String, Jurisdiction>,
    pub(crate) payroll: PayrollConfig,
}

impl PolicyTables {
    /// The compiled-in tables: federal 2025/2026, eighteen-plus state
    /// jurisdictions, FICA parameters.
    pub fn builtin() -> Self {
        builtin::tables()
    }

    pub fn federal_schedule(
        &self,
        year: TaxYear,
    ) -> &FederalSchedule {
        self.federal.get(year)
    }

    /// Replaces one year's federal schedule. The caller is expected to
    /// have validated the schedule (the CSV loader does).
    pub fn set_federal_schedule(
        &mut self,
        year: TaxYear,
        schedule: FederalSchedule,
    ) {
        *self.federal.get_mut(year) = schedule;
    }

    pub fn jurisdiction(
        &self,
        code: &str,
    ) -> Option<&Jurisdiction> {
        self.jurisdictions.get(code)
    }

    /// All jurisdictions, ordered by code.
    pub fn jurisdictions(&self) -> impl Iterator<Item = &Jurisdiction> {
        self.jurisdictions.values()
    }

    pub fn payroll(&self) -> &PayrollConfig {
        &self.payroll
    }

    /// Checks every bracket table: ordered ascending, positive rates
    /// below 1, exactly one unbounded bracket and it is the last.
    ///
    /// Malformed tables are a construction bug, so this runs once at
    /// startup (and after every CSV merge) rather than defensively in
    /// the evaluator.
    pub fn validate(&self) -> Result<(), PolicyLoadError> {
        validate_brackets("federal 2025", &self.federal.y2025.brackets)?;
        validate_brackets("federal 2026", &self.federal.y2026.brackets)?;

        for jurisdiction in self.jurisdictions.values() {
            match &jurisdiction.rule {
                JurisdictionRule::None => {}
                JurisdictionRule::Flat { rate } => {
                    validate_rate(&jurisdiction.code, *rate)?;
                }
                JurisdictionRule::Progressive { brackets, .. } => {
                    validate_brackets(&jurisdiction.code, brackets)?;
                }
                JurisdictionRule::ProgressiveWithLocal { brackets, local, .. } => {
                    validate_brackets(&jurisdiction.code, brackets)?;
                    validate_brackets(&local.name, &local.brackets)?;
                }
            }
        }

        Ok(())
    }
}

fn invalid(
    context: &str,
    reason: impl Into<String>,
) -> PolicyLoadError {
    PolicyLoadError::InvalidBracketTable {
        context: context.to_string(),
        reason: reason.into(),
    }
}

fn validate_rate(
    context: &str,
    rate: Decimal,
) -> Result<(), PolicyLoadError> {
    if rate <= Decimal::ZERO || rate >= Decimal::ONE {
        return Err(invalid(context, format!("rate {rate} out of range")));
    }
    Ok(())
}

/// Validates one ordered marginal bracket table.
///
/// Contiguity needs no check: a bracket's portion starts at the
/// previous limit by construction of the (limit, rate) representation.
pub(crate) fn validate_brackets(
    context: &str,
    brackets: &[TaxBracket],
) -> Result<(), PolicyLoadError> {
    if brackets.is_empty() {
        return Err(invalid(context, "empty bracket table"));
    }

    let mut previous: Option<Decimal> = None;
    let last = brackets.len() - 1;

    for (index, bracket) in brackets.iter().enumerate() {
        if bracket.rate <= Decimal::ZERO || bracket.rate >= Decimal::ONE {
            return Err(invalid(context, format!("rate {} out of range", bracket.rate)));
        }

        match bracket.upper_limit {
            Some(limit) => {
                if index == last {
                    return Err(invalid(context, "final bracket must be unbounded"));
                }
                match previous {
                    Some(prev) if limit <= prev => {
                        return Err(invalid(
                            context,
                            format!("limit {limit} not above previous {prev}"),
                        ));
                    }
                    None if limit <= Decimal::ZERO => {
                        return Err(invalid(context, format!("first limit {limit} not positive")));
                    }
                    _ => {}
                }
                previous = Some(limit);
            }
            None => {
                if index != last {
                    return Err(invalid(context, "unbounded bracket before end of table"));
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // builtin table tests
    // =========================================================================

    #[test]
    fn builtin_tables_validate() {
        let tables = PolicyTables::builtin();

        assert_eq!(tables.validate(), Ok(()));
    }

    #[test]
    fn builtin_covers_both_federal_years() {
        let tables = PolicyTables::builtin();

        assert_eq!(
            tables.federal_schedule(TaxYear::Y2025).standard_deduction,
            dec!(14900)
        );
        assert_eq!(
            tables.federal_schedule(TaxYear::Y2026).standard_deduction,
            dec!(15350)
        );
    }

    #[test]
    fn builtin_knows_no_tax_states() {
        let tables = PolicyTables::builtin();

        for code in ["AK", "FL", "NV", "NH", "SD", "TN", "TX", "WA", "WY"] {
            let jurisdiction = tables.jurisdiction(code).unwrap();
            assert_eq!(jurisdiction.rule, JurisdictionRule::None, "{code}");
        }
    }

    #[test]
    fn builtin_new_york_carries_local_table() {
        let tables = PolicyTables::builtin();

        let ny = tables.jurisdiction("NY").unwrap();
        match &ny.rule {
            JurisdictionRule::ProgressiveWithLocal { local, .. } => {
                assert_eq!(local.name, "New York City");
                assert_eq!(local.brackets.len(), 4);
            }
            other => panic!("unexpected rule for NY: {other:?}"),
        }
    }

    #[test]
    fn unknown_code_has_no_entry() {
        let tables = PolicyTables::builtin();

        assert_eq!(tables.jurisdiction("ZZ"), None);
    }

    // =========================================================================
    // validate_brackets tests
    // =========================================================================

    #[test]
    fn validate_brackets_accepts_well_formed_table() {
        let brackets = vec![
            TaxBracket::bounded(dec!(10000), dec!(0.05)),
            TaxBracket::bounded(dec!(50000), dec!(0.07)),
            TaxBracket::unbounded(dec!(0.09)),
        ];

        assert_eq!(validate_brackets("test", &brackets), Ok(()));
    }

    #[test]
    fn validate_brackets_rejects_empty_table() {
        let result = validate_brackets("test", &[]);

        assert!(result.is_err());
    }

    #[test]
    fn validate_brackets_rejects_non_monotonic_limits() {
        let brackets = vec![
            TaxBracket::bounded(dec!(50000), dec!(0.05)),
            TaxBracket::bounded(dec!(10000), dec!(0.07)),
            TaxBracket::unbounded(dec!(0.09)),
        ];

        let result = validate_brackets("test", &brackets);

        assert!(result.is_err());
    }

    #[test]
    fn validate_brackets_rejects_bounded_tail() {
        let brackets = vec![
            TaxBracket::bounded(dec!(10000), dec!(0.05)),
            TaxBracket::bounded(dec!(50000), dec!(0.07)),
        ];

        let result = validate_brackets("test", &brackets);

        assert!(result.is_err());
    }

    #[test]
    fn validate_brackets_rejects_unbounded_middle() {
        let brackets = vec![
            TaxBracket::unbounded(dec!(0.05)),
            TaxBracket::unbounded(dec!(0.09)),
        ];

        let result = validate_brackets("test", &brackets);

        assert!(result.is_err());
    }

    #[test]
    fn validate_brackets_rejects_out_of_range_rate() {
        let brackets = vec![
            TaxBracket::bounded(dec!(10000), dec!(1.5)),
            TaxBracket::unbounded(dec!(0.09)),
        ];

        let result = validate_brackets("test", &brackets);

        assert!(result.is_err());
    }
}
