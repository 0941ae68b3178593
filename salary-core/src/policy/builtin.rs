//! The compiled-in policy tables.
//!
//! Sources: 2025 federal numbers are the published IRS tables for a
//! single filer; 2026 is a projected schedule with a bumped standard
//! deduction. State tables cover the jurisdictions the static pages are
//! published for — six progressive states, eleven flat-rate states and
//! the nine states with no wage income tax.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{FederalSchedule, Jurisdiction, JurisdictionRule, LocalTax, PayrollConfig, TaxBracket};
use crate::policy::tables::{FederalTables, PolicyTables};

pub(crate) fn tables() -> PolicyTables {
    PolicyTables {
        federal: FederalTables {
            y2025: federal_2025(),
            y2026: federal_2026(),
        },
        jurisdictions: jurisdictions(),
        payroll: payroll(),
    }
}

fn federal_2025() -> FederalSchedule {
    FederalSchedule {
        standard_deduction: dec!(14900),
        brackets: vec![
            TaxBracket::bounded(dec!(11600), dec!(0.10)),
            TaxBracket::bounded(dec!(47150), dec!(0.12)),
            TaxBracket::bounded(dec!(100525), dec!(0.22)),
            TaxBracket::bounded(dec!(191950), dec!(0.24)),
            TaxBracket::bounded(dec!(243725), dec!(0.32)),
            TaxBracket::bounded(dec!(609350), dec!(0.35)),
            TaxBracket::unbounded(dec!(0.37)),
        ],
    }
}

fn federal_2026() -> FederalSchedule {
    FederalSchedule {
        standard_deduction: dec!(15350),
        brackets: vec![
            TaxBracket::bounded(dec!(11850), dec!(0.10)),
            TaxBracket::bounded(dec!(48150), dec!(0.12)),
            TaxBracket::bounded(dec!(103500), dec!(0.22)),
            TaxBracket::bounded(dec!(197500), dec!(0.24)),
            TaxBracket::bounded(dec!(250000), dec!(0.32)),
            TaxBracket::bounded(dec!(620000), dec!(0.35)),
            TaxBracket::unbounded(dec!(0.37)),
        ],
    }
}

fn payroll() -> PayrollConfig {
    PayrollConfig {
        ss_wage_cap: dec!(160200),
        ss_tax_rate: dec!(0.062),
        medicare_tax_rate: dec!(0.0145),
        medicare_surtax_threshold: dec!(200000),
        medicare_surtax_rate: dec!(0.009),
    }
}

fn progressive(
    code: &str,
    name: &str,
    standard_deduction: Decimal,
    brackets: Vec<TaxBracket>,
) -> Jurisdiction {
    Jurisdiction {
        code: code.to_string(),
        name: name.to_string(),
        rule: JurisdictionRule::Progressive {
            standard_deduction,
            brackets,
        },
    }
}

fn flat(
    code: &str,
    name: &str,
    rate: Decimal,
) -> Jurisdiction {
    Jurisdiction {
        code: code.to_string(),
        name: name.to_string(),
        rule: JurisdictionRule::Flat { rate },
    }
}

fn no_tax(
    code: &str,
    name: &str,
) -> Jurisdiction {
    Jurisdiction {
        code: code.to_string(),
        name: name.to_string(),
        rule: JurisdictionRule::None,
    }
}

fn jurisdictions() -> BTreeMap<String, Jurisdiction> {
    let all = vec![
        progressive(
            "CA",
            "California",
            dec!(5540),
            vec![
                TaxBracket::bounded(dec!(10099), dec!(0.01)),
                TaxBracket::bounded(dec!(23942), dec!(0.02)),
                TaxBracket::bounded(dec!(37788), dec!(0.04)),
                TaxBracket::bounded(dec!(52455), dec!(0.06)),
                TaxBracket::bounded(dec!(66295), dec!(0.08)),
                TaxBracket::bounded(dec!(338639), dec!(0.093)),
                TaxBracket::unbounded(dec!(0.123)),
            ],
        ),
        Jurisdiction {
            code: "NY".to_string(),
            name: "New York".to_string(),
            rule: JurisdictionRule::ProgressiveWithLocal {
                standard_deduction: dec!(8000),
                brackets: vec![
                    TaxBracket::bounded(dec!(8500), dec!(0.04)),
                    TaxBracket::bounded(dec!(11700), dec!(0.045)),
                    TaxBracket::bounded(dec!(13900), dec!(0.0525)),
                    TaxBracket::bounded(dec!(80650), dec!(0.0585)),
                    TaxBracket::bounded(dec!(215400), dec!(0.0625)),
                    TaxBracket::bounded(dec!(1077550), dec!(0.0685)),
                    TaxBracket::unbounded(dec!(0.109)),
                ],
                local: LocalTax {
                    name: "New York City".to_string(),
                    brackets: vec![
                        TaxBracket::bounded(dec!(12000), dec!(0.03078)),
                        TaxBracket::bounded(dec!(25000), dec!(0.03762)),
                        TaxBracket::bounded(dec!(50000), dec!(0.03819)),
                        TaxBracket::unbounded(dec!(0.03876)),
                    ],
                },
            },
        },
        progressive(
            "NJ",
            "New Jersey",
            Decimal::ZERO,
            vec![
                TaxBracket::bounded(dec!(20000), dec!(0.014)),
                TaxBracket::bounded(dec!(35000), dec!(0.0175)),
                TaxBracket::bounded(dec!(40000), dec!(0.035)),
                TaxBracket::bounded(dec!(75000), dec!(0.05525)),
                TaxBracket::bounded(dec!(500000), dec!(0.0637)),
                TaxBracket::bounded(dec!(1000000), dec!(0.0897)),
                TaxBracket::unbounded(dec!(0.1075)),
            ],
        ),
        progressive(
            "MN",
            "Minnesota",
            dec!(13825),
            vec![
                TaxBracket::bounded(dec!(31070), dec!(0.0535)),
                TaxBracket::bounded(dec!(102350), dec!(0.068)),
                TaxBracket::bounded(dec!(190950), dec!(0.0785)),
                TaxBracket::unbounded(dec!(0.0985)),
            ],
        ),
        progressive(
            "HI",
            "Hawaii",
            dec!(2200),
            vec![
                TaxBracket::bounded(dec!(2400), dec!(0.014)),
                TaxBracket::bounded(dec!(4800), dec!(0.032)),
                TaxBracket::bounded(dec!(9600), dec!(0.055)),
                TaxBracket::bounded(dec!(14400), dec!(0.064)),
                TaxBracket::bounded(dec!(19200), dec!(0.068)),
                TaxBracket::bounded(dec!(24000), dec!(0.072)),
                TaxBracket::bounded(dec!(36000), dec!(0.076)),
                TaxBracket::bounded(dec!(48000), dec!(0.079)),
                TaxBracket::bounded(dec!(150000), dec!(0.0825)),
                TaxBracket::bounded(dec!(175000), dec!(0.09)),
                TaxBracket::bounded(dec!(200000), dec!(0.10)),
                TaxBracket::unbounded(dec!(0.11)),
            ],
        ),
        progressive(
            "DC",
            "Washington, D.C.",
            dec!(13850),
            vec![
                TaxBracket::bounded(dec!(10000), dec!(0.04)),
                TaxBracket::bounded(dec!(40000), dec!(0.06)),
                TaxBracket::bounded(dec!(60000), dec!(0.065)),
                TaxBracket::bounded(dec!(250000), dec!(0.085)),
                TaxBracket::unbounded(dec!(0.1075)),
            ],
        ),
        flat("CO", "Colorado", dec!(0.044)),
        flat("IL", "Illinois", dec!(0.0495)),
        flat("PA", "Pennsylvania", dec!(0.0307)),
        flat("MA", "Massachusetts", dec!(0.05)),
        flat("MI", "Michigan", dec!(0.0425)),
        flat("IN", "Indiana", dec!(0.0315)),
        flat("AZ", "Arizona", dec!(0.025)),
        flat("UT", "Utah", dec!(0.0485)),
        flat("NC", "North Carolina", dec!(0.0475)),
        flat("GA", "Georgia", dec!(0.0539)),
        flat("VA", "Virginia", dec!(0.0575)),
        no_tax("AK", "Alaska"),
        no_tax("FL", "Florida"),
        no_tax("NV", "Nevada"),
        no_tax("NH", "New Hampshire"),
        no_tax("SD", "South Dakota"),
        no_tax("TN", "Tennessee"),
        no_tax("TX", "Texas"),
        no_tax("WA", "Washington"),
        no_tax("WY", "Wyoming"),
    ];

    all.into_iter()
        .map(|jurisdiction| (jurisdiction.code.clone(), jurisdiction))
        .collect()
}
