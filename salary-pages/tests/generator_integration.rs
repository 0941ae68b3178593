//! Integration tests for the grid generator using real file output.

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;

use salary_core::{PolicyTables, TaxYear};
use salary_pages::generator::{self, GridConfig};
use salary_pages::record::{BenefitsConfig, PageRecord};

fn small_grid(out: &Path) -> GridConfig {
    GridConfig {
        salary_min: 40_000,
        salary_max: 42_000,
        salary_step: 1_000,
        tax_year: TaxYear::Y2025,
        state_codes: vec!["TX".to_string(), "CA".to_string(), "PA".to_string()],
        output_dir: out.to_path_buf(),
        benefits: BenefitsConfig::default(),
    }
}

#[test]
fn generates_one_file_per_tuple() {
    let tables = PolicyTables::builtin();
    let dir = tempfile::tempdir().unwrap();

    let written = generator::generate(&tables, &small_grid(dir.path())).unwrap();

    // 3 salaries x 3 states.
    assert_eq!(written, 9);

    let year_dir = dir.path().join("2025");
    let mut names: Vec<String> = fs::read_dir(&year_dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();

    assert_eq!(names.len(), 9);
    assert!(names.contains(&"40000_TX_single_2025.json".to_string()));
    assert!(names.contains(&"42000_CA_single_2025.json".to_string()));
}

#[test]
fn written_records_are_arithmetically_consistent() {
    let tables = PolicyTables::builtin();
    let dir = tempfile::tempdir().unwrap();

    generator::generate(&tables, &small_grid(dir.path())).unwrap();

    let path = dir.path().join("2025").join("41000_CA_single_2025.json");
    let record: PageRecord = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

    assert_eq!(record.salary, 41_000);
    assert_eq!(record.state_code, "CA");
    assert_eq!(record.state, "California");
    assert_eq!(record.tax_year, 2025);
    assert_eq!(
        record.total_tax,
        record.federal_tax
            + record.state_tax
            + record.social_security
            + record.medicare
            + record.medicare_surtax
    );
    assert_eq!(record.net_salary, record.gross_salary - record.total_tax);
    assert_eq!(
        record.total_compensation,
        record.salary + record.benefits.employer_401k_match + record.benefits.health_insurance_value
    );
}

#[test]
fn regeneration_is_byte_identical() {
    let tables = PolicyTables::builtin();
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();

    generator::generate(&tables, &small_grid(first.path())).unwrap();
    generator::generate(&tables, &small_grid(second.path())).unwrap();

    let first_dir = first.path().join("2025");
    let second_dir = second.path().join("2025");

    let mut names: Vec<String> = fs::read_dir(&first_dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();

    for name in names {
        let a = fs::read(first_dir.join(&name)).unwrap();
        let b = fs::read(second_dir.join(&name)).unwrap();
        assert_eq!(a, b, "{name} differs between runs");
    }
}

#[test]
fn batch_records_include_the_medicare_surtax() {
    let tables = PolicyTables::builtin();
    let dir = tempfile::tempdir().unwrap();
    let config = GridConfig {
        salary_min: 250_000,
        salary_max: 250_000,
        salary_step: 1_000,
        tax_year: TaxYear::Y2025,
        state_codes: vec!["TX".to_string()],
        output_dir: dir.path().to_path_buf(),
        benefits: BenefitsConfig::default(),
    };

    generator::generate(&tables, &config).unwrap();

    let path = dir.path().join("2025").join("250000_TX_single_2025.json");
    let record: PageRecord = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

    // round(50000 * 0.009) above the 200000 threshold.
    assert_eq!(record.medicare_surtax, 450);
}

#[test]
fn standard_grid_matches_the_published_shape() {
    let config = GridConfig::standard(TaxYear::Y2025, "data/pages");

    assert_eq!(config.salary_min, 40_000);
    assert_eq!(config.salary_max, 500_000);
    assert_eq!(config.salary_step, 1_000);
    assert_eq!(config.state_codes.len(), 18);
}

#[test]
fn zero_step_is_rejected() {
    let tables = PolicyTables::builtin();
    let dir = tempfile::tempdir().unwrap();
    let mut config = small_grid(dir.path());
    config.salary_step = 0;

    let result = generator::generate(&tables, &config);

    assert!(matches!(
        result,
        Err(generator::GenerateError::InvalidStep(0))
    ));
}

#[test]
fn unknown_state_code_fails_the_run() {
    let tables = PolicyTables::builtin();
    let dir = tempfile::tempdir().unwrap();
    let mut config = small_grid(dir.path());
    config.state_codes = vec!["ZZ".to_string()];

    let result = generator::generate(&tables, &config);

    assert!(matches!(
        result,
        Err(generator::GenerateError::Engine(_))
    ));
}
