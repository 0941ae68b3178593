use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

use salary_core::{
    CalculationOptions, FederalScheduleLoader, PolicyTables, SalaryCalculator, SalaryInput,
    TaxYear,
};
use salary_pages::generator::{self, DEFAULT_STATE_CODES, GridConfig};
use salary_pages::record::BenefitsConfig;

/// Precompute salary-after-tax records for the static pages.
#[derive(Parser, Debug)]
#[command(name = "salary-pages")]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the full salary × state grid of JSON records.
    Generate {
        /// Directory the per-year record directory is created under
        #[arg(short, long, default_value = "data/pages")]
        out: PathBuf,

        /// Tax year to generate
        #[arg(short, long, default_value_t = 2025)]
        year: i32,

        /// Lowest salary in the grid
        #[arg(long, default_value_t = 40_000)]
        min: i64,

        /// Highest salary in the grid
        #[arg(long, default_value_t = 500_000)]
        max: i64,

        /// Salary increment
        #[arg(long, default_value_t = 1_000)]
        step: i64,

        /// Comma-separated state codes (defaults to the published set)
        #[arg(long, value_delimiter = ',')]
        states: Option<Vec<String>>,

        /// CSV file with replacement federal schedules
        #[arg(long)]
        federal_csv: Option<PathBuf>,
    },

    /// Calculate a single salary breakdown and print it as JSON.
    Calculate {
        /// Gross annual income
        #[arg(short, long)]
        income: Decimal,

        /// Two-letter state code
        #[arg(short, long)]
        state: String,

        /// Include the New York City resident tax
        #[arg(long, default_value_t = false)]
        include_nyc: bool,

        /// Include the additional Medicare surtax
        #[arg(long, default_value_t = false)]
        include_surtax: bool,

        /// Tax year (unsupported years fall back to 2025)
        #[arg(short, long, default_value_t = 2025)]
        year: i32,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match Args::parse().command {
        Command::Generate {
            out,
            year,
            min,
            max,
            step,
            states,
            federal_csv,
        } => run_generate(out, year, min, max, step, states, federal_csv),
        Command::Calculate {
            income,
            state,
            include_nyc,
            include_surtax,
            year,
        } => run_calculate(income, state, include_nyc, include_surtax, year),
    }
}

fn run_generate(
    out: PathBuf,
    year: i32,
    min: i64,
    max: i64,
    step: i64,
    states: Option<Vec<String>>,
    federal_csv: Option<PathBuf>,
) -> Result<()> {
    let mut tables = PolicyTables::builtin();

    if let Some(path) = federal_csv {
        let file =
            File::open(&path).with_context(|| format!("Failed to open: {}", path.display()))?;
        let records = FederalScheduleLoader::parse(file)
            .with_context(|| format!("Failed to parse CSV: {}", path.display()))?;
        let replaced = FederalScheduleLoader::merge(&mut tables, &records)
            .context("Failed to merge federal schedules")?;
        tracing::info!(years = ?replaced, "replaced federal schedules from CSV");
    }

    tables
        .validate()
        .context("Policy tables failed validation")?;

    let tax_year = TaxYear::from_year(year).context("Unsupported tax year")?;
    let config = GridConfig {
        salary_min: min,
        salary_max: max,
        salary_step: step,
        tax_year,
        state_codes: states
            .unwrap_or_else(|| DEFAULT_STATE_CODES.iter().map(|s| s.to_string()).collect()),
        output_dir: out,
        benefits: BenefitsConfig::default(),
    };

    let written = generator::generate(&tables, &config).context("Grid generation failed")?;

    println!("Wrote {written} records for {tax_year}.");

    Ok(())
}

fn run_calculate(
    income: Decimal,
    state: String,
    include_nyc: bool,
    include_surtax: bool,
    year: i32,
) -> Result<()> {
    let tables = PolicyTables::builtin();
    tables
        .validate()
        .context("Policy tables failed validation")?;

    let calculator = SalaryCalculator::new(&tables);
    let breakdown = calculator.calculate(&SalaryInput {
        gross_income: income,
        state_code: state,
        tax_year: TaxYear::from_year_or_default(year),
        options: CalculationOptions {
            include_local_tax: include_nyc,
            include_medicare_surtax: include_surtax,
        },
    })?;

    println!("{}", serde_json::to_string_pretty(&breakdown)?);

    Ok(())
}
