use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tax_core::{ReturnCalculator, TaxYearConfig};
use tax_data::{TaxBracketLoader, load_tax_year_config_file};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Check tax-year tables and print the schedules they produce.
///
/// The brackets CSV should have the following columns:
/// - tax_year: The tax year (e.g., 2024)
/// - schedule: The IRS schedule code (X, Y-1, Y-2, Z)
/// - min_income: The lower bound of the bracket
/// - max_income: The upper bound (empty for unlimited)
/// - rate: The marginal tax rate as a decimal (e.g., 0.10)
///
/// Without `--config` the built-in 2024 amounts are used; `--brackets`
/// replaces the rate schedules of whichever configuration is in effect.
#[derive(Parser, Debug)]
#[command(name = "tax-tables")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a CSV file of tax brackets
    #[arg(short, long)]
    brackets: Option<PathBuf>,

    /// Path to a TOML tax-year configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Tax year to select from the brackets file (defaults to the
    /// configuration's year)
    #[arg(short, long)]
    year: Option<i32>,
}

/// Initialise structured logging.
///
/// Honours `RUST_LOG` when set and falls back to `info`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();

    if args.brackets.is_none() && args.config.is_none() {
        bail!("Nothing to check: pass --brackets, --config, or both");
    }

    let mut config = match &args.config {
        Some(path) => load_tax_year_config_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => TaxYearConfig::federal_2024().clone(),
    };
    let tax_year = args.year.unwrap_or(config.tax_year);

    if let Some(path) = &args.brackets {
        let file =
            File::open(path).with_context(|| format!("Failed to open: {}", path.display()))?;
        let records = TaxBracketLoader::parse(file)
            .with_context(|| format!("Failed to parse CSV: {}", path.display()))?;

        info!(
            records = records.len(),
            years = ?TaxBracketLoader::tax_years(&records),
            "parsed brackets CSV"
        );

        config.brackets = TaxBracketLoader::build_table(&records, tax_year)
            .with_context(|| format!("Invalid brackets for {tax_year} in {}", path.display()))?;
        config.tax_year = tax_year;
    } else if tax_year != config.tax_year {
        bail!(
            "--year {tax_year} does not match the configuration's year {}",
            config.tax_year
        );
    }

    ReturnCalculator::new(&config).context("Configuration failed validation")?;

    for (status, schedule) in config.brackets.schedules().iter() {
        info!(%status, brackets = schedule.len(), "schedule");
        for bracket in schedule {
            match bracket.max_income {
                Some(max) => println!(
                    "  {:>4}  {:>12} - {:>12}  {}",
                    status.as_str(),
                    bracket.min_income,
                    max,
                    bracket.tax_rate
                ),
                None => println!(
                    "  {:>4}  {:>12} +               {}",
                    status.as_str(),
                    bracket.min_income,
                    bracket.tax_rate
                ),
            }
        }
    }

    info!(tax_year = config.tax_year, "tables are valid");

    Ok(())
}
