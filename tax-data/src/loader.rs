use std::collections::HashMap;
use std::io::Read;

use rust_decimal::Decimal;
use serde::Deserialize;
use tax_core::{BracketTable, BracketTableError, ByFilingStatus, FilingStatus, TaxBracket};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading tax bracket data.
#[derive(Debug, Error)]
pub enum TaxBracketLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("Invalid schedule: {0}")]
    InvalidSchedule(String),

    #[error("No brackets for tax year {0}")]
    NoRecordsForYear(i32),

    #[error("Tax year {tax_year} has no brackets for {status}")]
    MissingSchedule {
        tax_year: i32,
        status: FilingStatus,
    },

    #[error("Invalid bracket table: {0}")]
    Table(#[from] BracketTableError),
}

impl From<csv::Error> for TaxBracketLoaderError {
    fn from(err: csv::Error) -> Self {
        TaxBracketLoaderError::CsvParse(err.to_string())
    }
}

/// Maps IRS schedule codes to filing statuses.
///
/// - Schedule X → Single
/// - Schedule Y-1 → Married Filing Jointly and Qualifying Widow(er)
/// - Schedule Y-2 → Married Filing Separately
/// - Schedule Z → Head of Household
fn schedule_to_filing_statuses(
    schedule: &str
) -> Result<&'static [FilingStatus], TaxBracketLoaderError> {
    match schedule.trim() {
        "X" => Ok(&[FilingStatus::Single]),
        "Y-1" => Ok(&[
            FilingStatus::MarriedFilingJointly,
            FilingStatus::QualifyingWidow,
        ]),
        "Y-2" => Ok(&[FilingStatus::MarriedFilingSeparately]),
        "Z" => Ok(&[FilingStatus::HeadOfHousehold]),
        _ => Err(TaxBracketLoaderError::InvalidSchedule(schedule.to_string())),
    }
}

/// A single record from the tax brackets CSV file.
///
/// - `tax_year`: The tax year (e.g., 2024)
/// - `schedule`: The IRS schedule code (X, Y-1, Y-2, Z)
/// - `min_income`: Lower bound of the bracket (exclusive)
/// - `max_income`: Upper bound of the bracket (inclusive; empty for unlimited)
/// - `rate`: The marginal tax rate as a decimal (e.g., 0.10 for 10%)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TaxBracketRecord {
    pub tax_year: i32,
    pub schedule: String,
    pub min_income: Decimal,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub max_income: Option<Decimal>,
    pub rate: Decimal,
}

impl TaxBracketRecord {
    fn to_bracket(&self) -> TaxBracket {
        TaxBracket {
            min_income: self.min_income,
            max_income: self.max_income,
            tax_rate: self.rate,
        }
    }
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Loader for tax bracket data from CSV files.
///
/// The CSV uses IRS schedule codes (X, Y-1, Y-2, Z) which are mapped to the
/// filing statuses that share each schedule.
pub struct TaxBracketLoader;

impl TaxBracketLoader {
    /// Parse tax bracket records from a CSV reader.
    ///
    /// The reader can be any type that implements `Read`, such as a file or a
    /// byte slice.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<TaxBracketRecord>, TaxBracketLoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: TaxBracketRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Tax years present in `records`, ascending.
    pub fn tax_years(records: &[TaxBracketRecord]) -> Vec<i32> {
        let mut years: Vec<i32> = records.iter().map(|r| r.tax_year).collect();
        years.sort_unstable();
        years.dedup();
        years
    }

    /// Build a validated [`BracketTable`] from the records for `tax_year`.
    ///
    /// Records for other years are ignored. Within a schedule the brackets
    /// are ordered by `min_income`, so the file does not have to be sorted.
    /// Schedule Y-1 fills both Married Filing Jointly and Qualifying
    /// Widow(er).
    ///
    /// # Errors
    ///
    /// - [`TaxBracketLoaderError::InvalidSchedule`] for an unknown schedule code
    /// - [`TaxBracketLoaderError::NoRecordsForYear`] if no record has `tax_year`
    /// - [`TaxBracketLoaderError::MissingSchedule`] if a filing status has no
    ///   brackets
    /// - [`TaxBracketLoaderError::Table`] if a schedule has gaps, overlaps, or
    ///   bad rates
    pub fn build_table(
        records: &[TaxBracketRecord],
        tax_year: i32,
    ) -> Result<BracketTable, TaxBracketLoaderError> {
        let mut by_status: HashMap<FilingStatus, Vec<TaxBracket>> = HashMap::new();
        let mut found = 0;

        for record in records.iter().filter(|r| r.tax_year == tax_year) {
            found += 1;
            for status in schedule_to_filing_statuses(&record.schedule)? {
                by_status
                    .entry(*status)
                    .or_default()
                    .push(record.to_bracket());
            }
        }

        if found == 0 {
            return Err(TaxBracketLoaderError::NoRecordsForYear(tax_year));
        }
        if let Some(status) = FilingStatus::ALL
            .into_iter()
            .find(|status| !by_status.contains_key(status))
        {
            return Err(TaxBracketLoaderError::MissingSchedule { tax_year, status });
        }

        let schedules = ByFilingStatus::from_fn(|status| {
            let mut brackets = by_status.remove(&status).unwrap_or_default();
            brackets.sort_by(|a, b| a.min_income.cmp(&b.min_income));
            brackets
        });

        debug!(tax_year, records = found, "built bracket table");
        Ok(BracketTable::new(schedules)?)
    }
}
