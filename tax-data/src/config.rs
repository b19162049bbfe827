use std::path::{Path, PathBuf};

use tax_core::{TaxYearConfig, TaxYearConfigError};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading a tax-year configuration.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Syntax errors, missing fields, and malformed bracket tables.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] TaxYearConfigError),
}

/// Parse a [`TaxYearConfig`] from TOML text and validate it.
pub fn load_tax_year_config(content: &str) -> Result<TaxYearConfig, ConfigLoadError> {
    let config: TaxYearConfig = toml::from_str(content)?;
    config.validate()?;

    debug!(tax_year = config.tax_year, "loaded tax year configuration");
    Ok(config)
}

/// Read and validate a [`TaxYearConfig`] from a TOML file.
pub fn load_tax_year_config_file(path: impl AsRef<Path>) -> Result<TaxYearConfig, ConfigLoadError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    load_tax_year_config(&content)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use tax_core::FilingStatus;

    use super::*;

    const CONFIG_2024: &str = include_str!("../test-data/tax_year_2024.toml");

    #[test]
    fn test_load_2024_config_matches_built_in() {
        let config = load_tax_year_config(CONFIG_2024).expect("Failed to load config");

        assert_eq!(&config, TaxYearConfig::federal_2024());
    }

    #[test]
    fn test_load_rejects_negative_amount() {
        let text = CONFIG_2024.replace("per_other_dependent = 500", "per_other_dependent = -500");

        let result = load_tax_year_config(&text);

        let err = result.expect_err("Should reject negative credit");
        assert!(matches!(
            err,
            ConfigLoadError::Invalid(TaxYearConfigError::NegativeAmount { .. })
        ));
    }

    #[test]
    fn test_load_rejects_zero_phase_out_step() {
        let text = CONFIG_2024.replace("phase_out_step = 1000", "phase_out_step = 0");

        let result = load_tax_year_config(&text);

        assert!(matches!(
            result,
            Err(ConfigLoadError::Invalid(
                TaxYearConfigError::InvalidPhaseOutStep(_)
            ))
        ));
    }

    #[test]
    fn test_load_rejects_malformed_brackets() {
        // Opens a gap between the first and second Single brackets.
        let text = CONFIG_2024.replacen("min_income = 11000", "min_income = 12000", 1);

        let result = load_tax_year_config(&text);

        let err = result.expect_err("Should reject gap");
        let ConfigLoadError::Parse(inner) = err else {
            panic!("Expected Parse error, got: {:?}", err);
        };
        assert!(
            inner.to_string().contains(FilingStatus::Single.display_name()),
            "Expected status in error, got: {}",
            inner
        );
    }

    #[test]
    fn test_load_rejects_missing_section() {
        let text = CONFIG_2024.replace("[adjustments]", "[unused]");

        let result = load_tax_year_config(&text);

        assert!(matches!(result, Err(ConfigLoadError::Parse(_))));
    }

    #[test]
    fn test_load_file_reports_path() {
        let result = load_tax_year_config_file("does/not/exist.toml");

        match result {
            Err(ConfigLoadError::Io { path, .. }) => {
                assert_eq!(path, PathBuf::from("does/not/exist.toml"));
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_loaded_amounts_are_exact() {
        let config = load_tax_year_config(CONFIG_2024).expect("Failed to load config");

        assert_eq!(
            config.brackets.schedule(FilingStatus::Single)[1].tax_rate,
            dec!(0.12)
        );
        assert_eq!(config.standard_deduction.additional_unmarried, dec!(1550));
    }
}
