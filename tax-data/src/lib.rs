//! Loading tax-year tables from files.
//!
//! Bracket schedules come from CSV using the IRS schedule letters; a complete
//! [`TaxYearConfig`](tax_core::TaxYearConfig) comes from TOML. Both are
//! checked before they are returned, so a table that loads is safe to hand
//! to the calculators.

pub mod config;
pub mod loader;

pub use config::{ConfigLoadError, load_tax_year_config, load_tax_year_config_file};
pub use loader::{TaxBracketLoader, TaxBracketLoaderError, TaxBracketRecord};
