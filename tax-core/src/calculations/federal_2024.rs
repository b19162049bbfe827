//! Shorthand over the built-in 2024 configuration.
//!
//! These are re-exported from the crate root for callers that only ever work
//! with the 2024 tables.

use rust_decimal::Decimal;

use crate::calculations::tax_brackets;
use crate::models::{FilingStatus, TaxYearConfig};

/// [`tax_brackets::compute_tax`] with the 2024 rate schedules.
pub fn compute_tax(
    taxable_income: Decimal,
    status: FilingStatus,
) -> Decimal {
    tax_brackets::compute_tax(&TaxYearConfig::federal_2024().brackets, taxable_income, status)
}

/// [`tax_brackets::marginal_rate`] with the 2024 rate schedules.
pub fn marginal_rate(
    taxable_income: Decimal,
    status: FilingStatus,
) -> Decimal {
    tax_brackets::marginal_rate(&TaxYearConfig::federal_2024().brackets, taxable_income, status)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn compute_tax_uses_2024_schedules() {
        assert_eq!(compute_tax(dec!(50000), FilingStatus::Single), dec!(6308));
        assert_eq!(
            compute_tax(dec!(50000), FilingStatus::MarriedFilingJointly),
            dec!(5560)
        );
    }

    #[test]
    fn marginal_rate_uses_2024_schedules() {
        assert_eq!(
            marginal_rate(dec!(95375), FilingStatus::Single),
            dec!(0.22)
        );
        assert_eq!(
            marginal_rate(dec!(95376), FilingStatus::Single),
            dec!(0.24)
        );
    }
}
