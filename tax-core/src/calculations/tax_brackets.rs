//! Progressive tax from the rate schedules.
//!
//! Each function takes the [`BracketTable`] explicitly so a caller can preview
//! another year's table; the crate root re-exports wrappers over the built-in
//! 2024 table.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::calculations::tax_brackets::{compute_tax, marginal_rate};
//! use tax_core::{BracketTable, FilingStatus};
//!
//! let table = BracketTable::federal_2024();
//!
//! // 10% of 11,000 + 12% of 33,725 + 22% of 5,275 = 6,307.50
//! assert_eq!(compute_tax(&table, dec!(50000), FilingStatus::Single), dec!(6308));
//! assert_eq!(marginal_rate(&table, dec!(50000), FilingStatus::Single), dec!(0.22));
//! ```

use rust_decimal::Decimal;

use crate::calculations::common::round_to_dollar;
use crate::models::{BracketTable, FilingStatus, TaxBracket};

/// Tax on `taxable_income` for `status`, rounded to the nearest dollar.
///
/// Walks the schedule from the bottom, taxing the part of the income that
/// falls in each bracket at that bracket's rate. Income of zero or less owes
/// nothing.
pub fn compute_tax(
    table: &BracketTable,
    taxable_income: Decimal,
    status: FilingStatus,
) -> Decimal {
    if taxable_income <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let mut tax = Decimal::ZERO;
    let mut remaining = taxable_income;

    for bracket in table.schedule(status) {
        if remaining <= Decimal::ZERO {
            break;
        }

        let taxed_here = match bracket.width() {
            Some(width) => remaining.min(width),
            None => remaining,
        };
        tax += taxed_here * bracket.tax_rate;
        remaining -= taxed_here;
    }

    round_to_dollar(tax)
}

/// Rate applied to the next dollar of income.
///
/// Zero for income of zero or less. Income beyond every bounded bracket gets
/// the top bracket's rate.
pub fn marginal_rate(
    table: &BracketTable,
    taxable_income: Decimal,
    status: FilingStatus,
) -> Decimal {
    if taxable_income <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let schedule = table.schedule(status);
    schedule
        .iter()
        .find(|b| b.contains(taxable_income))
        .or(schedule.last())
        .map_or(Decimal::ZERO, |b| b.tax_rate)
}

/// Tax as a fraction of taxable income, unrounded. Zero when there is no
/// taxable income.
pub fn effective_rate(
    tax: Decimal,
    taxable_income: Decimal,
) -> Decimal {
    if taxable_income <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    tax / taxable_income
}

/// The bracket that contains `taxable_income`, or `None` for income of zero
/// or less.
pub fn bracket_for(
    table: &BracketTable,
    taxable_income: Decimal,
    status: FilingStatus,
) -> Option<&TaxBracket> {
    if taxable_income <= Decimal::ZERO {
        return None;
    }

    table
        .schedule(status)
        .iter()
        .find(|b| b.contains(taxable_income))
}
