//! Child Tax Credit, Credit for Other Dependents, and the Earned Income Credit
//! placeholder.
//!
//! Dependents are split into two disjoint groups. A dependent flagged as a
//! qualifying child who is younger than
//! [`CreditAmounts::qualifying_child_age_limit`] in the reference year counts
//! toward the Child Tax Credit; every other dependent counts toward the Credit
//! for Other Dependents.
//!
//! Both credits phase out above the same AGI threshold at the same rate, but
//! each is reduced and floored at zero on its own.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//! use tax_core::calculations::credits::compute_child_tax_credit;
//! use tax_core::{Dependent, FilingStatus, TaxYearConfig};
//!
//! let config = TaxYearConfig::federal_2024();
//! let child = Dependent {
//!     name: "Child One".to_string(),
//!     ssn: "123-45-6789".to_string(),
//!     relationship: "Son".to_string(),
//!     birth_date: NaiveDate::from_ymd_opt(2015, 1, 1),
//!     is_qualifying_child: true,
//!     is_disabled: false,
//! };
//!
//! let credit = compute_child_tax_credit(
//!     &config.credits,
//!     &[child],
//!     dec!(75000),
//!     FilingStatus::Single,
//!     config.tax_year,
//! );
//!
//! assert_eq!(credit, dec!(2000));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::floor_at_zero;
use crate::models::{
    CreditAmounts, Dependent, EarnedIncomeCreditPlaceholder, FilingStatus, TaxYearConfig,
};

/// Quick AGI-only eligibility preview for the credits and adjustments the
/// simple return supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditEligibility {
    pub child_tax_credit: bool,
    pub earned_income_credit: bool,
    pub student_loan_interest: bool,
}

/// Whether `dependent` is a qualifying child for the Child Tax Credit.
///
/// Age is `reference_year - birth year`. A dependent with no birth date does
/// not qualify.
pub fn is_qualifying_child_for_ctc(
    credits: &CreditAmounts,
    dependent: &Dependent,
    reference_year: i32,
) -> bool {
    dependent.is_qualifying_child
        && dependent
            .age_in_year(reference_year)
            .is_some_and(|age| age < credits.qualifying_child_age_limit)
}

pub fn number_of_qualifying_children(
    credits: &CreditAmounts,
    dependents: &[Dependent],
    reference_year: i32,
) -> usize {
    dependents
        .iter()
        .filter(|d| is_qualifying_child_for_ctc(credits, d, reference_year))
        .count()
}

/// Child Tax Credit: a fixed amount per qualifying child, reduced by the AGI
/// phase-out.
pub fn compute_child_tax_credit(
    credits: &CreditAmounts,
    dependents: &[Dependent],
    agi: Decimal,
    status: FilingStatus,
    reference_year: i32,
) -> Decimal {
    let children = number_of_qualifying_children(credits, dependents, reference_year);
    let credit = credits.per_qualifying_child * Decimal::from(children);

    apply_phase_out(credits, credit, agi, status)
}

/// Credit for Other Dependents: a fixed amount per dependent who is not a
/// qualifying child for the Child Tax Credit, reduced by the AGI phase-out.
pub fn compute_credit_for_other_dependents(
    credits: &CreditAmounts,
    dependents: &[Dependent],
    agi: Decimal,
    status: FilingStatus,
    reference_year: i32,
) -> Decimal {
    let children = number_of_qualifying_children(credits, dependents, reference_year);
    let others = dependents.len() - children;
    let credit = credits.per_other_dependent * Decimal::from(others);

    apply_phase_out(credits, credit, agi, status)
}

/// Earned Income Credit **placeholder**.
///
/// Not the IRS computation. The filer is eligible when AGI is at or below a
/// ceiling that depends on the number of qualifying children (raised on a
/// joint return) and earned income is positive. An eligible filer gets a
/// fixed amount per qualifying child up to a cap; a filer without qualifying
/// children gets nothing.
///
/// The amount jumps at the first dollar of earned income, so the return
/// calculation shows it as a preview and does not subtract it from tax.
pub fn compute_earned_income_credit(
    eic: &EarnedIncomeCreditPlaceholder,
    earned_income: Decimal,
    agi: Decimal,
    status: FilingStatus,
    qualifying_children: usize,
) -> Decimal {
    let index = qualifying_children.min(eic.agi_ceiling_by_children.len() - 1);
    let mut ceiling = eic.agi_ceiling_by_children[index];
    if status.is_joint() {
        ceiling += eic.joint_ceiling_bonus;
    }

    if agi > ceiling || earned_income <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    (eic.per_child * Decimal::from(qualifying_children)).min(eic.maximum)
}

/// AGI-only eligibility preview.
///
/// Each flag is true when AGI is strictly below the relevant limit. This is a
/// hint for the UI; the credit functions above decide the actual amounts.
pub fn credit_eligibility(
    config: &TaxYearConfig,
    agi: Decimal,
    status: FilingStatus,
) -> CreditEligibility {
    CreditEligibility {
        child_tax_credit: agi < *config.credits.phase_out_threshold.get(status),
        earned_income_credit: agi < config.earned_income_credit.preview_agi_limit,
        student_loan_interest: agi
            < *config
                .adjustments
                .student_loan_interest_phase_out
                .get(status),
    }
}

/// Reduces `credit` by a fixed amount per full step of AGI over the
/// threshold, never below zero.
///
/// A non-positive step disables the phase-out. [`TaxYearConfig::validate`]
/// rejects such a step; hand-built amounts may still carry one.
fn apply_phase_out(
    credits: &CreditAmounts,
    credit: Decimal,
    agi: Decimal,
    status: FilingStatus,
) -> Decimal {
    let threshold = *credits.phase_out_threshold.get(status);
    if agi <= threshold || credits.phase_out_step <= Decimal::ZERO {
        return credit;
    }

    let steps = ((agi - threshold) / credits.phase_out_step).floor();
    floor_at_zero(credit - steps * credits.phase_out_reduction)
}
