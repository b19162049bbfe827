use std::sync::LazyLock;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{BracketTable, ByFilingStatus};

/// Errors in a [`TaxYearConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxYearConfigError {
    /// A policy amount that must not be negative is negative.
    #[error("{field} must be non-negative, got {value}")]
    NegativeAmount { field: &'static str, value: Decimal },

    /// The phase-out step divides the excess AGI, so it must be positive.
    #[error("phase-out step must be positive, got {0}")]
    InvalidPhaseOutStep(Decimal),
}

/// Standard deduction amounts for one tax year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardDeductionAmounts {
    /// Base deduction by filing status.
    pub base: ByFilingStatus<Decimal>,

    /// Per-person addend for age 65+ or blindness when filing MFJ or MFS.
    pub additional_married: Decimal,

    /// Per-person addend for age 65+ or blindness for every other status.
    pub additional_unmarried: Decimal,

    /// Flat amount for a taxpayer who can be claimed as someone's dependent.
    pub dependent_minimum: Decimal,

    /// Age at which the age addend applies.
    pub elderly_age: u32,
}

/// Child Tax Credit and Credit for Other Dependents parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditAmounts {
    pub per_qualifying_child: Decimal,
    pub per_other_dependent: Decimal,

    /// A dependent must be younger than this (in calendar years) to be a
    /// qualifying child for the Child Tax Credit.
    pub qualifying_child_age_limit: i32,

    /// AGI above which both credits phase out.
    pub phase_out_threshold: ByFilingStatus<Decimal>,

    /// Credit removed per full step of excess AGI.
    pub phase_out_reduction: Decimal,

    /// Size of one step of excess AGI.
    pub phase_out_step: Decimal,
}

/// Parameters of the Earned Income Credit placeholder.
///
/// These are not the IRS EIC tables. They give an order-of-magnitude amount
/// for low-income filers with children until a real EIC computation exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarnedIncomeCreditPlaceholder {
    /// AGI ceiling indexed by qualifying children: 0, 1, 2, 3 or more.
    pub agi_ceiling_by_children: [Decimal; 4],

    /// Added to the ceiling on a joint return.
    pub joint_ceiling_bonus: Decimal,

    /// Amount per qualifying child.
    pub per_child: Decimal,

    /// Cap on the total placeholder amount.
    pub maximum: Decimal,

    /// AGI under which the eligibility preview reports the EIC as available.
    pub preview_agi_limit: Decimal,
}

/// Above-the-line adjustment limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustmentLimits {
    /// Most student loan interest that reduces AGI.
    pub student_loan_interest_cap: Decimal,

    /// AGI under which the eligibility preview reports the student loan
    /// interest deduction as available.
    pub student_loan_interest_phase_out: ByFilingStatus<Decimal>,
}

/// Every rate, threshold, and amount the simple-return engine needs for one
/// tax year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxYearConfig {
    pub tax_year: i32,
    pub brackets: BracketTable,
    pub standard_deduction: StandardDeductionAmounts,
    pub credits: CreditAmounts,
    pub earned_income_credit: EarnedIncomeCreditPlaceholder,
    pub adjustments: AdjustmentLimits,
}

static FEDERAL_2024: LazyLock<TaxYearConfig> = LazyLock::new(TaxYearConfig::build_federal_2024);

impl TaxYearConfig {
    /// The built-in 2024 configuration.
    pub fn federal_2024() -> &'static TaxYearConfig {
        &FEDERAL_2024
    }

    fn build_federal_2024() -> Self {
        Self {
            tax_year: 2024,
            brackets: BracketTable::federal_2024(),
            standard_deduction: StandardDeductionAmounts {
                base: ByFilingStatus {
                    single: dec!(14600),
                    married_filing_jointly: dec!(29200),
                    married_filing_separately: dec!(14600),
                    head_of_household: dec!(21900),
                    qualifying_widow: dec!(29200),
                },
                additional_married: dec!(1300),
                additional_unmarried: dec!(1550),
                dependent_minimum: dec!(1300),
                elderly_age: 65,
            },
            credits: CreditAmounts {
                per_qualifying_child: dec!(2000),
                per_other_dependent: dec!(500),
                qualifying_child_age_limit: 17,
                phase_out_threshold: ByFilingStatus {
                    single: dec!(200000),
                    married_filing_jointly: dec!(400000),
                    married_filing_separately: dec!(200000),
                    head_of_household: dec!(200000),
                    qualifying_widow: dec!(400000),
                },
                phase_out_reduction: dec!(50),
                phase_out_step: dec!(1000),
            },
            earned_income_credit: EarnedIncomeCreditPlaceholder {
                agi_ceiling_by_children: [dec!(18650), dec!(46560), dec!(52918), dec!(56838)],
                joint_ceiling_bonus: dec!(6000),
                per_child: dec!(1000),
                maximum: dec!(2000),
                preview_agi_limit: dec!(63000),
            },
            adjustments: AdjustmentLimits {
                student_loan_interest_cap: dec!(2500),
                student_loan_interest_phase_out: ByFilingStatus {
                    single: dec!(90000),
                    married_filing_jointly: dec!(185000),
                    married_filing_separately: dec!(90000),
                    head_of_household: dec!(90000),
                    qualifying_widow: dec!(90000),
                },
            },
        }
    }

    /// Checks the policy amounts.
    ///
    /// The bracket table is already valid by construction; this covers the
    /// scalar amounts a hand-edited configuration file could get wrong.
    ///
    /// # Errors
    ///
    /// Returns the first invalid amount found.
    pub fn validate(&self) -> Result<(), TaxYearConfigError> {
        let sd = &self.standard_deduction;
        for (_, amount) in sd.base.iter() {
            non_negative("standard_deduction.base", *amount)?;
        }
        non_negative("standard_deduction.additional_married", sd.additional_married)?;
        non_negative("standard_deduction.additional_unmarried", sd.additional_unmarried)?;
        non_negative("standard_deduction.dependent_minimum", sd.dependent_minimum)?;

        let credits = &self.credits;
        non_negative("credits.per_qualifying_child", credits.per_qualifying_child)?;
        non_negative("credits.per_other_dependent", credits.per_other_dependent)?;
        non_negative("credits.phase_out_reduction", credits.phase_out_reduction)?;
        for (_, threshold) in credits.phase_out_threshold.iter() {
            non_negative("credits.phase_out_threshold", *threshold)?;
        }
        if credits.phase_out_step <= Decimal::ZERO {
            return Err(TaxYearConfigError::InvalidPhaseOutStep(credits.phase_out_step));
        }

        let eic = &self.earned_income_credit;
        for ceiling in eic.agi_ceiling_by_children {
            non_negative("earned_income_credit.agi_ceiling_by_children", ceiling)?;
        }
        non_negative("earned_income_credit.joint_ceiling_bonus", eic.joint_ceiling_bonus)?;
        non_negative("earned_income_credit.per_child", eic.per_child)?;
        non_negative("earned_income_credit.maximum", eic.maximum)?;

        non_negative(
            "adjustments.student_loan_interest_cap",
            self.adjustments.student_loan_interest_cap,
        )?;

        Ok(())
    }
}

fn non_negative(
    field: &'static str,
    value: Decimal,
) -> Result<(), TaxYearConfigError> {
    if value < Decimal::ZERO {
        Err(TaxYearConfigError::NegativeAmount { field, value })
    } else {
        Ok(())
    }
}
