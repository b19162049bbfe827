//! Simple federal return: wages and a few other income items, standard
//! deduction, and dependent credits.
//!
//! # Calculation Order
//!
//! | Step | Value |
//! |------|-------|
//! | 1    | Adjusted gross income: wages + interest + unemployment - student loan interest (capped), minimum 0 |
//! | 2    | Standard deduction |
//! | 3    | Taxable income: Step 1 - Step 2, minimum 0 |
//! | 4    | Gross tax from the rate schedules |
//! | 5    | Child Tax Credit and Credit for Other Dependents (against AGI) |
//! | 6    | Income tax: Step 4 - Step 5 credits, minimum 0 |
//! | 7    | Total withheld: W-2 withholding + estimated payments |
//! | 8    | Refund or amount due: Step 7 - Step 6 (positive is a refund) |
//! | 9    | Effective rate (Step 6 / Step 3) and marginal rate |
//!
//! The calculation never fails. Absent optional amounts count as zero, and
//! AGI, taxable income, and income tax are clamped at zero. Sums saturate at
//! the limits of [`Decimal`] instead of overflowing. Whether the inputs
//! are complete is a separate question answered by
//! [`validate_return_inputs`](crate::calculations::validation::validate_return_inputs).
//!
//! # Earned Income Credit
//!
//! The Earned Income Credit placeholder is not applied to the return, so
//! [`ReturnResults::earned_income_credit`] is always zero here. It switches on
//! at the first dollar of earned income, which would let a raise in wages
//! increase the refund. [`ReturnCalculator::earned_income_credit_preview`]
//! still reports the placeholder amount for display.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::{FilingStatus, ReturnInputs, TaxpayerInfo, W2Record, calculate_return};
//!
//! let inputs = ReturnInputs {
//!     taxpayer_info: Some(TaxpayerInfo {
//!         filing_status: FilingStatus::Single,
//!         age: 30,
//!         ..TaxpayerInfo::default()
//!     }),
//!     w2_forms: vec![W2Record::new("Test Company", "12-3456789", dec!(60000), dec!(8000))],
//!     interest_income: Some(dec!(500)),
//!     estimated_tax_payments: Some(dec!(1000)),
//!     ..ReturnInputs::default()
//! };
//!
//! let result = calculate_return(&inputs);
//!
//! assert_eq!(result.adjusted_gross_income, dec!(60500));
//! assert_eq!(result.taxable_income, dec!(45900));
//! assert_eq!(result.income_tax, dec!(5406));
//! assert_eq!(result.refund_or_amount_due, dec!(3594));
//! ```

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::calculations::common::{floor_at_zero, saturating_sum};
use crate::calculations::credits::{
    compute_child_tax_credit, compute_credit_for_other_dependents, compute_earned_income_credit,
    number_of_qualifying_children,
};
use crate::calculations::standard_deduction::compute_standard_deduction;
use crate::calculations::tax_brackets::{compute_tax, effective_rate, marginal_rate};
use crate::models::{
    ReturnInputs, ReturnResults, TaxYearConfig, TaxYearConfigError, TaxpayerInfo, W2Record,
};

/// Optional amounts from [`ReturnInputs`] with absence resolved to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OtherAmounts {
    interest_income: Decimal,
    unemployment_compensation: Decimal,
    student_loan_interest_paid: Decimal,
    estimated_tax_payments: Decimal,
}

impl OtherAmounts {
    fn from_inputs(inputs: &ReturnInputs) -> Self {
        Self {
            interest_income: inputs.interest_income.unwrap_or_default(),
            unemployment_compensation: inputs.unemployment_compensation.unwrap_or_default(),
            student_loan_interest_paid: inputs.student_loan_interest_paid.unwrap_or_default(),
            estimated_tax_payments: inputs.estimated_tax_payments.unwrap_or_default(),
        }
    }
}

/// Calculator for a simple return under one tax year's configuration.
#[derive(Debug, Clone)]
pub struct ReturnCalculator<'a> {
    config: &'a TaxYearConfig,
}

impl<'a> ReturnCalculator<'a> {
    /// Binds a calculator to `config` after checking it.
    ///
    /// # Errors
    ///
    /// Returns [`TaxYearConfigError`] if any policy amount is invalid.
    pub fn new(config: &'a TaxYearConfig) -> Result<Self, TaxYearConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &'a TaxYearConfig {
        self.config
    }

    /// Calculates the complete return.
    ///
    /// Missing taxpayer information is treated as a single filer under 65
    /// with no flags set.
    pub fn calculate(
        &self,
        inputs: &ReturnInputs,
    ) -> ReturnResults {
        let default_taxpayer = TaxpayerInfo::default();
        let taxpayer = inputs.taxpayer_info.as_ref().unwrap_or(&default_taxpayer);
        let status = taxpayer.filing_status;
        let amounts = OtherAmounts::from_inputs(inputs);
        warn_on_negative_w2_amounts(&inputs.w2_forms);

        let adjusted_gross_income = self.adjusted_gross_income(&inputs.w2_forms, &amounts);
        let standard_deduction =
            compute_standard_deduction(&self.config.standard_deduction, taxpayer);
        let taxable_income = self.taxable_income(adjusted_gross_income, standard_deduction);
        let gross_tax = compute_tax(&self.config.brackets, taxable_income, status);

        let year = self.config.tax_year;
        let credits = &self.config.credits;
        let child_tax_credit = compute_child_tax_credit(
            credits,
            &inputs.dependents,
            adjusted_gross_income,
            status,
            year,
        );
        let credit_for_other_dependents = compute_credit_for_other_dependents(
            credits,
            &inputs.dependents,
            adjusted_gross_income,
            status,
            year,
        );
        let income_tax =
            self.tax_after_credits(gross_tax, child_tax_credit + credit_for_other_dependents);
        let total_tax_withheld = self.total_withholding(&inputs.w2_forms, &amounts);
        let refund_or_amount_due = total_tax_withheld.saturating_sub(income_tax);

        debug!(
            %adjusted_gross_income,
            %standard_deduction,
            %taxable_income,
            %gross_tax,
            %income_tax,
            %refund_or_amount_due,
            "calculated simple return"
        );

        ReturnResults {
            adjusted_gross_income,
            standard_deduction,
            taxable_income,
            gross_tax,
            income_tax,
            total_tax_withheld,
            refund_or_amount_due,
            child_tax_credit,
            credit_for_other_dependents,
            // Preview only; see the module docs.
            earned_income_credit: Decimal::ZERO,
            effective_tax_rate: effective_rate(income_tax, taxable_income),
            marginal_tax_rate: marginal_rate(&self.config.brackets, taxable_income, status),
        }
    }

    /// Earned Income Credit placeholder for `inputs`, for display beside the
    /// return. Not included in [`ReturnCalculator::calculate`].
    pub fn earned_income_credit_preview(
        &self,
        inputs: &ReturnInputs,
    ) -> Decimal {
        let status = inputs
            .taxpayer_info
            .as_ref()
            .map(|taxpayer| taxpayer.filing_status)
            .unwrap_or_default();
        let amounts = OtherAmounts::from_inputs(inputs);
        let agi = self.adjusted_gross_income(&inputs.w2_forms, &amounts);
        let year = self.config.tax_year;

        compute_earned_income_credit(
            &self.config.earned_income_credit,
            earned_income(&inputs.w2_forms),
            agi,
            status,
            number_of_qualifying_children(&self.config.credits, &inputs.dependents, year),
        )
    }

    /// Calculates the return only once there is something to calculate:
    /// taxpayer information and at least one W-2.
    ///
    /// `None` means "no results yet", which a caller should present
    /// differently from a result that happens to be zero or negative.
    pub fn try_calculate(
        &self,
        inputs: &ReturnInputs,
    ) -> Option<ReturnResults> {
        if inputs.taxpayer_info.is_none() || inputs.w2_forms.is_empty() {
            debug!(
                has_taxpayer_info = inputs.taxpayer_info.is_some(),
                w2_count = inputs.w2_forms.len(),
                "not enough inputs to calculate"
            );
            return None;
        }

        Some(self.calculate(inputs))
    }

    /// Step 1: wages plus other income, less capped student loan interest.
    fn adjusted_gross_income(
        &self,
        w2_forms: &[W2Record],
        amounts: &OtherAmounts,
    ) -> Decimal {
        let student_loan_deduction = amounts
            .student_loan_interest_paid
            .min(self.config.adjustments.student_loan_interest_cap);

        let agi = saturating_sum(w2_forms.iter().map(|w2| w2.wages).chain([
            amounts.interest_income,
            amounts.unemployment_compensation,
        ]))
        .saturating_sub(student_loan_deduction);
        if agi < Decimal::ZERO {
            debug!(%agi, "adjusted gross income below zero; using zero");
        }
        floor_at_zero(agi)
    }

    /// Step 3: taxable income.
    fn taxable_income(
        &self,
        agi: Decimal,
        standard_deduction: Decimal,
    ) -> Decimal {
        floor_at_zero(agi - standard_deduction)
    }

    /// Step 6: tax after credits.
    fn tax_after_credits(
        &self,
        gross_tax: Decimal,
        credits: Decimal,
    ) -> Decimal {
        floor_at_zero(gross_tax - credits)
    }

    /// Step 7: federal withholding from every W-2 plus estimated payments.
    fn total_withholding(
        &self,
        w2_forms: &[W2Record],
        amounts: &OtherAmounts,
    ) -> Decimal {
        saturating_sum(
            w2_forms
                .iter()
                .map(|w2| w2.federal_tax_withheld)
                .chain([amounts.estimated_tax_payments]),
        )
    }
}

impl ReturnCalculator<'static> {
    /// Calculator over the built-in 2024 configuration.
    pub fn federal_2024() -> Self {
        Self {
            config: TaxYearConfig::federal_2024(),
        }
    }
}

/// Earned income for the Earned Income Credit: total W-2 wages.
pub fn earned_income(w2_forms: &[W2Record]) -> Decimal {
    saturating_sum(w2_forms.iter().map(|w2| w2.wages))
}

/// [`ReturnCalculator::calculate`] with the built-in 2024 configuration.
pub fn calculate_return(inputs: &ReturnInputs) -> ReturnResults {
    ReturnCalculator::federal_2024().calculate(inputs)
}

/// [`ReturnCalculator::try_calculate`] with the built-in 2024 configuration.
pub fn try_calculate_return(inputs: &ReturnInputs) -> Option<ReturnResults> {
    ReturnCalculator::federal_2024().try_calculate(inputs)
}

fn warn_on_negative_w2_amounts(w2_forms: &[W2Record]) {
    for (index, w2) in w2_forms.iter().enumerate() {
        if w2.wages < Decimal::ZERO || w2.federal_tax_withheld < Decimal::ZERO {
            warn!(
                w2 = index + 1,
                wages = %w2.wages,
                federal_tax_withheld = %w2.federal_tax_withheld,
                "W-2 has a negative amount"
            );
        }
    }
}
