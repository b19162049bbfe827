//! Completeness checks for return inputs.
//!
//! Validation is advisory. [`calculate_return`](crate::calculate_return) runs
//! on incomplete inputs regardless; these checks tell the user what is still
//! missing or out of range. Problems are reported in a fixed order: taxpayer
//! information, W-2 forms, dependents, then the other amounts.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{Dependent, ReturnInputs, W2Record};

/// A single problem with the inputs. W-2 and dependent indexes are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Taxpayer information is required")]
    MissingTaxpayerInfo,

    #[error("At least one W-2 form is required")]
    NoW2Forms,

    #[error("W-2 #{0}: Employer name is required")]
    MissingEmployerName(usize),

    #[error("W-2 #{0}: Employer EIN is required")]
    MissingEmployerEin(usize),

    #[error("W-2 #{0}: Wages cannot be negative")]
    NegativeWages(usize),

    #[error("W-2 #{0}: Federal tax withheld cannot be negative")]
    NegativeWithholding(usize),

    #[error("Dependent #{0}: Name is required")]
    MissingDependentName(usize),

    #[error("Dependent #{0}: SSN is required")]
    MissingDependentSsn(usize),

    #[error("Dependent #{0}: Birth date is required")]
    MissingBirthDate(usize),

    #[error("Interest income cannot be negative")]
    NegativeInterestIncome,

    #[error("Unemployment compensation cannot be negative")]
    NegativeUnemploymentCompensation,

    #[error("Student loan interest paid cannot be negative")]
    NegativeStudentLoanInterest,

    #[error("Estimated tax payments cannot be negative")]
    NegativeEstimatedPayments,
}

/// Every problem with `inputs`, in report order. Empty when the inputs are
/// complete.
pub fn validation_errors(inputs: &ReturnInputs) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if inputs.taxpayer_info.is_none() {
        errors.push(ValidationError::MissingTaxpayerInfo);
    }

    if inputs.w2_forms.is_empty() {
        errors.push(ValidationError::NoW2Forms);
    }
    for (index, w2) in inputs.w2_forms.iter().enumerate() {
        check_w2(index + 1, w2, &mut errors);
    }

    for (index, dependent) in inputs.dependents.iter().enumerate() {
        check_dependent(index + 1, dependent, &mut errors);
    }

    let amounts = [
        (
            inputs.interest_income,
            ValidationError::NegativeInterestIncome,
        ),
        (
            inputs.unemployment_compensation,
            ValidationError::NegativeUnemploymentCompensation,
        ),
        (
            inputs.student_loan_interest_paid,
            ValidationError::NegativeStudentLoanInterest,
        ),
        (
            inputs.estimated_tax_payments,
            ValidationError::NegativeEstimatedPayments,
        ),
    ];
    for (amount, error) in amounts {
        if is_negative(amount) {
            errors.push(error);
        }
    }

    errors
}

/// Every problem with `inputs` as a display message, in report order.
pub fn validate_return_inputs(inputs: &ReturnInputs) -> Vec<String> {
    validation_errors(inputs)
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn check_w2(
    number: usize,
    w2: &W2Record,
    errors: &mut Vec<ValidationError>,
) {
    if is_blank(&w2.employer_name) {
        errors.push(ValidationError::MissingEmployerName(number));
    }
    if is_blank(&w2.employer_ein) {
        errors.push(ValidationError::MissingEmployerEin(number));
    }
    if w2.wages < Decimal::ZERO {
        errors.push(ValidationError::NegativeWages(number));
    }
    if w2.federal_tax_withheld < Decimal::ZERO {
        errors.push(ValidationError::NegativeWithholding(number));
    }
}

fn check_dependent(
    number: usize,
    dependent: &Dependent,
    errors: &mut Vec<ValidationError>,
) {
    if is_blank(&dependent.name) {
        errors.push(ValidationError::MissingDependentName(number));
    }
    if is_blank(&dependent.ssn) {
        errors.push(ValidationError::MissingDependentSsn(number));
    }
    if dependent.birth_date.is_none() {
        errors.push(ValidationError::MissingBirthDate(number));
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn is_negative(amount: Option<Decimal>) -> bool {
    amount.is_some_and(|a| a < Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::TaxpayerInfo;

    fn complete_inputs() -> ReturnInputs {
        ReturnInputs {
            taxpayer_info: Some(TaxpayerInfo::default()),
            w2_forms: vec![W2Record::new(
                "Test Company",
                "12-3456789",
                dec!(60000),
                dec!(8000),
            )],
            dependents: vec![Dependent {
                name: "Child One".to_string(),
                ssn: "123-45-6789".to_string(),
                relationship: "Son".to_string(),
                birth_date: NaiveDate::from_ymd_opt(2015, 1, 1),
                is_qualifying_child: true,
                is_disabled: false,
            }],
            interest_income: Some(dec!(500)),
            unemployment_compensation: Some(dec!(0)),
            student_loan_interest_paid: None,
            estimated_tax_payments: Some(dec!(1000)),
        }
    }

    // =========================================================================
    // validate_return_inputs tests
    // =========================================================================

    #[test]
    fn complete_inputs_have_no_errors() {
        let result = validate_return_inputs(&complete_inputs());

        assert!(result.is_empty(), "unexpected errors: {result:?}");
    }

    #[test]
    fn empty_inputs_report_taxpayer_then_w2() {
        let result = validate_return_inputs(&ReturnInputs::default());

        assert_eq!(
            result,
            vec![
                "Taxpayer information is required".to_string(),
                "At least one W-2 form is required".to_string(),
            ]
        );
    }

    #[test]
    fn blank_w2_fields_are_reported_with_number() {
        let mut inputs = complete_inputs();
        inputs.w2_forms.push(W2Record::new("  ", "", dec!(-1), dec!(-2)));

        let result = validate_return_inputs(&inputs);

        assert_eq!(
            result,
            vec![
                "W-2 #2: Employer name is required".to_string(),
                "W-2 #2: Employer EIN is required".to_string(),
                "W-2 #2: Wages cannot be negative".to_string(),
                "W-2 #2: Federal tax withheld cannot be negative".to_string(),
            ]
        );
    }

    #[test]
    fn incomplete_dependent_is_reported() {
        let mut inputs = complete_inputs();
        inputs.dependents[0].name = "\t".to_string();
        inputs.dependents[0].ssn = String::new();
        inputs.dependents[0].birth_date = None;

        let result = validate_return_inputs(&inputs);

        assert_eq!(
            result,
            vec![
                "Dependent #1: Name is required".to_string(),
                "Dependent #1: SSN is required".to_string(),
                "Dependent #1: Birth date is required".to_string(),
            ]
        );
    }

    #[test]
    fn negative_amounts_are_reported_in_order() {
        let mut inputs = complete_inputs();
        inputs.interest_income = Some(dec!(-0.01));
        inputs.unemployment_compensation = Some(dec!(-1));
        inputs.student_loan_interest_paid = Some(dec!(-100));
        inputs.estimated_tax_payments = Some(dec!(-5));

        let result = validate_return_inputs(&inputs);

        assert_eq!(
            result,
            vec![
                "Interest income cannot be negative".to_string(),
                "Unemployment compensation cannot be negative".to_string(),
                "Student loan interest paid cannot be negative".to_string(),
                "Estimated tax payments cannot be negative".to_string(),
            ]
        );
    }

    #[test]
    fn zero_amounts_are_valid() {
        let mut inputs = complete_inputs();
        inputs.w2_forms[0].wages = dec!(0);
        inputs.w2_forms[0].federal_tax_withheld = dec!(0);
        inputs.interest_income = Some(dec!(0));

        let result = validate_return_inputs(&inputs);

        assert!(result.is_empty());
    }

    // =========================================================================
    // validation_errors tests
    // =========================================================================

    #[test]
    fn typed_errors_follow_report_order() {
        let inputs = ReturnInputs {
            w2_forms: vec![W2Record::new("Acme", "", dec!(100), dec!(0))],
            estimated_tax_payments: Some(dec!(-1)),
            ..ReturnInputs::default()
        };

        let result = validation_errors(&inputs);

        assert_eq!(
            result,
            vec![
                ValidationError::MissingTaxpayerInfo,
                ValidationError::MissingEmployerEin(1),
                ValidationError::NegativeEstimatedPayments,
            ]
        );
    }
}
