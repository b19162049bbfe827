//! Tax calculation modules for a simple federal Form 1040.
//!
//! Each step of the return has its own module taking the tax-year policy
//! explicitly; [`simple_return`] runs them in order.

pub mod common;
pub mod credits;
pub mod federal_2024;
pub mod simple_return;
pub mod standard_deduction;
pub mod tax_brackets;
pub mod validation;

pub use credits::{
    CreditEligibility, compute_child_tax_credit, compute_credit_for_other_dependents,
    compute_earned_income_credit, credit_eligibility, is_qualifying_child_for_ctc,
    number_of_qualifying_children,
};
pub use simple_return::{ReturnCalculator, calculate_return, earned_income, try_calculate_return};
pub use standard_deduction::{
    AdditionalDeductions, additional_standard_deductions, base_standard_deduction,
    compute_standard_deduction,
};
pub use tax_brackets::{bracket_for, effective_rate};
pub use validation::{ValidationError, validate_return_inputs, validation_errors};
