pub mod calculations;
pub mod models;

pub use calculations::federal_2024::{compute_tax, marginal_rate};
pub use calculations::{
    ReturnCalculator, ValidationError, calculate_return, effective_rate, try_calculate_return,
    validate_return_inputs,
};
pub use models::*;
