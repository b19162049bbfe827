use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Dependent, TaxpayerInfo, W2Record};

/// Everything the user has entered for a simple return.
///
/// This is the value a caller persists between sessions. Optional amounts
/// are absent until entered and count as zero in the calculation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReturnInputs {
    pub taxpayer_info: Option<TaxpayerInfo>,
    #[serde(default)]
    pub w2_forms: Vec<W2Record>,
    #[serde(default)]
    pub dependents: Vec<Dependent>,

    // Other income and adjustments
    #[serde(default)]
    pub interest_income: Option<Decimal>,
    #[serde(default)]
    pub unemployment_compensation: Option<Decimal>,
    #[serde(default)]
    pub student_loan_interest_paid: Option<Decimal>,
    #[serde(default)]
    pub estimated_tax_payments: Option<Decimal>,
}
