use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Output of the simple-return calculation.
///
/// Always produced whole by the calculator; never patched field by field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnResults {
    pub adjusted_gross_income: Decimal,
    pub standard_deduction: Decimal,
    pub taxable_income: Decimal,

    /// Tax from the rate schedule, before credits.
    pub gross_tax: Decimal,
    /// Tax after credits, floored at zero.
    pub income_tax: Decimal,

    /// W-2 withholding plus estimated payments.
    pub total_tax_withheld: Decimal,
    /// Positive is a refund, negative is an amount owed.
    pub refund_or_amount_due: Decimal,

    pub child_tax_credit: Decimal,
    pub credit_for_other_dependents: Decimal,
    /// Zero from the return calculation. The placeholder amount is available
    /// from [`crate::calculations::ReturnCalculator::earned_income_credit_preview`].
    pub earned_income_credit: Decimal,

    pub effective_tax_rate: Decimal,
    pub marginal_tax_rate: Decimal,
}

impl ReturnResults {
    pub fn is_refund(&self) -> bool {
        self.refund_or_amount_due > Decimal::ZERO
    }
}
