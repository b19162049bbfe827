mod dependent;
mod filing_status;
mod return_inputs;
mod return_results;
mod tax_bracket;
mod tax_year_config;
mod taxpayer_info;
mod w2_record;

pub use dependent::Dependent;
pub use filing_status::{ByFilingStatus, FilingStatus};
pub use return_inputs::ReturnInputs;
pub use return_results::ReturnResults;
pub use tax_bracket::{BracketTable, BracketTableError, TaxBracket};
pub use tax_year_config::{
    AdjustmentLimits, CreditAmounts, EarnedIncomeCreditPlaceholder, StandardDeductionAmounts,
    TaxYearConfig, TaxYearConfigError,
};
pub use taxpayer_info::TaxpayerInfo;
pub use w2_record::W2Record;
