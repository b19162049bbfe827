use serde::{Deserialize, Serialize};

use crate::models::FilingStatus;

/// Filing status and the demographic flags that drive the standard deduction.
///
/// `spouse_age` and `is_spouse_blind` are only consulted on a joint return.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaxpayerInfo {
    pub filing_status: FilingStatus,
    pub age: u32,
    #[serde(default)]
    pub spouse_age: Option<u32>,
    #[serde(default)]
    pub is_blind: bool,
    #[serde(default)]
    pub is_spouse_blind: bool,
    #[serde(default)]
    pub can_be_claimed_as_dependent: bool,
}
