use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single Form W-2.
///
/// Boxes 3 through 6 are carried for display only; the calculation reads
/// wages (Box 1) and federal withholding (Box 2).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct W2Record {
    pub employer_name: String,
    pub employer_ein: String,

    // Box 1
    pub wages: Decimal,
    // Box 2
    pub federal_tax_withheld: Decimal,

    // Boxes 3-6
    #[serde(default)]
    pub social_security_wages: Option<Decimal>,
    #[serde(default)]
    pub social_security_tax_withheld: Option<Decimal>,
    #[serde(default)]
    pub medicare_wages: Option<Decimal>,
    #[serde(default)]
    pub medicare_tax_withheld: Option<Decimal>,
}

impl W2Record {
    /// A W-2 with only the boxes the calculation uses.
    pub fn new(
        employer_name: impl Into<String>,
        employer_ein: impl Into<String>,
        wages: Decimal,
        federal_tax_withheld: Decimal,
    ) -> Self {
        Self {
            employer_name: employer_name.into(),
            employer_ein: employer_ein.into(),
            wages,
            federal_tax_withheld,
            social_security_wages: None,
            social_security_tax_withheld: None,
            medicare_wages: None,
            medicare_tax_withheld: None,
        }
    }
}
