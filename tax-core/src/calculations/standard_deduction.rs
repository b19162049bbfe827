//! Standard deduction for a simple return.
//!
//! The deduction is the base amount for the filing status plus one addend per
//! qualifying condition:
//!
//! | Condition            | Counts when            |
//! |----------------------|------------------------|
//! | Taxpayer 65 or older | always                 |
//! | Spouse 65 or older   | married filing jointly |
//! | Taxpayer blind       | always                 |
//! | Spouse blind         | married filing jointly |
//!
//! Each addend uses the "married" amount for MFJ and MFS and the "unmarried"
//! amount otherwise. The four addends are independent and add up without a
//! cap.
//!
//! # Dependent filers
//!
//! A taxpayer who can be claimed as someone else's dependent gets the flat
//! [`StandardDeductionAmounts::dependent_minimum`] regardless of filing status.
//! The IRS rule is the greater of that minimum or earned income plus a fixed
//! addend, capped at the ordinary deduction; that rule is not applied here.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{FilingStatus, StandardDeductionAmounts, TaxpayerInfo};

/// Age and blindness addends, broken out for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalDeductions {
    pub age: Decimal,
    pub blindness: Decimal,
    pub total: Decimal,
}

/// Standard deduction for `taxpayer`.
pub fn compute_standard_deduction(
    amounts: &StandardDeductionAmounts,
    taxpayer: &TaxpayerInfo,
) -> Decimal {
    if taxpayer.can_be_claimed_as_dependent {
        return amounts.dependent_minimum;
    }

    base_standard_deduction(amounts, taxpayer.filing_status)
        + additional_standard_deductions(amounts, taxpayer).total
}

/// Base deduction for `status`, before age and blindness addends.
pub fn base_standard_deduction(
    amounts: &StandardDeductionAmounts,
    status: FilingStatus,
) -> Decimal {
    *amounts.base.get(status)
}

/// Age and blindness addends for `taxpayer`.
///
/// Ignores [`TaxpayerInfo::can_be_claimed_as_dependent`]; the caller decides
/// whether the addends apply.
pub fn additional_standard_deductions(
    amounts: &StandardDeductionAmounts,
    taxpayer: &TaxpayerInfo,
) -> AdditionalDeductions {
    let status = taxpayer.filing_status;
    let per_person = if status.is_married() {
        amounts.additional_married
    } else {
        amounts.additional_unmarried
    };

    let spouse_counts = status.is_joint();
    let spouse_elderly =
        spouse_counts && taxpayer.spouse_age.is_some_and(|age| age >= amounts.elderly_age);
    let spouse_blind = spouse_counts && taxpayer.is_spouse_blind;

    let age_count = u32::from(taxpayer.age >= amounts.elderly_age) + u32::from(spouse_elderly);
    let blind_count = u32::from(taxpayer.is_blind) + u32::from(spouse_blind);

    let age = per_person * Decimal::from(age_count);
    let blindness = per_person * Decimal::from(blind_count);

    AdditionalDeductions {
        age,
        blindness,
        total: age + blindness,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::TaxYearConfig;

    fn amounts() -> &'static StandardDeductionAmounts {
        &TaxYearConfig::federal_2024().standard_deduction
    }

    fn taxpayer(
        filing_status: FilingStatus,
        age: u32,
    ) -> TaxpayerInfo {
        TaxpayerInfo {
            filing_status,
            age,
            ..TaxpayerInfo::default()
        }
    }

    fn joint(
        age: u32,
        spouse_age: u32,
    ) -> TaxpayerInfo {
        TaxpayerInfo {
            spouse_age: Some(spouse_age),
            ..taxpayer(FilingStatus::MarriedFilingJointly, age)
        }
    }

    // =========================================================================
    // base deduction tests
    // =========================================================================

    #[test]
    fn single_under_65() {
        let result = compute_standard_deduction(amounts(), &taxpayer(FilingStatus::Single, 35));

        assert_eq!(result, dec!(14600));
    }

    #[test]
    fn joint_both_under_65() {
        let result = compute_standard_deduction(amounts(), &joint(40, 38));

        assert_eq!(result, dec!(29200));
    }

    #[test]
    fn head_of_household_under_65() {
        let result =
            compute_standard_deduction(amounts(), &taxpayer(FilingStatus::HeadOfHousehold, 45));

        assert_eq!(result, dec!(21900));
    }

    #[test]
    fn base_standard_deduction_by_status() {
        assert_eq!(
            base_standard_deduction(amounts(), FilingStatus::QualifyingWidow),
            dec!(29200)
        );
        assert_eq!(
            base_standard_deduction(amounts(), FilingStatus::MarriedFilingSeparately),
            dec!(14600)
        );
    }

    // =========================================================================
    // age addend tests
    // =========================================================================

    #[test]
    fn single_age_67_adds_unmarried_amount() {
        let result = compute_standard_deduction(amounts(), &taxpayer(FilingStatus::Single, 67));

        assert_eq!(result, dec!(16150));
    }

    #[test]
    fn age_65_exactly_qualifies() {
        let result = compute_standard_deduction(amounts(), &taxpayer(FilingStatus::Single, 65));

        assert_eq!(result, dec!(16150));
    }

    #[test]
    fn age_64_does_not_qualify() {
        let result = compute_standard_deduction(amounts(), &taxpayer(FilingStatus::Single, 64));

        assert_eq!(result, dec!(14600));
    }

    #[test]
    fn joint_both_over_65_adds_two_married_amounts() {
        let result = compute_standard_deduction(amounts(), &joint(70, 66));

        assert_eq!(result, dec!(31800));
    }

    #[test]
    fn joint_spouse_only_over_65() {
        let result = compute_standard_deduction(amounts(), &joint(60, 66));

        assert_eq!(result, dec!(30500));
    }

    #[test]
    fn separate_uses_married_amount_and_ignores_spouse() {
        let info = TaxpayerInfo {
            spouse_age: Some(80),
            is_spouse_blind: true,
            ..taxpayer(FilingStatus::MarriedFilingSeparately, 70)
        };

        let result = compute_standard_deduction(amounts(), &info);

        assert_eq!(result, dec!(15900));
    }

    #[test]
    fn widow_uses_unmarried_amount() {
        let result =
            compute_standard_deduction(amounts(), &taxpayer(FilingStatus::QualifyingWidow, 66));

        assert_eq!(result, dec!(30750));
    }

    #[test]
    fn spouse_age_ignored_outside_joint_return() {
        let info = TaxpayerInfo {
            spouse_age: Some(70),
            ..taxpayer(FilingStatus::HeadOfHousehold, 40)
        };

        let result = compute_standard_deduction(amounts(), &info);

        assert_eq!(result, dec!(21900));
    }

    // =========================================================================
    // blindness addend tests
    // =========================================================================

    #[test]
    fn single_blind_adds_unmarried_amount() {
        let info = TaxpayerInfo {
            is_blind: true,
            ..taxpayer(FilingStatus::Single, 30)
        };

        let result = compute_standard_deduction(amounts(), &info);

        assert_eq!(result, dec!(16150));
    }

    #[test]
    fn joint_all_four_addends_stack() {
        let info = TaxpayerInfo {
            is_blind: true,
            is_spouse_blind: true,
            ..joint(68, 67)
        };

        let result = compute_standard_deduction(amounts(), &info);

        // 29,200 + 4 x 1,300
        assert_eq!(result, dec!(34400));
    }

    #[test]
    fn additional_deductions_breakdown() {
        let info = TaxpayerInfo {
            is_spouse_blind: true,
            ..joint(68, 50)
        };

        let result = additional_standard_deductions(amounts(), &info);

        assert_eq!(
            result,
            AdditionalDeductions {
                age: dec!(1300),
                blindness: dec!(1300),
                total: dec!(2600),
            }
        );
    }

    // =========================================================================
    // dependent filer tests
    // =========================================================================

    #[test]
    fn dependent_filer_gets_flat_minimum() {
        let info = TaxpayerInfo {
            can_be_claimed_as_dependent: true,
            ..taxpayer(FilingStatus::Single, 19)
        };

        let result = compute_standard_deduction(amounts(), &info);

        assert_eq!(result, dec!(1300));
    }

    #[test]
    fn dependent_filer_ignores_status_age_and_blindness() {
        let info = TaxpayerInfo {
            can_be_claimed_as_dependent: true,
            is_blind: true,
            is_spouse_blind: true,
            ..joint(70, 70)
        };

        let result = compute_standard_deduction(amounts(), &info);

        assert_eq!(result, dec!(1300));
    }
}
