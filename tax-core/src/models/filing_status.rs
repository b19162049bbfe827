use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilingStatus {
    #[default]
    Single,
    MarriedFilingJointly,
    MarriedFilingSeparately,
    HeadOfHousehold,
    QualifyingWidow,
}

impl FilingStatus {
    pub const ALL: [FilingStatus; 5] = [
        Self::Single,
        Self::MarriedFilingJointly,
        Self::MarriedFilingSeparately,
        Self::HeadOfHousehold,
        Self::QualifyingWidow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "S",
            Self::MarriedFilingJointly => "MFJ",
            Self::MarriedFilingSeparately => "MFS",
            Self::HeadOfHousehold => "HOH",
            Self::QualifyingWidow => "QW",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "S" => Some(Self::Single),
            "MFJ" => Some(Self::MarriedFilingJointly),
            "MFS" => Some(Self::MarriedFilingSeparately),
            "HOH" => Some(Self::HeadOfHousehold),
            "QW" => Some(Self::QualifyingWidow),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::MarriedFilingJointly => "Married Filing Jointly",
            Self::MarriedFilingSeparately => "Married Filing Separately",
            Self::HeadOfHousehold => "Head of Household",
            Self::QualifyingWidow => "Qualifying Widow(er)",
        }
    }

    /// Married filing jointly or separately. Selects the "married" additional
    /// standard deduction amount.
    pub fn is_married(&self) -> bool {
        matches!(
            self,
            Self::MarriedFilingJointly | Self::MarriedFilingSeparately
        )
    }

    /// Only a joint return carries the spouse's age and blindness addends.
    pub fn is_joint(&self) -> bool {
        matches!(self, Self::MarriedFilingJointly)
    }
}

impl fmt::Display for FilingStatus {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One value per filing status.
///
/// Every status-keyed table in the engine is stored as a `ByFilingStatus`, so
/// [`ByFilingStatus::get`] is the single exhaustive lookup. A new filing status
/// cannot be added without giving every table a value for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ByFilingStatus<T> {
    pub single: T,
    pub married_filing_jointly: T,
    pub married_filing_separately: T,
    pub head_of_household: T,
    pub qualifying_widow: T,
}

impl<T> ByFilingStatus<T> {
    pub fn get(
        &self,
        status: FilingStatus,
    ) -> &T {
        match status {
            FilingStatus::Single => &self.single,
            FilingStatus::MarriedFilingJointly => &self.married_filing_jointly,
            FilingStatus::MarriedFilingSeparately => &self.married_filing_separately,
            FilingStatus::HeadOfHousehold => &self.head_of_household,
            FilingStatus::QualifyingWidow => &self.qualifying_widow,
        }
    }

    /// Builds a table by evaluating `f` once per status.
    pub fn from_fn(mut f: impl FnMut(FilingStatus) -> T) -> Self {
        Self {
            single: f(FilingStatus::Single),
            married_filing_jointly: f(FilingStatus::MarriedFilingJointly),
            married_filing_separately: f(FilingStatus::MarriedFilingSeparately),
            head_of_household: f(FilingStatus::HeadOfHousehold),
            qualifying_widow: f(FilingStatus::QualifyingWidow),
        }
    }

    /// Iterates in [`FilingStatus::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (FilingStatus, &T)> {
        FilingStatus::ALL
            .into_iter()
            .map(move |status| (status, self.get(status)))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn codes_round_trip_for_every_status() {
        for status in FilingStatus::ALL {
            assert_eq!(FilingStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn parse_rejects_unknown_code() {
        assert_eq!(FilingStatus::parse("QSS"), None);
        assert_eq!(FilingStatus::parse("s"), None);
    }

    #[test]
    fn married_covers_joint_and_separate_only() {
        let married: Vec<_> = FilingStatus::ALL
            .into_iter()
            .filter(FilingStatus::is_married)
            .collect();

        assert_eq!(
            married,
            vec![
                FilingStatus::MarriedFilingJointly,
                FilingStatus::MarriedFilingSeparately
            ]
        );
    }

    #[test]
    fn qualifying_widow_is_not_married_for_addends() {
        assert!(!FilingStatus::QualifyingWidow.is_married());
        assert!(!FilingStatus::QualifyingWidow.is_joint());
    }

    #[test]
    fn serializes_in_snake_case() {
        let json = serde_json::to_string(&FilingStatus::MarriedFilingJointly).unwrap();

        assert_eq!(json, "\"married_filing_jointly\"");
    }

    #[test]
    fn by_filing_status_get_matches_from_fn() {
        let table = ByFilingStatus::from_fn(|status| status.as_str());

        for status in FilingStatus::ALL {
            assert_eq!(*table.get(status), status.as_str());
        }
    }

    #[test]
    fn by_filing_status_iter_follows_all_order() {
        let table = ByFilingStatus::from_fn(|status| status);
        let order: Vec<_> = table.iter().map(|(status, _)| status).collect();

        assert_eq!(order, FilingStatus::ALL.to_vec());
    }
}
