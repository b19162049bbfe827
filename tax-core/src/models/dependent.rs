use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependent {
    pub name: String,
    pub ssn: String,
    pub relationship: String,
    /// Missing until the user enters it; validation reports the gap.
    pub birth_date: Option<NaiveDate>,
    pub is_qualifying_child: bool,
    #[serde(default)]
    pub is_disabled: bool,
}

impl Dependent {
    /// Age as `reference_year - birth year`.
    ///
    /// Calendar-year approximation: the birthday within the year is ignored.
    /// `None` when no birth date has been entered.
    pub fn age_in_year(
        &self,
        reference_year: i32,
    ) -> Option<i32> {
        self.birth_date
            .map(|birth_date| reference_year - birth_date.year())
    }
}
