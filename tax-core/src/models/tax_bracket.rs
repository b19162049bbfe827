use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{ByFilingStatus, FilingStatus};

/// One marginal bracket: income in `(min_income, max_income]` is taxed at
/// `tax_rate`. `max_income` of `None` is the unbounded top bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    pub tax_rate: Decimal,
}

impl TaxBracket {
    /// Width of the bracket, `None` for the unbounded top bracket.
    pub fn width(&self) -> Option<Decimal> {
        self.max_income.map(|max| max - self.min_income)
    }

    /// Whether `income` falls in the open-lower, closed-upper interval.
    pub fn contains(
        &self,
        income: Decimal,
    ) -> bool {
        income > self.min_income && self.max_income.is_none_or(|max| income <= max)
    }
}

/// Structural defects in a bracket schedule. Any of these makes the table
/// unusable; they are reported when the table is built, never during a
/// calculation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BracketTableError {
    #[error("{status}: schedule has no brackets")]
    EmptySchedule { status: FilingStatus },

    #[error("{status}: first bracket starts at {min_income}, expected 0")]
    FirstBracketNotZero {
        status: FilingStatus,
        min_income: Decimal,
    },

    #[error("{status}: gap before bracket {index}: previous ends at {previous_max}, next starts at {min_income}")]
    Gap {
        status: FilingStatus,
        index: usize,
        previous_max: Decimal,
        min_income: Decimal,
    },

    #[error("{status}: bracket {index} overlaps the previous one: previous ends at {previous_max}, next starts at {min_income}")]
    Overlap {
        status: FilingStatus,
        index: usize,
        previous_max: Decimal,
        min_income: Decimal,
    },

    #[error("{status}: bracket {index} has no width")]
    EmptyBracket { status: FilingStatus, index: usize },

    #[error("{status}: bracket {index} is unbounded but is not the top bracket")]
    UnboundedBeforeTop { status: FilingStatus, index: usize },

    #[error("{status}: top bracket must be unbounded")]
    BoundedTop { status: FilingStatus },

    #[error("{status}: bracket {index} rate must be between 0 and 1, got {rate}")]
    InvalidRate {
        status: FilingStatus,
        index: usize,
        rate: Decimal,
    },

    #[error("{status}: bracket {index} rate {rate} is lower than the bracket below it")]
    DecreasingRate {
        status: FilingStatus,
        index: usize,
        rate: Decimal,
    },
}

/// Per-filing-status bracket schedules for one tax year.
///
/// Each schedule is a contiguous, ascending partition of `[0, ∞)`. The only
/// ways to obtain a table are [`BracketTable::new`], which checks that, and
/// [`BracketTable::federal_2024`], whose data is checked by tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "ByFilingStatus<Vec<TaxBracket>>",
    into = "ByFilingStatus<Vec<TaxBracket>>"
)]
pub struct BracketTable {
    schedules: ByFilingStatus<Vec<TaxBracket>>,
}

impl BracketTable {
    /// Validates and wraps a set of schedules.
    ///
    /// # Errors
    ///
    /// Returns the first [`BracketTableError`] found, checking statuses in
    /// [`FilingStatus::ALL`] order.
    pub fn new(schedules: ByFilingStatus<Vec<TaxBracket>>) -> Result<Self, BracketTableError> {
        for (status, brackets) in schedules.iter() {
            validate_schedule(status, brackets)?;
        }
        Ok(Self { schedules })
    }

    /// 2024 federal rate schedules.
    pub fn federal_2024() -> Self {
        let single = schedule([
            dec!(11000),
            dec!(44725),
            dec!(95375),
            dec!(197050),
            dec!(250525),
            dec!(626350),
        ]);
        let joint = schedule([
            dec!(22000),
            dec!(89450),
            dec!(190750),
            dec!(364200),
            dec!(462500),
            dec!(693750),
        ]);
        let separate = schedule([
            dec!(11000),
            dec!(44725),
            dec!(95375),
            dec!(182050),
            dec!(231250),
            dec!(346875),
        ]);
        let head_of_household = schedule([
            dec!(15700),
            dec!(59850),
            dec!(95350),
            dec!(197050),
            dec!(250500),
            dec!(626350),
        ]);

        Self {
            schedules: ByFilingStatus {
                single,
                married_filing_jointly: joint.clone(),
                married_filing_separately: separate,
                head_of_household,
                qualifying_widow: joint,
            },
        }
    }

    /// Brackets for `status`, ascending by `min_income`.
    pub fn schedule(
        &self,
        status: FilingStatus,
    ) -> &[TaxBracket] {
        self.schedules.get(status)
    }

    pub fn schedules(&self) -> &ByFilingStatus<Vec<TaxBracket>> {
        &self.schedules
    }
}

impl TryFrom<ByFilingStatus<Vec<TaxBracket>>> for BracketTable {
    type Error = BracketTableError;

    fn try_from(schedules: ByFilingStatus<Vec<TaxBracket>>) -> Result<Self, Self::Error> {
        Self::new(schedules)
    }
}

impl From<BracketTable> for ByFilingStatus<Vec<TaxBracket>> {
    fn from(table: BracketTable) -> Self {
        table.schedules
    }
}

const RATES_2024: [Decimal; 7] = [
    dec!(0.10),
    dec!(0.12),
    dec!(0.22),
    dec!(0.24),
    dec!(0.32),
    dec!(0.35),
    dec!(0.37),
];

/// Seven brackets at the 2024 rates, split at the six given thresholds.
fn schedule(thresholds: [Decimal; 6]) -> Vec<TaxBracket> {
    let mut brackets = Vec::with_capacity(RATES_2024.len());
    let mut min_income = Decimal::ZERO;

    for (index, tax_rate) in RATES_2024.into_iter().enumerate() {
        let max_income = thresholds.get(index).copied();
        brackets.push(TaxBracket {
            min_income,
            max_income,
            tax_rate,
        });
        if let Some(max) = max_income {
            min_income = max;
        }
    }

    brackets
}

fn validate_schedule(
    status: FilingStatus,
    brackets: &[TaxBracket],
) -> Result<(), BracketTableError> {
    let Some(first) = brackets.first() else {
        return Err(BracketTableError::EmptySchedule { status });
    };
    if first.min_income != Decimal::ZERO {
        return Err(BracketTableError::FirstBracketNotZero {
            status,
            min_income: first.min_income,
        });
    }

    let top = brackets.len() - 1;
    let mut previous: Option<&TaxBracket> = None;

    for (index, bracket) in brackets.iter().enumerate() {
        if bracket.tax_rate < Decimal::ZERO || bracket.tax_rate > Decimal::ONE {
            return Err(BracketTableError::InvalidRate {
                status,
                index,
                rate: bracket.tax_rate,
            });
        }

        if let Some(previous) = previous {
            // Only the top bracket may be unbounded, so `previous` has a max.
            let previous_max = previous.max_income.unwrap_or(Decimal::MAX);
            if bracket.min_income > previous_max {
                return Err(BracketTableError::Gap {
                    status,
                    index,
                    previous_max,
                    min_income: bracket.min_income,
                });
            }
            if bracket.min_income < previous_max {
                return Err(BracketTableError::Overlap {
                    status,
                    index,
                    previous_max,
                    min_income: bracket.min_income,
                });
            }
            if bracket.tax_rate < previous.tax_rate {
                return Err(BracketTableError::DecreasingRate {
                    status,
                    index,
                    rate: bracket.tax_rate,
                });
            }
        }

        match bracket.max_income {
            None if index != top => {
                return Err(BracketTableError::UnboundedBeforeTop { status, index });
            }
            Some(_) if index == top => {
                return Err(BracketTableError::BoundedTop { status });
            }
            Some(max) if max <= bracket.min_income => {
                return Err(BracketTableError::EmptyBracket { status, index });
            }
            _ => {}
        }

        previous = Some(bracket);
    }

    Ok(())
}
