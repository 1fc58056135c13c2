//! Nigerian Personal Income Tax (PIT) calculation.
//!
//! Gross annual income is reduced by two allowances before the progressive
//! bracket table is applied:
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Personal allowance: greater of 1% of income or ₦200,000 |
//! | 2    | Consolidated relief: greater of 1% of income or ₦200,000, plus 20% of income |
//! | 3    | Taxable income: income − step 1 − step 2 (minimum 0) |
//! | 4    | Federal tax: taxable income walked through the brackets below |
//! | 5    | State tax: 5% of federal tax |
//! | 6    | Total tax: step 4 + step 5 |
//! | 7    | Effective rate: total tax ÷ income × 100 (0 when income is 0) |
//!
//! The 1%-or-₦200,000 term appears in both step 1 and step 2 and is therefore
//! deducted twice.
//!
//! # Brackets
//!
//! | Taxable income (₦)      | Rate |
//! |-------------------------|------|
//! | 0 – 300,000             | 7%   |
//! | 300,000 – 600,000       | 11%  |
//! | 600,000 – 1,100,000     | 15%  |
//! | 1,100,000 – 1,600,000   | 19%  |
//! | 1,600,000 – 3,200,000   | 21%  |
//! | above 3,200,000         | 24%  |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::calculate_personal_income_tax;
//!
//! let result = calculate_personal_income_tax(dec!(1000000)).unwrap();
//!
//! assert_eq!(result.breakdown.personal_allowance, dec!(200000));
//! assert_eq!(result.breakdown.consolidated_relief, dec!(400000));
//! assert_eq!(result.breakdown.taxable_income, dec!(400000));
//! assert_eq!(result.federal_tax, dec!(32000));
//! assert_eq!(result.state_tax, dec!(1600));
//! assert_eq!(result.total_tax, dec!(33600));
//! assert_eq!(result.effective_rate, dec!(3.36));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::calculations::common::{max, min, round_percentage, round_to_naira};
use crate::models::{
    BracketAllocation, TaxBracket, TaxBreakdown, TaxCalculationInput, TaxCalculationResult,
};

const fn naira(amount: u32) -> Decimal {
    Decimal::from_parts(amount, 0, 0, false, 0)
}

const fn percent(rate: u32) -> Decimal {
    Decimal::from_parts(rate, 0, 0, false, 2)
}

/// Floor of the personal allowance and of the matching relief component.
pub const ALLOWANCE_FLOOR: Decimal = naira(200_000);

/// Share of gross income compared against [`ALLOWANCE_FLOOR`].
pub const ALLOWANCE_RATE: Decimal = percent(1);

/// Share of gross income added to the consolidated relief allowance.
pub const RELIEF_RATE: Decimal = percent(20);

/// State tax as a share of federal tax. A flat approximation for every state.
pub const STATE_TAX_RATE: Decimal = percent(5);

/// Progressive PIT brackets, ascending, covering `[0, ∞)`.
pub const NIGERIAN_PIT_BRACKETS: [TaxBracket; 6] = [
    TaxBracket::new(naira(0), Some(naira(300_000)), percent(7)),
    TaxBracket::new(naira(300_000), Some(naira(600_000)), percent(11)),
    TaxBracket::new(naira(600_000), Some(naira(1_100_000)), percent(15)),
    TaxBracket::new(naira(1_100_000), Some(naira(1_600_000)), percent(19)),
    TaxBracket::new(naira(1_600_000), Some(naira(3_200_000)), percent(21)),
    TaxBracket::new(naira(3_200_000), None, percent(24)),
];

/// Errors that can occur during a personal income tax calculation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PersonalIncomeTaxError {
    /// Gross income must be zero or positive.
    #[error("income must not be negative, got {0}")]
    NegativeIncome(Decimal),
}

/// Errors found when validating a custom bracket table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BracketTableError {
    #[error("bracket table is empty")]
    Empty,

    #[error("first bracket must start at 0, got {0}")]
    NonZeroStart(Decimal),

    #[error("bracket {index} starts at {found}, expected {expected}")]
    NotContiguous {
        index: usize,
        expected: Decimal,
        found: Decimal,
    },

    #[error("bracket {index} has no width ({min} to {max})")]
    EmptyRange {
        index: usize,
        min: Decimal,
        max: Decimal,
    },

    #[error("only the last bracket may be unbounded, bracket {0} is not last")]
    UnboundedBeforeTop(usize),

    #[error("last bracket must be unbounded, it ends at {0}")]
    BoundedTopBracket(Decimal),

    #[error("bracket {index} rate {rate} must be between 0 and 1")]
    RateOutOfRange { index: usize, rate: Decimal },

    #[error("bracket {index} rate must be higher than the bracket below it")]
    NonIncreasingRate { index: usize },
}

/// Checks that brackets are contiguous from zero, ascending in bounds and
/// rate, with only the final bracket unbounded.
pub fn validate_brackets(brackets: &[TaxBracket]) -> Result<(), BracketTableError> {
    let first = brackets.first().ok_or(BracketTableError::Empty)?;
    if !first.min_income.is_zero() {
        return Err(BracketTableError::NonZeroStart(first.min_income));
    }

    let last_index = brackets.len() - 1;
    let mut previous: Option<&TaxBracket> = None;

    for (index, bracket) in brackets.iter().enumerate() {
        if bracket.tax_rate < Decimal::ZERO || bracket.tax_rate > Decimal::ONE {
            return Err(BracketTableError::RateOutOfRange {
                index,
                rate: bracket.tax_rate,
            });
        }

        if let Some(prev) = previous {
            // A previous bracket always has an upper bound here.
            let expected = prev.max_income.unwrap_or(Decimal::MAX);
            if bracket.min_income != expected {
                return Err(BracketTableError::NotContiguous {
                    index,
                    expected,
                    found: bracket.min_income,
                });
            }
            if bracket.tax_rate <= prev.tax_rate {
                return Err(BracketTableError::NonIncreasingRate { index });
            }
        }

        match bracket.max_income {
            None if index != last_index => {
                return Err(BracketTableError::UnboundedBeforeTop(index));
            }
            Some(max) if index == last_index => {
                return Err(BracketTableError::BoundedTopBracket(max));
            }
            Some(max) if max <= bracket.min_income => {
                return Err(BracketTableError::EmptyRange {
                    index,
                    min: bracket.min_income,
                    max,
                });
            }
            _ => {}
        }

        previous = Some(bracket);
    }

    Ok(())
}

/// Calculator for Nigerian personal income tax.
///
/// Holds a borrowed bracket table and is otherwise stateless, so a single
/// instance can be shared freely between threads.
#[derive(Debug, Clone, Copy)]
pub struct PersonalIncomeTax<'a> {
    tax_brackets: &'a [TaxBracket],
}

impl PersonalIncomeTax<'static> {
    /// Calculator using [`NIGERIAN_PIT_BRACKETS`].
    pub fn nigerian() -> Self {
        Self {
            tax_brackets: &NIGERIAN_PIT_BRACKETS,
        }
    }
}

impl Default for PersonalIncomeTax<'static> {
    fn default() -> Self {
        Self::nigerian()
    }
}

impl<'a> PersonalIncomeTax<'a> {
    /// Creates a calculator over a custom bracket table.
    ///
    /// # Errors
    ///
    /// Returns [`BracketTableError`] when the table fails [`validate_brackets`].
    pub fn with_brackets(tax_brackets: &'a [TaxBracket]) -> Result<Self, BracketTableError> {
        validate_brackets(tax_brackets)?;
        Ok(Self { tax_brackets })
    }

    pub fn brackets(&self) -> &'a [TaxBracket] {
        self.tax_brackets
    }

    /// Calculates personal income tax for an annual gross income.
    ///
    /// # Errors
    ///
    /// Returns [`PersonalIncomeTaxError::NegativeIncome`] for income below zero.
    pub fn calculate(
        &self,
        income: Decimal,
    ) -> Result<TaxCalculationResult, PersonalIncomeTaxError> {
        if income < Decimal::ZERO {
            return Err(PersonalIncomeTaxError::NegativeIncome(income));
        }

        let personal_allowance = self.personal_allowance(income);
        let consolidated_relief = self.consolidated_relief(income);
        let taxable_income =
            self.taxable_income(income, personal_allowance, consolidated_relief);

        let federal_tax = self.federal_tax(taxable_income);
        let state_tax = self.state_tax(federal_tax);
        let effective_rate = self.effective_rate(federal_tax + state_tax, income);

        debug!(
            %income,
            %taxable_income,
            %federal_tax,
            %state_tax,
            "calculated personal income tax"
        );

        let federal_tax = round_to_naira(federal_tax);
        let state_tax = round_to_naira(state_tax);

        Ok(TaxCalculationResult {
            federal_tax,
            state_tax,
            total_tax: federal_tax + state_tax,
            effective_rate,
            breakdown: TaxBreakdown {
                taxable_income: round_to_naira(taxable_income),
                personal_allowance: round_to_naira(personal_allowance),
                consolidated_relief: round_to_naira(consolidated_relief),
            },
        })
    }

    /// Calculates tax for a full input record. Only `income` is used.
    pub fn calculate_input(
        &self,
        input: &TaxCalculationInput,
    ) -> Result<TaxCalculationResult, PersonalIncomeTaxError> {
        self.calculate(input.income)
    }

    /// Greater of 1% of income or ₦200,000.
    pub fn personal_allowance(
        &self,
        income: Decimal,
    ) -> Decimal {
        max(income * ALLOWANCE_RATE, ALLOWANCE_FLOOR)
    }

    /// Greater of 1% of income or ₦200,000, plus 20% of income.
    pub fn consolidated_relief(
        &self,
        income: Decimal,
    ) -> Decimal {
        max(income * ALLOWANCE_RATE, ALLOWANCE_FLOOR) + income * RELIEF_RATE
    }

    fn taxable_income(
        &self,
        income: Decimal,
        personal_allowance: Decimal,
        consolidated_relief: Decimal,
    ) -> Decimal {
        max(income - personal_allowance - consolidated_relief, Decimal::ZERO)
    }

    /// Splits the taxable income behind [`PersonalIncomeTax::calculate`]
    /// across the brackets. The allocated taxes sum to the unrounded federal
    /// tax, so they agree with the reported figure for fractional incomes too.
    ///
    /// # Errors
    ///
    /// Returns [`PersonalIncomeTaxError::NegativeIncome`] for income below zero.
    pub fn allocate_income(
        &self,
        income: Decimal,
    ) -> Result<Vec<BracketAllocation>, PersonalIncomeTaxError> {
        if income < Decimal::ZERO {
            return Err(PersonalIncomeTaxError::NegativeIncome(income));
        }

        let taxable_income = self.taxable_income(
            income,
            self.personal_allowance(income),
            self.consolidated_relief(income),
        );
        Ok(self.allocate(taxable_income))
    }

    /// Splits taxable income across the brackets, lowest first.
    ///
    /// Only brackets that receive income are returned.
    pub fn allocate(
        &self,
        taxable_income: Decimal,
    ) -> Vec<BracketAllocation> {
        let mut allocations = Vec::new();
        let mut remaining = taxable_income;

        for bracket in self.tax_brackets {
            if remaining <= Decimal::ZERO {
                break;
            }

            let taxable_amount = match bracket.width() {
                Some(width) => min(remaining, width),
                None => remaining,
            };

            allocations.push(BracketAllocation {
                min_income: bracket.min_income,
                max_income: bracket.max_income,
                tax_rate: bracket.tax_rate,
                taxable_amount,
                tax: taxable_amount * bracket.tax_rate,
            });
            remaining -= taxable_amount;
        }

        allocations
    }

    /// Unrounded progressive tax on already-reduced taxable income.
    pub fn federal_tax(
        &self,
        taxable_income: Decimal,
    ) -> Decimal {
        self.allocate(taxable_income)
            .iter()
            .map(|allocation| allocation.tax)
            .sum()
    }

    fn state_tax(
        &self,
        federal_tax: Decimal,
    ) -> Decimal {
        federal_tax * STATE_TAX_RATE
    }

    fn effective_rate(
        &self,
        total_tax: Decimal,
        income: Decimal,
    ) -> Decimal {
        if income > Decimal::ZERO {
            round_percentage(total_tax / income * Decimal::ONE_HUNDRED)
        } else {
            round_percentage(Decimal::ZERO)
        }
    }
}

/// Calculates personal income tax with the Nigerian bracket table.
///
/// # Errors
///
/// Returns [`PersonalIncomeTaxError::NegativeIncome`] for income below zero.
pub fn calculate_personal_income_tax(
    income: Decimal
) -> Result<TaxCalculationResult, PersonalIncomeTaxError> {
    PersonalIncomeTax::nigerian().calculate(income)
}
