//! Company Income Tax (CIT).
//!
//! Profit (revenue minus expenses) is taxed at the large-company rate of 30%.
//! A loss produces no tax. Profit saturates at the `Decimal` range, so every
//! pair of amounts yields a result.

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::common::{max, round_to_naira};

/// Large-company CIT rate.
pub const COMPANY_INCOME_TAX_RATE: Decimal = Decimal::from_parts(30, 0, 0, false, 2);

/// Calculates company income tax, rounded to whole naira.
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculate_company_income_tax;
///
/// assert_eq!(calculate_company_income_tax(dec!(5000000), dec!(3000000)), dec!(600000));
/// assert_eq!(calculate_company_income_tax(dec!(1000000), dec!(1200000)), dec!(0));
/// ```
pub fn calculate_company_income_tax(
    revenue: Decimal,
    expenses: Decimal,
) -> Decimal {
    let profit = revenue.saturating_sub(expenses);
    let tax = max(profit.saturating_mul(COMPANY_INCOME_TAX_RATE), Decimal::ZERO);
    debug!(%revenue, %expenses, %profit, %tax, "calculated company income tax");
    round_to_naira(tax)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn taxes_profit_at_thirty_percent() {
        let result = calculate_company_income_tax(dec!(10000000), dec!(4000000));

        assert_eq!(result, dec!(1800000));
    }

    #[test]
    fn loss_is_clamped_to_zero() {
        let result = calculate_company_income_tax(dec!(1000000), dec!(1200000));

        assert_eq!(result, dec!(0));
    }

    #[test]
    fn break_even_owes_nothing() {
        let result = calculate_company_income_tax(dec!(750000), dec!(750000));

        assert_eq!(result, dec!(0));
    }

    #[test]
    fn rounds_to_whole_naira() {
        // 1,001.65 × 30% = 300.495
        let result = calculate_company_income_tax(dec!(1001.65), dec!(0));

        assert_eq!(result, dec!(300));
    }

    #[test]
    fn rounds_half_up() {
        // 1,001.70 × 30% = 300.51
        assert_eq!(calculate_company_income_tax(dec!(1001.70), dec!(0)), dec!(301));
        // 5 × 30% = 1.5
        assert_eq!(calculate_company_income_tax(dec!(5), dec!(0)), dec!(2));
    }

    // =========================================================================
    // Range extremes
    // =========================================================================

    #[test]
    fn profit_beyond_decimal_range_saturates() {
        let saturated = calculate_company_income_tax(Decimal::MAX, dec!(-1));

        assert_eq!(saturated, calculate_company_income_tax(Decimal::MAX, Decimal::ZERO));
        assert!(saturated > Decimal::ZERO);
    }

    #[test]
    fn loss_beyond_decimal_range_owes_nothing() {
        assert_eq!(calculate_company_income_tax(Decimal::MIN, dec!(1)), dec!(0));
        assert_eq!(calculate_company_income_tax(dec!(-1), Decimal::MAX), dec!(0));
    }
}
