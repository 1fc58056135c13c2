//! Value Added Tax (VAT).

use rust_decimal::Decimal;

/// Standard VAT rate of 7.5%.
pub const VAT_RATE: Decimal = Decimal::from_parts(75, 0, 0, false, 3);

/// Calculates VAT on an amount.
///
/// The result is the exact product and is not rounded, so kobo are kept.
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculate_vat;
///
/// assert_eq!(calculate_vat(dec!(100000)), dec!(7500));
/// ```
pub fn calculate_vat(amount: Decimal) -> Decimal {
    amount * VAT_RATE
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn vat_on_round_amount() {
        assert_eq!(calculate_vat(dec!(100000)), dec!(7500));
    }

    #[test]
    fn vat_keeps_fractional_kobo() {
        assert_eq!(calculate_vat(dec!(999)), dec!(74.925));
    }

    #[test]
    fn vat_on_zero_and_refunds() {
        assert_eq!(calculate_vat(dec!(0)), dec!(0));
        assert_eq!(calculate_vat(dec!(-2000)), dec!(-150));
    }
}
