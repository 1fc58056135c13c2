//! Payable totals for remitting tax through the service.
//!
//! A fixed service commission is added on top of the tax being paid. The
//! commission is independent of the tax calculation itself.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed ₦600 commission charged per payment.
pub const SERVICE_COMMISSION: Decimal = Decimal::from_parts(600, 0, 0, false, 0);

/// Errors that can occur when quoting a payment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaymentQuoteError {
    #[error("invalid amount {0}: must be greater than zero")]
    InvalidAmount(Decimal),

    #[error("invalid commission {0}: must not be negative")]
    InvalidCommission(Decimal),

    #[error("total of {tax_amount} plus commission {commission} is out of range")]
    TotalOutOfRange { tax_amount: Decimal, commission: Decimal },
}

/// Commission charged for paying `tax_amount`. Currently a flat fee.
pub fn calculate_commission(_tax_amount: Decimal) -> Decimal {
    SERVICE_COMMISSION
}

/// Tax amount plus the service commission, saturating at [`Decimal::MAX`].
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::payment::calculate_total_amount;
///
/// assert_eq!(calculate_total_amount(dec!(33600)), dec!(34200));
/// ```
pub fn calculate_total_amount(tax_amount: Decimal) -> Decimal {
    tax_amount.saturating_add(calculate_commission(tax_amount))
}

/// Amount a taxpayer is asked to pay, split into tax and commission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentQuote {
    pub tax_amount: Decimal,
    pub commission: Decimal,
    pub total_amount: Decimal,
}

impl PaymentQuote {
    /// Quotes a payment with an explicit commission.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentQuoteError::InvalidAmount`] when `tax_amount` is zero
    /// or negative, [`PaymentQuoteError::InvalidCommission`] for a negative
    /// commission, and [`PaymentQuoteError::TotalOutOfRange`] when the sum
    /// cannot be represented.
    pub fn new(
        tax_amount: Decimal,
        commission: Decimal,
    ) -> Result<Self, PaymentQuoteError> {
        if tax_amount <= Decimal::ZERO {
            return Err(PaymentQuoteError::InvalidAmount(tax_amount));
        }
        if commission < Decimal::ZERO {
            return Err(PaymentQuoteError::InvalidCommission(commission));
        }

        let total_amount = tax_amount
            .checked_add(commission)
            .ok_or(PaymentQuoteError::TotalOutOfRange { tax_amount, commission })?;

        Ok(Self {
            tax_amount,
            commission,
            total_amount,
        })
    }

    /// Quotes a payment with the standard [`SERVICE_COMMISSION`].
    pub fn standard(tax_amount: Decimal) -> Result<Self, PaymentQuoteError> {
        Self::new(tax_amount, calculate_commission(tax_amount))
    }
}
