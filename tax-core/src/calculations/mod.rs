//! Tax calculation modules.
//!
//! Personal income tax is the progressive bracket engine; company income tax
//! and VAT are single-rate companions. All functions are pure.

pub mod common;
pub mod company_income;
pub mod payment;
pub mod personal_income;
pub mod vat;

pub use company_income::calculate_company_income_tax;
pub use payment::{PaymentQuote, PaymentQuoteError};
pub use personal_income::{
    BracketTableError, NIGERIAN_PIT_BRACKETS, PersonalIncomeTax, PersonalIncomeTaxError,
    calculate_personal_income_tax, validate_brackets,
};
pub use vat::calculate_vat;
