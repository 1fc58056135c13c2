pub mod calculations;
pub mod models;

pub use calculations::{
    PersonalIncomeTax, PersonalIncomeTaxError, calculate_company_income_tax,
    calculate_personal_income_tax, calculate_vat,
};
pub use models::*;
