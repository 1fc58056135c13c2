mod tax_bracket;
mod tax_calculation;
mod taxpayer_profile;

pub use tax_bracket::{BracketAllocation, TaxBracket};
pub use tax_calculation::{TaxBreakdown, TaxCalculationInput, TaxCalculationResult};
pub use taxpayer_profile::{BusinessType, NIGERIAN_STATES, Occupation, is_known_state};
