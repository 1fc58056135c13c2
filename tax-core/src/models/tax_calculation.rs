use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Input for a personal income tax calculation.
///
/// Only `income` takes part in the arithmetic. The remaining fields describe
/// the taxpayer and are carried through to reports and exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxCalculationInput {
    pub income: Decimal,
    pub occupation: String,
    pub business_type: Option<String>,
    pub state: Option<String>,
}

impl TaxCalculationInput {
    pub fn new(
        income: Decimal,
        occupation: impl Into<String>,
    ) -> Self {
        Self {
            income,
            occupation: occupation.into(),
            business_type: None,
            state: None,
        }
    }

    pub fn with_business_type(
        mut self,
        business_type: impl Into<String>,
    ) -> Self {
        self.business_type = Some(business_type.into());
        self
    }

    pub fn with_state(
        mut self,
        state: impl Into<String>,
    ) -> Self {
        self.state = Some(state.into());
        self
    }
}

/// Allowances and the income left to tax after they are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxBreakdown {
    pub taxable_income: Decimal,
    pub personal_allowance: Decimal,
    pub consolidated_relief: Decimal,
}

/// Result of a personal income tax calculation.
///
/// Money fields hold whole naira; `effective_rate` is a percentage with two
/// decimal places. Serialized field names are stable, and amounts serialize
/// as decimal strings (`"federalTax": "32000"`) so no precision is lost to
/// floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxCalculationResult {
    pub federal_tax: Decimal,
    pub state_tax: Decimal,
    pub total_tax: Decimal,
    pub effective_rate: Decimal,
    pub breakdown: TaxBreakdown,
}
