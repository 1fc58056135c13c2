//! CSV export of calculated results.
//!
//! Each row pairs the taxpayer input with its calculated result:
//!
//! ```csv
//! income,occupation,business_type,state,federal_tax,state_tax,total_tax,effective_rate
//! 1000000,Employee (PAYE),,Lagos,32000,1600,33600,3.36
//! ```

use std::io::Write;

use rust_decimal::Decimal;
use serde::Serialize;
use tax_core::{PersonalIncomeTax, PersonalIncomeTaxError, TaxCalculationInput, TaxCalculationResult};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to flush output: {0}")]
    Io(#[from] std::io::Error),
}

/// Column names of the exported CSV, in order.
pub const EXPORT_HEADERS: [&str; 8] = [
    "income",
    "occupation",
    "business_type",
    "state",
    "federal_tax",
    "state_tax",
    "total_tax",
    "effective_rate",
];

/// One exported row: an input together with its result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculationRecord {
    pub income: Decimal,
    pub occupation: String,
    pub business_type: Option<String>,
    pub state: Option<String>,
    pub federal_tax: Decimal,
    pub state_tax: Decimal,
    pub total_tax: Decimal,
    pub effective_rate: Decimal,
}

impl CalculationRecord {
    pub fn new(
        input: &TaxCalculationInput,
        result: &TaxCalculationResult,
    ) -> Self {
        Self {
            income: input.income,
            occupation: input.occupation.clone(),
            business_type: input.business_type.clone(),
            state: input.state.clone(),
            federal_tax: result.federal_tax,
            state_tax: result.state_tax,
            total_tax: result.total_tax,
            effective_rate: result.effective_rate,
        }
    }
}

/// Runs every input through `calculator`, preserving order.
///
/// # Errors
///
/// Stops at the first input the calculator rejects.
pub fn calculate_all(
    calculator: &PersonalIncomeTax<'_>,
    inputs: &[TaxCalculationInput],
) -> Result<Vec<CalculationRecord>, PersonalIncomeTaxError> {
    inputs
        .iter()
        .map(|input| -> Result<CalculationRecord, PersonalIncomeTaxError> {
            let result = calculator.calculate_input(input)?;
            Ok(CalculationRecord::new(input, &result))
        })
        .collect()
}

/// Writes records as CSV. The header row is always written, so an empty
/// batch still produces a valid file.
pub fn write_records<W: Write>(
    writer: W,
    records: &[CalculationRecord],
) -> Result<(), ExportError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(EXPORT_HEADERS)?;
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    debug!(rows = records.len(), "wrote calculation records");
    Ok(())
}
