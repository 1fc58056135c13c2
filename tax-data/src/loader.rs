//! CSV loader for personal income tax calculation inputs.
//!
//! ## CSV Format
//!
//! Columns are matched by header name, so their order does not matter.
//! Whitespace around values is ignored.
//!
//! | Column          | Required | Type    | Notes                                     |
//! |-----------------|----------|---------|-------------------------------------------|
//! | `income`        | yes      | money   | e.g. `1000000`, `1,000,000` or `₦1,000,000` |
//! | `occupation`    | yes      | string  | e.g. `Employee (PAYE)`, `Freelancer`      |
//! | `business_type` | no       | string  | Leave cell empty (or omit column) for none |
//! | `state`         | no       | string  | Leave cell empty (or omit column) for none |
//!
//! Money cells containing commas must be quoted.
//!
//! ### Example
//!
//! ```csv
//! income,occupation,business_type,state
//! 1000000,Employee (PAYE),,Lagos
//! "₦5,000,000",Business Owner,Limited Liability Company,FCT Abuja
//! ```

use std::io::Read;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use tax_core::calculations::common::parse_money;
use tax_core::{BusinessType, Occupation, TaxCalculationInput, is_known_state};
use thiserror::Error;
use tracing::warn;

/// Errors that can occur when loading calculation inputs.
#[derive(Debug, Error)]
pub enum CalculationInputLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("failed to read input file: {0}")]
    Io(#[from] std::io::Error),

    /// `row` is 1-based and does not count the header.
    #[error("income {income} on row {row} must not be negative")]
    NegativeIncome { income: Decimal, row: usize },

    #[error("occupation is empty on row {row}")]
    MissingOccupation { row: usize },
}

impl From<csv::Error> for CalculationInputLoaderError {
    fn from(err: csv::Error) -> Self {
        CalculationInputLoaderError::CsvParse(err.to_string())
    }
}

/// A single row of the input CSV, as written.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CalculationInputRecord {
    #[serde(deserialize_with = "deserialize_money")]
    pub income: Decimal,
    pub occupation: String,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub business_type: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub state: Option<String>,
}

fn deserialize_money<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_money(&s).map_err(serde::de::Error::custom)
}

fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()))
}

/// Loader for calculation inputs from CSV data.
pub struct CalculationInputLoader;

impl CalculationInputLoader {
    /// Parse raw records from a CSV reader without validating them.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<CalculationInputRecord>, CalculationInputLoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .flexible(false)
            .from_reader(reader);

        let mut records = Vec::new();
        for result in csv_reader.deserialize() {
            let record: CalculationInputRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Parse and validate records into calculation inputs, in file order.
    ///
    /// Unrecognised occupations, business types and states are accepted and
    /// logged, since they do not change the tax owed.
    ///
    /// # Errors
    ///
    /// * [`CalculationInputLoaderError::CsvParse`] if the CSV is malformed or
    ///   a required column is missing.
    /// * [`CalculationInputLoaderError::NegativeIncome`] for a negative income.
    /// * [`CalculationInputLoaderError::MissingOccupation`] for a blank
    ///   occupation.
    pub fn load<R: Read>(reader: R) -> Result<Vec<TaxCalculationInput>, CalculationInputLoaderError> {
        Self::parse(reader)?
            .into_iter()
            .enumerate()
            .map(|(idx, record)| convert_record(record, idx + 1))
            .collect()
    }

    pub fn load_from_str(input: &str) -> Result<Vec<TaxCalculationInput>, CalculationInputLoaderError> {
        Self::load(input.as_bytes())
    }

    /// Convenience wrapper: open a file from disk and delegate to [`Self::load`].
    pub fn load_from_file(path: &Path) -> Result<Vec<TaxCalculationInput>, CalculationInputLoaderError> {
        let file = std::fs::File::open(path)?;
        Self::load(file)
    }
}

fn convert_record(
    record: CalculationInputRecord,
    row: usize,
) -> Result<TaxCalculationInput, CalculationInputLoaderError> {
    if record.income < Decimal::ZERO {
        return Err(CalculationInputLoaderError::NegativeIncome {
            income: record.income,
            row,
        });
    }

    let occupation = record.occupation.trim().to_string();
    if occupation.is_empty() {
        return Err(CalculationInputLoaderError::MissingOccupation { row });
    }
    if Occupation::parse(&occupation).is_none() {
        warn!(row, %occupation, "unrecognised occupation");
    }
    if let Some(business_type) = &record.business_type {
        if BusinessType::parse(business_type).is_none() {
            warn!(row, %business_type, "unrecognised business type");
        }
    }
    if let Some(state) = &record.state {
        if !is_known_state(state) {
            warn!(row, %state, "unrecognised state");
        }
    }

    Ok(TaxCalculationInput {
        income: record.income,
        occupation,
        business_type: record.business_type,
        state: record.state,
    })
}
