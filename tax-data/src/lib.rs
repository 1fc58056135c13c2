//! Batch input and output for tax calculations.

pub mod export;
pub mod loader;

pub use export::{CalculationRecord, EXPORT_HEADERS, ExportError, calculate_all, write_records};
pub use loader::{CalculationInputLoader, CalculationInputLoaderError, CalculationInputRecord};
