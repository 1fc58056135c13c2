//! Command handlers.
//!
//! Each handler returns the text to print so it can be exercised without a
//! terminal. Only `batch --output` and `personal --report` touch the file
//! system.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use serde_json::json;
use tax_core::calculations::PaymentQuote;
use tax_core::{
    PersonalIncomeTax, TaxCalculationInput, calculate_company_income_tax, calculate_vat,
};
use tax_data::{CalculationInputLoader, calculate_all, write_records};
use tracing::info;

use crate::cli::{Cli, Command};
use crate::config::{AppConfig, OutputFormat};
use crate::report;

/// Settings every handler needs, resolved from config and flags.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub config: AppConfig,
    pub format: OutputFormat,
    pub today: NaiveDate,
}

impl RunContext {
    pub fn new(
        config: AppConfig,
        format_override: Option<OutputFormat>,
    ) -> Self {
        let format = format_override.unwrap_or(config.output);
        Self {
            config,
            format,
            today: Local::now().date_naive(),
        }
    }
}

fn to_json(value: &impl serde::Serialize) -> Result<String> {
    let mut text = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    text.push('\n');
    Ok(text)
}

/// Dispatches a parsed command line.
pub fn run(
    cli: Cli,
    ctx: &RunContext,
) -> Result<String> {
    match cli.command {
        Command::Personal {
            income,
            occupation,
            business_type,
            state,
            detailed,
            report,
        } => {
            let input = TaxCalculationInput {
                income,
                occupation,
                business_type,
                state,
            };
            personal_income(ctx, &input, detailed, report.as_deref())
        }
        Command::Company { revenue, expenses } => company_income(ctx, revenue, expenses),
        Command::Vat { amount } => vat(ctx, amount),
        Command::Pay { tax_amount } => payment(ctx, tax_amount),
        Command::Batch { file, output } => batch(&file, output.as_deref()),
    }
}

pub fn personal_income(
    ctx: &RunContext,
    input: &TaxCalculationInput,
    detailed: bool,
    report_path: Option<&Path>,
) -> Result<String> {
    let calculator = PersonalIncomeTax::nigerian();
    let result = calculator
        .calculate_input(input)
        .context("Cannot calculate personal income tax")?;

    let text_report =
        report::render_text_report(input, &result, ctx.today, &ctx.config.date_format);

    if let Some(path) = report_path {
        std::fs::write(path, &text_report)
            .with_context(|| format!("Failed to write report: {}", path.display()))?;
        info!(path = %path.display(), "saved tax report");
    }

    let allocations = calculator
        .allocate_income(input.income)
        .context("Cannot allocate income to brackets")?;

    match ctx.format {
        OutputFormat::Json if detailed => to_json(&json!({
            "input": input,
            "result": result,
            "brackets": allocations,
        })),
        OutputFormat::Json => to_json(&result),
        OutputFormat::Text if detailed => Ok(format!(
            "{text_report}\n{}",
            report::render_bracket_table(&allocations)
        )),
        OutputFormat::Text => Ok(text_report),
    }
}

pub fn company_income(
    ctx: &RunContext,
    revenue: Decimal,
    expenses: Decimal,
) -> Result<String> {
    let tax = calculate_company_income_tax(revenue, expenses);

    match ctx.format {
        OutputFormat::Json => to_json(&json!({
            "revenue": revenue,
            "expenses": expenses,
            "companyIncomeTax": tax,
        })),
        OutputFormat::Text => Ok(report::render_company_income_tax(revenue, expenses, tax)),
    }
}

pub fn vat(
    ctx: &RunContext,
    amount: Decimal,
) -> Result<String> {
    let vat = calculate_vat(amount);

    match ctx.format {
        OutputFormat::Json => to_json(&json!({
            "amount": amount,
            "vat": vat,
        })),
        OutputFormat::Text => Ok(report::render_vat(amount, vat)),
    }
}

pub fn payment(
    ctx: &RunContext,
    tax_amount: Decimal,
) -> Result<String> {
    let quote = PaymentQuote::new(tax_amount, ctx.config.service_commission)
        .context("Cannot quote payment")?;

    match ctx.format {
        OutputFormat::Json => to_json(&quote),
        OutputFormat::Text => Ok(report::render_payment_quote(&quote)),
    }
}

/// Calculates every row of `file`. Results are always CSV; with `output` they
/// are written there and a one-line summary is returned instead.
pub fn batch(
    file: &Path,
    output: Option<&Path>,
) -> Result<String> {
    let inputs = CalculationInputLoader::load_from_file(file)
        .with_context(|| format!("Failed to load inputs: {}", file.display()))?;
    info!(rows = inputs.len(), file = %file.display(), "loaded calculation inputs");

    let records = calculate_all(&PersonalIncomeTax::nigerian(), &inputs)
        .context("Failed to calculate batch")?;

    match output {
        Some(path) => {
            let out = File::create(path)
                .with_context(|| format!("Failed to create: {}", path.display()))?;
            write_records(BufWriter::new(out), &records)
                .with_context(|| format!("Failed to write results: {}", path.display()))?;
            Ok(format!(
                "Wrote {} calculations to {}\n",
                records.len(),
                path.display()
            ))
        }
        None => {
            let mut buf = Vec::new();
            write_records(&mut buf, &records).context("Failed to write results")?;
            String::from_utf8(buf).context("Results were not valid UTF-8")
        }
    }
}
