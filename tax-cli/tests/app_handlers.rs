use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::Parser;
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use serde_json::Value;
use tax_cli::app::{self, RunContext};
use tax_cli::cli::Cli;
use tax_cli::config::{AppConfig, OutputFormat};
use tax_core::TaxCalculationInput;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn context(format: OutputFormat) -> RunContext {
    RunContext {
        config: AppConfig::default(),
        format,
        today: NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
    }
}

fn run(
    args: &[&str],
    format: OutputFormat,
) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(args).unwrap();
    app::run(cli, &context(format))
}

// =============================================================================
// personal
// =============================================================================

#[test]
fn personal_text_report() {
    let out = run(
        &["easytax", "personal", "--income", "1000000", "--state", "Lagos"],
        OutputFormat::Text,
    )
    .unwrap();

    assert!(out.starts_with("Tax Calculation Report\n"), "got {out}");
    assert!(out.contains("- Total Tax: ₦33,600\n"));
    assert!(out.contains("- Effective Rate: 3.36%\n"));
    assert!(out.ends_with("Generated on: 16/10/2026\n"));
}

#[test]
fn personal_detailed_text_appends_bracket_table() {
    let out = run(
        &["easytax", "personal", "--income", "1000000", "--detailed"],
        OutputFormat::Text,
    )
    .unwrap();

    assert!(out.contains("Federal Tax by Bracket:\n"));
    assert!(out.contains("- ₦300,000 to ₦600,000 @ 11%: ₦100,000 taxed ₦11,000\n"));
}

#[test]
fn personal_json_result() {
    let out = run(
        &["easytax", "personal", "--income", "₦5,000,000"],
        OutputFormat::Json,
    )
    .unwrap();
    let json: Value = serde_json::from_str(&out).unwrap();

    assert_eq!(json["federalTax"], "656000");
    assert_eq!(json["stateTax"], "32800");
    assert_eq!(json["totalTax"], "688800");
    assert_eq!(json["effectiveRate"], "13.78");
    assert_eq!(json["breakdown"]["taxableIncome"], "3600000");
}

#[test]
fn personal_detailed_json_includes_input_and_brackets() {
    let input = TaxCalculationInput::new(dec!(1000000), "Freelancer");

    let out = app::personal_income(&context(OutputFormat::Json), &input, true, None).unwrap();
    let json: Value = serde_json::from_str(&out).unwrap();

    assert_eq!(json["input"]["occupation"], "Freelancer");
    assert_eq!(json["result"]["totalTax"], "33600");
    assert_eq!(json["brackets"].as_array().map(Vec::len), Some(2));
}

#[test]
fn personal_detailed_json_brackets_use_unrounded_taxable_income() {
    let input = TaxCalculationInput::new(dec!(1000000.60), "Other");

    let out = app::personal_income(&context(OutputFormat::Json), &input, true, None).unwrap();
    let json: Value = serde_json::from_str(&out).unwrap();

    assert_eq!(json["result"]["breakdown"]["taxableIncome"], "400000");
    assert_eq!(json["brackets"][1]["taxableAmount"], "100000.48");
}

#[test]
fn personal_report_is_written_to_file() {
    let path = std::env::temp_dir().join(format!("easytax-report-{}.txt", std::process::id()));
    let input = TaxCalculationInput::new(dec!(1000000), "Other");

    let out = app::personal_income(&context(OutputFormat::Text), &input, false, Some(&path))
        .unwrap();
    let saved = std::fs::read_to_string(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(saved, out);
}

#[test]
fn negative_income_is_an_error() {
    let input = TaxCalculationInput::new(dec!(-1), "Other");

    let err = app::personal_income(&context(OutputFormat::Text), &input, false, None).unwrap_err();

    assert!(format!("{err:#}").contains("negative"), "got {err:#}");
}

// =============================================================================
// company, vat, pay
// =============================================================================

#[test]
fn company_json() {
    let out = run(
        &["easytax", "company", "--revenue", "10000000", "--expenses", "4000000"],
        OutputFormat::Json,
    )
    .unwrap();
    let json: Value = serde_json::from_str(&out).unwrap();

    assert_eq!(json["companyIncomeTax"], "1800000");
}

#[test]
fn company_text_with_loss() {
    let out = run(
        &["easytax", "company", "--revenue", "100", "--expenses", "500"],
        OutputFormat::Text,
    )
    .unwrap();

    assert!(out.contains("- Profit: -₦400\n"), "got {out}");
    assert!(out.contains("- Company Income Tax (30%): ₦0\n"), "got {out}");
}

#[test]
fn company_at_decimal_max_does_not_overflow() {
    let out = run(
        &[
            "easytax",
            "company",
            "--revenue",
            "79228162514264337593543950335",
            "--expenses=-1",
        ],
        OutputFormat::Text,
    );

    assert!(out.is_ok(), "got {out:?}");
}

#[test]
fn vat_at_decimal_max_does_not_overflow() {
    let out = run(
        &["easytax", "vat", "--amount", "79228162514264337593543950335"],
        OutputFormat::Json,
    );

    assert!(out.is_ok(), "got {out:?}");
}

#[test]
fn pay_reports_total_out_of_range() {
    let out = run(
        &["easytax", "pay", "--tax-amount", "79228162514264337593543950335"],
        OutputFormat::Text,
    );

    assert!(out.is_err());
}

#[test]
fn vat_text() {
    let out = run(&["easytax", "vat", "--amount", "100000"], OutputFormat::Text).unwrap();

    assert_eq!(
        out,
        "Value Added Tax\n- Amount: 100000.00\n- VAT (7.5%): 7500.00\n- Amount incl. VAT: 107500.00\n"
    );
}

#[test]
fn pay_uses_configured_commission() {
    let mut ctx = context(OutputFormat::Json);
    ctx.config.service_commission = dec!(750);

    let out = app::payment(&ctx, dec!(33600)).unwrap();
    let json: Value = serde_json::from_str(&out).unwrap();

    assert_eq!(json["commission"], "750");
    assert_eq!(json["totalAmount"], "34350");
}

#[test]
fn pay_rejects_zero_amount() {
    assert!(run(&["easytax", "pay", "--tax-amount", "0"], OutputFormat::Text).is_err());
}

// =============================================================================
// batch
// =============================================================================

#[test]
fn batch_prints_csv() {
    let out = app::batch(&fixture("batch_inputs.csv"), None).unwrap();

    assert_eq!(
        out,
        "\
income,occupation,business_type,state,federal_tax,state_tax,total_tax,effective_rate
1000000,Employee (PAYE),,Lagos,32000,1600,33600,3.36
450000,Freelancer,,,0,0,0,0.00
"
    );
}

#[test]
fn batch_writes_output_file() {
    let path = std::env::temp_dir().join(format!("easytax-batch-{}.csv", std::process::id()));

    let summary = app::batch(&fixture("batch_inputs.csv"), Some(&path)).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(summary, format!("Wrote 2 calculations to {}\n", path.display()));
    assert_eq!(written.lines().count(), 3);
}

#[test]
fn batch_missing_file_is_an_error() {
    assert!(app::batch(&fixture("missing.csv"), None).is_err());
}

#[test]
fn batch_without_rows_still_prints_header() {
    let out = app::batch(&fixture("header_only.csv"), None).unwrap();

    assert_eq!(
        out,
        "income,occupation,business_type,state,federal_tax,state_tax,total_tax,effective_rate\n"
    );
}
