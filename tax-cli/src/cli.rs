use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tax_core::calculations::common::parse_money;

use crate::config::OutputFormat;

/// Nigerian tax calculator.
///
/// Computes personal income tax with the progressive PIT brackets, company
/// income tax, VAT, and the total payable through the service.
#[derive(Debug, Parser)]
#[command(name = "easytax", version, about, long_about = None)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./easytax.toml when present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format; overrides the config file.
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Personal income tax for an annual gross income.
    Personal {
        /// Annual gross income, e.g. 1000000 or "₦1,000,000".
        #[arg(long, value_parser = money_arg)]
        income: Decimal,

        #[arg(long, default_value = "Other")]
        occupation: String,

        #[arg(long)]
        business_type: Option<String>,

        #[arg(long)]
        state: Option<String>,

        /// Also show the tax charged in each bracket.
        #[arg(long)]
        detailed: bool,

        /// Write the text report to this file as well as stdout.
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Company income tax on revenue less expenses.
    Company {
        #[arg(long, value_parser = money_arg)]
        revenue: Decimal,

        #[arg(long, value_parser = money_arg)]
        expenses: Decimal,
    },

    /// VAT on an amount.
    Vat {
        #[arg(long, value_parser = money_arg)]
        amount: Decimal,
    },

    /// Total payable for a tax amount, including the service commission.
    Pay {
        #[arg(long, value_parser = money_arg)]
        tax_amount: Decimal,
    },

    /// Calculate personal income tax for every row of a CSV file.
    Batch {
        /// CSV with columns income, occupation[, business_type, state].
        file: PathBuf,

        /// Write results here instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn money_arg(s: &str) -> Result<Decimal, String> {
    parse_money(s).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parses_personal_command() {
        let cli = Cli::try_parse_from([
            "easytax",
            "personal",
            "--income",
            "₦1,000,000",
            "--occupation",
            "Freelancer",
            "--state",
            "Lagos",
        ])
        .unwrap();

        let Command::Personal {
            income,
            occupation,
            business_type,
            state,
            detailed,
            report,
        } = cli.command
        else {
            panic!("expected personal command");
        };
        assert_eq!(income, dec!(1000000));
        assert_eq!(occupation, "Freelancer");
        assert_eq!(business_type, None);
        assert_eq!(state.as_deref(), Some("Lagos"));
        assert!(!detailed);
        assert_eq!(report, None);
    }

    #[test]
    fn global_format_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["easytax", "vat", "--amount", "100000", "--format", "json"])
            .unwrap();

        assert_eq!(cli.format, Some(OutputFormat::Json));
    }

    #[test]
    fn rejects_non_numeric_money() {
        let result = Cli::try_parse_from(["easytax", "vat", "--amount", "lots"]);

        assert!(result.is_err());
    }

    #[test]
    fn batch_takes_positional_file() {
        let cli = Cli::try_parse_from(["easytax", "batch", "inputs.csv"]).unwrap();

        let Command::Batch { file, output } = cli.command else {
            panic!("expected batch command");
        };
        assert_eq!(file, PathBuf::from("inputs.csv"));
        assert_eq!(output, None);
    }
}
