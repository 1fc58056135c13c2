//! Human-readable rendering of calculation results.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use tax_core::calculations::common::round_to_naira;
use tax_core::calculations::PaymentQuote;
use tax_core::{BracketAllocation, TaxCalculationInput, TaxCalculationResult};

/// Formats a naira amount with thousands separators and no decimals.
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_cli::report::format_currency;
///
/// assert_eq!(format_currency(dec!(1000000)), "₦1,000,000");
/// assert_eq!(format_currency(dec!(1600.5)), "₦1,601");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let rounded = round_to_naira(amount);
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-₦{grouped}")
    } else {
        format!("₦{grouped}")
    }
}

/// Formats a fractional rate (`0.07`) as a percentage (`7%`).
pub fn format_rate(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
}

fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("—")
}

/// Renders the plain-text tax calculation report.
pub fn render_text_report(
    input: &TaxCalculationInput,
    result: &TaxCalculationResult,
    generated_on: NaiveDate,
    date_format: &str,
) -> String {
    format!(
        "Tax Calculation Report\n\
         ====================\n\
         Income: {income}\n\
         Occupation: {occupation}\n\
         Business Type: {business_type}\n\
         State: {state}\n\
         \n\
         Tax Breakdown:\n\
         - Federal Tax: {federal}\n\
         - State Tax: {state_tax}\n\
         - Total Tax: {total}\n\
         - Effective Rate: {rate}%\n\
         \n\
         Allowances:\n\
         - Personal Allowance: {allowance}\n\
         - Consolidated Relief: {relief}\n\
         - Taxable Income: {taxable}\n\
         \n\
         Generated on: {date}\n",
        income = format_currency(input.income),
        occupation = input.occupation,
        business_type = or_dash(input.business_type.as_deref()),
        state = or_dash(input.state.as_deref()),
        federal = format_currency(result.federal_tax),
        state_tax = format_currency(result.state_tax),
        total = format_currency(result.total_tax),
        rate = result.effective_rate,
        allowance = format_currency(result.breakdown.personal_allowance),
        relief = format_currency(result.breakdown.consolidated_relief),
        taxable = format_currency(result.breakdown.taxable_income),
        date = generated_on.format(date_format),
    )
}

fn render_allocation(allocation: &BracketAllocation) -> String {
    let range = match allocation.max_income {
        Some(max) => format!(
            "{} to {}",
            format_currency(allocation.min_income),
            format_currency(max)
        ),
        None => format!("above {}", format_currency(allocation.min_income)),
    };

    format!(
        "- {range} @ {}: {} taxed {}\n",
        format_rate(allocation.tax_rate),
        format_currency(allocation.taxable_amount),
        format_currency(allocation.tax)
    )
}

/// Renders how taxable income was spread across the brackets.
pub fn render_bracket_table(allocations: &[BracketAllocation]) -> String {
    let rows: String = if allocations.is_empty() {
        "- No taxable income\n".to_string()
    } else {
        allocations.iter().map(render_allocation).collect()
    };

    format!("Federal Tax by Bracket:\n{rows}")
}

pub fn render_company_income_tax(
    revenue: Decimal,
    expenses: Decimal,
    tax: Decimal,
) -> String {
    format!(
        "Company Income Tax\n\
         - Revenue: {}\n\
         - Expenses: {}\n\
         - Profit: {}\n\
         - Company Income Tax (30%): {}\n",
        format_currency(revenue),
        format_currency(expenses),
        format_currency(revenue.saturating_sub(expenses)),
        format_currency(tax)
    )
}

fn to_kobo(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// VAT keeps kobo, so it is shown with two decimal places.
pub fn render_vat(
    amount: Decimal,
    vat: Decimal,
) -> String {
    format!(
        "Value Added Tax\n\
         - Amount: {}\n\
         - VAT (7.5%): {}\n\
         - Amount incl. VAT: {}\n",
        to_kobo(amount),
        to_kobo(vat),
        to_kobo(amount.saturating_add(vat))
    )
}

pub fn render_payment_quote(quote: &PaymentQuote) -> String {
    format!(
        "Payment Summary\n\
         - Tax Amount: {}\n\
         - Service Commission: {}\n\
         - Total Payable: {}\n",
        format_currency(quote.tax_amount),
        format_currency(quote.commission),
        format_currency(quote.total_amount)
    )
}
