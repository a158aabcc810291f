//! Currency formatting
//!
//! Amounts are shown Brazilian-style by default ("R$ 1.234,56"); the
//! symbol and both separators come from [`Settings`].

use crate::config::Settings;
use crate::models::Amount;

/// Placeholder for a total that overflowed
const OVERFLOWED: &str = "--";

/// Format an amount with symbol, grouped digits and two decimals
pub fn format_currency(amount: Amount, settings: &Settings) -> String {
    if !amount.is_finite() {
        return format!("{} {}", settings.currency_symbol, OVERFLOWED);
    }

    let cents = (amount.value().abs() * 100.0).round() as u128;
    let units = cents / 100;
    let cents_part = cents % 100;
    let sign = if amount.is_negative() && cents > 0 { "-" } else { "" };

    format!(
        "{}{} {}{}{:02}",
        sign,
        settings.currency_symbol,
        group_digits(units, settings.thousands_separator),
        settings.decimal_separator,
        cents_part
    )
}

/// Like [`format_currency`], but zero renders as an empty cell
///
/// Item tables show untouched values blank, as an empty input field would.
pub fn format_item_value(amount: Amount, settings: &Settings) -> String {
    if amount.is_zero() {
        String::new()
    } else {
        format_currency(amount, settings)
    }
}

fn group_digits(units: u128, separator: char) -> String {
    let digits = units.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }

    grouped
}
