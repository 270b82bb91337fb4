//! Amount parsing and formatting.
//!
//! Amounts are `Decimal` end to end; binary floats never touch the balance.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Raw text that is not a decimal numeral after separator normalization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid number")]
pub struct ParseAmountError {
    pub input: String,
}

/// Parses user text into an amount.
///
/// Surrounding whitespace is ignored and `,` is accepted as the fractional
/// separator. The numeral is `[+-]digits[.digits]` with at least one digit and
/// at most one separator; anything else (blank text included) is rejected.
pub fn parse_amount(text: &str) -> Result<Decimal, ParseAmountError> {
    let err = || ParseAmountError {
        input: text.to_string(),
    };

    let normalized = text.trim().replace(',', ".");
    let canonical = canonical_numeral(&normalized).ok_or_else(err)?;

    // Digit strings past Decimal's 96-bit mantissa fail here.
    Decimal::from_str(&canonical).map_err(|_| err())
}

/// Rewrites `[+-]digits[.digits]` as `[-]int[.frac]`, or `None` when `s` is not
/// such a numeral.
fn canonical_numeral(s: &str) -> Option<String> {
    let (sign, unsigned) = match s.as_bytes().first() {
        Some(b'-') => ("-", &s[1..]),
        Some(b'+') => ("", &s[1..]),
        _ => ("", s),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if (int_part.is_empty() && frac_part.is_empty()) || !all_digits(int_part) || !all_digits(frac_part)
    {
        return None;
    }

    let int_part = if int_part.is_empty() { "0" } else { int_part };
    Some(if frac_part.is_empty() {
        format!("{sign}{int_part}")
    } else {
        format!("{sign}{int_part}.{frac_part}")
    })
}

fn round_to_cents(amount: Decimal) -> Decimal {
    let mut cents = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    cents.rescale(2);
    cents
}

/// Formats with exactly two decimals: `500` -> `"500.00"`.
pub fn format_amount(amount: Decimal) -> String {
    round_to_cents(amount).to_string()
}

/// Formats with thousands separators and two decimals: `10000` -> `"10,000.00"`.
pub fn format_balance(amount: Decimal) -> String {
    let plain = format_amount(amount);
    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped}.{frac_part}")
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/amount.rs"]
mod tests;
