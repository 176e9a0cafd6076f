//! Currency display formatting
//!
//! Renders a price as fixed-unit USD text: two decimal places, comma
//! thousands grouping, sign ahead of the symbol. Values that are not finite
//! numbers degrade to the `"Invalid price"` sentinel.

use log::error;

use crate::errors::AppError;

/// Sentinel returned when the input is not a finite number
pub const INVALID_PRICE: &str = "Invalid price";

/// A price input: an amount or raw text to parse
#[derive(Debug, Clone)]
pub enum PriceValue {
    Amount(f64),
    Text(String),
}

impl From<f64> for PriceValue {
    fn from(amount: f64) -> Self {
        PriceValue::Amount(amount)
    }
}

impl From<&str> for PriceValue {
    fn from(raw: &str) -> Self {
        PriceValue::Text(raw.to_string())
    }
}

impl From<String> for PriceValue {
    fn from(raw: String) -> Self {
        PriceValue::Text(raw)
    }
}

/// Format a price as USD text, degrading to the sentinel on failure
///
/// Failures are logged here, once; callers that need the error instead use
/// [`try_format_price`].
pub fn format_price(value: PriceValue) -> String {
    match try_format_price(&value) {
        Ok(text) => text,
        Err(err) => {
            error!("Price formatting failed: {}", err);
            INVALID_PRICE.to_string()
        }
    }
}

/// Fallible core of [`format_price`]
///
/// Rejects anything that does not parse as a number and any non-finite
/// amount, `inf`/`NaN` spellings included.
pub fn try_format_price(value: &PriceValue) -> Result<String, AppError> {
    let amount = match value {
        PriceValue::Amount(amount) => *amount,
        PriceValue::Text(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|_| AppError::InvalidPrice(raw.clone()))?,
    };
    if !amount.is_finite() {
        return Err(AppError::InvalidPrice(amount.to_string()));
    }
    Ok(format_usd(amount))
}

fn format_usd(amount: f64) -> String {
    let fixed = format!("{:.2}", amount);
    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (whole, cents) = digits.split_once('.').unwrap_or((digits, "00"));
    format!("{}${}.{}", sign, group_thousands(whole), cents)
}

fn group_thousands(whole: &str) -> String {
    let digits: Vec<char> = whole.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_a_numeric_amount() {
        assert_eq!(format_price(PriceValue::from(1234.5)), "$1,234.50");
    }

    #[test]
    fn parses_and_formats_text_amounts() {
        assert_eq!(format_price(PriceValue::from("1234.5")), "$1,234.50");
        assert_eq!(format_price(PriceValue::from(" 48 ")), "$48.00");
    }

    #[test]
    fn groups_every_three_digits() {
        assert_eq!(format_price(PriceValue::from(1_000_000.0)), "$1,000,000.00");
        assert_eq!(format_price(PriceValue::from(999.99)), "$999.99");
    }

    #[test]
    fn sign_sits_ahead_of_the_symbol() {
        assert_eq!(format_price(PriceValue::from(-1234.5)), "-$1,234.50");
    }

    #[test]
    fn zero_is_two_decimal_places() {
        assert_eq!(format_price(PriceValue::from(0.0)), "$0.00");
    }

    #[test]
    fn unparsable_text_degrades_to_the_sentinel() {
        assert_eq!(format_price(PriceValue::from("abc")), INVALID_PRICE);
        assert_eq!(format_price(PriceValue::from("")), INVALID_PRICE);
    }

    #[test]
    fn non_finite_values_are_rejected() {
        assert_eq!(format_price(PriceValue::from(f64::NAN)), INVALID_PRICE);
        assert_eq!(format_price(PriceValue::from("inf")), INVALID_PRICE);
    }

    #[test]
    fn fallible_core_propagates_instead_of_degrading() {
        let err = try_format_price(&PriceValue::from("abc"));
        assert!(matches!(err, Err(AppError::InvalidPrice(_))));
    }
}
