//! Binary conversion
//!
//! Integers are carried as `u64` and bounded by a caller-supplied limit
//! (`MAX_BINARY_VALUE` by default) so that every accepted value survives a
//! round trip through an `f64`.

use calculator_sdk::{BinaryConversion, CalculatorError};

use super::validation::validate_convertible;

/// Render a non-negative integer as base-2 text without leading zeros.
///
/// # Errors
/// `NotConvertible` for negative, fractional, or non-finite values;
/// `Conversion` when the value exceeds `limit`.
pub fn to_binary(value: f64, limit: u64) -> Result<BinaryConversion, CalculatorError> {
    let integer = validate_convertible(value, limit)?;
    Ok(BinaryConversion {
        result: format!("{integer:b}"),
        is_binary: true,
    })
}

/// Parse base-2 text and render it as a base-10 string.
///
/// Only the characters `0` and `1` are accepted; signs and whitespace are
/// rejected like any other digit.
///
/// # Errors
/// `Conversion` carrying the parser's message when the text is empty,
/// contains a non-binary character, or exceeds `limit`.
pub fn from_binary(text: &str, limit: u64) -> Result<BinaryConversion, CalculatorError> {
    let integer = parse_binary(text)?;
    if integer > limit {
        return Err(CalculatorError::conversion(format!(
            "value exceeds the supported range (0 to {limit})"
        )));
    }
    Ok(BinaryConversion {
        result: integer.to_string(),
        is_binary: false,
    })
}

fn parse_binary(text: &str) -> Result<u64, CalculatorError> {
    // `from_str_radix` tolerates a leading `+`; binary text never carries one.
    if text.chars().any(|c| !matches!(c, '0' | '1')) {
        return Err(CalculatorError::conversion("invalid digit found in string"));
    }
    u64::from_str_radix(text, 2).map_err(CalculatorError::conversion)
}
