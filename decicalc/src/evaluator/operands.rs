use bigdecimal::BigDecimal;
use serde_json::Value;
use std::str::FromStr;

/// Parse a client-supplied operand as a decimal.
///
/// Strings may carry a sign, surrounding whitespace and an exponent
/// (`"1.5e3"`). JSON numbers are read from the text they were written with,
/// so `0.12345678901234567890123` keeps every digit. Booleans, arrays,
/// objects, `null`, empty strings and non-finite forms (`NaN`, `Infinity`)
/// yield `None`.
///
/// An operand that parses but lies beyond the supported exponent range is
/// still returned; the evaluator reports it as out of range.
pub fn parse_operand(value: &Value) -> Option<BigDecimal> {
    match value {
        Value::String(s) => parse_decimal(s),
        Value::Number(n) => parse_decimal(&n.to_string()),
        _ => None,
    }
}

fn parse_decimal(text: &str) -> Option<BigDecimal> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    BigDecimal::from_str(text).ok()
}
