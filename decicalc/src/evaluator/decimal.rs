//! Division and rendering for `BigDecimal`
//!
//! Addition, subtraction and multiplication are exact on `BigDecimal` and
//! need nothing here. Division is carried out on the coefficients so the
//! rounding (half-even at [`DIVISION_PRECISION`] significant digits) and the
//! exponent of exact quotients are fixed, whatever defaults the `bigdecimal`
//! build was compiled with.

use bigdecimal::BigDecimal;
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;

/// Significant digits kept by a non-terminating division
pub const DIVISION_PRECISION: u32 = 28;

/// Largest adjusted exponent, in either direction, an operand or a result
/// may carry
pub const MAX_EXPONENT: i64 = 999_999;

fn pow10(exponent: u32) -> BigUint {
    BigUint::from(10u32).pow(exponent)
}

fn digit_count(n: &BigUint) -> usize {
    n.to_string().len()
}

/// Exponent of the most significant digit: `0` for `1.5`, `3` for `1e3`,
/// `-2` for `0.01`. `None` for zero.
pub fn adjusted_exponent(value: &BigDecimal) -> Option<i128> {
    let (coefficient, scale) = value.as_bigint_and_exponent();
    if coefficient.is_zero() {
        return None;
    }
    let digits = digit_count(coefficient.magnitude()) as i128;
    Some(digits - 1 - i128::from(scale))
}

/// Whether `value` lies within `±MAX_EXPONENT`. Zero always does.
pub fn in_range(value: &BigDecimal) -> bool {
    adjusted_exponent(value).map_or(true, |adjusted| adjusted.abs() <= i128::from(MAX_EXPONENT))
}

/// Divide `dividend` by a non-zero `divisor`.
///
/// An exact quotient keeps the exponent closest to the difference of the
/// operand exponents, so `10 / 4` is `2.5` and `6.0 / 2` is `3.0`. Anything
/// else is rounded half-even to `precision` significant digits.
pub fn divide(dividend: &BigDecimal, divisor: &BigDecimal, precision: u32) -> BigDecimal {
    let (dividend, dividend_scale) = dividend.as_bigint_and_exponent();
    let (divisor, divisor_scale) = divisor.as_bigint_and_exponent();
    let ideal_scale = dividend_scale - divisor_scale;

    if dividend.is_zero() {
        return BigDecimal::new(BigInt::zero(), ideal_scale);
    }

    let sign = if dividend.sign() == divisor.sign() {
        Sign::Plus
    } else {
        Sign::Minus
    };
    let dividend = dividend.magnitude();
    let divisor = divisor.magnitude();

    // One digit beyond the precision is enough to round on, together with a
    // sticky digit for a non-zero remainder.
    let shift = digit_count(divisor) as i64 - digit_count(dividend) as i64 + i64::from(precision) + 1;
    let mut scale = ideal_scale + shift;

    let (mut coefficient, remainder) = if shift >= 0 {
        let scaled = dividend * pow10(shift as u32);
        (&scaled / divisor, &scaled % divisor)
    } else {
        let scaled = divisor * pow10(shift.unsigned_abs() as u32);
        (dividend / &scaled, dividend % &scaled)
    };

    if !remainder.is_zero() {
        if (&coefficient % 5u32).is_zero() {
            coefficient += 1u32;
        }
    } else {
        while scale > ideal_scale && (&coefficient % 10u32).is_zero() {
            coefficient /= 10u32;
            scale -= 1;
        }
    }

    let (coefficient, scale) = round_half_even(coefficient, scale, precision);
    BigDecimal::new(BigInt::from_biguint(sign, coefficient), scale)
}

fn round_half_even(coefficient: BigUint, scale: i64, precision: u32) -> (BigUint, i64) {
    let digits = digit_count(&coefficient) as u32;
    if digits <= precision {
        return (coefficient, scale);
    }

    let dropped = digits - precision;
    let unit = pow10(dropped);
    let half = &unit / 2u32;
    let mut kept = &coefficient / &unit;
    let rest = &coefficient % &unit;

    if rest > half || (rest == half && !(&kept % 2u32).is_zero()) {
        kept += 1u32;
    }

    let mut scale = scale - i64::from(dropped);
    if digit_count(&kept) as u32 > precision {
        // 99..9 rounded up to 100..0
        kept /= 10u32;
        scale -= 1;
    }
    (kept, scale)
}

/// Render a decimal the way it is returned to clients.
///
/// Plain notation when the value has no positive exponent and its leading
/// digit is no further than six places after the point (`2.50`, `0.000001`).
/// Scientific notation otherwise (`1E+3`, `1E-7`,
/// `1.219326311370217943225118122E+29`).
pub fn format_decimal(value: &BigDecimal) -> String {
    let (coefficient, scale) = value.as_bigint_and_exponent();
    let digits = coefficient.magnitude().to_string();
    let sign = if coefficient.sign() == Sign::Minus { "-" } else { "" };

    let exponent = -i128::from(scale);
    let length = digits.len() as i128;
    let adjusted = exponent + length - 1;

    let body = if exponent == 0 {
        digits
    } else if exponent < 0 && adjusted >= -6 {
        let point = length + exponent;
        if point > 0 {
            let (int_part, frac_part) = digits.split_at(point as usize);
            format!("{}.{}", int_part, frac_part)
        } else {
            format!("0.{}{}", "0".repeat(point.unsigned_abs() as usize), digits)
        }
    } else {
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}E{:+}", lead, adjusted)
        } else {
            format!("{}.{}E{:+}", lead, rest, adjusted)
        }
    };

    format!("{}{}", sign, body)
}
