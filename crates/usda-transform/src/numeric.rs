//! Tolerant decimal parsing for loosely typed source fields.
//!
//! Accepts the culture-invariant grammar only: optional sign, digits with at
//! most one `.`, optional exponent. Anything else yields `None`; parsing never
//! fails loudly and never rounds.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Largest power of ten applied for a positive exponent.
const MAX_EXPONENT: u32 = 28;

/// Parses an optional source value as a decimal.
///
/// Absent, blank, malformed and out-of-range input all yield `None`.
pub fn parse_decimal(value: Option<&str>) -> Option<Decimal> {
    value.and_then(parse_decimal_str)
}

/// Parses a string value as a decimal, returning None for invalid or empty strings.
///
/// The scale written in the source is preserved, so `"3.50"` parses to `3.50`.
pub fn parse_decimal_str(value: &str) -> Option<Decimal> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let (mantissa, exponent) = split_exponent(trimmed)?;
    if !is_plain_number(mantissa) {
        return None;
    }
    let mut parsed = Decimal::from_str_exact(&canonical_mantissa(mantissa)).ok()?;
    match exponent {
        None | Some(0) => {}
        Some(exp) if exp < 0 => {
            let shift = u32::try_from(exp.unsigned_abs()).ok()?;
            let scale = parsed.scale().checked_add(shift)?;
            parsed.set_scale(scale).ok()?;
        }
        Some(exp) => {
            let exp = u32::try_from(exp).ok()?;
            if exp > MAX_EXPONENT {
                return None;
            }
            // Consume fraction digits first so `1.50E1` keeps one of them.
            let shift = exp.min(parsed.scale());
            parsed.set_scale(parsed.scale() - shift).ok()?;
            let remainder = exp - shift;
            if remainder > 0 {
                let factor = Decimal::from_i128_with_scale(10_i128.pow(remainder), 0);
                parsed = parsed.checked_mul(factor)?;
            }
        }
    }
    Some(parsed)
}

fn split_exponent(value: &str) -> Option<(&str, Option<i64>)> {
    match value.find(['e', 'E']) {
        None => Some((value, None)),
        Some(idx) => {
            let (mantissa, rest) = value.split_at(idx);
            let digits = &rest[1..];
            let unsigned = digits.strip_prefix(['+', '-']).unwrap_or(digits);
            if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            let exponent = i64::from_str(digits.strip_prefix('+').unwrap_or(digits)).ok()?;
            Some((mantissa, Some(exponent)))
        }
    }
}

fn is_plain_number(value: &str) -> bool {
    let unsigned = value.strip_prefix(['+', '-']).unwrap_or(value);
    let mut digits = 0usize;
    let mut dots = 0usize;
    for byte in unsigned.bytes() {
        match byte {
            b'0'..=b'9' => digits += 1,
            b'.' => dots += 1,
            _ => return false,
        }
    }
    digits > 0 && dots <= 1
}

/// Normalizes `+1.`, `-.5` and similar into a form `Decimal` accepts.
fn canonical_mantissa(value: &str) -> String {
    let (negative, unsigned) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let mut out = String::with_capacity(value.len() + 2);
    if negative {
        out.push('-');
    }
    out.push_str(if integer.is_empty() { "0" } else { integer });
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}
