//! Decimal parsing for untrusted numeric strings.
//!
//! Query parameters and upstream rate fields both arrive as text. Neither is
//! ever routed through `f64`: the string goes straight to `Decimal`.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Parses a decimal string in plain (`"1000.50"`) or scientific (`"1.5e-5"`)
/// notation.
///
/// Returns `None` for anything else, including empty input, surrounding
/// whitespace, digit separators, `NaN` and `Inf`. A non-zero value too small
/// to represent is rejected rather than rounded to zero.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use coinsplit_shared::types::parse_decimal;
///
/// assert_eq!(parse_decimal("1000"), Some(dec!(1000)));
/// assert_eq!(parse_decimal("2.5e2"), Some(dec!(250)));
/// assert_eq!(parse_decimal("100abc"), None);
/// ```
#[must_use]
pub fn parse_decimal(raw: &str) -> Option<Decimal> {
    if raw.is_empty() || !raw.bytes().all(is_numeric_byte) {
        return None;
    }

    let (mantissa, parsed) = match raw.split_once(['e', 'E']) {
        Some((mantissa, _)) => (mantissa, Decimal::from_scientific(raw).ok()?),
        None => (raw, Decimal::from_str(raw).ok()?),
    };

    // Digits past the 28th decimal place are rounded away; a non-zero value
    // must not collapse to zero.
    if parsed.is_zero() && mantissa.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        return None;
    }

    Some(parsed)
}

const fn is_numeric_byte(b: u8) -> bool {
    matches!(b, b'0'..=b'9' | b'.' | b'+' | b'-' | b'e' | b'E')
}
