//! Human-facing parsing and formatting.
//!
//! Parsing accepts the free-form figures people actually type —
//! `"25.2 XRP"`, `"USD 100.40"`, `"100.40USD"`, a number paired with a
//! 40-hex currency code — and formatting exposes the precision,
//! significant-digit, grouping and sign controls a UI needs. Both ends can
//! apply a currency's interest factor at a reference date so figures
//! round-trip at present value.

use crate::amount::{issued_value_checked, Amount};
use crate::currency::Currency;
use crate::decimal::Decimal;
use crate::errors::{Result, XrpkitError};
use crate::uint::UInt160;
use crate::value::{IssuedValue, NativeValue};

/// Options for [`Amount::to_human`].
///
/// The defaults mirror the wire-adjacent rendering: group separator `,`
/// every 3 digits, a `-` prefix for negatives, no precision limits.
#[derive(Clone, Debug)]
pub struct FormatOptions {
    /// Maximum fractional digits; the cut rounds half-up and carries into
    /// the integer part.
    pub precision: Option<usize>,
    /// Zero-pad the fraction up to this length.
    pub min_precision: Option<usize>,
    /// Suppress an all-zero fraction entirely.
    pub skip_empty_fraction: bool,
    /// Cap significant digits, trimming only the fractional part. A zero
    /// integer part counts no digits, and leading fractional zeros are
    /// skipped while the integer part is zero.
    pub max_sig_digits: Option<usize>,
    /// Thousands separator; `None` disables grouping.
    pub group_sep: Option<char>,
    /// Digits per group.
    pub group_width: usize,
    /// Emit a `-` prefix for negative values.
    pub signed: bool,
    /// Apply the currency's interest factor at this network-epoch date
    /// before formatting.
    pub reference_date: Option<i64>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            precision: None,
            min_precision: None,
            skip_empty_fraction: false,
            max_sig_digits: None,
            group_sep: Some(','),
            group_width: 3,
            signed: true,
            reference_date: None,
        }
    }
}

/// Parse a human figure into an amount. See [`Amount::from_human`].
pub(crate) fn parse_human(text: &str, reference_date: Option<i64>) -> Result<Amount> {
    let tokens: Vec<&str> = text.split(' ').map(str::trim).filter(|t| !t.is_empty()).collect();

    let (value_text, currency_text) = match tokens.as_slice() {
        [single] => {
            if is_number(single) {
                (single.to_string(), "XRP".to_string())
            } else if single.len() > 3 {
                // A trailing 3-character code glued to the number.
                let (value, code) = single.split_at(single.len() - 3);
                if !code.bytes().all(|b| b.is_ascii_alphanumeric()) {
                    return Ok(Amount::invalid());
                }
                (value.to_string(), code.to_uppercase())
            } else {
                return Ok(Amount::invalid());
            }
        }
        [first, second] => {
            if is_number(first) {
                (first.to_string(), second.to_uppercase())
            } else if is_number(second) {
                (second.to_string(), first.to_uppercase())
            } else {
                return Ok(Amount::invalid());
            }
        }
        _ => return Ok(Amount::invalid()),
    };

    if !is_number(&value_text) {
        return Ok(Amount::invalid());
    }
    let currency = match Currency::from_json(&currency_text) {
        Ok(currency) => currency,
        Err(_) => return Ok(Amount::invalid()),
    };

    if currency.is_native() {
        return match NativeValue::from_xrp_str(&value_text) {
            Ok(value) => Ok(Amount::new_native(value)),
            Err(XrpkitError::InvalidArgument(_)) => Ok(Amount::invalid()),
            Err(err) => Err(err),
        };
    }

    let issued = match issued_value_checked(&value_text)? {
        Some(value) => value,
        None => return Ok(Amount::invalid()),
    };
    let mut value = *issued.decimal();
    if let Some(date) = reference_date {
        if currency.has_interest() {
            // Store at present value: the figure is the future face value.
            let factor = Decimal::from_f64(currency.get_interest_at(date));
            value = value.divide(&factor)?;
        }
    }
    Ok(Amount::new_issued(
        IssuedValue::from_decimal(&value),
        currency,
        UInt160::one(),
    ))
}

/// Format an amount for people. See [`Amount::to_human`].
pub(crate) fn format_human(amount: &Amount, opts: &FormatOptions) -> Result<String> {
    if !amount.is_valid() {
        return Ok(String::new());
    }

    let mut value = *amount.decimal();
    if let Some(date) = opts.reference_date {
        if amount.currency().has_interest() {
            let factor = Decimal::from_f64(amount.currency().get_interest_at(date));
            value = value.multiply(&factor)?;
        }
    }
    if amount.is_native() {
        // Drops to XRP for display.
        value = value.mul_pow10(-6)?;
    }

    let negative = value.is_negative();
    let (mut int_part, mut frac_part) = value.positional_parts();

    if !frac_part.is_empty() || !opts.skip_empty_fraction {
        if let Some(precision) = opts.precision {
            let keep = precision.min(frac_part.len());
            match round_fraction(&frac_part, keep) {
                Rounded::Carried => {
                    int_part = increment_digits(&int_part);
                    frac_part = String::new();
                }
                Rounded::Kept(frac) => frac_part = frac,
            }
        }

        if let Some(max_sig) = opts.max_sig_digits {
            let int_is_zero = int_part.bytes().all(|b| b == b'0');
            let mut digits = if int_is_zero { 0 } else { int_part.len() };
            digits += if int_is_zero {
                frac_part.trim_start_matches('0').len()
            } else {
                frac_part.len()
            };
            let excess = digits.saturating_sub(max_sig).min(frac_part.len());
            if excess > 0 {
                match round_fraction(&frac_part, frac_part.len() - excess) {
                    Rounded::Carried => {
                        int_part = increment_digits(&int_part);
                        frac_part = String::new();
                    }
                    Rounded::Kept(frac) => frac_part = frac,
                }
            }
        }

        if let Some(min_precision) = opts.min_precision {
            while frac_part.len() < min_precision {
                frac_part.push('0');
            }
        }
    }

    if let Some(sep) = opts.group_sep {
        int_part = group_digits(&int_part, opts.group_width.max(1), sep);
    }

    let mut formatted = String::new();
    if opts.signed && negative {
        formatted.push('-');
    }
    formatted.push_str(if int_part.is_empty() { "0" } else { int_part.as_str() });
    if !frac_part.is_empty() {
        formatted.push('.');
        formatted.push_str(&frac_part);
    }
    Ok(formatted)
}

/// Wire text for an issued value.
///
/// Fixed-point rendering places the 16 mantissa digits inside a zero-padded
/// window split at `exponent + 43`; exponents outside `[-25, -4]` (and
/// non-zero) switch to e-notation. The window boundary is load-bearing for
/// wire compatibility and must not be widened.
pub(crate) fn format_issued_text(value: &Decimal) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_zero() {
        return "0".to_string();
    }

    let offset = value.exponent();
    let sign = if value.is_negative() { "-" } else { "" };
    if offset != 0 && !(-25..=-4).contains(&offset) {
        return format!("{}{}e{}", sign, value.mantissa(), offset);
    }

    let window = format!("{}{:016}{}", "0".repeat(27), value.mantissa(), "0".repeat(23));
    let split = (offset + 43) as usize;
    let (int_raw, frac_raw) = window.split_at(split);
    let int_part = int_raw.trim_start_matches('0');
    let frac_part = frac_raw.trim_end_matches('0');

    let int_part = if int_part.is_empty() { "0" } else { int_part };
    if frac_part.is_empty() {
        format!("{}{}", sign, int_part)
    } else {
        format!("{}{}.{}", sign, int_part, frac_part)
    }
}

/// Outcome of rounding a fraction string at a cut point.
enum Rounded {
    /// The rounded digits (leading and trailing zeros preserved).
    Kept(String),
    /// The round carried past the most significant fractional digit.
    Carried,
}

/// Half-up rounding of a digit string to `keep` digits.
fn round_fraction(frac: &str, keep: usize) -> Rounded {
    if keep >= frac.len() {
        return Rounded::Kept(frac.to_string());
    }
    let (kept, rest) = frac.split_at(keep);
    let round_up = rest.bytes().next().is_some_and(|b| b >= b'5');
    if !round_up {
        return Rounded::Kept(kept.to_string());
    }
    let mut digits: Vec<u8> = kept.bytes().collect();
    let mut carry = true;
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            carry = false;
            break;
        }
    }
    if carry {
        Rounded::Carried
    } else {
        Rounded::Kept(String::from_utf8(digits).expect("ascii digits"))
    }
}

/// Increment a decimal digit string ("99" becomes "100", "" becomes "1").
fn increment_digits(digits: &str) -> String {
    let mut out: Vec<u8> = digits.bytes().collect();
    let mut carry = true;
    for digit in out.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            carry = false;
            break;
        }
    }
    let mut incremented = String::from_utf8(out).expect("ascii digits");
    if carry {
        incremented.insert(0, '1');
    }
    incremented
}

/// Insert a separator every `width` digits, counting from the right.
fn group_digits(digits: &str, width: usize, sep: char) -> String {
    if digits.len() <= width {
        return digits.to_string();
    }
    let first = match digits.len() % width {
        0 => width,
        rem => rem,
    };
    let mut out = String::with_capacity(digits.len() + digits.len() / width);
    out.push_str(&digits[..first]);
    let mut rest = &digits[first..];
    while !rest.is_empty() {
        out.push(sep);
        out.push_str(&rest[..width]);
        rest = &rest[width..];
    }
    out
}

/// At least one digit, and nothing but digits and dots. Detailed validation
/// happens in the value parsers.
fn is_number(text: &str) -> bool {
    !text.is_empty()
        && text.bytes().all(|b| b.is_ascii_digit() || b == b'.')
        && text.bytes().any(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amount::Amount;

    fn fmt(amount: &Amount, opts: &FormatOptions) -> String {
        amount.to_human(opts).unwrap()
    }

    #[test]
    fn test_parse_shapes() {
        let bare = Amount::from_human("250", None).unwrap();
        assert!(bare.is_native());
        assert_eq!(bare.to_text(), "250000000");

        let glued = Amount::from_human("100.40USD", None).unwrap();
        assert_eq!(glued.to_text(), "100.4");
        assert_eq!(glued.currency().to_json(), "USD");

        let code_first = Amount::from_human("XRP 250", None).unwrap();
        assert_eq!(code_first.to_text(), "250000000");

        let value_first = Amount::from_human("100.40 usd", None).unwrap();
        assert_eq!(value_first.currency().to_json(), "USD");

        let hex = Amount::from_human("10 0158415500000000C1F76FF6ECB0BAC600000000", None).unwrap();
        assert!(hex.currency().has_interest());
    }

    #[test]
    fn test_parse_rejects() {
        assert!(!Amount::from_human("", None).unwrap().is_valid());
        assert!(!Amount::from_human("USD", None).unwrap().is_valid());
        assert!(!Amount::from_human("one two three", None).unwrap().is_valid());
        assert!(!Amount::from_human("USD EUR", None).unwrap().is_valid());
        assert!(!Amount::from_human("1.2.3 USD", None).unwrap().is_valid());
        // A bare 40-hex code is only a currency when paired with a number.
        assert!(!Amount::from_human(
            "0158415500000000C1F76FF6ECB0BAC600000000",
            None
        )
        .unwrap()
        .is_valid());
    }

    #[test]
    fn test_present_value_parse() {
        let currency = Currency::from_human("XAU (-50%pa)").unwrap();
        let hex = currency.to_hex();
        // One half-life out, 10 units of face value cost 20 at present
        // value (demurrage halved the factor).
        let date = currency.interest_half_life().unwrap().abs() as i64;
        let amount = Amount::from_human(&format!("10 {}", hex), Some(date)).unwrap();
        let value = amount.to_text();
        let parsed: f64 = value.parse().unwrap();
        assert!((parsed - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_format_defaults() {
        let amount = Amount::from_json_text("1234567/USD/rrrrrrrrrrrrrrrrrrrrBZbvji").unwrap();
        assert_eq!(fmt(&amount, &FormatOptions::default()), "1,234,567");

        let native = Amount::from_json_text("2500000").unwrap();
        assert_eq!(fmt(&native, &FormatOptions::default()), "2.5");
    }

    #[test]
    fn test_format_precision() {
        let amount = Amount::from_json_text("1.2345/USD/rrrrrrrrrrrrrrrrrrrrBZbvji").unwrap();
        let opts = FormatOptions {
            precision: Some(2),
            group_sep: None,
            ..FormatOptions::default()
        };
        assert_eq!(fmt(&amount, &opts), "1.23");

        // Half-up at the cut, carrying into the integer part.
        let carry = Amount::from_json_text("1.997/USD/rrrrrrrrrrrrrrrrrrrrBZbvji").unwrap();
        let opts = FormatOptions {
            precision: Some(1),
            group_sep: None,
            ..FormatOptions::default()
        };
        assert_eq!(fmt(&carry, &opts), "2");

        let nines = Amount::from_json_text("9.99/USD/rrrrrrrrrrrrrrrrrrrrBZbvji").unwrap();
        let opts = FormatOptions {
            precision: Some(1),
            group_sep: None,
            ..FormatOptions::default()
        };
        assert_eq!(fmt(&nines, &opts), "10");
    }

    #[test]
    fn test_format_min_precision_and_skip() {
        let amount = Amount::from_json_text("5/USD/rrrrrrrrrrrrrrrrrrrrBZbvji").unwrap();
        let opts = FormatOptions {
            min_precision: Some(3),
            group_sep: None,
            ..FormatOptions::default()
        };
        assert_eq!(fmt(&amount, &opts), "5.000");

        let opts = FormatOptions {
            min_precision: Some(3),
            skip_empty_fraction: true,
            group_sep: None,
            ..FormatOptions::default()
        };
        assert_eq!(fmt(&amount, &opts), "5");
    }

    #[test]
    fn test_format_max_sig_digits() {
        let amount = Amount::from_json_text("123.4567/USD/rrrrrrrrrrrrrrrrrrrrBZbvji").unwrap();
        let opts = FormatOptions {
            max_sig_digits: Some(5),
            group_sep: None,
            ..FormatOptions::default()
        };
        assert_eq!(fmt(&amount, &opts), "123.46");

        // A zero integer part counts no digits, and its leading fractional
        // zeros are skipped.
        let small = Amount::from_json_text("0.0012345/USD/rrrrrrrrrrrrrrrrrrrrBZbvji").unwrap();
        let opts = FormatOptions {
            max_sig_digits: Some(3),
            group_sep: None,
            ..FormatOptions::default()
        };
        assert_eq!(fmt(&small, &opts), "0.00123");
    }

    #[test]
    fn test_format_sign_controls() {
        let neg = Amount::from_json_text("-12/USD/rrrrrrrrrrrrrrrrrrrrBZbvji").unwrap();
        assert_eq!(fmt(&neg, &FormatOptions::default()), "-12");

        let opts = FormatOptions {
            signed: false,
            ..FormatOptions::default()
        };
        assert_eq!(fmt(&neg, &opts), "12");
    }

    #[test]
    fn test_format_grouping() {
        let amount =
            Amount::from_json_text("1234567.89/USD/rrrrrrrrrrrrrrrrrrrrBZbvji").unwrap();
        assert_eq!(fmt(&amount, &FormatOptions::default()), "1,234,567.89");

        let opts = FormatOptions {
            group_sep: Some('.'),
            group_width: 2,
            ..FormatOptions::default()
        };
        assert_eq!(fmt(&amount, &opts), "1.23.45.67.89");

        let opts = FormatOptions {
            group_sep: None,
            ..FormatOptions::default()
        };
        assert_eq!(fmt(&amount, &opts), "1234567.89");
    }

    #[test]
    fn test_format_invalid_is_empty() {
        assert_eq!(fmt(&Amount::invalid(), &FormatOptions::default()), "");
    }

    #[test]
    fn test_issued_text_window() {
        let value = Decimal::from_str_exact("100.4").unwrap();
        assert_eq!(format_issued_text(&value), "100.4");

        let whole = Decimal::from_str_exact("5").unwrap();
        assert_eq!(format_issued_text(&whole), "5");

        let negative = Decimal::from_str_exact("-0.005").unwrap();
        assert_eq!(format_issued_text(&negative), "-0.005");

        assert_eq!(format_issued_text(&Decimal::ZERO), "0");
    }

    #[test]
    fn test_issued_text_e_notation_outside_window() {
        // Exponent -3 sits outside [-25, -4]: e-notation.
        let large = Decimal::from_str_exact("1.0044e12").unwrap();
        assert_eq!(large.exponent(), -3);
        assert_eq!(format_issued_text(&large), "1004400000000000e-3");

        // Exponent -26 is just past the fixed-point window.
        let tiny = Decimal::from_str_exact("1e-11").unwrap();
        assert_eq!(tiny.exponent(), -26);
        assert_eq!(format_issued_text(&tiny), "1000000000000000e-26");

        // Exponent -25 still renders fixed point.
        let edge = Decimal::from_str_exact("1e-10").unwrap();
        assert_eq!(edge.exponent(), -25);
        assert_eq!(format_issued_text(&edge), "0.0000000001");
    }

    #[test]
    fn test_round_fraction() {
        assert!(matches!(round_fraction("45", 1), Rounded::Kept(s) if s == "5"));
        assert!(matches!(round_fraction("44", 1), Rounded::Kept(s) if s == "4"));
        assert!(matches!(round_fraction("95", 1), Rounded::Carried));
        assert!(matches!(round_fraction("995", 2), Rounded::Carried));
        assert!(matches!(round_fraction("095", 2), Rounded::Kept(s) if s == "10"));
        assert!(matches!(round_fraction("5", 0), Rounded::Carried));
        assert!(matches!(round_fraction("4", 0), Rounded::Kept(s) if s.is_empty()));
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("1234567", 3, ','), "1,234,567");
        assert_eq!(group_digits("123456", 3, ','), "123,456");
        assert_eq!(group_digits("12", 3, ','), "12");
        assert_eq!(group_digits("0", 3, ','), "0");
    }
}
