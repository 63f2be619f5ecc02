//! Exact decimal arithmetic in the ledger's canonical representation.
//!
//! Every value is `sign * mantissa * 10^exponent` with the mantissa of a
//! non-zero value normalized to exactly 16 decimal digits. This is the
//! representation the consensus protocol serializes for issued amounts, so
//! all arithmetic here rounds the way the network does: division and
//! re-normalization truncate toward zero at the 16-digit boundary.
//!
//! NaN is a first-class state. Malformed operands and division by zero
//! produce NaN rather than an error, and NaN propagates through every
//! operation; callers surface it as an invalid amount at their boundary.
//! Errors are reserved for results the representation cannot hold at all
//! (exponent above +80).

use std::cmp::Ordering;
use std::fmt;

use crate::errors::{Result, XrpkitError};

/// Smallest canonical 16-digit mantissa (10^15).
pub(crate) const MANTISSA_MIN: u64 = 1_000_000_000_000_000;

/// Largest canonical 16-digit mantissa (10^16 - 1).
pub(crate) const MANTISSA_MAX: u64 = 9_999_999_999_999_999;

/// Smallest exponent a non-zero canonical value may carry.
pub(crate) const EXPONENT_MIN: i32 = -96;

/// Largest exponent a non-zero canonical value may carry.
pub(crate) const EXPONENT_MAX: i32 = 80;

/// Exponent assigned to the canonical zero.
pub(crate) const ZERO_EXPONENT: i32 = -100;

/// Scale factor applied to dividends so the quotient keeps 17 significant
/// digits before truncating back to 16.
const DIVIDE_SCALE: u128 = 100_000_000_000_000_000; // 10^17

/// Rounding mode for [`Decimal::round`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundMode {
    /// Truncate toward zero (the protocol default).
    Down,
    /// Round half away from zero.
    HalfUp,
}

/// A signed decimal in canonical mantissa/exponent form.
///
/// Copy semantics: operations return new values and never mutate their
/// operands.
#[derive(Clone, Copy, Debug)]
pub struct Decimal {
    sign: i8,
    mantissa: u64,
    exponent: i32,
    nan: bool,
}

impl Decimal {
    /// The canonical zero: sign 0, exponent -100.
    pub const ZERO: Decimal = Decimal {
        sign: 0,
        mantissa: 0,
        exponent: ZERO_EXPONENT,
        nan: false,
    };

    /// The not-a-number sentinel.
    pub const NAN: Decimal = Decimal {
        sign: 0,
        mantissa: 0,
        exponent: 0,
        nan: true,
    };

    /// One, pre-normalized.
    pub const ONE: Decimal = Decimal {
        sign: 1,
        mantissa: MANTISSA_MIN,
        exponent: -15,
        nan: false,
    };

    /// Build a canonical decimal from raw parts.
    ///
    /// The mantissa is scaled to 16 digits by adjusting the exponent. An
    /// exponent that ends up below -96 clamps the value to zero; one above
    /// +80 is unrepresentable and fails with `OutOfRange`.
    ///
    /// # Errors
    ///
    /// Returns `XrpkitError::OutOfRange` when the canonical exponent
    /// exceeds +80.
    pub fn from_parts(sign: i8, mantissa: u128, exponent: i32) -> Result<Decimal> {
        let (mantissa, exponent) = match normalize_mantissa(mantissa, exponent) {
            Some(parts) => parts,
            None => return Ok(Decimal::ZERO),
        };
        if exponent < EXPONENT_MIN {
            return Ok(Decimal::ZERO);
        }
        if exponent > EXPONENT_MAX {
            return Err(XrpkitError::OutOfRange(format!(
                "exponent {} above {}",
                exponent, EXPONENT_MAX
            )));
        }
        Ok(Decimal {
            sign: if sign < 0 { -1 } else { 1 },
            mantissa,
            exponent,
            nan: false,
        })
    }

    /// Build from a signed integer (exponent 0).
    pub fn from_integer(value: i128) -> Result<Decimal> {
        let sign = match value.cmp(&0) {
            Ordering::Less => -1,
            Ordering::Equal => return Ok(Decimal::ZERO),
            Ordering::Greater => 1,
        };
        Decimal::from_parts(sign, value.unsigned_abs(), 0)
    }

    /// Parse a decimal string: optional sign, digits, optional fraction,
    /// optional `e`/`E` exponent.
    ///
    /// # Errors
    ///
    /// Returns `XrpkitError::InvalidArgument` for anything that is not a
    /// plain decimal number, and `OutOfRange` when the value cannot be
    /// represented.
    pub fn from_str_exact(text: &str) -> Result<Decimal> {
        let (sign, mantissa, exponent) = parse_parts(text)?;
        Decimal::from_parts(sign, mantissa, exponent)
    }

    /// Convert from a binary float by way of its shortest decimal rendering.
    ///
    /// Used for interest factors, which the protocol itself defines as an
    /// IEEE-754 double.
    pub fn from_f64(value: f64) -> Decimal {
        if !value.is_finite() {
            return Decimal::NAN;
        }
        if value == 0.0 {
            return Decimal::ZERO;
        }
        // `{:e}` prints the shortest round-trip form, e.g. "9.55e-1".
        Decimal::from_str_exact(&format!("{:e}", value)).unwrap_or(Decimal::NAN)
    }

    pub fn is_nan(&self) -> bool {
        self.nan
    }

    pub fn is_zero(&self) -> bool {
        !self.nan && self.sign == 0
    }

    pub fn is_negative(&self) -> bool {
        self.sign < 0
    }

    pub fn is_positive(&self) -> bool {
        self.sign > 0
    }

    /// The sign: -1, 0 or +1. NaN reports 0.
    pub fn sign(&self) -> i8 {
        self.sign
    }

    /// The canonical 16-digit mantissa (0 for zero and NaN).
    pub fn mantissa(&self) -> u64 {
        self.mantissa
    }

    /// The canonical exponent (-100 for zero).
    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    pub fn negate(&self) -> Decimal {
        let mut out = *self;
        out.sign = -out.sign;
        out
    }

    pub fn abs(&self) -> Decimal {
        let mut out = *self;
        out.sign = out.sign.abs();
        out
    }

    /// Addition. Mantissas align to the larger exponent, so the operand
    /// with the smaller exponent loses its low digits first.
    pub fn add(&self, other: &Decimal) -> Result<Decimal> {
        if self.nan || other.nan {
            return Ok(Decimal::NAN);
        }
        if self.is_zero() {
            return Ok(*other);
        }
        if other.is_zero() {
            return Ok(*self);
        }

        let mut m1 = self.mantissa as i128 * self.sign as i128;
        let mut m2 = other.mantissa as i128 * other.sign as i128;
        let mut e1 = self.exponent;
        let mut e2 = other.exponent;

        // Bring both mantissas to the larger exponent, truncating the
        // smaller operand toward zero.
        while e1 < e2 {
            m1 /= 10;
            e1 += 1;
        }
        while e2 < e1 {
            m2 /= 10;
            e2 += 1;
        }

        let sum = m1 + m2;
        if sum == 0 {
            return Ok(Decimal::ZERO);
        }
        let sign = if sum < 0 { -1 } else { 1 };
        Decimal::from_parts(sign, sum.unsigned_abs(), e1)
    }

    pub fn subtract(&self, other: &Decimal) -> Result<Decimal> {
        self.add(&other.negate())
    }

    pub fn multiply(&self, other: &Decimal) -> Result<Decimal> {
        if self.nan || other.nan {
            return Ok(Decimal::NAN);
        }
        if self.is_zero() || other.is_zero() {
            return Ok(Decimal::ZERO);
        }
        let product = self.mantissa as u128 * other.mantissa as u128;
        Decimal::from_parts(
            self.sign * other.sign,
            product,
            self.exponent + other.exponent,
        )
    }

    /// Division. The dividend is scaled by 10^17 so the integer quotient
    /// carries one guard digit past the canonical width; re-normalization
    /// then truncates toward zero.
    ///
    /// Division by zero yields NaN, never an error.
    pub fn divide(&self, other: &Decimal) -> Result<Decimal> {
        if self.nan || other.nan || other.is_zero() {
            return Ok(Decimal::NAN);
        }
        if self.is_zero() {
            return Ok(Decimal::ZERO);
        }
        let scaled = self.mantissa as u128 * DIVIDE_SCALE;
        let quotient = scaled / other.mantissa as u128;
        Decimal::from_parts(
            self.sign * other.sign,
            quotient,
            self.exponent - other.exponent - 17,
        )
    }

    /// `1 / self`. Zero inverts to NaN.
    pub fn invert(&self) -> Result<Decimal> {
        Decimal::ONE.divide(self)
    }

    /// Exact scaling by a power of ten (drops/XRP unit moves).
    pub fn mul_pow10(&self, power: i32) -> Result<Decimal> {
        if self.nan {
            return Ok(Decimal::NAN);
        }
        if self.is_zero() {
            return Ok(Decimal::ZERO);
        }
        Decimal::from_parts(self.sign, self.mantissa as u128, self.exponent + power)
    }

    /// Round to `frac_digits` fractional decimal digits.
    pub fn round(&self, frac_digits: u32, mode: RoundMode) -> Result<Decimal> {
        if self.nan {
            return Ok(Decimal::NAN);
        }
        if self.is_zero() {
            return Ok(Decimal::ZERO);
        }
        let shift = -(frac_digits as i32) - self.exponent;
        if shift <= 0 {
            return Ok(*self);
        }
        if shift >= 17 {
            // Even half-up cannot reach the first kept digit: the mantissa
            // is below 10^16 and the cut is at 10^17 or beyond.
            return Ok(Decimal::ZERO);
        }
        let cut = pow10_u64(shift as u32);
        let mut kept = self.mantissa / cut;
        let dropped = self.mantissa % cut;
        if mode == RoundMode::HalfUp && dropped * 2 >= cut {
            kept += 1;
        }
        if kept == 0 {
            return Ok(Decimal::ZERO);
        }
        Decimal::from_parts(self.sign, kept as u128, self.exponent + shift)
    }

    /// Three-way comparison. NaN compares to nothing.
    pub fn compare(&self, other: &Decimal) -> Option<Ordering> {
        if self.nan || other.nan {
            return None;
        }
        match self.sign.cmp(&other.sign) {
            Ordering::Equal => {}
            order => return Some(order),
        }
        if self.sign == 0 {
            return Some(Ordering::Equal);
        }
        // Same non-zero sign: canonical form makes (exponent, mantissa)
        // order the magnitudes.
        let magnitude = (self.exponent, self.mantissa).cmp(&(other.exponent, other.mantissa));
        Some(if self.sign > 0 {
            magnitude
        } else {
            magnitude.reverse()
        })
    }

    /// Render with exactly `frac_digits` fractional digits, rounding
    /// half-up at the cut.
    pub fn to_fixed(&self, frac_digits: u32) -> Result<String> {
        if self.nan {
            return Ok("NaN".to_string());
        }
        let rounded = self.round(frac_digits, RoundMode::HalfUp)?;
        let (int_part, mut frac_part) = rounded.positional_parts();
        while (frac_part.len() as u32) < frac_digits {
            frac_part.push('0');
        }
        let sign = if rounded.is_negative() { "-" } else { "" };
        if frac_digits == 0 {
            Ok(format!("{}{}", sign, int_part))
        } else {
            Ok(format!("{}{}.{}", sign, int_part, frac_part))
        }
    }

    /// Split into positional integer/fraction digit strings (no sign, no
    /// trailing fraction zeros, integer part at least "0").
    pub(crate) fn positional_parts(&self) -> (String, String) {
        if self.nan || self.is_zero() {
            return ("0".to_string(), String::new());
        }
        let digits = self.mantissa.to_string();
        let (int_part, frac_part) = if self.exponent >= 0 {
            let mut int = digits;
            int.extend(std::iter::repeat('0').take(self.exponent as usize));
            (int, String::new())
        } else {
            let point = digits.len() as i32 + self.exponent;
            if point <= 0 {
                let mut frac = "0".repeat((-point) as usize);
                frac.push_str(&digits);
                ("0".to_string(), frac)
            } else {
                let (int, frac) = digits.split_at(point as usize);
                (int.to_string(), frac.to_string())
            }
        };
        (int_part, frac_part.trim_end_matches('0').to_string())
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nan {
            return write!(f, "NaN");
        }
        if self.is_zero() {
            return write!(f, "0");
        }
        let (int_part, frac_part) = self.positional_parts();
        if self.is_negative() {
            write!(f, "-")?;
        }
        if frac_part.is_empty() {
            write!(f, "{}", int_part)
        } else {
            write!(f, "{}.{}", int_part, frac_part)
        }
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Decimal) -> bool {
        // NaN equals nothing, including itself.
        if self.nan || other.nan {
            return false;
        }
        self.sign == other.sign && self.mantissa == other.mantissa && self.exponent == other.exponent
    }
}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Decimal) -> Option<Ordering> {
        self.compare(other)
    }
}

/// Scale a raw mantissa into [10^15, 10^16 - 1], adjusting the exponent.
/// Returns `None` for zero.
pub(crate) fn normalize_mantissa(mut mantissa: u128, mut exponent: i32) -> Option<(u64, i32)> {
    if mantissa == 0 {
        return None;
    }
    while mantissa < MANTISSA_MIN as u128 {
        mantissa *= 10;
        exponent -= 1;
    }
    while mantissa > MANTISSA_MAX as u128 {
        mantissa /= 10;
        exponent += 1;
    }
    Some((mantissa as u64, exponent))
}

/// Parse a decimal string into raw `(sign, mantissa, exponent)` parts
/// without canonicalizing, so callers can apply their own range policy
/// before digits are clamped away.
pub(crate) fn parse_parts(text: &str) -> Result<(i8, u128, i32)> {
    let text = text.trim();
    let invalid = || XrpkitError::InvalidArgument(format!("malformed decimal: {:?}", text));

    let (sign, rest) = match text.strip_prefix('-') {
        Some(rest) => (-1i8, rest),
        None => (1i8, text.strip_prefix('+').unwrap_or(text)),
    };

    let (base, exp_text) = match rest.split_once(['e', 'E']) {
        Some((base, exp)) => (base, Some(exp)),
        None => (rest, None),
    };
    let mut exponent: i32 = match exp_text {
        Some(exp) => exp.parse().map_err(|_| invalid())?,
        None => 0,
    };

    let (int_digits, frac_digits) = match base.split_once('.') {
        Some((int, frac)) => (int, frac),
        None => (base, ""),
    };
    if int_digits.is_empty() && frac_digits.is_empty() {
        return Err(invalid());
    }
    if !int_digits.bytes().all(|b| b.is_ascii_digit())
        || !frac_digits.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }
    exponent -= frac_digits.len() as i32;

    let mut digits = String::with_capacity(int_digits.len() + frac_digits.len());
    digits.push_str(int_digits);
    digits.push_str(frac_digits);
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return Ok((0, 0, 0));
    }

    // Keep at most 33 significant digits; anything past that is below the
    // 16-digit canonical precision and truncates toward zero anyway.
    let kept = &digits[..digits.len().min(33)];
    exponent += (digits.len() - kept.len()) as i32;

    let mantissa: u128 = kept.parse().map_err(|_| invalid())?;
    Ok((sign, mantissa, exponent))
}

pub(crate) fn pow10_u64(power: u32) -> u64 {
    10u64.pow(power)
}

pub(crate) fn pow10_u128(power: u32) -> u128 {
    10u128.pow(power)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str_exact(s).unwrap()
    }

    #[test]
    fn test_canonical_form() {
        let d = dec("100.40");
        assert_eq!(d.mantissa(), 1_004_000_000_000_000);
        assert_eq!(d.exponent(), -13);
        assert_eq!(d.sign(), 1);

        let z = dec("0");
        assert!(z.is_zero());
        assert_eq!(z.exponent(), ZERO_EXPONENT);
        assert_eq!(z.sign(), 0);
    }

    #[test]
    fn test_parse_forms() {
        assert_eq!(dec("1e3"), dec("1000"));
        assert_eq!(dec("-2.5e-2"), dec("-0.025"));
        assert_eq!(dec("+12.000"), dec("12"));
        assert_eq!(dec(".5"), dec("0.5"));
        assert!(Decimal::from_str_exact("1.2.3").is_err());
        assert!(Decimal::from_str_exact("abc").is_err());
        assert!(Decimal::from_str_exact("").is_err());
    }

    #[test]
    fn test_add_and_subtract() {
        assert_eq!(dec("1.5").add(&dec("2.25")).unwrap(), dec("3.75"));
        assert_eq!(dec("1").subtract(&dec("1")).unwrap(), Decimal::ZERO);
        assert_eq!(dec("-1").add(&dec("-2")).unwrap(), dec("-3"));
        // The smaller operand truncates toward zero during alignment.
        let big = dec("1e20");
        assert_eq!(big.add(&dec("1")).unwrap(), big);
    }

    #[test]
    fn test_multiply() {
        assert_eq!(dec("25.2").multiply(&dec("4")).unwrap(), dec("100.8"));
        assert_eq!(dec("-3").multiply(&dec("3")).unwrap(), dec("-9"));
        assert_eq!(dec("0").multiply(&dec("123")).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_divide_truncates_toward_zero() {
        let third = dec("1").divide(&dec("3")).unwrap();
        assert_eq!(third.mantissa(), 3_333_333_333_333_333);
        assert_eq!(third.exponent(), -16);

        let two_thirds = dec("2").divide(&dec("3")).unwrap();
        assert_eq!(two_thirds.mantissa(), 6_666_666_666_666_666);
    }

    #[test]
    fn test_divide_by_zero_is_nan() {
        let q = dec("1").divide(&Decimal::ZERO).unwrap();
        assert!(q.is_nan());
        assert!(Decimal::ZERO.invert().unwrap().is_nan());
    }

    #[test]
    fn test_nan_propagates() {
        let nan = Decimal::NAN;
        assert!(nan.add(&dec("1")).unwrap().is_nan());
        assert!(dec("1").multiply(&nan).unwrap().is_nan());
        assert!(nan != nan);
        assert!(nan.compare(&dec("1")).is_none());
    }

    #[test]
    fn test_invert_round_trips() {
        let x = dec("8");
        let back = x.invert().unwrap().invert().unwrap();
        assert_eq!(back, x);
    }

    #[test]
    fn test_exponent_clamps() {
        // Below -96 the value clamps to zero.
        assert!(Decimal::from_parts(1, 1, -97 - 15).unwrap().is_zero());
        // 10^-81 is the smallest representable non-zero magnitude.
        let min = dec("1e-81");
        assert_eq!(min.exponent(), EXPONENT_MIN);
        // Above +80 the operation fails.
        assert!(matches!(
            dec("1e80").multiply(&dec("1e80")),
            Err(XrpkitError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_round_modes() {
        let d = dec("1.25");
        assert_eq!(d.round(1, RoundMode::Down).unwrap(), dec("1.2"));
        assert_eq!(d.round(1, RoundMode::HalfUp).unwrap(), dec("1.3"));
        assert_eq!(dec("-1.25").round(1, RoundMode::HalfUp).unwrap(), dec("-1.3"));
        assert_eq!(dec("0.0000004").round(6, RoundMode::HalfUp).unwrap(), Decimal::ZERO);
        assert_eq!(dec("123").round(2, RoundMode::Down).unwrap(), dec("123"));
    }

    #[test]
    fn test_compare_total_on_values() {
        assert_eq!(dec("1").compare(&dec("2")), Some(Ordering::Less));
        assert_eq!(dec("-1").compare(&dec("-2")), Some(Ordering::Greater));
        assert_eq!(dec("10").compare(&dec("10.0")), Some(Ordering::Equal));
        assert_eq!(dec("-5").compare(&dec("3")), Some(Ordering::Less));
        assert_eq!(Decimal::ZERO.compare(&dec("0")), Some(Ordering::Equal));
    }

    #[test]
    fn test_display() {
        assert_eq!(dec("100.40").to_string(), "100.4");
        assert_eq!(dec("-0.001").to_string(), "-0.001");
        assert_eq!(dec("1e3").to_string(), "1000");
        assert_eq!(Decimal::ZERO.to_string(), "0");
    }

    #[test]
    fn test_to_fixed() {
        assert_eq!(dec("1.005").to_fixed(2).unwrap(), "1.01");
        assert_eq!(dec("2").to_fixed(3).unwrap(), "2.000");
        assert_eq!(dec("-1.5").to_fixed(0).unwrap(), "-2");
    }

    #[test]
    fn test_from_f64() {
        assert_eq!(Decimal::from_f64(0.5), dec("0.5"));
        assert_eq!(Decimal::from_f64(-2.0), dec("-2"));
        assert!(Decimal::from_f64(f64::NAN).is_nan());
        assert!(Decimal::from_f64(f64::INFINITY).is_nan());
    }
}
