//! Value wrappers for the two asset kinds.
//!
//! Both kinds wrap the [`Decimal`] engine and differ only in construction
//! validation and serialization: [`NativeValue`] is restricted to integer
//! drops (1 XRP = 10^6 drops) within ±10^11 XRP, [`IssuedValue`] to the
//! canonical 16-digit mantissa with exponent in [-96, +80].
//!
//! Range checks honor the process-wide strict-mode flag; the engine's
//! structural canonicalization does not.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::decimal::{self, Decimal, EXPONENT_MAX, EXPONENT_MIN};
use crate::errors::{Result, XrpkitError};

/// Drops per XRP.
pub const DROPS_PER_XRP: i128 = 1_000_000;

/// Largest native magnitude: 10^11 XRP, expressed in drops.
pub const MAX_NATIVE_DROPS: i128 = 100_000_000_000 * DROPS_PER_XRP;

static STRICT_MODE: AtomicBool = AtomicBool::new(true);

/// Enable or disable range checks globally.
///
/// Strict mode is the default. Disabling it is a test-bench affordance; set
/// it once before use and do not toggle it while operations are in flight.
pub fn set_strict_mode(enabled: bool) {
    STRICT_MODE.store(enabled, Ordering::SeqCst);
}

/// Whether range checks are currently enforced.
pub fn strict_mode() -> bool {
    STRICT_MODE.load(Ordering::SeqCst)
}

/// A native (XRP) value: integer drops held in canonical decimal form.
///
/// Negative values are permitted in arithmetic; the wire layer is the one
/// that rejects them at encode time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NativeValue(Decimal);

impl NativeValue {
    pub const ZERO: NativeValue = NativeValue(Decimal::ZERO);
    pub const NAN: NativeValue = NativeValue(Decimal::NAN);

    /// Build from a drops count.
    ///
    /// # Errors
    ///
    /// `XrpkitError::OutOfRange` when the magnitude exceeds 10^11 XRP in
    /// strict mode.
    pub fn from_drops(drops: i128) -> Result<NativeValue> {
        if strict_mode() && drops.unsigned_abs() > MAX_NATIVE_DROPS as u128 {
            return Err(XrpkitError::OutOfRange(format!(
                "native amount {} exceeds {} drops",
                drops, MAX_NATIVE_DROPS
            )));
        }
        Ok(NativeValue(Decimal::from_integer(drops)?))
    }

    /// Parse the wire form: a decimal integer string of drops. A decimal
    /// point is rejected; native wire amounts are always whole drops.
    pub fn from_drops_str(text: &str) -> Result<NativeValue> {
        let text = text.trim();
        let digits = text.strip_prefix('-').unwrap_or(text);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(XrpkitError::InvalidArgument(format!(
                "malformed drops amount: {:?}",
                text
            )));
        }
        let drops: i128 = text.parse().map_err(|_| {
            XrpkitError::InvalidArgument(format!("malformed drops amount: {:?}", text))
        })?;
        NativeValue::from_drops(drops)
    }

    /// Parse a human XRP figure ("25.2" meaning 25.2 XRP) by scaling to
    /// drops and truncating to a whole-drop count.
    pub fn from_xrp_str(text: &str) -> Result<NativeValue> {
        let xrp = Decimal::from_str_exact(text)?;
        NativeValue::from_decimal(&xrp.mul_pow10(6)?)
    }

    /// Canonicalize an arbitrary decimal into this kind: truncate toward
    /// zero to whole drops, then range-check.
    pub fn from_decimal(value: &Decimal) -> Result<NativeValue> {
        match decimal_to_drops(value)? {
            None => Ok(NativeValue::NAN),
            Some(drops) => NativeValue::from_drops(drops),
        }
    }

    /// The drops count, `None` when NaN.
    pub fn as_drops(&self) -> Option<i128> {
        decimal_to_drops(&self.0).ok().flatten()
    }

    pub fn decimal(&self) -> &Decimal {
        &self.0
    }

    pub fn is_nan(&self) -> bool {
        self.0.is_nan()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Wire text: signed whole drops.
    pub fn to_drops_string(&self) -> String {
        match self.as_drops() {
            Some(drops) => drops.to_string(),
            None => "NaN".to_string(),
        }
    }
}

/// An issued (IOU) value in the canonical mantissa/exponent space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IssuedValue(Decimal);

impl IssuedValue {
    pub const ZERO: IssuedValue = IssuedValue(Decimal::ZERO);
    pub const NAN: IssuedValue = IssuedValue(Decimal::NAN);

    /// Parse a decimal string, enforcing the canonical magnitude range for
    /// non-zero values in strict mode.
    ///
    /// # Errors
    ///
    /// `Underflow` below 10^-81, `Overflow` above (10^16 - 1) * 10^80, both
    /// only in strict mode; `InvalidArgument` for malformed text.
    pub fn from_str_value(text: &str) -> Result<IssuedValue> {
        let (sign, mantissa, exponent) = decimal::parse_parts(text)?;
        let (_, canonical_exp) = match decimal::normalize_mantissa(mantissa, exponent) {
            None => return Ok(IssuedValue::ZERO),
            Some(parts) => parts,
        };
        if canonical_exp < EXPONENT_MIN {
            if strict_mode() {
                return Err(XrpkitError::Underflow);
            }
            return Ok(IssuedValue::ZERO);
        }
        if canonical_exp > EXPONENT_MAX && strict_mode() {
            return Err(XrpkitError::Overflow);
        }
        Ok(IssuedValue(Decimal::from_parts(sign, mantissa, exponent)?))
    }

    /// Wrap an engine result. The engine has already applied the canonical
    /// clamps, so no further range policy applies here.
    pub fn from_decimal(value: &Decimal) -> IssuedValue {
        IssuedValue(*value)
    }

    pub fn decimal(&self) -> &Decimal {
        &self.0
    }

    pub fn is_nan(&self) -> bool {
        self.0.is_nan()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }
}

/// Truncate a decimal toward zero to a whole drops count.
/// `Ok(None)` for NaN.
fn decimal_to_drops(value: &Decimal) -> Result<Option<i128>> {
    if value.is_nan() {
        return Ok(None);
    }
    if value.is_zero() {
        return Ok(Some(0));
    }
    let exponent = value.exponent();
    let magnitude: u128 = if exponent >= 0 {
        if exponent > 22 {
            // Beyond i128 territory and five orders past the native cap.
            return Err(XrpkitError::OutOfRange(format!(
                "native amount 10^{} drops is unrepresentable",
                exponent + 16
            )));
        }
        value.mantissa() as u128 * decimal::pow10_u128(exponent as u32)
    } else if exponent < -38 {
        0
    } else {
        value.mantissa() as u128 / decimal::pow10_u128((-exponent) as u32)
    };
    let drops = magnitude as i128 * value.sign() as i128;
    Ok(Some(drops))
}
