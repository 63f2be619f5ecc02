//! The order-book quality codec.
//!
//! The low 64 bits of an order-book directory index encode the offer's
//! price — `TakerPays / TakerGets` — as one biased-exponent byte
//! (`exponent + 100`) followed by a 7-byte big-endian coefficient. Decoding
//! turns that into an amount in the counter currency; encoding is the
//! mirror image. Because native legs are stored in drops, a factor of 10^6
//! moves in or out of the price depending on which side is native.

use crate::amount::Amount;
use crate::currency::Currency;
use crate::decimal::{Decimal, RoundMode};
use crate::errors::{Result, XrpkitError};
use crate::uint::UInt160;
use crate::value::{IssuedValue, NativeValue};

/// Options shared by quality decode and encode.
#[derive(Clone, Debug, Default)]
pub struct QualityOptions {
    /// Invert the decoded price (turns a sell-side quality into a bid).
    pub inverse: bool,
    /// Keep native legs in drops: suppress the 10^6 adjustments.
    pub xrp_as_drops: bool,
    /// The base (TakerGets) currency; drives the drops adjustment and
    /// interest correction.
    pub base_currency: Option<Currency>,
    /// Correct for the base currency's interest at this network-epoch
    /// date.
    pub reference_date: Option<i64>,
}

/// Decode a quality into an amount in the counter currency.
///
/// Accepts a full 64-hex-char directory index or any hex string ending in
/// the 16 quality characters.
///
/// # Errors
///
/// `InvalidArgument` for malformed hex or an XRP/XRP pair; `OutOfRange`
/// when the encoded exponent is unrepresentable.
pub(crate) fn parse_quality(
    quality: &str,
    currency: &Currency,
    issuer: &UInt160,
    opts: &QualityOptions,
) -> Result<Amount> {
    let quality = quality.trim();
    if quality.len() < 16 || !quality.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(XrpkitError::InvalidArgument(format!(
            "malformed quality: {:?}",
            quality
        )));
    }
    let tail = &quality[quality.len() - 16..];

    let result_native = currency.is_native();
    let base_native = opts.base_currency.map_or(false, |c| c.is_native());
    if result_native && base_native {
        return Err(XrpkitError::InvalidArgument(
            "XRP/XRP quality is meaningless".into(),
        ));
    }

    let exponent = i32::from_str_radix(&tail[..2], 16).expect("validated hex") - 100;
    let mantissa = u64::from_str_radix(&tail[2..], 16).expect("validated hex");

    let mut value = if mantissa == 0 {
        Decimal::ZERO
    } else {
        Decimal::from_parts(1, mantissa as u128, exponent)?
    };

    if opts.inverse {
        value = value.invert()?;
    }

    if !opts.xrp_as_drops {
        if result_native {
            // Price per drop to price per XRP.
            value = value.mul_pow10(-6)?;
        } else if base_native {
            // Price per drop of base to price per XRP of base.
            value = value.mul_pow10(6)?;
        }
    }

    if result_native {
        value = value.round(6, RoundMode::Down)?;
    }

    if let (Some(date), Some(base)) = (opts.reference_date, opts.base_currency) {
        if base.has_interest() {
            let factor = Decimal::from_f64(base.get_interest_at(date));
            value = value.divide(&factor)?;
        }
    }

    if result_native {
        // In the drops-suppressed form the value already is a drops
        // figure; otherwise it is in XRP and scales up to drops here.
        if !opts.xrp_as_drops {
            value = value.mul_pow10(6)?;
        }
        Ok(Amount::new_native(NativeValue::from_decimal(&value)?))
    } else {
        Ok(Amount::new_issued(
            IssuedValue::from_decimal(&value),
            *currency,
            *issuer,
        ))
    }
}

/// Encode an amount as the 16-hex-char quality suffix, mirroring every
/// decode adjustment so that decode(encode(price)) is the identity at 16
/// significant digits.
///
/// # Errors
///
/// `InvalidArgument` for invalid, negative or XRP/XRP inputs.
pub(crate) fn encode_quality(amount: &Amount, opts: &QualityOptions) -> Result<String> {
    if !amount.is_valid() {
        return Err(XrpkitError::InvalidArgument(
            "cannot encode an invalid amount".into(),
        ));
    }
    let base_native = opts.base_currency.map_or(false, |c| c.is_native());
    if amount.is_native() && base_native {
        return Err(XrpkitError::InvalidArgument(
            "XRP/XRP quality is meaningless".into(),
        ));
    }

    // A native price's drops figure is the stored value in both modes:
    // the XRP wrap and the per-drop shift cancel. Only an issued price
    // over a native base moves by 10^6.
    let mut value = *amount.decimal();
    if !amount.is_native() && base_native && !opts.xrp_as_drops {
        value = value.mul_pow10(-6)?;
    }

    if let (Some(date), Some(base)) = (opts.reference_date, opts.base_currency) {
        if base.has_interest() {
            let factor = Decimal::from_f64(base.get_interest_at(date));
            value = value.multiply(&factor)?;
        }
    }

    if opts.inverse {
        value = value.invert()?;
    }

    if value.is_nan() || value.is_negative() {
        return Err(XrpkitError::InvalidArgument(
            "quality must be a non-negative price".into(),
        ));
    }
    if value.is_zero() {
        return Ok("0".repeat(16));
    }

    let biased = value.exponent() + 100;
    if !(0..=255).contains(&biased) {
        return Err(XrpkitError::OutOfRange(format!(
            "quality exponent {} does not fit a byte",
            value.exponent()
        )));
    }
    Ok(format!("{:02X}{:014X}", biased, value.mantissa()))
}
