//! Amounts: a value paired with its asset.
//!
//! An amount is either native (integer drops, the all-zero currency code,
//! the zero issuer) or issued (a canonical 16-digit decimal, a currency
//! code, an issuer). Malformed input parses to an *invalid* amount rather
//! than an error, and arithmetic propagates invalidity the way NaN
//! propagates through floats; only strict-mode range violations surface as
//! errors.

use std::cmp::Ordering;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::currency::Currency;
use crate::decimal::Decimal;
use crate::errors::{Result, XrpkitError};
use crate::human::{self, FormatOptions};
use crate::quality::{self, QualityOptions};
use crate::uint::UInt160;
use crate::value::{IssuedValue, NativeValue};

/// The value half of an amount, tagged by asset kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AmountValue {
    Native(NativeValue),
    Issued(IssuedValue),
}

/// A native or issued amount.
#[derive(Clone, Copy, Debug)]
pub struct Amount {
    value: AmountValue,
    currency: Currency,
    issuer: UInt160,
}

/// Anything that coerces to an [`Amount`] the way `from_json` would.
///
/// Arithmetic entry points take this trait so callers can mix amounts with
/// their serialized forms; explicit construction stays on the named
/// constructors.
pub trait IntoAmount {
    fn into_amount(self) -> Result<Amount>;
}

impl IntoAmount for Amount {
    fn into_amount(self) -> Result<Amount> {
        Ok(self)
    }
}

impl IntoAmount for &Amount {
    fn into_amount(self) -> Result<Amount> {
        Ok(*self)
    }
}

impl IntoAmount for &str {
    fn into_amount(self) -> Result<Amount> {
        Amount::from_json(&Value::String(self.to_string()))
    }
}

impl IntoAmount for &Value {
    fn into_amount(self) -> Result<Amount> {
        Amount::from_json(self)
    }
}

impl IntoAmount for i64 {
    fn into_amount(self) -> Result<Amount> {
        Amount::from_number(self)
    }
}

impl Amount {
    /// The invalid sentinel. Propagates through arithmetic.
    pub fn invalid() -> Amount {
        Amount {
            value: AmountValue::Issued(IssuedValue::NAN),
            currency: Currency::Native,
            issuer: UInt160::invalid(),
        }
    }

    /// A native amount from a checked value.
    pub fn new_native(value: NativeValue) -> Amount {
        Amount {
            value: AmountValue::Native(value),
            currency: Currency::Native,
            issuer: UInt160::zero(),
        }
    }

    /// An issued amount. An issued amount in the native currency is a
    /// contradiction and comes back invalid.
    pub fn new_issued(value: IssuedValue, currency: Currency, issuer: UInt160) -> Amount {
        if currency.is_native() {
            return Amount::invalid();
        }
        Amount {
            value: AmountValue::Issued(value),
            currency,
            issuer,
        }
    }

    /// A native amount from a drops count.
    pub fn from_drops(drops: i128) -> Result<Amount> {
        Ok(Amount::new_native(NativeValue::from_drops(drops)?))
    }

    /// A native amount from an integer number of drops.
    pub fn from_number(drops: i64) -> Result<Amount> {
        Amount::from_drops(drops as i128)
    }

    /// Parse any accepted JSON shape:
    ///
    /// - an integer (or integer string) of drops;
    /// - a `"value/currency"` or `"value/currency/issuer"` shorthand;
    /// - an object with `value`, `currency` and optional `issuer`.
    ///
    /// Malformed shapes produce an invalid amount. Out-of-range values in
    /// strict mode are the only errors.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(json)))]
    pub fn from_json(json: &Value) -> Result<Amount> {
        match json {
            Value::Number(number) => {
                if let Some(drops) = number.as_i64() {
                    return Amount::from_number(drops);
                }
                if let Some(drops) = number.as_u64() {
                    return Amount::from_drops(drops as i128);
                }
                // Floats with a decimal point are not drops.
                Ok(Amount::invalid())
            }
            Value::String(text) => Amount::from_json_text(text),
            Value::Object(fields) => {
                let value = match fields.get("value") {
                    Some(Value::String(s)) => s.clone(),
                    Some(Value::Number(n)) => n.to_string(),
                    _ => return Ok(Amount::invalid()),
                };
                let currency = match fields.get("currency") {
                    Some(Value::String(s)) => match Currency::from_json(s) {
                        Ok(currency) => currency,
                        Err(_) => return Ok(Amount::invalid()),
                    },
                    _ => return Ok(Amount::invalid()),
                };
                // The object form is for issued amounts only.
                if currency.is_native() {
                    return Ok(Amount::invalid());
                }
                let issuer = match fields.get("issuer") {
                    Some(Value::String(s)) => UInt160::from_json(s),
                    None => UInt160::one(),
                    Some(_) => return Ok(Amount::invalid()),
                };
                let value = match issued_value_checked(&value)? {
                    Some(value) => value,
                    None => return Ok(Amount::invalid()),
                };
                Ok(Amount::new_issued(value, currency, issuer))
            }
            _ => Ok(Amount::invalid()),
        }
    }

    /// Parse the string forms of `from_json`.
    pub fn from_json_text(text: &str) -> Result<Amount> {
        if text.contains('/') {
            let mut parts = text.splitn(3, '/');
            let value_text = parts.next().unwrap_or("");
            let currency_text = parts.next().unwrap_or("");
            let issuer_text = parts.next();
            if value_text.is_empty() || currency_text.is_empty() {
                return Ok(Amount::invalid());
            }
            let currency = match Currency::from_json(currency_text) {
                Ok(currency) => currency,
                Err(_) => return Ok(Amount::invalid()),
            };
            if currency.is_native() {
                // "value/XRP" is native; the value is whole drops.
                return match native_value_checked(value_text)? {
                    Some(value) => Ok(Amount::new_native(value)),
                    None => Ok(Amount::invalid()),
                };
            }
            let issuer = match issuer_text {
                Some(text) => UInt160::from_json(text),
                None => UInt160::one(),
            };
            return match issued_value_checked(value_text)? {
                Some(value) => Ok(Amount::new_issued(value, currency, issuer)),
                None => Ok(Amount::invalid()),
            };
        }
        match native_value_checked(text)? {
            Some(value) => Ok(Amount::new_native(value)),
            None => Ok(Amount::invalid()),
        }
    }

    /// Parse a human figure such as `"25.2 XRP"`, `"USD 100.40"`,
    /// `"100.40USD"` or `"10 015841…"` (40-hex code).
    ///
    /// With `reference_date`, an interest-bearing currency's figure is
    /// divided by the interest factor, i.e. stored at present value.
    pub fn from_human(text: &str, reference_date: Option<i64>) -> Result<Amount> {
        human::parse_human(text, reference_date)
    }

    /// Decode an order-book directory quality. See [`QualityOptions`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(quality, opts)))]
    pub fn from_quality(
        quality: &str,
        currency: &Currency,
        issuer: &UInt160,
        opts: &QualityOptions,
    ) -> Result<Amount> {
        quality::parse_quality(quality, currency, issuer, opts)
    }

    /// Encode this amount as the 16-hex-char quality suffix.
    pub fn to_quality(&self, opts: &QualityOptions) -> Result<String> {
        quality::encode_quality(self, opts)
    }

    pub fn is_native(&self) -> bool {
        matches!(self.value, AmountValue::Native(_))
    }

    /// A valid amount has a numeric value and, when issued, a valid issuer.
    pub fn is_valid(&self) -> bool {
        match &self.value {
            AmountValue::Native(value) => !value.is_nan(),
            AmountValue::Issued(value) => !value.is_nan() && self.issuer.is_valid(),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.is_valid() && self.decimal().is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.is_valid() && self.decimal().is_negative()
    }

    pub fn is_positive(&self) -> bool {
        self.is_valid() && self.decimal().is_positive()
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    pub fn issuer(&self) -> &UInt160 {
        &self.issuer
    }

    pub fn value(&self) -> &AmountValue {
        &self.value
    }

    /// The underlying decimal: drops for native, face value for issued.
    pub fn decimal(&self) -> &Decimal {
        match &self.value {
            AmountValue::Native(value) => value.decimal(),
            AmountValue::Issued(value) => value.decimal(),
        }
    }

    /// Rewrap a computed decimal in this amount's kind, currency and
    /// issuer, applying the kind's canonical limit check.
    fn with_decimal(&self, decimal: Decimal) -> Result<Amount> {
        match &self.value {
            AmountValue::Native(_) => {
                Ok(Amount::new_native(NativeValue::from_decimal(&decimal)?))
            }
            AmountValue::Issued(_) => Ok(Amount {
                value: AmountValue::Issued(IssuedValue::from_decimal(&decimal)),
                currency: self.currency,
                issuer: self.issuer,
            }),
        }
    }

    /// Addition. Native and issued amounts are not comparable; mixing them
    /// (or an invalid operand) yields an invalid result, not an error.
    pub fn add(&self, other: impl IntoAmount) -> Result<Amount> {
        let other = other.into_amount()?;
        if !self.is_valid() || !other.is_valid() || self.is_native() != other.is_native() {
            return Ok(Amount::invalid());
        }
        self.with_decimal(self.decimal().add(other.decimal())?)
    }

    pub fn subtract(&self, other: impl IntoAmount) -> Result<Amount> {
        let other = other.into_amount()?;
        if !self.is_valid() || !other.is_valid() || self.is_native() != other.is_native() {
            return Ok(Amount::invalid());
        }
        self.with_decimal(self.decimal().subtract(other.decimal())?)
    }

    /// Multiplication by any valid amount, treating the right side as a
    /// scalar in its own raw units. The result keeps this amount's asset.
    pub fn multiply(&self, other: impl IntoAmount) -> Result<Amount> {
        let other = other.into_amount()?;
        if !self.is_valid() || !other.is_valid() {
            return Ok(Amount::invalid());
        }
        self.with_decimal(self.decimal().multiply(other.decimal())?)
    }

    /// Division by any valid amount. Division by zero yields an invalid
    /// result, never an error.
    pub fn divide(&self, other: impl IntoAmount) -> Result<Amount> {
        let other = other.into_amount()?;
        if !self.is_valid() || !other.is_valid() {
            return Ok(Amount::invalid());
        }
        self.with_decimal(self.decimal().divide(other.decimal())?)
    }

    pub fn negate(&self) -> Result<Amount> {
        if !self.is_valid() {
            return Ok(Amount::invalid());
        }
        self.with_decimal(self.decimal().negate())
    }

    pub fn abs(&self) -> Result<Amount> {
        if !self.is_valid() {
            return Ok(Amount::invalid());
        }
        self.with_decimal(self.decimal().abs())
    }

    /// `1 / self` in this amount's asset. A native result truncates to
    /// whole drops.
    pub fn invert(&self) -> Result<Amount> {
        if !self.is_valid() {
            return Ok(Amount::invalid());
        }
        self.with_decimal(self.decimal().invert()?)
    }

    /// Three-way comparison, `None` when the operands are not comparable
    /// (different kinds, or either side invalid).
    pub fn compare(&self, other: impl IntoAmount) -> Option<Ordering> {
        let other = other.into_amount().ok()?;
        if !self.is_valid() || !other.is_valid() || self.is_native() != other.is_native() {
            return None;
        }
        self.decimal().compare(other.decimal())
    }

    /// Checked comparison: like [`Amount::compare`], but for callers that
    /// treat an incomparable pair as a bug rather than a state to
    /// propagate.
    ///
    /// # Errors
    ///
    /// `XrpkitError::NotComparable` when the operands mix native and
    /// issued kinds or either side is invalid.
    pub fn try_compare(&self, other: impl IntoAmount) -> Result<Ordering> {
        let other = other.into_amount()?;
        self.compare(&other).ok_or(XrpkitError::NotComparable)
    }

    /// Multiply the value by the currency's interest factor at
    /// `reference_date`. Amounts without interest pass through unchanged.
    pub fn apply_interest(&self, reference_date: i64) -> Result<Amount> {
        if !self.is_valid() || !self.currency.has_interest() {
            return Ok(*self);
        }
        let factor = Decimal::from_f64(self.currency.get_interest_at(reference_date));
        self.with_decimal(self.decimal().multiply(&factor)?)
    }

    /// A price: `self / denominator`, in this amount's asset.
    ///
    /// A native denominator is expressed in drops, so the numerator is
    /// scaled by 10^6 to keep the printed ratio in XRP terms. With
    /// `reference_date`, interest applies to the denominator only; the
    /// numerator's unit carries into the result.
    pub fn ratio_human(
        &self,
        denominator: impl IntoAmount,
        reference_date: Option<i64>,
    ) -> Result<Amount> {
        let mut denominator = denominator.into_amount()?;
        if !self.is_valid() || !denominator.is_valid() || denominator.is_zero() {
            return Ok(Amount::invalid());
        }
        if let Some(date) = reference_date {
            denominator = denominator.apply_interest(date)?;
        }
        let mut numerator = *self.decimal();
        if denominator.is_native() {
            numerator = numerator.mul_pow10(6)?;
        }
        self.with_decimal(numerator.divide(denominator.decimal())?)
    }

    /// `self * factor`, in this amount's asset. A native factor is in
    /// drops, so the product is scaled back down by 10^6. With
    /// `reference_date`, interest applies to the factor only.
    pub fn product_human(
        &self,
        factor: impl IntoAmount,
        reference_date: Option<i64>,
    ) -> Result<Amount> {
        let mut factor = factor.into_amount()?;
        if !self.is_valid() || !factor.is_valid() {
            return Ok(Amount::invalid());
        }
        if let Some(date) = reference_date {
            factor = factor.apply_interest(date)?;
        }
        let mut product = self.decimal().multiply(factor.decimal())?;
        if factor.is_native() {
            product = product.mul_pow10(-6)?;
        }
        self.with_decimal(product)
    }

    /// Wire text: whole drops for native, the canonical decimal (fixed
    /// point inside the protocol's display window, e-notation outside it)
    /// for issued. Invalid amounts render as `"NaN"`.
    pub fn to_text(&self) -> String {
        if !self.is_valid() {
            return "NaN".to_string();
        }
        match &self.value {
            AmountValue::Native(value) => value.to_drops_string(),
            AmountValue::Issued(value) => human::format_issued_text(value.decimal()),
        }
    }

    /// The shorthand form: `value/currency` for native,
    /// `value/currency/issuer` for issued.
    pub fn to_text_full(&self) -> String {
        if self.is_native() {
            format!("{}/XRP", self.to_text())
        } else {
            format!(
                "{}/{}/{}",
                self.to_text(),
                self.currency.to_json(),
                self.issuer.to_address()
            )
        }
    }

    /// Human-readable rendering with formatting controls; see
    /// [`FormatOptions`].
    pub fn to_human(&self, opts: &FormatOptions) -> Result<String> {
        human::format_human(self, opts)
    }

    /// The canonical wire JSON: a drops string for native, a
    /// `{value, currency, issuer}` object for issued. Invalid amounts
    /// serialize as null.
    pub fn to_json(&self) -> Value {
        if !self.is_valid() {
            return Value::Null;
        }
        match &self.value {
            AmountValue::Native(value) => Value::String(value.to_drops_string()),
            AmountValue::Issued(_) => serde_json::json!({
                "value": self.to_text(),
                "currency": self.currency.to_json(),
                "issuer": self.issuer.to_address(),
            }),
        }
    }

    /// Equality with the issuer ignored: same kind, value and currency.
    pub fn eq_ignoring_issuer(&self, other: &Amount) -> bool {
        self.is_valid()
            && other.is_valid()
            && self.is_native() == other.is_native()
            && self.currency == other.currency
            && self.decimal() == other.decimal()
    }
}

impl PartialEq for Amount {
    fn eq(&self, other: &Amount) -> bool {
        if !self.eq_ignoring_issuer(other) {
            return false;
        }
        self.is_native() || self.issuer == other.issuer
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_text_full())
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let json = Value::deserialize(deserializer)?;
        let amount = Amount::from_json(&json).map_err(D::Error::custom)?;
        if amount.is_valid() {
            Ok(amount)
        } else {
            Err(D::Error::custom(format!("invalid amount: {}", json)))
        }
    }
}

/// Run a native-value parse, mapping format failures to `None` (invalid
/// amount) while letting range violations escape as errors.
pub(crate) fn native_value_checked(text: &str) -> Result<Option<NativeValue>> {
    match NativeValue::from_drops_str(text) {
        Ok(value) => Ok(Some(value)),
        Err(XrpkitError::InvalidArgument(_)) => Ok(None),
        Err(err) => Err(err),
    }
}

/// Same policy for issued values.
pub(crate) fn issued_value_checked(text: &str) -> Result<Option<IssuedValue>> {
    match IssuedValue::from_str_value(text) {
        Ok(value) => Ok(Some(value)),
        Err(XrpkitError::InvalidArgument(_)) => Ok(None),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn amt(j: &str) -> Amount {
        Amount::from_json_text(j).unwrap()
    }

    const ISSUER: &str = "rrrrrrrrrrrrrrrrrrrrBZbvji";

    #[test]
    fn test_from_json_native() {
        let a = Amount::from_json(&json!("250000000")).unwrap();
        assert!(a.is_native());
        assert!(a.currency().is_native());
        assert!(a.issuer().is_zero());
        assert_eq!(a.to_text(), "250000000");

        let n = Amount::from_json(&json!(4)).unwrap();
        assert_eq!(n.to_text(), "4");

        // Floats with a decimal point are not drops.
        assert!(!Amount::from_json(&json!(4.5)).unwrap().is_valid());
        assert!(!Amount::from_json(&json!("4.5")).unwrap().is_valid());
    }

    #[test]
    fn test_from_json_shorthand() {
        let a = amt("100/USD/rrrrrrrrrrrrrrrrrrrrBZbvji");
        assert!(a.is_valid());
        assert!(!a.is_native());
        assert_eq!(a.currency().to_json(), "USD");
        assert_eq!(a.to_text(), "100");

        // Issuer defaults to the no-issuer sentinel.
        let b = amt("100/USD");
        assert_eq!(b.issuer(), &crate::uint::UInt160::one());
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_json_object() {
        let a = Amount::from_json(&json!({
            "value": "100.40",
            "currency": "USD",
            "issuer": ISSUER,
        }))
        .unwrap();
        assert!(a.is_valid());
        assert_eq!(a.to_text(), "100.4");

        // Object form never describes XRP.
        let bad = Amount::from_json(&json!({"value": "1", "currency": "XRP"})).unwrap();
        assert!(!bad.is_valid());
    }

    #[test]
    fn test_json_round_trip() {
        for j in [
            json!("250000000"),
            json!({"value": "100.4", "currency": "USD", "issuer": ISSUER}),
            json!({"value": "0.005", "currency": "EUR", "issuer": ISSUER}),
        ] {
            let a = Amount::from_json(&j).unwrap();
            let b = Amount::from_json(&a.to_json()).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_arithmetic_identities() {
        let a = amt("100/USD/rrrrrrrrrrrrrrrrrrrrBZbvji");
        let zero = amt("0/USD/rrrrrrrrrrrrrrrrrrrrBZbvji");
        let one = amt("1/USD/rrrrrrrrrrrrrrrrrrrrBZbvji");

        assert_eq!(a.add(&zero).unwrap(), a);
        assert!(a.subtract(&a).unwrap().is_zero());
        assert_eq!(a.multiply(&one).unwrap(), a);
        assert_eq!(a.divide(&a).unwrap(), one);
        assert_eq!(a.invert().unwrap().invert().unwrap(), a);
    }

    #[test]
    fn test_incomparable_propagates() {
        let native = amt("100");
        let issued = amt("100/USD/rrrrrrrrrrrrrrrrrrrrBZbvji");

        let bad = native.add(&issued).unwrap();
        assert!(!bad.is_valid());

        // Invalid in, invalid out.
        let worse = bad.multiply(&issued).unwrap();
        assert!(!worse.is_valid());
        assert_eq!(bad.to_text(), "NaN");
        assert!(native.compare(&issued).is_none());
    }

    #[test]
    fn test_try_compare_surfaces_not_comparable() {
        let native = amt("100");
        let issued = amt("100/USD/rrrrrrrrrrrrrrrrrrrrBZbvji");

        assert_eq!(native.try_compare(&amt("70")).unwrap(), Ordering::Greater);
        assert!(matches!(
            native.try_compare(&issued),
            Err(XrpkitError::NotComparable)
        ));
        assert!(matches!(
            Amount::invalid().try_compare(&issued),
            Err(XrpkitError::NotComparable)
        ));
    }

    #[test]
    fn test_compare_is_total_on_comparables() {
        let small = amt("3/USD/rrrrrrrrrrrrrrrrrrrrBZbvji");
        let big = amt("30/USD/rrrrrrrrrrrrrrrrrrrrBZbvji");
        assert_eq!(small.compare(&big), Some(Ordering::Less));
        assert_eq!(big.compare(&small), Some(Ordering::Greater));
        assert_eq!(small.compare(&small), Some(Ordering::Equal));

        assert_eq!(amt("5").compare(&amt("7")), Some(Ordering::Less));
    }

    #[test]
    fn test_multiply_native() {
        let a = Amount::from_human("25.2 XRP", None).unwrap();
        let product = a.multiply("4").unwrap();
        assert_eq!(product.to_text(), "100800000");
    }

    #[test]
    fn test_divide_by_zero_is_invalid() {
        let a = amt("100/USD/rrrrrrrrrrrrrrrrrrrrBZbvji");
        assert!(!a.divide("0").unwrap().is_valid());
        assert!(!a.ratio_human("0", None).unwrap().is_valid());
    }

    #[test]
    fn test_ratio_human_drops_compensation() {
        // 100 USD per 10 XRP (10^7 drops): the 10^6 compensation keeps the
        // printed ratio in XRP terms.
        let price = amt("100/USD/rrrrrrrrrrrrrrrrrrrrBZbvji")
            .ratio_human("10000000", None)
            .unwrap();
        assert_eq!(price.to_text(), "10");
        assert_eq!(price.currency().to_json(), "USD");

        // Two native amounts: the result tracks the numerator's (native)
        // unit, so 210 drops / 10 drops renders as 21 XRP.
        let native = amt("210").ratio_human("10", None).unwrap();
        assert_eq!(native.to_text_full(), "21000000/XRP");
    }

    #[test]
    fn test_product_human_native_factor() {
        // 2 USD * 3 XRP (3 * 10^6 drops) = 6 USD.
        let product = amt("2/USD/rrrrrrrrrrrrrrrrrrrrBZbvji")
            .product_human("3000000", None)
            .unwrap();
        assert_eq!(product.to_text(), "6");
    }

    #[test]
    fn test_negate_abs() {
        let a = amt("5/USD/rrrrrrrrrrrrrrrrrrrrBZbvji");
        let neg = a.negate().unwrap();
        assert!(neg.is_negative());
        assert_eq!(neg.abs().unwrap(), a);

        let native = amt("10").negate().unwrap();
        assert_eq!(native.to_text(), "-10");
    }

    #[test]
    fn test_equality_issuer_rules() {
        let a = amt("1/USD/rrrrrrrrrrrrrrrrrrrrBZbvji");
        let b = amt("1/USD/rrrrrrrrrrrrrrrrrrrrrhoLvTp");
        assert!(a != b);
        assert!(a.eq_ignoring_issuer(&b));

        let invalid = Amount::invalid();
        assert!(invalid != invalid);
    }

    #[test]
    fn test_to_text_full() {
        assert_eq!(amt("210").to_text_full(), "210/XRP");
        assert_eq!(
            amt("1/USD/rrrrrrrrrrrrrrrrrrrrBZbvji").to_text_full(),
            "1/USD/rrrrrrrrrrrrrrrrrrrrBZbvji"
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let a = amt("42/EUR/rrrrrrrrrrrrrrrrrrrrBZbvji");
        let text = serde_json::to_string(&a).unwrap();
        let back: Amount = serde_json::from_str(&text).unwrap();
        assert_eq!(a, back);
    }
}
