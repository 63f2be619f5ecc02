//! Currency codes, including interest-bearing (demurrage) codes.
//!
//! A currency is one of three shapes: the native sentinel (all-zero 160-bit
//! code), a 3-character ISO-like code mapped into bytes 12..15 of the
//! 160-bit space, or a full 160-bit custom code. Custom codes with type
//! byte `0x01` carry continuous interest/demurrage parameters:
//!
//! ```text
//! byte  0      type (0x01)
//! bytes 1..4   ISO code
//! bytes 4..8   interest start (big-endian u32, network-epoch seconds)
//! bytes 8..16  interest rate (big-endian f64, half-life in seconds)
//! bytes 16..20 reserved
//! ```
//!
//! A positive half-life compounds interest, a negative one demurrage.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{Result, XrpkitError};

/// Seconds between the Unix epoch and the network epoch
/// (2000-01-01T00:00:00Z).
pub const RIPPLE_EPOCH_OFFSET: i64 = 946_684_800;

/// Seconds in the 365-day year used for the `%pa` annotations.
const SECONDS_PER_YEAR: f64 = 31_536_000.0;

/// Convert wall-clock seconds since 1970 to network-epoch seconds.
pub fn unix_to_ripple_time(unix_seconds: i64) -> i64 {
    unix_seconds - RIPPLE_EPOCH_OFFSET
}

/// A currency code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Currency {
    /// The native asset (all-zero code).
    Native,
    /// A 3-character ISO-like code.
    Iso([u8; 3]),
    /// A full 160-bit code; type byte `0x01` marks interest parameters.
    Custom([u8; 20]),
}

impl Currency {
    /// Parse a JSON-shaped code: `""` or `"XRP"` for native, a 3-character
    /// alphanumeric code, or 40 hex characters.
    ///
    /// Hex codes are canonicalized: all-zero becomes `Native` and a code
    /// that only populates the ISO window becomes `Iso`.
    pub fn from_json(text: &str) -> Result<Currency> {
        if text.is_empty() || text == "XRP" {
            return Ok(Currency::Native);
        }
        if text.len() == 3 && text.bytes().all(|b| b.is_ascii_alphanumeric()) {
            let mut code = [0u8; 3];
            code.copy_from_slice(text.as_bytes());
            return Ok(Currency::Iso(code));
        }
        if text.len() == 40 && text.bytes().all(|b| b.is_ascii_hexdigit()) {
            let mut bytes = [0u8; 20];
            let decoded = hex::decode(text).map_err(|_| {
                XrpkitError::InvalidArgument(format!("malformed currency hex: {:?}", text))
            })?;
            bytes.copy_from_slice(&decoded);
            return Ok(Currency::from_code_bytes(bytes));
        }
        Err(XrpkitError::InvalidArgument(format!(
            "malformed currency: {:?}",
            text
        )))
    }

    /// Parse the human form, which additionally accepts an interest
    /// annotation: `"XAU (-0.5%pa)"` builds the type-1 code with start
    /// date 0 and the half-life derived from the annual percentage.
    pub fn from_human(text: &str) -> Result<Currency> {
        let text = text.trim();
        if let Some((code, annotation)) = text.split_once(' ') {
            let annotation = annotation.trim();
            let percent = annotation
                .strip_prefix('(')
                .and_then(|a| a.strip_suffix("%pa)"))
                .ok_or_else(|| {
                    XrpkitError::InvalidArgument(format!("malformed currency: {:?}", text))
                })?;
            let percent: f64 = percent.trim().parse().map_err(|_| {
                XrpkitError::InvalidArgument(format!("malformed interest rate: {:?}", annotation))
            })?;
            let base = Currency::from_json(code)?;
            let iso = match base {
                Currency::Iso(code) => code,
                _ => {
                    return Err(XrpkitError::InvalidArgument(
                        "interest annotations require a 3-character code".into(),
                    ))
                }
            };
            return Ok(Currency::with_interest(iso, percent));
        }
        Currency::from_json(text)
    }

    /// Build an interest-bearing code from an annual percentage
    /// (positive = interest, negative = demurrage), start date 0.
    pub fn with_interest(code: [u8; 3], annual_percent: f64) -> Currency {
        let half_life =
            std::f64::consts::LN_2 * SECONDS_PER_YEAR / (1.0 + annual_percent / 100.0).ln();
        let mut bytes = [0u8; 20];
        bytes[0] = 0x01;
        bytes[1..4].copy_from_slice(&code);
        bytes[8..16].copy_from_slice(&half_life.to_be_bytes());
        Currency::Custom(bytes)
    }

    /// Canonicalize raw code bytes into the narrowest variant.
    pub fn from_code_bytes(bytes: [u8; 20]) -> Currency {
        if bytes.iter().all(|&b| b == 0) {
            return Currency::Native;
        }
        let only_iso_window = bytes[..12].iter().all(|&b| b == 0)
            && bytes[15..].iter().all(|&b| b == 0)
            && bytes[12..15].iter().any(|&b| b != 0);
        if only_iso_window {
            let mut code = [0u8; 3];
            code.copy_from_slice(&bytes[12..15]);
            return Currency::Iso(code);
        }
        Currency::Custom(bytes)
    }

    /// The full 160-bit code.
    pub fn to_bytes(&self) -> [u8; 20] {
        match self {
            Currency::Native => [0u8; 20],
            Currency::Iso(code) => {
                let mut bytes = [0u8; 20];
                bytes[12..15].copy_from_slice(code);
                bytes
            }
            Currency::Custom(bytes) => *bytes,
        }
    }

    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.to_bytes())
    }

    pub fn is_native(&self) -> bool {
        matches!(self, Currency::Native)
    }

    /// Whether this code carries interest/demurrage parameters.
    pub fn has_interest(&self) -> bool {
        match self.interest_half_life() {
            Some(rate) => rate != 0.0 && rate.is_finite(),
            None => false,
        }
    }

    /// Half-life in seconds, for type-1 codes.
    pub fn interest_half_life(&self) -> Option<f64> {
        match self {
            Currency::Custom(bytes) if bytes[0] == 0x01 => {
                let mut rate = [0u8; 8];
                rate.copy_from_slice(&bytes[8..16]);
                Some(f64::from_be_bytes(rate))
            }
            _ => None,
        }
    }

    /// Interest start in network-epoch seconds, for type-1 codes.
    pub fn interest_start(&self) -> Option<i64> {
        match self {
            Currency::Custom(bytes) if bytes[0] == 0x01 => {
                let mut start = [0u8; 4];
                start.copy_from_slice(&bytes[4..8]);
                Some(u32::from_be_bytes(start) as i64)
            }
            _ => None,
        }
    }

    /// The accumulated interest factor at `reference_date`
    /// (network-epoch seconds): `exp((t - start) * ln 2 / half_life)`.
    /// Codes without interest report the identity factor.
    pub fn get_interest_at(&self, reference_date: i64) -> f64 {
        if !self.has_interest() {
            return 1.0;
        }
        let start = self.interest_start().unwrap_or(0);
        let half_life = self.interest_half_life().unwrap_or(f64::INFINITY);
        (((reference_date - start) as f64) * std::f64::consts::LN_2 / half_life).exp()
    }

    /// JSON form: `"XRP"`, the ISO code, or 40 hex characters.
    pub fn to_json(&self) -> String {
        match self {
            Currency::Native => "XRP".to_string(),
            Currency::Iso(code) => String::from_utf8_lossy(code).into_owned(),
            Currency::Custom(_) => self.to_hex(),
        }
    }

    /// Human form: like the JSON form, but interest-bearing codes with a
    /// printable ISO window render as `"XAU (-0.5%pa)"`.
    pub fn to_human(&self) -> String {
        if let (Currency::Custom(bytes), true) = (self, self.has_interest()) {
            let code = &bytes[1..4];
            if code.iter().all(|b| b.is_ascii_alphanumeric()) {
                let percent = self.annual_percent().unwrap_or(0.0);
                let rounded = (percent * 10_000.0).round() / 10_000.0;
                return format!("{} ({}%pa)", String::from_utf8_lossy(code), rounded);
            }
        }
        self.to_json()
    }

    /// Annual percentage equivalent of the half-life, over a 365-day year.
    pub fn annual_percent(&self) -> Option<f64> {
        let half_life = self.interest_half_life()?;
        if half_life == 0.0 || !half_life.is_finite() {
            return None;
        }
        Some(((std::f64::consts::LN_2 * SECONDS_PER_YEAR / half_life).exp() - 1.0) * 100.0)
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

impl Serialize for Currency {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_json())
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Currency::from_json(&text).map_err(D::Error::custom)
    }
}
