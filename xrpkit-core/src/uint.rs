//! Fixed-width unsigned integers backing identifiers.
//!
//! Three widths cover the protocol's identifier space: 128 bits (seeds),
//! 160 bits (account identifiers, currency codes) and 256 bits (hashes,
//! directory indices). Values are big-endian byte containers with an
//! explicit validity flag, so "failed to parse" is a first-class state that
//! propagates instead of forcing an error at every access. An invalid value
//! equals nothing, including itself.

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::base58::{self, VERSION_ACCOUNT_ID};

/// The well-known all-zero account, also the native-asset sentinel.
pub const ACCOUNT_ZERO: &str = "rrrrrrrrrrrrrrrrrrrrrhoLvTp";

/// The well-known account of value one, the no-issuer placeholder.
pub const ACCOUNT_ONE: &str = "rrrrrrrrrrrrrrrrrrrrBZbvji";

/// Width-generic operations shared by the fixed-width integer types.
pub trait FixedUint: Sized {
    /// Width in bytes.
    const WIDTH: usize;

    fn from_bytes(bytes: &[u8]) -> Self;
    fn from_hex(text: &str) -> Self;
    fn to_hex(&self) -> String;
    fn as_slice(&self) -> &[u8];
    fn is_valid(&self) -> bool;
    fn is_zero(&self) -> bool;
}

macro_rules! fixed_uint {
    ($(#[$meta:meta])* $name:ident, $width:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug)]
        pub struct $name {
            bytes: [u8; $width],
            valid: bool,
        }

        impl $name {
            /// The all-zero value.
            pub fn zero() -> Self {
                Self { bytes: [0u8; $width], valid: true }
            }

            /// The value one (a reserved sentinel for some identifier
            /// classes).
            pub fn one() -> Self {
                let mut bytes = [0u8; $width];
                bytes[$width - 1] = 1;
                Self { bytes, valid: true }
            }

            /// The invalid sentinel produced by failed parses.
            pub fn invalid() -> Self {
                Self { bytes: [0u8; $width], valid: false }
            }

            /// Copy from big-endian bytes; any other length is invalid.
            pub fn from_bytes(bytes: &[u8]) -> Self {
                match <[u8; $width]>::try_from(bytes) {
                    Ok(bytes) => Self { bytes, valid: true },
                    Err(_) => Self::invalid(),
                }
            }

            /// Parse exactly 2*width hex characters; anything else is
            /// invalid.
            pub fn from_hex(text: &str) -> Self {
                if text.len() != $width * 2 {
                    return Self::invalid();
                }
                match hex::decode(text) {
                    Ok(bytes) => Self::from_bytes(&bytes),
                    Err(_) => Self::invalid(),
                }
            }

            /// Uppercase hex of the full width.
            pub fn to_hex(&self) -> String {
                hex::encode_upper(self.bytes)
            }

            pub fn as_bytes(&self) -> &[u8; $width] {
                &self.bytes
            }

            pub fn is_valid(&self) -> bool {
                self.valid
            }

            /// True for a valid all-zero value.
            pub fn is_zero(&self) -> bool {
                self.valid && self.bytes.iter().all(|&b| b == 0)
            }
        }

        impl FixedUint for $name {
            const WIDTH: usize = $width;

            fn from_bytes(bytes: &[u8]) -> Self {
                $name::from_bytes(bytes)
            }

            fn from_hex(text: &str) -> Self {
                $name::from_hex(text)
            }

            fn to_hex(&self) -> String {
                $name::to_hex(self)
            }

            fn as_slice(&self) -> &[u8] {
                &self.bytes
            }

            fn is_valid(&self) -> bool {
                $name::is_valid(self)
            }

            fn is_zero(&self) -> bool {
                $name::is_zero(self)
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                // Invalid values equal nothing, including themselves.
                self.valid && other.valid && self.bytes == other.bytes
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.to_json())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.to_json())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
                let text = String::deserialize(deserializer)?;
                let value = $name::from_json(&text);
                if value.is_valid() {
                    Ok(value)
                } else {
                    Err(D::Error::custom(format!(
                        concat!("invalid ", stringify!($name), ": {:?}"),
                        text
                    )))
                }
            }
        }
    };
}

fixed_uint! {
    /// 128-bit identifier (seed entropy).
    UInt128, 16
}

fixed_uint! {
    /// 160-bit identifier (accounts, currency codes).
    UInt160, 20
}

fixed_uint! {
    /// 256-bit identifier (hashes, directory indices).
    UInt256, 32
}

impl UInt128 {
    /// Hex in, hex out.
    pub fn from_json(text: &str) -> Self {
        Self::from_hex(text)
    }

    pub fn to_json(&self) -> String {
        self.to_hex()
    }
}

impl UInt256 {
    /// Hex in, hex out.
    pub fn from_json(text: &str) -> Self {
        Self::from_hex(text)
    }

    pub fn to_json(&self) -> String {
        self.to_hex()
    }
}

impl UInt160 {
    /// Parse any accepted account form: a base-58 address, 40 hex
    /// characters, or the `"0"`/`"1"` sentinel shorthands.
    pub fn from_json(text: &str) -> Self {
        match text {
            "0" => return Self::zero(),
            "1" => return Self::one(),
            _ => {}
        }
        if text.len() == Self::WIDTH * 2 && text.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Self::from_hex(text);
        }
        Self::from_address(text)
    }

    /// Decode a base-58 account address.
    pub fn from_address(text: &str) -> Self {
        let decoded = match base58::decode_checked(text) {
            Ok(decoded) => decoded,
            Err(_) => return Self::invalid(),
        };
        if decoded.len() != 1 + Self::WIDTH || decoded[0] != VERSION_ACCOUNT_ID {
            return Self::invalid();
        }
        Self::from_bytes(&decoded[1..])
    }

    /// The canonical base-58 address form.
    pub fn to_address(&self) -> String {
        base58::encode_versioned(&[VERSION_ACCOUNT_ID], &self.bytes)
    }

    /// Addresses are the JSON form for 160-bit account identifiers.
    pub fn to_json(&self) -> String {
        self.to_address()
    }
}
