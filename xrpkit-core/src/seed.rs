//! Seed encoding envelope.
//!
//! A seed is 128 bits of key material tagged with the key algorithm it
//! feeds. Only the envelope lives here: the versioned, checksummed base-58
//! wrapping and the deterministic passphrase convenience. Key derivation
//! itself is out of scope.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha512};

use crate::base58::{self, VERSION_SEED_ED25519, VERSION_SEED_SECP256K1};
use crate::errors::{Result, XrpkitError};
use crate::uint::UInt128;

/// Key algorithm a seed is tagged for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyType {
    /// The network default.
    #[default]
    Secp256k1,
    Ed25519,
}

/// A 128-bit seed plus its key-type tag.
#[derive(Clone, Copy, Debug)]
pub struct Seed {
    value: UInt128,
    key_type: KeyType,
}

impl Seed {
    /// The invalid sentinel produced by failed parses.
    pub fn invalid() -> Seed {
        Seed {
            value: UInt128::invalid(),
            key_type: KeyType::Secp256k1,
        }
    }

    /// Wrap 16 bytes of entropy.
    pub fn from_entropy(bytes: &[u8], key_type: KeyType) -> Seed {
        Seed {
            value: UInt128::from_bytes(bytes),
            key_type,
        }
    }

    /// Deterministic seed from a passphrase: the first 16 bytes of
    /// SHA-512 over the UTF-8 text. A convenience, not a KDF.
    pub fn from_passphrase(passphrase: &str) -> Seed {
        let digest = Sha512::digest(passphrase.as_bytes());
        Seed {
            value: UInt128::from_bytes(&digest[..16]),
            key_type: KeyType::Secp256k1,
        }
    }

    /// Decode the canonical base-58 envelope. The version prefix selects
    /// the key type.
    ///
    /// # Errors
    ///
    /// `ChecksumMismatch` / `InvalidArgument` from the codec, and
    /// `UnknownVersion` when the payload decodes cleanly under an
    /// unrecognized version prefix.
    pub fn from_base58(text: &str) -> Result<Seed> {
        let decoded = base58::decode_checked(text)?;
        if decoded.len() == 17 && decoded[0] == VERSION_SEED_SECP256K1 {
            return Ok(Seed::from_entropy(&decoded[1..], KeyType::Secp256k1));
        }
        if decoded.len() == 19 && decoded[..3] == VERSION_SEED_ED25519 {
            return Ok(Seed::from_entropy(&decoded[3..], KeyType::Ed25519));
        }
        Err(XrpkitError::UnknownVersion(decoded[0]))
    }

    /// Parse any accepted seed form, in order: base-58 (anything leading
    /// with the seed version character `s`), 32 hex characters, then a
    /// passphrase. Never fails; malformed input yields the invalid state.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(text)))]
    pub fn from_json(text: &str) -> Seed {
        if text.is_empty() {
            return Seed::invalid();
        }
        if text.starts_with('s') {
            return Seed::from_base58(text).unwrap_or_else(|_| Seed::invalid());
        }
        if text.len() == 32 && text.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Seed {
                value: UInt128::from_hex(text),
                key_type: KeyType::Secp256k1,
            };
        }
        Seed::from_passphrase(text)
    }

    /// The canonical base-58 envelope.
    pub fn to_json(&self) -> String {
        match self.key_type {
            KeyType::Secp256k1 => {
                base58::encode_versioned(&[VERSION_SEED_SECP256K1], self.value.as_bytes())
            }
            KeyType::Ed25519 => {
                base58::encode_versioned(&VERSION_SEED_ED25519, self.value.as_bytes())
            }
        }
    }

    pub fn key_type(&self) -> KeyType {
        self.key_type
    }

    pub fn value(&self) -> &UInt128 {
        &self.value
    }

    pub fn is_valid(&self) -> bool {
        self.value.is_valid()
    }
}

impl PartialEq for Seed {
    fn eq(&self, other: &Seed) -> bool {
        self.value == other.value && self.key_type == other.key_type
    }
}

impl Serialize for Seed {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_json())
    }
}

impl<'de> Deserialize<'de> for Seed {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        let seed = Seed::from_json(&text);
        if seed.is_valid() {
            Ok(seed)
        } else {
            Err(D::Error::custom(format!("invalid seed: {:?}", text)))
        }
    }
}
