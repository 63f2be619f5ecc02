//! Checked base-58 codec over the ledger's alphabet.
//!
//! Encoded strings carry a version prefix identifying the payload class and
//! a 4-byte checksum: the leading bytes of a double SHA-256 over
//! version + payload. The alphabet is the network's own permutation of the
//! usual base-58 set (account addresses lead with `r`, seeds with `s`).

use sha2::{Digest, Sha256};

use crate::errors::{Result, XrpkitError};

/// Version byte for account identifiers (20-byte payload).
pub(crate) const VERSION_ACCOUNT_ID: u8 = 0x00;

/// Version byte for secp256k1 seeds (16-byte payload).
pub(crate) const VERSION_SEED_SECP256K1: u8 = 0x21;

/// Version prefix for ed25519 seeds (16-byte payload).
pub(crate) const VERSION_SEED_ED25519: [u8; 3] = [0x01, 0xE1, 0x4B];

/// First 4 bytes of sha256(sha256(data)).
fn checksum(data: &[u8]) -> [u8; 4] {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    let mut out = [0u8; 4];
    out.copy_from_slice(&second[..4]);
    out
}

/// Encode `version || payload || checksum` in base-58.
pub(crate) fn encode_versioned(version: &[u8], payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(version.len() + payload.len() + 4);
    data.extend_from_slice(version);
    data.extend_from_slice(payload);
    let check = checksum(&data);
    data.extend_from_slice(&check);
    bs58::encode(data)
        .with_alphabet(bs58::Alphabet::RIPPLE)
        .into_string()
}

/// Decode a base-58 string and verify its checksum, returning
/// `version || payload` with the checksum stripped.
///
/// # Errors
///
/// `InvalidArgument` for characters outside the alphabet or an impossibly
/// short payload; `ChecksumMismatch` when the trailing 4 bytes do not match.
pub(crate) fn decode_checked(text: &str) -> Result<Vec<u8>> {
    let data = bs58::decode(text)
        .with_alphabet(bs58::Alphabet::RIPPLE)
        .into_vec()
        .map_err(|_| XrpkitError::InvalidArgument(format!("malformed base58: {:?}", text)))?;
    if data.len() < 5 {
        return Err(XrpkitError::InvalidArgument(format!(
            "base58 payload too short: {:?}",
            text
        )));
    }
    let (body, check) = data.split_at(data.len() - 4);
    if checksum(body) != check {
        return Err(XrpkitError::ChecksumMismatch);
    }
    Ok(body.to_vec())
}
