//! Error types for xrpkit core operations.
//!
//! Parsing untrusted input never surfaces these directly: a malformed amount,
//! address or seed comes back as an entity in the invalid state and keeps
//! propagating invalid results through arithmetic until the caller checks
//! `is_valid()` at a meaningful boundary. The variants below are reserved for
//! genuine protocol violations (out-of-range values in strict mode, bad
//! checksums handed to the explicit codec entry points, XRP/XRP qualities).

/// Comprehensive error type for xrpkit core operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum XrpkitError {
    /// Malformed input shape or a structurally impossible request
    /// (e.g. an XRP/XRP quality).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A value exceeds the minimum/maximum for its kind in strict mode.
    #[error("value out of range: {0}")]
    OutOfRange(String),

    /// A non-zero issued value is smaller than the smallest representable
    /// magnitude.
    #[error("issued value underflow")]
    Underflow,

    /// An issued value is larger than the largest representable magnitude.
    #[error("issued value overflow")]
    Overflow,

    /// A base-58 payload failed its checksum.
    #[error("base58 checksum mismatch")]
    ChecksumMismatch,

    /// A base-58 payload decoded cleanly but carries a version byte this
    /// library does not recognize.
    #[error("unknown version byte: {0:#04x}")]
    UnknownVersion(u8),

    /// Arithmetic between operands that cannot be combined
    /// (native vs issued, or an invalid operand).
    #[error("amounts are not comparable")]
    NotComparable,
}

/// Common result alias for xrpkit core operations.
pub type Result<T> = std::result::Result<T, XrpkitError>;
