//! Xrpkit core.
//!
//! Consensus-compatible primitives for a client of the XRP Ledger: the
//! exact decimal amount model, the order-book quality codec, the
//! fixed-width identifier types with their checked base-58 envelopes, and
//! the human parser/formatter. Correctness here is defined externally by
//! the network — rounding, range clamping, exponent selection and byte
//! layout all follow the consensus rules bit for bit.
//!
//! This crate intentionally stays purely computational: no transport, no
//! signing, no I/O. Orchestration layers (connection management, the
//! transaction queue, path finding) consume these contracts from their own
//! crates.
//!
//! # Example
//!
//! ```
//! use xrpkit_core::{Amount, FormatOptions};
//!
//! let price = Amount::from_human("25.2 XRP", None)?;
//! assert_eq!(price.to_text(), "25200000"); // stored as drops
//!
//! let total = price.multiply("4")?;
//! assert_eq!(total.to_human(&FormatOptions::default())?, "100.8");
//! # Ok::<(), xrpkit_core::XrpkitError>(())
//! ```
//!
//! # Invalid values
//!
//! Parsing untrusted input never fails for ordinary format mismatches; it
//! produces an entity whose `is_valid()` is false, and arithmetic keeps
//! propagating that state. Errors are reserved for strict-mode range
//! violations and structurally impossible requests.

pub mod amount;
pub mod base58;
pub mod currency;
pub mod decimal;
pub mod errors;
pub mod human;
pub mod prelude;
pub mod quality;
pub mod seed;
pub mod uint;
pub mod value;

pub use amount::{Amount, AmountValue, IntoAmount};
pub use currency::{unix_to_ripple_time, Currency, RIPPLE_EPOCH_OFFSET};
pub use decimal::{Decimal, RoundMode};
pub use errors::{Result, XrpkitError};
pub use human::FormatOptions;
pub use quality::QualityOptions;
pub use seed::{KeyType, Seed};
pub use uint::{FixedUint, UInt128, UInt160, UInt256, ACCOUNT_ONE, ACCOUNT_ZERO};
pub use value::{set_strict_mode, strict_mode, IssuedValue, NativeValue};
