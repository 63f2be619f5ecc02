//! Convenience re-exports for downstream crates.
//!
//! ```
//! use xrpkit_core::prelude::*;
//!
//! let amount = Amount::from_human("100 USD", None)?;
//! assert!(amount.is_valid());
//! # Ok::<(), XrpkitError>(())
//! ```

pub use crate::amount::{Amount, IntoAmount};
pub use crate::currency::Currency;
pub use crate::errors::{Result, XrpkitError};
pub use crate::human::FormatOptions;
pub use crate::quality::QualityOptions;
pub use crate::seed::{KeyType, Seed};
pub use crate::uint::{FixedUint, UInt128, UInt160, UInt256};
pub use crate::value::{IssuedValue, NativeValue};
