//! # npchk
//!
//! Console client checking Russian taxpayer identification numbers (INN)
//! against the FNS EGRN registry (`https://npchk.nalog.ru/FNSNDSCAWS_2`).
//!
//! Input is a single INN or the path of a file with one INN per line.
//! Malformed values are reported and skipped, duplicates collapse to one
//! query entry, and each status code returned by the registry is mapped
//! back to its INN for reporting.
//!
//! ## Quick Start
//!
//! ```rust
//! use npchk::core::*;
//!
//! assert!(is_valid_inn("7713011336"));
//!
//! let resolution = resolve("7713011336");
//! assert_eq!(resolution.batch.len(), 1);
//! assert!(resolution.rejections.is_empty());
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | INN validation, input resolution, batch assembly, session loop |
//! | `client` | Blocking SOAP client for the FNSNDSCAWS_2 service |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "client")]
pub mod client;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
