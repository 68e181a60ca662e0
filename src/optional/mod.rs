//! The optional container and its presence rule.
//!
//! This module provides the fundamental pieces of the library:
//!
//! - [`Optional`]: a container representing "a value or explicit absence",
//!   with functional combinators and set-tracking
//! - [`Presence`]: the policy deciding whether a value counts as absent
//! - [`NotPresentError`]: the single domain error, returned when a value is
//!   demanded from an absent container without a fallback
//!
//! ## Presence versus set-tracking
//!
//! Presence answers "is there a value right now". The set flag answers
//! "did the most recent assigning operation actually execute", which is a
//! different question: deserializing an explicit `null` assigns absence.
//! The distinction matters for partial updates, where a missing field must
//! be left untouched but an explicit `null` must clear it.
//!
//! # Examples
//!
//! ```rust
//! use optionals::optional::Optional;
//!
//! let name = Optional::of_nillable_string("ada");
//! assert_eq!(name.or_else(String::from("anonymous")), "ada");
//!
//! let missing = Optional::of_nillable_string("");
//! assert!(!missing.is_present());
//! ```

mod presence;
mod value;

#[cfg(feature = "json")]
mod json;

#[cfg(feature = "scan")]
mod scan;

pub use presence::Presence;
pub use value::{NotPresentError, Optional};

#[cfg(feature = "scan")]
pub use scan::{ScanColumn, ScanError, ScanValue};
