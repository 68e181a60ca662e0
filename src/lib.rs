//! # optionals
//!
//! Explicit optional values for Rust: a present/absent container with
//! set-tracking, functional combinators, keyed-map helpers, and
//! path-based extraction from untyped JSON trees.
//!
//! ## Overview
//!
//! This library replaces ambient null sentinels with an explicit,
//! inspectable type. It includes:
//!
//! - **Optional container**: [`Optional`](optional::Optional) with
//!   defaulting, filtering, mapping, and three-way set/present dispatch
//! - **Presence rule**: [`Presence`](optional::Presence), the single
//!   primitive deciding whether a value counts as absent
//! - **Serialization adapters**: JSON marshal/unmarshal and a generic
//!   column-scan binding
//! - **Map helpers**: [`OptionalMap`](maps::OptionalMap) accessors and
//!   mutation helpers over keyed containers
//! - **Path extraction**: [`extract_path`](path::extract_path) for walking
//!   nested JSON structures with a per-step resolution trace
//!
//! ## Feature Flags
//!
//! - `json`: JSON serialization, dynamic-value conversion, path extraction
//! - `scan`: the column-scan binding adapter (implies `json`)
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use optionals::prelude::*;
//!
//! let value = Optional::of(21).map(|n| n * 2).or_else(0);
//! assert_eq!(value, 42);
//!
//! let absent: Optional<i32> = Optional::empty();
//! assert_eq!(absent.or_else(7), 7);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use optionals::prelude::*;
/// ```
pub mod prelude {

    pub use crate::optional::*;

    pub use crate::maps::*;

    #[cfg(feature = "json")]
    pub use crate::convert::*;

    #[cfg(feature = "json")]
    pub use crate::path::*;
}

pub mod optional;

pub mod maps;

#[cfg(feature = "json")]
pub mod convert;

#[cfg(feature = "json")]
pub mod path;
