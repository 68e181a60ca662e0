//! The presence rule: deciding whether a value counts as absent.
//!
//! The library never treats "no assignment" and "assigned an absent
//! equivalent" differently anywhere presence is decided: construction,
//! combinator results, map lookups, and deserialization all route through
//! the single [`Presence::is_absent_equivalent`] primitive.
//!
//! The rule mirrors reference semantics: a type is absent-equivalent only
//! when it can genuinely represent "no referent". In Rust that is `None`
//! for [`Option`] and `null` for dynamically typed JSON values; plain
//! values, strings, and collections are always present once assigned.

use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::sync::Arc;

/// The policy deciding whether a value counts as absent.
///
/// Implementations answer a capability question, decided per concrete
/// type: "does this value behave as a reference that can be null". The
/// default answer is no, which is correct for every plain value type.
///
/// # Implementations
///
/// - Integers, floats, `bool`, `char`, `()`, `String`, and references are
///   never absent-equivalent.
/// - `Option<T>` is absent-equivalent iff it is `None`.
/// - `Box`, `Rc`, and `Arc` cannot be null in safe Rust and are always
///   present; the rule is shallow and does not inspect the pointee.
/// - `Vec`, `HashMap`, and `BTreeMap` are always present: Rust collections
///   have no nil state, so "nil collection" is spelled `Option<Vec<T>>`.
/// - `serde_json::Value` is absent-equivalent iff it is `Value::Null`
///   (requires the `json` feature).
///
/// # Examples
///
/// ```rust
/// use optionals::optional::Presence;
///
/// assert!(!42.is_absent_equivalent());
/// assert!(!String::from("").is_absent_equivalent());
///
/// let missing: Option<i32> = None;
/// assert!(missing.is_absent_equivalent());
/// assert!(!Some(42).is_absent_equivalent());
/// ```
pub trait Presence {
    /// Returns `true` when this value counts as absent.
    fn is_absent_equivalent(&self) -> bool {
        false
    }
}

// =============================================================================
// Always-present implementations
// =============================================================================

/// Implements [`Presence`] with the defaulted (never absent) body.
macro_rules! always_present {
    ($($target:ty),* $(,)?) => {
        $(
            impl Presence for $target {}
        )*
    };
}

always_present!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, (),
    String, str,
);

impl<T: ?Sized> Presence for &T {}

impl<T: ?Sized> Presence for &mut T {}

impl<T: ?Sized> Presence for Box<T> {}

impl<T: ?Sized> Presence for Rc<T> {}

impl<T: ?Sized> Presence for Arc<T> {}

impl<T> Presence for Vec<T> {}

impl<T> Presence for [T] {}

impl<K, V, S> Presence for HashMap<K, V, S> {}

impl<K, V> Presence for BTreeMap<K, V> {}

// =============================================================================
// Nullable implementations
// =============================================================================

impl<T> Presence for Option<T> {
    fn is_absent_equivalent(&self) -> bool {
        self.is_none()
    }
}

#[cfg(feature = "json")]
impl Presence for serde_json::Value {
    fn is_absent_equivalent(&self) -> bool {
        self.is_null()
    }
}

#[cfg(feature = "json")]
impl Presence for serde_json::Map<String, serde_json::Value> {}
