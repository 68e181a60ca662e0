//! Type coercion from dynamically typed JSON values.
//!
//! Extraction out of an untyped tree happens in two stages, shared by the
//! map extractors and the path extractor:
//!
//! 1. a direct type assertion via [`FromJson`], which matches exact kinds
//!    and never coerces
//! 2. an ordered chain of [`Converter`] fallbacks, tried in order, first
//!    success wins
//!
//! A converter signals failure with `None`; failure is not a reportable
//! error, merely "try the next one, and stay absent if all decline".

use serde_json::{Map, Value};

/// A fallback coercion tried when a value's dynamic type does not already
/// match the requested one.
///
/// Converters must be pure: they are tried speculatively and their result
/// is discarded on failure.
///
/// # Examples
///
/// ```rust
/// use optionals::convert::Converter;
/// use serde_json::Value;
///
/// let from_text: Converter<u16> = |value| value.as_str()?.parse().ok();
/// assert_eq!(from_text(&Value::from("8080")), Some(8080));
/// assert_eq!(from_text(&Value::from("no")), None);
/// ```
pub type Converter<T> = fn(&Value) -> Option<T>;

/// A direct type assertion against a dynamically typed JSON value.
///
/// Implementations match on the value's exact kind and never coerce: a
/// string holding digits is not a number, and a float-kind number is not
/// an integer. The one deliberate widening is [`f64`], which accepts any
/// JSON number, because in a dynamically typed tree every number is a
/// float reading.
pub trait FromJson: Sized {
    /// Returns the typed value when the dynamic kind matches exactly.
    fn from_json(value: &Value) -> Option<Self>;
}

// =============================================================================
// Exact-kind assertions
// =============================================================================

impl FromJson for String {
    fn from_json(value: &Value) -> Option<Self> {
        value.as_str().map(String::from)
    }
}

impl FromJson for bool {
    fn from_json(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl FromJson for i64 {
    fn from_json(value: &Value) -> Option<Self> {
        value.as_i64()
    }
}

impl FromJson for u64 {
    fn from_json(value: &Value) -> Option<Self> {
        value.as_u64()
    }
}

impl FromJson for f64 {
    fn from_json(value: &Value) -> Option<Self> {
        value.as_f64()
    }
}

impl FromJson for Vec<Value> {
    fn from_json(value: &Value) -> Option<Self> {
        value.as_array().cloned()
    }
}

impl FromJson for Map<String, Value> {
    fn from_json(value: &Value) -> Option<Self> {
        value.as_object().cloned()
    }
}

impl FromJson for Value {
    fn from_json(value: &Value) -> Option<Self> {
        (!value.is_null()).then(|| value.clone())
    }
}

/// Runs the two-stage coercion: direct assertion first, then each
/// converter in order.
#[must_use]
pub fn coerce<T: FromJson>(value: &Value, converters: &[Converter<T>]) -> Option<T> {
    T::from_json(value).or_else(|| converters.iter().find_map(|converter| converter(value)))
}
