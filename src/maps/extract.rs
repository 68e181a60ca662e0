//! Typed extraction out of maps holding dynamically typed JSON values.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use serde_json::{Map, Value};

use crate::convert::{Converter, FromJson, coerce};
use crate::optional::{Optional, Presence};

/// Extracts a typed optional from a map of dynamically typed values.
///
/// Present iff the key exists, the stored value passes the presence rule,
/// and either the direct type assertion or one of the converters (tried in
/// order, first success wins) produces a `T`.
///
/// # Examples
///
/// ```rust
/// use optionals::convert::Converter;
/// use optionals::maps::extract;
/// use serde_json::{Value, json};
/// use std::collections::HashMap;
///
/// let mut payload: HashMap<String, Value> = HashMap::new();
/// payload.insert(String::from("name"), json!("ada"));
/// payload.insert(String::from("port"), json!("8080"));
///
/// let name: String = extract(&payload, &String::from("name"), &[]).or_else_default();
/// assert_eq!(name, "ada");
///
/// // The port arrives as text; a converter coerces it.
/// let from_text: Converter<u64> = |value| value.as_str()?.parse().ok();
/// let port = extract(&payload, &String::from("port"), &[from_text]);
/// assert_eq!(port.or_else(0), 8080);
/// ```
#[must_use]
pub fn extract<K, T, S>(map: &HashMap<K, Value, S>, key: &K, converters: &[Converter<T>]) -> Optional<T>
where
    K: Eq + Hash,
    T: FromJson + Presence,
    S: BuildHasher,
{
    typed(map.get(key), converters)
}

/// Extracts a typed optional from a JSON object.
///
/// Identical semantics to [`extract`] over the deserialized object shape
/// `serde_json::Map`.
#[must_use]
pub fn extract_json<T>(
    object: &Map<String, Value>,
    key: &str,
    converters: &[Converter<T>],
) -> Optional<T>
where
    T: FromJson + Presence,
{
    typed(object.get(key), converters)
}

fn typed<T>(found: Option<&Value>, converters: &[Converter<T>]) -> Optional<T>
where
    T: FromJson + Presence,
{
    match found {
        Some(value) if !value.is_absent_equivalent() => {
            coerce(value, converters).map_or_else(Optional::empty, Optional::of)
        }
        _ => Optional::empty(),
    }
}
