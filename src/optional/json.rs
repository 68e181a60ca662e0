//! JSON serialization adapter for [`Optional`].
//!
//! The text contract, bit-exact:
//!
//! - an absent optional serializes to the literal `null`
//! - deserializing `null` yields absence with the set flag raised
//! - deserializing any other well-formed value yields that value,
//!   re-validated against the presence rule
//! - malformed input surfaces the parse error; the in-place
//!   [`set_from_json`](Optional::set_from_json) still raises the set flag
//!   in that case
//!
//! Combined with `#[serde(default)]`, a struct field of type `Optional<T>`
//! gets patch semantics: a missing field stays unset, an explicit `null`
//! arrives set-but-absent, and a value arrives set-and-present.

use serde::de::{Deserialize, DeserializeOwned, Deserializer};
use serde::ser::{Serialize, Serializer};

use super::presence::Presence;
use super::value::Optional;

impl<T: Serialize> Serialize for Optional<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match &self.value {
            Some(value) => serializer.serialize_some(value),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de, T> Deserialize<'de> for Optional<T>
where
    T: Deserialize<'de> + Presence,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<T>::deserialize(deserializer)?;
        Ok(match value {
            Some(value) if !value.is_absent_equivalent() => Self {
                value: Some(value),
                set: true,
            },
            _ => Self { value: None, set: true },
        })
    }
}

impl<T: Serialize> Optional<T> {
    /// Serializes to a JSON string: the value's normal form, or `null`
    /// when absent.
    ///
    /// # Errors
    ///
    /// Propagates the underlying serialization error verbatim.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl<T> Optional<T>
where
    T: DeserializeOwned + Presence,
{
    /// Reassigns this optional from JSON text, in place.
    ///
    /// `null` clears to absent; any other input parses as `T` and is
    /// re-validated against the presence rule. The set flag is raised
    /// regardless of outcome: even a failed parse counts as the assigning
    /// operation having executed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::optional::Optional;
    ///
    /// let mut port: Optional<u16> = Optional::empty();
    /// port.set_from_json(b"8080").unwrap();
    /// assert_eq!(port.get(), Ok(&8080));
    ///
    /// port.set_from_json(b"null").unwrap();
    /// assert!(!port.is_present());
    /// assert!(port.was_set());
    /// ```
    ///
    /// # Errors
    ///
    /// Propagates the underlying parse error verbatim; the optional is
    /// left absent with the set flag raised.
    pub fn set_from_json(&mut self, data: &[u8]) -> Result<(), serde_json::Error> {
        self.set = true;
        match serde_json::from_slice::<Option<T>>(data) {
            Ok(Some(value)) if !value.is_absent_equivalent() => {
                self.value = Some(value);
                Ok(())
            }
            Ok(_) => {
                self.value = None;
                Ok(())
            }
            Err(error) => {
                self.value = None;
                Err(error)
            }
        }
    }
}
