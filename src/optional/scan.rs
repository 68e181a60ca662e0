//! Column-scan binding adapter for [`Optional`].
//!
//! External row sources (embedded SQL drivers, key-value stores) hand over
//! dynamically typed column payloads. This module models that payload as
//! [`ScanValue`] and binds it into an optional under a fixed contract:
//!
//! 1. a null column clears to absent
//! 2. a payload with a direct conversion ([`ScanColumn`]) is adopted as-is
//! 3. a raw byte payload is parsed as JSON text into the target type
//! 4. anything else yields absence without error
//!
//! Every branch raises the set flag: a scan is an assigning operation even
//! when it assigns absence. The execution engine producing [`ScanValue`]s
//! is an opaque collaborator; only the reaction to its output is specified
//! here.

use serde::de::DeserializeOwned;
use thiserror::Error;

use super::presence::Presence;
use super::value::Optional;

/// A dynamically typed column payload handed over by an external source.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanValue {
    /// An SQL NULL or equivalent.
    Null,
    /// A boolean column.
    Bool(bool),
    /// An integer column.
    Int(i64),
    /// A floating-point column.
    Float(f64),
    /// A text column.
    Text(String),
    /// A raw byte column, conventionally JSON-encoded.
    Bytes(Vec<u8>),
}

/// The error surfaced by [`Optional::scan`].
#[derive(Debug, Error)]
pub enum ScanError {
    /// A byte payload failed to parse as JSON text for the target type.
    #[error("malformed column payload: {0}")]
    Decode(#[from] serde_json::Error),
    /// A [`ScanColumn`] capability implementation rejected the payload.
    #[error("column conversion failed: {0}")]
    Column(String),
}

/// The binding capability: a direct conversion from a raw column payload.
///
/// Types opt in by overriding [`scan_column`](ScanColumn::scan_column);
/// the defaulted body declines every payload, sending the scan down the
/// byte-parsing path. Implementations exist for the canonical wire shapes
/// (`bool`, `i64`, `f64`, `String`, `Vec<u8>`); narrower primitives keep
/// the defaulted body and therefore bind only through JSON bytes, exactly
/// like an exact-runtime-type assertion failing for a widened column.
///
/// # Examples
///
/// ```rust
/// use optionals::optional::{ScanColumn, ScanError, ScanValue};
///
/// struct Celsius(f64);
///
/// impl ScanColumn for Celsius {
///     fn scan_column(value: &ScanValue) -> Result<Option<Self>, ScanError> {
///         match value {
///             ScanValue::Float(degrees) => Ok(Some(Celsius(*degrees))),
///             _ => Ok(None),
///         }
///     }
/// }
/// ```
pub trait ScanColumn: Sized {
    /// Attempts a direct conversion from the raw column payload.
    ///
    /// `Ok(None)` declines and falls through to byte parsing; `Err` aborts
    /// the scan and is adopted verbatim.
    ///
    /// # Errors
    ///
    /// Implementations may reject a payload they recognize but cannot
    /// represent.
    fn scan_column(value: &ScanValue) -> Result<Option<Self>, ScanError> {
        let _ = value;
        Ok(None)
    }
}

// =============================================================================
// Canonical direct conversions
// =============================================================================

impl ScanColumn for bool {
    fn scan_column(value: &ScanValue) -> Result<Option<Self>, ScanError> {
        match value {
            ScanValue::Bool(flag) => Ok(Some(*flag)),
            _ => Ok(None),
        }
    }
}

impl ScanColumn for i64 {
    fn scan_column(value: &ScanValue) -> Result<Option<Self>, ScanError> {
        match value {
            ScanValue::Int(number) => Ok(Some(*number)),
            _ => Ok(None),
        }
    }
}

impl ScanColumn for f64 {
    fn scan_column(value: &ScanValue) -> Result<Option<Self>, ScanError> {
        match value {
            ScanValue::Float(number) => Ok(Some(*number)),
            _ => Ok(None),
        }
    }
}

impl ScanColumn for String {
    fn scan_column(value: &ScanValue) -> Result<Option<Self>, ScanError> {
        match value {
            ScanValue::Text(text) => Ok(Some(text.clone())),
            _ => Ok(None),
        }
    }
}

impl ScanColumn for Vec<u8> {
    fn scan_column(value: &ScanValue) -> Result<Option<Self>, ScanError> {
        match value {
            ScanValue::Bytes(bytes) => Ok(Some(bytes.clone())),
            _ => Ok(None),
        }
    }
}

/// Implements [`ScanColumn`] with the defaulted (declining) body, so the
/// type binds only through the byte-parsing path.
macro_rules! scan_through_bytes {
    ($($target:ty),* $(,)?) => {
        $(
            impl ScanColumn for $target {}
        )*
    };
}

scan_through_bytes!(i8, i16, i32, i128, isize, u8, u16, u32, u64, u128, usize, f32, char);

impl<T> ScanColumn for Option<T> {}

impl ScanColumn for Vec<String> {}

// =============================================================================
// The scan operation
// =============================================================================

impl<T> Optional<T>
where
    T: ScanColumn + DeserializeOwned + Presence,
{
    /// Binds a column payload into this optional, in place.
    ///
    /// See the [module documentation](self) for the binding contract. The
    /// set flag is raised on every path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::optional::{Optional, ScanValue};
    ///
    /// let mut count: Optional<i64> = Optional::empty();
    /// count.scan(ScanValue::Int(3)).unwrap();
    /// assert_eq!(count.get(), Ok(&3));
    ///
    /// count.scan(ScanValue::Null).unwrap();
    /// assert!(!count.is_present());
    /// assert!(count.was_set());
    /// ```
    ///
    /// # Errors
    ///
    /// Propagates a byte-payload parse failure or a capability rejection;
    /// the optional is left absent with the set flag raised.
    pub fn scan(&mut self, value: ScanValue) -> Result<(), ScanError> {
        self.set = true;
        if matches!(value, ScanValue::Null) {
            self.value = None;
            return Ok(());
        }
        match T::scan_column(&value) {
            Ok(Some(direct)) => {
                self.value = Some(direct);
                Ok(())
            }
            Ok(None) => match value {
                ScanValue::Bytes(bytes) => match serde_json::from_slice::<T>(&bytes) {
                    Ok(parsed) if !parsed.is_absent_equivalent() => {
                        self.value = Some(parsed);
                        Ok(())
                    }
                    Ok(_) => {
                        self.value = None;
                        Ok(())
                    }
                    Err(error) => {
                        self.value = None;
                        Err(ScanError::Decode(error))
                    }
                },
                _ => {
                    self.value = None;
                    Ok(())
                }
            },
            Err(error) => {
                self.value = None;
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_null_clears_and_raises_set_flag() {
        let mut optional = Optional::of(1_i64);
        optional.scan(ScanValue::Null).unwrap();
        assert!(!optional.is_present());
        assert!(optional.was_set());
    }

    #[test]
    fn test_scan_direct_conversion() {
        let mut count: Optional<i64> = Optional::empty();
        count.scan(ScanValue::Int(42)).unwrap();
        assert_eq!(count.get(), Ok(&42));

        let mut label: Optional<String> = Optional::empty();
        label.scan(ScanValue::Text(String::from("ada"))).unwrap();
        assert_eq!(label.get().map(String::as_str), Ok("ada"));
    }

    #[test]
    fn test_scan_bytes_parse_as_json() {
        let mut count: Optional<i32> = Optional::empty();
        count.scan(ScanValue::Bytes(b"42".to_vec())).unwrap();
        assert_eq!(count.get(), Ok(&42));
    }

    #[test]
    fn test_scan_bytes_parse_failure_propagates() {
        let mut count: Optional<i32> = Optional::empty();
        let result = count.scan(ScanValue::Bytes(b"not json".to_vec()));
        assert!(matches!(result, Err(ScanError::Decode(_))));
        assert!(!count.is_present());
        assert!(count.was_set());
    }

    #[test]
    fn test_scan_mismatched_payload_yields_absence_without_error() {
        // An i64 column scanned into a narrower target: no direct
        // conversion, not bytes, so absent.
        let mut count: Optional<i32> = Optional::empty();
        count.scan(ScanValue::Int(42)).unwrap();
        assert!(!count.is_present());
        assert!(count.was_set());
    }

    #[test]
    fn test_scan_capability_rejection_is_adopted() {
        struct Port(u16);

        impl ScanColumn for Port {
            fn scan_column(value: &ScanValue) -> Result<Option<Self>, ScanError> {
                match value {
                    ScanValue::Int(number) => u16::try_from(*number)
                        .map(|port| Some(Self(port)))
                        .map_err(|_| ScanError::Column(String::from("port out of range"))),
                    _ => Ok(None),
                }
            }
        }

        impl Presence for Port {}

        impl<'de> serde::Deserialize<'de> for Port {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                u16::deserialize(deserializer).map(Self)
            }
        }

        let mut port: Optional<Port> = Optional::empty();
        let result = port.scan(ScanValue::Int(70_000));
        assert!(matches!(result, Err(ScanError::Column(_))));
        assert!(!port.is_present());
        assert!(port.was_set());

        port.scan(ScanValue::Int(8080)).unwrap();
        assert_eq!(port.get().map(|p| p.0), Ok(8080));
    }

    #[test]
    fn test_scan_bytes_direct_conversion_takes_priority() {
        let mut raw: Optional<Vec<u8>> = Optional::empty();
        raw.scan(ScanValue::Bytes(b"not json".to_vec())).unwrap();
        assert_eq!(raw.get().map(Vec::as_slice), Ok(b"not json".as_slice()));
    }
}
