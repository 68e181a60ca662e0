//! The optional container: a value holder with presence and set-tracking.

use std::fmt;

use thiserror::Error;

use super::presence::Presence;

/// The error returned by [`Optional::get`] when the value is not present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("not present")]
pub struct NotPresentError;

/// A container representing "a value or explicit absence".
///
/// `Optional` replaces ambient null sentinels with an explicit,
/// inspectable type. Besides presence it tracks a *set flag*: whether the
/// most recent assigning operation (JSON unmarshal, column scan,
/// [`or_else_set`](Optional::or_else_set)) actually executed, independent
/// of whether the assigned value turned out present. The flag is only
/// meaningful immediately after such an operation; plain constructors
/// leave it lowered, and it is excluded from equality comparisons.
///
/// Presence is decided by the [`Presence`] rule wherever a value is
/// assigned: constructing from an absent-equivalent value (a `None`, a
/// JSON `null`) yields absence, not a present nothing.
///
/// # Examples
///
/// ```rust
/// use optionals::optional::Optional;
///
/// let doubled = Optional::of(21).map(|n| n * 2);
/// assert_eq!(doubled.or_else(0), 42);
///
/// let absent: Optional<i32> = Optional::empty();
/// assert!(!absent.is_present());
/// assert_eq!(absent.or_else(7), 7);
/// ```
///
/// # Thread safety
///
/// Every operation is a direct, non-blocking computation on data owned by
/// the caller. Mutating operations take `&mut self`; sharing one instance
/// across threads therefore requires external synchronization, which the
/// borrow checker enforces rather than documents.
#[derive(Clone)]
pub struct Optional<T> {
    pub(crate) value: Option<T>,
    pub(crate) set: bool,
}

// =============================================================================
// Construction
// =============================================================================

impl<T: Presence> Optional<T> {
    /// Creates a new optional with the supplied value.
    ///
    /// The optional is present unless the value is absent-equivalent under
    /// the [`Presence`] rule.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::optional::Optional;
    ///
    /// assert!(Optional::of(42).is_present());
    /// assert!(!Optional::of(None::<i32>).is_present());
    /// ```
    #[must_use]
    pub fn of(value: T) -> Self {
        if value.is_absent_equivalent() {
            Self::empty()
        } else {
            Self {
                value: Some(value),
                set: false,
            }
        }
    }

    /// Creates a new optional with the supplied value.
    ///
    /// Identical in semantics to [`of`](Optional::of); the name signals at
    /// the call site that an absent-equivalent argument is expected and
    /// deliberate.
    #[must_use]
    pub fn of_nillable(value: T) -> Self {
        Self::of(value)
    }
}

impl Optional<String> {
    /// Creates a new string optional, treating the empty string as absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::optional::Optional;
    ///
    /// assert!(Optional::of_nillable_string("ada").is_present());
    /// assert!(!Optional::of_nillable_string("").is_present());
    /// ```
    #[must_use]
    pub fn of_nillable_string(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            set: false,
            value: (!value.is_empty()).then_some(value),
        }
    }
}

impl<T> Optional<T> {
    /// Creates a new empty (not-present) optional.
    ///
    /// Every call returns a fresh instance; empty optionals are never
    /// shared.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            value: None,
            set: false,
        }
    }

    /// Returns a new empty optional of the same type.
    #[must_use]
    pub const fn as_empty(&self) -> Self {
        Self::empty()
    }
}

// =============================================================================
// Observers
// =============================================================================

impl<T> Optional<T> {
    /// Returns `true` if the value is present.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        self.value.is_some()
    }

    /// Returns `true` if the most recent assigning operation executed.
    ///
    /// Assigning operations are JSON unmarshalling, column scanning,
    /// [`or_else_set`](Optional::or_else_set), and
    /// [`was_set_else_set`](Optional::was_set_else_set). Use
    /// [`unset`](Optional::unset) to lower the flag alone.
    #[must_use]
    pub const fn was_set(&self) -> bool {
        self.set
    }

    /// Returns a reference to the value, or [`NotPresentError`] when absent.
    ///
    /// # Errors
    ///
    /// Returns [`NotPresentError`] if the value is not present.
    pub fn get(&self) -> Result<&T, NotPresentError> {
        self.value.as_ref().ok_or(NotPresentError)
    }

    /// Returns the value and `true`, or the zero value and `false` when
    /// absent.
    ///
    /// Unlike [`get`](Optional::get) this never errors.
    #[must_use]
    pub fn get_ok(&self) -> (T, bool)
    where
        T: Clone + Default,
    {
        self.value
            .as_ref()
            .map_or_else(|| (T::default(), false), |value| (value.clone(), true))
    }

    /// Returns a borrowed view as a standard [`Option`].
    #[must_use]
    pub const fn as_option(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Consumes the optional, returning a standard [`Option`].
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        self.value
    }
}

// =============================================================================
// Extractors
// =============================================================================

impl<T> Optional<T> {
    /// Returns the value if present, otherwise returns `other`.
    #[must_use]
    pub fn or_else(self, other: T) -> T {
        self.value.unwrap_or(other)
    }

    /// Returns the value if present, otherwise the result of calling the
    /// supplier.
    #[must_use]
    pub fn or_else_get<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.value.unwrap_or_else(supplier)
    }

    /// Returns the value if present, otherwise the type's default value.
    #[must_use]
    pub fn or_else_default(self) -> T
    where
        T: Default,
    {
        self.value.unwrap_or_default()
    }

    /// Returns `Err(error)` when the value is not present.
    ///
    /// Useful for validation chains that only care about absence:
    ///
    /// ```rust
    /// use optionals::optional::Optional;
    ///
    /// fn validate(port: &Optional<u16>) -> Result<(), String> {
    ///     port.or_else_error(String::from("port is required"))
    /// }
    ///
    /// assert!(validate(&Optional::of(8080)).is_ok());
    /// assert!(validate(&Optional::empty()).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns the supplied error if the value is not present.
    pub fn or_else_error<E>(&self, error: E) -> Result<(), E> {
        if self.is_present() { Ok(()) } else { Err(error) }
    }

    /// Returns self if present, otherwise panics with the supplied message.
    ///
    /// This is the single unrecoverable escape hatch: demanding a value the
    /// caller's own logic guarantees to be present. Absence here is a
    /// programmer error, so it aborts instead of returning a recoverable
    /// error; downgrading it would erase the "this cannot happen"
    /// assertion at the call site.
    ///
    /// # Panics
    ///
    /// Panics with `message` if the value is not present.
    #[must_use]
    pub fn or_else_panic(self, message: impl fmt::Display) -> Self {
        assert!(self.is_present(), "{message}");
        self
    }

    /// Returns the value only if `condition` is true and the value is
    /// present; otherwise returns `other`.
    ///
    /// Couples an external condition with internal presence, for "use the
    /// value only if it was both present and explicitly enabled" patterns.
    #[must_use]
    pub fn if_else(self, condition: bool, other: T) -> T {
        match self.value {
            Some(value) if condition => value,
            _ => other,
        }
    }
}

// =============================================================================
// Branch combinators
// =============================================================================

impl<T> Optional<T> {
    /// Calls `action` with the value when present; does nothing otherwise.
    ///
    /// Side-effecting by design; `action`'s return value is discarded.
    pub fn if_present<F>(&self, action: F) -> &Self
    where
        F: FnOnce(&T),
    {
        if let Some(value) = &self.value {
            action(value);
        }
        self
    }

    /// Calls `action` with the value when present, otherwise calls
    /// `otherwise`. Exactly one branch runs.
    pub fn if_present_otherwise<F, G>(&self, action: F, otherwise: G) -> &Self
    where
        F: FnOnce(&T),
        G: FnOnce(),
    {
        match &self.value {
            Some(value) => action(value),
            None => otherwise(),
        }
        self
    }

    /// Three-way dispatch on (set, present).
    ///
    /// Calls `action` with the value only when the set flag is raised and
    /// the value is present; calls `not_present` only when the flag is
    /// raised but the value is absent; calls neither when the flag is
    /// lowered.
    ///
    /// This is the reading side of partial-update semantics: an untouched
    /// field runs no branch, an explicit `null` runs `not_present`, an
    /// assigned value runs `action`.
    pub fn if_set<F, G>(&self, action: F, not_present: G) -> &Self
    where
        F: FnOnce(&T),
        G: FnOnce(),
    {
        match &self.value {
            Some(value) if self.set => action(value),
            None if self.set => not_present(),
            _ => {}
        }
        self
    }

    /// Like [`if_set`](Optional::if_set), with a third branch for
    /// "never touched": `otherwise` runs when the flag is lowered and the
    /// value is absent.
    pub fn if_set_otherwise<F, G, H>(&self, action: F, not_present: G, otherwise: H) -> &Self
    where
        F: FnOnce(&T),
        G: FnOnce(),
        H: FnOnce(),
    {
        match &self.value {
            Some(value) if self.set => action(value),
            None if self.set => not_present(),
            None => otherwise(),
            Some(_) => {}
        }
        self
    }
}

// =============================================================================
// Transformers
// =============================================================================

impl<T> Optional<T> {
    /// Returns an optional describing the value when it is present and the
    /// predicate accepts it; otherwise an empty optional.
    ///
    /// The predicate is never invoked on an absent optional. The result is
    /// a fresh instance with the set flag lowered.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::optional::Optional;
    ///
    /// let even = Optional::of(4).filter(|n| n % 2 == 0);
    /// assert!(even.is_present());
    ///
    /// let odd = Optional::of(3).filter(|n| n % 2 == 0);
    /// assert!(!odd.is_present());
    /// ```
    #[must_use]
    pub fn filter<F>(self, predicate: F) -> Self
    where
        F: FnOnce(&T) -> bool,
    {
        match self.value {
            Some(value) if predicate(&value) => Self {
                value: Some(value),
                set: false,
            },
            _ => Self::empty(),
        }
    }

    /// Applies `mapping` to the value when present, producing an optional
    /// of the result.
    ///
    /// The presence rule is applied to the mapped value, so a mapping that
    /// returns an absent equivalent yields absence, not a present nothing.
    /// The mapping is never invoked on an absent optional.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::optional::Optional;
    ///
    /// let length = Optional::of_nillable_string("ada").map(|s| s.len());
    /// assert_eq!(length.or_else(0), 3);
    ///
    /// let cleared = Optional::of(1).map(|_| None::<i32>);
    /// assert!(!cleared.is_present());
    /// ```
    #[must_use]
    pub fn map<U, F>(self, mapping: F) -> Optional<U>
    where
        U: Presence,
        F: FnOnce(T) -> U,
    {
        match self.value {
            Some(value) => Optional::of(mapping(value)),
            None => Optional::empty(),
        }
    }
}

// =============================================================================
// Set-flag family
// =============================================================================

impl<T> Optional<T> {
    /// Returns the value if present and set, otherwise returns `other`.
    #[must_use]
    pub fn was_set_else(self, other: T) -> T {
        match self.value {
            Some(value) if self.set => value,
            _ => other,
        }
    }

    /// Returns the value if present and set, otherwise the result of
    /// calling the supplier.
    #[must_use]
    pub fn was_set_else_get<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self.value {
            Some(value) if self.set => value,
            _ => supplier(),
        }
    }

    /// Returns `Err(error)` unless the value is present and set.
    ///
    /// # Errors
    ///
    /// Returns the supplied error unless the value is present and set.
    pub fn was_set_else_error<E>(&self, error: E) -> Result<(), E> {
        if self.set && self.is_present() {
            Ok(())
        } else {
            Err(error)
        }
    }

    /// Returns self if present and set, otherwise panics with the supplied
    /// message.
    ///
    /// # Panics
    ///
    /// Panics with `message` unless the value is present and set.
    #[must_use]
    pub fn was_set_else_panic(self, message: impl fmt::Display) -> Self {
        assert!(self.set && self.is_present(), "{message}");
        self
    }
}

// =============================================================================
// Mutators
// =============================================================================

impl<T: Presence> Optional<T> {
    /// Assigns the supplied value when absent, raising the set flag.
    ///
    /// The presence rule is applied to the assignment: an absent-equivalent
    /// value leaves the optional absent, but the set flag is still raised
    /// (the operation executed). Idempotent once present.
    pub fn or_else_set(&mut self, value: T) -> &mut Self {
        if self.value.is_none() {
            self.assign(value);
        }
        self
    }

    /// Assigns the supplied value unless the optional is both present and
    /// set, raising the set flag.
    pub fn was_set_else_set(&mut self, value: T) -> &mut Self {
        if !(self.set && self.value.is_some()) {
            self.assign(value);
        }
        self
    }

    /// Assigns a value under the presence rule and raises the set flag.
    pub(crate) fn assign(&mut self, value: T) {
        self.value = (!value.is_absent_equivalent()).then_some(value);
        self.set = true;
    }
}

impl<T> Optional<T> {
    /// Lowers the set flag without touching presence or value.
    pub fn unset(&mut self) -> &mut Self {
        self.set = false;
        self
    }

    /// Clears the optional: absent, set flag lowered, value dropped.
    pub fn clear(&mut self) -> &mut Self {
        self.value = None;
        self.set = false;
        self
    }
}

// =============================================================================
// Standard trait implementations
// =============================================================================

impl<T> Default for Optional<T> {
    /// Returns an empty optional.
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Optional")
            .field("value", &self.value)
            .field("set", &self.set)
            .finish()
    }
}

/// Equality compares presence and value only; the set flag is operation
/// bookkeeping, not part of the value's identity.
impl<T: PartialEq> PartialEq for Optional<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for Optional<T> {}

impl<T: Presence> From<Option<T>> for Optional<T> {
    /// Converts under the presence rule: `None` and absent-equivalent
    /// `Some` values both yield an empty optional.
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Self::empty, Self::of)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        optional.value
    }
}
