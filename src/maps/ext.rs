//! The [`OptionalMap`] extension trait and its container implementations.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::optional::{Optional, Presence};

/// Presence-aware accessors and mutation helpers for keyed containers.
///
/// On the read side a key mapped to an absent-equivalent value behaves
/// like a missing key. On the write side the helpers follow the same rule,
/// with one deliberately surprising policy, inherited and kept on purpose:
///
/// **Replacing with nothing removes the key.** When
/// [`replace_if_present`](OptionalMap::replace_if_present) is handed an
/// absent-equivalent replacement for an existing entry, it deletes the
/// entry entirely and still reports success: "setting a value to nothing"
/// and "removing the key" are collapsed into one operation here, although
/// they are normally distinct. [`compute_if_present`](OptionalMap::compute_if_present)
/// applies the same policy to a recomputed value.
pub trait OptionalMap<K, V> {
    /// Returns an optional of the value under `key`.
    ///
    /// Present iff the key exists and the stored value passes the presence
    /// rule. Never panics on a missing key.
    fn get_optional(&self, key: &K) -> Optional<V>
    where
        V: Clone + Presence;

    /// Calls `action` with the key and value when the key is present (and
    /// the value passes the presence rule); does nothing otherwise.
    fn if_present<F>(&self, key: &K, action: F) -> &Self
    where
        V: Presence,
        F: FnOnce(&K, &V);

    /// Calls `action` with the key and value when present, otherwise calls
    /// `otherwise` with the key.
    fn if_present_otherwise<F, G>(&self, key: &K, action: F, otherwise: G) -> &Self
    where
        V: Presence,
        F: FnOnce(&K, &V),
        G: FnOnce(&K);

    /// Returns the existing value, or computes one for the key.
    ///
    /// The computed value is stored only if it passes the presence rule;
    /// it is returned either way.
    fn compute_if_absent<F>(&mut self, key: K, compute: F) -> V
    where
        V: Clone + Presence,
        F: FnOnce(&K) -> V;

    /// Recomputes an existing present entry.
    ///
    /// An absent-equivalent recomputation deletes the key entirely rather
    /// than storing a present nothing. Returns the recomputed value as an
    /// optional; absent when no entry was present or the recomputation
    /// produced an absent equivalent.
    fn compute_if_present<F>(&mut self, key: &K, compute: F) -> Optional<V>
    where
        V: Clone + Presence,
        F: FnOnce(&K, &V) -> V;

    /// Stores `value` only if the key is missing or its value is
    /// absent-equivalent. Returns whether it stored.
    fn put_if_absent(&mut self, key: K, value: V) -> bool
    where
        V: Presence;

    /// Replaces an existing present entry with `value`. Returns whether it
    /// replaced.
    ///
    /// An absent-equivalent `value` instead **deletes** any existing entry
    /// and still reports `true`; see the trait documentation.
    fn replace_if_present(&mut self, key: &K, value: V) -> bool
    where
        V: Presence;
}

/// Returns an optional of the value under `key` in any [`OptionalMap`].
///
/// # Examples
///
/// ```rust
/// use optionals::maps;
/// use std::collections::HashMap;
///
/// let mut ages: HashMap<String, u32> = HashMap::new();
/// ages.insert(String::from("ada"), 36);
///
/// assert_eq!(maps::get(&ages, &String::from("ada")).or_else(0), 36);
/// assert_eq!(maps::get(&ages, &String::from("alan")).or_else(0), 0);
/// ```
#[must_use]
pub fn get<K, V, M>(map: &M, key: &K) -> Optional<V>
where
    M: OptionalMap<K, V> + ?Sized,
    V: Clone + Presence,
{
    map.get_optional(key)
}

// =============================================================================
// Container implementations
// =============================================================================

/// Implements [`OptionalMap`] for a std map type. The method bodies only
/// rely on `get`/`get_mut`/`insert`/`remove`, which both containers share.
macro_rules! optional_map_impl {
    (impl<$($generics:ident),*> for $map:ty where [$($bounds:tt)*]) => {
        impl<$($generics),*> OptionalMap<K, V> for $map
        where
            $($bounds)*
        {
            fn get_optional(&self, key: &K) -> Optional<V>
            where
                V: Clone + Presence,
            {
                match self.get(key) {
                    Some(value) if !value.is_absent_equivalent() => Optional::of(value.clone()),
                    _ => Optional::empty(),
                }
            }

            fn if_present<F>(&self, key: &K, action: F) -> &Self
            where
                V: Presence,
                F: FnOnce(&K, &V),
            {
                if let Some(value) = self.get(key) {
                    if !value.is_absent_equivalent() {
                        action(key, value);
                    }
                }
                self
            }

            fn if_present_otherwise<F, G>(&self, key: &K, action: F, otherwise: G) -> &Self
            where
                V: Presence,
                F: FnOnce(&K, &V),
                G: FnOnce(&K),
            {
                match self.get(key) {
                    Some(value) if !value.is_absent_equivalent() => action(key, value),
                    _ => otherwise(key),
                }
                self
            }

            fn compute_if_absent<F>(&mut self, key: K, compute: F) -> V
            where
                V: Clone + Presence,
                F: FnOnce(&K) -> V,
            {
                if let Some(existing) = self.get(&key) {
                    if !existing.is_absent_equivalent() {
                        return existing.clone();
                    }
                }
                let computed = compute(&key);
                if !computed.is_absent_equivalent() {
                    self.insert(key, computed.clone());
                }
                computed
            }

            fn compute_if_present<F>(&mut self, key: &K, compute: F) -> Optional<V>
            where
                V: Clone + Presence,
                F: FnOnce(&K, &V) -> V,
            {
                let computed = match self.get(key) {
                    Some(existing) if !existing.is_absent_equivalent() => compute(key, existing),
                    _ => return Optional::empty(),
                };
                if computed.is_absent_equivalent() {
                    self.remove(key);
                    Optional::empty()
                } else {
                    if let Some(slot) = self.get_mut(key) {
                        *slot = computed.clone();
                    }
                    Optional::of(computed)
                }
            }

            fn put_if_absent(&mut self, key: K, value: V) -> bool
            where
                V: Presence,
            {
                match self.get(&key) {
                    Some(existing) if !existing.is_absent_equivalent() => false,
                    _ => {
                        self.insert(key, value);
                        true
                    }
                }
            }

            fn replace_if_present(&mut self, key: &K, value: V) -> bool
            where
                V: Presence,
            {
                if value.is_absent_equivalent() {
                    // Setting a value to nothing removes the key entirely.
                    self.remove(key).is_some()
                } else {
                    match self.get_mut(key) {
                        Some(slot) if !slot.is_absent_equivalent() => {
                            *slot = value;
                            true
                        }
                        _ => false,
                    }
                }
            }
        }
    };
}

optional_map_impl!(impl<K, V, S> for HashMap<K, V, S> where [K: Eq + Hash, S: BuildHasher]);
optional_map_impl!(impl<K, V> for BTreeMap<K, V> where [K: Ord]);
