//! Property-based tests for the Optional container.
//!
//! This module verifies the container's laws and invariants using
//! proptest.

#![forbid(unsafe_code)]

use optionals::optional::Optional;
use proptest::prelude::*;

// =============================================================================
// Strategy for generating test data
// =============================================================================

fn arbitrary_value() -> impl Strategy<Value = i32> {
    any::<i32>()
}

fn arbitrary_text() -> impl Strategy<Value = String> {
    "[a-z]{0,12}".prop_map(|s| s)
}

// =============================================================================
// Of-Presence Law: of(v).is_present() for every plain value
// =============================================================================

proptest! {
    #[test]
    fn prop_of_plain_value_is_present(value in arbitrary_value()) {
        prop_assert!(Optional::of(value).is_present());
    }
}

// =============================================================================
// Or-Else Identity Law: of(v).or_else(other) == v
// =============================================================================

proptest! {
    #[test]
    fn prop_or_else_returns_the_value_when_present(
        value in arbitrary_value(),
        other in arbitrary_value()
    ) {
        prop_assert_eq!(Optional::of(value).or_else(other), value);
    }
}

// =============================================================================
// Empty-Fallback Law: empty().or_else(other) == other
// =============================================================================

proptest! {
    #[test]
    fn prop_empty_or_else_returns_the_fallback(other in arbitrary_value()) {
        prop_assert_eq!(Optional::<i32>::empty().or_else(other), other);
    }
}

// =============================================================================
// Nillable-String Law: presence iff non-empty
// =============================================================================

proptest! {
    #[test]
    fn prop_nillable_string_presence(text in arbitrary_text()) {
        let optional = Optional::of_nillable_string(text.clone());
        prop_assert_eq!(optional.is_present(), !text.is_empty());
    }
}

// =============================================================================
// Filter Law: filter keeps the value iff the predicate accepts it
// =============================================================================

proptest! {
    #[test]
    fn prop_filter_keeps_iff_predicate_accepts(value in arbitrary_value()) {
        let kept = Optional::of(value).filter(|n| n % 2 == 0);
        prop_assert_eq!(kept.is_present(), value % 2 == 0);
        if value % 2 == 0 {
            prop_assert_eq!(kept.or_else(-1), value);
        }
    }
}

// =============================================================================
// Map Composition Law: map(f).map(g) == map(g . f) for plain values
// =============================================================================

proptest! {
    #[test]
    fn prop_map_composes(value in arbitrary_value()) {
        let stepwise = Optional::of(value)
            .map(|n| i64::from(n) + 1)
            .map(|n| n * 2);
        let fused = Optional::of(value).map(|n| (i64::from(n) + 1) * 2);
        prop_assert_eq!(stepwise, fused);
    }
}

// =============================================================================
// Set-Flag Law: or_else_set raises the flag exactly when absent
// =============================================================================

proptest! {
    #[test]
    fn prop_or_else_set_raises_flag_iff_it_assigns(
        present in any::<bool>(),
        original in arbitrary_value(),
        assigned in arbitrary_value()
    ) {
        let mut optional = if present {
            Optional::of(original)
        } else {
            Optional::empty()
        };
        optional.or_else_set(assigned);

        prop_assert_eq!(optional.was_set(), !present);
        let expected = if present { original } else { assigned };
        prop_assert_eq!(optional.or_else(-1), expected);
    }
}

// =============================================================================
// Round-Trip Law: presence and value survive serialization
// =============================================================================

#[cfg(feature = "json")]
proptest! {
    #[test]
    fn prop_json_round_trip(value in proptest::option::of(arbitrary_value())) {
        let original: Optional<i32> = value.map_or_else(Optional::empty, Optional::of);
        let encoded = serde_json::to_string(&original).unwrap();
        let decoded: Optional<i32> = serde_json::from_str(&encoded).unwrap();

        prop_assert_eq!(decoded.is_present(), original.is_present());
        prop_assert_eq!(decoded, original);
    }
}

// =============================================================================
// Bridge Law: Option round-trips through Optional unchanged
// =============================================================================

proptest! {
    #[test]
    fn prop_option_bridge_round_trip(value in proptest::option::of(arbitrary_value())) {
        let bridged: Option<i32> = Optional::from(value).into();
        prop_assert_eq!(bridged, value);
    }
}
