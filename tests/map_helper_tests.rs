//! Keyed-container helper tests.
//!
//! Tests cover:
//! - Optional lookups over HashMap and BTreeMap
//! - The compute/put/replace mutation helpers
//! - The "replacing with nothing removes the key" policy
//! - Dynamic extraction with converter fallbacks (json feature)

#![forbid(unsafe_code)]

use optionals::maps::{self, OptionalMap};
use std::collections::{BTreeMap, HashMap};

fn settings() -> HashMap<String, Option<u16>> {
    let mut map = HashMap::new();
    map.insert(String::from("port"), Some(8080));
    map.insert(String::from("proxy-port"), None);
    map
}

// =============================================================================
// Lookups
// =============================================================================

mod lookup_tests {
    use super::*;

    #[test]
    fn test_get_optional_over_plain_values() {
        let mut ages: BTreeMap<&str, u32> = BTreeMap::new();
        ages.insert("ada", 36);

        assert_eq!(ages.get_optional(&"ada").or_else(0), 36);
        assert!(!ages.get_optional(&"alan").is_present());
    }

    #[test]
    fn test_absent_equivalent_values_read_as_missing() {
        let map = settings();
        assert!(map.get_optional(&String::from("port")).is_present());
        assert!(!map.get_optional(&String::from("proxy-port")).is_present());
        assert!(!map.get_optional(&String::from("missing")).is_present());
    }

    #[test]
    fn test_free_function_form() {
        let map = settings();
        assert_eq!(
            maps::get(&map, &String::from("port")).or_else(None),
            Some(8080)
        );
    }

    #[test]
    fn test_lookup_chains_into_combinators() {
        let map = settings();
        let port = map
            .get_optional(&String::from("port"))
            .map(|stored| stored.unwrap_or(80))
            .filter(|port| *port > 1024)
            .or_else(443);
        assert_eq!(port, 8080);
    }
}

// =============================================================================
// Mutation helpers
// =============================================================================

mod mutation_tests {
    use super::*;

    #[test]
    fn test_compute_if_absent_only_computes_on_miss() {
        let mut map = settings();
        let mut computed = 0;

        let existing = map.compute_if_absent(String::from("port"), |_| {
            computed += 1;
            Some(1)
        });
        assert_eq!(existing, Some(8080));
        assert_eq!(computed, 0);

        let fresh = map.compute_if_absent(String::from("proxy-port"), |_| {
            computed += 1;
            Some(3128)
        });
        assert_eq!(fresh, Some(3128));
        assert_eq!(computed, 1);
        assert_eq!(map.get(&String::from("proxy-port")), Some(&Some(3128)));
    }

    #[test]
    fn test_compute_if_absent_does_not_store_absent_results() {
        let mut map = settings();
        let computed = map.compute_if_absent(String::from("backlog"), |_| None);
        assert_eq!(computed, None);
        assert!(!map.contains_key(&String::from("backlog")));
    }

    #[test]
    fn test_compute_if_present_recomputes_and_deletes() {
        let mut map = settings();

        let bumped = map.compute_if_present(&String::from("port"), |_, stored| {
            stored.map(|port| port + 1)
        });
        assert_eq!(bumped.or_else(None), Some(8081));

        let deleted = map.compute_if_present(&String::from("port"), |_, _| None);
        assert!(!deleted.is_present());
        assert!(!map.contains_key(&String::from("port")));
    }

    #[test]
    fn test_put_if_absent_reports_whether_it_stored() {
        let mut map = settings();
        assert!(!map.put_if_absent(String::from("port"), Some(1)));
        assert!(map.put_if_absent(String::from("proxy-port"), Some(3128)));
        assert!(map.put_if_absent(String::from("backlog"), Some(128)));
    }

    #[test]
    fn test_replace_if_present_replaces_only_present_entries() {
        let mut map = settings();
        assert!(map.replace_if_present(&String::from("port"), Some(9090)));
        assert_eq!(map.get(&String::from("port")), Some(&Some(9090)));

        assert!(!map.replace_if_present(&String::from("proxy-port"), Some(1)));
        assert!(!map.replace_if_present(&String::from("missing"), Some(1)));
    }

    #[test]
    fn test_replace_with_nothing_removes_the_key() {
        // Replacing with an absent equivalent deletes the entry and still
        // reports success.
        let mut map = settings();
        assert!(map.replace_if_present(&String::from("port"), None));
        assert!(!map.contains_key(&String::from("port")));
    }

    #[test]
    fn test_if_present_otherwise_observes_presence() {
        let map = settings();
        let mut observations = Vec::new();

        map.if_present_otherwise(
            &String::from("port"),
            |key, value| observations.push(format!("{key}={value:?}")),
            |key| observations.push(format!("{key} missing")),
        )
        .if_present_otherwise(
            &String::from("proxy-port"),
            |key, value| observations.push(format!("{key}={value:?}")),
            |key| observations.push(format!("{key} missing")),
        );

        assert_eq!(
            observations,
            vec!["port=Some(8080)", "proxy-port missing"]
        );
    }
}

// =============================================================================
// Dynamic extraction
// =============================================================================

#[cfg(feature = "json")]
mod extraction_tests {
    use optionals::convert::Converter;
    use optionals::maps::{extract, extract_json};
    use serde_json::{Map, Value, json};
    use std::collections::HashMap;

    fn payload() -> Map<String, Value> {
        let Value::Object(object) = json!({
            "host": "localhost",
            "port": 8080,
            "ratio": 0.5,
            "disabled": null,
            "port-text": "9090",
        }) else {
            unreachable!()
        };
        object
    }

    #[test]
    fn test_direct_assertions() {
        let object = payload();
        assert_eq!(
            extract_json::<String>(&object, "host", &[]).or_else_default(),
            "localhost"
        );
        assert_eq!(extract_json::<i64>(&object, "port", &[]).or_else(0), 8080);
        assert_eq!(
            extract_json::<f64>(&object, "ratio", &[]).or_else(0.0),
            0.5
        );
    }

    #[test]
    fn test_float_extraction_accepts_integer_numbers() {
        let object = payload();
        assert_eq!(
            extract_json::<f64>(&object, "port", &[]).or_else(0.0),
            8080.0
        );
    }

    #[test]
    fn test_null_and_missing_are_absent() {
        let object = payload();
        assert!(!extract_json::<Value>(&object, "disabled", &[]).is_present());
        assert!(!extract_json::<String>(&object, "missing", &[]).is_present());
    }

    #[test]
    fn test_converters_run_in_order_first_success_wins() {
        let object = payload();
        let from_text: Converter<i64> = |value| value.as_str()?.parse().ok();
        let sentinel: Converter<i64> = |_| Some(-1);

        assert_eq!(
            extract_json(&object, "port-text", &[from_text, sentinel]).or_else(0),
            9090
        );
        assert_eq!(
            extract_json(&object, "host", &[from_text, sentinel]).or_else(0),
            -1
        );
        assert!(!extract_json::<i64>(&object, "host", &[from_text]).is_present());
    }

    #[test]
    fn test_extract_over_generic_keyed_maps() {
        let mut map: HashMap<u32, Value> = HashMap::new();
        map.insert(7, json!("seven"));
        assert_eq!(
            extract::<_, String, _>(&map, &7, &[]).or_else_default(),
            "seven"
        );
    }
}
