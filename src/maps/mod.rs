//! Optional-aware accessors and mutation helpers over keyed containers.
//!
//! This module provides:
//!
//! - [`OptionalMap`]: an extension trait over [`HashMap`](std::collections::HashMap)
//!   and [`BTreeMap`](std::collections::BTreeMap) with presence-aware
//!   accessors and compute/put/replace helpers
//! - [`get`]: a free-function form of the optional lookup
//! - [`extract`] / [`extract_json`]: typed extraction out of maps holding
//!   dynamically typed JSON values, with converter fallbacks (requires the
//!   `json` feature)
//!
//! Every helper routes through the presence rule: a key mapped to an
//! absent-equivalent value behaves exactly like a missing key on the read
//! side.
//!
//! # Examples
//!
//! ```rust
//! use optionals::maps::OptionalMap;
//! use std::collections::HashMap;
//!
//! let mut settings: HashMap<String, Option<u16>> = HashMap::new();
//! settings.insert(String::from("port"), Some(8080));
//! settings.insert(String::from("proxy-port"), None);
//!
//! assert!(settings.get_optional(&String::from("port")).is_present());
//! assert!(!settings.get_optional(&String::from("proxy-port")).is_present());
//! ```

mod ext;

#[cfg(feature = "json")]
mod extract;

pub use ext::{OptionalMap, get};

#[cfg(feature = "json")]
pub use extract::{extract, extract_json};
