//! Path-based extraction from nested JSON structures.
//!
//! A path expression is a string of dot-separated segments; a segment may
//! carry an integer index in bracket notation, where negative indices
//! count from the end of the sequence:
//!
//! ```text
//! servers[0].listen.port
//! history[-1].status
//! ```
//!
//! [`extract_path`] walks the structure segment by segment, producing an
//! [`Optional`](crate::optional::Optional) of the requested type together
//! with a parallel [`Trace`] of which resolution steps succeeded. The
//! trace lets a caller distinguish "the path resolved but the final value
//! had the wrong type" from "an intermediate segment did not exist";
//! configuration validators need to report *where* a lookup failed, not
//! just *that* it failed.
//!
//! # Examples
//!
//! ```rust
//! use optionals::path::extract_path;
//! use serde_json::json;
//!
//! let Some(root) = json!({"arr": ["first", 2, {"foo": "bar"}]}).as_object().cloned()
//! else { unreachable!() };
//!
//! let hit = extract_path::<String>(&root, "arr[-1].foo", &[]);
//! assert_eq!(hit.value().as_option().map(String::as_str), Some("bar"));
//! assert_eq!(hit.trace(), Some([true, true, true].as_slice()));
//!
//! let miss = extract_path::<String>(&root, "arr[-1].foo.xxx", &[]);
//! assert!(!miss.value().is_present());
//! assert_eq!(miss.trace(), Some([true, true, false].as_slice()));
//! ```

mod extract;
mod parse;

use smallvec::SmallVec;

pub use extract::{PathExtraction, extract_path};

/// An ordered record of per-step success while walking a path.
///
/// One entry is appended per resolution step, not necessarily one per
/// segment: an indexed segment contributes an entry for resolving the
/// named property and another for resolving the index within it. Traces
/// are short; the inline buffer covers ordinary path depths.
pub type Trace = SmallVec<[bool; 8]>;
