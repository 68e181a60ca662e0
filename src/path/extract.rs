//! The trace-keeping walk over a nested JSON structure.

use serde_json::{Map, Value};

use super::Trace;
use super::parse::{Segment, parse_segment};
use crate::convert::{Converter, FromJson, coerce};
use crate::optional::{Optional, Presence};

/// The result of a path extraction: the extracted optional plus the
/// resolution trace.
#[derive(Debug, Clone, PartialEq)]
pub struct PathExtraction<T> {
    value: Optional<T>,
    trace: Option<Trace>,
}

impl<T> PathExtraction<T> {
    /// Returns the extracted optional.
    #[must_use]
    pub const fn value(&self) -> &Optional<T> {
        &self.value
    }

    /// Returns the resolution trace, or `None` for the single-segment
    /// fast path, which records no trace.
    #[must_use]
    pub fn trace(&self) -> Option<&[bool]> {
        self.trace.as_deref()
    }

    /// Returns `true` when every recorded resolution step succeeded.
    ///
    /// Together with an absent [`value`](PathExtraction::value) this
    /// distinguishes "the path resolved but the final value had the wrong
    /// type" (fully resolved) from "the path broke partway" (not fully
    /// resolved). The traceless fast path reports fully resolved.
    #[must_use]
    pub fn is_fully_resolved(&self) -> bool {
        self.trace
            .as_ref()
            .is_none_or(|trace| trace.iter().all(|step| *step))
    }

    /// Consumes the extraction, returning the optional alone.
    #[must_use]
    pub fn into_value(self) -> Optional<T> {
        self.value
    }

    /// Consumes the extraction, returning the optional and the trace.
    #[must_use]
    pub fn into_parts(self) -> (Optional<T>, Option<Trace>) {
        (self.value, self.trace)
    }
}

/// Walks `root` along `path`, extracting an optional of the requested
/// type and a per-step resolution trace.
///
/// Each intermediate segment must resolve to an object to descend into;
/// an indexed segment additionally resolves its (possibly negative) index
/// within the named sequence. The final segment goes through the direct
/// type assertion and then the converters, in order; a type-match failure
/// at the very end leaves the result absent without appending a trace
/// entry, so the trace still reads fully resolved.
///
/// A bare single segment without a bracket suffix takes a direct-lookup
/// fast path and records no trace.
///
/// # Examples
///
/// ```rust
/// use optionals::path::extract_path;
/// use serde_json::json;
///
/// let Some(root) = json!({"servers": [{"port": 80}]}).as_object().cloned()
/// else { unreachable!() };
///
/// let port = extract_path::<i64>(&root, "servers[0].port", &[]);
/// assert_eq!(port.value().as_option(), Some(&80));
/// assert!(port.is_fully_resolved());
/// ```
#[must_use]
pub fn extract_path<T>(
    root: &Map<String, Value>,
    path: &str,
    converters: &[Converter<T>],
) -> PathExtraction<T>
where
    T: FromJson + Presence,
{
    let segments: Vec<Segment> = path.split('.').map(parse_segment).collect();

    // Bare single segment: direct one-level lookup, no trace.
    if let [Segment::Property(name)] = segments.as_slice() {
        let value = root
            .get(name)
            .and_then(|found| coerce(found, converters))
            .map_or_else(Optional::empty, Optional::of);
        return PathExtraction { value, trace: None };
    }

    let mut trace = Trace::new();
    let mut current = root;
    let last = segments.len() - 1;

    for (position, segment) in segments.iter().enumerate() {
        let is_last = position == last;
        match segment {
            Segment::Property(name) => {
                let Some(found) = current.get(name) else {
                    return broken(trace);
                };
                if is_last {
                    trace.push(true);
                    return resolved(found, converters, trace);
                }
                let Some(next) = found.as_object() else {
                    return broken(trace);
                };
                trace.push(true);
                current = next;
            }
            Segment::Indexed(name, index) => {
                let Some(found) = current.get(name) else {
                    return broken(trace);
                };
                trace.push(true);
                let Some(items) = found.as_array() else {
                    return broken(trace);
                };
                let Some(element) = locate(items, *index) else {
                    return broken(trace);
                };
                trace.push(true);
                if is_last {
                    return resolved(element, converters, trace);
                }
                let Some(next) = element.as_object() else {
                    return broken(trace);
                };
                // Descending out of an indexed element is not a separate
                // resolution step.
                current = next;
            }
        }
    }

    PathExtraction {
        value: Optional::empty(),
        trace: Some(trace),
    }
}

/// Aborts the walk: records the failed step and freezes the trace.
fn broken<T>(mut trace: Trace) -> PathExtraction<T> {
    trace.push(false);
    PathExtraction {
        value: Optional::empty(),
        trace: Some(trace),
    }
}

/// Finishes the walk on the final value: type assertion, then converters.
fn resolved<T>(value: &Value, converters: &[Converter<T>], trace: Trace) -> PathExtraction<T>
where
    T: FromJson + Presence,
{
    PathExtraction {
        value: coerce(value, converters).map_or_else(Optional::empty, Optional::of),
        trace: Some(trace),
    }
}

/// Resolves a possibly negative index within a sequence.
///
/// Negative indices count from the end; out-of-range indices in either
/// direction are rejected, never clamped.
fn locate(items: &[Value], index: i64) -> Option<&Value> {
    let length = i64::try_from(items.len()).ok()?;
    let effective = if index < 0 { length + index } else { index };
    usize::try_from(effective)
        .ok()
        .and_then(|position| items.get(position))
}
