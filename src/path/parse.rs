//! The segment grammar: `propertyName` with an optional `[integer]` suffix.

/// One parsed path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Segment {
    /// A plain property lookup.
    Property(String),
    /// A property lookup followed by an index into the resulting sequence.
    /// Negative indices count from the end.
    Indexed(String, i64),
}

/// Parses one raw segment.
///
/// Parsing is purely syntactic and total: a malformed bracket suffix (an
/// unparsable integer, an unbalanced or trailing bracket) degrades the
/// whole segment to a literal property name, so the walk reports the miss
/// through the ordinary trace instead of a separate error channel.
pub(crate) fn parse_segment(raw: &str) -> Segment {
    if let Some(opening) = raw.find('[') {
        if let Some(stripped) = raw.strip_suffix(']') {
            let name = &stripped[..opening];
            if let Ok(index) = stripped[opening + 1..].parse::<i64>() {
                return Segment::Indexed(name.to_string(), index);
            }
        }
    }
    Segment::Property(raw.to_string())
}
