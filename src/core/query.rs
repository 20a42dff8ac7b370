//! Tag encoding, query-string assembly and cursor-pagination validation.
//!
//! Every endpoint wrapper funnels through these three pieces before a request
//! ever reaches the network.

use crate::core::error::GatewayError;

/// Make a player/clan/tournament tag safe for use as a URL path segment.
///
/// Tags are conventionally written with a leading `#` (e.g. `#ABCDEF`), which
/// is illegal in a URL path. Only `#` needs escaping in this domain; the
/// remaining tag alphabet is plain alphanumerics, so this is intentionally a
/// minimal encoder rather than a general percent-encoder.
pub fn encode_tag(tag: &str) -> String {
    tag.replace('#', "%23")
}

/// Insertion-ordered set of query parameters.
///
/// Absent values are filtered here, once, instead of at every call site:
/// `push_opt` with `None` is a no-op, so callers can thread their optional
/// inputs straight through. Values are rendered with their natural textual
/// representation and are not percent-encoded (cursor markers and numeric
/// filters never contain reserved characters).
#[derive(Debug, Default, Clone)]
pub struct QueryParams(Vec<(&'static str, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: &'static str, value: impl ToString) {
        self.0.push((name, value.to_string()));
    }

    pub fn push_opt(&mut self, name: &'static str, value: Option<impl ToString>) {
        if let Some(v) = value {
            self.push(name, v);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Encode as `k1=v1&k2=v2&...` with no leading `?`.
    pub fn encode(&self) -> String {
        self.0
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Append the encoded parameters to `path`, emitting the `?` separator
    /// only when there is something to separate.
    pub fn append_to(&self, path: String) -> String {
        if self.is_empty() {
            path
        } else {
            format!("{}?{}", path, self.encode())
        }
    }
}

/// Reject requests that carry both cursor markers.
///
/// The upstream's cursor pagination accepts only one direction marker per
/// request; sending both would make the request ambiguous, so the pair is
/// rejected here, before any network call is issued.
pub fn ensure_single_cursor(
    after: Option<&str>,
    before: Option<&str>,
) -> Result<(), GatewayError> {
    if after.is_some() && before.is_some() {
        return Err(GatewayError::validation(
            "'after' and 'before' are mutually exclusive; supply at most one",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_encodes_every_hash_and_nothing_else() {
        assert_eq!(encode_tag("#ABC123"), "%23ABC123");
        assert_eq!(encode_tag("##"), "%23%23");
        assert_eq!(encode_tag("ABC123"), "ABC123");
        assert_eq!(encode_tag(""), "");
    }

    #[test]
    fn re_encoding_an_encoded_tag_is_a_no_op() {
        let once = encode_tag("#ABC");
        assert_eq!(encode_tag(&once), once);
    }

    #[test]
    fn it_builds_terms_in_insertion_order() {
        let mut q = QueryParams::new();
        q.push("limit", 10);
        q.push("after", "abc123");
        q.push("name", "Royal");
        assert_eq!(q.len(), 3);
        assert_eq!(q.encode(), "limit=10&after=abc123&name=Royal");
    }

    #[test]
    fn empty_set_encodes_to_empty_string_and_omits_separator() {
        let q = QueryParams::new();
        assert_eq!(q.encode(), "");
        assert_eq!(q.append_to("cards".into()), "cards");
    }

    #[test]
    fn push_opt_filters_absent_values() {
        let mut q = QueryParams::new();
        q.push_opt("limit", Some(5));
        q.push_opt("after", None::<&str>);
        q.push_opt("before", None::<&str>);
        assert_eq!(q.encode(), "limit=5");
    }

    #[test]
    fn append_to_adds_separator_when_non_empty() {
        let mut q = QueryParams::new();
        q.push("min_members", 40);
        assert_eq!(q.append_to("clans".into()), "clans?min_members=40");
    }

    #[test]
    fn both_cursors_are_rejected() {
        let err = ensure_single_cursor(Some("a"), Some("b")).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("mutually exclusive"));
    }

    #[test]
    fn at_most_one_cursor_passes() {
        assert!(ensure_single_cursor(None, None).is_ok());
        assert!(ensure_single_cursor(Some("a"), None).is_ok());
        assert!(ensure_single_cursor(None, Some("b")).is_ok());
    }
}
