//! Query-string encoding for product identifiers.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters escaped inside a single query value.
///
/// Everything except ASCII alphanumerics and `- _ . ! ~ * ' ( )` is escaped,
/// which is the set browsers leave alone in `encodeURIComponent`. A space
/// becomes `%20` (never `+`), and `&`, `=`, `#`, `?` can't split the query.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode one query value (UTF-8 bytes, uppercase hex).
pub fn encode_query_component(value: &str) -> String {
    utf8_percent_encode(value, QUERY_COMPONENT).to_string()
}
