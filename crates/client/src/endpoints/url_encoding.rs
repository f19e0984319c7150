//! URL encoding utilities for constructing safe API paths.
//!
//! Dashboard uids are user-controlled strings; without percent-encoding a
//! uid such as `a/b` or `a?b` would change the route being called.
//!
//! # Example
//!
//! ```
//! use grafana_client::endpoints::url_encoding::encode_path_segment;
//!
//! let encoded = encode_path_segment("team/dash");
//! assert_eq!(encoded, "team%2Fdash");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters that must be percent-encoded in URL path segments.
///
/// RFC 3986 section 3.3 reserved and unsafe characters, plus `%` so that
/// already-encoded input is not decoded twice and `/` so a segment can
/// never become two.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'+')
    .add(b',')
    .add(b';')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for safe use as a URL path segment.
///
/// # Examples
///
/// ```
/// use grafana_client::endpoints::url_encoding::encode_path_segment;
///
/// assert_eq!(encode_path_segment("abc123"), "abc123");
/// assert_eq!(encode_path_segment("my dash"), "my%20dash");
/// assert_eq!(encode_path_segment("50%"), "50%25");
/// ```
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}
