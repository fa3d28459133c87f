//! Per-resource wrappers over `Transport`.
//!
//! Each client borrows the transport, fills a URI template and forwards the
//! decoded JSON untouched. Identifiers substituted into templates are
//! percent-encoded as single path segments.

use std::borrow::Cow;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

mod auth;
mod blocks;
mod channels;
mod chat;
mod follows;
mod games;
mod search;
mod streams;
mod subscriptions;
mod teams;
mod users;
mod videos;

pub use auth::Auth;
pub use blocks::Blocks;
pub use channels::Channels;
pub use chat::Chat;
pub use follows::Follows;
pub use games::Games;
pub use search::Search;
pub use streams::Streams;
pub use subscriptions::Subscriptions;
pub use teams::Teams;
pub use users::Users;
pub use videos::Videos;

/// Unreserved characters (RFC 3986) stay as they are; everything else is encoded.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Encode `value` for use as one path segment.
///
/// An all-dot value (`.`, `..`) is a dot-segment that URL normalization
/// removes, so its dots are encoded too.
pub(crate) fn segment(value: &str) -> Cow<'_, str> {
    if !value.is_empty() && value.bytes().all(|b| b == b'.') {
        return Cow::Owned("%2E".repeat(value.len()));
    }
    utf8_percent_encode(value, PATH_SEGMENT).into()
}

/// Append an already-built query string (with its leading `?`) to `path`.
pub(crate) fn with_query(path: impl Into<String>, query: Option<&str>) -> String {
    let mut path = path.into();
    if let Some(query) = query {
        path.push_str(query);
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_identifiers_are_untouched() {
        assert_eq!(segment("some_user-01"), "some_user-01");
    }

    #[test]
    fn reserved_characters_are_escaped() {
        assert_eq!(segment("a/b?c#d e"), "a%2Fb%3Fc%23d%20e");
    }

    #[test]
    fn dot_segments_are_escaped() {
        assert_eq!(segment("."), "%2E");
        assert_eq!(segment(".."), "%2E%2E");
        assert_eq!(segment("..name"), "..name");
        assert_eq!(segment("v1.2"), "v1.2");
    }

    #[test]
    fn query_is_appended_verbatim() {
        assert_eq!(with_query("streams", Some("?limit=5")), "streams?limit=5");
        assert_eq!(with_query("streams", None), "streams");
    }
}
