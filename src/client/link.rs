//! `Link` header handling for cursor-based pagination
//!
//! GitHub advertises further pages through a web-linking header such as:
//!
//! ```text
//! <https://api.github.com/...&page=2>; rel="next", <https://api.github.com/...&page=5>; rel="last"
//! ```
//!
//! Only the `next` relation matters to the walker; everything else is ignored.

use std::sync::LazyLock;

use regex::Regex;

static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<([^>]+)>;\s*rel="([^"]+)""#).expect("link header pattern is valid")
});

/// Opaque handle on the next page of a collection.
///
/// The walker threads this through its loop without looking inside; only the
/// fetcher turns it back into a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Continuation(String);

impl Continuation {
    /// URL of the page this continuation points at
    pub fn url(&self) -> &str {
        &self.0
    }
}

/// Find the `rel="next"` target in a `Link` header value.
///
/// Scans for `<URL>; rel="REL"` entries anywhere in the string, so malformed
/// or unrelated headers simply produce `None`.
pub fn find_next_page(link: &str) -> Option<Continuation> {
    LINK_RE
        .captures_iter(link)
        .find(|caps| &caps[2] == "next")
        .map(|caps| Continuation(caps[1].to_string()))
}
