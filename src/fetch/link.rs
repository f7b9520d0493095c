//! `Link` response-header parsing (RFC 5988 web linking).
//!
//! The variables endpoint communicates pagination through a `Link` header
//! of comma-separated entries like:
//!
//! ```text
//! <https://host/api/v4/projects/1/variables?page=2>; rel="next",
//! <https://host/api/v4/projects/1/variables?page=1>; rel="first"
//! ```
//!
//! Only the `rel` parameter is interpreted. Parsing is tolerant: a
//! malformed header yields no links, which the pagination loop treats as
//! "last page" rather than a fatal error.

use std::sync::LazyLock;

use regex::Regex;
use reqwest::header::{HeaderMap, LINK};

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<([^>]*)>(.*)"#).expect("link regex is valid"));
static PARAM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#";\s*([A-Za-z]+)\s*=\s*"([^"]*)""#).expect("param regex is valid"));

/// One entry of a `Link` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// The link target.
    pub uri: String,
    /// Value of the `rel` parameter, if the entry carried one.
    pub rel: Option<String>,
}

/// Parses a raw `Link` header value into its entries.
///
/// Entries that don't match the `<uri>; param="value"` shape are skipped.
pub fn parse_link_header(header: &str) -> Vec<Link> {
    header
        .split(',')
        .filter_map(|entry| {
            let caps = LINK_RE.captures(entry.trim())?;
            let uri = caps[1].to_string();
            let rel = PARAM_RE
                .captures_iter(&caps[2])
                .find(|p| &p[1] == "rel")
                .map(|p| p[2].to_string());
            Some(Link { uri, rel })
        })
        .collect()
}

/// Extracts the `rel="next"` target from a response's headers.
///
/// Returns `None` when the `Link` header is absent, not valid UTF-8, or
/// carries no `next` relation — all of which terminate pagination.
pub fn next_link(headers: &HeaderMap) -> Option<String> {
    let header = headers.get(LINK)?.to_str().ok()?;
    parse_link_header(header)
        .into_iter()
        .find(|link| link.rel.as_deref() == Some("next"))
        .map(|link| link.uri)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_parse_single_link_with_extra_params() {
        let links =
            parse_link_header(r#"<https://host.example.com/items?page=2>; rel="next"; title="t""#);
        assert_eq!(
            links,
            vec![Link {
                uri: "https://host.example.com/items?page=2".to_string(),
                rel: Some("next".to_string()),
            }]
        );
    }

    #[test]
    fn test_parse_multiple_links() {
        let links = parse_link_header(
            r#"<https://host.example.com/items?page=2>; rel="next",<https://host.example.com/items?page=1>; rel="self""#,
        );
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].rel.as_deref(), Some("next"));
        assert_eq!(links[1].rel.as_deref(), Some("self"));
        assert_eq!(links[1].uri, "https://host.example.com/items?page=1");
    }

    #[test]
    fn test_parse_link_without_rel() {
        let links = parse_link_header("<https://host.example.com/items>");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].rel, None);
    }

    #[test]
    fn test_parse_empty_header() {
        assert!(parse_link_header("").is_empty());
    }

    #[test]
    fn test_parse_garbage_header() {
        assert!(parse_link_header("not a link header at all").is_empty());
    }

    #[test]
    fn test_next_link_found() {
        let mut headers = HeaderMap::new();
        headers.insert(
            LINK,
            HeaderValue::from_static(
                r#"<https://host.example.com/vars?page=3&per_page=20>; rel="next", <https://host.example.com/vars?page=1>; rel="first""#,
            ),
        );
        assert_eq!(
            next_link(&headers).as_deref(),
            Some("https://host.example.com/vars?page=3&per_page=20")
        );
    }

    #[test]
    fn test_next_link_absent_relation() {
        let mut headers = HeaderMap::new();
        headers.insert(
            LINK,
            HeaderValue::from_static(r#"<https://host.example.com/vars?page=1>; rel="prev""#),
        );
        assert_eq!(next_link(&headers), None);
    }

    #[test]
    fn test_next_link_no_header() {
        assert_eq!(next_link(&HeaderMap::new()), None);
    }
}
