//! Route location: an href split into pathname, query and fragment.

use crate::utils::url::parse_query;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouteLocation {
    pub pathname: String,
    pub query: Vec<(String, String)>,
    pub fragment: Option<String>,
}

impl RouteLocation {
    /// Parse a path-and-query string such as `/ResetPassword?token=abc#top`.
    ///
    /// Absolute URLs are accepted too; scheme and authority are dropped.
    /// An empty pathname becomes `/`.
    pub fn parse(href: &str) -> Self {
        let without_origin = match href.find("://").filter(|_| !href.starts_with('/')) {
            Some(scheme_end) => {
                let after = &href[scheme_end + 3..];
                after.find('/').map(|i| &after[i..]).unwrap_or("/")
            }
            None => href,
        };

        let (rest, fragment) = match without_origin.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment.to_string())),
            None => (without_origin, None),
        };
        let (pathname, query) = match rest.split_once('?') {
            Some((path, query)) => (path, parse_query(query)),
            None => (rest, Vec::new()),
        };

        Self {
            pathname: if pathname.is_empty() { "/".to_string() } else { pathname.to_string() },
            query,
            fragment,
        }
    }

    /// First value for `key`.
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}
