//! URL utility functions for reading query parameters

use web_sys::window;

use crate::routing::RouteLocation;

/// Parse a query string (with or without the leading `?`) into ordered pairs.
///
/// Values are percent-decoded and `+` is read as a space. A key with no `=`
/// gets an empty value.
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|s| s.into_owned())
        .unwrap_or(spaced)
}

/// The browser's current location, if running in a browser.
pub fn current_location() -> Option<RouteLocation> {
    let href = window()?.location().href().ok()?;
    Some(RouteLocation::parse(&href))
}

/// Get a query parameter from the current URL
/// This is a fallback method that reads directly from window.location
/// Use this when the router's query map might not be initialized yet
pub fn get_query_param(key: &str) -> Option<String> {
    current_location()?.query_param(key).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query() {
        let pairs = parse_query("?token=abc%3D%3D&flag&name=Mary+Akinyi");
        assert_eq!(
            pairs,
            vec![
                ("token".to_string(), "abc==".to_string()),
                ("flag".to_string(), String::new()),
                ("name".to_string(), "Mary Akinyi".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_query_empty() {
        assert!(parse_query("").is_empty());
        assert!(parse_query("?").is_empty());
        assert!(parse_query("&&").is_empty());
    }

    #[test]
    fn test_invalid_escape_is_kept_verbatim() {
        assert_eq!(parse_query("q=%FF"), vec![("q".to_string(), "%FF".to_string())]);
    }
}
