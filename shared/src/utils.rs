//! # Shared Utility Functions
//!
//! Display helpers used by the web client.
//!
//! - [`short_reference`] - Shorten long identifiers (order numbers, transaction refs)
//! - [`initials`] - Avatar initials from a display name
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{initials, short_reference};
//!
//! assert_eq!(short_reference("ord_7f3a9c2e81d04b6f", 6, 4), "ord_7f...4b6f");
//! assert_eq!(initials("Wanjiru Kamau"), "WK");
//! ```

/// Shorten an identifier to its first `prefix_len` and last `suffix_len` characters.
///
/// Identifiers that would not get shorter are returned as-is. Works on
/// characters, not bytes, so non-ASCII references never split mid-character.
///
/// ```rust
/// use shared::utils::short_reference;
///
/// assert_eq!(short_reference("TXN-2026-000451", 4, 3), "TXN-...451");
/// assert_eq!(short_reference("42", 4, 4), "42");
/// ```
pub fn short_reference(id: &str, prefix_len: usize, suffix_len: usize) -> String {
    let chars: Vec<char> = id.chars().collect();
    // "..." is three characters, so anything this short would not shrink
    if chars.len() <= prefix_len + suffix_len + 3 {
        return id.to_string();
    }

    let prefix: String = chars[..prefix_len].iter().collect();
    let suffix: String = chars[chars.len() - suffix_len..].iter().collect();
    format!("{}...{}", prefix, suffix)
}

/// Up to two uppercase initials: first letter of the first and last word.
///
/// Returns `"?"` for names with no letters.
pub fn initials(name: &str) -> String {
    let words: Vec<&str> = name
        .split_whitespace()
        .filter(|w| w.chars().next().is_some_and(char::is_alphabetic))
        .collect();

    let first = words.first().and_then(|w| w.chars().next());
    let last = if words.len() > 1 {
        words.last().and_then(|w| w.chars().next())
    } else {
        None
    };

    let result: String = first
        .into_iter()
        .chain(last)
        .flat_map(char::to_uppercase)
        .collect();

    if result.is_empty() {
        "?".to_string()
    } else {
        result
    }
}
