//! # Formatting Utilities
//!
//! Number, money, quantity and date formatting for the marketplace views.
//! For identifiers and initials, use [`shared::utils`].
//!
//! ## Functions
//!
//! - [`format_number`] - Format numbers with comma separators
//! - [`format_money`] - Currency code plus two decimals
//! - [`format_quantity`] - Quantity with its unit, trailing zeros dropped
//! - [`format_date`] - Human date from an RFC 3339 / ISO date string

use chrono::{DateTime, NaiveDate};

/// Format a number with commas (e.g., 1234567.89 -> "1,234,567.89")
///
/// # Arguments
///
/// * `value` - The number to format
/// * `decimals` - Number of decimal places to show
///
/// # Examples
///
/// ```rust
/// use market_web::utils::format::format_number;
///
/// assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
/// assert_eq!(format_number(-4500.0, 0), "-4,500");
/// ```
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value.abs(), prec = decimals);
    let (integer_part, decimal_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), ""));

    let mut grouped = String::new();
    for (i, ch) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let integer_with_commas: String = grouped.chars().rev().collect();

    let is_zero = formatted.chars().all(|c| c == '0' || c == '.');
    let sign = if value.is_sign_negative() && !is_zero { "-" } else { "" };

    if decimal_part.is_empty() {
        format!("{}{}", sign, integer_with_commas)
    } else {
        format!("{}{}.{}", sign, integer_with_commas, decimal_part)
    }
}

/// Format an amount of money, e.g. `KES 12,500.00`.
pub fn format_money(amount: f64, currency: &str) -> String {
    format!("{} {}", currency, format_number(amount, 2))
}

/// Format a quantity with its unit, dropping a `.0`/`.00` tail.
pub fn format_quantity(quantity: f64, unit: &str) -> String {
    let rounded = format_number(quantity, 2);
    let trimmed = if rounded.contains('.') {
        rounded.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        rounded
    };
    format!("{} {}", trimmed, unit)
}

/// Format a backend timestamp or date as `12 Mar 2026`.
///
/// Strings that are neither RFC 3339 nor `YYYY-MM-DD` are returned unchanged.
pub fn format_date(raw: &str) -> String {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return datetime.format("%-d %b %Y").to_string();
    }
    let date_part = raw.get(..10).unwrap_or(raw);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%-d %b %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}
