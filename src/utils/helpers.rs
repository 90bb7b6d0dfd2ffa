//! Helper functions and utilities
//!
//! This module contains input parsing and formatting helpers used by the
//! dialogs and command handlers.

/// Parse a decimal number, accepting `,` as the decimal separator
pub fn parse_number(text: &str) -> Option<f64> {
    let normalized = text.trim().replace(',', ".");
    normalized
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Parse a strictly positive decimal number
pub fn parse_positive_number(text: &str) -> Option<f64> {
    parse_number(text).filter(|value| *value > 0.0)
}

/// Parse a strictly positive integer
pub fn parse_positive_int(text: &str) -> Option<u32> {
    text.trim().parse::<u32>().ok().filter(|value| *value > 0)
}

/// Parse a non-negative integer
pub fn parse_non_negative_int(text: &str) -> Option<u32> {
    text.trim().parse::<u32>().ok()
}

/// Format a quantity for display, rounded to a whole number
pub fn format_amount(value: f64) -> String {
    format!("{:.0}", value)
}

/// Normalize whitespace in text
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
