//! Field-level validation utilities shared by the steps and the contact form

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Check an address against the email pattern used by every contact form
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value.trim())
}

/// Keep only the characters a phone number may contain.
///
/// Digits, a leading `+`, spaces, dashes and parentheses survive; letters and
/// other punctuation are dropped as the user types.
pub fn sanitize_phone(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '0'..='9' | ' ' | '-' | '(' | ')' => out.push(ch),
            '+' if out.trim().is_empty() => out.push(ch),
            _ => {}
        }
    }
    out
}

/// Number of digits in a phone number
pub fn phone_digits(value: &str) -> usize {
    value.chars().filter(|c| c.is_ascii_digit()).count()
}

/// Parse a free-text amount by stripping everything but digits and `.`
///
/// `"AED 12,500"` parses as `12500.0`. Blank input, input with no digits and
/// input with more than one decimal point yield `None`.
pub fn parse_amount(value: &str) -> Option<f64> {
    let cleaned: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if !cleaned.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    cleaned.parse::<f64>().ok()
}

/// Format a whole-dirham amount with thousands separators, e.g. `AED 12,500`
pub fn format_aed(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        format!("AED -{}", grouped)
    } else {
        format!("AED {}", grouped)
    }
}
