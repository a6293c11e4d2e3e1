//! Phone number normalization
//!
//! Visitors type numbers in whatever shape they like (`+91 98765-43210`,
//! `(022) 1234 5678`). Formatting characters are stripped and what remains
//! must be an optional `+` followed by 8 to 15 ASCII digits. Nothing else is
//! rewritten: no country code is guessed.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

/// `\d` would accept any Unicode digit, the webhook only understands ASCII.
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{8,15}$").expect("Invalid phone regex"));

/// Whitespace as browsers see it, which also covers the BOM that
/// `char::is_whitespace` leaves out.
fn is_formatting(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{FEFF}' | '-' | '(' | ')')
}

/// Strip whitespace, hyphens and parentheses and validate the result.
///
/// Returns the normalized number, or [`Error::InvalidPhone`] carrying the
/// original input.
pub fn normalize_phone(raw: &str) -> Result<String> {
    let stripped: String = raw.chars().filter(|c| !is_formatting(*c)).collect();

    if PHONE_PATTERN.is_match(&stripped) {
        Ok(stripped)
    } else {
        Err(Error::invalid_phone(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_spaces() {
        assert_eq!(normalize_phone("+91 98765 43210").unwrap(), "+919876543210");
    }

    #[test]
    fn test_normalize_strips_hyphens_and_parens() {
        assert_eq!(normalize_phone("(022) 1234-5678").unwrap(), "02212345678");
        assert_eq!(normalize_phone("+1 (415) 555-0100").unwrap(), "+14155550100");
    }

    #[test]
    fn test_normalize_strips_tabs_and_newlines() {
        assert_eq!(normalize_phone("\t9876543210\n").unwrap(), "9876543210");
    }

    #[test]
    fn test_normalize_strips_byte_order_mark() {
        assert_eq!(normalize_phone("1234567\u{FEFF}8").unwrap(), "12345678");
        assert_eq!(normalize_phone("\u{FEFF}+91 98765 43210").unwrap(), "+919876543210");
    }

    #[test]
    fn test_digit_count_bounds() {
        assert!(normalize_phone("12345678").is_ok());
        assert!(normalize_phone("123456789012345").is_ok());
        assert!(normalize_phone("+123456789012345").is_ok());

        assert!(normalize_phone("1234567").is_err());
        assert!(normalize_phone("1234567890123456").is_err());
        assert!(normalize_phone("12345").is_err());
    }

    #[test]
    fn test_rejects_letters_and_symbols() {
        assert!(normalize_phone("98765abc43210").is_err());
        assert!(normalize_phone("+91.98765.43210").is_err());
        assert!(normalize_phone("ext 9876543210").is_err());
    }

    #[test]
    fn test_plus_only_leading() {
        assert!(normalize_phone("91+9876543210").is_err());
        assert!(normalize_phone("++919876543210").is_err());
    }

    #[test]
    fn test_rejects_non_ascii_digits() {
        // Devanagari digits
        assert!(normalize_phone("\u{0966}\u{0967}\u{0968}\u{0969}\u{096A}\u{096B}\u{096C}\u{096D}").is_err());
    }

    #[test]
    fn test_empty_input() {
        assert!(normalize_phone("").is_err());
        assert!(normalize_phone("   ").is_err());
    }

    #[test]
    fn test_error_keeps_raw_input() {
        match normalize_phone("12 34") {
            Err(Error::InvalidPhone { input }) => assert_eq!(input, "12 34"),
            other => panic!("expected InvalidPhone, got {other:?}"),
        }
    }
}
