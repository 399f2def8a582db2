//! E-mail address syntax check.

use once_cell::sync::Lazy;
use regex::Regex;

/// Local part, `@`, then dot-separated labels of at most 63 characters that
/// neither start nor end with a hyphen.
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";

#[allow(clippy::expect_used)]
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"));

/// Check if `s` looks like an e-mail address.
pub fn is_valid_email(s: &str) -> bool {
    EMAIL_REGEX.is_match(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last+tag@sub.example.co"));
        assert!(is_valid_email("o'brien@example.ie"));
        assert!(is_valid_email("x@localhost"));
        assert!(is_valid_email("a{b}|c~d@a-b.example"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@-example.com"));
        assert!(!is_valid_email("user@example-.com"));
        assert!(!is_valid_email("user@example..com"));
        assert!(!is_valid_email("user name@example.com"));
        assert!(!is_valid_email("user@exa_mple.com"));
    }

    #[test]
    fn test_label_length_limit() {
        let ok = format!("user@{}.com", "a".repeat(63));
        assert!(is_valid_email(&ok));

        let too_long = format!("user@{}.com", "a".repeat(64));
        assert!(!is_valid_email(&too_long));
    }
}
