//! Email validation for the newsletter form
//!
//! Validation is a pure function of the input text. A rejected address is an
//! ordinary outcome carrying the user-facing reason, never a fault.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Whitespace as browsers see it in form input: tab, line breaks, vertical
/// tab, form feed, the Unicode space separators and the byte order mark.
/// U+0085 (next line) is not whitespace here.
const WHITESPACE_CLASS: &str =
    r"\t\n\x0B\x0C\r \xA0\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

/// Local part, `@`, then a domain with at least one dot-separated extension.
/// None of the parts may contain whitespace or another `@`.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let part = format!("[^{WHITESPACE_CLASS}@]+");
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("email pattern is a valid regex")
});

fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Reason an email address was rejected
///
/// The `Display` text is exactly what the form shows to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Nothing but whitespace was entered
    #[error("Email is required")]
    EmptyEmail,
    /// The text does not look like `local@domain.ext`
    #[error("Please enter a valid email address")]
    InvalidFormat,
}

/// Result of checking an email string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid(ValidationError),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }
}

/// Check an email address.
///
/// Surrounding whitespace only matters for the emptiness check; the format
/// check runs against the text as typed, so `" a@b.com"` is rejected.
pub fn validate(email: &str) -> ValidationOutcome {
    if email.trim_matches(is_whitespace).is_empty() {
        return ValidationOutcome::Invalid(ValidationError::EmptyEmail);
    }

    if !EMAIL_PATTERN.is_match(email) {
        return ValidationOutcome::Invalid(ValidationError::InvalidFormat);
    }

    ValidationOutcome::Valid
}

#[cfg(test)]
mod tests {
    use super::*;

    mod empty {
        use super::*;

        #[test]
        fn test_empty_string_is_required() {
            assert_eq!(
                validate(""),
                ValidationOutcome::Invalid(ValidationError::EmptyEmail)
            );
        }

        #[test]
        fn test_byte_order_mark_counts_as_whitespace() {
            assert_eq!(
                validate("\u{FEFF}"),
                ValidationOutcome::Invalid(ValidationError::EmptyEmail)
            );
            assert_eq!(
                validate("\u{A0}\u{3000}"),
                ValidationOutcome::Invalid(ValidationError::EmptyEmail)
            );
        }

        #[test]
        fn test_whitespace_only_is_required() {
            assert_eq!(
                validate("   "),
                ValidationOutcome::Invalid(ValidationError::EmptyEmail)
            );
            assert_eq!(
                validate("\t\n "),
                ValidationOutcome::Invalid(ValidationError::EmptyEmail)
            );
        }
    }

    mod format {
        use super::*;

        fn assert_invalid_format(email: &str) {
            assert_eq!(
                validate(email),
                ValidationOutcome::Invalid(ValidationError::InvalidFormat),
                "expected {email:?} to be rejected"
            );
        }

        #[test]
        fn test_plain_word_is_invalid() {
            assert_invalid_format("invalid-email");
        }

        #[test]
        fn test_missing_at_is_invalid() {
            assert_invalid_format("testexample.com");
        }

        #[test]
        fn test_embedded_whitespace_is_invalid() {
            assert_invalid_format("test @example.com");
            assert_invalid_format("test@exa mple.com");
        }

        #[test]
        fn test_missing_extension_is_invalid() {
            assert_invalid_format("test@example");
        }

        #[test]
        fn test_empty_parts_are_invalid() {
            assert_invalid_format("@example.com");
            assert_invalid_format("test@.com");
            assert_invalid_format("test@example.");
        }

        #[test]
        fn test_unicode_spaces_are_embedded_whitespace() {
            assert_invalid_format("test\u{FEFF}@example.com");
            assert_invalid_format("test@exa\u{2003}mple.com");
            assert_invalid_format("test@example.\u{3000}com");
        }

        #[test]
        fn test_double_at_is_invalid() {
            assert_invalid_format("a@b@example.com");
        }

        #[test]
        fn test_surrounding_whitespace_is_checked_as_typed() {
            assert_invalid_format(" test@example.com");
            assert_invalid_format("test@example.com ");
        }
    }

    mod valid {
        use super::*;

        #[test]
        fn test_simple_address() {
            assert_eq!(validate("test@example.com"), ValidationOutcome::Valid);
        }

        #[test]
        fn test_multiple_domain_segments() {
            assert_eq!(validate("test@example.co.uk"), ValidationOutcome::Valid);
            assert_eq!(validate("a@b.co.uk"), ValidationOutcome::Valid);
        }

        #[test]
        fn test_dots_and_plus_in_local_part() {
            assert_eq!(validate("first.last+news@mail.example.org"), ValidationOutcome::Valid);
        }

        #[test]
        fn test_next_line_is_not_whitespace() {
            assert_eq!(validate("a\u{85}b@c.com"), ValidationOutcome::Valid);
        }

        #[test]
        fn test_is_deterministic() {
            for _ in 0..3 {
                assert!(validate("a@b.com").is_valid());
            }
        }
    }

    mod messages {
        use super::*;

        #[test]
        fn test_display_strings() {
            assert_eq!(ValidationError::EmptyEmail.to_string(), "Email is required");
            assert_eq!(
                ValidationError::InvalidFormat.to_string(),
                "Please enter a valid email address"
            );
        }

        #[test]
        fn test_is_valid() {
            assert!(ValidationOutcome::Valid.is_valid());
            assert!(!validate("").is_valid());
        }
    }
}
