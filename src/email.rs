//! Email shape checks.
//!
//! This is a permissive format check, not RFC 5322 validation: it wants
//! something, an `@`, something, a `.`, something, with no whitespace and
//! no second `@` anywhere.

use regex::Regex;
use std::sync::LazyLock;

/// Whitespace as browsers define it for form input: ASCII space and
/// control whitespace, NBSP, the Unicode space separators, line and
/// paragraph separators, and the BOM. U+0085 is not part of the set.
const WHITESPACE_CLASS: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let part = format!("[^{}@]+", WHITESPACE_CLASS);
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("Invalid regex pattern")
});

/// Classification of an email field's current contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmailStatus {
    Empty,
    Invalid,
    Valid,
}

/// Returns `true` if `email` has the `local@domain.tld` shape.
pub fn validate_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Non-empty and well-shaped. This is the gate used on submission.
pub fn is_email_valid(email: &str) -> bool {
    validate_email(email) && !email.is_empty()
}

/// Classifies `email` for feedback.
///
/// `Empty` is kept apart from `Invalid` because the two render differently.
pub fn email_status(email: &str) -> EmailStatus {
    if email.is_empty() {
        return EmailStatus::Empty;
    }
    if !email.contains('@') || !email.contains('.') {
        return EmailStatus::Invalid;
    }
    if validate_email(email) {
        EmailStatus::Valid
    } else {
        EmailStatus::Invalid
    }
}
