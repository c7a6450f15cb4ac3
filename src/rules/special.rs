//! Special character rule.

use secrecy::{ExposeSecret, SecretString};

/// Characters that satisfy the special character rule.
pub const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

/// Returns `true` if the password contains one of [`SPECIAL_CHARS`].
///
/// Other punctuation (`~`, backtick, spaces) does not count.
pub fn special_char_rule(password: &SecretString) -> bool {
    password
        .expose_secret()
        .chars()
        .any(|c| SPECIAL_CHARS.contains(c))
}
