//! Length rule - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};

/// Minimum number of characters a password needs.
pub const MIN_LENGTH: usize = 8;

/// Returns `true` if the password has at least [`MIN_LENGTH`] characters.
///
/// Characters are counted, not bytes or UTF-16 units, so `"ééééééé"` is
/// seven long and an emoji counts once.
pub fn min_length_rule(password: &SecretString) -> bool {
    password.expose_secret().chars().count() >= MIN_LENGTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_rule_too_short() {
        let pwd = SecretString::new("Short1!".to_string().into());
        assert!(!min_length_rule(&pwd));
    }

    #[test]
    fn test_length_rule_exactly_minimum() {
        let pwd = SecretString::new("12345678".to_string().into());
        assert!(min_length_rule(&pwd));
    }

    #[test]
    fn test_length_rule_empty() {
        let pwd = SecretString::new(String::new().into());
        assert!(!min_length_rule(&pwd));
    }

    #[test]
    fn test_length_rule_counts_astral_chars_once() {
        // Six chars, eight UTF-16 units.
        let pwd = SecretString::new("Ab1!😀😀".to_string().into());
        assert!(!min_length_rule(&pwd));

        let pwd = SecretString::new("Ab1!😀😀😀😀".to_string().into());
        assert!(min_length_rule(&pwd));
    }

    #[test]
    fn test_length_rule_counts_chars_not_bytes() {
        let pwd = SecretString::new("ééééééé".to_string().into());
        assert!(!min_length_rule(&pwd));
    }
}
