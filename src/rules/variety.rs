//! Character variety rules - uppercase, lowercase and digits.
//!
//! Only ASCII ranges count: `É` is not an uppercase letter here and
//! `٣` is not a number.

use secrecy::{ExposeSecret, SecretString};

/// Returns `true` if the password contains a character in `A-Z`.
pub fn uppercase_rule(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| c.is_ascii_uppercase())
}

/// Returns `true` if the password contains a character in `a-z`.
pub fn lowercase_rule(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| c.is_ascii_lowercase())
}

/// Returns `true` if the password contains a decimal digit.
pub fn number_rule(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| c.is_ascii_digit())
}
