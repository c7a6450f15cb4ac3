//! Password rules
//!
//! Each rule checks one independent aspect of the password and knows
//! nothing about the others.

mod length;
mod special;
mod variety;

pub use length::{MIN_LENGTH, min_length_rule};
pub use special::{SPECIAL_CHARS, special_char_rule};
pub use variety::{lowercase_rule, number_rule, uppercase_rule};

use secrecy::SecretString;

/// Signature shared by every rule check.
pub type RuleCheck = fn(&SecretString) -> bool;

/// The five password rules, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    MinLength,
    UpperCase,
    LowerCase,
    Numbers,
    SpecialChar,
}

impl Rule {
    /// All rules in the order feedback lists them.
    pub const ALL: [Rule; 5] = [
        Rule::MinLength,
        Rule::UpperCase,
        Rule::LowerCase,
        Rule::Numbers,
        Rule::SpecialChar,
    ];

    /// Human-readable requirement shown next to the pass/fail mark.
    pub fn description(self) -> &'static str {
        match self {
            Rule::MinLength => "At least 8 characters",
            Rule::UpperCase => "At least one uppercase letter",
            Rule::LowerCase => "At least one lowercase letter",
            Rule::Numbers => "At least one number",
            Rule::SpecialChar => "At least one special character",
        }
    }

    pub(crate) fn check(self) -> RuleCheck {
        match self {
            Rule::MinLength => min_length_rule,
            Rule::UpperCase => uppercase_rule,
            Rule::LowerCase => lowercase_rule,
            Rule::Numbers => number_rule,
            Rule::SpecialChar => special_char_rule,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_order_is_fixed() {
        let descriptions: Vec<_> = Rule::ALL.iter().map(|r| r.description()).collect();
        assert_eq!(
            descriptions,
            vec![
                "At least 8 characters",
                "At least one uppercase letter",
                "At least one lowercase letter",
                "At least one number",
                "At least one special character",
            ]
        );
    }

    #[test]
    fn test_rule_check_dispatch() {
        let pwd = SecretString::new("A".to_string().into());
        assert!(Rule::UpperCase.check()(&pwd));
        assert!(!Rule::LowerCase.check()(&pwd));
        assert!(!Rule::MinLength.check()(&pwd));
    }
}
