//! Password rule evaluator - runs every rule and collects the results.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::rules::Rule;
use crate::strength::StrengthLabel;

/// Outcome of the five password rules for one password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PasswordRuleResult {
    pub min_length: bool,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_numbers: bool,
    pub has_special_char: bool,
}

impl PasswordRuleResult {
    /// Returns whether `rule` passed.
    pub fn get(&self, rule: Rule) -> bool {
        match rule {
            Rule::MinLength => self.min_length,
            Rule::UpperCase => self.has_uppercase,
            Rule::LowerCase => self.has_lowercase,
            Rule::Numbers => self.has_numbers,
            Rule::SpecialChar => self.has_special_char,
        }
    }

    fn set(&mut self, rule: Rule, passed: bool) {
        match rule {
            Rule::MinLength => self.min_length = passed,
            Rule::UpperCase => self.has_uppercase = passed,
            Rule::LowerCase => self.has_lowercase = passed,
            Rule::Numbers => self.has_numbers = passed,
            Rule::SpecialChar => self.has_special_char = passed,
        }
    }

    /// Iterates `(rule, passed)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Rule, bool)> + '_ {
        Rule::ALL.into_iter().map(move |rule| (rule, self.get(rule)))
    }

    /// Number of rules that passed, `0..=5`.
    pub fn passed_count(&self) -> usize {
        self.iter().filter(|(_, passed)| *passed).count()
    }

    pub fn all_passed(&self) -> bool {
        self.passed_count() == Rule::ALL.len()
    }

    pub fn strength(&self) -> StrengthLabel {
        StrengthLabel::from_passed_count(self.passed_count())
    }
}

/// Evaluates every password rule.
///
/// Never fails: the empty string yields a result with every field `false`.
pub fn validate_password(password: &SecretString) -> PasswordRuleResult {
    let mut result = PasswordRuleResult::default();
    for rule in Rule::ALL {
        result.set(rule, rule.check()(password));
    }
    result
}

/// Returns `true` only if all five rules pass.
pub fn is_password_valid(password: &SecretString) -> bool {
    validate_password(password).all_passed()
}

/// Evaluates the rules and classifies the password.
pub fn password_strength(password: &SecretString) -> StrengthLabel {
    validate_password(password).strength()
}

/// Debounced evaluation for as-you-type feedback.
///
/// Waits 300ms, then sends the rule results unless `token` was cancelled
/// in the meantime (a newer keystroke superseded this one).
#[cfg(feature = "async")]
pub async fn evaluate_password_rules_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordRuleResult>,
) {
    use std::time::Duration;

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("password evaluation cancelled before debounce elapsed");
            return;
        }
        _ = tokio::time::sleep(Duration::from_millis(300)) => {}
    }

    let result = validate_password(password);

    if let Err(_e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password rule result: {}", _e);
    }
}
