//! Feedback models and their renderings.
//!
//! The models carry no markup; `to_html` and `Display` are two thin
//! renderings over the same data.

use std::fmt;

use crate::email::EmailStatus;
use crate::evaluator::PasswordRuleResult;
use crate::rules::Rule;
use crate::strength::StrengthLabel;

const PASS_MARK: char = '✓';
const FAIL_MARK: char = '✗';

/// One line of the password checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleFeedback {
    pub rule: Rule,
    pub passed: bool,
    pub description: &'static str,
}

impl RuleFeedback {
    fn mark(&self) -> char {
        if self.passed { PASS_MARK } else { FAIL_MARK }
    }
}

/// Checklist of the five rules in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordFeedback {
    pub items: Vec<RuleFeedback>,
}

impl PasswordFeedback {
    pub fn from_rules(rules: &PasswordRuleResult) -> Self {
        let items = rules
            .iter()
            .map(|(rule, passed)| RuleFeedback {
                rule,
                passed,
                description: rule.description(),
            })
            .collect();
        Self { items }
    }

    pub fn to_html(&self) -> String {
        let mut html = String::from("<ul>");
        for item in &self.items {
            let color = if item.passed { "green" } else { "red" };
            html.push_str(&format!(
                "<li style=\"color: {};\">{} {}</li>",
                color,
                item.mark(),
                item.description
            ));
        }
        html.push_str("</ul>");
        html
    }
}

impl fmt::Display for PasswordFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{} {}", item.mark(), item.description)?;
        }
        Ok(())
    }
}

/// Colour hint for a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Muted,
    Positive,
    Negative,
}

impl Tone {
    fn css_color(self) -> &'static str {
        match self {
            Tone::Muted => "#999",
            Tone::Positive => "green",
            Tone::Negative => "red",
        }
    }
}

/// Single status message under the email field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmailFeedback {
    pub status: EmailStatus,
    pub message: &'static str,
    pub tone: Tone,
}

impl EmailFeedback {
    pub fn from_status(status: EmailStatus) -> Self {
        let (message, tone) = match status {
            EmailStatus::Empty => ("Enter your email", Tone::Muted),
            EmailStatus::Valid => ("✓ Valid email", Tone::Positive),
            EmailStatus::Invalid => ("✗ Invalid email format", Tone::Negative),
        };
        Self {
            status,
            message,
            tone,
        }
    }

    pub fn to_html(&self) -> String {
        format!(
            "<p style=\"color: {};\">{}</p>",
            self.tone.css_color(),
            self.message
        )
    }
}

impl fmt::Display for EmailFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}

/// Message shown once a submission is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessNotice {
    pub email: String,
    pub strength: StrengthLabel,
}

impl fmt::Display for SuccessNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Login successful!\nEmail: {}\nPassword Strength: {}",
            self.email, self.strength
        )
    }
}
