//! Login form submission coordinator.
//!
//! Gates on the email first, then the password, then updates the
//! remembered email. Storage and rendering failures never surface to the
//! caller.

use secrecy::SecretString;
use thiserror::Error;

use crate::email::{EmailStatus, email_status, is_email_valid};
use crate::evaluator::{PasswordRuleResult, validate_password};
use crate::feedback::{EmailFeedback, PasswordFeedback, SuccessNotice};
use crate::storage::{KeyValueStore, REMEMBERED_EMAIL_KEY};
use crate::strength::StrengthLabel;

/// Values read from the form fields at submission time.
#[derive(Debug)]
pub struct LoginForm {
    pub email: String,
    pub password: SecretString,
    pub remember: bool,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: SecretString, remember: bool) -> Self {
        Self {
            email: email.into(),
            password,
            remember,
        }
    }
}

/// Visual mark applied to an input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    Valid,
    Invalid,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("Feedback target not found: {0}")]
    MissingTarget(&'static str),
}

/// Presentation sink driven by the coordinator.
pub trait FormView {
    fn mark_email(&mut self, state: FieldState);
    fn mark_password(&mut self, state: FieldState);
    fn render_email_feedback(&mut self, feedback: &EmailFeedback) -> Result<(), RenderError>;
    fn render_password_feedback(&mut self, feedback: &PasswordFeedback)
    -> Result<(), RenderError>;
    fn notify_success(&mut self, notice: &SuccessNotice);
}

/// Result of one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The email failed; the password was not looked at.
    EmailRejected(EmailStatus),
    PasswordRejected(PasswordRuleResult),
    Accepted {
        email: String,
        strength: StrengthLabel,
    },
}

impl SubmissionOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionOutcome::Accepted { .. })
    }
}

/// Form state restored from a remembered email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefill {
    pub email: String,
    pub remember: bool,
}

pub struct FormCoordinator<S, V> {
    store: S,
    view: V,
}

impl<S: KeyValueStore, V: FormView> FormCoordinator<S, V> {
    pub fn new(store: S, view: V) -> Self {
        Self { store, view }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn into_parts(self) -> (S, V) {
        (self.store, self.view)
    }

    /// Restores the remembered email, if any, and renders its feedback.
    ///
    /// Meant to be called once when the form is shown.
    pub fn prefill(&mut self) -> Option<Prefill> {
        let remembered = match self.store.get(REMEMBERED_EMAIL_KEY) {
            Ok(value) => value,
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Could not read remembered email: {}", _e);
                None
            }
        };
        let email = remembered.filter(|e| !e.is_empty())?;

        #[cfg(feature = "tracing")]
        tracing::info!("Prefilling remembered email");

        let feedback = EmailFeedback::from_status(email_status(&email));
        self.render_email(&feedback);

        Some(Prefill {
            email,
            remember: true,
        })
    }

    /// Validates the form and, on success, updates the remembered email.
    pub fn submit(&mut self, form: &LoginForm) -> SubmissionOutcome {
        if !is_email_valid(&form.email) {
            #[cfg(feature = "tracing")]
            tracing::debug!("Submission rejected: invalid email");

            self.view.mark_email(FieldState::Invalid);
            let status = email_status(&form.email);
            self.render_email(&EmailFeedback::from_status(status));
            return SubmissionOutcome::EmailRejected(status);
        }
        self.view.mark_email(FieldState::Valid);

        let rules = validate_password(&form.password);
        if !rules.all_passed() {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                "Submission rejected: {} of 5 password rules passed",
                rules.passed_count()
            );

            self.view.mark_password(FieldState::Invalid);
            self.render_password(&PasswordFeedback::from_rules(&rules));
            return SubmissionOutcome::PasswordRejected(rules);
        }
        self.view.mark_password(FieldState::Valid);

        self.update_remembered_email(&form.email, form.remember);

        let strength = rules.strength();
        self.view.notify_success(&SuccessNotice {
            email: form.email.clone(),
            strength,
        });

        #[cfg(feature = "tracing")]
        tracing::debug!("Submission accepted with {} password", strength);

        SubmissionOutcome::Accepted {
            email: form.email.clone(),
            strength,
        }
    }

    fn update_remembered_email(&mut self, email: &str, remember: bool) {
        let result = if remember {
            self.store.set(REMEMBERED_EMAIL_KEY, email)
        } else {
            self.store.remove(REMEMBERED_EMAIL_KEY)
        };

        if let Err(_e) = result {
            #[cfg(feature = "tracing")]
            tracing::warn!("Ignoring remembered email storage error: {}", _e);
        }
    }

    fn render_email(&mut self, feedback: &EmailFeedback) {
        if let Err(_e) = self.view.render_email_feedback(feedback) {
            #[cfg(feature = "tracing")]
            tracing::debug!("Skipping email feedback: {}", _e);
        }
    }

    fn render_password(&mut self, feedback: &PasswordFeedback) {
        if let Err(_e) = self.view.render_password_feedback(feedback) {
            #[cfg(feature = "tracing")]
            tracing::debug!("Skipping password feedback: {}", _e);
        }
    }
}

/// Evaluates a password the way [`FormCoordinator::submit`] would, without
/// side effects. Useful for live feedback before submission.
pub fn preview_password(password: &SecretString) -> PasswordFeedback {
    PasswordFeedback::from_rules(&validate_password(password))
}
