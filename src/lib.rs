//! Login form validation library
//!
//! Checks the email and password typed into a login form, classifies
//! password strength and remembers the email between visits.
//!
//! # Features
//!
//! - `async`: Enables debounced rule evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `LOGIN_CHECK_STORE_DIR`: Directory used by [`FileStore`]
//!   (default: `./.login-check`)
//!
//! # Example
//!
//! ```rust,no_run
//! use login_check::{validate_email, validate_password, StrengthLabel};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let rules = validate_password(&password);
//!
//! assert!(validate_email("user@example.com"));
//! assert!(rules.all_passed());
//! assert_eq!(rules.strength(), StrengthLabel::Strong);
//! ```

// Internal modules
mod email;
mod evaluator;
mod feedback;
mod form;
mod rules;
mod storage;
mod strength;

// Public API
pub use email::{EmailStatus, email_status, is_email_valid, validate_email};
pub use evaluator::{PasswordRuleResult, is_password_valid, password_strength, validate_password};
pub use feedback::{EmailFeedback, PasswordFeedback, RuleFeedback, SuccessNotice, Tone};
pub use form::{
    FieldState, FormCoordinator, FormView, LoginForm, Prefill, RenderError, SubmissionOutcome,
    preview_password,
};
pub use rules::{MIN_LENGTH, Rule, SPECIAL_CHARS};
pub use storage::{
    FileStore, KeyValueStore, MemoryStore, REMEMBERED_EMAIL_KEY, StorageError, get_store_dir,
};
pub use strength::StrengthLabel;

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_rules_tx;
