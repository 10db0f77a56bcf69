//! Password strength meter library
//!
//! Scores a password against five fixed criteria (length, uppercase,
//! lowercase, digit, special character), maps the score to a strength band
//! and lists a suggestion for every unmet criterion.
//!
//! # Features
//!
//! - `async` (default): Enables debounced live evaluation with cancellation
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_METER_DEBOUNCE_MS`: Delay before a live evaluation runs
//!   (default: `300`, `async` feature only)
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{evaluate_password_strength, PasswordStrength};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Abcdefg1".to_string().into());
//! let evaluation = evaluate_password_strength(&password);
//!
//! assert_eq!(evaluation.score.value(), 4);
//! assert_eq!(evaluation.strength(), PasswordStrength::Moderate);
//! assert_eq!(evaluation.feedback, ["Add a special character (!@#$%^&*)"]);
//! ```

// Internal modules
#[cfg(feature = "async")]
mod config;
mod evaluator;
mod report;
mod sections;
mod types;

// Public API
pub use evaluator::evaluate_password_strength;
pub use report::{
    ChecklistItem, Report, StrengthReport, ALL_MET_MESSAGE, EMPTY_INPUT_PROMPT,
    SUGGESTIONS_HEADING,
};
pub use sections::{Criterion, ParseCriterionError, MIN_LENGTH, SPECIAL_CHARS};
pub use types::{
    ParseStrengthError, PasswordEvaluation, PasswordScore, PasswordStrength, MAX_SCORE,
};

#[cfg(feature = "async")]
pub use config::{get_debounce_delay, DEBOUNCE_ENV, DEFAULT_DEBOUNCE};

#[cfg(feature = "async")]
pub use evaluator::{evaluate_password_strength_debounced, evaluate_password_strength_tx};
