//! Password evaluation sections
//!
//! Each section checks one criterion and contributes at most one point.

mod length;
mod variety;

use secrecy::{ExposeSecret, SecretString};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub use length::{has_min_length, length_section, MIN_LENGTH};
pub use variety::{
    digit_section, has_digit, has_lowercase, has_special, has_uppercase, lowercase_section,
    special_section, uppercase_section, SPECIAL_CHARS,
};

/// Result type for section evaluation functions.
/// - `Some(feedback)` - criterion unmet, with the suggestion to show
/// - `None` - criterion met
pub type SectionResult = Option<String>;

/// Shared body of every section: feedback if the criterion is unmet.
fn check(password: &SecretString, criterion: Criterion) -> SectionResult {
    if criterion.is_met(password.expose_secret()) {
        None
    } else {
        Some(criterion.feedback().to_string())
    }
}

/// One of the five fixed checks, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    Length,
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl Criterion {
    pub const ALL: [Criterion; 5] = [
        Criterion::Length,
        Criterion::Uppercase,
        Criterion::Lowercase,
        Criterion::Digit,
        Criterion::Special,
    ];

    /// The section that evaluates this criterion.
    pub fn section(&self) -> fn(&SecretString) -> SectionResult {
        match self {
            Criterion::Length => length_section,
            Criterion::Uppercase => uppercase_section,
            Criterion::Lowercase => lowercase_section,
            Criterion::Digit => digit_section,
            Criterion::Special => special_section,
        }
    }

    /// Runs the criterion's predicate.
    pub fn is_met(&self, password: &str) -> bool {
        match self {
            Criterion::Length => has_min_length(password),
            Criterion::Uppercase => has_uppercase(password),
            Criterion::Lowercase => has_lowercase(password),
            Criterion::Digit => has_digit(password),
            Criterion::Special => has_special(password),
        }
    }

    /// Suggestion shown when the criterion is unmet.
    pub fn feedback(&self) -> &'static str {
        match self {
            Criterion::Length => "Password should be at least 8 characters long",
            Criterion::Uppercase => "Add at least one uppercase letter",
            Criterion::Lowercase => "Add at least one lowercase letter",
            Criterion::Digit => "Include at least one digit",
            Criterion::Special => "Add a special character (!@#$%^&*)",
        }
    }

    /// Checklist row text.
    pub fn label(&self) -> &'static str {
        match self {
            Criterion::Length => "At least 8 characters",
            Criterion::Uppercase => "Contains uppercase letters",
            Criterion::Lowercase => "Contains lowercase letters",
            Criterion::Digit => "Includes at least one digit",
            Criterion::Special => "Has special character (!@#$%^&*)",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Criterion::Length => "length",
            Criterion::Uppercase => "upper",
            Criterion::Lowercase => "lower",
            Criterion::Digit => "digit",
            Criterion::Special => "special",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown criterion: {0:?}")]
pub struct ParseCriterionError(pub String);

impl FromStr for Criterion {
    type Err = ParseCriterionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Criterion::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseCriterionError(s.to_string()))
    }
}
