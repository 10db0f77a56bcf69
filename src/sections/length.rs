//! Length section - checks password minimum length.

use secrecy::SecretString;
use super::{check, Criterion, SectionResult};

pub const MIN_LENGTH: usize = 8;

/// Length is counted in characters, not bytes.
pub fn has_min_length(password: &str) -> bool {
    password.chars().count() >= MIN_LENGTH
}

/// Checks if the password meets minimum length requirements.
///
/// # Returns
/// - `Some(feedback)` if password is too short
/// - `None` if password has sufficient length
pub fn length_section(password: &SecretString) -> SectionResult {
    check(password, Criterion::Length)
}
