//! Character variety sections - uppercase, lowercase, digits, special chars.
//!
//! Case and digit checks use Unicode properties, so `É`, `ß` and `٣` count.
//! Digits are decimal digits only (general category Nd): `½`, `Ⅻ`, `〇` and
//! `²` are not.

use secrecy::SecretString;
use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};
use super::{check, Criterion, SectionResult};

/// The only characters accepted as "special".
pub const SPECIAL_CHARS: &str = "!@#$%^&*";

pub fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_uppercase())
}

pub fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_lowercase())
}

pub fn has_digit(password: &str) -> bool {
    password
        .chars()
        .any(|c| c.general_category() == GeneralCategory::DecimalNumber)
}

pub fn has_special(password: &str) -> bool {
    password.chars().any(|c| SPECIAL_CHARS.contains(c))
}

/// Checks for at least one uppercase letter.
pub fn uppercase_section(password: &SecretString) -> SectionResult {
    check(password, Criterion::Uppercase)
}

/// Checks for at least one lowercase letter.
pub fn lowercase_section(password: &SecretString) -> SectionResult {
    check(password, Criterion::Lowercase)
}

/// Checks for at least one digit.
pub fn digit_section(password: &SecretString) -> SectionResult {
    check(password, Criterion::Digit)
}

/// Checks for at least one character from [`SPECIAL_CHARS`].
pub fn special_section(password: &SecretString) -> SectionResult {
    check(password, Criterion::Special)
}
