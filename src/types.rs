//! Score, strength and evaluation types.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Highest reachable score: one point per criterion.
pub const MAX_SCORE: u8 = 5;

/// Number of satisfied criteria, always in `0..=MAX_SCORE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PasswordScore(u8);

impl PasswordScore {
    /// Creates a score, clamping anything above [`MAX_SCORE`].
    pub fn new(value: u8) -> Self {
        Self(value.min(MAX_SCORE))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Fraction of the criteria met, scaled to 0..=100.
    pub fn percent(&self) -> f64 {
        f64::from(self.0) * 100.0 / f64::from(MAX_SCORE)
    }
}

impl fmt::Display for PasswordScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, MAX_SCORE)
    }
}

/// Strength band derived from a [`PasswordScore`].
///
/// Variants are declared weakest first, so the derived `Ord` ranks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PasswordStrength {
    Weak,
    Moderate,
    Strong,
}

impl PasswordStrength {
    pub fn as_str(&self) -> &'static str {
        match self {
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Moderate => "Moderate",
            PasswordStrength::Strong => "Strong",
        }
    }

    /// Display color for the band (red, amber, green).
    pub fn color(&self) -> &'static str {
        match self {
            PasswordStrength::Weak => "#ff4444",
            PasswordStrength::Moderate => "#ffbb33",
            PasswordStrength::Strong => "#00C851",
        }
    }
}

impl From<PasswordScore> for PasswordStrength {
    fn from(score: PasswordScore) -> Self {
        match score.value() {
            0..=2 => PasswordStrength::Weak,
            3..=4 => PasswordStrength::Moderate,
            _ => PasswordStrength::Strong,
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown password strength: {0:?}")]
pub struct ParseStrengthError(pub String);

impl FromStr for PasswordStrength {
    type Err = ParseStrengthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weak" => Ok(PasswordStrength::Weak),
            "moderate" => Ok(PasswordStrength::Moderate),
            "strong" => Ok(PasswordStrength::Strong),
            _ => Err(ParseStrengthError(s.to_string())),
        }
    }
}

/// Result of a single evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordEvaluation {
    pub score: PasswordScore,
    /// One suggestion per unmet criterion, in criterion order.
    pub feedback: Vec<String>,
}

impl PasswordEvaluation {
    pub fn strength(&self) -> PasswordStrength {
        PasswordStrength::from(self.score)
    }
}
