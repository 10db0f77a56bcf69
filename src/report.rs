//! Renderer-facing view of an evaluation.
//!
//! Carries everything a strength meter needs to draw (bar width, band
//! color, headline, checklist) without drawing anything itself.

use secrecy::{ExposeSecret, SecretString};

use crate::evaluator::evaluate_password_strength;
use crate::sections::Criterion;
use crate::types::{PasswordEvaluation, PasswordStrength};

pub const EMPTY_INPUT_PROMPT: &str = "Please enter a password to check its strength";
pub const ALL_MET_MESSAGE: &str = "Excellent! Your password meets all security requirements!";
pub const SUGGESTIONS_HEADING: &str = "Password Improvement Suggestions:";

/// One checklist row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecklistItem {
    pub criterion: Criterion,
    pub met: bool,
}

impl ChecklistItem {
    pub fn label(&self) -> &'static str {
        self.criterion.label()
    }
}

/// Display data for a non-empty password.
#[derive(Debug, Clone, PartialEq)]
pub struct StrengthReport {
    pub evaluation: PasswordEvaluation,
    pub checklist: Vec<ChecklistItem>,
}

impl StrengthReport {
    pub fn strength(&self) -> PasswordStrength {
        self.evaluation.strength()
    }

    /// Bar fill, 0.0 to 100.0.
    pub fn progress(&self) -> f64 {
        self.evaluation.score.percent()
    }

    pub fn color(&self) -> &'static str {
        self.strength().color()
    }

    /// e.g. "Moderate Password"
    pub fn title(&self) -> String {
        format!("{} Password", self.strength())
    }

    pub fn headline(&self) -> &'static str {
        match self.strength() {
            PasswordStrength::Strong => ALL_MET_MESSAGE,
            _ => SUGGESTIONS_HEADING,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    /// Nothing typed yet; show the prompt instead of a meter.
    AwaitingInput,
    Evaluated(StrengthReport),
}

impl Report {
    pub fn new(password: &SecretString) -> Self {
        let pwd = password.expose_secret();
        if pwd.is_empty() {
            return Report::AwaitingInput;
        }

        // rows are recomputed from the predicates, not read back from feedback
        let checklist = Criterion::ALL
            .iter()
            .map(|&criterion| ChecklistItem {
                criterion,
                met: criterion.is_met(pwd),
            })
            .collect();

        Report::Evaluated(StrengthReport {
            evaluation: evaluate_password_strength(password),
            checklist,
        })
    }

    pub fn prompt(&self) -> Option<&'static str> {
        match self {
            Report::AwaitingInput => Some(EMPTY_INPUT_PROMPT),
            Report::Evaluated(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(s: &str) -> Report {
        Report::new(&SecretString::new(s.to_string().into()))
    }

    fn evaluated(s: &str) -> StrengthReport {
        match report(s) {
            Report::Evaluated(r) => r,
            Report::AwaitingInput => panic!("expected an evaluated report for {:?}", s),
        }
    }

    #[test]
    fn test_empty_input_awaits() {
        let r = report("");
        assert_eq!(r, Report::AwaitingInput);
        assert_eq!(r.prompt(), Some(EMPTY_INPUT_PROMPT));
    }

    #[test]
    fn test_whitespace_is_evaluated() {
        let r = report(" ");
        assert_eq!(r.prompt(), None);
        assert_eq!(evaluated(" ").evaluation.score.value(), 0);
    }

    #[test]
    fn test_strong_report() {
        let r = evaluated("Abcdef1!");
        assert_eq!(r.progress(), 100.0);
        assert_eq!(r.color(), "#00C851");
        assert_eq!(r.title(), "Strong Password");
        assert_eq!(r.headline(), ALL_MET_MESSAGE);
        assert!(r.checklist.iter().all(|item| item.met));
    }

    #[test]
    fn test_moderate_report() {
        let r = evaluated("AB12!!");
        assert_eq!(r.progress(), 60.0);
        assert_eq!(r.color(), "#ffbb33");
        assert_eq!(r.title(), "Moderate Password");
        assert_eq!(r.headline(), SUGGESTIONS_HEADING);
    }

    #[test]
    fn test_weak_report() {
        let r = evaluated("abc");
        assert_eq!(r.progress(), 20.0);
        assert_eq!(r.color(), "#ff4444");
        assert_eq!(r.title(), "Weak Password");
    }

    #[test]
    fn test_checklist_agrees_with_feedback() {
        for pwd in ["a", "abcdefgh", "Abcdefg1", "AB12!!", "12345678", "!!!!"] {
            let r = evaluated(pwd);
            let unmet: Vec<&str> = r
                .checklist
                .iter()
                .filter(|item| !item.met)
                .map(|item| item.criterion.feedback())
                .collect();
            assert_eq!(r.evaluation.feedback, unmet, "mismatch for {:?}", pwd);
        }
    }

    #[test]
    fn test_checklist_labels_in_order() {
        let labels: Vec<_> = evaluated("x").checklist.iter().map(|i| i.label()).collect();
        assert_eq!(
            labels,
            [
                "At least 8 characters",
                "Contains uppercase letters",
                "Contains lowercase letters",
                "Includes at least one digit",
                "Has special character (!@#$%^&*)",
            ]
        );
    }
}
