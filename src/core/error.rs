//! Validation errors for guess generation requests
//!
//! Every variant is raised before any guesses are generated, so a failed
//! request never produces partial output.

use std::fmt;

use super::template::{BLANK_CHAR, CHANGE_CHAR};

/// Why a template was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateProblem {
    /// Template is not 5 characters long (holds the actual length)
    WrongLength(usize),
    /// Template does not follow the letters/blanks + one change marker grammar
    WrongFormat,
}

/// Which letter-set argument a letter set came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterSetKind {
    Excluded,
    Included,
}

impl fmt::Display for LetterSetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Excluded => write!(f, "excluded"),
            Self::Included => write!(f, "included"),
        }
    }
}

/// Error type for invalid guess generation requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    InvalidTemplate {
        template: String,
        problem: TemplateProblem,
    },
    InvalidLetterSet {
        kind: LetterSetKind,
        letters: String,
    },
    InvalidConfiguration {
        num_guesses: i64,
    },
    UsageError(String),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTemplate {
                template,
                problem: TemplateProblem::WrongLength(len),
            } => {
                write!(
                    f,
                    "template '{template}' is not 5 characters in length (got {len})"
                )
            }
            Self::InvalidTemplate {
                template,
                problem: TemplateProblem::WrongFormat,
            } => write!(
                f,
                "template '{template}' is in wrong format \
                 (expected letters or '{BLANK_CHAR}' around a single '{CHANGE_CHAR}')"
            ),
            Self::InvalidLetterSet { kind, letters } => write!(
                f,
                "non-alphabetical character in {kind} letters argument '{letters}'"
            ),
            Self::InvalidConfiguration { num_guesses } => write!(
                f,
                "number of guesses per line must be at least 1, got {num_guesses}"
            ),
            Self::UsageError(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for GuessError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_length_message_includes_input() {
        let err = GuessError::InvalidTemplate {
            template: "abc".to_string(),
            problem: TemplateProblem::WrongLength(3),
        };
        let message = err.to_string();
        assert!(message.contains("'abc'"));
        assert!(message.contains("5 characters"));
    }

    #[test]
    fn template_format_message_mentions_markers() {
        let err = GuessError::InvalidTemplate {
            template: "abcde".to_string(),
            problem: TemplateProblem::WrongFormat,
        };
        let message = err.to_string();
        assert!(message.contains("'abcde'"));
        assert!(message.contains("'.'"));
    }

    #[test]
    fn letter_set_message_names_argument() {
        let err = GuessError::InvalidLetterSet {
            kind: LetterSetKind::Included,
            letters: "ab1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "non-alphabetical character in included letters argument 'ab1'"
        );
    }

    #[test]
    fn configuration_message_includes_value() {
        let err = GuessError::InvalidConfiguration { num_guesses: -2 };
        assert!(err.to_string().contains("-2"));
    }
}
