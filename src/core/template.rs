//! Guess template representation
//!
//! A template is a 5-character pattern made of letters, any number of blank
//! markers and exactly one change marker. Guesses are produced by
//! substituting a letter for the change marker.

use std::fmt;

use super::error::{GuessError, TemplateProblem};

/// Marks a position whose letter is unknown; passed through literally
pub const BLANK_CHAR: char = '_';

/// Marks the single position that is substituted to produce guesses
pub const CHANGE_CHAR: char = '.';

/// Required template length
pub const TEMPLATE_LEN: usize = 5;

/// A validated, uppercase-normalized guess template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    text: String,
    change_pos: usize,
}

impl Template {
    /// Parse and validate a raw template
    ///
    /// The input is normalized to uppercase before validation, so `.a_am`
    /// and `.A_AM` are the same template.
    ///
    /// # Errors
    /// Returns `GuessError::InvalidTemplate` if:
    /// - Length is not exactly 5
    /// - Any character is not a letter, `_` or `.`
    /// - The `.` change marker is missing or appears more than once
    ///
    /// # Examples
    /// ```
    /// use wordle_guesses::core::Template;
    ///
    /// let template = Template::parse(".a_am").unwrap();
    /// assert_eq!(template.text(), ".A_AM");
    /// assert_eq!(template.prefix(), "");
    /// assert_eq!(template.suffix(), "A_AM");
    ///
    /// assert!(Template::parse("ma_am").is_err());
    /// assert!(Template::parse("..dam").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, GuessError> {
        let invalid = |problem| GuessError::InvalidTemplate {
            template: raw.to_string(),
            problem,
        };

        let text = raw.to_uppercase();

        let len = text.chars().count();
        if len != TEMPLATE_LEN {
            return Err(invalid(TemplateProblem::WrongLength(len)));
        }

        let is_fill = |c: char| c.is_ascii_uppercase() || c == BLANK_CHAR;
        let mut change_pos = None;
        for (i, c) in text.chars().enumerate() {
            if c == CHANGE_CHAR {
                if change_pos.is_some() {
                    return Err(invalid(TemplateProblem::WrongFormat));
                }
                change_pos = Some(i);
            } else if !is_fill(c) {
                return Err(invalid(TemplateProblem::WrongFormat));
            }
        }

        let change_pos = change_pos.ok_or_else(|| invalid(TemplateProblem::WrongFormat))?;

        Ok(Self { text, change_pos })
    }

    /// Get the normalized template as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Position (0-4) of the change marker
    #[inline]
    #[must_use]
    pub const fn change_pos(&self) -> usize {
        self.change_pos
    }

    /// Characters before the change marker
    #[inline]
    #[must_use]
    pub fn prefix(&self) -> &str {
        // All characters are ASCII once validated, so byte offsets are char offsets
        &self.text[..self.change_pos]
    }

    /// Characters after the change marker
    #[inline]
    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.text[self.change_pos + 1..]
    }

    /// Build the guess obtained by placing `letter` at the change position
    #[must_use]
    pub fn substitute(&self, letter: char) -> String {
        let mut guess = String::with_capacity(TEMPLATE_LEN);
        guess.push_str(self.prefix());
        guess.push(letter);
        guess.push_str(self.suffix());
        guess
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
