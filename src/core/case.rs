//! Output casing for candidate guesses

use std::fmt;

/// Casing applied to each guess before it is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputCase {
    /// First character uppercase, the rest lowercase (`Madam`)
    #[default]
    Title,
    Upper,
    Lower,
}

impl OutputCase {
    /// Names accepted on the command line, in help order
    pub const NAMES: [&'static str; 3] = ["title", "upper", "lower"];

    /// Map a command-line name to a case; unknown names fall back to title case
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "upper" => Self::Upper,
            "lower" => Self::Lower,
            _ => Self::Title,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Upper => "upper",
            Self::Lower => "lower",
        }
    }

    /// Apply this casing to a guess
    ///
    /// Title case is not `str` word-title-casing: only the first character is
    /// raised, so `M_DAM` becomes `M_dam`. The blank marker is caseless and
    /// passes through in every mode.
    #[must_use]
    pub fn transform(self, guess: &str) -> String {
        match self {
            Self::Title => {
                let mut chars = guess.chars();
                chars.next().map_or_else(String::new, |first| {
                    let mut out = String::with_capacity(guess.len());
                    out.push(first.to_ascii_uppercase());
                    out.push_str(&chars.as_str().to_ascii_lowercase());
                    out
                })
            }
            Self::Upper => guess.to_ascii_uppercase(),
            Self::Lower => guess.to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for OutputCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
