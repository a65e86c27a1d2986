//! Letter sets used to restrict which letters are substituted into a template

use rustc_hash::FxHashSet;
use std::fmt;

use super::error::{GuessError, LetterSetKind};

/// A set of unique uppercase ASCII letters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterSet {
    letters: FxHashSet<u8>,
}

impl LetterSet {
    /// Parse a run of letters such as `risengycuk`
    ///
    /// Letters are uppercased and duplicates collapse.
    ///
    /// # Errors
    /// Returns `GuessError::InvalidLetterSet` if the argument is empty or any
    /// character is not an ASCII letter. `kind` only labels the error.
    pub fn parse(raw: &str, kind: LetterSetKind) -> Result<Self, GuessError> {
        if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(GuessError::InvalidLetterSet {
                kind,
                letters: raw.to_string(),
            });
        }

        let letters = raw.bytes().map(|b| b.to_ascii_uppercase()).collect();
        Ok(Self { letters })
    }

    /// Check whether `letter` is in the set (case-insensitive)
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        u8::try_from(letter).is_ok_and(|b| self.letters.contains(&b.to_ascii_uppercase()))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl fmt::Display for LetterSet {
    /// Letters in alphabetical order, e.g. `CEGIKNRSUY`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sorted: Vec<u8> = self.letters.iter().copied().collect();
        sorted.sort_unstable();
        for b in sorted {
            write!(f, "{}", char::from(b))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_set_uppercases_and_dedupes() {
        let set = LetterSet::parse("aAbBc", LetterSetKind::Excluded).unwrap();
        assert_eq!(set.len(), 3);
        assert!(set.contains('A'));
        assert!(set.contains('b'));
        assert!(set.contains('C'));
        assert!(!set.contains('D'));
    }

    #[test]
    fn letter_set_rejects_empty_argument() {
        for kind in [LetterSetKind::Excluded, LetterSetKind::Included] {
            assert_eq!(
                LetterSet::parse("", kind),
                Err(GuessError::InvalidLetterSet {
                    kind,
                    letters: String::new(),
                })
            );
        }
    }

    #[test]
    fn letter_set_default_is_empty() {
        assert!(LetterSet::default().is_empty());
        assert_eq!(LetterSet::default().len(), 0);
    }

    #[test]
    fn letter_set_rejects_non_letters() {
        assert!(matches!(
            LetterSet::parse("ris3n", LetterSetKind::Excluded),
            Err(GuessError::InvalidLetterSet {
                kind: LetterSetKind::Excluded,
                ..
            })
        ));
        assert!(LetterSet::parse("a,b", LetterSetKind::Included).is_err());
        assert!(LetterSet::parse("a b", LetterSetKind::Included).is_err());
        assert!(LetterSet::parse("_", LetterSetKind::Included).is_err());
        assert!(LetterSet::parse("ü", LetterSetKind::Included).is_err());
    }

    #[test]
    fn letter_set_error_keeps_raw_input() {
        let err = LetterSet::parse("ab1", LetterSetKind::Included).unwrap_err();
        assert_eq!(
            err,
            GuessError::InvalidLetterSet {
                kind: LetterSetKind::Included,
                letters: "ab1".to_string(),
            }
        );
    }

    #[test]
    fn letter_set_contains_ignores_non_ascii() {
        let set = LetterSet::parse("abc", LetterSetKind::Excluded).unwrap();
        assert!(!set.contains('é'));
        assert!(!set.contains('_'));
    }

    #[test]
    fn letter_set_display_sorted() {
        let set = LetterSet::parse("risengycuk", LetterSetKind::Excluded).unwrap();
        assert_eq!(set.to_string(), "CEGIKNRSUY");
    }
}
