//! Guess listing command
//!
//! Validates a request, generates every candidate for the template and
//! arranges them into output rows.

use crate::core::{GuessError, LetterSet, LetterSetKind, OutputCase, Template};
use crate::output::{DEFAULT_GUESSES_PER_LINE, GuessLines, format_lines};
use log::debug;
use std::num::NonZeroUsize;

/// Raw request for a guess listing, as supplied on the command line
#[derive(Debug, Clone)]
pub struct GuessConfig {
    pub template: Option<String>,
    pub exclude: Option<String>,
    pub include: Option<String>,
    pub case: OutputCase,
    pub num_guesses: i64,
}

impl GuessConfig {
    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: Some(template.into()),
            exclude: None,
            include: None,
            case: OutputCase::Title,
            num_guesses: DEFAULT_GUESSES_PER_LINE as i64,
        }
    }

    /// Check every argument and build a request ready for generation
    ///
    /// Checks run in order: include/exclude exclusivity, template presence,
    /// template, letter sets, then line width.
    ///
    /// # Errors
    ///
    /// Returns the first `GuessError` found.
    pub fn validate(&self) -> Result<GuessRequest, GuessError> {
        if let (Some(exclude), Some(include)) = (&self.exclude, &self.include) {
            return Err(GuessError::UsageError(format!(
                "the exclude and include options cannot be used together \
                 (exclude '{exclude}', include '{include}')"
            )));
        }

        let raw_template = self
            .template
            .as_deref()
            .ok_or_else(|| GuessError::UsageError("missing template argument".to_string()))?;
        let template = Template::parse(raw_template)?;
        debug!("template={template}");

        let excluded = parse_letters(self.exclude.as_deref(), LetterSetKind::Excluded)?;
        debug!("excluded_letters={excluded}");
        let included = parse_letters(self.include.as_deref(), LetterSetKind::Included)?;
        debug!("included_letters={included}");

        let line_width = usize::try_from(self.num_guesses)
            .ok()
            .and_then(NonZeroUsize::new)
            .ok_or(GuessError::InvalidConfiguration {
                num_guesses: self.num_guesses,
            })?;
        debug!("output_case={} num_guesses={line_width}", self.case);

        Ok(GuessRequest {
            template,
            excluded,
            included,
            case: self.case,
            line_width,
        })
    }
}

fn parse_letters(raw: Option<&str>, kind: LetterSetKind) -> Result<LetterSet, GuessError> {
    raw.map_or_else(|| Ok(LetterSet::default()), |raw| LetterSet::parse(raw, kind))
}

/// A fully validated guess listing request
#[derive(Debug, Clone)]
pub struct GuessRequest {
    pub template: Template,
    pub excluded: LetterSet,
    pub included: LetterSet,
    pub case: OutputCase,
    pub line_width: NonZeroUsize,
}

/// Result of a guess listing
pub struct GuessResult {
    pub total: usize,
    pub lines: GuessLines,
}

/// Generate candidate guesses for `template`
///
/// Letters are substituted in alphabetical order. A non-empty `included` set
/// takes precedence over `excluded`; otherwise every letter not in `excluded`
/// is used. Every letter excluded (or none included) gives an empty list.
///
/// # Examples
/// ```
/// use wordle_guesses::commands::generate;
/// use wordle_guesses::core::{LetterSet, LetterSetKind, Template};
///
/// let template = Template::parse("ma.am").unwrap();
/// let included = LetterSet::parse("dcx", LetterSetKind::Included).unwrap();
///
/// let guesses = generate(&template, &LetterSet::default(), &included);
/// assert_eq!(guesses, vec!["MACAM", "MADAM", "MAXAM"]);
/// ```
#[must_use]
pub fn generate(template: &Template, excluded: &LetterSet, included: &LetterSet) -> Vec<String> {
    let use_include = !included.is_empty();

    ('A'..='Z')
        .filter(|&letter| {
            if use_include {
                included.contains(letter)
            } else {
                !excluded.contains(letter)
            }
        })
        .map(|letter| template.substitute(letter))
        .collect()
}

/// Run the validated pipeline: generate, apply casing, split into rows
#[must_use]
pub fn build_guess_lines(request: &GuessRequest) -> GuessResult {
    let guesses: Vec<String> = generate(&request.template, &request.excluded, &request.included)
        .iter()
        .map(|guess| request.case.transform(guess))
        .collect();
    let total = guesses.len();
    debug!("generated {total} guesses");

    GuessResult {
        total,
        lines: format_lines(guesses, request.line_width),
    }
}

/// Validate `config` and produce the rows of guesses to print
///
/// # Errors
///
/// Returns a `GuessError` if any argument is invalid; no guesses are
/// generated in that case.
pub fn list_guesses(config: &GuessConfig) -> Result<GuessResult, GuessError> {
    let request = config.validate()?;
    Ok(build_guess_lines(&request))
}
