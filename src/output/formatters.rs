//! Formatting utilities for guess output

use std::num::NonZeroUsize;

/// Rows of guesses, in output order
pub type GuessLines = Vec<Vec<String>>;

/// Default number of guesses per row
pub const DEFAULT_GUESSES_PER_LINE: usize = 5;

/// Split guesses into consecutive rows of `line_width`
///
/// The last row may be shorter; no row is ever empty, so an empty input
/// produces no rows.
#[must_use]
pub fn format_lines(guesses: Vec<String>, line_width: NonZeroUsize) -> GuessLines {
    let width = line_width.get();
    let mut lines = Vec::with_capacity(guesses.len().div_ceil(width));
    let mut guesses = guesses.into_iter().peekable();

    while guesses.peek().is_some() {
        lines.push(guesses.by_ref().take(width).collect());
    }

    lines
}

/// Render one row as tab-separated text
#[must_use]
pub fn render_line(line: &[String]) -> String {
    line.join("\t")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn width(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn alphabet_guesses() -> Vec<String> {
        ('A'..='Z').map(|c| format!("{c}A_AM")).collect()
    }

    #[test]
    fn format_full_alphabet_default_width() {
        let lines = format_lines(alphabet_guesses(), width(5));

        assert_eq!(lines.len(), 6);
        for line in &lines[..5] {
            assert_eq!(line.len(), 5);
        }
        assert_eq!(lines[5], vec!["ZA_AM".to_string()]);
    }

    #[test]
    fn format_preserves_order() {
        let guesses = alphabet_guesses();
        let lines = format_lines(guesses.clone(), width(4));
        let flattened: Vec<String> = lines.into_iter().flatten().collect();
        assert_eq!(flattened, guesses);
    }

    #[test]
    fn format_exact_multiple_has_no_short_row() {
        let guesses: Vec<String> = alphabet_guesses().into_iter().take(10).collect();
        let lines = format_lines(guesses, width(5));
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|line| line.len() == 5));
    }

    #[test]
    fn format_empty_input() {
        let lines = format_lines(Vec::new(), width(5));
        assert!(lines.is_empty());
    }

    #[test]
    fn format_width_one() {
        let lines = format_lines(alphabet_guesses(), width(1));
        assert_eq!(lines.len(), 26);
        assert!(lines.iter().all(|line| line.len() == 1));
    }

    #[test]
    fn format_width_larger_than_input() {
        let lines = format_lines(alphabet_guesses(), width(100));
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].len(), 26);
    }

    #[test]
    fn render_line_joins_with_tabs() {
        let line = vec!["Aa_am".to_string(), "Ba_am".to_string(), "Da_am".to_string()];
        assert_eq!(render_line(&line), "Aa_am\tBa_am\tDa_am");
    }

    #[test]
    fn render_line_single_guess() {
        assert_eq!(render_line(&["Za_am".to_string()]), "Za_am");
    }
}
