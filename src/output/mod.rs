//! Terminal output formatting
//!
//! Row chunking for guesses and printing of rows and diagnostics.

pub mod display;
pub mod formatters;

pub use display::{diagnostic_line, print_error, print_guess_lines, write_guess_lines};
pub use formatters::{DEFAULT_GUESSES_PER_LINE, GuessLines, format_lines, render_line};
