//! Display functions for command results

use super::formatters::{GuessLines, render_line};
use colored::Colorize;
use std::fmt::Display;
use std::io::{self, IsTerminal, Write};

/// Write guess rows to `out`, one tab-separated row per line
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_guess_lines<W: Write>(out: &mut W, lines: &GuessLines) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{}", render_line(line))?;
    }
    Ok(())
}

/// Print guess rows to stdout
///
/// # Errors
///
/// Returns an error if stdout cannot be written (e.g. a closed pipe).
pub fn print_guess_lines(lines: &GuessLines) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_guess_lines(&mut out, lines)?;
    out.flush()
}

/// Format a diagnostic line as `<program>: <message>`
///
/// The prefix is styled only when `color` is set.
#[must_use]
pub fn diagnostic_line(program: &str, message: &dyn Display, color: bool) -> String {
    let prefix = format!("{program}:");
    if color {
        format!("{} {message}", prefix.red().bold())
    } else {
        format!("{prefix} {message}")
    }
}

/// Print a single diagnostic line, prefixed by the program name, to stderr
///
/// Colour follows stderr being a terminal, not stdout.
pub fn print_error(program: &str, message: &dyn Display) {
    let color = io::stderr().is_terminal();
    colored::control::set_override(color);
    eprintln!("{}", diagnostic_line(program, message, color));
}
