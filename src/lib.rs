//! Wordle Guesses
//!
//! Lists candidate Wordle guesses by substituting each permitted letter into
//! the single change position of a 5-character template.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_guesses::commands::{GuessConfig, list_guesses};
//!
//! let mut config = GuessConfig::new(".a_am");
//! config.exclude = Some("risengycuk".to_string());
//!
//! let result = list_guesses(&config).unwrap();
//! assert_eq!(result.total, 16);
//! assert_eq!(result.lines[0], vec!["Aa_am", "Ba_am", "Da_am", "Fa_am", "Ha_am"]);
//! ```

// Core domain types
pub mod core;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
