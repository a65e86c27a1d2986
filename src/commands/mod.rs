//! Command implementations

pub mod guesses;

pub use guesses::{
    GuessConfig, GuessRequest, GuessResult, build_guess_lines, generate, list_guesses,
};
