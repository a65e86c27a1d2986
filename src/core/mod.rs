//! Core domain types for guess generation
//!
//! Templates, letter sets, output casing and the validation errors they raise.
//! Everything here is pure and independently testable.

mod case;
mod error;
mod letters;
mod template;

pub use case::OutputCase;
pub use error::{GuessError, LetterSetKind, TemplateProblem};
pub use letters::LetterSet;
pub use template::{BLANK_CHAR, CHANGE_CHAR, TEMPLATE_LEN, Template};
