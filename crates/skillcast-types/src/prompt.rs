//! Interactive yes/no decisions
//!
//! Workflow code asks through [`Prompter`] so tests can substitute
//! deterministic answers for terminal input.

use anyhow::Result;

/// Something that can answer a yes/no question
pub trait Prompter {
    /// Ask `question`; `default` is the answer for an empty reply
    fn confirm(&self, question: &str, default: bool) -> Result<bool>;
}

impl<F> Prompter for F
where
    F: Fn(&str, bool) -> bool,
{
    fn confirm(&self, question: &str, default: bool) -> Result<bool> {
        Ok(self(question, default))
    }
}

/// Interpret a raw typed answer.
///
/// Only `y`/`yes` and `n`/`no` (any case) are decisive; anything else,
/// including an empty line, yields `default`.
pub fn interpret_answer(raw: &str, default: bool) -> bool {
    match raw.trim().to_lowercase().as_str() {
        "y" | "yes" => true,
        "n" | "no" => false,
        _ => default,
    }
}
