use anyhow::{Context, Result};
use dialoguer::Confirm;
use skillcast_types::{interpret_answer, Prompter};
use std::io::{self, BufRead, IsTerminal, Write};

/// Prompts on the controlling terminal, blocking until answered.
///
/// Falls back to reading one line from stdin when stdin is not a TTY,
/// so answers can be piped in.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn confirm(&self, question: &str, default: bool) -> Result<bool> {
        if io::stdin().is_terminal() {
            return Confirm::new()
                .with_prompt(question)
                .default(default)
                .interact()
                .context("Failed to read answer");
        }

        let hint = if default { "[Y/n]" } else { "[y/N]" };
        print!("{} {}: ", question, hint);
        io::stdout().flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(interpret_answer(&line, default))
    }
}
