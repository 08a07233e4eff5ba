//! Command forms used to reach the generator

use std::fmt;

/// A program plus its leading arguments, e.g. `npx @intellectronica/ruler`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandForm {
    /// Program to execute
    pub program: String,
    /// Arguments placed before any subcommand
    pub args: Vec<String>,
}

impl CommandForm {
    /// Split a command string on whitespace into program + args.
    ///
    /// Returns `None` for a blank string.
    #[must_use]
    pub fn parse(command: &str) -> Option<Self> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }

    /// Same form with `arg` appended
    #[must_use]
    pub fn with_arg(&self, arg: &str) -> Self {
        let mut args = self.args.clone();
        args.push(arg.to_string());
        Self {
            program: self.program.clone(),
            args,
        }
    }

    /// Build a tokio command for this form
    pub(crate) fn to_command(&self) -> tokio::process::Command {
        let mut cmd = tokio::process::Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

impl fmt::Display for CommandForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
