//! Skillcast Types - shared vocabulary for the skillcast workspace
//!
//! Holds the fixed agent-to-file table, the error kinds of an apply run,
//! and the prompt capability used wherever the workflow asks the user.

pub mod agent;
pub mod error;
pub mod prompt;

pub use agent::{all_generated_files, resolve, Agent};
pub use error::{ApplyError, ErrorKind};
pub use prompt::{interpret_answer, Prompter};
