//! Skillcast Generator
//!
//! Drives the external rule generator that turns staged skills into
//! agent-specific files.
//!
//! ## Features
//!
//! - Ordered command forms (local binary, then package runners), first success wins
//! - Bounded `--version` availability probe
//! - Interactive install through the first package manager found on `PATH`

#![deny(unsafe_code, dead_code, unused_imports, unused_variables, missing_docs)]

pub mod command;
pub mod generator;
pub mod installer;

pub use command::CommandForm;
pub use generator::{Generator, DEFAULT_PROBE_TIMEOUT};
pub use installer::{manual_install_commands, Installer, PackageManager};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{CommandForm, Generator, Installer};
}
