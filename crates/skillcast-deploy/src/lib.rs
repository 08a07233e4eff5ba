//! Skillcast Deploy
//!
//! Moves generator output from the tool root into a target project and
//! removes every transient file afterwards.

#![deny(unsafe_code, dead_code, unused_imports, unused_variables, missing_docs)]

pub mod cleanup;
pub mod copy;

pub use cleanup::{Cleanup, CleanupReport};
pub use copy::{CopyEngine, CopyResult};
