//! Skillcast Skills
//!
//! Reads skill definitions (a folder per skill holding SKILL.md with
//! optional YAML frontmatter), renders each to markdown, and stages the
//! rendered files for the external rule generator.
//!
//! ## Flow
//!
//! 1. [`SkillLoader`] scans the skills root and renders every skill
//! 2. [`StagingWriter`] recreates the staging directory and writes `<name>.md` files

#![deny(unsafe_code, dead_code, unused_imports, unused_variables, missing_docs)]

pub mod loader;
pub mod skill;
pub mod staging;

pub use loader::SkillLoader;
pub use skill::{Skill, SkillMetadata, SKILL_FILE};
pub use staging::{staged_content, StagingWriter, GENERATED_HEADER};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Skill, SkillLoader, StagingWriter};
}
