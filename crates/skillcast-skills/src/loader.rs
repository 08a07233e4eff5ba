//! Skill discovery under a single skills root
//!
//! Every immediate subdirectory holding a SKILL.md becomes one skill.

use anyhow::{Context, Result};
use skillcast_types::ApplyError;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::skill::{Skill, SKILL_FILE};

/// Loads skills from one skills root
pub struct SkillLoader {
    root: PathBuf,
}

impl SkillLoader {
    /// Create a loader for `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Skills root this loader scans
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load every skill under the root, ordered by folder name.
    ///
    /// Folders without a definition file are skipped silently; folders whose
    /// definition cannot be parsed are skipped with a warning.
    pub fn load(&self) -> Result<Vec<Skill>> {
        if !self.root.is_dir() {
            return Err(ApplyError::SkillsDirNotFound(self.root.clone()).into());
        }

        let mut dirs = Vec::new();
        let entries = std::fs::read_dir(&self.root)
            .with_context(|| format!("Failed to read directory {:?}", self.root))?;
        for entry in entries {
            let path = entry?.path();
            if path.is_dir() {
                dirs.push(path);
            }
        }
        dirs.sort();

        let mut skills: Vec<Skill> = Vec::new();
        let mut seen = HashSet::new();

        for dir in dirs {
            if !dir.join(SKILL_FILE).is_file() {
                debug!("Skipping {:?}: no {}", dir, SKILL_FILE);
                continue;
            }

            match Skill::from_dir(&dir) {
                Ok(skill) => {
                    debug!("Loaded skill: {} at {:?}", skill.name, dir);
                    if !seen.insert(skill.name.clone()) {
                        warn!(
                            "Duplicate skill name '{}' at {:?}; its staged file replaces the earlier one",
                            skill.name, dir
                        );
                    }
                    skills.push(skill);
                }
                Err(e) => {
                    warn!("Skipping {:?}: {:#}", dir, e);
                }
            }
        }

        info!("Loaded {} skills from {:?}", skills.len(), self.root);
        Ok(skills)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillcast_types::ErrorKind;
    use std::fs;
    use tempfile::TempDir;

    fn write_skill(root: &Path, dir: &str, content: &str) {
        let dir = root.join(dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(SKILL_FILE), content).unwrap();
    }

    #[test]
    fn test_missing_root_is_configuration_error() {
        let tmp = TempDir::new().unwrap();
        let err = SkillLoader::new(tmp.path().join("missing")).load().unwrap_err();
        let err = err.downcast_ref::<ApplyError>().unwrap();
        assert!(matches!(err, ApplyError::SkillsDirNotFound(_)));
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_counts_only_folders_with_definition() {
        let tmp = TempDir::new().unwrap();
        write_skill(tmp.path(), "b-skill", "---\nname: beta\n---\nB body");
        write_skill(tmp.path(), "a-skill", "A body");
        write_skill(tmp.path(), "c-skill", "---\ndescription: Third\n---\nC body");
        fs::create_dir(tmp.path().join("no-definition")).unwrap();
        fs::create_dir_all(tmp.path().join("nested/deeper")).unwrap();
        fs::write(tmp.path().join("README.md"), "not a skill").unwrap();

        let skills = SkillLoader::new(tmp.path()).load().unwrap();
        let names: Vec<_> = skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["a-skill", "beta", "c-skill"]);
        assert_eq!(skills[2].content, "# c-skill\n\n> Third\n\nC body");
    }

    #[test]
    fn test_unparsable_definition_is_skipped() {
        let tmp = TempDir::new().unwrap();
        write_skill(tmp.path(), "good", "Good body");
        write_skill(tmp.path(), "bad", "---\nname: [oops\n---\nBody");

        let skills = SkillLoader::new(tmp.path()).load().unwrap();
        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0].name, "good");
    }

    #[test]
    fn test_empty_root() {
        let tmp = TempDir::new().unwrap();
        assert!(SkillLoader::new(tmp.path()).load().unwrap().is_empty());
    }
}
