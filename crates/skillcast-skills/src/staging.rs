//! Staging directory consumed by the external generator

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::skill::Skill;

/// Header prepended to every staged file
pub const GENERATED_HEADER: &str = "<!-- Generated from SKILL.md - do not edit directly -->\n\n";

/// Full text written to a skill's staged file
pub fn staged_content(skill: &Skill) -> String {
    format!("{}{}", GENERATED_HEADER, skill.content)
}

/// Writes rendered skills into a fresh staging directory
pub struct StagingWriter {
    dir: PathBuf,
}

impl StagingWriter {
    /// Create a writer targeting `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Staging directory path
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Recreate the staging directory and write one `<name>.md` per skill.
    ///
    /// Skill names are used as file names as-is. Returns the number of
    /// skills written.
    pub fn write(&self, skills: &[Skill]) -> Result<usize> {
        if self.dir.exists() {
            fs::remove_dir_all(&self.dir)
                .with_context(|| format!("Failed to remove {:?}", self.dir))?;
        }
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create {:?}", self.dir))?;

        for skill in skills {
            let file_path = self.dir.join(format!("{}.md", skill.name));
            fs::write(&file_path, staged_content(skill))
                .with_context(|| format!("Failed to write {:?}", file_path))?;
            debug!("Staged {} at {:?}", skill.name, file_path);
        }

        info!("Generated staging content from {} skills", skills.len());
        Ok(skills.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn skill(name: &str, content: &str) -> Skill {
        Skill {
            name: name.to_string(),
            content: content.to_string(),
            path: PathBuf::from(name),
        }
    }

    #[test]
    fn test_write_twice_leaves_one_file_per_skill() {
        let tmp = TempDir::new().unwrap();
        let writer = StagingWriter::new(tmp.path().join(".ruler/skills"));

        writer
            .write(&[skill("one", "# one"), skill("stale", "# stale")])
            .unwrap();
        let count = writer
            .write(&[skill("one", "# one"), skill("two", "# two")])
            .unwrap();
        assert_eq!(count, 2);

        let mut files: Vec<_> = fs::read_dir(writer.dir())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        files.sort();
        assert_eq!(files, vec!["one.md", "two.md"]);
    }

    #[test]
    fn test_staged_file_has_header() {
        let tmp = TempDir::new().unwrap();
        let writer = StagingWriter::new(tmp.path().join("stage"));
        writer.write(&[skill("one", "# one\n\nBody")]).unwrap();

        let written = fs::read_to_string(writer.dir().join("one.md")).unwrap();
        assert_eq!(
            written,
            "<!-- Generated from SKILL.md - do not edit directly -->\n\n# one\n\nBody"
        );
    }
}
