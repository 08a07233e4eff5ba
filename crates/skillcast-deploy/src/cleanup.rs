//! Removal of staging content and generator output from the tool root
//!
//! Every removal is attempted independently. A failure is logged and
//! recorded but never stops the remaining removals.

use skillcast_types::all_generated_files;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// What a cleanup pass did
#[derive(Debug, Default)]
pub struct CleanupReport {
    /// Paths removed
    pub removed: Vec<PathBuf>,
    /// Paths that could not be removed, with the reason
    pub failures: Vec<(PathBuf, String)>,
}

impl CleanupReport {
    /// True when no removal failed
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    fn record(&mut self, path: &Path, outcome: io::Result<bool>) {
        match outcome {
            Ok(true) => {
                debug!("Removed {:?}", path);
                self.removed.push(path.to_path_buf());
            }
            Ok(false) => {}
            Err(e) => {
                warn!("Failed to remove {:?}: {}", path, e);
                self.failures.push((path.to_path_buf(), e.to_string()));
            }
        }
    }
}

/// Best-effort, idempotent cleanup of the tool root
#[derive(Debug, Clone)]
pub struct Cleanup {
    root: PathBuf,
    staging_dir: PathBuf,
    staging_root: PathBuf,
}

impl Cleanup {
    /// `staging_dir` is removed outright; `staging_root` only when left empty
    pub fn new(
        root: impl Into<PathBuf>,
        staging_dir: impl Into<PathBuf>,
        staging_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            root: root.into(),
            staging_dir: staging_dir.into(),
            staging_root: staging_root.into(),
        }
    }

    /// Remove the staging directory, every file any agent could have had
    /// generated in the root, and the staging root if it is empty.
    pub fn run(&self) -> CleanupReport {
        let mut report = CleanupReport::default();

        report.record(&self.staging_dir, remove_path(&self.staging_dir));

        for file in all_generated_files() {
            let path = self.root.join(file);
            report.record(&path, remove_path(&path));
            self.prune_empty_parents(&path, &mut report);
        }

        report.record(&self.staging_root, remove_if_empty(&self.staging_root));

        if !report.is_clean() {
            warn!("Cleanup left {} path(s) behind", report.failures.len());
        }
        report
    }

    /// Remove directories between `path` and the root that are now empty
    fn prune_empty_parents(&self, path: &Path, report: &mut CleanupReport) {
        let mut dir = path.parent();
        while let Some(current) = dir {
            if current == self.root || !current.starts_with(&self.root) {
                break;
            }
            match remove_if_empty(current) {
                Ok(true) => report.record(current, Ok(true)),
                Ok(false) => break,
                Err(e) => {
                    report.record(current, Err(e));
                    break;
                }
            }
            dir = current.parent();
        }
    }
}

/// Remove a file, symlink or directory tree. `Ok(false)` if nothing was there.
fn remove_path(path: &Path) -> io::Result<bool> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };

    if metadata.is_dir() {
        fs::remove_dir_all(path)?;
    } else {
        fs::remove_file(path)?;
    }
    Ok(true)
}

/// Remove `dir` only if it is an empty directory
fn remove_if_empty(dir: &Path) -> io::Result<bool> {
    if !dir.is_dir() {
        return Ok(false);
    }
    if fs::read_dir(dir)?.next().is_some() {
        return Ok(false);
    }
    fs::remove_dir(dir)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "x").unwrap();
    }

    fn cleanup_for(root: &Path) -> Cleanup {
        Cleanup::new(root, root.join(".ruler/skills"), root.join(".ruler"))
    }

    #[test]
    fn test_removes_staging_and_all_generated_files() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        touch(&root.join(".ruler/skills/one.md"));
        touch(&root.join("AGENTS.md"));
        touch(&root.join("CLAUDE.md"));
        touch(&root.join(".idx/airules.md"));
        touch(&root.join("skills/keep/SKILL.md"));

        let report = cleanup_for(root).run();

        assert!(report.is_clean());
        assert!(!root.join(".ruler").exists());
        assert!(!root.join("AGENTS.md").exists());
        assert!(!root.join("CLAUDE.md").exists());
        assert!(!root.join(".idx").exists());
        assert!(root.join("skills/keep/SKILL.md").exists());
    }

    #[test]
    fn test_keeps_non_empty_staging_root_and_parents() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        touch(&root.join(".ruler/skills/one.md"));
        touch(&root.join(".ruler/ruler.toml"));
        touch(&root.join(".trae/rules/project_rules.md"));
        touch(&root.join(".trae/other.md"));

        cleanup_for(root).run();

        assert!(!root.join(".ruler/skills").exists());
        assert!(root.join(".ruler/ruler.toml").exists());
        assert!(!root.join(".trae/rules").exists());
        assert!(root.join(".trae/other.md").exists());
    }

    #[test]
    fn test_generated_directory_is_removed_recursively() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        touch(&root.join(".clinerules/01-rules.md"));

        let report = cleanup_for(root).run();

        assert!(report.is_clean());
        assert!(!root.join(".clinerules").exists());
    }

    #[test]
    fn test_idempotent() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        touch(&root.join("AGENTS.md"));

        let first = cleanup_for(root).run();
        let second = cleanup_for(root).run();

        assert_eq!(first.removed, vec![root.join("AGENTS.md")]);
        assert!(second.removed.is_empty());
        assert!(second.is_clean());
    }
}
