//! Copying generated files into the target project

use anyhow::{bail, Context, Result};
use skillcast_types::Prompter;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Outcome of one copy pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyResult {
    /// Relative paths written, in resolution order
    pub copied: Vec<String>,
    /// Relative paths left alone because the user declined to overwrite
    pub declined: Vec<String>,
}

/// Copies generated files from the tool root into a target directory
pub struct CopyEngine<'a> {
    source_root: PathBuf,
    target_root: PathBuf,
    force: bool,
    prompter: &'a dyn Prompter,
}

impl<'a> CopyEngine<'a> {
    /// Create an engine; existing destination files are confirmed through `prompter`
    pub fn new(
        source_root: impl Into<PathBuf>,
        target_root: impl Into<PathBuf>,
        prompter: &'a dyn Prompter,
    ) -> Self {
        Self {
            source_root: source_root.into(),
            target_root: target_root.into(),
            force: false,
            prompter,
        }
    }

    /// Overwrite existing destination files without asking
    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Copy `files` (relative paths) in order.
    ///
    /// Files the generator did not produce are skipped; a generated path that
    /// is not a regular file is an error. Nothing is rolled back if a later
    /// copy fails.
    pub fn copy(&self, files: &[&str]) -> Result<CopyResult> {
        let mut result = CopyResult::default();

        for file in files {
            let source = self.source_root.join(file);
            let dest = self.target_root.join(file);

            if !source.exists() {
                debug!("Not generated, skipping {}", file);
                continue;
            }
            if !source.is_file() {
                bail!("Generated {} is not a regular file: {:?}", file, source);
            }

            if dest.exists() && !self.force && !self.confirm_overwrite(file)? {
                println!("   Skipped {}", file);
                result.declined.push((*file).to_string());
                continue;
            }

            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {:?}", parent))?;
            }

            fs::copy(&source, &dest)
                .with_context(|| format!("Failed to copy {:?} to {:?}", source, dest))?;
            debug!("Copied {} to {:?}", file, dest);
            result.copied.push((*file).to_string());
        }

        Ok(result)
    }

    fn confirm_overwrite(&self, file: &str) -> Result<bool> {
        self.prompter.confirm(
            &format!("⚠️  {} already exists in target. Overwrite?", file),
            false,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use tempfile::TempDir;

    struct Fixture {
        source: TempDir,
        target: TempDir,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                source: TempDir::new().unwrap(),
                target: TempDir::new().unwrap(),
            }
        }

        fn generated(&self, file: &str, content: &str) {
            let path = self.source.path().join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }

        fn existing(&self, file: &str, content: &str) {
            let path = self.target.path().join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }

        fn read_target(&self, file: &str) -> String {
            fs::read_to_string(self.target.path().join(file)).unwrap()
        }
    }

    fn never_asked(_: &str, _: bool) -> bool {
        panic!("unexpected prompt")
    }

    #[test]
    fn test_copies_and_creates_parent_dirs() {
        let fx = Fixture::new();
        fx.generated("AGENTS.md", "agents");
        fx.generated(".idx/airules.md", "rules");

        let engine = CopyEngine::new(fx.source.path(), fx.target.path(), &never_asked);
        let result = engine.copy(&["AGENTS.md", ".idx/airules.md"]).unwrap();

        assert_eq!(result.copied, vec!["AGENTS.md", ".idx/airules.md"]);
        assert_eq!(fx.read_target(".idx/airules.md"), "rules");
    }

    #[test]
    fn test_missing_source_is_skipped() {
        let fx = Fixture::new();
        fx.generated("CLAUDE.md", "claude");

        let engine = CopyEngine::new(fx.source.path(), fx.target.path(), &never_asked);
        let result = engine.copy(&["AGENTS.md", "CLAUDE.md"]).unwrap();

        assert_eq!(result.copied, vec!["CLAUDE.md"]);
        assert!(!fx.target.path().join("AGENTS.md").exists());
    }

    #[test]
    fn test_generated_directory_is_an_error() {
        let fx = Fixture::new();
        fx.generated("AGENTS.md", "agents");
        fs::create_dir_all(fx.source.path().join(".clinerules")).unwrap();

        let engine = CopyEngine::new(fx.source.path(), fx.target.path(), &never_asked);
        let err = engine.copy(&["AGENTS.md", ".clinerules"]).unwrap_err();

        assert!(err.to_string().contains(".clinerules"));
        assert_eq!(fx.read_target("AGENTS.md"), "agents");
        assert!(!fx.target.path().join(".clinerules").exists());
    }

    #[test]
    fn test_force_overwrites_without_prompting() {
        let fx = Fixture::new();
        fx.generated("AGENTS.md", "new");
        fx.existing("AGENTS.md", "old");

        let engine =
            CopyEngine::new(fx.source.path(), fx.target.path(), &never_asked).force(true);
        let result = engine.copy(&["AGENTS.md"]).unwrap();

        assert_eq!(result.copied, vec!["AGENTS.md"]);
        assert_eq!(fx.read_target("AGENTS.md"), "new");
    }

    #[test]
    fn test_declined_overwrite_leaves_file_untouched() {
        let fx = Fixture::new();
        fx.generated("AGENTS.md", "new");
        fx.generated("CLAUDE.md", "claude");
        fx.existing("AGENTS.md", "old");

        let questions = RefCell::new(Vec::new());
        let say_no = |question: &str, default: bool| {
            assert!(!default);
            questions.borrow_mut().push(question.to_string());
            false
        };

        let engine = CopyEngine::new(fx.source.path(), fx.target.path(), &say_no);
        let result = engine.copy(&["AGENTS.md", "CLAUDE.md"]).unwrap();

        assert_eq!(result.copied, vec!["CLAUDE.md"]);
        assert_eq!(result.declined, vec!["AGENTS.md"]);
        assert_eq!(fx.read_target("AGENTS.md"), "old");
        assert_eq!(questions.borrow().len(), 1);
        assert!(questions.borrow()[0].contains("AGENTS.md"));
    }

    #[test]
    fn test_confirmed_overwrite() {
        let fx = Fixture::new();
        fx.generated("WARP.md", "new");
        fx.existing("WARP.md", "old");

        let say_yes = |_: &str, _: bool| true;
        let engine = CopyEngine::new(fx.source.path(), fx.target.path(), &say_yes);
        let result = engine.copy(&["WARP.md"]).unwrap();

        assert_eq!(result.copied, vec!["WARP.md"]);
        assert_eq!(fx.read_target("WARP.md"), "new");
    }
}
