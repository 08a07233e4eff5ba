//! Error types for the apply workflow

use std::path::PathBuf;
use thiserror::Error;

/// Broad category of an [`ApplyError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad input or missing skill sources
    Configuration,
    /// The generator (or a way to install it) is missing
    DependencyMissing,
    /// Every generator invocation failed
    ExternalTool,
    /// The target project cannot be used
    TargetNotFound,
}

/// Terminal failures of an apply run
#[derive(Debug, Error)]
pub enum ApplyError {
    /// Skills root is missing
    #[error("Skills directory not found: {}", .0.display())]
    SkillsDirNotFound(PathBuf),

    /// Skills root holds no usable skill
    #[error("No skills found in {}", .0.display())]
    NoSkills(PathBuf),

    /// One or more agent identifiers are not in the table
    #[error("Unknown agent(s): {}", .unknown.join(", "))]
    UnknownAgents {
        /// Normalized identifiers that did not match
        unknown: Vec<String>,
    },

    /// Neither `--agent` nor `--all` was given
    #[error("Specify --agent <agents> or --all")]
    NoAgentsSelected,

    /// Target resolves to the directory the generator writes into
    #[error("Target path must differ from the tool root: {}", .0.display())]
    TargetIsToolRoot(PathBuf),

    /// Staging directory overlaps the skills directory or the tool root
    #[error("Staging directory {} must be kept apart from the skills directory and the tool root", .0.display())]
    StagingOverlap(PathBuf),

    /// No supported package manager on PATH
    #[error("No supported package manager found (bun or npm) to install {package}")]
    NoPackageManager {
        /// Package that needs installing
        package: String,
    },

    /// User refused the install prompt
    #[error("Installation of {package} was declined")]
    InstallDeclined {
        /// Package that would have been installed
        package: String,
    },

    /// Install command exited unsuccessfully
    #[error("Failed to install {package} with {manager}: {reason}")]
    InstallFailed {
        /// Package manager used
        manager: String,
        /// Package that failed to install
        package: String,
        /// Failure reason
        reason: String,
    },

    /// Generator still does not answer after installing it
    #[error("{package} is still unavailable after installation")]
    GeneratorUnavailable {
        /// Package that was installed
        package: String,
    },

    /// All generator command forms failed
    #[error("Error running {package} ({})", .attempts.join("; "))]
    GeneratorFailed {
        /// Generator package
        package: String,
        /// One summary line per attempted command form
        attempts: Vec<String>,
    },

    /// Target path does not exist
    #[error("Target path does not exist: {}", .0.display())]
    TargetNotFound(PathBuf),

    /// Target path exists but is not a directory
    #[error("Target path is not a directory: {}", .0.display())]
    TargetNotDirectory(PathBuf),
}

impl ApplyError {
    /// Package the user should install by hand, for dependency and
    /// generator failures
    pub fn install_hint(&self) -> Option<&str> {
        match self {
            ApplyError::NoPackageManager { package }
            | ApplyError::InstallDeclined { package }
            | ApplyError::InstallFailed { package, .. }
            | ApplyError::GeneratorUnavailable { package }
            | ApplyError::GeneratorFailed { package, .. } => Some(package),
            _ => None,
        }
    }

    /// Category used for reporting
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApplyError::SkillsDirNotFound(_)
            | ApplyError::NoSkills(_)
            | ApplyError::UnknownAgents { .. }
            | ApplyError::NoAgentsSelected
            | ApplyError::TargetIsToolRoot(_)
            | ApplyError::StagingOverlap(_) => ErrorKind::Configuration,
            ApplyError::NoPackageManager { .. }
            | ApplyError::InstallDeclined { .. }
            | ApplyError::InstallFailed { .. }
            | ApplyError::GeneratorUnavailable { .. } => ErrorKind::DependencyMissing,
            ApplyError::GeneratorFailed { .. } => ErrorKind::ExternalTool,
            ApplyError::TargetNotFound(_) | ApplyError::TargetNotDirectory(_) => {
                ErrorKind::TargetNotFound
            }
        }
    }
}
