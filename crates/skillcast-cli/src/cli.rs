//! Command-line surface and request validation

use anyhow::{Context, Result};
use clap::Parser;
use skillcast_types::{Agent, ApplyError};
use std::path::{Path, PathBuf};

fn after_help() -> String {
    format!(
        "Supported agents:\n  {}\n\n\
         Examples:\n  \
         skillcast ~/projects/my-app --agent cursor\n  \
         skillcast ~/projects/my-app --agent cursor,copilot,aider\n  \
         skillcast ~/projects/my-app --all\n  \
         skillcast ~/projects/my-app --agent cursor --force",
        Agent::supported_list()
    )
}

/// Apply skills to AI coding agent configuration files in a project.
///
/// Skills are rendered, passed through the rule generator, and the files
/// each selected agent reads are copied into the target project.
#[derive(Parser, Debug)]
#[command(name = "skillcast")]
#[command(version)]
#[command(about = "Apply skills to AI coding agent configuration files in a project")]
#[command(after_help = after_help())]
pub struct Cli {
    /// Project directory to copy agent files into
    pub target: PathBuf,

    /// Comma-separated list of agents (e.g. cursor,copilot,zed)
    #[arg(short, long = "agent", value_name = "AGENTS", value_delimiter = ',')]
    pub agents: Vec<String>,

    /// Apply for all supported agents
    #[arg(long)]
    pub all: bool,

    /// Overwrite existing files without prompting
    #[arg(short, long)]
    pub force: bool,

    /// Directory holding the skills and receiving generator output
    /// (defaults to the current directory)
    #[arg(long, value_name = "DIR", env = "SKILLCAST_ROOT")]
    pub root: Option<PathBuf>,

    /// Enable debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Agents to apply, deduplicated in the order given.
    ///
    /// `--all` wins over `--agent`. All unknown identifiers are reported together.
    pub fn select_agents(&self) -> Result<Vec<Agent>, ApplyError> {
        if self.all {
            return Ok(Agent::ALL.to_vec());
        }

        let mut agents = Vec::new();
        let mut unknown = Vec::new();
        for raw in self.agents.iter().filter(|a| !a.trim().is_empty()) {
            match raw.parse::<Agent>() {
                Ok(agent) if !agents.contains(&agent) => agents.push(agent),
                Ok(_) => {}
                Err(id) if !unknown.contains(&id) => unknown.push(id),
                Err(_) => {}
            }
        }

        if !unknown.is_empty() {
            return Err(ApplyError::UnknownAgents { unknown });
        }
        if agents.is_empty() {
            return Err(ApplyError::NoAgentsSelected);
        }
        Ok(agents)
    }

    /// Tool root: `--root`, `SKILLCAST_ROOT`, or the current directory
    pub fn resolve_root(&self) -> Result<PathBuf> {
        let root = match &self.root {
            Some(root) => root.clone(),
            None => std::env::current_dir().context("Failed to read current directory")?,
        };
        root.canonicalize()
            .with_context(|| format!("Tool root not found: {}", root.display()))
    }
}

/// One validated apply invocation
#[derive(Debug, Clone)]
pub struct ApplyRequest {
    /// Absolute target project directory
    pub target: PathBuf,
    /// Agents to apply, non-empty
    pub agents: Vec<Agent>,
    /// Overwrite without prompting
    pub force: bool,
}

impl ApplyRequest {
    /// Validate `cli` against the tool `root`
    pub fn from_cli(cli: &Cli, root: &Path) -> Result<Self> {
        let agents = cli.select_agents()?;

        if !cli.target.exists() {
            return Err(ApplyError::TargetNotFound(cli.target.clone()).into());
        }
        if !cli.target.is_dir() {
            return Err(ApplyError::TargetNotDirectory(cli.target.clone()).into());
        }

        let target = cli
            .target
            .canonicalize()
            .with_context(|| format!("Failed to resolve {}", cli.target.display()))?;
        if target == root {
            return Err(ApplyError::TargetIsToolRoot(target).into());
        }

        Ok(Self {
            target,
            agents,
            force: cli.force,
        })
    }

    /// Agent identifiers joined for display
    pub fn agent_list(&self) -> String {
        self.agents
            .iter()
            .map(|a| a.id())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use skillcast_types::ErrorKind;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["skillcast"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_agents_are_normalized_and_deduplicated() {
        let cli = parse(&["/tmp", "--agent", "Cursor, zed", "-a", "cursor,aider"]);
        assert_eq!(
            cli.select_agents().unwrap(),
            vec![Agent::Cursor, Agent::Zed, Agent::Aider]
        );
    }

    #[test]
    fn test_unknown_agents_reported_together() {
        let cli = parse(&["/tmp", "--agent", "cursor,Vim,emacs,vim"]);
        match cli.select_agents() {
            Err(ApplyError::UnknownAgents { unknown }) => {
                assert_eq!(unknown, vec!["vim", "emacs"]);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_all_wins() {
        let cli = parse(&["/tmp", "--all", "--agent", "not-an-agent"]);
        assert_eq!(cli.select_agents().unwrap().len(), Agent::ALL.len());
    }

    #[test]
    fn test_no_agents_selected() {
        let cli = parse(&["/tmp"]);
        assert!(matches!(
            cli.select_agents(),
            Err(ApplyError::NoAgentsSelected)
        ));
        let cli = parse(&["/tmp", "--agent", " , "]);
        assert!(matches!(
            cli.select_agents(),
            Err(ApplyError::NoAgentsSelected)
        ));
    }

    #[test]
    fn test_help_is_not_an_error_exit() {
        let err = Cli::try_parse_from(["skillcast", "--help"]).unwrap_err();
        assert!(!err.use_stderr());
        assert!(err.to_string().contains("claude"));

        let err = Cli::try_parse_from(["skillcast", "--agent", "cursor"]).unwrap_err();
        assert!(err.use_stderr());
    }

    #[test]
    fn test_request_rejects_missing_target() {
        let root = TempDir::new().unwrap();
        let missing = root.path().join("missing");
        let cli = parse(&[missing.to_str().unwrap(), "--agent", "cursor"]);

        let err = ApplyRequest::from_cli(&cli, root.path()).unwrap_err();
        let err = err.downcast_ref::<ApplyError>().unwrap();
        assert_eq!(err.kind(), ErrorKind::TargetNotFound);
    }

    #[test]
    fn test_request_rejects_tool_root_as_target() {
        let root = TempDir::new().unwrap();
        let root_path = root.path().canonicalize().unwrap();
        let cli = parse(&[root_path.to_str().unwrap(), "--all"]);

        let err = ApplyRequest::from_cli(&cli, &root_path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ApplyError>(),
            Some(ApplyError::TargetIsToolRoot(_))
        ));
    }

    #[test]
    fn test_request_is_absolute() {
        let root = TempDir::new().unwrap();
        let target = TempDir::new().unwrap();
        let cli = parse(&[target.path().to_str().unwrap(), "-a", "claude", "-f"]);

        let request = ApplyRequest::from_cli(&cli, &root.path().canonicalize().unwrap()).unwrap();
        assert!(request.target.is_absolute());
        assert!(request.force);
        assert_eq!(request.agent_list(), "claude");
    }
}
