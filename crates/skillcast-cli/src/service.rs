use crate::cli::ApplyRequest;
use crate::config::Config;
use anyhow::Result;
use skillcast_deploy::{Cleanup, CopyEngine, CopyResult};
use skillcast_generator::{Generator, Installer};
use skillcast_skills::{Skill, SkillLoader, StagingWriter};
use skillcast_types::{resolve, ApplyError, Prompter};
use std::path::PathBuf;
use tracing::{debug, info};

/// Apply service - runs one skills-to-agent-files pass
pub struct ApplyService {
    config: Config,
    root: PathBuf,
    installer: Installer,
}

impl ApplyService {
    /// Create a service for the tool `root`, detecting package managers on PATH
    pub fn new(config: Config, root: PathBuf) -> Self {
        Self {
            config,
            root,
            installer: Installer::detect(),
        }
    }

    /// Replace the detected package managers
    pub fn with_installer(mut self, installer: Installer) -> Self {
        self.installer = installer;
        self
    }

    fn generator(&self) -> Generator {
        Generator::new(
            self.config.command_forms(),
            &self.config.generator.subcommand,
            &self.config.generator.package,
            &self.root,
        )
        .with_probe_timeout(self.config.probe_timeout())
    }

    /// Load the skills and make sure the generator exists, then stage,
    /// generate and copy.
    ///
    /// Configuration errors (overlapping staging, missing or empty skills
    /// directory) return before anything in the tool root is touched. From
    /// staging onwards the tool root is cleaned up whether or not the rest
    /// of the run succeeds.
    pub async fn run(&self, request: &ApplyRequest, prompter: &dyn Prompter) -> Result<CopyResult> {
        self.config.validate(&self.root)?;

        let skills_dir = self.config.skills_dir(&self.root);
        let skills = SkillLoader::new(&skills_dir).load()?;
        if skills.is_empty() {
            return Err(ApplyError::NoSkills(skills_dir).into());
        }

        let generator = self.generator();
        self.installer.ensure_installed(&generator, prompter).await?;

        println!("Applying skills to: {}", request.target.display());
        println!("Agents: {}\n", request.agent_list());

        let outcome = self.apply(&generator, &skills, request, prompter).await;

        let report = Cleanup::new(
            &self.root,
            self.config.staging_dir(&self.root),
            self.config.staging_root(&self.root),
        )
        .run();
        debug!("Cleanup removed {} path(s)", report.removed.len());

        outcome
    }

    async fn apply(
        &self,
        generator: &Generator,
        skills: &[Skill],
        request: &ApplyRequest,
        prompter: &dyn Prompter,
    ) -> Result<CopyResult> {
        let staged = StagingWriter::new(self.config.staging_dir(&self.root)).write(skills)?;
        println!("Staged {} skill(s)", staged);

        println!(
            "Running {} {}...",
            generator.package(),
            self.config.generator.subcommand
        );
        generator.apply().await?;

        let files = resolve(&request.agents);
        info!("Copying {} candidate file(s)", files.len());
        println!("Copying to {}...", request.target.display());

        CopyEngine::new(&self.root, &request.target, prompter)
            .force(request.force)
            .copy(&files)
    }
}
