//! Installing the generator through a package manager

use crate::command::CommandForm;
use crate::generator::Generator;
use anyhow::Result;
use skillcast_types::{ApplyError, Prompter};
use std::fmt;
use std::process::Stdio;
use tracing::{debug, info};

/// Package managers able to install the generator globally
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    /// `bun add -g`
    Bun,
    /// `npm install -g`
    Npm,
}

impl PackageManager {
    /// Detection and preference order
    pub const PRIORITY: [PackageManager; 2] = [PackageManager::Bun, PackageManager::Npm];

    /// Binary looked up on `PATH`
    #[must_use]
    pub fn binary(self) -> &'static str {
        match self {
            PackageManager::Bun => "bun",
            PackageManager::Npm => "npm",
        }
    }

    /// Global install command for `package`
    #[must_use]
    pub fn install_command(self, package: &str) -> CommandForm {
        let args = match self {
            PackageManager::Bun => ["add", "-g", package],
            PackageManager::Npm => ["install", "-g", package],
        };
        CommandForm {
            program: self.binary().to_string(),
            args: args.iter().map(|a| (*a).to_string()).collect(),
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.binary())
    }
}

/// Manual install commands for `package`, one per known package manager
#[must_use]
pub fn manual_install_commands(package: &str) -> Vec<String> {
    PackageManager::PRIORITY
        .iter()
        .map(|m| m.install_command(package).to_string())
        .collect()
}

/// Makes sure the generator can be run, offering to install it if not
#[derive(Debug, Clone)]
pub struct Installer {
    managers: Vec<PackageManager>,
    install_command: Option<CommandForm>,
}

impl Installer {
    /// Use the package managers found on `PATH`, in priority order
    #[must_use]
    pub fn detect() -> Self {
        let managers = PackageManager::PRIORITY
            .into_iter()
            .filter(|m| which::which(m.binary()).is_ok())
            .collect();
        Self::with_managers(managers)
    }

    /// Use an explicit list of package managers
    #[must_use]
    pub fn with_managers(managers: Vec<PackageManager>) -> Self {
        debug!("Package managers: {:?}", managers);
        Self {
            managers,
            install_command: None,
        }
    }

    /// Run `command` instead of the package manager's own global install
    #[must_use]
    pub fn with_install_command(mut self, command: CommandForm) -> Self {
        self.install_command = Some(command);
        self
    }

    /// Return immediately if the generator answers a probe; otherwise ask to
    /// install it with the preferred package manager and probe again.
    ///
    /// # Errors
    /// Returns a dependency error when no package manager exists, the user
    /// declines, the install fails, or the generator is still unavailable.
    pub async fn ensure_installed(
        &self,
        generator: &Generator,
        prompter: &dyn Prompter,
    ) -> Result<()> {
        if generator.is_available().await {
            return Ok(());
        }

        let package = generator.package();
        println!("\n⚠️  {package} is not installed.");
        println!("It is required to generate agent config files.\n");

        let Some(preferred) = self.managers.first().copied() else {
            return Err(ApplyError::NoPackageManager {
                package: package.to_string(),
            }
            .into());
        };

        let names: Vec<_> = self.managers.iter().map(|m| m.binary()).collect();
        println!("Available installers: {}", names.join(", "));

        let install = self
            .install_command
            .clone()
            .unwrap_or_else(|| preferred.install_command(package));
        let question = format!("Install {package} using {preferred}? ({install})");
        if !prompter.confirm(&question, true)? {
            return Err(ApplyError::InstallDeclined {
                package: package.to_string(),
            }
            .into());
        }

        println!("\nInstalling {package} with {preferred}...");
        let status = install
            .to_command()
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await;

        let failure = match status {
            Ok(status) if status.success() => None,
            Ok(status) => Some(status.to_string()),
            Err(e) => Some(e.to_string()),
        };
        if let Some(reason) = failure {
            return Err(ApplyError::InstallFailed {
                manager: preferred.to_string(),
                package: package.to_string(),
                reason,
            }
            .into());
        }

        if !generator.is_available().await {
            return Err(ApplyError::GeneratorUnavailable {
                package: package.to_string(),
            }
            .into());
        }

        info!("Installed {} with {}", package, preferred);
        println!("✓ {package} installed successfully\n");
        Ok(())
    }
}
