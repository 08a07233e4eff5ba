//! Running the external rule generator
//!
//! Provides [`Generator`], which tries each configured command form in
//! priority order until one succeeds.

use crate::command::CommandForm;
use anyhow::Result;
use skillcast_types::ApplyError;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tracing::{debug, info};

/// Default bound for the `--version` probe
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Handle to the external generator
#[derive(Debug, Clone)]
pub struct Generator {
    /// Command forms in priority order
    forms: Vec<CommandForm>,
    /// Subcommand that generates agent files
    subcommand: String,
    /// Package name used in install prompts and hints
    package: String,
    /// Directory the generator reads staging from and writes files into
    working_dir: PathBuf,
    /// Upper bound for each availability probe
    probe_timeout: Duration,
}

impl Generator {
    /// Create a generator handle
    pub fn new(
        forms: Vec<CommandForm>,
        subcommand: impl Into<String>,
        package: impl Into<String>,
        working_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            forms,
            subcommand: subcommand.into(),
            package: package.into(),
            working_dir: working_dir.into(),
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
        }
    }

    /// Override the availability probe timeout
    #[must_use]
    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    /// Package name of the generator
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Working directory of the generator
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Whether any command form answers a `--version` probe in time.
    ///
    /// A probe that times out counts as unavailable.
    pub async fn is_available(&self) -> bool {
        for form in &self.forms {
            let probe = form.with_arg("--version");
            let mut cmd = probe.to_command();
            cmd.stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .kill_on_drop(true);

            match tokio::time::timeout(self.probe_timeout, cmd.status()).await {
                Ok(Ok(status)) if status.success() => {
                    debug!("Generator available via '{}'", form);
                    return true;
                }
                Ok(Ok(status)) => debug!("Probe '{}' exited with {}", probe, status),
                Ok(Err(e)) => debug!("Probe '{}' failed to start: {}", probe, e),
                Err(_) => debug!("Probe '{}' timed out after {:?}", probe, self.probe_timeout),
            }
        }
        false
    }

    /// Run the generate subcommand, first successful form wins.
    ///
    /// Output is captured and only surfaced, summarized, when every form fails.
    ///
    /// # Errors
    /// Returns [`ApplyError::GeneratorFailed`] with one line per attempt
    pub async fn apply(&self) -> Result<()> {
        info!("Running generator in {:?}", self.working_dir);
        let mut attempts = Vec::with_capacity(self.forms.len());

        for form in &self.forms {
            let invocation = form.with_arg(&self.subcommand);
            let mut cmd = invocation.to_command();
            cmd.current_dir(&self.working_dir).stdin(Stdio::null());

            match cmd.output().await {
                Ok(output) if output.status.success() => {
                    info!("Generator succeeded via '{}'", invocation);
                    return Ok(());
                }
                Ok(output) => {
                    let stderr = String::from_utf8_lossy(&output.stderr);
                    let detail = stderr
                        .lines()
                        .rev()
                        .find(|l| !l.trim().is_empty())
                        .map(str::trim)
                        .unwrap_or_default();
                    debug!("'{}' exited with {}: {}", invocation, output.status, stderr);
                    attempts.push(if detail.is_empty() {
                        format!("{invocation}: {}", output.status)
                    } else {
                        format!("{invocation}: {}: {detail}", output.status)
                    });
                }
                Err(e) => {
                    debug!("'{}' failed to start: {}", invocation, e);
                    attempts.push(format!("{invocation}: {e}"));
                }
            }
        }

        Err(ApplyError::GeneratorFailed {
            package: self.package.clone(),
            attempts,
        }
        .into())
    }
}
