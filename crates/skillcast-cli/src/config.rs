use serde::Deserialize;
use skillcast_generator::CommandForm;
use skillcast_types::ApplyError;
use std::path::{Component, Path, PathBuf};
use std::time::Duration;

/// Name of the optional config file in the tool root
pub const LOCAL_CONFIG_FILE: &str = "skillcast.toml";

/// Built-in defaults, always the lowest layer
const DEFAULT_CONFIG: &str = r#"
[skills]
directory = "skills"  # relative to the tool root

[staging]
root = ".ruler"       # removed after a run when empty
bundle = "skills"     # staged files go to <root>/<bundle>

[generator]
package = "@intellectronica/ruler"
commands = ["ruler", "bunx @intellectronica/ruler", "npx @intellectronica/ruler"]
subcommand = "apply"
probe_timeout = 10    # seconds

[logging]
level = "warn"  # trace, debug, info, warn, error
"#;

#[derive(Debug, Deserialize, Clone)]
pub struct SkillsConfig {
    pub directory: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StagingConfig {
    pub root: String,
    pub bundle: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeneratorConfig {
    pub package: String,
    pub commands: Vec<String>,
    pub subcommand: String,
    pub probe_timeout: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub skills: SkillsConfig,
    pub staging: StagingConfig,
    pub generator: GeneratorConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Global config path: ~/.skillcast/skillcast.toml
    fn global_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".skillcast").join(LOCAL_CONFIG_FILE))
    }

    fn defaults_builder() -> config::ConfigBuilder<config::builder::DefaultState> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
    }

    /// Built-in defaults only
    pub fn defaults() -> anyhow::Result<Self> {
        let config: Self = Self::defaults_builder().build()?.try_deserialize()?;
        Ok(config)
    }

    /// Load configuration with layered approach:
    /// 1. Built-in defaults
    /// 2. Global config: ~/.skillcast/skillcast.toml (optional, never created)
    /// 3. Tool root config: <root>/skillcast.toml (optional)
    /// 4. Environment variables (highest priority)
    pub fn load(root: &Path) -> anyhow::Result<Self> {
        // Load .env file from current directory
        dotenvy::dotenv().ok();

        let mut config_builder = Self::defaults_builder();

        // Layer 2: Global config
        if let Some(global) = Self::global_config_path() {
            config_builder = config_builder.add_source(config::File::from(global).required(false));
        }

        let config_builder = config_builder
            // Layer 3: Tool root config
            .add_source(config::File::from(root.join(LOCAL_CONFIG_FILE)).required(false))
            // Layer 4: Environment variables with SKILLCAST__ prefix
            .add_source(
                config::Environment::with_prefix("SKILLCAST")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("generator.commands")
                    .try_parsing(true),
            );

        let config: Self = config_builder.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Skills root, resolved against the tool root
    pub fn skills_dir(&self, root: &Path) -> PathBuf {
        resolve_path(root, &self.skills.directory)
    }

    /// Parent staging root
    pub fn staging_root(&self, root: &Path) -> PathBuf {
        resolve_path(root, &self.staging.root)
    }

    /// Directory the staged skill files are written to
    pub fn staging_dir(&self, root: &Path) -> PathBuf {
        self.staging_root(root).join(&self.staging.bundle)
    }

    /// Generator command forms, blank entries dropped
    pub fn command_forms(&self) -> Vec<CommandForm> {
        self.generator
            .commands
            .iter()
            .filter_map(|c| CommandForm::parse(c))
            .collect()
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.generator.probe_timeout)
    }

    /// Reject a staging directory that overlaps the skills directory or the
    /// tool root; staging is wiped on every run.
    pub fn validate(&self, root: &Path) -> Result<(), ApplyError> {
        let staging = normalize(&self.staging_dir(root));
        let skills = normalize(&self.skills_dir(root));
        let root = normalize(root);

        if skills.starts_with(&staging)
            || root.starts_with(&staging)
            || staging.starts_with(&skills)
        {
            return Err(ApplyError::StagingOverlap(staging));
        }
        Ok(())
    }
}

/// Lexically fold `.` and `..` components
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}

/// Expand a leading `~/` and join relative paths onto `root`
fn resolve_path(root: &Path, path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    root.join(path)
}
