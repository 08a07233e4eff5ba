//! Skill definition and parsing
//!
//! Each skill is a folder containing SKILL.md with optional YAML frontmatter

use anyhow::{anyhow, Context, Result};
use regex::Regex;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Definition file expected inside every skill folder
pub const SKILL_FILE: &str = "SKILL.md";

/// Names longer than this are accepted but flagged
const MAX_NAME_LENGTH: usize = 64;

/// Skill metadata extracted from YAML frontmatter
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillMetadata {
    /// Skill name; the folder name is used when absent
    #[serde(default)]
    pub name: Option<String>,
    /// One-line description rendered as a block quote
    #[serde(default)]
    pub description: Option<String>,
}

/// A loaded skill, rendered to markdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    /// Skill name (metadata name or folder name)
    pub name: String,
    /// Rendered markdown: heading, optional description quote, body
    pub content: String,
    /// Skill folder the definition was read from
    pub path: PathBuf,
}

impl Skill {
    /// Load and render the skill stored in `dir`
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let skill_file = dir.join(SKILL_FILE);

        if !skill_file.is_file() {
            return Err(anyhow!("{} not found in {:?}", SKILL_FILE, dir));
        }

        let raw = fs::read_to_string(&skill_file)
            .with_context(|| format!("Failed to read {:?}", skill_file))?;

        let (metadata, body) = parse_skill_content(&raw)
            .with_context(|| format!("Failed to parse skill from {:?}", skill_file))?;

        let name = non_empty(metadata.name).unwrap_or_else(|| {
            dir.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        });
        check_name(&name);

        let content = render(&name, non_empty(metadata.description).as_deref(), &body);

        Ok(Self {
            name,
            content,
            path: dir.to_path_buf(),
        })
    }
}

/// Render a skill as markdown: `# name`, an optional `> description` line,
/// then the trimmed body.
pub fn render(name: &str, description: Option<&str>, body: &str) -> String {
    let mut out = format!("# {}\n\n", name);
    if let Some(description) = description {
        out.push_str(&format!("> {}\n\n", description));
    }
    out.push_str(body.trim());
    out
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Split content into frontmatter metadata and body.
///
/// Content without a frontmatter block is all body.
fn parse_skill_content(content: &str) -> Result<(SkillMetadata, String)> {
    let frontmatter_re =
        Regex::new(r"^---[ \t]*\r?\n(?:([\s\S]*?)\r?\n)?---[ \t]*(?:\r?\n([\s\S]*))?$")
            .map_err(|e| anyhow!("Failed to compile regex: {}", e))?;

    let Some(captures) = frontmatter_re.captures(content) else {
        return Ok((SkillMetadata::default(), content.to_string()));
    };

    let yaml_str = captures.get(1).map(|m| m.as_str()).unwrap_or("");
    let body = captures.get(2).map(|m| m.as_str()).unwrap_or("");

    let metadata = if yaml_str.trim().is_empty() {
        SkillMetadata::default()
    } else {
        serde_yaml::from_str(yaml_str).with_context(|| "Failed to parse YAML frontmatter")?
    };

    Ok((metadata, body.to_string()))
}

/// Names end up as staged file names; odd ones are allowed but flagged
fn check_name(name: &str) {
    if name.len() > MAX_NAME_LENGTH {
        warn!(
            "Skill name '{}' exceeds {} characters (was {})",
            name,
            MAX_NAME_LENGTH,
            name.len()
        );
    }

    match Regex::new(r"^[a-z0-9-]+$") {
        Ok(name_re) if !name_re.is_match(name) => warn!(
            "Skill name '{}' contains characters other than lowercase letters, numbers, and hyphens",
            name
        ),
        Ok(_) => {}
        Err(e) => warn!("Failed to compile name validation regex: {}", e),
    }
}
