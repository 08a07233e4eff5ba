//! Known coding agents and the files the generator writes for each of them.

use std::fmt;
use std::str::FromStr;

/// An AI coding tool that consumes generated rule files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Agent {
    Cursor,
    Copilot,
    Aider,
    Zed,
    Cline,
    Windsurf,
    Goose,
    OpenCode,
    GeminiCli,
    FirebaseStudio,
    Warp,
    Trae,
    KiloCode,
    RooCode,
    QwenCode,
    AugmentCode,
    AmazonQ,
    Kiro,
    Junie,
    OpenHands,
    Crush,
    Amp,
    Antigravity,
    Firebender,
    MistralVibe,
    CodexCli,
    Jules,
    Claude,
}

impl Agent {
    /// Every known agent, in table order
    pub const ALL: [Agent; 28] = [
        Agent::Cursor,
        Agent::Copilot,
        Agent::Aider,
        Agent::Zed,
        Agent::Cline,
        Agent::Windsurf,
        Agent::Goose,
        Agent::OpenCode,
        Agent::GeminiCli,
        Agent::FirebaseStudio,
        Agent::Warp,
        Agent::Trae,
        Agent::KiloCode,
        Agent::RooCode,
        Agent::QwenCode,
        Agent::AugmentCode,
        Agent::AmazonQ,
        Agent::Kiro,
        Agent::Junie,
        Agent::OpenHands,
        Agent::Crush,
        Agent::Amp,
        Agent::Antigravity,
        Agent::Firebender,
        Agent::MistralVibe,
        Agent::CodexCli,
        Agent::Jules,
        Agent::Claude,
    ];

    /// Identifier accepted on the command line
    pub fn id(self) -> &'static str {
        match self {
            Agent::Cursor => "cursor",
            Agent::Copilot => "copilot",
            Agent::Aider => "aider",
            Agent::Zed => "zed",
            Agent::Cline => "cline",
            Agent::Windsurf => "windsurf",
            Agent::Goose => "goose",
            Agent::OpenCode => "opencode",
            Agent::GeminiCli => "gemini-cli",
            Agent::FirebaseStudio => "firebase-studio",
            Agent::Warp => "warp",
            Agent::Trae => "trae",
            Agent::KiloCode => "kilo-code",
            Agent::RooCode => "roo-code",
            Agent::QwenCode => "qwen-code",
            Agent::AugmentCode => "augment-code",
            Agent::AmazonQ => "amazon-q",
            Agent::Kiro => "kiro",
            Agent::Junie => "junie",
            Agent::OpenHands => "open-hands",
            Agent::Crush => "crush",
            Agent::Amp => "amp",
            Agent::Antigravity => "antigravity",
            Agent::Firebender => "firebender",
            Agent::MistralVibe => "mistral-vibe",
            Agent::CodexCli => "codex-cli",
            Agent::Jules => "jules",
            Agent::Claude => "claude",
        }
    }

    /// Files (relative to the generator's working directory) that make up
    /// this agent's configuration. Never empty.
    pub fn files(self) -> &'static [&'static str] {
        match self {
            Agent::Cursor
            | Agent::Copilot
            | Agent::Zed
            | Agent::Windsurf
            | Agent::GeminiCli
            | Agent::RooCode
            | Agent::QwenCode
            | Agent::Amp
            | Agent::MistralVibe
            | Agent::CodexCli
            | Agent::Jules => &["AGENTS.md"],
            Agent::Aider => &["AGENTS.md", ".aider.conf.yml"],
            Agent::Cline => &[".clinerules"],
            Agent::Goose => &[".goosehints"],
            Agent::OpenCode => &["AGENTS.md", "opencode.json"],
            Agent::FirebaseStudio => &[".idx/airules.md"],
            Agent::Warp => &["WARP.md"],
            Agent::Trae => &[".trae/rules/project_rules.md"],
            Agent::KiloCode => &[".kilocode/rules/ruler_kilocode_instructions.md"],
            Agent::AugmentCode => &[".augment/rules/ruler_augment_instructions.md"],
            Agent::AmazonQ => &[".amazonq/rules/ruler_q_rules.md"],
            Agent::Kiro => &[".kiro/steering/ruler_kiro_instructions.md"],
            Agent::Junie => &[".junie/guidelines.md"],
            Agent::OpenHands => &[".openhands/microagents/repo.md"],
            Agent::Crush => &["CRUSH.md"],
            Agent::Antigravity => &[".agent/rules/ruler.md"],
            Agent::Firebender => &["firebender.json"],
            Agent::Claude => &["CLAUDE.md"],
        }
    }

    /// Comma-separated list of every identifier, for help and error output
    pub fn supported_list() -> String {
        Self::ALL.iter().map(|a| a.id()).collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Agent {
    type Err = String;

    /// Case-insensitive; surrounding whitespace is ignored.
    /// The error carries the normalized identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|a| a.id() == id)
            .ok_or(id)
    }
}

/// Union of the file lists of `agents`, duplicates removed, first-seen order kept
pub fn resolve(agents: &[Agent]) -> Vec<&'static str> {
    let mut files: Vec<&'static str> = Vec::new();
    for file in agents.iter().flat_map(|a| a.files()) {
        if !files.contains(file) {
            files.push(file);
        }
    }
    files
}

/// Every file the generator could write for any agent
pub fn all_generated_files() -> Vec<&'static str> {
    resolve(&Agent::ALL)
}
