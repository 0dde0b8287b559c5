//! Configuration module for permtree
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PERMTREE_*)
//! 3. Explicit config file (`--config`)
//! 4. User config (~/.config/permtree/config.toml)
//! 5. Built-in defaults (lowest priority)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PermTreeError, PermTreeResult};

/// Selection behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Initial linkage flag for new editor sessions
    #[serde(default = "default_true")]
    pub linkage: bool,

    /// Fail on duplicate or reserved node ids when loading a tree
    #[serde(default = "default_true")]
    pub reject_duplicate_ids: bool,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            linkage: true,
            reject_duplicate_ids: true,
        }
    }
}

/// Tree rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Use unicode icons when the terminal supports them
    #[serde(default = "default_true")]
    pub unicode: bool,

    /// Print permission strings next to operation rows
    #[serde(default = "default_true")]
    pub show_permissions: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            unicode: true,
            show_permissions: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    fn parse_lenient(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub selection: SelectionConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> PermTreeResult<Self> {
        let (config, _warnings) = Self::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> PermTreeResult<(Self, Vec<ConfigWarning>)> {
        let content = fs::read_to_string(path)?;
        Self::parse_with_warnings(&content, path)
    }

    fn parse_with_warnings(
        content: &str,
        path: &Path,
    ) -> PermTreeResult<(Self, Vec<ConfigWarning>)> {
        let mut unknown_paths: Vec<String> = Vec::new();
        let deserializer = toml::de::Deserializer::new(content);

        let config: Self = serde_ignored::deserialize(deserializer, |path| {
            unknown_paths.push(path.to_string());
        })
        .map_err(|e| PermTreeError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let warnings = unknown_paths
            .into_iter()
            .map(|path_str| {
                let key = path_str
                    .rsplit('.')
                    .next()
                    .unwrap_or(path_str.as_str())
                    .to_string();
                ConfigWarning {
                    line: find_line_number(content, &key),
                    suggestion: suggest_key(&key),
                    file: path.to_path_buf(),
                    key,
                }
            })
            .collect();

        Ok((config, warnings))
    }

    /// Load the user config if it exists, defaults otherwise. Env overrides
    /// are applied on top.
    pub fn load_user_with_warnings() -> PermTreeResult<(Self, Vec<ConfigWarning>)> {
        match user_config_path() {
            Some(path) if path.exists() => {
                let (config, warnings) = Self::load_with_warnings(&path)?;
                Ok((config.with_env_overrides(), warnings))
            }
            _ => Ok((Self::default().with_env_overrides(), Vec::new())),
        }
    }

    /// Like [`Config::load_user_with_warnings`], falling back to defaults
    /// when the user config cannot be read
    pub fn load_or_default() -> Self {
        Self::load_user_with_warnings()
            .map(|(config, _)| config)
            .unwrap_or_else(|_| Self::default().with_env_overrides())
    }

    /// Apply environment variable overrides (PERMTREE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    fn with_overrides_from(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(val) = var("PERMTREE_LINKAGE") {
            self.selection.linkage = parse_flag(&val);
        }

        if let Some(val) = var("PERMTREE_VERBOSITY") {
            self.output.verbosity = Verbosity::parse_lenient(&val);
        }

        if let Some(val) = var("PERMTREE_UNICODE") {
            self.display.unicode = parse_flag(&val);
        }

        self
    }
}

/// `~/.config/permtree/config.toml` on Linux, the platform equivalent elsewhere
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("permtree").join("config.toml"))
}

fn parse_flag(val: &str) -> bool {
    let val = val.trim().to_lowercase();
    val != "false" && val != "0" && val != "off" && val != "no"
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "selection",
        "linkage",
        "reject_duplicate_ids",
        "display",
        "unicode",
        "show_permissions",
        "output",
        "verbosity",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
