use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration.
/// Loaded from ~/.config/ledboard/boards.yaml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub boards: Vec<BoardConfig>,
    #[serde(default)]
    pub defaults: Defaults,
}

/// One board entry as written by the user. Optional fields fall back to
/// `Defaults` (or built-in values) when the profile is resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    pub name: String,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub remote_path: Option<String>,
    #[serde(default)]
    pub interpreter: Option<String>,
    #[serde(default)]
    pub log_path: Option<String>,
    #[serde(default)]
    pub use_sudo: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    #[serde(default = "default_interpreter")]
    pub interpreter: String,
    #[serde(default = "default_log_path")]
    pub log_path: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            interpreter: default_interpreter(),
            log_path: default_log_path(),
        }
    }
}

fn default_interpreter() -> String {
    "python3".to_string()
}

fn default_log_path() -> String {
    "/tmp/ledboard-renderer.log".to_string()
}

impl Config {
    /// Load config from the default path (~/.config/ledboard/boards.yaml).
    pub fn load_default() -> anyhow::Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::empty())
        }
    }

    /// Load config from a specific path.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Default config file path.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("/etc"))
            .join("ledboard")
            .join("boards.yaml")
    }

    /// Empty config with no boards.
    pub fn empty() -> Self {
        Self {
            boards: Vec::new(),
            defaults: Defaults::default(),
        }
    }

    /// Find a board config by name.
    pub fn find_board(&self, name: &str) -> Option<&BoardConfig> {
        self.boards.iter().find(|b| b.name == name)
    }
}

impl BoardConfig {
    /// Get the SSH port, falling back to 22.
    pub fn ssh_port(&self) -> u16 {
        self.port.unwrap_or(22)
    }
}
