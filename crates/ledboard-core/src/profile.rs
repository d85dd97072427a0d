use crate::config::{BoardConfig, Defaults};
use crate::error::ControllerError;
use serde::{Deserialize, Serialize};

/// Resolved connection settings for one board. Validated once per
/// operation and immutable from then on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionProfile {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// Absolute path of the renderer script on the board.
    pub remote_exec_path: String,
    /// Command used to run the script, e.g. "python3".
    pub interpreter: String,
    pub use_sudo: bool,
    /// Renderer stdout+stderr land here; truncated on every launch.
    pub log_path: String,
}

impl ConnectionProfile {
    /// Resolve a raw board entry into a usable profile. Host and username
    /// must be non-empty after trimming.
    pub fn resolve(board: &BoardConfig, defaults: &Defaults) -> Result<Self, ControllerError> {
        let host = board.host.as_deref().unwrap_or("").trim().to_string();
        if host.is_empty() {
            return Err(ControllerError::Config(format!(
                "board '{}' has no host",
                board.name
            )));
        }

        let username = board.username.as_deref().unwrap_or("").trim().to_string();
        if username.is_empty() {
            return Err(ControllerError::Config(format!(
                "board '{}' has no username",
                board.name
            )));
        }

        let remote_exec_path = board
            .remote_path
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("/home/{}/ledboard/renderer.py", username));

        let interpreter = board
            .interpreter
            .as_deref()
            .map(str::trim)
            .filter(|i| !i.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| defaults.interpreter.clone());

        let log_path = board
            .log_path
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| defaults.log_path.clone());

        Ok(Self {
            host,
            port: board.ssh_port(),
            username,
            password: board.password.clone().unwrap_or_default(),
            remote_exec_path,
            interpreter,
            use_sudo: board.use_sudo,
            log_path,
        })
    }

    /// "host:port" form used for TCP connects and log messages.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
