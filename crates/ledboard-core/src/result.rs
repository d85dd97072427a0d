use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker lines echoed by the remote sub-commands. They let the
/// controller tell sub-steps apart in the combined output and are
/// stripped from operator-facing diagnostics.
pub const MARKER_CONNECTED: &str = "__CTL__:connected";
pub const MARKER_STOPPED: &str = "__CTL__:stopped";
pub const MARKER_LAUNCHED: &str = "__CTL__:launched";
pub const MARKER_INSTALLED: &str = "__CTL__:installed";
/// The probe echoes this prefix followed by pgrep's exit code.
pub const PROBE_PREFIX: &str = "__PROBE__:";

fn is_marker_line(line: &str) -> bool {
    let line = line.trim();
    line.starts_with("__CTL__:") || line.starts_with(PROBE_PREFIX)
}

/// Output of a single remote command invocation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

/// Verdict of the liveness probe.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LaunchStatus {
    Started,
    Failed,
    /// The probe was inconclusive (tool missing or probe error), or the
    /// operation does not check liveness at all.
    Unknown,
}

impl fmt::Display for LaunchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaunchStatus::Started => write!(f, "started"),
            LaunchStatus::Failed => write!(f, "failed"),
            LaunchStatus::Unknown => write!(f, "unknown"),
        }
    }
}

/// Map the probe sub-command's marker line to a launch verdict.
///
/// pgrep exits 0 when a process matched and 1 when none did; anything
/// else — 127 when pgrep is missing, 2/3 for pgrep's own errors — is
/// reported as inconclusive rather than collapsed into "failed".
pub fn probe_status(stdout: &str) -> LaunchStatus {
    for line in stdout.lines() {
        if let Some(code) = line.trim().strip_prefix(PROBE_PREFIX) {
            return match code.trim() {
                "0" => LaunchStatus::Started,
                "1" => LaunchStatus::Failed,
                _ => LaunchStatus::Unknown,
            };
        }
    }
    LaunchStatus::Unknown
}

/// Result of one controller operation, assembled from the outputs of its
/// sequential remote sub-commands. Immutable after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationResult {
    /// Exit status of the last sub-command that ran.
    pub exit_code: i32,
    /// Sub-step stdout in chronological order, newline-separated.
    pub stdout: String,
    /// Sub-step stderr in chronological order, newline-separated.
    pub stderr: String,
    pub started: bool,
    pub status: LaunchStatus,
    pub completed_at: DateTime<Utc>,
}

impl OperationResult {
    pub fn from_outputs(outputs: &[CommandOutput], status: LaunchStatus) -> Self {
        Self {
            exit_code: outputs.last().map(|o| o.exit_code).unwrap_or(0),
            stdout: join_nonempty(outputs.iter().map(|o| o.stdout.as_str())),
            stderr: join_nonempty(outputs.iter().map(|o| o.stderr.as_str())),
            started: status == LaunchStatus::Started,
            status,
            completed_at: Utc::now(),
        }
    }

    /// Operator-facing failure context: combined stdout and stderr with
    /// the internal marker lines removed.
    pub fn diagnostics(&self) -> String {
        let lines = self
            .stdout
            .lines()
            .chain(self.stderr.lines())
            .filter(|line| !is_marker_line(line) && !line.trim().is_empty())
            .collect::<Vec<_>>();
        lines.join("\n")
    }
}

/// Result of installing the renderer script on the board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallOutcome {
    pub remote_path: String,
    pub stdout: String,
    pub stderr: String,
}

impl InstallOutcome {
    pub fn from_outputs(remote_path: String, outputs: &[CommandOutput]) -> Self {
        Self {
            remote_path,
            stdout: join_nonempty(outputs.iter().map(|o| o.stdout.as_str())),
            stderr: join_nonempty(outputs.iter().map(|o| o.stderr.as_str())),
        }
    }
}

fn join_nonempty<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    parts
        .map(|s| s.trim_end_matches('\n'))
        .filter(|s| !s.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
