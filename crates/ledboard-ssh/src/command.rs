//! Remote shell command builders.
//!
//! Each sub-step of an operation runs as its own command inside one
//! session; building them here keeps the quoting in one place and lets
//! the pattern-safety properties be tested without a board.

use ledboard_core::pattern::ProcessPattern;
use ledboard_core::profile::ConnectionProfile;
use ledboard_core::result::{
    MARKER_CONNECTED, MARKER_INSTALLED, MARKER_LAUNCHED, MARKER_STOPPED, PROBE_PREFIX,
};

/// Heredoc delimiter for the install transfer. Quoted at the redirect so
/// the script body is taken verbatim.
const SCRIPT_EOF: &str = "SCRIPTEOF";

/// Shell-escape a string for safe use in remote commands.
pub fn shell_escape(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\\''"))
}

/// No-op echo for credential/reachability checks.
pub fn test_command() -> String {
    format!("echo {}", MARKER_CONNECTED)
}

/// Kill-by-pattern with kill-if-exists semantics: no matching process is
/// success, not error.
pub fn stop_command(pattern: &ProcessPattern) -> String {
    format!(
        "pkill -f {} >/dev/null 2>&1 || true; echo {}",
        shell_escape(pattern.as_str()),
        MARKER_STOPPED
    )
}

/// Detached renderer launch.
///
/// nohup plus `&` detaches the process from the session, stdout+stderr
/// go to the truncated log file, stdin comes from /dev/null so the
/// renderer can never block on session input. The trailing echo
/// acknowledges that the shell accepted the command line; sudo runs
/// non-interactively because no TTY is attached to prompt on.
pub fn launch_command(profile: &ConnectionProfile, payload_b64: &str) -> String {
    let sudo = if profile.use_sudo { "sudo -n " } else { "" };
    format!(
        "nohup {}{} {} --runner --payload-b64 '{}' > {} 2>&1 < /dev/null & echo {}",
        sudo,
        profile.interpreter,
        shell_escape(&profile.remote_exec_path),
        payload_b64,
        shell_escape(&profile.log_path),
        MARKER_LAUNCHED
    )
}

/// Single process-table sample. Echoes pgrep's exit code so the
/// controller can tell "no process" from "pgrep unavailable".
pub fn probe_command(pattern: &ProcessPattern) -> String {
    format!(
        "pgrep -f {} >/dev/null 2>&1; echo \"{}$?\"",
        shell_escape(pattern.as_str()),
        PROBE_PREFIX
    )
}

/// Tail of the renderer log, or an explicit line when the log is missing.
pub fn diagnostic_command(log_path: &str, lines: usize) -> String {
    let log = shell_escape(log_path);
    format!(
        "if [ -f {log} ]; then tail -n {lines} {log}; else echo {missing}; fi",
        log = log,
        lines = lines,
        missing = shell_escape(&format!("no renderer log at {}", log_path)),
    )
}

/// Write the script content to the board and mark it executable.
///
/// The heredoc delimiter is quoted, so the body is immune to shell
/// expansion whatever the script contains. Empty content truncates the
/// file instead — a heredoc would smuggle in a stray newline.
pub fn write_file_command(remote_path: &str, content: &str) -> String {
    let path = shell_escape(remote_path);
    let dir = shell_escape(parent_dir(remote_path));

    if content.is_empty() {
        return format!("mkdir -p {dir} && : > {path} && chmod +x {path}");
    }

    let body = content.strip_suffix('\n').unwrap_or(content);
    format!(
        "mkdir -p {dir} && cat > {path} <<'{eof}'\n{body}\n{eof}\nchmod +x {path}",
        dir = dir,
        path = path,
        eof = SCRIPT_EOF,
        body = body,
    )
}

/// Post-transfer existence check; the sentinel must come back.
pub fn verify_install_command(remote_path: &str) -> String {
    format!(
        "test -f {} && echo {}",
        shell_escape(remote_path),
        MARKER_INSTALLED
    )
}

fn parent_dir(remote_path: &str) -> &str {
    match remote_path.rsplit_once('/') {
        Some(("", _)) => "/",
        Some((dir, _)) => dir,
        None => ".",
    }
}
