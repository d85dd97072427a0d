use ledboard_core::controller::Controller;
use ledboard_core::error::ControllerError;
use ledboard_core::pattern::ProcessPattern;
use ledboard_core::payload::encode_payload;
use ledboard_core::profile::ConnectionProfile;
use ledboard_core::result::{
    probe_status, CommandOutput, InstallOutcome, LaunchStatus, OperationResult, MARKER_INSTALLED,
    MARKER_LAUNCHED,
};
use ssh2::Session;
use std::io::Read;
use std::net::{TcpStream, ToSocketAddrs};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::command;

/// Connect/auth timeout. Not retried here; the caller decides whether
/// to retry.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Delay between the detached launch and the liveness probe. Long enough
/// for the interpreter to fail fast on a syntax or import error, short
/// enough to keep the caller responsive. One sample is the full
/// contract: a renderer that dies after this window still reads as
/// started.
const PROBE_DELAY: Duration = Duration::from_millis(400);

/// Log lines returned when the probe reports the renderer did not
/// come up.
const DIAGNOSTIC_LINES: usize = 60;

/// SSH renderer controller: connects to the board, kills the previous
/// renderer by pattern, launches a new one detached via nohup, and
/// samples the process table once to decide whether the launch took.
pub struct SshController {
    profile: ConnectionProfile,
}

impl SshController {
    pub fn new(profile: ConnectionProfile) -> Self {
        Self { profile }
    }

    /// Establish an authenticated session to the board. Sessions not
    /// explicitly disconnected are closed on drop, so early returns
    /// never leak one.
    fn connect(&self) -> Result<Session, ControllerError> {
        let addr = (self.profile.host.as_str(), self.profile.port)
            .to_socket_addrs()
            .map_err(|e| {
                ControllerError::Connection(format!("resolve {}: {}", self.profile.addr(), e))
            })?
            .next()
            .ok_or_else(|| {
                ControllerError::Connection(format!("no address for {}", self.profile.addr()))
            })?;

        debug!(
            "Connecting to {}@{}",
            self.profile.username,
            self.profile.addr()
        );
        let tcp = TcpStream::connect_timeout(&addr, CONNECT_TIMEOUT).map_err(|e| {
            ControllerError::Connection(format!("TCP connect to {}: {}", self.profile.addr(), e))
        })?;
        tcp.set_read_timeout(Some(CONNECT_TIMEOUT)).ok();
        tcp.set_write_timeout(Some(CONNECT_TIMEOUT)).ok();

        let mut sess = Session::new()
            .map_err(|e| ControllerError::Connection(format!("Session::new: {}", e)))?;
        sess.set_tcp_stream(tcp);
        sess.handshake()
            .map_err(|e| ControllerError::Connection(format!("Handshake: {}", e)))?;

        sess.userauth_password(&self.profile.username, &self.profile.password)
            .map_err(|e| ControllerError::Connection(format!("Password auth: {}", e)))?;

        if !sess.authenticated() {
            return Err(ControllerError::Connection(
                "Authentication failed".to_string(),
            ));
        }

        info!(
            "SSH connected to {}@{}",
            self.profile.username,
            self.profile.addr()
        );
        Ok(sess)
    }

    /// Execute one command on the board and collect its full output.
    fn exec_remote(&self, sess: &Session, cmd: &str) -> Result<CommandOutput, ControllerError> {
        debug!("Remote exec: {}", cmd);
        let mut channel = sess
            .channel_session()
            .map_err(|e| ControllerError::Command(format!("Channel: {}", e)))?;
        channel
            .exec(cmd)
            .map_err(|e| ControllerError::Command(format!("Exec '{}': {}", cmd, e)))?;

        let mut stdout = String::new();
        channel
            .read_to_string(&mut stdout)
            .map_err(|e| ControllerError::Command(format!("Read output: {}", e)))?;

        let mut stderr = String::new();
        channel
            .stderr()
            .read_to_string(&mut stderr)
            .map_err(|e| ControllerError::Command(format!("Read stderr: {}", e)))?;

        channel.wait_close().ok();
        let exit_code = channel.exit_status().unwrap_or(-1);

        if exit_code != 0 && !stderr.is_empty() {
            debug!("Remote command stderr: {}", stderr.trim());
        }

        Ok(CommandOutput {
            stdout,
            stderr,
            exit_code,
        })
    }

    fn disconnect(&self, sess: Session) {
        let _ = sess.disconnect(None, "operation complete", None);
    }
}

#[async_trait::async_trait]
impl Controller for SshController {
    fn transport(&self) -> &str {
        "ssh"
    }

    async fn test_connection(&self) -> Result<OperationResult, ControllerError> {
        let sess = self.connect()?;
        let output = self.exec_remote(&sess, &command::test_command())?;
        self.disconnect(sess);
        Ok(OperationResult::from_outputs(
            &[output],
            LaunchStatus::Unknown,
        ))
    }

    async fn install_renderer(
        &self,
        local_path: &Path,
    ) -> Result<InstallOutcome, ControllerError> {
        let content = std::fs::read_to_string(local_path)?;
        let sess = self.connect()?;

        let write = self.exec_remote(
            &sess,
            &command::write_file_command(&self.profile.remote_exec_path, &content),
        )?;
        if write.exit_code != 0 {
            return Err(ControllerError::Install(format!(
                "upload to {} failed (exit {}): {}",
                self.profile.remote_exec_path,
                write.exit_code,
                pick_output(&write)
            )));
        }

        let verify = self.exec_remote(
            &sess,
            &command::verify_install_command(&self.profile.remote_exec_path),
        )?;
        self.disconnect(sess);

        if !verify.stdout.contains(MARKER_INSTALLED) {
            return Err(ControllerError::Install(format!(
                "{} missing after upload",
                self.profile.remote_exec_path
            )));
        }

        info!(
            "Installed renderer at {} on {}",
            self.profile.remote_exec_path, self.profile.host
        );
        Ok(InstallOutcome::from_outputs(
            self.profile.remote_exec_path.clone(),
            &[write, verify],
        ))
    }

    async fn stop_renderer(&self) -> Result<OperationResult, ControllerError> {
        let pattern = ProcessPattern::for_executable(&self.profile.remote_exec_path);
        let sess = self.connect()?;
        let output = self.exec_remote(&sess, &command::stop_command(&pattern))?;
        self.disconnect(sess);

        info!(
            "Stopped renderer matching {} on {}",
            pattern, self.profile.host
        );
        Ok(OperationResult::from_outputs(
            &[output],
            LaunchStatus::Unknown,
        ))
    }

    async fn push_payload(
        &self,
        payload: &serde_json::Value,
    ) -> Result<OperationResult, ControllerError> {
        let payload_b64 = encode_payload(payload)?;
        let pattern = ProcessPattern::for_executable(&self.profile.remote_exec_path);

        // One session carries the whole stop/launch/probe/diagnose
        // sequence; the sub-steps depend on each other's side effects and
        // run strictly in order.
        let sess = self.connect()?;
        let mut outputs = Vec::new();

        let stop = self.exec_remote(&sess, &command::stop_command(&pattern))?;
        outputs.push(stop);

        let launch = self
            .exec_remote(&sess, &command::launch_command(&self.profile, &payload_b64))
            .map_err(|e| ControllerError::LaunchDispatch(e.to_string()))?;
        if launch.exit_code != 0 || !launch.stdout.contains(MARKER_LAUNCHED) {
            return Err(ControllerError::LaunchDispatch(format!(
                "exit {}: {}",
                launch.exit_code,
                pick_output(&launch)
            )));
        }
        outputs.push(launch);

        // SSH offers no "background job came up" signal; wait for a fast
        // interpreter failure to surface, then sample the process table
        // once.
        tokio::time::sleep(PROBE_DELAY).await;
        let probe = self.exec_remote(&sess, &command::probe_command(&pattern))?;
        let status = probe_status(&probe.stdout);
        outputs.push(probe);

        if status != LaunchStatus::Started {
            warn!(
                "Renderer on {} did not pass the liveness probe ({})",
                self.profile.host, status
            );
            let diag = self.exec_remote(
                &sess,
                &command::diagnostic_command(&self.profile.log_path, DIAGNOSTIC_LINES),
            )?;
            outputs.push(diag);
        }

        self.disconnect(sess);
        Ok(OperationResult::from_outputs(&outputs, status))
    }
}

/// Best available text for an error message: stderr, then stdout.
fn pick_output(output: &CommandOutput) -> String {
    let stderr = output.stderr.trim();
    if !stderr.is_empty() {
        return stderr.to_string();
    }
    let stdout = output.stdout.trim();
    if stdout.is_empty() {
        "no output".to_string()
    } else {
        stdout.to_string()
    }
}
