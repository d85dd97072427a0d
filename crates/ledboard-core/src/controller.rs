use crate::error::ControllerError;
use crate::result::{InstallOutcome, OperationResult};
use std::path::Path;

/// Renderer lifecycle operations against one board. The transport is
/// behind this trait; the HTTP layer and the CLI only see results.
///
/// Operations are not synchronized against each other — two overlapping
/// `push_payload` calls race on the kill/launch sequence, so callers
/// serialize pushes per board.
#[async_trait::async_trait]
pub trait Controller: Send + Sync {
    /// Transport identifier ("ssh").
    fn transport(&self) -> &str;

    /// Verify credentials and reachability with a no-op echo. Does not
    /// touch renderer state.
    async fn test_connection(&self) -> Result<OperationResult, ControllerError>;

    /// Upload the renderer script to the board and verify it exists
    /// afterwards.
    async fn install_renderer(&self, local_path: &Path)
        -> Result<InstallOutcome, ControllerError>;

    /// Kill any running renderer. A missing process is success.
    async fn stop_renderer(&self) -> Result<OperationResult, ControllerError>;

    /// Stop the previous renderer, launch a new detached instance with
    /// the encoded payload, probe its liveness once, and collect the log
    /// tail when it did not come up.
    async fn push_payload(
        &self,
        payload: &serde_json::Value,
    ) -> Result<OperationResult, ControllerError>;
}
