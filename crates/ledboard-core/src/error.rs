use thiserror::Error;

#[derive(Error, Debug)]
pub enum ControllerError {
    #[error("SSH connection failed: {0}")]
    Connection(String),

    #[error("SSH command failed: {0}")]
    Command(String),

    #[error("Install verification failed: {0}")]
    Install(String),

    #[error("Launch rejected by remote shell: {0}")]
    LaunchDispatch(String),

    #[error("Board not found: {0}")]
    BoardNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
