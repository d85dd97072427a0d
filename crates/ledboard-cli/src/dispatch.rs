use ledboard_core::config::Config;
use ledboard_core::error::ControllerError;
use ledboard_core::profile::ConnectionProfile;
use ledboard_core::Controller;

/// Build a controller for the named board, or for the only configured
/// board when no name was given.
pub fn create_controller(
    config: &Config,
    board: Option<&str>,
) -> Result<Box<dyn Controller>, ControllerError> {
    let board_config = match board {
        Some(name) => config
            .find_board(name)
            .ok_or_else(|| ControllerError::BoardNotFound(name.to_string()))?,
        None => match config.boards.as_slice() {
            [only] => only,
            [] => {
                return Err(ControllerError::Config(
                    "no boards configured".to_string(),
                ))
            }
            _ => {
                return Err(ControllerError::Config(
                    "multiple boards configured; pass --board".to_string(),
                ))
            }
        },
    };

    let profile = ConnectionProfile::resolve(board_config, &config.defaults)?;
    Ok(Box::new(ledboard_ssh::SshController::new(profile)))
}
