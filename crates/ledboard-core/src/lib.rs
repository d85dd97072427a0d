pub mod config;
pub mod controller;
pub mod error;
pub mod pattern;
pub mod payload;
pub mod profile;
pub mod result;

pub use config::Config;
pub use controller::Controller;
pub use error::ControllerError;
pub use pattern::ProcessPattern;
pub use profile::ConnectionProfile;
pub use result::{InstallOutcome, LaunchStatus, OperationResult};
