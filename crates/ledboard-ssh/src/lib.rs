pub mod command;
pub mod ssh_controller;

pub use ssh_controller::SshController;
