//! Activation module - committing pending configuration changes

mod api;
mod commands;
mod models;

pub use commands::{run_activate_command, run_status_command};
pub use models::ActivationStatus;
