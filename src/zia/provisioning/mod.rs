//! Composite provisioning operations built on the resource modules

mod api;
mod commands;
mod models;

pub use commands::{
    run_assign_groups_command, run_create_sublocations_command, run_export_locations_command,
    run_update_users_command,
};
pub use models::{AssignmentOutcome, LocationTree, SublocationPlan};
