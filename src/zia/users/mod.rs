//! Users module - users, their groups and departments

mod api;
mod commands;
mod models;

pub use commands::{
    run_create_user_command, run_delete_user_command, run_department_command, run_group_command,
    run_update_user_command, run_user_command,
};
pub use models::{Department, Group, SearchFilter, User, UserFilter};
