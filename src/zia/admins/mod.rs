//! Admins module - administrator roles and admin users

mod api;
mod commands;
mod models;

pub use commands::{
    run_admin_role_command, run_admin_user_command, run_create_admin_user_command,
    run_delete_admin_user_command, run_update_admin_user_command,
};
pub use models::{AdminRole, AdminRoleFilter, AdminUser, AdminUserFilter};
