//! Output formatting module
//!
//! Handles the table, CSV, JSON and YAML renderings of ZIA resources

mod activation;
mod admins;
mod audit;
mod auth_settings;
mod common;
mod locations;
mod traffic;
mod users;

pub use activation::output_activation_status;
pub use admins::{output_admin_roles, output_admin_users};
pub use audit::output_audit_status;
pub use auth_settings::output_exempted_urls;
pub use common::{escape_csv, output_mutation, output_raw, print_json, print_yaml, save_result};
pub use locations::{output_locations, output_locations_lite};
pub use traffic::{output_gre_info, output_vips, output_vpn_credentials};
pub use users::{output_departments, output_groups, output_users};
