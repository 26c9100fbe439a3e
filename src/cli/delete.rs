//! Delete command resource definitions and arguments

use clap::{Parser, Subcommand};

/// Resource types for the 'delete' command
#[derive(Subcommand, Debug)]
pub enum DeleteResource {
    /// Delete locations by ID (two or more IDs use the bulk endpoint)
    #[command(visible_alias = "locations", visible_alias = "loc")]
    Location(DeleteArgs),

    /// Delete users by ID (two or more IDs use the bulk endpoint)
    #[command(visible_alias = "users")]
    User(DeleteArgs),

    /// Delete VPN credentials by ID (two or more IDs use the bulk endpoint)
    #[command(visible_alias = "vpn-credentials", visible_alias = "vpn")]
    VpnCredential(DeleteArgs),

    /// Delete an admin user by ID
    #[command(visible_alias = "admin-users")]
    AdminUser(DeleteOneArgs),
}

/// Arguments for multi-ID delete subcommands
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Resource IDs to delete
    #[arg(required = true)]
    pub ids: Vec<i64>,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}

/// Arguments for single-ID delete subcommands
#[derive(Parser, Debug)]
pub struct DeleteOneArgs {
    /// Resource ID to delete
    pub id: i64,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}
