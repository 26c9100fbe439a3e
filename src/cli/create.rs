//! Create command resource definitions and arguments

use clap::{Parser, Subcommand};

use super::common::OutputFormat;

/// Resource types for the 'create' command
#[derive(Subcommand, Debug)]
pub enum CreateResource {
    /// Create a location from a JSON file
    #[command(visible_alias = "loc")]
    Location(FileArgs),

    /// Create sublocations under several parents from a plan file
    #[command(visible_alias = "subloc")]
    Sublocations(FileArgs),

    /// Create a user from a JSON file
    User(FileArgs),

    /// Create an admin user from a JSON file
    AdminUser(FileArgs),

    /// Add a VPN credential from a JSON file
    #[command(visible_alias = "vpn")]
    VpnCredential(FileArgs),
}

/// Arguments for file-driven mutations
#[derive(Parser, Debug)]
pub struct FileArgs {
    /// JSON payload file
    #[arg(short, long)]
    pub file: String,

    /// Output format for the server confirmation
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Json)]
    pub output: OutputFormat,
}
