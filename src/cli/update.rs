//! Update command resource definitions and arguments

use clap::{Parser, Subcommand};

use super::common::OutputFormat;
use super::create::FileArgs;

/// Resource types for the 'update' command
#[derive(Subcommand, Debug)]
pub enum UpdateResource {
    /// Update a location from a JSON file (must carry "id")
    #[command(visible_alias = "loc")]
    Location(FileArgs),

    /// Update a user from a JSON file (must carry "id")
    User(FileArgs),

    /// Update many users from a JSON array file (each must carry "id")
    Users(FileArgs),

    /// Update an admin user from a JSON file (must carry "id")
    AdminUser(FileArgs),

    /// Update a VPN credential from a JSON file (must carry "id")
    #[command(visible_alias = "vpn")]
    VpnCredential(FileArgs),

    /// Modify the authentication-exempt URL list
    AuthUrls(AuthUrlsUpdateArgs),
}

/// Arguments for 'update auth-urls' subcommand
#[derive(Parser, Debug)]
pub struct AuthUrlsUpdateArgs {
    /// URLs to add to the exempt list (comma-separated)
    #[arg(long, value_delimiter = ',', conflicts_with = "remove")]
    pub add: Vec<String>,

    /// URLs to remove from the exempt list (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub remove: Vec<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
