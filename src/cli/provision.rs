//! Composite provisioning command definitions and arguments

use clap::{Parser, Subcommand};

use super::common::OutputFormat;

/// Arguments for the 'assign-groups' command
#[derive(Parser, Debug)]
pub struct AssignGroupsArgs {
    /// User e-mail addresses (comma-separated)
    #[arg(long, value_delimiter = ',', required = true)]
    pub users: Vec<String>,

    /// Group IDs to add to each user (comma-separated)
    #[arg(long, value_delimiter = ',', required = true)]
    pub groups: Vec<i64>,

    /// Department ID assigned to users that have none
    #[arg(long)]
    pub default_dept: Option<i64>,

    /// Output format for the updated users
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Resource types for the 'export' command
#[derive(Subcommand, Debug)]
pub enum ExportResource {
    /// Export the location tree (parents with their sublocations)
    #[command(visible_alias = "loc")]
    Locations(ExportLocationsArgs),
}

/// Arguments for 'export locations' subcommand
#[derive(Parser, Debug)]
pub struct ExportLocationsArgs {
    /// Server-side name search limiting the exported parents
    #[arg(short, long)]
    pub search: Option<String>,
}
