//! Audit log report command definitions and arguments

use clap::{Parser, Subcommand};

use super::common::OutputFormat;

/// Actions for the 'audit' command
#[derive(Subcommand, Debug)]
pub enum AuditAction {
    /// Request a new audit log report
    Request(AuditRequestArgs),

    /// Show the status of the pending report
    Status(AuditStatusArgs),

    /// Cancel the pending report
    Cancel,

    /// Download the completed report as CSV
    Download(AuditDownloadArgs),
}

/// Arguments for 'audit request' subcommand
#[derive(Parser, Debug)]
pub struct AuditRequestArgs {
    /// Report window start, "YYYY-MM-DD HH:MM[:SS]" (UTC)
    #[arg(long)]
    pub start: String,

    /// Report window end, "YYYY-MM-DD HH:MM[:SS]" (UTC)
    #[arg(long)]
    pub end: String,

    /// Filter by action types (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub action_types: Vec<String>,

    /// Filter by category
    #[arg(long)]
    pub category: Option<String>,

    /// Filter by subcategories (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub subcategories: Vec<String>,

    /// Filter by action result (SUCCESS, FAILURE)
    #[arg(long)]
    pub action_result: Option<String>,

    /// Filter by action interface (UI, API)
    #[arg(long)]
    pub action_interface: Option<String>,

    /// Filter by object name
    #[arg(long)]
    pub object_name: Option<String>,

    /// Filter by client IP
    #[arg(long)]
    pub client_ip: Option<String>,

    /// Filter by admin name
    #[arg(long)]
    pub admin_name: Option<String>,

    /// Filter by target organization ID
    #[arg(long)]
    pub target_org_id: Option<i64>,
}

/// Arguments for 'audit status' subcommand
#[derive(Parser, Debug)]
pub struct AuditStatusArgs {
    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'audit download' subcommand
#[derive(Parser, Debug)]
pub struct AuditDownloadArgs {
    /// Write the CSV to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,
}
