//! CLI argument parsing

use clap::{Parser, Subcommand};

use crate::config::defaults;

mod audit;
mod common;
mod create;
mod delete;
mod get;
mod provision;
mod update;

pub use audit::{AuditAction, AuditDownloadArgs, AuditRequestArgs, AuditStatusArgs};
pub use common::OutputFormat;
pub use create::{CreateResource, FileArgs};
pub use delete::{DeleteArgs, DeleteOneArgs, DeleteResource};
pub use get::{
    AdminRoleArgs, AdminUserArgs, AuthUrlsArgs, DepartmentArgs, GetResource, GreInfoArgs,
    GroupArgs, LocationArgs, StatusArgs, UserArgs, VipArgs, VpnCredentialArgs,
};
pub use provision::{AssignGroupsArgs, ExportLocationsArgs, ExportResource};
pub use update::{AuthUrlsUpdateArgs, UpdateResource};

/// ZIA admin CLI
#[derive(Parser, Debug)]
#[command(name = "ziactl")]
#[command(version)]
#[command(about = "Manage Zscaler Internet Access from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Profile file path (default: ~/.config/ziactl/config.json)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// ZIA API host (e.g. zsapi.zscalertwo.net)
    #[arg(short = 'H', long, global = true, conflicts_with = "cloud")]
    pub host: Option<String>,

    /// ZIA cloud name (zscaler, zscalerone, zscalertwo, zscalerthree, zscloud, zscalerbeta)
    #[arg(long, global = true)]
    pub cloud: Option<String>,

    /// Admin username (overrides env vars and profile file)
    #[arg(short = 'u', long, global = true)]
    pub username: Option<String>,

    /// Admin password (overrides env vars and profile file)
    #[arg(short = 'p', long, global = true)]
    pub password: Option<String>,

    /// API key (overrides env vars and profile file)
    #[arg(short = 'k', long, global = true)]
    pub api_key: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Batch mode: no spinner, prompts auto-decline
    #[arg(long, global = true, default_value_t = false)]
    pub batch: bool,

    /// Omit the header row in table and CSV output
    #[arg(long, global = true, default_value_t = false)]
    pub no_header: bool,

    /// Activate pending changes after a successful mutating command
    #[arg(long, global = true, default_value_t = false)]
    pub apply_after: bool,

    /// Also write the raw JSON result to this file
    #[arg(long, global = true)]
    pub save: Option<String>,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Retrieve resources
    Get {
        #[command(subcommand)]
        resource: GetResource,
    },

    /// Create resources from JSON files
    Create {
        #[command(subcommand)]
        resource: CreateResource,
    },

    /// Update resources
    Update {
        #[command(subcommand)]
        resource: UpdateResource,
    },

    /// Delete resources
    Delete {
        #[command(subcommand)]
        resource: DeleteResource,
    },

    /// Audit log reports
    Audit {
        #[command(subcommand)]
        action: AuditAction,
    },

    /// Activate pending configuration changes
    Activate,

    /// Add users to groups by e-mail address
    AssignGroups(AssignGroupsArgs),

    /// Export resource trees as JSON
    Export {
        #[command(subcommand)]
        resource: ExportResource,
    },
}

impl Command {
    /// True for commands that change ZIA configuration
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Command::Create { .. }
                | Command::Update { .. }
                | Command::Delete { .. }
                | Command::AssignGroups(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["ziactl", "get", "status"]);
        assert_eq!(cli.log_level, defaults::LOG_LEVEL);
        assert!(!cli.batch);
        assert!(!cli.no_header);
        assert!(!cli.apply_after);
        assert!(cli.host.is_none());
        assert!(cli.cloud.is_none());
        assert!(cli.save.is_none());
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["ziactl", "get", "location", "--cloud", "zscalertwo", "--batch"]);
        assert_eq!(cli.cloud.as_deref(), Some("zscalertwo"));
        assert!(cli.batch);
    }

    #[test]
    fn test_cli_get_location_args() {
        let cli = Cli::parse_from([
            "ziactl",
            "get",
            "location",
            "--search",
            "branch",
            "--auth-required",
            "true",
            "--all",
            "-o",
            "json",
        ]);
        let Command::Get {
            resource: GetResource::Location(args),
        } = &cli.command
        else {
            panic!("Expected get location");
        };
        assert_eq!(args.search.as_deref(), Some("branch"));
        assert_eq!(args.auth_required, Some(true));
        assert!(args.all);
        assert_eq!(args.output, OutputFormat::Json);
    }

    #[test]
    fn test_cli_get_location_alias() {
        let cli = Cli::parse_from(["ziactl", "get", "locations"]);
        assert!(matches!(
            cli.command,
            Command::Get {
                resource: GetResource::Location(_)
            }
        ));
    }

    #[test]
    fn test_cli_delete_multiple_ids() {
        let cli = Cli::parse_from(["ziactl", "delete", "user", "11", "12", "13", "-y"]);
        let Command::Delete {
            resource: DeleteResource::User(args),
        } = &cli.command
        else {
            panic!("Expected delete user");
        };
        assert_eq!(args.ids, vec![11, 12, 13]);
        assert!(args.yes);
    }

    #[test]
    fn test_cli_assign_groups_args() {
        let cli = Cli::parse_from([
            "ziactl",
            "assign-groups",
            "--users",
            "a@example.com,b@example.com",
            "--groups",
            "7,9",
        ]);
        let Command::AssignGroups(args) = &cli.command else {
            panic!("Expected assign-groups");
        };
        assert_eq!(args.users.len(), 2);
        assert_eq!(args.groups, vec![7, 9]);
        assert!(args.default_dept.is_none());
    }

    #[test]
    fn test_cli_audit_request_args() {
        let cli = Cli::parse_from([
            "ziactl",
            "audit",
            "request",
            "--start",
            "2024-05-01 00:00",
            "--end",
            "2024-05-02 00:00",
            "--action-result",
            "FAILURE",
        ]);
        let Command::Audit {
            action: AuditAction::Request(args),
        } = &cli.command
        else {
            panic!("Expected audit request");
        };
        assert_eq!(args.start, "2024-05-01 00:00");
        assert_eq!(args.action_result.as_deref(), Some("FAILURE"));
    }

    #[test]
    fn test_command_is_mutating() {
        let cli = Cli::parse_from(["ziactl", "delete", "location", "5", "-y"]);
        assert!(cli.command.is_mutating());

        let cli = Cli::parse_from(["ziactl", "get", "status"]);
        assert!(!cli.command.is_mutating());

        let cli = Cli::parse_from(["ziactl", "activate"]);
        assert!(!cli.command.is_mutating());
    }
}
