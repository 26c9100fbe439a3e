//! Get command resource definitions and arguments

use clap::{Parser, Subcommand};

use super::common::OutputFormat;

/// Resource types for the 'get' command
#[derive(Subcommand, Debug)]
pub enum GetResource {
    /// Get locations
    #[command(visible_alias = "locations", visible_alias = "loc")]
    Location(LocationArgs),

    /// Get users
    #[command(visible_alias = "users")]
    User(UserArgs),

    /// Get user groups
    #[command(visible_alias = "groups")]
    Group(GroupArgs),

    /// Get departments
    #[command(visible_alias = "departments", visible_alias = "dept")]
    Department(DepartmentArgs),

    /// Get VPN credentials
    #[command(visible_alias = "vpn-credentials", visible_alias = "vpn")]
    VpnCredential(VpnCredentialArgs),

    /// Get virtual IP addresses of ZIA public service edges
    #[command(visible_alias = "vips")]
    Vip(VipArgs),

    /// Get GRE tunnel provisioning info
    #[command(visible_alias = "gre")]
    GreInfo(GreInfoArgs),

    /// Get admin roles
    #[command(visible_alias = "admin-roles", visible_alias = "roles")]
    AdminRole(AdminRoleArgs),

    /// Get admin users
    #[command(visible_alias = "admin-users", visible_alias = "admins")]
    AdminUser(AdminUserArgs),

    /// Get configuration activation status
    Status(StatusArgs),

    /// Get authentication-exempt URLs
    #[command(visible_alias = "auth-url")]
    AuthUrls(AuthUrlsArgs),
}

/// Arguments for 'get location' subcommand
#[derive(Parser, Debug)]
pub struct LocationArgs {
    /// Location ID (if specified, shows details for that location)
    pub id: Option<i64>,

    /// Server-side name search
    #[arg(short, long)]
    pub search: Option<String>,

    /// List id/name pairs only (lite listing)
    #[arg(long, conflicts_with = "id")]
    pub lite: bool,

    /// List sublocations of the given location ID
    #[arg(long, requires = "id")]
    pub sublocations: bool,

    /// Filter by SSL inspection enablement (true/false)
    #[arg(long)]
    pub ssl_scan_enabled: Option<bool>,

    /// Filter by XFF forwarding (true/false)
    #[arg(long)]
    pub xff_enabled: Option<bool>,

    /// Filter by authentication requirement (true/false)
    #[arg(long)]
    pub auth_required: Option<bool>,

    /// Filter by bandwidth enforcement (true/false)
    #[arg(long)]
    pub bw_enforced: Option<bool>,

    /// Filter by partner ID
    #[arg(long)]
    pub partner_id: Option<i64>,

    /// Include sublocations in the lite listing
    #[arg(long)]
    pub include_sub_locations: bool,

    /// Include parent locations in the lite listing
    #[arg(long)]
    pub include_parent_locations: bool,

    /// Filter sublocations by AUP enforcement (true/false)
    #[arg(long)]
    pub enforce_aup: Option<bool>,

    /// Filter sublocations by firewall enablement (true/false)
    #[arg(long)]
    pub enable_firewall: Option<bool>,

    /// Walk every page of the listing
    #[arg(long)]
    pub all: bool,

    /// Fetch the given page only (with --all: start the walk there)
    #[arg(long)]
    pub page: Option<u32>,

    /// Items per page
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get user' subcommand
#[derive(Parser, Debug)]
pub struct UserArgs {
    /// User ID (if specified, shows details for that user)
    pub id: Option<i64>,

    /// Filter by user name (server-side partial match)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Filter by department name
    #[arg(long)]
    pub dept: Option<String>,

    /// Filter by group name
    #[arg(long)]
    pub group: Option<String>,

    /// Walk every page of the listing
    #[arg(long)]
    pub all: bool,

    /// Fetch the given page only (with --all: start the walk there)
    #[arg(long)]
    pub page: Option<u32>,

    /// Items per page
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get group' subcommand
#[derive(Parser, Debug)]
pub struct GroupArgs {
    /// Group ID (if specified, shows details for that group)
    pub id: Option<i64>,

    /// Server-side name search
    #[arg(short, long)]
    pub search: Option<String>,

    /// Walk every page of the listing
    #[arg(long)]
    pub all: bool,

    /// Fetch the given page only (with --all: start the walk there)
    #[arg(long)]
    pub page: Option<u32>,

    /// Items per page
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get department' subcommand
#[derive(Parser, Debug)]
pub struct DepartmentArgs {
    /// Department ID (if specified, shows details for that department)
    pub id: Option<i64>,

    /// Server-side name search
    #[arg(short, long)]
    pub search: Option<String>,

    /// Walk every page of the listing
    #[arg(long)]
    pub all: bool,

    /// Fetch the given page only (with --all: start the walk there)
    #[arg(long)]
    pub page: Option<u32>,

    /// Items per page
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get vpn-credential' subcommand
#[derive(Parser, Debug)]
pub struct VpnCredentialArgs {
    /// VPN credential ID (if specified, shows details for that credential)
    pub id: Option<i64>,

    /// Server-side search on FQDN or IP
    #[arg(short, long)]
    pub search: Option<String>,

    /// Filter by credential type (CN, IP, UFQDN, XAUTH)
    #[arg(long = "type")]
    pub credential_type: Option<String>,

    /// Only credentials not assigned to any location
    #[arg(long)]
    pub include_only_without_location: bool,

    /// Filter by assigned location ID
    #[arg(long)]
    pub location_id: Option<i64>,

    /// Filter by managing partner ID
    #[arg(long)]
    pub managed_by: Option<i64>,

    /// Walk every page of the listing
    #[arg(long)]
    pub all: bool,

    /// Fetch the given page only (with --all: start the walk there)
    #[arg(long)]
    pub page: Option<u32>,

    /// Items per page
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get vip' subcommand
#[derive(Parser, Debug)]
pub struct VipArgs {
    /// Filter by data center name
    #[arg(long)]
    pub dc: Option<String>,

    /// Filter by region
    #[arg(long)]
    pub region: Option<String>,

    /// Which addresses to include (all, private, public)
    #[arg(long)]
    pub include: Option<String>,

    /// Walk every page of the listing
    #[arg(long)]
    pub all: bool,

    /// Fetch the given page only (with --all: start the walk there)
    #[arg(long)]
    pub page: Option<u32>,

    /// Items per page
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get gre-info' subcommand
#[derive(Parser, Debug)]
pub struct GreInfoArgs {
    /// Restrict to these tunnel source IPs (repeatable)
    #[arg(long = "ip")]
    pub ips: Vec<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get admin-role' subcommand
#[derive(Parser, Debug)]
pub struct AdminRoleArgs {
    /// Include the auditor role
    #[arg(long)]
    pub include_auditor_role: bool,

    /// Include the partner role
    #[arg(long)]
    pub include_partner_role: bool,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get admin-user' subcommand
#[derive(Parser, Debug)]
pub struct AdminUserArgs {
    /// Admin user ID (if specified, shows details for that admin)
    pub id: Option<i64>,

    /// Server-side search on login name
    #[arg(short, long)]
    pub search: Option<String>,

    /// Include auditor users
    #[arg(long)]
    pub include_auditor_users: bool,

    /// Include admin users
    #[arg(long)]
    pub include_admin_users: bool,

    /// Walk every page of the listing
    #[arg(long)]
    pub all: bool,

    /// Fetch the given page only (with --all: start the walk there)
    #[arg(long)]
    pub page: Option<u32>,

    /// Items per page
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get status' subcommand
#[derive(Parser, Debug)]
pub struct StatusArgs {
    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get auth-urls' subcommand
#[derive(Parser, Debug)]
pub struct AuthUrlsArgs {
    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
