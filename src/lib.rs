//! ziactl - Manage Zscaler Internet Access from the command line
//!
//! A CLI and thin client library for the ZIA admin REST API.
//!
//! # Features
//!
//! - Locations, sublocations, users, groups and departments
//! - VPN credentials, GRE tunnel info and public service edge VIPs
//! - Admin roles and admin users
//! - Audit log reports and configuration activation
//! - Multiple output formats (table, CSV, JSON, YAML)
//! - Automatic pagination and 429 retry handling
//!
//! # Example
//!
//! ```bash
//! # List all locations
//! ziactl get locations --all
//!
//! # Show one user
//! ziactl get user 889214
//!
//! # Delete two VPN credentials via the bulk endpoint
//! ziactl delete vpn 54 55 -y
//!
//! # Activate pending changes
//! ziactl activate
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod ui;
pub mod zia;

pub use cli::{Cli, Command, GetResource, OutputFormat};
pub use error::{Result, ZiaError};
pub use zia::{
    ActivationStatus, AdminRole, AdminUser, ApiRequest, ClientSettings, CredentialOverrides,
    CredentialResolver, Department, Endpoint, EntityReference, ExemptedUrls, GreTunnelInfo, Group,
    Location, LocationFilter, LocationLite, Payload, User, UserFilter, VirtualIp, VpnCredential,
    ZiaClient, ZiaSession,
};
