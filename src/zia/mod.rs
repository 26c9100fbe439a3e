//! ZIA API client module
//!
//! This module provides functionality to interact with the Zscaler Internet
//! Access cloud service API.

pub mod activation;
pub mod admins;
pub mod audit;
pub mod auth_settings;
mod client;
mod credentials;
pub mod locations;
mod obfuscate;
pub mod provisioning;
mod session;
pub mod traffic;
pub mod users;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ZiaError};

pub use client::{ClientSettings, ZiaClient};
pub use credentials::{CredentialOverrides, CredentialResolver, Profile};
pub use obfuscate::obfuscate_api_key;
pub use session::{ApiRequest, Payload, ZiaSession};

pub use activation::{run_activate_command, run_status_command, ActivationStatus};
pub use admins::{
    run_admin_role_command, run_admin_user_command, run_create_admin_user_command,
    run_delete_admin_user_command, run_update_admin_user_command, AdminRole, AdminUser,
    AdminUserFilter,
};
pub use audit::{run_audit_command, AuditReportRequest, AuditReportStatus};
pub use auth_settings::{run_auth_urls_command, run_update_auth_urls_command, ExemptedUrls};
pub use locations::{
    run_create_location_command, run_delete_location_command, run_location_command,
    run_update_location_command, Location, LocationFilter, LocationLite, LocationLiteFilter,
    SublocationFilter,
};
pub use provisioning::{
    run_assign_groups_command, run_create_sublocations_command, run_export_locations_command,
    run_update_users_command,
};
pub use traffic::{
    run_create_vpn_credential_command, run_delete_vpn_credential_command, run_gre_info_command,
    run_update_vpn_credential_command, run_vip_command, run_vpn_credential_command, GreTunnelInfo,
    VirtualIp, VipFilter, VpnCredential, VpnCredentialFilter,
};
pub use users::{
    run_create_user_command, run_delete_user_command, run_department_command, run_group_command,
    run_update_user_command, run_user_command, Department, Group, User, UserFilter,
};

/// Logical ZIA API endpoints, mapped to their paths under /api/v1
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    AuthenticatedSession,
    Locations,
    Location(i64),
    LocationsLite,
    Sublocations(i64),
    LocationsBulkDelete,
    Users,
    User(i64),
    UsersBulkDelete,
    Groups,
    Group(i64),
    Departments,
    Department(i64),
    VpnCredentials,
    VpnCredential(i64),
    VpnCredentialsBulkDelete,
    GreTunnelInfo,
    VirtualIps,
    AdminRoles,
    AdminUsers,
    AdminUser(i64),
    AuditReport,
    AuditReportDownload,
    ActivationStatus,
    Activate,
    ExemptedUrls,
}

impl Endpoint {
    /// Path of the endpoint relative to the API base
    pub fn path(&self) -> String {
        match self {
            Endpoint::AuthenticatedSession => "/authenticatedSession".to_string(),
            Endpoint::Locations => "/locations".to_string(),
            Endpoint::Location(id) => format!("/locations/{}", id),
            Endpoint::LocationsLite => "/locations/lite".to_string(),
            Endpoint::Sublocations(id) => format!("/locations/{}/sublocations", id),
            Endpoint::LocationsBulkDelete => "/locations/bulkDelete".to_string(),
            Endpoint::Users => "/users".to_string(),
            Endpoint::User(id) => format!("/users/{}", id),
            Endpoint::UsersBulkDelete => "/users/bulkDelete".to_string(),
            Endpoint::Groups => "/groups".to_string(),
            Endpoint::Group(id) => format!("/groups/{}", id),
            Endpoint::Departments => "/departments".to_string(),
            Endpoint::Department(id) => format!("/departments/{}", id),
            Endpoint::VpnCredentials => "/vpnCredentials".to_string(),
            Endpoint::VpnCredential(id) => format!("/vpnCredentials/{}", id),
            Endpoint::VpnCredentialsBulkDelete => "/vpnCredentials/bulkDelete".to_string(),
            Endpoint::GreTunnelInfo => "/orgProvisioning/ipGreTunnelInfo".to_string(),
            Endpoint::VirtualIps => "/vips".to_string(),
            Endpoint::AdminRoles => "/adminRoles/lite".to_string(),
            Endpoint::AdminUsers => "/adminUsers".to_string(),
            Endpoint::AdminUser(id) => format!("/adminUsers/{}", id),
            Endpoint::AuditReport => "/auditlogEntryReport".to_string(),
            Endpoint::AuditReportDownload => "/auditlogEntryReport/download".to_string(),
            Endpoint::ActivationStatus => "/status".to_string(),
            Endpoint::Activate => "/status/activate".to_string(),
            Endpoint::ExemptedUrls => "/authSettings/exemptedUrls".to_string(),
        }
    }
}

/// Reference to another ZIA entity by id, as embedded in resource payloads
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct EntityReference {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl EntityReference {
    pub fn new(id: i64) -> Self {
        Self { id, name: None }
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

/// Append a query pair when the value is present
pub(crate) fn push_param<T: ToString>(
    pairs: &mut Vec<(String, String)>,
    key: &str,
    value: &Option<T>,
) {
    if let Some(v) = value {
        pairs.push((key.to_string(), v.to_string()));
    }
}

/// Extract the numeric `id` field a mutation payload must carry
pub(crate) fn require_id(payload: &serde_json::Value, what: &str) -> Result<i64> {
    payload
        .get("id")
        .and_then(serde_json::Value::as_i64)
        .ok_or_else(|| ZiaError::Validation(format!("{} payload has no \"id\" field", what)))
}

/// Read a JSON payload file for a file-driven mutation
pub(crate) fn read_json_file(path: &str) -> Result<serde_json::Value> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ZiaError::Config(format!("Could not read {}: {}", path, e)))?;
    serde_json::from_str(&content)
        .map_err(|e| ZiaError::Json(format!("Could not parse {}: {}", path, e)))
}
