//! Location data models

use serde::{Deserialize, Serialize};

use crate::zia::{push_param, EntityReference};

/// Location data from the ZIA API
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: i64,
    pub name: Option<String>,
    pub parent_id: Option<i64>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub tz: Option<String>,
    pub ip_addresses: Option<Vec<String>>,
    pub ports: Option<Vec<i64>>,
    pub vpn_credentials: Option<Vec<EntityReference>>,
    pub auth_required: Option<bool>,
    pub ssl_scan_enabled: Option<bool>,
    pub zapp_ssl_scan_enabled: Option<bool>,
    pub xff_forward_enabled: Option<bool>,
    /// Wire name is "surrogateIP", not camel case
    #[serde(rename = "surrogateIP")]
    pub surrogate_ip: Option<bool>,
    pub idle_time_in_minutes: Option<i64>,
    pub ofw_enabled: Option<bool>,
    pub ips_control: Option<bool>,
    pub aup_enabled: Option<bool>,
    pub caution_enabled: Option<bool>,
    pub up_bandwidth: Option<i64>,
    pub dn_bandwidth: Option<i64>,
    pub profile: Option<String>,
    pub description: Option<String>,
}

impl Location {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn country(&self) -> &str {
        self.country.as_deref().unwrap_or("")
    }

    pub fn timezone(&self) -> &str {
        self.tz.as_deref().unwrap_or("")
    }

    pub fn ip_addresses(&self) -> &[String] {
        self.ip_addresses.as_deref().unwrap_or(&[])
    }

    /// Sublocations carry the id of their parent; parents carry 0 or nothing
    pub fn is_sublocation(&self) -> bool {
        self.parent_id.map(|id| id != 0).unwrap_or(false)
    }

    pub fn auth_required(&self) -> bool {
        self.auth_required.unwrap_or(false)
    }

    pub fn ssl_scan_enabled(&self) -> bool {
        self.ssl_scan_enabled.unwrap_or(false)
    }
}

/// Minimal id/name location from the lite listing
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LocationLite {
    pub id: i64,
    pub name: Option<String>,
    pub parent_id: Option<i64>,
}

impl LocationLite {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

/// Server-side filters for the location listing
#[derive(Debug, Default, Clone)]
pub struct LocationFilter {
    pub search: Option<String>,
    pub ssl_scan_enabled: Option<bool>,
    pub xff_enabled: Option<bool>,
    pub auth_required: Option<bool>,
    pub bw_enforced: Option<bool>,
    pub partner_id: Option<i64>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl LocationFilter {
    /// Query parameters, omitting unset filters
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        push_param(&mut pairs, "search", &self.search);
        push_param(&mut pairs, "sslScanEnabled", &self.ssl_scan_enabled);
        push_param(&mut pairs, "xffEnabled", &self.xff_enabled);
        push_param(&mut pairs, "authRequired", &self.auth_required);
        push_param(&mut pairs, "bwEnforced", &self.bw_enforced);
        push_param(&mut pairs, "partnerId", &self.partner_id);
        push_param(&mut pairs, "page", &self.page);
        push_param(&mut pairs, "pageSize", &self.page_size);
        pairs
    }
}

/// Server-side filters for the lite listing
#[derive(Debug, Default, Clone)]
pub struct LocationLiteFilter {
    pub search: Option<String>,
    pub include_sub_locations: Option<bool>,
    pub include_parent_locations: Option<bool>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl LocationLiteFilter {
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        push_param(&mut pairs, "search", &self.search);
        push_param(&mut pairs, "includeSubLocations", &self.include_sub_locations);
        push_param(
            &mut pairs,
            "includeParentLocations",
            &self.include_parent_locations,
        );
        push_param(&mut pairs, "page", &self.page);
        push_param(&mut pairs, "pageSize", &self.page_size);
        pairs
    }
}

/// Server-side filters for the sublocation listing
#[derive(Debug, Default, Clone)]
pub struct SublocationFilter {
    pub search: Option<String>,
    pub auth_required: Option<bool>,
    pub bw_enforced: Option<bool>,
    pub enforce_aup: Option<bool>,
    pub enable_firewall: Option<bool>,
}

impl SublocationFilter {
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        push_param(&mut pairs, "search", &self.search);
        push_param(&mut pairs, "authRequired", &self.auth_required);
        push_param(&mut pairs, "bwEnforced", &self.bw_enforced);
        push_param(&mut pairs, "enforceAup", &self.enforce_aup);
        push_param(&mut pairs, "enableFirewall", &self.enable_firewall);
        pairs
    }
}
