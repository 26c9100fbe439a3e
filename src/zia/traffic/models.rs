//! Traffic forwarding data models

use serde::{Deserialize, Serialize};

use crate::zia::{push_param, EntityReference};

/// VPN credential data from the ZIA API
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct VpnCredential {
    pub id: i64,
    #[serde(rename = "type")]
    pub credential_type: Option<String>,
    pub fqdn: Option<String>,
    pub ip_address: Option<String>,
    pub comments: Option<String>,
    pub location: Option<EntityReference>,
    pub managed_by: Option<EntityReference>,
}

impl VpnCredential {
    pub fn credential_type(&self) -> &str {
        self.credential_type.as_deref().unwrap_or("")
    }

    pub fn fqdn(&self) -> &str {
        self.fqdn.as_deref().unwrap_or("")
    }

    pub fn ip_address(&self) -> &str {
        self.ip_address.as_deref().unwrap_or("")
    }

    pub fn location_name(&self) -> &str {
        self.location.as_ref().map(|l| l.name()).unwrap_or("")
    }

    pub fn comments(&self) -> &str {
        self.comments.as_deref().unwrap_or("")
    }
}

/// GRE tunnel provisioning info for a tunnel source IP
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GreTunnelInfo {
    pub ip_address: Option<String>,
    pub gre_enabled: Option<bool>,
    #[serde(rename = "greTunnelIP")]
    pub gre_tunnel_ip: Option<String>,
    #[serde(rename = "primaryGW")]
    pub primary_gw: Option<String>,
    #[serde(rename = "secondaryGW")]
    pub secondary_gw: Option<String>,
    #[serde(rename = "tunID")]
    pub tun_id: Option<i64>,
    pub gre_range_primary: Option<String>,
    pub gre_range_secondary: Option<String>,
}

impl GreTunnelInfo {
    pub fn ip_address(&self) -> &str {
        self.ip_address.as_deref().unwrap_or("")
    }

    pub fn gre_enabled(&self) -> bool {
        self.gre_enabled.unwrap_or(false)
    }

    pub fn primary_gw(&self) -> &str {
        self.primary_gw.as_deref().unwrap_or("")
    }

    pub fn secondary_gw(&self) -> &str {
        self.secondary_gw.as_deref().unwrap_or("")
    }
}

/// Virtual IP address of a ZIA public service edge
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct VirtualIp {
    pub cloud_name: Option<String>,
    pub region: Option<String>,
    pub city: Option<String>,
    pub data_center: Option<String>,
    pub location: Option<String>,
    pub vpn_ips: Option<Vec<String>>,
    pub vpn_domain_name: Option<String>,
    pub gre_ips: Option<Vec<String>>,
    pub gre_domain_name: Option<String>,
    pub pac_ips: Option<Vec<String>>,
    pub pac_domain_name: Option<String>,
}

impl VirtualIp {
    pub fn data_center(&self) -> &str {
        self.data_center.as_deref().unwrap_or("")
    }

    pub fn region(&self) -> &str {
        self.region.as_deref().unwrap_or("")
    }

    pub fn city(&self) -> &str {
        self.city.as_deref().unwrap_or("")
    }

    pub fn gre_ips(&self) -> &[String] {
        self.gre_ips.as_deref().unwrap_or(&[])
    }

    pub fn vpn_ips(&self) -> &[String] {
        self.vpn_ips.as_deref().unwrap_or(&[])
    }
}

/// Server-side filters for the VPN credential listing
#[derive(Debug, Default, Clone)]
pub struct VpnCredentialFilter {
    pub search: Option<String>,
    pub credential_type: Option<String>,
    pub include_only_without_location: Option<bool>,
    pub location_id: Option<i64>,
    pub managed_by: Option<i64>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl VpnCredentialFilter {
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        push_param(&mut pairs, "search", &self.search);
        push_param(&mut pairs, "type", &self.credential_type);
        push_param(
            &mut pairs,
            "includeOnlyWithoutLocation",
            &self.include_only_without_location,
        );
        push_param(&mut pairs, "locationId", &self.location_id);
        push_param(&mut pairs, "managedBy", &self.managed_by);
        push_param(&mut pairs, "page", &self.page);
        push_param(&mut pairs, "pageSize", &self.page_size);
        pairs
    }
}

/// Server-side filters for the virtual IP listing
#[derive(Debug, Default, Clone)]
pub struct VipFilter {
    pub dc: Option<String>,
    pub region: Option<String>,
    pub include: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl VipFilter {
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        push_param(&mut pairs, "dc", &self.dc);
        push_param(&mut pairs, "region", &self.region);
        push_param(&mut pairs, "include", &self.include);
        push_param(&mut pairs, "page", &self.page);
        push_param(&mut pairs, "pageSize", &self.page_size);
        pairs
    }
}
