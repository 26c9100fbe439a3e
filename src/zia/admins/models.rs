//! Admin role and admin user data models

use serde::{Deserialize, Serialize};

use crate::zia::{push_param, EntityReference};

/// Administrator role from the lite listing
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AdminRole {
    pub id: i64,
    pub rank: Option<i64>,
    pub name: Option<String>,
    pub role_type: Option<String>,
}

impl AdminRole {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn role_type(&self) -> &str {
        self.role_type.as_deref().unwrap_or("")
    }
}

/// Administrator user data from the ZIA API
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub id: i64,
    pub login_name: Option<String>,
    pub user_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<EntityReference>,
    pub comments: Option<String>,
    pub admin_scope_type: Option<String>,
    pub is_auditor: Option<bool>,
    pub disabled: Option<bool>,
}

impl AdminUser {
    pub fn login_name(&self) -> &str {
        self.login_name.as_deref().unwrap_or("")
    }

    pub fn user_name(&self) -> &str {
        self.user_name.as_deref().unwrap_or("")
    }

    pub fn email(&self) -> &str {
        self.email.as_deref().unwrap_or("")
    }

    pub fn role_name(&self) -> &str {
        self.role.as_ref().map(|r| r.name()).unwrap_or("")
    }

    pub fn is_auditor(&self) -> bool {
        self.is_auditor.unwrap_or(false)
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled.unwrap_or(false)
    }
}

/// Server-side filters for the admin role listing
#[derive(Debug, Default, Clone)]
pub struct AdminRoleFilter {
    pub include_auditor_role: Option<bool>,
    pub include_partner_role: Option<bool>,
}

impl AdminRoleFilter {
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        push_param(&mut pairs, "includeAuditorRole", &self.include_auditor_role);
        push_param(&mut pairs, "includePartnerRole", &self.include_partner_role);
        pairs
    }
}

/// Server-side filters for the admin user listing
#[derive(Debug, Default, Clone)]
pub struct AdminUserFilter {
    pub include_auditor_users: Option<bool>,
    pub include_admin_users: Option<bool>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl AdminUserFilter {
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        push_param(
            &mut pairs,
            "includeAuditorUsers",
            &self.include_auditor_users,
        );
        push_param(&mut pairs, "includeAdminUsers", &self.include_admin_users);
        push_param(&mut pairs, "search", &self.search);
        push_param(&mut pairs, "page", &self.page);
        push_param(&mut pairs, "pageSize", &self.page_size);
        pairs
    }
}
