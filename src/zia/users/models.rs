//! User, group and department data models

use serde::{Deserialize, Serialize};

use crate::zia::{push_param, EntityReference};

/// User data from the ZIA API
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub groups: Option<Vec<EntityReference>>,
    pub department: Option<EntityReference>,
    pub comments: Option<String>,
    pub admin_user: Option<bool>,
    #[serde(rename = "type")]
    pub user_type: Option<String>,
    pub deleted: Option<bool>,
}

impl User {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn email(&self) -> &str {
        self.email.as_deref().unwrap_or("")
    }

    pub fn department_name(&self) -> &str {
        self.department.as_ref().map(|d| d.name()).unwrap_or("")
    }

    pub fn group_ids(&self) -> Vec<i64> {
        self.groups
            .as_deref()
            .unwrap_or(&[])
            .iter()
            .map(|g| g.id)
            .collect()
    }

    /// Group names joined for table display
    pub fn group_names(&self) -> String {
        self.groups
            .as_deref()
            .unwrap_or(&[])
            .iter()
            .map(|g| g.name())
            .filter(|n| !n.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// User group data from the ZIA API
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: i64,
    pub name: Option<String>,
    pub idp_id: Option<i64>,
    pub comments: Option<String>,
}

impl Group {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn comments(&self) -> &str {
        self.comments.as_deref().unwrap_or("")
    }
}

/// Department data from the ZIA API
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: i64,
    pub name: Option<String>,
    pub idp_id: Option<i64>,
    pub comments: Option<String>,
    pub deleted: Option<bool>,
}

impl Department {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn comments(&self) -> &str {
        self.comments.as_deref().unwrap_or("")
    }
}

/// Server-side filters for the user listing
#[derive(Debug, Default, Clone)]
pub struct UserFilter {
    pub name: Option<String>,
    pub dept: Option<String>,
    pub group: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl UserFilter {
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        push_param(&mut pairs, "name", &self.name);
        push_param(&mut pairs, "dept", &self.dept);
        push_param(&mut pairs, "group", &self.group);
        push_param(&mut pairs, "page", &self.page);
        push_param(&mut pairs, "pageSize", &self.page_size);
        pairs
    }
}

/// Server-side filters for group and department listings
#[derive(Debug, Default, Clone)]
pub struct SearchFilter {
    pub search: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl SearchFilter {
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        push_param(&mut pairs, "search", &self.search);
        push_param(&mut pairs, "page", &self.page);
        push_param(&mut pairs, "pageSize", &self.page_size);
        pairs
    }
}
