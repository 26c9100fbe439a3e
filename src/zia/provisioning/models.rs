//! Composite provisioning data models

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::zia::locations::Location;
use crate::zia::users::User;

/// Plan file for creating one sublocation under several parents
#[derive(Deserialize, Debug, Clone)]
pub struct SublocationPlan {
    /// Name given to every created sublocation
    pub name: String,
    /// Parent location names the sublocation is created under
    pub parents: Vec<String>,
    /// Location attributes merged into each create payload
    #[serde(default)]
    pub config: Value,
}

/// Outcome of an assign-users-to-groups run
#[derive(Serialize, Debug, Clone)]
pub struct AssignmentOutcome {
    /// Users in the organization, as counted by the full retrieval
    pub total_users: usize,
    /// Users whose e-mail matched the requested list
    pub matched: usize,
    /// Users that actually gained groups and were updated
    pub updated: Vec<User>,
}

/// The full location tree: parents with their sublocations, index-aligned
#[derive(Serialize, Debug, Clone)]
pub struct LocationTree {
    pub locations: Vec<Location>,
    pub sublocations: Vec<Vec<Location>>,
}

impl LocationTree {
    pub fn sublocation_count(&self) -> usize {
        self.sublocations.iter().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_plan() {
        let json = r#"{
            "name": "Guest WiFi",
            "parents": ["HQ Amsterdam", "Branch Berlin"],
            "config": {"authRequired": true, "ipAddresses": ["10.4.0.0/24"]}
        }"#;

        let plan: SublocationPlan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.name, "Guest WiFi");
        assert_eq!(plan.parents.len(), 2);
        assert_eq!(plan.config["authRequired"], true);
    }

    #[test]
    fn test_deserialize_plan_without_config() {
        let plan: SublocationPlan =
            serde_json::from_str(r#"{"name": "IoT", "parents": ["HQ"]}"#).unwrap();
        assert!(plan.config.is_null());
    }

    #[test]
    fn test_location_tree_counts() {
        let parent: Location = serde_json::from_str(r#"{"id": 1, "name": "HQ"}"#).unwrap();
        let sub: Location =
            serde_json::from_str(r#"{"id": 2, "name": "Guest", "parentId": 1}"#).unwrap();

        let tree = LocationTree {
            locations: vec![parent],
            sublocations: vec![vec![sub.clone(), sub]],
        };
        assert_eq!(tree.locations.len(), 1);
        assert_eq!(tree.sublocation_count(), 2);
    }
}
