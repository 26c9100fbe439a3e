//! Composite provisioning operations built on the resource primitives

use std::collections::HashSet;

use futures::future::join_all;
use log::{debug, info};
use serde_json::{json, Value};

use crate::config::api;
use crate::error::{Result, ZiaError};
use crate::zia::locations::{LocationFilter, LocationLiteFilter, SublocationFilter};
use crate::zia::session::{ApiRequest, ZiaSession};
use crate::zia::Endpoint;

use super::models::{AssignmentOutcome, LocationTree, SublocationPlan};

impl ZiaSession {
    /// Add the given groups to every user whose e-mail is in the list.
    ///
    /// The whole user base is retrieved and cross-matched against the
    /// lowercased e-mail list; matched users missing any of the requested
    /// groups get them appended and are written back one PUT at a time.
    /// Users are handled as raw JSON so fields the typed model does not know
    /// survive the round trip. A user without a department needs one to save,
    /// so `default_dept` is required as soon as such a user is matched.
    pub async fn assign_users_to_groups(
        &self,
        user_mails: &[String],
        group_ids: &[i64],
        default_dept: Option<i64>,
    ) -> Result<AssignmentOutcome> {
        let request = ApiRequest::get(self.url(&Endpoint::Users));
        let all_users: Vec<Value> = self.fetch_all(&request, api::USER_SYNC_PAGE_SIZE).await?;

        let wanted: HashSet<String> = user_mails.iter().map(|m| m.to_lowercase()).collect();
        let matched: Vec<Value> = all_users
            .iter()
            .filter(|user| {
                user["email"]
                    .as_str()
                    .map(|e| wanted.contains(&e.to_lowercase()))
                    .unwrap_or(false)
            })
            .cloned()
            .collect();

        let mut updated = Vec::new();
        for mut user in matched.clone() {
            let existing: HashSet<i64> = user["groups"]
                .as_array()
                .map(|groups| groups.iter().filter_map(|g| g["id"].as_i64()).collect())
                .unwrap_or_default();

            let to_add: Vec<i64> = group_ids
                .iter()
                .copied()
                .filter(|id| !existing.contains(id))
                .collect();
            if to_add.is_empty() {
                continue;
            }

            if !user["groups"].is_array() {
                user["groups"] = json!([]);
            }
            if let Some(groups) = user["groups"].as_array_mut() {
                for id in to_add {
                    groups.push(json!({ "id": id }));
                }
            }

            if user["department"].is_null() {
                let Some(dept) = default_dept else {
                    return Err(ZiaError::Validation(format!(
                        "User {} has no department; pass --default-dept to assign one",
                        user["email"].as_str().unwrap_or("<unknown>")
                    )));
                };
                user["department"] = json!({ "id": dept });
            }

            self.update_user(user.clone()).await?;
            updated.push(serde_json::from_value(user)?);
        }

        info!(
            "Group assignment: {} users total, {} given, {} matched, {} updated",
            all_users.len(),
            user_mails.len(),
            matched.len(),
            updated.len()
        );

        Ok(AssignmentOutcome {
            total_users: all_users.len(),
            matched: matched.len(),
            updated,
        })
    }

    /// Create one sublocation under each parent named in the plan.
    ///
    /// Parent names resolve through the lite listing; an unknown name fails
    /// the whole plan before anything is created.
    pub async fn create_sublocations_from_plan(
        &self,
        plan: &SublocationPlan,
    ) -> Result<Vec<Value>> {
        let filter = LocationLiteFilter {
            include_parent_locations: Some(true),
            ..LocationLiteFilter::default()
        };
        let parents = self.get_locations_lite(&filter, true).await?;

        let mut parent_ids = Vec::with_capacity(plan.parents.len());
        for name in &plan.parents {
            let id = parents
                .iter()
                .find(|p| p.name() == name)
                .map(|p| p.id)
                .ok_or_else(|| {
                    ZiaError::Validation(format!("No location named '{}' found", name))
                })?;
            parent_ids.push(id);
        }

        let mut created = Vec::new();
        for (name, parent_id) in plan.parents.iter().zip(parent_ids) {
            let mut body = json!({
                "name": plan.name,
                "parentId": parent_id,
            });
            if let Some(config) = plan.config.as_object() {
                for (key, value) in config {
                    body[key] = value.clone();
                }
            }

            debug!("Creating sublocation '{}' under '{}'", plan.name, name);
            if let Some(location) = self.create_location(body).await? {
                created.push(location);
            }
        }
        Ok(created)
    }

    /// Export every parent location together with its sublocations.
    ///
    /// Sublocation fetches fan out in parallel; the result keeps the parent
    /// listing's order, sublocation lists index-aligned with their parents.
    pub async fn export_location_tree(&self, search: Option<String>) -> Result<LocationTree> {
        let filter = LocationFilter {
            search,
            ..LocationFilter::default()
        };
        let locations = self.get_locations(&filter, true).await?;

        let sublocation_filter = SublocationFilter::default();
        let fetches = locations
            .iter()
            .map(|parent| self.get_sublocations(parent.id, &sublocation_filter));
        let sublocations = join_all(fetches)
            .await
            .into_iter()
            .collect::<Result<Vec<_>>>()?;

        let tree = LocationTree {
            locations,
            sublocations,
        };
        info!(
            "Exported {} locations with {} sublocations",
            tree.locations.len(),
            tree.sublocation_count()
        );
        Ok(tree)
    }

    /// Update many users in one run, in file order.
    ///
    /// Each entry must carry its `id`; the first failure aborts the run.
    /// Returns the server confirmations.
    pub async fn update_users_bulk(&self, users: Vec<Value>) -> Result<Vec<Value>> {
        let mut confirmations = Vec::with_capacity(users.len());
        for user in users {
            if let Some(confirmed) = self.update_user(user).await? {
                confirmations.push(confirmed);
            }
        }
        Ok(confirmations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zia::session::test_session;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn empty_page() -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(serde_json::json!([]))
    }

    #[tokio::test]
    async fn test_assign_users_to_groups() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {
                    "id": 1,
                    "email": "Jane.Doe@Example.com",
                    "groups": [{"id": 7}],
                    "department": {"id": 3}
                },
                {
                    "id": 2,
                    "email": "other@example.com",
                    "groups": [{"id": 9}],
                    "department": {"id": 3}
                }
            ])))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .and(query_param("page", "2"))
            .respond_with(empty_page())
            .mount(&mock_server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/users/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": 1})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let session = test_session(&mock_server.uri());
        // Cross-match is case-insensitive; user 2 is not in the list
        let outcome = session
            .assign_users_to_groups(&["jane.doe@example.com".to_string()], &[7, 9], None)
            .await
            .unwrap();

        assert_eq!(outcome.total_users, 2);
        assert_eq!(outcome.matched, 1);
        assert_eq!(outcome.updated.len(), 1);
        // Group 7 was already present, only 9 is new
        assert_eq!(outcome.updated[0].group_ids(), vec![7, 9]);
    }

    #[tokio::test]
    async fn test_assign_users_skips_already_members() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 1, "email": "jane@example.com", "groups": [{"id": 7}]}
            ])))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .and(query_param("page", "2"))
            .respond_with(empty_page())
            .mount(&mock_server)
            .await;

        let session = test_session(&mock_server.uri());
        let outcome = session
            .assign_users_to_groups(&["jane@example.com".to_string()], &[7], Some(3))
            .await
            .unwrap();

        // Already in every requested group: no PUT is sent
        assert_eq!(outcome.matched, 1);
        assert!(outcome.updated.is_empty());
    }

    #[tokio::test]
    async fn test_assign_users_requires_default_dept() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 1, "email": "jane@example.com", "groups": []}
            ])))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .and(query_param("page", "2"))
            .respond_with(empty_page())
            .mount(&mock_server)
            .await;

        let session = test_session(&mock_server.uri());
        let err = session
            .assign_users_to_groups(&["jane@example.com".to_string()], &[7], None)
            .await
            .unwrap_err();

        match err {
            ZiaError::Validation(msg) => assert!(msg.contains("jane@example.com")),
            other => panic!("Expected ZiaError::Validation, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_assign_users_applies_default_dept() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 1, "email": "jane@example.com", "groups": []}
            ])))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .and(query_param("page", "2"))
            .respond_with(empty_page())
            .mount(&mock_server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/users/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": 1})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let session = test_session(&mock_server.uri());
        let outcome = session
            .assign_users_to_groups(&["jane@example.com".to_string()], &[7], Some(3))
            .await
            .unwrap();

        assert_eq!(outcome.updated.len(), 1);
        assert_eq!(outcome.updated[0].department.as_ref().unwrap().id, 3);

        // The PUT body carries the defaulted department
        let requests = mock_server.received_requests().await.unwrap();
        let put = requests.iter().find(|r| r.method.as_str() == "PUT").unwrap();
        let body: Value = serde_json::from_slice(&put.body).unwrap();
        assert_eq!(body["department"]["id"], 3);
    }

    #[tokio::test]
    async fn test_create_sublocations_from_plan() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/locations/lite"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 10, "name": "HQ Amsterdam"},
                {"id": 20, "name": "Branch Berlin"}
            ])))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/locations/lite"))
            .and(query_param("page", "2"))
            .respond_with(empty_page())
            .mount(&mock_server)
            .await;
        Mock::given(method("POST"))
            .and(path("/locations"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 100, "name": "Guest WiFi"
            })))
            .expect(2)
            .mount(&mock_server)
            .await;

        let session = test_session(&mock_server.uri());
        let plan: SublocationPlan = serde_json::from_value(serde_json::json!({
            "name": "Guest WiFi",
            "parents": ["HQ Amsterdam", "Branch Berlin"],
            "config": {"authRequired": true}
        }))
        .unwrap();

        let created = session.create_sublocations_from_plan(&plan).await.unwrap();
        assert_eq!(created.len(), 2);

        // Each create body merges the plan config over name/parentId
        let requests = mock_server.received_requests().await.unwrap();
        let posts: Vec<Value> = requests
            .iter()
            .filter(|r| r.method.as_str() == "POST")
            .map(|r| serde_json::from_slice(&r.body).unwrap())
            .collect();
        assert_eq!(posts[0]["parentId"], 10);
        assert_eq!(posts[1]["parentId"], 20);
        assert_eq!(posts[0]["authRequired"], true);
    }

    #[tokio::test]
    async fn test_create_sublocations_unknown_parent() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/locations/lite"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 10, "name": "HQ Amsterdam"}
            ])))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/locations/lite"))
            .and(query_param("page", "2"))
            .respond_with(empty_page())
            .mount(&mock_server)
            .await;

        let session = test_session(&mock_server.uri());
        let plan: SublocationPlan = serde_json::from_value(serde_json::json!({
            "name": "Guest WiFi",
            "parents": ["HQ Amsterdam", "Nonsuch"]
        }))
        .unwrap();

        let err = session
            .create_sublocations_from_plan(&plan)
            .await
            .unwrap_err();
        match err {
            ZiaError::Validation(msg) => assert!(msg.contains("Nonsuch")),
            other => panic!("Expected ZiaError::Validation, got {:?}", other),
        }

        // Nothing was created
        let requests = mock_server.received_requests().await.unwrap();
        assert!(requests.iter().all(|r| r.method.as_str() == "GET"));
    }

    #[tokio::test]
    async fn test_export_location_tree() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/locations"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 10, "name": "HQ"},
                {"id": 20, "name": "Branch"}
            ])))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/locations"))
            .and(query_param("page", "2"))
            .respond_with(empty_page())
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/locations/10/sublocations"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 11, "name": "Guest", "parentId": 10}
            ])))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/locations/20/sublocations"))
            .respond_with(empty_page())
            .mount(&mock_server)
            .await;

        let session = test_session(&mock_server.uri());
        let tree = session.export_location_tree(None).await.unwrap();

        assert_eq!(tree.locations.len(), 2);
        assert_eq!(tree.sublocations.len(), 2);
        // Sublocation lists stay aligned with their parents
        assert_eq!(tree.sublocations[0][0].parent_id, Some(10));
        assert!(tree.sublocations[1].is_empty());
        assert_eq!(tree.sublocation_count(), 1);
    }

    #[tokio::test]
    async fn test_update_users_bulk_in_order() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/users/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": 1})))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/users/2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": 2})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let session = test_session(&mock_server.uri());
        let users = vec![
            serde_json::json!({"id": 1, "comments": "first"}),
            serde_json::json!({"id": 2, "comments": "second"}),
        ];
        let confirmations = session.update_users_bulk(users).await.unwrap();

        assert_eq!(confirmations.len(), 2);
        assert_eq!(confirmations[0]["id"], 1);
        assert_eq!(confirmations[1]["id"], 2);
    }

    #[tokio::test]
    async fn test_update_users_bulk_missing_id_aborts() {
        let mock_server = MockServer::start().await;
        let session = test_session(&mock_server.uri());

        let users = vec![serde_json::json!({"comments": "no id"})];
        let err = session.update_users_bulk(users).await.unwrap_err();
        assert!(matches!(err, ZiaError::Validation(_)));
    }
}
