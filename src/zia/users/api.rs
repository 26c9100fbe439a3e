//! User, group and department API operations

use log::debug;
use serde_json::{json, Value};

use crate::config::api;
use crate::error::{Result, ZiaError};
use crate::zia::session::{ApiRequest, ZiaSession};
use crate::zia::{require_id, Endpoint};

use super::models::{Department, Group, SearchFilter, User, UserFilter};

impl ZiaSession {
    /// Get users, optionally walking every page.
    ///
    /// The name filter is a server-side partial match; dept and group are
    /// starts-with matches.
    pub async fn get_users(&self, filter: &UserFilter, full: bool) -> Result<Vec<User>> {
        let request = ApiRequest::get(self.url(&Endpoint::Users)).query(filter.query_pairs());
        let page_size = filter.page_size.unwrap_or_else(|| self.page_size());

        match self.retrieve(&request, page_size, full).await? {
            Some(payload) => payload.decode(),
            None => Ok(Vec::new()),
        }
    }

    /// Get a user by ID, returning both the typed model and the raw JSON
    pub async fn get_user(&self, id: i64) -> Result<Option<(User, Value)>> {
        let request = ApiRequest::get(self.url(&Endpoint::User(id)));
        match self.send(&request).await? {
            Some(payload) => {
                let raw = payload.into_json()?;
                let user = serde_json::from_value(raw.clone())?;
                Ok(Some((user, raw)))
            }
            None => Ok(None),
        }
    }

    /// Create a user from a JSON payload
    pub async fn create_user(&self, payload: Value) -> Result<Option<Value>> {
        let request = ApiRequest::post(self.url(&Endpoint::Users)).body(payload);
        match self.send(&request).await? {
            Some(payload) => Ok(Some(payload.into_json()?)),
            None => Ok(None),
        }
    }

    /// Update a user; the payload must carry its `id`
    pub async fn update_user(&self, payload: Value) -> Result<Option<Value>> {
        let id = require_id(&payload, "user update")?;
        debug!("Updating user {}", id);

        let request = ApiRequest::put(self.url(&Endpoint::User(id))).body(payload);
        match self.send(&request).await? {
            Some(payload) => Ok(Some(payload.into_json()?)),
            None => Ok(None),
        }
    }

    /// Delete a user by ID
    pub async fn delete_user(&self, id: i64) -> Result<Option<Value>> {
        let request = ApiRequest::delete(self.url(&Endpoint::User(id)));
        match self.send(&request).await? {
            Some(payload) => Ok(Some(payload.into_json()?)),
            None => Ok(None),
        }
    }

    /// Delete up to 500 users in one request.
    ///
    /// The response carries the IDs that were actually deleted.
    pub async fn bulk_delete_users(&self, ids: &[i64]) -> Result<Option<Value>> {
        if ids.is_empty() {
            return Err(ZiaError::Validation(
                "Bulk user delete requires at least one ID".to_string(),
            ));
        }
        if ids.len() > api::MAX_BULK_DELETE_USERS {
            return Err(ZiaError::Validation(format!(
                "Bulk user delete accepts at most {} IDs per request, got {}",
                api::MAX_BULK_DELETE_USERS,
                ids.len()
            )));
        }

        let request =
            ApiRequest::post(self.url(&Endpoint::UsersBulkDelete)).body(json!({ "ids": ids }));
        match self.send(&request).await? {
            Some(payload) => Ok(Some(payload.into_json()?)),
            None => Ok(None),
        }
    }

    /// Get user groups, optionally walking every page
    pub async fn get_groups(&self, filter: &SearchFilter, full: bool) -> Result<Vec<Group>> {
        let request = ApiRequest::get(self.url(&Endpoint::Groups)).query(filter.query_pairs());
        let page_size = filter.page_size.unwrap_or_else(|| self.page_size());

        match self.retrieve(&request, page_size, full).await? {
            Some(payload) => payload.decode(),
            None => Ok(Vec::new()),
        }
    }

    /// Get a group by ID, returning both the typed model and the raw JSON
    pub async fn get_group(&self, id: i64) -> Result<Option<(Group, Value)>> {
        let request = ApiRequest::get(self.url(&Endpoint::Group(id)));
        match self.send(&request).await? {
            Some(payload) => {
                let raw = payload.into_json()?;
                let group = serde_json::from_value(raw.clone())?;
                Ok(Some((group, raw)))
            }
            None => Ok(None),
        }
    }

    /// Get departments, optionally walking every page
    pub async fn get_departments(
        &self,
        filter: &SearchFilter,
        full: bool,
    ) -> Result<Vec<Department>> {
        let request = ApiRequest::get(self.url(&Endpoint::Departments)).query(filter.query_pairs());
        let page_size = filter.page_size.unwrap_or_else(|| self.page_size());

        match self.retrieve(&request, page_size, full).await? {
            Some(payload) => payload.decode(),
            None => Ok(Vec::new()),
        }
    }

    /// Get a department by ID, returning both the typed model and the raw JSON
    pub async fn get_department(&self, id: i64) -> Result<Option<(Department, Value)>> {
        let request = ApiRequest::get(self.url(&Endpoint::Department(id)));
        match self.send(&request).await? {
            Some(payload) => {
                let raw = payload.into_json()?;
                let department = serde_json::from_value(raw.clone())?;
                Ok(Some((department, raw)))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zia::session::test_session;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_users_walks_pages() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 1, "name": "Jane Doe", "email": "jane@example.com"},
                {"id": 2, "name": "John Doe", "email": "john@example.com"}
            ])))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&mock_server)
            .await;

        let session = test_session(&mock_server.uri());
        let users = session
            .get_users(&UserFilter::default(), true)
            .await
            .unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].email(), "jane@example.com");
    }

    #[tokio::test]
    async fn test_get_users_passes_filters() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .and(query_param("dept", "R&D"))
            .and(query_param("group", "Engineering"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([{"id": 3, "name": "Jane"}])),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let session = test_session(&mock_server.uri());
        let filter = UserFilter {
            dept: Some("R&D".to_string()),
            group: Some("Engineering".to_string()),
            ..UserFilter::default()
        };
        let users = session.get_users(&filter, false).await.unwrap();
        assert_eq!(users.len(), 1);
    }

    #[tokio::test]
    async fn test_get_user_by_id() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/889214"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 889214,
                "name": "Jane Doe",
                "email": "jane@example.com",
                "department": {"id": 3, "name": "R&D"},
                "tempAuthEmail": "only-in-raw@example.com"
            })))
            .mount(&mock_server)
            .await;

        let session = test_session(&mock_server.uri());
        let (user, raw) = session.get_user(889214).await.unwrap().unwrap();

        assert_eq!(user.id, 889214);
        assert_eq!(user.department_name(), "R&D");
        // Raw JSON keeps fields the typed model does not know
        assert_eq!(raw["tempAuthEmail"], "only-in-raw@example.com");
    }

    #[tokio::test]
    async fn test_update_user_requires_id() {
        let mock_server = MockServer::start().await;
        let session = test_session(&mock_server.uri());

        let err = session
            .update_user(serde_json::json!({"name": "No ID"}))
            .await
            .unwrap_err();
        assert!(matches!(err, ZiaError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_user_puts_to_id_path() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/users/42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 42, "name": "Renamed"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let session = test_session(&mock_server.uri());
        let updated = session
            .update_user(serde_json::json!({"id": 42, "name": "Renamed"}))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated["name"], "Renamed");
    }

    #[tokio::test]
    async fn test_bulk_delete_users() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/users/bulkDelete"))
            .and(body_json(serde_json::json!({"ids": [5, 6]})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"ids": [5, 6]})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let session = test_session(&mock_server.uri());
        let result = session.bulk_delete_users(&[5, 6]).await.unwrap().unwrap();
        assert_eq!(result["ids"], serde_json::json!([5, 6]));
    }

    #[tokio::test]
    async fn test_bulk_delete_users_over_limit() {
        let mock_server = MockServer::start().await;
        let session = test_session(&mock_server.uri());

        let ids: Vec<i64> = (1..=501).collect();
        let err = session.bulk_delete_users(&ids).await.unwrap_err();
        match err {
            ZiaError::Validation(msg) => assert!(msg.contains("500")),
            other => panic!("Expected ZiaError::Validation, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_groups_with_search() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/groups"))
            .and(query_param("search", "eng"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 12, "name": "Engineering"}
            ])))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/groups"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&mock_server)
            .await;

        let session = test_session(&mock_server.uri());
        let filter = SearchFilter {
            search: Some("eng".to_string()),
            ..SearchFilter::default()
        };
        let groups = session.get_groups(&filter, true).await.unwrap();

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name(), "Engineering");
    }

    #[tokio::test]
    async fn test_get_department_by_id() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/departments/3"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"id": 3, "name": "R&D"})),
            )
            .mount(&mock_server)
            .await;

        let session = test_session(&mock_server.uri());
        let (department, _) = session.get_department(3).await.unwrap().unwrap();
        assert_eq!(department.name(), "R&D");
    }
}
