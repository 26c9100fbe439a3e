//! Admin role and admin user API operations

use log::debug;
use serde_json::Value;

use crate::error::Result;
use crate::zia::session::{ApiRequest, ZiaSession};
use crate::zia::{require_id, Endpoint};

use super::models::{AdminRole, AdminRoleFilter, AdminUser, AdminUserFilter};

impl ZiaSession {
    /// Get the administrator roles (lite listing, not paged)
    pub async fn get_admin_roles(&self, filter: &AdminRoleFilter) -> Result<Vec<AdminRole>> {
        let request = ApiRequest::get(self.url(&Endpoint::AdminRoles)).query(filter.query_pairs());
        match self.send(&request).await? {
            Some(payload) => payload.decode(),
            None => Ok(Vec::new()),
        }
    }

    /// Get admin users, optionally walking every page
    pub async fn get_admin_users(
        &self,
        filter: &AdminUserFilter,
        full: bool,
    ) -> Result<Vec<AdminUser>> {
        let request = ApiRequest::get(self.url(&Endpoint::AdminUsers)).query(filter.query_pairs());
        let page_size = filter.page_size.unwrap_or_else(|| self.page_size());

        match self.retrieve(&request, page_size, full).await? {
            Some(payload) => payload.decode(),
            None => Ok(Vec::new()),
        }
    }

    /// Create an admin user from a JSON payload
    pub async fn create_admin_user(&self, payload: Value) -> Result<Option<Value>> {
        let request = ApiRequest::post(self.url(&Endpoint::AdminUsers)).body(payload);
        match self.send(&request).await? {
            Some(payload) => Ok(Some(payload.into_json()?)),
            None => Ok(None),
        }
    }

    /// Update an admin user; the payload must carry its `id`
    pub async fn update_admin_user(&self, payload: Value) -> Result<Option<Value>> {
        let id = require_id(&payload, "admin user update")?;
        debug!("Updating admin user {}", id);

        let request = ApiRequest::put(self.url(&Endpoint::AdminUser(id))).body(payload);
        match self.send(&request).await? {
            Some(payload) => Ok(Some(payload.into_json()?)),
            None => Ok(None),
        }
    }

    /// Delete an admin user by ID
    pub async fn delete_admin_user(&self, id: i64) -> Result<Option<Value>> {
        let request = ApiRequest::delete(self.url(&Endpoint::AdminUser(id)));
        match self.send(&request).await? {
            Some(payload) => Ok(Some(payload.into_json()?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ZiaError;
    use crate::zia::session::test_session;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_admin_roles_single_request() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/adminRoles/lite"))
            .and(query_param("includeAuditorRole", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 1, "rank": 7, "name": "Super Admin"},
                {"id": 2, "rank": 1, "name": "Auditor", "roleType": "AUDITOR"}
            ])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let session = test_session(&mock_server.uri());
        let filter = AdminRoleFilter {
            include_auditor_role: Some(true),
            ..AdminRoleFilter::default()
        };
        let roles = session.get_admin_roles(&filter).await.unwrap();

        assert_eq!(roles.len(), 2);
        assert_eq!(roles[1].role_type(), "AUDITOR");
    }

    #[tokio::test]
    async fn test_get_admin_users_walks_pages() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/adminUsers"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 11, "loginName": "admin@example.com"}
            ])))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/adminUsers"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&mock_server)
            .await;

        let session = test_session(&mock_server.uri());
        let admins = session
            .get_admin_users(&AdminUserFilter::default(), true)
            .await
            .unwrap();

        assert_eq!(admins.len(), 1);
        assert_eq!(admins[0].login_name(), "admin@example.com");
    }

    #[tokio::test]
    async fn test_update_admin_user_requires_id() {
        let mock_server = MockServer::start().await;
        let session = test_session(&mock_server.uri());

        let err = session
            .update_admin_user(serde_json::json!({"loginName": "no-id@example.com"}))
            .await
            .unwrap_err();
        assert!(matches!(err, ZiaError::Validation(_)));
    }

    #[tokio::test]
    async fn test_delete_admin_user() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/adminUsers/11"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let session = test_session(&mock_server.uri());
        let result = session.delete_admin_user(11).await.unwrap();
        assert!(result.is_some());
    }
}
