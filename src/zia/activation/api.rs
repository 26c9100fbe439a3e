//! Configuration activation API operations

use crate::error::Result;
use crate::zia::session::{ApiRequest, ZiaSession};
use crate::zia::Endpoint;

use super::models::ActivationStatus;

impl ZiaSession {
    /// Get the activation status of pending configuration changes
    pub async fn get_activation_status(&self) -> Result<Option<ActivationStatus>> {
        let request = ApiRequest::get(self.url(&Endpoint::ActivationStatus));
        match self.send(&request).await? {
            Some(payload) => Ok(Some(payload.decode()?)),
            None => Ok(None),
        }
    }

    /// Activate pending configuration changes
    pub async fn activate_changes(&self) -> Result<Option<ActivationStatus>> {
        let request = ApiRequest::post(self.url(&Endpoint::Activate));
        match self.send(&request).await? {
            Some(payload) => Ok(Some(payload.decode()?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zia::session::test_session;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_activation_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/status"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "PENDING"})),
            )
            .mount(&mock_server)
            .await;

        let session = test_session(&mock_server.uri());
        let status = session.get_activation_status().await.unwrap().unwrap();
        assert_eq!(status.status(), "PENDING");
    }

    #[tokio::test]
    async fn test_activate_changes() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/status/activate"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "ACTIVE"})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let session = test_session(&mock_server.uri());
        let status = session.activate_changes().await.unwrap().unwrap();
        assert!(status.is_active());
    }
}
