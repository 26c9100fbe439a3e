//! ZIA HTTP client construction and login

use std::time::Duration;

use log::{debug, info};
use reqwest::Client;

use crate::config::{api, defaults};
use crate::error::{Result, ZiaError};
use crate::zia::obfuscate::{login_timestamp, obfuscate_api_key};
use crate::zia::session::{ApiRequest, ZiaSession};
use crate::zia::Endpoint;

/// Resolved settings a client is built from
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub host: String,
    pub username: String,
    pub password: String,
    pub api_key: String,
    pub retries: u32,
    pub backoff: Duration,
    pub page_size: u32,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            host: defaults::HOST.to_string(),
            username: String::new(),
            password: String::new(),
            api_key: String::new(),
            retries: defaults::RETRIES,
            backoff: Duration::from_secs(defaults::BACKOFF_SECONDS),
            page_size: defaults::PAGE_SIZE,
        }
    }
}

/// ZIA API client prior to login
///
/// Holds the HTTP client and credential material. Resource requests are only
/// available on the [`ZiaSession`] that [`ZiaClient::login`] returns, so a
/// request can never be sent outside an authenticated session.
#[derive(Debug)]
pub struct ZiaClient {
    pub(crate) http: Client,
    pub(crate) settings: ClientSettings,
    /// Custom base URL override (for testing with mock servers)
    pub(crate) base_url_override: Option<String>,
}

impl ZiaClient {
    /// Create a new ZIA client with a cookie-holding connection pool
    ///
    /// The ZIA session lives in a JSESSIONID cookie set by the login call,
    /// so the cookie store is what carries authentication between requests.
    pub fn new(settings: ClientSettings) -> Self {
        let http = Client::builder()
            .cookie_store(true)
            // Connection pool settings - reuse connections
            .pool_max_idle_per_host(4)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            // Timeouts
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(60))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            http,
            settings,
            base_url_override: None,
        }
    }

    /// Create a client with custom base URL (for testing with mock servers)
    #[cfg(test)]
    pub fn with_base_url(settings: ClientSettings, base_url: String) -> Self {
        let http = Client::builder()
            .cookie_store(true)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            http,
            settings,
            base_url_override: Some(base_url),
        }
    }

    /// Build the base URL for API requests
    pub(crate) fn base_url(&self) -> String {
        if let Some(ref url) = self.base_url_override {
            return url.clone();
        }
        format!("https://{}{}", self.settings.host, api::BASE_PATH)
    }

    /// Absolute URL for a logical endpoint
    pub(crate) fn url(&self, endpoint: &Endpoint) -> String {
        format!("{}{}", self.base_url(), endpoint.path())
    }

    /// Open an authenticated session.
    ///
    /// Sends the login call with the obfuscated API key. Consumes the client;
    /// the returned session is the only handle resource calls exist on, and
    /// [`ZiaSession::logout`] consumes it back.
    pub async fn login(self) -> Result<ZiaSession> {
        let (timestamp, key) = obfuscate_api_key(&self.settings.api_key, login_timestamp())?;
        let body = serde_json::json!({
            "apiKey": key,
            "username": self.settings.username,
            "password": self.settings.password,
            "timestamp": timestamp,
        });

        debug!(
            "Logging in to {} as {}",
            self.settings.host, self.settings.username
        );

        let session = ZiaSession::new(self);
        let request =
            ApiRequest::post(session.url(&Endpoint::AuthenticatedSession)).body(body);

        match session.send(&request).await? {
            Some(_) => {
                info!("Login successful");
                Ok(session)
            }
            None => Err(ZiaError::Api {
                status: 429,
                body: "login received no response (retry budget exhausted)".to_string(),
            }),
        }
    }
}

#[cfg(test)]
impl ZiaClient {
    /// Test settings with a short backoff so retry tests stay fast
    pub fn test_settings() -> ClientSettings {
        ClientSettings {
            host: "mock.zscaler.net".to_string(),
            username: "admin@example.com".to_string(),
            password: "hunter2hunter2".to_string(),
            api_key: "0123456789AbCdEf".to_string(),
            retries: 3,
            backoff: Duration::from_millis(10),
            page_size: 2,
        }
    }

    /// Create a test client pointed at a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::with_base_url(Self::test_settings(), base_url.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_base_url() {
        let client = ZiaClient::new(ClientSettings {
            host: "zsapi.zscalertwo.net".to_string(),
            ..ClientSettings::default()
        });
        assert_eq!(client.base_url(), "https://zsapi.zscalertwo.net/api/v1");
    }

    #[test]
    fn test_endpoint_url() {
        let client = ZiaClient::new(ClientSettings::default());
        assert_eq!(
            client.url(&Endpoint::Users),
            "https://zsapi.zscaler.net/api/v1/users"
        );
        assert_eq!(
            client.url(&Endpoint::Location(12)),
            "https://zsapi.zscaler.net/api/v1/locations/12"
        );
    }

    #[test]
    fn test_default_settings() {
        let settings = ClientSettings::default();
        assert_eq!(settings.host, crate::config::defaults::HOST);
        assert_eq!(settings.retries, crate::config::defaults::RETRIES);
        assert_eq!(settings.page_size, crate::config::defaults::PAGE_SIZE);
    }

    #[tokio::test]
    async fn test_login_posts_obfuscated_credentials() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/authenticatedSession"))
            .and(body_partial_json(serde_json::json!({
                "username": "admin@example.com",
                "password": "hunter2hunter2"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "authType": "ADMIN_LOGIN",
                "obfuscateApiKey": true
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = ZiaClient::test_client(&mock_server.uri());
        let session = client.login().await;
        assert!(session.is_ok());

        // The raw API key must never appear in the login body
        let requests = mock_server.received_requests().await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_ne!(body["apiKey"], "0123456789AbCdEf");
        assert!(body["timestamp"].is_i64());
    }

    #[tokio::test]
    async fn test_login_rejected() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/authenticatedSession"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "code": "AUTHENTICATION_FAILED",
                "message": "Invalid username or password"
            })))
            .mount(&mock_server)
            .await;

        let client = ZiaClient::test_client(&mock_server.uri());
        let err = client.login().await.unwrap_err();
        match err {
            ZiaError::Api { status, body } => {
                assert_eq!(status, 401);
                assert!(body.contains("AUTHENTICATION_FAILED"));
            }
            other => panic!("Expected ZiaError::Api, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_login_short_api_key() {
        let mut settings = ZiaClient::test_settings();
        settings.api_key = "short".to_string();
        let client = ZiaClient::with_base_url(settings, "http://unused".to_string());
        let err = client.login().await.unwrap_err();
        assert!(matches!(err, ZiaError::Config(_)));
    }
}
