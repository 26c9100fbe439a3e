//! Authenticated ZIA session: request transport and paginated retrieval

use log::{debug, info, warn};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Result, ZiaError};
use crate::zia::client::ZiaClient;
use crate::zia::Endpoint;

/// A response body, decoded by content type
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Text(String),
}

impl Payload {
    /// Unwrap the JSON value, rejecting text bodies
    pub fn into_json(self) -> Result<Value> {
        match self {
            Payload::Json(value) => Ok(value),
            Payload::Text(_) => Err(ZiaError::Json(
                "expected a JSON response, got a text body".to_string(),
            )),
        }
    }

    /// Deserialize the JSON body into a concrete type
    pub fn decode<T: DeserializeOwned>(self) -> Result<T> {
        let value = self.into_json()?;
        Ok(serde_json::from_value(value)?)
    }
}

/// A single API request: method, URL, query parameters and optional JSON body
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    url: String,
    query: Vec<(String, String)>,
    body: Option<Value>,
}

impl ApiRequest {
    fn new(method: Method, url: String) -> Self {
        Self {
            method,
            url,
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(url: String) -> Self {
        Self::new(Method::GET, url)
    }

    pub fn post(url: String) -> Self {
        Self::new(Method::POST, url)
    }

    pub fn put(url: String) -> Self {
        Self::new(Method::PUT, url)
    }

    pub fn delete(url: String) -> Self {
        Self::new(Method::DELETE, url)
    }

    /// Append query parameters
    pub fn query(mut self, pairs: Vec<(String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    /// Attach a JSON body
    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn set_query(&mut self, key: &str, value: String) {
        match self.query.iter_mut().find(|(k, _)| k == key) {
            Some(pair) => pair.1 = value,
            None => self.query.push((key.to_string(), value)),
        }
    }
}

/// A page counts as empty when the API has nothing left to return: an empty
/// array or object, an empty string, null, false or zero.
fn is_empty_page(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// An authenticated ZIA session
///
/// Created by [`ZiaClient::login`] and consumed by [`ZiaSession::logout`].
/// The JSESSIONID cookie from login lives in the client's cookie store, so
/// every request sent through the session is authenticated.
#[derive(Debug)]
pub struct ZiaSession {
    client: ZiaClient,
}

impl ZiaSession {
    pub(crate) fn new(client: ZiaClient) -> Self {
        Self { client }
    }

    pub(crate) fn url(&self, endpoint: &Endpoint) -> String {
        self.client.url(endpoint)
    }

    /// Configured default page size for full retrievals
    pub(crate) fn page_size(&self) -> u32 {
        self.client.settings.page_size
    }

    /// Send a request, retrying on rate limits.
    ///
    /// Each 429 response consumes one attempt and waits out the configured
    /// backoff. Any other non-success status is fatal immediately and carries
    /// the response body in the error. When every attempt was rate limited
    /// the call returns `Ok(None)`; callers decide whether an empty outcome
    /// is acceptable.
    pub async fn send(&self, request: &ApiRequest) -> Result<Option<Payload>> {
        let retries = self.client.settings.retries.max(1);
        for attempt in 1..=retries {
            debug!("{} {}", request.method, request.url);

            let mut builder = self
                .client
                .http
                .request(request.method.clone(), &request.url);
            if !request.query.is_empty() {
                builder = builder.query(&request.query);
            }
            if let Some(ref body) = request.body {
                builder = builder.json(body);
            }

            let response = builder.send().await?;
            let status = response.status();

            if status == StatusCode::TOO_MANY_REQUESTS {
                info!(
                    "Rate limited (429), backing off for {:?} (attempt {}/{})",
                    self.client.settings.backoff, attempt, retries
                );
                tokio::time::sleep(self.client.settings.backoff).await;
                continue;
            }

            let is_json = response
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(|v| v.contains("application/json"))
                .unwrap_or(false);
            let text = response.text().await?;

            if status.is_success() {
                if text.trim().is_empty() {
                    return Ok(Some(Payload::Json(Value::Null)));
                }
                if is_json {
                    return Ok(Some(Payload::Json(serde_json::from_str(&text)?)));
                }
                return Ok(Some(Payload::Text(text)));
            }

            // Fatal status: pretty-print a JSON error body where possible
            let body = match serde_json::from_str::<Value>(&text) {
                Ok(value) => serde_json::to_string_pretty(&value).unwrap_or(text),
                Err(_) => text,
            };
            return Err(ZiaError::Api {
                status: status.as_u16(),
                body,
            });
        }

        warn!(
            "Retry budget exhausted after {} rate-limited attempts: {} {}",
            self.client.settings.retries, request.method, request.url
        );
        Ok(None)
    }

    /// Send a request, optionally walking every page of the result.
    ///
    /// With `full` unset this is a plain [`ZiaSession::send`]. With `full`
    /// set the request is paged: a `page` parameter is added when the caller
    /// did not supply one, `pageSize` is added when `page_size` is nonzero
    /// and no explicit value is present, and pages are fetched in ascending
    /// order until one comes back empty or identical to its predecessor.
    /// The identical-page guard stops the loop on servers that keep serving
    /// the last page instead of an empty one.
    pub async fn retrieve(
        &self,
        request: &ApiRequest,
        page_size: u32,
        full: bool,
    ) -> Result<Option<Payload>> {
        if !full {
            return self.send(request).await;
        }

        let mut request = request.clone();
        if request.query_value("page").is_none() {
            request.set_query("page", "1".to_string());
        }
        if page_size != 0 && request.query_value("pageSize").is_none() {
            request.set_query("pageSize", page_size.to_string());
        }

        let mut collected: Vec<Value> = Vec::new();
        let mut previous: Option<Value> = None;
        loop {
            let page = match self.send(&request).await? {
                Some(Payload::Json(value)) => value,
                Some(Payload::Text(text)) => Value::String(text),
                None => break,
            };

            if is_empty_page(&page) || previous.as_ref() == Some(&page) {
                break;
            }

            match page {
                Value::Array(ref items) => collected.extend(items.iter().cloned()),
                ref other => collected.push(other.clone()),
            }

            let next = request
                .query_value("page")
                .unwrap_or("1")
                .parse::<u64>()
                .map_err(|_| {
                    ZiaError::Validation("page parameter must be numeric".to_string())
                })?
                + 1;
            request.set_query("page", next.to_string());
            previous = Some(page);
        }

        debug!("Collected {} items from {}", collected.len(), request.url);
        Ok(Some(Payload::Json(Value::Array(collected))))
    }

    /// Fetch every page of a listing and deserialize the items
    pub async fn fetch_all<T: DeserializeOwned>(
        &self,
        request: &ApiRequest,
        page_size: u32,
    ) -> Result<Vec<T>> {
        match self.retrieve(request, page_size, true).await? {
            Some(payload) => payload.decode(),
            None => Ok(Vec::new()),
        }
    }

    /// Close the session.
    ///
    /// Consumes the session so no request can be sent after logout. A logout
    /// that runs out of retry budget is treated as closed; the server expires
    /// the session on its own.
    pub async fn logout(self) -> Result<()> {
        let request = ApiRequest::delete(self.url(&Endpoint::AuthenticatedSession));
        self.send(&request).await?;
        debug!("Session closed");
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn test_session(base_url: &str) -> ZiaSession {
    ZiaSession::new(ZiaClient::test_client(base_url))
}
