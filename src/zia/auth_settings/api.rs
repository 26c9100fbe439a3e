//! User authentication settings API operations

use serde_json::json;

use crate::error::{Result, ZiaError};
use crate::zia::session::{ApiRequest, ZiaSession};
use crate::zia::Endpoint;

use super::models::{ExemptedUrls, UrlListAction};

impl ZiaSession {
    /// Get the URLs exempted from cookie authentication
    pub async fn get_exempted_urls(&self) -> Result<ExemptedUrls> {
        let request = ApiRequest::get(self.url(&Endpoint::ExemptedUrls));
        match self.send(&request).await? {
            Some(payload) => payload.decode(),
            None => Ok(ExemptedUrls::default()),
        }
    }

    /// Add URLs to or remove URLs from the exempt list.
    ///
    /// Returns the resulting list as the server confirms it.
    pub async fn modify_exempted_urls(
        &self,
        action: UrlListAction,
        urls: &[String],
    ) -> Result<ExemptedUrls> {
        if urls.is_empty() {
            return Err(ZiaError::Validation(
                "Exempt list modification requires at least one URL".to_string(),
            ));
        }

        let request = ApiRequest::post(self.url(&Endpoint::ExemptedUrls))
            .query(vec![("action".to_string(), action.as_str().to_string())])
            .body(json!({ "urls": urls }));
        match self.send(&request).await? {
            Some(payload) => payload.decode(),
            None => Ok(ExemptedUrls::default()),
        }
    }
}
