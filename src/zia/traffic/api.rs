//! Traffic forwarding API operations

use log::debug;
use serde_json::{json, Value};

use crate::config::api;
use crate::error::{Result, ZiaError};
use crate::zia::session::{ApiRequest, ZiaSession};
use crate::zia::{require_id, Endpoint};

use super::models::{GreTunnelInfo, VipFilter, VirtualIp, VpnCredential, VpnCredentialFilter};

impl ZiaSession {
    /// Get VPN credentials, optionally walking every page
    pub async fn get_vpn_credentials(
        &self,
        filter: &VpnCredentialFilter,
        full: bool,
    ) -> Result<Vec<VpnCredential>> {
        let request =
            ApiRequest::get(self.url(&Endpoint::VpnCredentials)).query(filter.query_pairs());
        let page_size = filter.page_size.unwrap_or_else(|| self.page_size());

        match self.retrieve(&request, page_size, full).await? {
            Some(payload) => payload.decode(),
            None => Ok(Vec::new()),
        }
    }

    /// Get a VPN credential by ID, returning both the typed model and the raw JSON
    pub async fn get_vpn_credential(&self, id: i64) -> Result<Option<(VpnCredential, Value)>> {
        let request = ApiRequest::get(self.url(&Endpoint::VpnCredential(id)));
        match self.send(&request).await? {
            Some(payload) => {
                let raw = payload.into_json()?;
                let credential = serde_json::from_value(raw.clone())?;
                Ok(Some((credential, raw)))
            }
            None => Ok(None),
        }
    }

    /// Add a VPN credential from a JSON payload
    pub async fn create_vpn_credential(&self, payload: Value) -> Result<Option<Value>> {
        let request = ApiRequest::post(self.url(&Endpoint::VpnCredentials)).body(payload);
        match self.send(&request).await? {
            Some(payload) => Ok(Some(payload.into_json()?)),
            None => Ok(None),
        }
    }

    /// Update a VPN credential; the payload must carry its `id`
    pub async fn update_vpn_credential(&self, payload: Value) -> Result<Option<Value>> {
        let id = require_id(&payload, "VPN credential update")?;
        debug!("Updating VPN credential {}", id);

        let request = ApiRequest::put(self.url(&Endpoint::VpnCredential(id))).body(payload);
        match self.send(&request).await? {
            Some(payload) => Ok(Some(payload.into_json()?)),
            None => Ok(None),
        }
    }

    /// Delete a VPN credential by ID
    pub async fn delete_vpn_credential(&self, id: i64) -> Result<Option<Value>> {
        let request = ApiRequest::delete(self.url(&Endpoint::VpnCredential(id)));
        match self.send(&request).await? {
            Some(payload) => Ok(Some(payload.into_json()?)),
            None => Ok(None),
        }
    }

    /// Delete up to 100 VPN credentials in one request
    pub async fn bulk_delete_vpn_credentials(&self, ids: &[i64]) -> Result<Option<Value>> {
        if ids.is_empty() {
            return Err(ZiaError::Validation(
                "Bulk VPN credential delete requires at least one ID".to_string(),
            ));
        }
        if ids.len() > api::MAX_BULK_DELETE_VPN_CREDENTIALS {
            return Err(ZiaError::Validation(format!(
                "Bulk VPN credential delete accepts at most {} IDs per request, got {}",
                api::MAX_BULK_DELETE_VPN_CREDENTIALS,
                ids.len()
            )));
        }

        let request = ApiRequest::post(self.url(&Endpoint::VpnCredentialsBulkDelete))
            .body(json!({ "ids": ids }));
        match self.send(&request).await? {
            Some(payload) => Ok(Some(payload.into_json()?)),
            None => Ok(None),
        }
    }

    /// Get GRE tunnel provisioning info, optionally restricted to the given
    /// tunnel source IPs (sent as a repeated `ipAddresses` parameter)
    pub async fn get_gre_tunnel_info(&self, ips: &[String]) -> Result<Vec<GreTunnelInfo>> {
        let pairs = ips
            .iter()
            .map(|ip| ("ipAddresses".to_string(), ip.clone()))
            .collect();
        let request = ApiRequest::get(self.url(&Endpoint::GreTunnelInfo)).query(pairs);
        match self.send(&request).await? {
            Some(payload) => payload.decode(),
            None => Ok(Vec::new()),
        }
    }

    /// Get the virtual IPs of the cloud's service edges, optionally walking
    /// every page
    pub async fn get_virtual_ips(&self, filter: &VipFilter, full: bool) -> Result<Vec<VirtualIp>> {
        let request = ApiRequest::get(self.url(&Endpoint::VirtualIps)).query(filter.query_pairs());
        let page_size = filter.page_size.unwrap_or_else(|| self.page_size());

        match self.retrieve(&request, page_size, full).await? {
            Some(payload) => payload.decode(),
            None => Ok(Vec::new()),
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
    async fn test_get_vpn_credentials_walks_pages() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/vpnCredentials"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 54, "type": "UFQDN", "fqdn": "a@example.com"},
                {"id": 55, "type": "IP", "ipAddress": "203.0.113.17"}
            ])))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/vpnCredentials"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&mock_server)
            .await;

        let session = test_session(&mock_server.uri());
        let credentials = session
            .get_vpn_credentials(&VpnCredentialFilter::default(), true)
            .await
            .unwrap();

        assert_eq!(credentials.len(), 2);
        assert_eq!(credentials[0].credential_type(), "UFQDN");
        assert_eq!(credentials[1].ip_address(), "203.0.113.17");
    }

    #[tokio::test]
    async fn test_get_vpn_credentials_type_filter() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/vpnCredentials"))
            .and(query_param("type", "IP"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([{"id": 55, "type": "IP"}])),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let session = test_session(&mock_server.uri());
        let filter = VpnCredentialFilter {
            credential_type: Some("IP".to_string()),
            ..VpnCredentialFilter::default()
        };
        let credentials = session.get_vpn_credentials(&filter, false).await.unwrap();
        assert_eq!(credentials.len(), 1);
    }

    #[tokio::test]
    async fn test_update_vpn_credential_requires_id() {
        let mock_server = MockServer::start().await;
        let session = test_session(&mock_server.uri());

        let err = session
            .update_vpn_credential(serde_json::json!({"comments": "no id"}))
            .await
            .unwrap_err();
        assert!(matches!(err, ZiaError::Validation(_)));
    }

    #[tokio::test]
    async fn test_bulk_delete_vpn_credentials() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/vpnCredentials/bulkDelete"))
            .and(body_json(serde_json::json!({"ids": [54, 55]})))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let session = test_session(&mock_server.uri());
        let result = session
            .bulk_delete_vpn_credentials(&[54, 55])
            .await
            .unwrap();
        assert!(result.is_some());
    }

    #[tokio::test]
    async fn test_bulk_delete_vpn_credentials_over_limit() {
        let mock_server = MockServer::start().await;
        let session = test_session(&mock_server.uri());

        let ids: Vec<i64> = (1..=101).collect();
        let err = session.bulk_delete_vpn_credentials(&ids).await.unwrap_err();
        match err {
            ZiaError::Validation(msg) => assert!(msg.contains("100")),
            other => panic!("Expected ZiaError::Validation, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_gre_tunnel_info_repeats_ip_param() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/orgProvisioning/ipGreTunnelInfo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"ipAddress": "203.0.113.17", "greEnabled": true},
                {"ipAddress": "203.0.113.18", "greEnabled": false}
            ])))
            .mount(&mock_server)
            .await;

        let session = test_session(&mock_server.uri());
        let ips = vec!["203.0.113.17".to_string(), "203.0.113.18".to_string()];
        let info = session.get_gre_tunnel_info(&ips).await.unwrap();

        assert_eq!(info.len(), 2);
        // A list-valued parameter goes on the wire as a repeated key
        let requests = mock_server.received_requests().await.unwrap();
        let query = requests[0].url.query().unwrap();
        assert_eq!(query.matches("ipAddresses=").count(), 2);
    }

    #[tokio::test]
    async fn test_gre_tunnel_info_no_filter() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/orgProvisioning/ipGreTunnelInfo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&mock_server)
            .await;

        let session = test_session(&mock_server.uri());
        let info = session.get_gre_tunnel_info(&[]).await.unwrap();
        assert!(info.is_empty());

        let requests = mock_server.received_requests().await.unwrap();
        assert!(requests[0].url.query().unwrap_or("").is_empty());
    }

    #[tokio::test]
    async fn test_get_virtual_ips() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/vips"))
            .and(query_param("include", "all"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"dataCenter": "AMS2", "region": "Europe"}
            ])))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/vips"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&mock_server)
            .await;

        let session = test_session(&mock_server.uri());
        let filter = VipFilter {
            include: Some("all".to_string()),
            ..VipFilter::default()
        };
        let vips = session.get_virtual_ips(&filter, true).await.unwrap();

        assert_eq!(vips.len(), 1);
        assert_eq!(vips[0].data_center(), "AMS2");
    }
}
