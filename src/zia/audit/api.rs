//! Audit log report API operations

use crate::error::{Result, ZiaError};
use crate::zia::session::{ApiRequest, Payload, ZiaSession};
use crate::zia::Endpoint;

use super::models::{AuditReportRequest, AuditReportStatus};

impl ZiaSession {
    /// Request a new audit log report.
    ///
    /// A new request overwrites any previously generated report. The server
    /// answers 204 with no body.
    pub async fn request_audit_report(&self, report: &AuditReportRequest) -> Result<bool> {
        let body = serde_json::to_value(report)?;
        let request = ApiRequest::post(self.url(&Endpoint::AuditReport)).body(body);
        Ok(self.send(&request).await?.is_some())
    }

    /// Get the status of the pending audit log report
    pub async fn get_audit_report_status(&self) -> Result<Option<AuditReportStatus>> {
        let request = ApiRequest::get(self.url(&Endpoint::AuditReport));
        match self.send(&request).await? {
            Some(payload) => Ok(Some(payload.decode()?)),
            None => Ok(None),
        }
    }

    /// Cancel the pending audit log report request
    pub async fn cancel_audit_report(&self) -> Result<bool> {
        let request = ApiRequest::delete(self.url(&Endpoint::AuditReport));
        Ok(self.send(&request).await?.is_some())
    }

    /// Download the completed audit log report as CSV text
    pub async fn download_audit_report(&self) -> Result<Option<String>> {
        let request = ApiRequest::get(self.url(&Endpoint::AuditReportDownload));
        match self.send(&request).await? {
            Some(Payload::Text(csv)) => Ok(Some(csv)),
            Some(Payload::Json(value)) => Err(ZiaError::Json(format!(
                "expected a CSV report, got a JSON body: {}",
                value
            ))),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zia::session::test_session;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_request_audit_report() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auditlogEntryReport"))
            .and(body_partial_json(serde_json::json!({
                "startTime": 1_714_521_600_000i64,
                "endTime": 1_714_608_000_000i64
            })))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let session = test_session(&mock_server.uri());
        let report = AuditReportRequest {
            start_time: 1_714_521_600_000,
            end_time: 1_714_608_000_000,
            ..AuditReportRequest::default()
        };
        assert!(session.request_audit_report(&report).await.unwrap());
    }

    #[tokio::test]
    async fn test_get_audit_report_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/auditlogEntryReport"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "EXECUTING",
                "progressItemsComplete": 42
            })))
            .mount(&mock_server)
            .await;

        let session = test_session(&mock_server.uri());
        let status = session.get_audit_report_status().await.unwrap().unwrap();
        assert_eq!(status.status(), "EXECUTING");
        assert!(!status.is_complete());
    }

    #[tokio::test]
    async fn test_cancel_audit_report() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/auditlogEntryReport"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let session = test_session(&mock_server.uri());
        assert!(session.cancel_audit_report().await.unwrap());
    }

    #[tokio::test]
    async fn test_download_audit_report_csv() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/auditlogEntryReport/download"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("time,action,result\n1714521600,SIGN_IN,SUCCESS\n")
                    .insert_header("content-type", "text/csv"),
            )
            .mount(&mock_server)
            .await;

        let session = test_session(&mock_server.uri());
        let csv = session.download_audit_report().await.unwrap().unwrap();
        assert!(csv.starts_with("time,action,result"));
    }

    #[tokio::test]
    async fn test_download_audit_report_rejects_json() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/auditlogEntryReport/download"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"status": "EXECUTING"})),
            )
            .mount(&mock_server)
            .await;

        let session = test_session(&mock_server.uri());
        let err = session.download_audit_report().await.unwrap_err();
        assert!(matches!(err, ZiaError::Json(_)));
    }
}
