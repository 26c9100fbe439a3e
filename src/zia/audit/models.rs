//! Audit log report data models

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ZiaError};

/// Body of a POST /auditlogEntryReport request
#[derive(Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct AuditReportRequest {
    pub start_time: i64,
    pub end_time: i64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub action_types: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subcategories: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_interface: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_name: Option<String>,
    #[serde(rename = "clientIP", skip_serializing_if = "Option::is_none")]
    pub client_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_org_id: Option<i64>,
}

/// Status of the pending audit log report
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AuditReportStatus {
    pub status: Option<String>,
    pub progress_items_complete: Option<i64>,
    pub progress_end_time: Option<i64>,
    pub error_code: Option<String>,
    pub error_message: Option<String>,
}

impl AuditReportStatus {
    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or("")
    }

    pub fn is_complete(&self) -> bool {
        self.status() == "COMPLETE"
    }
}

/// Parse a report window bound, `YYYY-MM-DD HH:MM` or with seconds, into
/// epoch milliseconds (interpreted as UTC)
pub fn parse_report_time(input: &str) -> Result<i64> {
    let parsed = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M"))
        .map_err(|_| {
            ZiaError::Validation(format!(
                "Invalid time '{}', expected YYYY-MM-DD HH:MM[:SS]",
                input
            ))
        })?;
    Ok(parsed.and_utc().timestamp_millis())
}
