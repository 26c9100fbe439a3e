//! Audit module - audit log entry reports

mod api;
mod commands;
mod models;

pub use commands::run_audit_command;
pub use models::{parse_report_time, AuditReportRequest, AuditReportStatus};
