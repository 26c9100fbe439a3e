//! Audit report status output formatter

use comfy_table::{presets::NOTHING, Table};

use crate::zia::audit::AuditReportStatus;

/// Output the pending audit report status as a table
pub fn output_audit_status(status: &AuditReportStatus, no_header: bool) {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    if !no_header {
        table.set_header(vec!["STATUS", "ITEMS COMPLETE", "ERROR"]);
    }

    let error = match (&status.error_code, &status.error_message) {
        (Some(code), Some(msg)) => format!("{}: {}", code, msg),
        (Some(code), None) => code.clone(),
        (None, Some(msg)) => msg.clone(),
        (None, None) => String::new(),
    };
    table.add_row(vec![
        status.status(),
        &status
            .progress_items_complete
            .map(|n| n.to_string())
            .unwrap_or_default(),
        &error,
    ]);

    println!("{table}");
}
