//! Audit log report command handlers

use crate::cli::{AuditAction, Cli, Command, OutputFormat};
use crate::output::{output_audit_status, output_raw, save_result};
use crate::ui::{create_spinner, finish_spinner};
use crate::zia::session::ZiaSession;

use super::models::{parse_report_time, AuditReportRequest};

/// Run the audit report command
pub async fn run_audit_command(
    session: &ZiaSession,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Audit { action } = &cli.command else {
        unreachable!()
    };

    match action {
        AuditAction::Request(args) => {
            let report = AuditReportRequest {
                start_time: parse_report_time(&args.start)?,
                end_time: parse_report_time(&args.end)?,
                action_types: args.action_types.clone(),
                category: args.category.clone(),
                subcategories: args.subcategories.clone(),
                action_result: args.action_result.clone(),
                action_interface: args.action_interface.clone(),
                object_name: args.object_name.clone(),
                client_ip: args.client_ip.clone(),
                admin_name: args.admin_name.clone(),
                target_org_id: args.target_org_id,
            };

            let spinner = create_spinner("Requesting audit log report...", cli.batch);
            let accepted = session.request_audit_report(&report).await?;
            finish_spinner(spinner, "Done");

            if accepted {
                println!("Audit log report requested; poll with 'ziactl audit status'");
            } else {
                eprintln!("No response received from the API");
            }
        }

        AuditAction::Status(args) => {
            let spinner = create_spinner("Fetching report status...", cli.batch);
            let status = session.get_audit_report_status().await?;
            finish_spinner(spinner, "Done");

            match status {
                Some(status) => {
                    save_result(&cli.save, &status)?;
                    if matches!(args.output, OutputFormat::Json | OutputFormat::Yaml) {
                        output_raw(&serde_json::to_value(&status)?, &args.output);
                    } else {
                        output_audit_status(&status, cli.no_header);
                    }
                }
                None => eprintln!("No response received from the API"),
            }
        }

        AuditAction::Cancel => {
            let spinner = create_spinner("Cancelling report request...", cli.batch);
            let cancelled = session.cancel_audit_report().await?;
            finish_spinner(spinner, "Done");

            if cancelled {
                println!("Audit log report request cancelled");
            } else {
                eprintln!("No response received from the API");
            }
        }

        AuditAction::Download(args) => {
            let spinner = create_spinner("Downloading report...", cli.batch);
            let csv = session.download_audit_report().await?;
            finish_spinner(spinner, "Done");

            match csv {
                Some(csv) => match &args.output {
                    Some(path) => {
                        std::fs::write(path, &csv)?;
                        println!("Report written to {}", path);
                    }
                    None => print!("{}", csv),
                },
                None => eprintln!("No response received from the API"),
            }
        }
    }
    Ok(())
}
