//! Admin role and admin user output formatters

use comfy_table::{presets::NOTHING, Table};

use super::common::{escape_csv, print_json, print_yaml};
use crate::cli::OutputFormat;
use crate::zia::admins::{AdminRole, AdminUser};

/// Output admin roles in the specified format
pub fn output_admin_roles(roles: &[AdminRole], format: &OutputFormat, no_header: bool) {
    match format {
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(NOTHING);
            if !no_header {
                table.set_header(vec!["ID", "NAME", "RANK", "TYPE"]);
            }
            for role in roles {
                table.add_row(vec![
                    &role.id.to_string(),
                    role.name(),
                    &role.rank.map(|r| r.to_string()).unwrap_or_default(),
                    role.role_type(),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Csv => {
            if !no_header {
                println!("ID,NAME,RANK,TYPE");
            }
            for role in roles {
                println!(
                    "{},{},{},{}",
                    role.id,
                    escape_csv(role.name()),
                    role.rank.map(|r| r.to_string()).unwrap_or_default(),
                    escape_csv(role.role_type())
                );
            }
        }
        OutputFormat::Json => print_json(&roles),
        OutputFormat::Yaml => print_yaml(&roles),
    }
}

/// Output admin users in the specified format
pub fn output_admin_users(admins: &[AdminUser], format: &OutputFormat, no_header: bool) {
    match format {
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(NOTHING);
            if !no_header {
                table.set_header(vec!["ID", "LOGIN", "NAME", "ROLE", "AUDITOR", "DISABLED"]);
            }
            for admin in admins {
                table.add_row(vec![
                    &admin.id.to_string(),
                    admin.login_name(),
                    admin.user_name(),
                    admin.role_name(),
                    &admin.is_auditor().to_string(),
                    &admin.is_disabled().to_string(),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Csv => {
            if !no_header {
                println!("ID,LOGIN,NAME,ROLE,AUDITOR,DISABLED");
            }
            for admin in admins {
                println!(
                    "{},{},{},{},{},{}",
                    admin.id,
                    escape_csv(admin.login_name()),
                    escape_csv(admin.user_name()),
                    escape_csv(admin.role_name()),
                    admin.is_auditor(),
                    admin.is_disabled()
                );
            }
        }
        OutputFormat::Json => print_json(&admins),
        OutputFormat::Yaml => print_yaml(&admins),
    }
}
