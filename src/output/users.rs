//! User, group and department output formatters

use comfy_table::{presets::NOTHING, Table};

use super::common::{escape_csv, print_json, print_yaml};
use crate::cli::OutputFormat;
use crate::zia::users::{Department, Group, User};

/// Output users in the specified format
pub fn output_users(users: &[User], format: &OutputFormat, no_header: bool) {
    match format {
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(NOTHING);
            if !no_header {
                table.set_header(vec!["ID", "NAME", "EMAIL", "DEPARTMENT", "GROUPS"]);
            }
            for user in users {
                table.add_row(vec![
                    &user.id.to_string(),
                    user.name(),
                    user.email(),
                    user.department_name(),
                    &user.group_names(),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Csv => {
            if !no_header {
                println!("ID,NAME,EMAIL,DEPARTMENT,GROUPS");
            }
            for user in users {
                println!(
                    "{},{},{},{},{}",
                    user.id,
                    escape_csv(user.name()),
                    escape_csv(user.email()),
                    escape_csv(user.department_name()),
                    escape_csv(&user.group_names())
                );
            }
        }
        OutputFormat::Json => print_json(&users),
        OutputFormat::Yaml => print_yaml(&users),
    }
}

/// Output user groups in the specified format
pub fn output_groups(groups: &[Group], format: &OutputFormat, no_header: bool) {
    match format {
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(NOTHING);
            if !no_header {
                table.set_header(vec!["ID", "NAME", "COMMENTS"]);
            }
            for group in groups {
                table.add_row(vec![&group.id.to_string(), group.name(), group.comments()]);
            }
            println!("{table}");
        }
        OutputFormat::Csv => {
            if !no_header {
                println!("ID,NAME,COMMENTS");
            }
            for group in groups {
                println!(
                    "{},{},{}",
                    group.id,
                    escape_csv(group.name()),
                    escape_csv(group.comments())
                );
            }
        }
        OutputFormat::Json => print_json(&groups),
        OutputFormat::Yaml => print_yaml(&groups),
    }
}

/// Output departments in the specified format
pub fn output_departments(departments: &[Department], format: &OutputFormat, no_header: bool) {
    match format {
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(NOTHING);
            if !no_header {
                table.set_header(vec!["ID", "NAME", "COMMENTS"]);
            }
            for department in departments {
                table.add_row(vec![
                    &department.id.to_string(),
                    department.name(),
                    department.comments(),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Csv => {
            if !no_header {
                println!("ID,NAME,COMMENTS");
            }
            for department in departments {
                println!(
                    "{},{},{}",
                    department.id,
                    escape_csv(department.name()),
                    escape_csv(department.comments())
                );
            }
        }
        OutputFormat::Json => print_json(&departments),
        OutputFormat::Yaml => print_yaml(&departments),
    }
}
