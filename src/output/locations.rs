//! Location output formatters

use comfy_table::{presets::NOTHING, Table};

use super::common::{escape_csv, print_json, print_yaml};
use crate::cli::OutputFormat;
use crate::zia::locations::{Location, LocationLite};

/// Output locations in the specified format
pub fn output_locations(locations: &[Location], format: &OutputFormat, no_header: bool) {
    match format {
        OutputFormat::Table => output_table(locations, no_header),
        OutputFormat::Csv => output_csv(locations, no_header),
        OutputFormat::Json => print_json(&locations),
        OutputFormat::Yaml => print_yaml(&locations),
    }
}

fn output_table(locations: &[Location], no_header: bool) {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    if !no_header {
        table.set_header(vec![
            "ID",
            "NAME",
            "COUNTRY",
            "TIMEZONE",
            "AUTH",
            "SSL SCAN",
            "IP ADDRESSES",
        ]);
    }

    for location in locations {
        table.add_row(vec![
            &location.id.to_string(),
            location.name(),
            location.country(),
            location.timezone(),
            &location.auth_required().to_string(),
            &location.ssl_scan_enabled().to_string(),
            &location.ip_addresses().join(", "),
        ]);
    }

    println!("{table}");
}

fn output_csv(locations: &[Location], no_header: bool) {
    if !no_header {
        println!("ID,NAME,COUNTRY,TIMEZONE,AUTH,SSL_SCAN,IP_ADDRESSES");
    }
    for location in locations {
        println!(
            "{},{},{},{},{},{},{}",
            location.id,
            escape_csv(location.name()),
            escape_csv(location.country()),
            escape_csv(location.timezone()),
            location.auth_required(),
            location.ssl_scan_enabled(),
            escape_csv(&location.ip_addresses().join(", "))
        );
    }
}

/// Output the lite (id/name) location listing
pub fn output_locations_lite(locations: &[LocationLite], format: &OutputFormat, no_header: bool) {
    match format {
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(NOTHING);
            if !no_header {
                table.set_header(vec!["ID", "NAME", "PARENT"]);
            }
            for location in locations {
                table.add_row(vec![
                    &location.id.to_string(),
                    location.name(),
                    &location.parent_id.map(|p| p.to_string()).unwrap_or_default(),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Csv => {
            if !no_header {
                println!("ID,NAME,PARENT");
            }
            for location in locations {
                println!(
                    "{},{},{}",
                    location.id,
                    escape_csv(location.name()),
                    location.parent_id.map(|p| p.to_string()).unwrap_or_default()
                );
            }
        }
        OutputFormat::Json => print_json(&locations),
        OutputFormat::Yaml => print_yaml(&locations),
    }
}
