//! Activation status output formatter

use comfy_table::{presets::NOTHING, Table};

use crate::zia::activation::ActivationStatus;

/// Output the configuration activation status as a table
pub fn output_activation_status(status: &ActivationStatus, no_header: bool) {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    if !no_header {
        table.set_header(vec!["STATUS"]);
    }
    table.add_row(vec![status.status()]);
    println!("{table}");
}
