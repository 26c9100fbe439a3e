//! Authentication-exempt URL list output formatter

use comfy_table::{presets::NOTHING, Table};

use super::common::{escape_csv, print_json, print_yaml};
use crate::cli::OutputFormat;
use crate::zia::auth_settings::ExemptedUrls;

/// Output the exempt URL list in the specified format
pub fn output_exempted_urls(urls: &ExemptedUrls, format: &OutputFormat, no_header: bool) {
    match format {
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(NOTHING);
            if !no_header {
                table.set_header(vec!["URL"]);
            }
            for url in &urls.urls {
                table.add_row(vec![url.as_str()]);
            }
            println!("{table}");
        }
        OutputFormat::Csv => {
            if !no_header {
                println!("URL");
            }
            for url in &urls.urls {
                println!("{}", escape_csv(url));
            }
        }
        OutputFormat::Json => print_json(urls),
        OutputFormat::Yaml => print_yaml(urls),
    }
}
