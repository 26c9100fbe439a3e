//! Common utilities for output formatters

use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::error::Result;

/// Escape a value for CSV output
/// Handles commas, quotes, and newlines according to RFC 4180
pub fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap());
}

/// Print any serializable value as YAML
pub fn print_yaml<T: Serialize>(value: &T) {
    print!("{}", serde_yml::to_string(value).unwrap());
}

/// Print a raw server payload; anything that is not YAML comes out as JSON
pub fn output_raw(value: &Value, format: &OutputFormat) {
    match format {
        OutputFormat::Yaml => print_yaml(value),
        _ => print_json(value),
    }
}

/// Print a mutation confirmation, or a notice when the retry budget ran out
pub fn output_mutation(result: &Option<Value>, format: &OutputFormat) {
    match result {
        Some(value) => output_raw(value, format),
        None => eprintln!("No response received from the API"),
    }
}

/// Write the raw JSON result to the --save file when one was given
pub fn save_result<T: Serialize>(path: &Option<String>, value: &T) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    std::fs::write(path, serde_json::to_string_pretty(value)?)?;
    eprintln!("Result saved to {}", path);
    Ok(())
}
