//! Output rendering: device responses as JSON.

use serde_json::Value;

use crate::cli::OutputFormat;

/// Render a device response in the selected format.
pub fn render(format: &OutputFormat, value: &Value) -> String {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        OutputFormat::JsonCompact => value.to_string(),
    }
}
