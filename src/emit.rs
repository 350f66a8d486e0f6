//! Emitter: renders generated records and writes them out.

use crate::error::ApiError;
use crate::model::DeviceRecord;
use comfy_table::Table;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Rendering for the emitted document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON array, 2-space indentation
    #[default]
    Json,
    /// Human-readable table
    Table,
}

impl FromStr for OutputFormat {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            other => Err(ApiError::InvalidFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Table => write!(f, "table"),
        }
    }
}

/// Render `records` in `format`. An empty slice renders as `[]` in JSON.
pub fn serialize(records: &[DeviceRecord], format: OutputFormat) -> Result<String, ApiError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
        OutputFormat::Table => Ok(format_table(records)),
    }
}

fn format_table(records: &[DeviceRecord]) -> String {
    if records.is_empty() {
        return "No devices generated.".to_string();
    }
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(vec!["ID", "Name", "Type", "IP", "Port", "Created"]);
    for r in records {
        table.add_row(vec![
            r.id.clone(),
            r.name.clone(),
            r.device_type.clone(),
            r.ip.clone(),
            r.port.to_string(),
            r.created_at.to_rfc3339(),
        ]);
    }
    table.to_string()
}

/// Serialize the whole document, then write it with a trailing newline.
///
/// Nothing reaches `writer` if serialization fails.
pub fn emit<W: Write>(
    records: &[DeviceRecord],
    format: OutputFormat,
    writer: &mut W,
) -> Result<(), ApiError> {
    let document = serialize(records, format)?;
    writeln!(writer, "{}", document)?;
    writer.flush()?;
    Ok(())
}

/// Parse a JSON document produced by [`serialize`] back into records.
pub fn parse_records(text: &str) -> Result<Vec<DeviceRecord>, ApiError> {
    Ok(serde_json::from_str(text)?)
}
