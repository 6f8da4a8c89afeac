//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide JSON and table output for incident responses.
//! - Route formatted output to stdout or a file.
//!
//! Does NOT handle:
//! - Fetching data (see `commands`).
//!
//! Invariants:
//! - JSON output is the response body re-encoded, unknown fields included.
//! - Tables use tab-separation; missing values render as `N/A`.

use anyhow::Result;
use mux_client::{IncidentListResponse, IncidentResponse};

mod common;
mod json;
mod table;

pub use common::output_result;
pub use json::JsonFormatter;
pub use table::TableFormatter;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            _ => anyhow::bail!("Invalid output format: {}. Valid options: json, table", s),
        }
    }
}

/// Formatter trait for different output types.
pub trait Formatter {
    /// Format an incident list (`list` and `related`).
    fn format_incidents(&self, response: &IncidentListResponse) -> Result<String>;

    /// Format a single incident.
    fn format_incident(&self, response: &IncidentResponse) -> Result<String>;
}

/// Get a formatter for the specified output format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("table").unwrap(), OutputFormat::Table);
        assert!(OutputFormat::from_str("csv").is_err());
    }
}
