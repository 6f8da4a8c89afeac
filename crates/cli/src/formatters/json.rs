//! JSON formatter implementation.

use anyhow::Result;
use mux_client::{IncidentListResponse, IncidentResponse};

use crate::formatters::Formatter;

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_incidents(&self, response: &IncidentListResponse) -> Result<String> {
        Ok(serde_json::to_string_pretty(response)?)
    }

    fn format_incident(&self, response: &IncidentResponse) -> Result<String> {
        Ok(serde_json::to_string_pretty(response)?)
    }
}
