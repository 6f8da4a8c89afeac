//! Table formatter implementation.
//!
//! Responsibilities:
//! - Format incident lists as tab-separated tables with a row-count footer.
//! - Format a single incident as a field/value listing.
//!
//! Does NOT handle:
//! - Other output formats.
//! - File I/O.

use anyhow::Result;
use mux_client::{Incident, IncidentListResponse, IncidentResponse};

use crate::formatters::Formatter;
use crate::formatters::common::{format_missing, format_missing_display};

/// Table formatter.
pub struct TableFormatter;

const LIST_HEADER: &str = "ID\tStatus\tSeverity\tMeasurement\tAffected Views\tStarted At";

fn incident_row(incident: &Incident) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}",
        format_missing(incident.id.as_deref()),
        format_missing(incident.status.as_deref()),
        format_missing(incident.severity.as_deref()),
        format_missing(incident.measurement.as_deref()),
        format_missing_display(incident.affected_views),
        format_missing(incident.started_at.as_deref()),
    )
}

impl Formatter for TableFormatter {
    fn format_incidents(&self, response: &IncidentListResponse) -> Result<String> {
        if response.data.is_empty() {
            return Ok("No incidents found.".to_string());
        }

        let mut output = String::new();
        output.push_str(LIST_HEADER);
        output.push('\n');

        for incident in &response.data {
            output.push_str(&incident_row(incident));
            output.push('\n');
        }

        match response.total_row_count {
            Some(total) => output.push_str(&format!(
                "\nShowing {} of {} incidents",
                response.data.len(),
                total
            )),
            None => output.push_str(&format!("\nShowing {} incidents", response.data.len())),
        }

        Ok(output)
    }

    fn format_incident(&self, response: &IncidentResponse) -> Result<String> {
        let incident = &response.data;
        let mut output = String::new();

        let fields: [(&str, String); 10] = [
            ("ID", format_missing(incident.id.as_deref()).to_string()),
            ("Status", format_missing(incident.status.as_deref()).to_string()),
            ("Severity", format_missing(incident.severity.as_deref()).to_string()),
            ("Description", format_missing(incident.description.as_deref()).to_string()),
            ("Measurement", format_missing(incident.measurement.as_deref()).to_string()),
            ("Measured Value", format_missing_display(incident.measured_value)),
            ("Threshold", format_missing_display(incident.threshold)),
            ("Affected Views", format_missing_display(incident.affected_views)),
            ("Started At", format_missing(incident.started_at.as_deref()).to_string()),
            ("Resolved At", format_missing(incident.resolved_at.as_deref()).to_string()),
        ];

        for (label, value) in fields {
            output.push_str(&format!("{label}:\t{value}\n"));
        }

        if !incident.breakdowns.is_empty() {
            output.push_str("Breakdowns:\n");
            for breakdown in &incident.breakdowns {
                output.push_str(&format!(
                    "  {}\t{}\n",
                    format_missing(breakdown.name.as_deref()),
                    format_missing(breakdown.value.as_deref()),
                ));
            }
        }

        Ok(output)
    }
}
