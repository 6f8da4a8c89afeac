//! Incidents command implementation.
//!
//! Responsibilities:
//! - List incidents with status/severity/paging filters.
//! - Fetch a single incident by id.
//! - List incidents related to a given incident.
//!
//! Does NOT handle:
//! - Direct REST API calls (handled by client crate).
//! - Output formatting details (see formatters module).
//!
//! Invariants:
//! - `--param` entries are forwarded verbatim and override typed flags with the same key.
//! - Repeating a `--param` key ending in `[]` accumulates an array.

use anyhow::{Context, Result};
use clap::Subcommand;
use mux_client::{
    IncidentListParams, IncidentListResponse, IncidentResponse, IncidentSeverity, IncidentStatus,
    OrderDirection, QueryParams, QueryValue, RelatedIncidentParams,
};
use mux_config::Config;
use tracing::info;

use crate::cancellation::CancellationToken;
use crate::formatters::{OutputFormat, get_formatter, output_result};

#[derive(Subcommand)]
pub enum IncidentsCommand {
    /// List incidents
    List {
        /// Only incidents in this state
        #[arg(long, value_enum)]
        status: Option<IncidentStatus>,

        /// Only incidents of this severity
        #[arg(long, value_enum)]
        severity: Option<IncidentSeverity>,

        #[command(flatten)]
        paging: PagingArgs,
    },
    /// Show a single incident
    Get {
        /// Incident id
        id: String,
    },
    /// List incidents related to an incident
    Related {
        /// Incident id
        id: String,

        /// Only related incidents on this measurement
        #[arg(long)]
        measurement: Option<String>,

        #[command(flatten)]
        paging: PagingArgs,
    },
}

/// Paging, ordering and raw query options shared by `list` and `related`.
#[derive(clap::Args, Debug, Default)]
pub struct PagingArgs {
    /// Maximum number of items per page
    #[arg(long)]
    pub limit: Option<u32>,

    /// Page number (1-based)
    #[arg(long)]
    pub page: Option<u32>,

    /// Field to order by (e.g. negative_impact)
    #[arg(long)]
    pub order_by: Option<String>,

    /// Sort direction
    #[arg(long, value_enum)]
    pub order_direction: Option<OrderDirection>,

    /// Extra query parameter forwarded as-is (repeatable)
    #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,
}

fn parse_key_val(s: &str) -> std::result::Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid KEY=VALUE: no '=' found in '{s}'"))?;
    if key.is_empty() {
        return Err(format!("invalid KEY=VALUE: empty key in '{s}'"));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Merge raw `--param` pairs into `params`.
fn apply_raw_params(mut params: QueryParams, raw: Vec<(String, String)>) -> QueryParams {
    for (key, value) in raw {
        if key.ends_with("[]") {
            let mut items = match params.get(&key) {
                Some(QueryValue::Array(items)) => items.clone(),
                _ => Vec::new(),
            };
            items.push(QueryValue::String(value));
            params.insert(key, QueryValue::Array(items));
        } else {
            params.insert(key, value);
        }
    }
    params
}

fn list_params(
    status: Option<IncidentStatus>,
    severity: Option<IncidentSeverity>,
    paging: PagingArgs,
) -> QueryParams {
    let typed = IncidentListParams {
        limit: paging.limit,
        page: paging.page,
        order_by: paging.order_by,
        order_direction: paging.order_direction,
        status,
        severity,
    };
    apply_raw_params(typed.into(), paging.params)
}

fn related_params(measurement: Option<String>, paging: PagingArgs) -> QueryParams {
    let typed = RelatedIncidentParams {
        limit: paging.limit,
        page: paging.page,
        order_by: paging.order_by,
        order_direction: paging.order_direction,
        measurement,
    };
    apply_raw_params(typed.into(), paging.params)
}

/// Run an incidents subcommand.
pub async fn run(
    config: Config,
    command: IncidentsCommand,
    output_format: &str,
    output_file: Option<std::path::PathBuf>,
    cancel: &CancellationToken,
) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;
    let client = crate::commands::build_client_from_config(&config)?;
    let incidents = client.incidents();
    let formatter = get_formatter(format);

    let output = match command {
        IncidentsCommand::List {
            status,
            severity,
            paging,
        } => {
            let params = list_params(status, severity, paging);
            info!("Listing incidents ({} filters)", params.len());

            let response: IncidentListResponse = cancellable!(
                incidents.list(if params.is_empty() { None } else { Some(&params) }),
                cancel
            )
            .context("Failed to list incidents")?;
            formatter.format_incidents(&response)?
        }
        IncidentsCommand::Get { id } => {
            info!("Fetching incident {}", id);

            let response: IncidentResponse = cancellable!(incidents.get(&id), cancel)
                .with_context(|| format!("Failed to fetch incident '{id}'"))?;
            formatter.format_incident(&response)?
        }
        IncidentsCommand::Related {
            id,
            measurement,
            paging,
        } => {
            let params = related_params(measurement, paging);
            info!("Listing incidents related to {}", id);

            let response: IncidentListResponse = cancellable!(
                incidents.related(&id, if params.is_empty() { None } else { Some(&params) }),
                cancel
            )
            .with_context(|| format!("Failed to list incidents related to '{id}'"))?;
            formatter.format_incidents(&response)?
        }
    };

    output_result(&output, format, output_file.as_ref())
}
