//! Data incidents resource.
//!
//! # What this module handles:
//! - Listing incidents
//! - Fetching a single incident by id
//! - Listing incidents related to a given incident
//!
//! # What this module does NOT handle:
//! - HTTP, authentication, or body decoding (delegated to the [`Transport`])
//! - Retries or pagination
//!
//! # Invariants
//! - An empty incident id fails with `ClientError::InvalidArgument` before the
//!   transport is touched.
//! - Query parameters are forwarded unmodified; transport errors are returned
//!   unchanged.

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{ClientError, Result};
use crate::query::QueryParams;
use crate::transport::Transport;

/// Path of the incidents collection.
pub const INCIDENTS_BASE_PATH: &str = "/data/v1/incidents";

/// Read-only client for `/data/v1/incidents`.
///
/// Generic over the transport so callers can share one HTTP client
/// (`&MuxClient`, `Arc<MuxClient>`) or substitute a test double.
///
/// ```rust,ignore
/// use mux_client::{IncidentListParams, IncidentListResponse, IncidentStatus};
///
/// let params = IncidentListParams::new().status(IncidentStatus::Open).into();
/// let open: IncidentListResponse = client.incidents().list(Some(&params)).await?;
/// ```
#[derive(Debug, Clone)]
pub struct IncidentsResource<T> {
    transport: T,
}

impl<T: Transport> IncidentsResource<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// List incidents, optionally filtered (status, severity, paging, ordering).
    pub async fn list<R>(&self, params: Option<&QueryParams>) -> Result<R>
    where
        R: DeserializeOwned + Send,
    {
        debug!(params = params.map_or(0, QueryParams::len), "Listing incidents");
        self.transport.get(INCIDENTS_BASE_PATH, params).await
    }

    /// Fetch one incident.
    pub async fn get<R>(&self, incident_id: &str) -> Result<R>
    where
        R: DeserializeOwned + Send,
    {
        let path = Self::incident_path("incidents.get", incident_id)?;
        debug!(incident_id, "Fetching incident");
        self.transport.get(&path, None).await
    }

    /// List incidents related to `incident_id`.
    pub async fn related<R>(&self, incident_id: &str, params: Option<&QueryParams>) -> Result<R>
    where
        R: DeserializeOwned + Send,
    {
        let path = format!(
            "{}/related",
            Self::incident_path("incidents.related", incident_id)?
        );
        debug!(incident_id, "Listing related incidents");
        self.transport.get(&path, params).await
    }

    fn incident_path(operation: &'static str, incident_id: &str) -> Result<String> {
        if incident_id.is_empty() {
            warn!(operation, "Rejected empty incident id");
            return Err(ClientError::invalid_argument(operation, "incident_id"));
        }
        Ok(format!("{INCIDENTS_BASE_PATH}/{incident_id}"))
    }
}
