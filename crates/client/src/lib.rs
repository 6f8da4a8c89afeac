//! Mux Data API client.
//!
//! This crate provides a type-safe client for the Data incidents endpoints.
//! Resources delegate to a [`Transport`]; [`MuxClient`] is the reqwest-backed
//! implementation authenticating with an access token id/secret pair.

pub mod client;
pub mod error;
pub mod models;
pub mod query;
pub mod resources;
pub mod transport;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use client::MuxClient;
pub use client::builder::MuxClientBuilder;
pub use error::{ClientError, Result};
pub use models::{
    Incident, IncidentBreakdown, IncidentListParams, IncidentListResponse, IncidentResponse,
    IncidentSeverity, IncidentStatus, OrderDirection, RelatedIncidentParams,
};
pub use query::{QueryParams, QueryValue};
pub use resources::{INCIDENTS_BASE_PATH, IncidentsResource};
pub use transport::Transport;
