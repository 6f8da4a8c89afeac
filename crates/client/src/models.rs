//! Data models for API responses.

pub mod incidents;

pub use incidents::{
    Incident, IncidentBreakdown, IncidentListParams, IncidentListResponse, IncidentResponse,
    IncidentSeverity, IncidentStatus, OrderDirection, RelatedIncidentParams,
};
