//! Incident models for the Data incidents API.
//!
//! Response types keep every field optional and preserve unknown fields in
//! `extra`, so decoding and re-encoding a body does not lose information.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::query::QueryParams;

/// A detected anomaly in playback metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incident_key: Option<String>,
    /// `open`, `closed` or `expected`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// `warning` or `alert`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_description: Option<String>,
    /// Metric the incident was raised on (e.g. `error_rate`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measurement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measured_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measured_value_on_close: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affected_views: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affected_views_per_hour: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affected_views_per_hour_on_open: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_size: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_size_unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub breakdowns: Vec<IncidentBreakdown>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notifications: Vec<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notification_rules: Vec<Value>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Dimension/value pair that scopes an incident.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncidentBreakdown {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Body of `list` and `related`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncidentListResponse {
    #[serde(default)]
    pub data: Vec<Incident>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_row_count: Option<i64>,
    /// `[start, end]` epoch seconds
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub timeframe: Vec<i64>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Body of `get`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncidentResponse {
    #[serde(default)]
    pub data: Incident,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub timeframe: Vec<i64>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Incident lifecycle state accepted by the `status` filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum IncidentStatus {
    Open,
    Closed,
    Expected,
}

impl IncidentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            IncidentStatus::Open => "open",
            IncidentStatus::Closed => "closed",
            IncidentStatus::Expected => "expected",
        }
    }
}

/// Severity accepted by the `severity` filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum IncidentSeverity {
    Warning,
    Alert,
}

impl IncidentSeverity {
    pub fn as_str(self) -> &'static str {
        match self {
            IncidentSeverity::Warning => "warning",
            IncidentSeverity::Alert => "alert",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OrderDirection {
    Asc,
    Desc,
}

impl OrderDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderDirection::Asc => "asc",
            OrderDirection::Desc => "desc",
        }
    }
}

/// Typed filters for listing incidents.
///
/// Converts into [`QueryParams`]; unset fields are omitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IncidentListParams {
    pub limit: Option<u32>,
    pub page: Option<u32>,
    pub order_by: Option<String>,
    pub order_direction: Option<OrderDirection>,
    pub status: Option<IncidentStatus>,
    pub severity: Option<IncidentSeverity>,
}

impl IncidentListParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn order_by(mut self, field: impl Into<String>) -> Self {
        self.order_by = Some(field.into());
        self
    }

    pub fn order_direction(mut self, direction: OrderDirection) -> Self {
        self.order_direction = Some(direction);
        self
    }

    pub fn status(mut self, status: IncidentStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn severity(mut self, severity: IncidentSeverity) -> Self {
        self.severity = Some(severity);
        self
    }
}

impl From<IncidentListParams> for QueryParams {
    fn from(p: IncidentListParams) -> Self {
        let mut params = paging_params(p.limit, p.page, p.order_by, p.order_direction);
        if let Some(status) = p.status {
            params.insert("status", status.as_str());
        }
        if let Some(severity) = p.severity {
            params.insert("severity", severity.as_str());
        }
        params
    }
}

/// Typed filters for listing incidents related to another incident.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RelatedIncidentParams {
    pub limit: Option<u32>,
    pub page: Option<u32>,
    pub order_by: Option<String>,
    pub order_direction: Option<OrderDirection>,
    pub measurement: Option<String>,
}

impl RelatedIncidentParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn order_by(mut self, field: impl Into<String>) -> Self {
        self.order_by = Some(field.into());
        self
    }

    pub fn order_direction(mut self, direction: OrderDirection) -> Self {
        self.order_direction = Some(direction);
        self
    }

    pub fn measurement(mut self, measurement: impl Into<String>) -> Self {
        self.measurement = Some(measurement.into());
        self
    }
}

impl From<RelatedIncidentParams> for QueryParams {
    fn from(p: RelatedIncidentParams) -> Self {
        let mut params = paging_params(p.limit, p.page, p.order_by, p.order_direction);
        if let Some(measurement) = p.measurement {
            params.insert("measurement", measurement);
        }
        params
    }
}

fn paging_params(
    limit: Option<u32>,
    page: Option<u32>,
    order_by: Option<String>,
    order_direction: Option<OrderDirection>,
) -> QueryParams {
    let mut params = QueryParams::new();
    if let Some(limit) = limit {
        params.insert("limit", limit);
    }
    if let Some(page) = page {
        params.insert("page", page);
    }
    if let Some(order_by) = order_by {
        params.insert("order_by", order_by);
    }
    if let Some(direction) = order_direction {
        params.insert("order_direction", direction.as_str());
    }
    params
}
