//! Testing utilities for client tests.
//!
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use mux_client::testing::{load_fixture, RecordingTransport};
//!
//! let transport = RecordingTransport::responding(load_fixture("incidents/get_incident.json"));
//! let incidents = mux_client::IncidentsResource::new(&transport);
//! ```

use std::future::Future;
use std::path::Path;
use std::sync::{Mutex, PoisonError};

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ClientError, Result};
use crate::query::QueryParams;
use crate::transport::Transport;

/// Load a JSON fixture file from the fixtures directory.
///
/// # Arguments
/// * `fixture_path` - Relative path within the fixtures directory (e.g., "incidents/list_incidents.json")
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> Value {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let full_path = manifest_dir.join("fixtures").join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// One `Transport::get` invocation seen by [`RecordingTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub path: String,
    pub params: Option<QueryParams>,
}

#[derive(Debug)]
enum Reply {
    Json(Value),
    ApiError { status: u16, message: String },
}

/// Transport double that records every call and answers with a canned reply.
#[derive(Debug)]
pub struct RecordingTransport {
    reply: Reply,
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingTransport {
    /// Answer every call with `body`, decoded into the requested type.
    pub fn responding(body: Value) -> Self {
        Self {
            reply: Reply::Json(body),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Answer every call with `ClientError::ApiError`.
    pub fn failing(status: u16, message: impl Into<String>) -> Self {
        Self {
            reply: Reply::ApiError {
                status,
                message: message.into(),
            },
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Calls seen so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Transport for RecordingTransport {
    fn get<R>(
        &self,
        path: &str,
        params: Option<&QueryParams>,
    ) -> impl Future<Output = Result<R>> + Send
    where
        R: DeserializeOwned + Send,
    {
        async move {
            self.calls
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(RecordedCall {
                    path: path.to_string(),
                    params: params.cloned(),
                });

            match &self.reply {
                Reply::Json(body) => serde_json::from_value(body.clone())
                    .map_err(|e| ClientError::InvalidResponse(e.to_string())),
                Reply::ApiError { status, message } => Err(ClientError::ApiError {
                    status: *status,
                    url: path.to_string(),
                    message: message.clone(),
                    request_id: None,
                }),
            }
        }
    }
}
