//! Request sending and response decoding.
//!
//! Non-success responses become `ClientError::ApiError`. The message is taken
//! from the API error envelope when the body has one:
//!
//! ```json
//! {"error": {"type": "not_found", "messages": ["..."]}}
//! ```

use reqwest::{RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{ClientError, Result};

/// Header carrying the server-side request id.
const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(rename = "type")]
    error_type: Option<String>,
    #[serde(default)]
    messages: Vec<String>,
}

/// Send a request once; non-2xx statuses become `ClientError::ApiError`.
pub(crate) async fn send_request(builder: RequestBuilder) -> Result<Response> {
    let response = builder.send().await?;

    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let url = response.url().to_string();
    let request_id = response
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    Err(ClientError::ApiError {
        status,
        url,
        message: error_message(&body),
        request_id,
    })
}

/// Decode a successful response body as JSON.
pub(crate) async fn decode_json<R: DeserializeOwned>(response: Response) -> Result<R> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes)
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse response body: {}", e)))
}

fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => {
            let messages = envelope.error.messages.join("; ");
            match (envelope.error.error_type, messages.is_empty()) {
                (Some(kind), false) => format!("{}: {}", kind, messages),
                (Some(kind), true) => kind,
                (None, _) => messages,
            }
        }
        Err(_) => body.to_string(),
    }
}
