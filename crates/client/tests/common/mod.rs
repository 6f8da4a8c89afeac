//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON

#[allow(unused_imports)]
pub use mux_client::testing::load_fixture;

#[allow(unused_imports)]
pub use mux_client::{ClientError, MuxClient};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN_ID: &str = "test-token-id";
pub const TOKEN_SECRET: &str = "test-token-secret";

/// Client pointed at a mock server with the test credentials.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> MuxClient {
    MuxClient::builder()
        .base_url(server.uri())
        .token_id(TOKEN_ID.to_string())
        .token_secret(TOKEN_SECRET.to_string())
        .build()
        .expect("client should build")
}
