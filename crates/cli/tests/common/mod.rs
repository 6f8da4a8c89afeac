//! Shared test utilities for mux-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Ensure consistent test credentials and base URLs.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - `MUX_TOKEN_ID` / `MUX_TOKEN_SECRET` are set to dummy values unless overridden.

use assert_cmd::Command;

#[allow(dead_code)]
pub const TOKEN_ID: &str = "test-token-id";
#[allow(dead_code)]
pub const TOKEN_SECRET: &str = "test-token-secret";

/// Returns a hermetic `mux-cli` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Token credentials are set to dummy values to satisfy config validation.
/// - Other env vars are cleared to ensure no leakage from the host.
pub fn mux_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("mux-cli");

    cmd.env("DOTENV_DISABLED", "1");

    cmd.env("MUX_TOKEN_ID", TOKEN_ID)
        .env("MUX_TOKEN_SECRET", TOKEN_SECRET);

    cmd.env_remove("MUX_BASE_URL")
        .env_remove("MUX_TIMEOUT")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a hermetic `mux-cli` command pointed at `base_url`.
#[allow(dead_code)]
pub fn mux_cmd_with_base_url(base_url: &str) -> Command {
    let mut cmd = mux_cmd();
    cmd.env("MUX_BASE_URL", base_url);
    cmd
}
