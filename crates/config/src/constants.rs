//! Centralized constants for the Mux Data workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default API host.
pub const DEFAULT_BASE_URL: &str = "https://api.mux.com";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Environment Variables
// =============================================================================

/// Base URL override.
pub const ENV_BASE_URL: &str = "MUX_BASE_URL";

/// Access token id (HTTP Basic username).
pub const ENV_TOKEN_ID: &str = "MUX_TOKEN_ID";

/// Access token secret (HTTP Basic password).
pub const ENV_TOKEN_SECRET: &str = "MUX_TOKEN_SECRET";

/// Request timeout in seconds.
pub const ENV_TIMEOUT: &str = "MUX_TIMEOUT";

/// Set to `1` or `true` to skip `.env` loading.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";
