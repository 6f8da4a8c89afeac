//! Error types for configuration loading.
//!
//! Invariants:
//! - All error variants include context for debugging (variable names, etc.).
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.
//! - No variant ever carries a credential value.

use std::io::ErrorKind;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Base URL must not be empty. Unset MUX_BASE_URL to use the default host.")]
    MissingBaseUrl,

    #[error("Access token id is required. Set MUX_TOKEN_ID or pass --token-id.")]
    MissingTokenId,

    #[error("Access token secret is required. Set MUX_TOKEN_SECRET or pass --token-secret.")]
    MissingTokenSecret,

    #[error("invalid timeout: {message}")]
    InvalidTimeout { message: String },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl ConfigError {
    /// Whether this error means credentials were not supplied.
    pub fn is_missing_credentials(&self) -> bool {
        matches!(self, Self::MissingTokenId | Self::MissingTokenSecret)
    }
}
