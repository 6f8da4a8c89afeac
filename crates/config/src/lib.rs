//! Configuration management for the Mux Data client.
//!
//! This crate provides types and loaders for managing API connection and
//! credential configuration from `.env` files and environment variables.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{AuthConfig, Config, ConnectionConfig};
