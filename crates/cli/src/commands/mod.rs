//! CLI command implementations.

pub mod incidents;

use anyhow::Result;
use mux_client::MuxClient;
use mux_config::Config;

/// Build a [`MuxClient`] from loaded configuration.
pub fn build_client_from_config(config: &Config) -> Result<MuxClient> {
    Ok(MuxClient::builder().from_config(config).build()?)
}
