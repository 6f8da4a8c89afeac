//! Resource clients that map method calls onto REST endpoints.
//!
//! Resources are stateless: each holds only a transport handle and turns
//! its arguments into a path plus query parameters.

pub mod incidents;

pub use incidents::{INCIDENTS_BASE_PATH, IncidentsResource};
