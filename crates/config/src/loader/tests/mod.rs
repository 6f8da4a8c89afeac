//! Tests for the configuration loader.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.

use std::sync::Mutex;

pub mod dotenv_tests;
pub mod env_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Environment variables read by the loader, all unset.
pub fn cleared_env() -> [(&'static str, Option<&'static str>); 4] {
    [
        ("MUX_BASE_URL", None),
        ("MUX_TOKEN_ID", None),
        ("MUX_TOKEN_SECRET", None),
        ("MUX_TIMEOUT", None),
    ]
}
