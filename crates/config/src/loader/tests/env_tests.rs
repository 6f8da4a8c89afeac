//! Environment variable tests for the configuration loader.

use crate::loader::builder::ConfigLoader;
use crate::loader::env::env_var_or_none;
use crate::loader::error::ConfigError;
use secrecy::ExposeSecret;
use serial_test::serial;
use std::time::Duration;

use super::{cleared_env, env_lock};

#[test]
#[serial]
fn test_from_env_reads_all_values() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("MUX_BASE_URL", Some("https://env.example.com/")),
            ("MUX_TOKEN_ID", Some("env-id")),
            ("MUX_TOKEN_SECRET", Some("env-secret")),
            ("MUX_TIMEOUT", Some("15")),
        ],
        || {
            let config = ConfigLoader::new().from_env().unwrap().build().unwrap();

            assert_eq!(config.connection.base_url, "https://env.example.com");
            assert_eq!(config.connection.timeout, Duration::from_secs(15));
            assert_eq!(config.auth.token_id, "env-id");
            assert_eq!(config.auth.token_secret.expose_secret(), "env-secret");
        },
    );
}

#[test]
#[serial]
fn test_builder_overrides_env() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("MUX_BASE_URL", Some("https://env.example.com")),
            ("MUX_TOKEN_ID", Some("env-id")),
            ("MUX_TOKEN_SECRET", Some("env-secret")),
            ("MUX_TIMEOUT", None),
        ],
        || {
            let config = ConfigLoader::new()
                .from_env()
                .unwrap()
                .with_base_url("https://cli.example.com".to_string())
                .with_token_id("cli-id".to_string())
                .build()
                .unwrap();

            assert_eq!(config.connection.base_url, "https://cli.example.com");
            assert_eq!(config.auth.token_id, "cli-id");
            assert_eq!(config.auth.token_secret.expose_secret(), "env-secret");
        },
    );
}

#[test]
#[serial]
fn test_empty_env_vars_ignored() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("MUX_BASE_URL", Some("")),
            ("MUX_TOKEN_ID", Some("   ")),
            ("MUX_TOKEN_SECRET", Some("")),
            ("MUX_TIMEOUT", Some("")),
        ],
        || {
            let result = ConfigLoader::new().from_env().unwrap().build();
            assert!(matches!(result, Err(ConfigError::MissingTokenId)));
        },
    );
}

#[test]
#[serial]
fn test_invalid_timeout_env_var() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars([("MUX_TIMEOUT", Some("soon"))], || {
        let result = ConfigLoader::new().from_env();
        match result {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "MUX_TIMEOUT"),
            Err(e) => panic!("Expected InvalidValue, got {:?}", e),
            Ok(_) => panic!("Expected InvalidValue, got Ok"),
        }
    });
}

#[test]
#[serial]
fn test_missing_env_falls_back_to_defaults() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(cleared_env(), || {
        let config = ConfigLoader::new()
            .from_env()
            .unwrap()
            .with_token_id("id".to_string())
            .with_token_secret("secret".to_string())
            .build()
            .unwrap();

        assert_eq!(config.connection.base_url, "https://api.mux.com");
    });
}

#[test]
#[serial]
fn test_env_var_or_none_trims() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_var("MUX_TEST_TRIM", Some("  value  "), || {
        assert_eq!(env_var_or_none("MUX_TEST_TRIM"), Some("value".to_string()));
    });
    temp_env::with_var("MUX_TEST_TRIM", Some("   "), || {
        assert_eq!(env_var_or_none("MUX_TEST_TRIM"), None);
    });
    temp_env::with_var("MUX_TEST_TRIM", None::<&str>, || {
        assert_eq!(env_var_or_none("MUX_TEST_TRIM"), None);
    });
}
