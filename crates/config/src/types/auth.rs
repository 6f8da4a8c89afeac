//! Credential types.
//!
//! Responsibilities:
//! - Hold the access token id/secret pair used for HTTP Basic authentication.
//! - Handle serialization of secret values.
//!
//! Does NOT handle:
//! - Sending credentials over the wire (see client crate).
//!
//! Invariants:
//! - The token secret is always a `secrecy::SecretString`; `Debug` output redacts it.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Module for serializing SecretString as strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Access token credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Access token id, sent as the Basic auth username.
    pub token_id: String,
    /// Access token secret, sent as the Basic auth password.
    #[serde(with = "secret_string")]
    pub token_secret: SecretString,
}
