//! Wire DTOs for the authentication backend.
//!
//! DESIGN
//! ======
//! The backend emits `user_id` as a JSON integer while browser storage only
//! holds strings, so the session record normalizes it on decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Username/password pair posted to `/authorizations/`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Session issued by a successful login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Bearer token for subsequent API calls.
    pub token: String,
    /// Backend user id, always stored as text.
    #[serde(deserialize_with = "deserialize_string_from_scalar")]
    pub user_id: String,
    /// Canonical username as spelled by the backend.
    pub username: String,
}

/// Response of the QQ OAuth authorization endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct QqAuthorization {
    /// Third-party login URL the browser is sent to.
    pub auth_url: String,
}

fn deserialize_string_from_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(text) => Ok(text),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        _ => Err(D::Error::custom("expected string or number")),
    }
}
