//! Error types for API operations.
//!
//! Every operation resolves to either its success value or an `ApiError`;
//! the client never panics on a bad response. Transport failures and
//! non-2xx responses land in the same channel, as the store only ever
//! records a message.

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur during an API call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level failure (DNS, connect, TLS, mid-body disconnect).
    #[error("request failed: {source}")]
    Transport {
        #[from]
        source: reqwest::Error,
    },

    /// Non-2xx response with a parseable `{errors: ...}` body.
    #[error("server rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// Registration conflict with field-level messages.
    #[error("registration rejected: {0}")]
    Registration(RegisterErrors),

    /// 2xx response whose body did not match the expected shape.
    #[error("failed to decode response body: {source}")]
    Decode {
        #[from]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Flatten to the message the state container stores for display.
    pub fn display_message(&self) -> String {
        self.to_string()
    }
}

/// Field-level registration errors.
///
/// The server's validation field set is not exhaustively documented;
/// `email` and `username` are the conflicts observed in practice, anything
/// else is ignored. Values arrive as either a string or an array of
/// strings depending on server version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RegisterErrors {
    #[serde(default, deserialize_with = "deserialize_messages")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "deserialize_messages")]
    pub username: Option<String>,
}

impl RegisterErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.username.is_none()
    }
}

impl std::fmt::Display for RegisterErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        if let Some(ref msg) = self.email {
            write!(f, "email {}", msg)?;
            first = false;
        }
        if let Some(ref msg) = self.username {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "username {}", msg)?;
        }
        if self.is_empty() {
            write!(f, "unknown validation error")?;
        }
        Ok(())
    }
}

/// Accept `"taken"` or `["taken", "reserved"]` for a field message.
fn deserialize_messages<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    let value = Option::<OneOrMany>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        OneOrMany::One(s) => s,
        OneOrMany::Many(list) => list.join(", "),
    }))
}

/// The `{"errors": ...}` wrapper the server returns on failure.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorsBody {
    #[serde(default)]
    pub errors: serde_json::Value,
}

impl ErrorsBody {
    /// Reduce an arbitrary `errors` value to a display string.
    ///
    /// Observed shapes: `{"body": "..."}`, `{"email or password": ["is invalid"]}`,
    /// a bare string, or nothing at all.
    pub fn message(&self) -> String {
        match &self.errors {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Object(map) => {
                let mut parts: Vec<String> = Vec::with_capacity(map.len());
                for (field, value) in map {
                    match value {
                        serde_json::Value::String(s) => parts.push(format!("{} {}", field, s)),
                        serde_json::Value::Array(items) => {
                            for item in items {
                                if let serde_json::Value::String(s) = item {
                                    parts.push(format!("{} {}", field, s));
                                }
                            }
                        }
                        other => parts.push(format!("{} {}", field, other)),
                    }
                }
                if parts.is_empty() {
                    "unknown error".to_string()
                } else {
                    parts.join("; ")
                }
            }
            serde_json::Value::Null => "unknown error".to_string(),
            other => other.to_string(),
        }
    }
}
