// src/net/wire.rs
//
// JSON bodies of the `/scrape` endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::job::JobInput;

#[derive(Debug, Serialize)]
pub struct ScrapeRequest<'a> {
    pub jobs: &'a [JobInput],
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ScrapeResult {
    #[serde(default)]
    pub filename: String,
    /// Base64 of the xlsx document.
    pub file_b64: String,
}

/// Error payload of non-2xx responses.
///
/// `detail` is usually a string; request validation failures send a list of
/// `{ "msg": ... }` objects instead.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorBody {
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            Value::Array(items) => {
                let msgs: Vec<&str> = items
                    .iter()
                    .filter_map(|it| it.get("msg").and_then(Value::as_str))
                    .collect();
                (!msgs.is_empty()).then(|| msgs.join("; "))
            }
            _ => None,
        }
    }
}
