// src/error.rs
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::config::consts::MSG_SCRAPE_FAILED;

/// Failure of one `/scrape` call.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The session's token fired. Never shown to the user as an error.
    #[error("request cancelled")]
    Cancelled,

    #[error("request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("server returned HTTP {status}")]
    Server { status: u16, detail: Option<String> },

    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("unreadable response body: {0}")]
    Body(String),
}

impl ClientError {
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ClientError::Cancelled)
    }

    /// Text for the alert: the server's `detail` verbatim, else a generic line.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Server { detail: Some(d), .. } if !d.trim().is_empty() => d.clone(),
            _ => s!(MSG_SCRAPE_FAILED),
        }
    }
}

/// Turning a response payload into bytes, or writing them out.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("response file is not valid base64: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("could not start async runtime: {0}")]
    Runtime(#[from] std::io::Error),

    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("submission worker has stopped")]
    Disconnected,
}

/// Reading a job file from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not UTF-8 text")]
    NotUtf8 { path: PathBuf },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_prefers_server_detail() {
        let e = ClientError::Server { status: 400, detail: Some(s!("bad region")) };
        assert_eq!(e.user_message(), "bad region");
    }

    #[test]
    fn user_message_falls_back() {
        let e = ClientError::Server { status: 500, detail: None };
        assert_eq!(e.user_message(), MSG_SCRAPE_FAILED);
        let e = ClientError::Server { status: 500, detail: Some(s!("  ")) };
        assert_eq!(e.user_message(), MSG_SCRAPE_FAILED);
        assert_eq!(ClientError::Timeout(Duration::from_secs(600)).user_message(), MSG_SCRAPE_FAILED);
    }
}
