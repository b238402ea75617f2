//! Transport error type.
//!
//! Connection failures, non-success statuses and decode failures all surface
//! as one `TransportError`. Controllers only ever look at its message.

use reqwest::StatusCode;
use thiserror::Error;

const BODY_PREVIEW_CHAR_LIMIT: usize = 160;

/// Errors that can occur while fetching a resource from the backend.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request never produced a response (DNS, TLS, refused, reset).
    #[error("Connection failed for {resource}: {message}")]
    Connection { resource: String, message: String },

    /// The backend answered with a non-2xx status.
    #[error("{resource} request failed with {message}")]
    Status {
        resource: String,
        status: u16,
        message: String,
    },

    /// The body was not a JSON array of the expected records.
    #[error("Failed to decode {resource}: {message}")]
    Decode { resource: String, message: String },
}

impl TransportError {
    pub(crate) fn connection(resource: &str, error: &reqwest::Error) -> Self {
        TransportError::Connection {
            resource: resource.to_string(),
            message: error.to_string(),
        }
    }

    pub(crate) fn invalid_url(resource: &str, error: &url::ParseError) -> Self {
        TransportError::Connection {
            resource: resource.to_string(),
            message: format!("invalid request URL: {error}"),
        }
    }

    pub(crate) fn status(resource: &str, status: StatusCode, body: &[u8]) -> Self {
        let preview = body_preview(body);
        let message = if preview.is_empty() {
            format!("status {}", status.as_u16())
        } else {
            format!("status {}: {}", status.as_u16(), preview)
        };
        TransportError::Status {
            resource: resource.to_string(),
            status: status.as_u16(),
            message,
        }
    }

    pub(crate) fn decode(resource: &str, error: &serde_json::Error) -> Self {
        TransportError::Decode {
            resource: resource.to_string(),
            message: error.to_string(),
        }
    }

    /// Short machine-readable kind, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            TransportError::Connection { .. } => "connection",
            TransportError::Status { .. } => "status",
            TransportError::Decode { .. } => "decode",
        }
    }
}

/// A base URL that cannot anchor backend requests.
#[derive(Debug, Error)]
pub enum BaseUrlError {
    #[error("'{url}' is not a valid URL: {source}")]
    Parse {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("'{url}' uses unsupported scheme '{scheme}', expected http or https")]
    UnsupportedScheme { url: String, scheme: String },

    #[error("'{url}' has no host")]
    MissingHost { url: String },

    #[error("'{url}' must not carry a query string or fragment")]
    HasQuery { url: String },
}

/// Errors raised while constructing an [`ApiClient`](crate::api::ApiClient).
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid base URL: {0}")]
    BaseUrl(#[from] BaseUrlError),

    #[error("Failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

fn body_preview(body: &[u8]) -> String {
    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact
        .chars()
        .take(BODY_PREVIEW_CHAR_LIMIT)
        .collect::<String>();
    if compact.chars().count() > BODY_PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
