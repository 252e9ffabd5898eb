use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum GhError {
    /// The HTTP client could not be constructed or a request could not be built.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The client was configured with unusable settings, e.g. a REST base that cannot take paths.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The public repository listing (no credential configured) returned a non-success status.
    #[error("Failed to fetch public repos (status {status})")]
    UpstreamUnavailable {
        /// The HTTP status code returned by the listing endpoint.
        status: u16,
        /// Raw response text, if it could be read.
        body: Option<String>,
    },

    /// The GraphQL call failed at the transport level or returned a non-success status.
    #[error("GitHub API error{}", .status.map(|s| format!(": {s}")).unwrap_or_default())]
    UpstreamError {
        /// The HTTP status code; `None` when the request never produced a response.
        status: Option<u16>,
        /// Raw response text or the transport error message.
        body: Option<String>,
    },

    /// The GraphQL call succeeded but the body carries no `data.user` object.
    #[error("No user data returned")]
    UpstreamSchemaMismatch {
        /// The decoded response body, kept for diagnostics.
        raw: serde_json::Value,
    },

    /// The upstream body could not be parsed as the expected structure.
    #[error("Malformed upstream payload: {reason}")]
    MalformedUpstreamPayload {
        /// Decoder message.
        reason: String,
        /// Raw response text.
        body: Option<String>,
    },

    /// Request parameters could not be turned into a usable window.
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),
}

impl GhError {
    /// HTTP status the request boundary should answer with for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            GhError::UpstreamUnavailable { .. }
            | GhError::UpstreamError { .. }
            | GhError::UpstreamSchemaMismatch { .. }
            | GhError::MalformedUpstreamPayload { .. } => 502,
            GhError::InvalidParams(_) => 400,
            GhError::Http(_) | GhError::Url(_) | GhError::InvalidConfig(_) => 500,
        }
    }

    /// Diagnostic payload captured alongside the error, if any.
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            GhError::UpstreamUnavailable { body, .. }
            | GhError::UpstreamError { body, .. }
            | GhError::MalformedUpstreamPayload { body, .. } => {
                body.clone().map(serde_json::Value::String)
            }
            GhError::UpstreamSchemaMismatch { raw } => Some(raw.clone()),
            GhError::InvalidParams(msg) => Some(serde_json::Value::String(msg.clone())),
            GhError::Http(_) | GhError::Url(_) | GhError::InvalidConfig(_) => None,
        }
    }

    /// Whether the error originates from the upstream service rather than from this process.
    pub fn is_upstream(&self) -> bool {
        self.status_code() == 502
    }
}
