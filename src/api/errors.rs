// Error types for the video API client

use std::fmt;

#[derive(Debug, Clone)]
pub enum ApiError {
    /// Video id failed validation before any request was made
    InvalidVideoId(String),

    /// Backend answered with a non-success status
    Http { status: u16, url: String },

    /// Could not reach the backend (connect failure, timeout)
    Network(String),

    /// Response body was not the expected JSON shape
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidVideoId(id) => write!(f, "Invalid video id: {:?}", id),
            Self::Http { status, url } => {
                write!(f, "Request to {} failed with status {}", url, status)
            }
            Self::Network(msg) => write!(f, "Network error: {}", msg),
            Self::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            return Self::Parse(e.to_string());
        }
        if let Some(status) = e.status() {
            return Self::Http {
                status: status.as_u16(),
                url: e.url().map(|u| u.to_string()).unwrap_or_default(),
            };
        }
        // timeouts, connect failures, proxy errors
        Self::Network(e.to_string())
    }
}
