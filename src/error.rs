use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MeteomaticsError {
    #[error("Missing credential '{0}' for Meteomatics")]
    MissingCredential(&'static str),

    #[error("Invalid base URL '{0}', expected an http(s) endpoint")]
    InvalidBaseUrl(String),

    #[error("Date range does not denote a valid calendar period")]
    InvalidDateRange,

    #[error("Failed to build HTTP client")]
    HttpClientBuild(#[source] reqwest::Error),

    #[error("No response from {url} within {after:?}")]
    Timeout { url: String, after: Duration },

    #[error("Network request failed for {url}")]
    NetworkRequest {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl MeteomaticsError {
    /// The underlying transport error, if this error came from a request.
    pub fn transport_error(&self) -> Option<&reqwest::Error> {
        match self {
            MeteomaticsError::NetworkRequest { source, .. } => Some(source),
            MeteomaticsError::HttpClientBuild(source) => Some(source),
            _ => None,
        }
    }
}
