//! Probe error type.

use thiserror::Error;

/// Why a HEAD request produced no response.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The request could not be built from the given URL.
    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// Only HTTP and HTTPS are probed.
    #[error("unsupported protocol scheme {scheme:?} in {url:?}")]
    UnsupportedScheme { url: String, scheme: String },
    /// libcurl failed to send the request or receive a response
    /// (DNS, connect, TLS, timeout, ...).
    #[error("HEAD request failed: {0}")]
    Transport(#[from] curl::Error),
}

impl ProbeError {
    pub fn is_timeout(&self) -> bool {
        match self {
            ProbeError::Transport(e) => e.is_operation_timedout(),
            ProbeError::InvalidUrl { .. } | ProbeError::UnsupportedScheme { .. } => false,
        }
    }
}
