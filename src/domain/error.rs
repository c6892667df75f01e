//! Error types for marketplace client operations.
//!
//! Every failure a request can produce is returned as a [`MarketError`] value,
//! split by where it happened: building the transport, on the wire, in the
//! remote's failure envelope, or while decoding the payload.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for marketplace client operations.
#[derive(Debug, Error)]
pub enum MarketError {
    /// The HTTP transport could not be constructed.
    #[error("Failed to initialize HTTP client: {0}")]
    ClientInit(String),

    /// Connection-level failure (DNS, connect, TLS, timeout, body read).
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The caller cancelled the request before it completed.
    #[error("Request cancelled")]
    Cancelled,

    /// The remote answered with a non-2xx status and `{"success": false}`.
    #[error("Request not successful (HTTP {status})")]
    NotSuccessful {
        /// HTTP status code of the response.
        status: u16,
    },

    /// The remote answered with a non-2xx status and a body that is not a failure envelope.
    #[error("Backend returned status {status}: {body}")]
    UnexpectedResponse {
        /// HTTP status code of the response.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// A 2xx response whose body did not match the expected shape.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The input could not be parsed as an address.
    #[error("Invalid address '{0}'")]
    InvalidAddress(String),

    /// Other invalid caller input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl MarketError {
    /// Create a new client initialization error.
    #[must_use]
    pub fn client_init(message: impl Into<String>) -> Self {
        Self::ClientInit(message.into())
    }

    /// Create a new invalid address error.
    #[must_use]
    pub fn invalid_address(input: impl Into<String>) -> Self {
        Self::InvalidAddress(input.into())
    }

    /// Create a new invalid input error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create an error for a non-2xx response with an unrecognized body.
    #[must_use]
    pub fn unexpected_response(status: u16, body: impl Into<String>) -> Self {
        Self::UnexpectedResponse {
            status,
            body: body.into(),
        }
    }

    /// Returns `true` if the request never produced an HTTP response.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Cancelled)
    }

    /// Returns the HTTP status code attached to this error, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotSuccessful { status } | Self::UnexpectedResponse { status, .. } => {
                Some(*status)
            }
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Convert to a `color_eyre::Report` for the command-line front end.
    #[must_use = "this converts the error into a Report for display"]
    pub fn into_report(self) -> color_eyre::Report {
        color_eyre::eyre::eyre!("{}", self)
    }
}

// ============================================================================
// Tests
// ============================================================================
