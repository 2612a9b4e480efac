//! Error types for the product API client.
//!
//! # Design
//! Failures fall into exactly two kinds: nothing came back from the server
//! (`ClientSide`), or something did and it was an error status or an
//! unreadable body (`ServerSide`). The gateway flattens either kind into one
//! message string; callers only ever see `GatewayError`.

use std::error::Error as StdError;

use thiserror::Error;

use crate::http::status_text;

/// Structured failure produced while building a request, exchanging it, or
/// parsing the response.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No HTTP response was received. Carries the client error text.
    #[error("{0}")]
    ClientSide(String),

    /// A response was received but could not be used. `detail` is `None` for
    /// a non-2xx status and holds the parser message for a malformed body.
    #[error("HTTP {status} {status_text}")]
    ServerSide {
        status: u16,
        status_text: String,
        detail: Option<String>,
    },
}

impl ApiError {
    /// Render the single human-readable message surfaced to callers.
    pub fn into_message(self, url: &str) -> String {
        match self {
            ApiError::ClientSide(message) => format!("Error: {message}"),
            ApiError::ServerSide {
                status,
                status_text,
                detail: None,
            } => format!(
                "Error Code: {status}\nMessage: Http failure response for {url}: {status} {status_text}"
            ),
            ApiError::ServerSide {
                status,
                detail: Some(detail),
                ..
            } => format!("Error Code: {status}\nMessage: Http failure during parsing for {url}: {detail}"),
        }
    }
}

/// Failure reported by an `HttpTransport`.
#[derive(Debug, Error)]
pub enum TransportError {
    /// No HTTP response was received. Carries the client error text.
    #[error("{0}")]
    NoResponse(String),

    /// The status line arrived but the body could not be read.
    #[error("failed to read response body: {message}")]
    Body { status: u16, message: String },
}

impl TransportError {
    pub fn no_response(err: &(dyn StdError + 'static)) -> Self {
        TransportError::NoResponse(error_chain(err))
    }

    pub fn body(status: u16, err: &(dyn StdError + 'static)) -> Self {
        TransportError::Body {
            status,
            message: error_chain(err),
        }
    }
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::NoResponse(message) => ApiError::ClientSide(message),
            TransportError::Body { status, message } => ApiError::ServerSide {
                status,
                status_text: status_text(status).to_string(),
                detail: Some(message),
            },
        }
    }
}

/// Join an error and its `source()` chain into one line, skipping causes
/// whose text the outer message already repeats.
pub fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

/// Failure value of every `ProductGateway` operation: the normalized message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct GatewayError(String);

impl GatewayError {
    pub(crate) fn new(message: String) -> Self {
        Self(message)
    }

    pub fn message(&self) -> &str {
        &self.0
    }

    pub fn into_message(self) -> String {
        self.0
    }
}

/// Invalid environment configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a whole number of seconds, got {value:?}")]
    InvalidTimeout { var: &'static str, value: String },
}
