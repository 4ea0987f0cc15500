//! Common error types for the probes.

use miette::Diagnostic;
use thiserror::Error;

/// Result type alias using [`ProbeError`].
pub type ProbeResult<T> = Result<T, ProbeError>;

/// Errors a probe can hit between building its request and evaluating the reply.
#[derive(Error, Diagnostic, Debug)]
pub enum ProbeError {
    /// The server answered with a non-success HTTP status.
    #[error("HTTP {status} from {url}")]
    #[diagnostic(code(probe::transport::status))]
    HttpStatus {
        /// The requested URL.
        url: String,
        /// The HTTP status code returned.
        status: u16,
    },

    /// The request never got a response (DNS, refused connection, timeout).
    #[error("Connection to {url} failed: {message}")]
    #[diagnostic(
        code(probe::transport::connection),
        help("Check the Foreman hostname, port and --ssl setting")
    )]
    Connection {
        /// The requested URL.
        url: String,
        /// The underlying transport error.
        message: String,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("Invalid response: {message}")]
    #[diagnostic(code(probe::response::invalid))]
    InvalidResponse {
        /// The error message.
        message: String,
    },

    /// A field the check depends on is missing from the response.
    #[error("Missing field in response: {field}")]
    #[diagnostic(code(probe::response::missing_field))]
    MissingField {
        /// Dotted path of the missing field.
        field: String,
    },

    /// A report timestamp did not match `YYYY-MM-DDTHH:MM:SS<zone>`.
    #[error("Invalid report timestamp: {value}")]
    #[diagnostic(
        code(probe::response::timestamp),
        help("Foreman reports timestamps as UTC, e.g. 2012-02-20T22:06:12Z")
    )]
    InvalidTimestamp {
        /// The rejected value.
        value: String,
    },

    /// Configuration error.
    #[error("Configuration error: {message}")]
    #[diagnostic(code(probe::config))]
    Config {
        /// The error message.
        message: String,
    },
}

impl ProbeError {
    /// Whether the error happened on the wire rather than in the payload.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::HttpStatus { .. } | Self::Connection { .. })
    }
}

impl From<serde_json::Error> for ProbeError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidResponse {
            message: err.to_string(),
        }
    }
}
