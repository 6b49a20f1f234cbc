//! Error types for lookup operations

use thiserror::Error;

/// Errors that can occur during a CEP lookup
///
/// Attempt-level failures (`Transport`, `Decode`, `HttpStatus`) are always
/// recovered into an [`AttemptReport`](crate::lookup::AttemptReport); they
/// never abort the sibling attempt or the process.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The shared deadline elapsed before a usable result
    #[error("deadline exceeded")]
    DeadlineExceeded,

    /// The outbound call could not be completed (DNS, connection, TLS)
    #[error("transport failure: {0}")]
    Transport(String),

    /// The response body did not parse into the provider's record
    #[error("decode failure: {0}")]
    Decode(String),

    /// Non-2xx HTTP status, reported only in strict-status mode
    #[error("unexpected HTTP status {0}")]
    HttpStatus(u16),

    /// Invalid configuration provided
    #[error("invalid configuration: {0}")]
    Config(String),

    /// HTTP client construction failed
    #[error("failed to build HTTP client: {0}")]
    Client(String),
}
