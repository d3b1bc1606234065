//! Error types for the request façade.
//!
//! # Design
//! The façade is a fail-fast pass-through: transport failures keep their
//! original `ureq::Error` inside a single `Transport` variant rather than
//! being translated into a parallel taxonomy. `is_timeout` answers the one
//! question callers routinely ask without unwrapping the source error.

use std::fmt;
use std::io;

/// Errors surfaced by the façade.
#[derive(Debug)]
pub enum HttpError {
    /// The transport failed before a usable response was produced:
    /// connection refusal, DNS failure, malformed URL, or an elapsed
    /// connect/response timeout. The underlying error is propagated
    /// unmodified.
    Transport(ureq::Error),

    /// A request body could not be framed for the wire (multipart part
    /// names or filenames containing control characters).
    Encoding(String),

    /// Releasing the response or transport failed after the call itself
    /// succeeded. Never raised while another error is already propagating.
    Cleanup(io::Error),
}

impl HttpError {
    /// True when the underlying failure was a connect or response timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, HttpError::Transport(ureq::Error::Timeout(_)))
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpError::Transport(err) => write!(f, "transport failed: {err}"),
            HttpError::Encoding(msg) => write!(f, "body encoding failed: {msg}"),
            HttpError::Cleanup(err) => write!(f, "resource release failed: {err}"),
        }
    }
}

impl std::error::Error for HttpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HttpError::Transport(err) => Some(err),
            HttpError::Cleanup(err) => Some(err),
            HttpError::Encoding(_) => None,
        }
    }
}

impl From<ureq::Error> for HttpError {
    fn from(err: ureq::Error) -> Self {
        HttpError::Transport(err)
    }
}
