//! Timeout configuration applied to every request.
//!
//! # Design
//! One timeout pair covers every request: set once when the client is
//! built, never mutated afterwards. Rather than hiding that in a global,
//! the pair is an explicit immutable value owned by the `HttpClient` and
//! handed to the transport at call time. `Default` is the fixed 6000 ms
//! pair.

use std::time::Duration;

/// Connect timeout applied when opening a transport.
pub const CONNECT_TIMEOUT: Duration = Duration::from_millis(6000);

/// Timeout waiting for the response after the request is sent.
pub const RESPONSE_TIMEOUT: Duration = Duration::from_millis(6000);

/// Immutable per-client request configuration.
///
/// There is no per-request override; every call through a client uses
/// the same pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestConfig {
    pub connect_timeout: Duration,
    pub response_timeout: Duration,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            connect_timeout: CONNECT_TIMEOUT,
            response_timeout: RESPONSE_TIMEOUT,
        }
    }
}
