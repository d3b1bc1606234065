//! One round trip per request, with guaranteed release.
//!
//! # Design
//! `run` owns the whole transport lifecycle: execute, drain, release.
//! Taking the transport by value means a closed transport can never be
//! handed back in for a second request. Release always runs (response
//! first, then transport) and a close failure is surfaced only when the
//! call itself succeeded, so an in-flight error is never masked by
//! cleanup.
//!
//! A response that arrives without a usable status line is not an error:
//! it degrades to `HttpResult { 500, "" }`, indistinguishable from a
//! genuine upstream 500. Callers treat both identically.

use log::debug;

use crate::error::HttpError;
use crate::http::{HttpResult, Request};
use crate::transport::{Transport, TransportResponse};

/// Execute `request` over `transport` and return the drained result.
///
/// The transport is consumed: success or failure, it is released before
/// this function returns.
pub fn run<T: Transport>(mut transport: T, request: &Request) -> Result<HttpResult, HttpError> {
    let mut response: Option<Box<dyn TransportResponse>> = None;
    let outcome = perform(&mut transport, request, &mut response);
    let cleanup = release(response, &mut transport);

    match outcome {
        // An in-flight error always wins over a cleanup failure.
        Err(err) => Err(err),
        Ok(result) => {
            cleanup?;
            Ok(result)
        }
    }
}

fn perform<T: Transport>(
    transport: &mut T,
    request: &Request,
    slot: &mut Option<Box<dyn TransportResponse>>,
) -> Result<HttpResult, HttpError> {
    let response = slot.insert(transport.execute(request)?);

    match response.status() {
        Some(status) => {
            let body = response.read_body()?;
            Ok(HttpResult::new(status, body))
        }
        None => {
            // No usable status line: degrade to a fixed 500 sentinel
            // instead of raising.
            debug!("response carried no status line, degrading to 500");
            Ok(HttpResult::new(500, String::new()))
        }
    }
}

/// Close the response (if one was produced) and then the transport. Both
/// closes are attempted; the first failure is reported.
fn release<T: Transport>(
    response: Option<Box<dyn TransportResponse>>,
    transport: &mut T,
) -> Result<(), HttpError> {
    let mut failure = None;
    if let Some(mut response) = response {
        if let Err(err) = response.close() {
            failure = Some(err);
        }
    }
    if let Err(err) = transport.close() {
        failure.get_or_insert(err);
    }
    match failure {
        Some(err) => Err(HttpError::Cleanup(err)),
        None => Ok(()),
    }
}
