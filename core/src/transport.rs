//! Transport seam between the executor and the network.
//!
//! # Design
//! A transport is one network session, good for exactly one request.
//! `UreqTransport` is the production implementation: it builds a fresh
//! `ureq::Agent` per call so nothing is pooled or reused, applies the
//! configured timeout pair, and hands non-2xx statuses back as data. The
//! trait pair exists so the executor's drain/release logic can be
//! exercised against fault-injecting fakes without a socket.

use std::io;

use log::debug;

use crate::config::RequestConfig;
use crate::encode;
use crate::error::HttpError;
use crate::http::{Body, Method, Request};

/// One network session used to execute a single request.
pub trait Transport {
    /// Execute the request and return a response handle. Called at most
    /// once per transport.
    fn execute(&mut self, request: &Request) -> Result<Box<dyn TransportResponse>, HttpError>;

    /// Release the session. Called exactly once, after the response (if
    /// any) has been closed.
    fn close(&mut self) -> io::Result<()>;
}

/// Handle on an in-flight response.
pub trait TransportResponse {
    /// Status code from the response's status line, or `None` when the
    /// transport produced a response without a usable status line.
    fn status(&self) -> Option<u16>;

    /// Drain the entity fully into a string under fixed UTF-8 decoding.
    /// An absent entity drains to the empty string.
    fn read_body(&mut self) -> Result<String, HttpError>;

    /// Release the response. Called exactly once, before the transport is
    /// closed.
    fn close(&mut self) -> io::Result<()>;
}

/// Production transport backed by a per-call `ureq::Agent`.
pub struct UreqTransport {
    agent: Option<ureq::Agent>,
}

impl UreqTransport {
    pub fn new(config: &RequestConfig) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_connect(Some(config.connect_timeout))
            .timeout_recv_response(Some(config.response_timeout))
            .timeout_recv_body(Some(config.response_timeout))
            .build()
            .new_agent();
        Self { agent: Some(agent) }
    }
}

impl Transport for UreqTransport {
    fn execute(&mut self, request: &Request) -> Result<Box<dyn TransportResponse>, HttpError> {
        let agent = match self.agent.as_ref() {
            Some(agent) => agent,
            None => {
                let closed = io::Error::other("transport already closed");
                return Err(HttpError::Transport(ureq::Error::Io(closed)));
            }
        };

        let url = encode::append_query(&request.url, &request.query);
        let headers = encode::fold_headers(&request.headers);
        debug!("{} {url}", request.method.as_str());

        let response = match request.method {
            Method::Get => {
                let mut builder = agent.get(&url);
                for (name, value) in &headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                builder.call()?
            }
            Method::Delete => {
                let mut builder = agent.delete(&url);
                for (name, value) in &headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                builder.call()?
            }
            Method::Post | Method::Put => {
                let mut builder = if request.method == Method::Post {
                    agent.post(&url)
                } else {
                    agent.put(&url)
                };
                for (name, value) in &headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                match &request.body {
                    Body::None => builder.send_empty()?,
                    Body::Form(pairs) => {
                        let body = encode::form_urlencoded(pairs);
                        builder
                            .content_type("application/x-www-form-urlencoded; charset=UTF-8")
                            .send(body.as_bytes())?
                    }
                    Body::Json(raw) => builder.send(raw.as_bytes())?,
                    Body::Multipart { file_field, file_name, file, fields } => {
                        let boundary = encode::multipart_boundary();
                        let body =
                            encode::multipart_body(&boundary, file_field, file_name, file, fields)?;
                        builder
                            .content_type(encode::multipart_content_type(&boundary).as_str())
                            .send(&body[..])?
                    }
                }
            }
        };

        debug!("{} {url} -> {}", request.method.as_str(), response.status());
        Ok(Box::new(UreqResponse { inner: Some(response) }))
    }

    fn close(&mut self) -> io::Result<()> {
        // Dropping the agent tears down the underlying connection.
        self.agent.take();
        Ok(())
    }
}

struct UreqResponse {
    inner: Option<ureq::http::Response<ureq::Body>>,
}

impl TransportResponse for UreqResponse {
    fn status(&self) -> Option<u16> {
        self.inner.as_ref().map(|response| response.status().as_u16())
    }

    fn read_body(&mut self) -> Result<String, HttpError> {
        match self.inner.as_mut() {
            Some(response) => {
                let bytes = response.body_mut().read_to_vec()?;
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
            None => Ok(String::new()),
        }
    }

    fn close(&mut self) -> io::Result<()> {
        self.inner.take();
        Ok(())
    }
}
