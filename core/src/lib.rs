//! Uniform blocking HTTP request façade.
//!
//! # Overview
//! One entry surface for GET/POST/PUT/DELETE and multipart/JSON requests
//! with consistent timeout, header, and parameter handling. Every call
//! returns the same normalized `HttpResult { status, body }` regardless
//! of request kind, and every call opens and releases its own transport;
//! nothing is pooled or shared between calls.
//!
//! # Design
//! - `HttpClient` holds only an immutable `RequestConfig`; calls are
//!   self-contained and safe to issue from concurrent threads.
//! - Requests are plain-data `Request` values with a closed `Body` sum
//!   type, handled exhaustively by the executor.
//! - The `Transport` trait isolates the network seam so the executor's
//!   drain and release guarantees are testable with fault-injecting
//!   fakes; `UreqTransport` is the production implementation.
//! - Transport errors propagate unmodified; a response without a status
//!   line degrades to `HttpResult { 500, "" }` rather than raising.
//!
//! The `digest` module carries the unrelated MD5 helper used alongside
//! the façade for request signing.

pub mod client;
pub mod config;
pub mod digest;
pub mod encode;
pub mod error;
pub mod executor;
pub mod http;
pub mod transport;

pub use client::HttpClient;
pub use config::RequestConfig;
pub use digest::md5_hex;
pub use error::HttpError;
pub use http::{Body, HttpResult, Method, Request};
pub use transport::{Transport, TransportResponse, UreqTransport};
