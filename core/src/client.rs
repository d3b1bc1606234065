//! Public request API: the verb-shaped entry points.
//!
//! # Design
//! `HttpClient` holds only the immutable timeout configuration and
//! carries no mutable state between calls. Each entry point builds a
//! plain-data `Request`, opens a fresh transport, and hands both to the
//! executor; nothing is shared or reused across calls. The `build_*`
//! helpers are separate from execution so request construction can be
//! asserted on without a network in the loop.
//!
//! Optional header/parameter mappings keep each verb to one signature:
//! pass `None` for whatever a call does not need.

use std::collections::HashMap;

use crate::config::RequestConfig;
use crate::encode;
use crate::error::HttpError;
use crate::executor;
use crate::http::{Body, HttpResult, Method, Request};
use crate::transport::UreqTransport;

/// Content type forced onto every JSON post, overwriting any
/// caller-supplied value.
const JSON_CONTENT_TYPE: &str = "application/json;charset=UTF-8";

/// Synchronous, blocking HTTP client with fixed per-client timeouts.
///
/// Every call opens its own transport and closes it before returning;
/// concurrent callers share nothing mutable.
#[derive(Debug, Clone)]
pub struct HttpClient {
    config: RequestConfig,
}

impl HttpClient {
    /// A client with the fixed default timeouts (6000 ms connect,
    /// 6000 ms response).
    pub fn new() -> Self {
        Self { config: RequestConfig::default() }
    }

    pub fn with_config(config: RequestConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RequestConfig {
        &self.config
    }

    /// GET with optional headers and query parameters.
    pub fn get(
        &self,
        url: &str,
        headers: Option<&HashMap<String, String>>,
        params: Option<&HashMap<String, String>>,
    ) -> Result<HttpResult, HttpError> {
        self.execute(build_get(url, headers, params))
    }

    /// POST with optional headers and a URL-encoded form body.
    pub fn post(
        &self,
        url: &str,
        headers: Option<&HashMap<String, String>>,
        params: Option<&HashMap<String, String>>,
    ) -> Result<HttpResult, HttpError> {
        self.execute(build_post(url, headers, params))
    }

    /// PUT with an optional URL-encoded form body.
    pub fn put(
        &self,
        url: &str,
        params: Option<&HashMap<String, String>>,
    ) -> Result<HttpResult, HttpError> {
        self.execute(build_put(url, params))
    }

    /// Plain DELETE, no headers, no body.
    pub fn delete(&self, url: &str) -> Result<HttpResult, HttpError> {
        self.execute(build_delete(url))
    }

    /// DELETE tunneled through POST: injects `_method=delete` into the
    /// supplied (or freshly created) parameter mapping and posts it as a
    /// form body. A deliberate verb-tunneling convention, not a true
    /// HTTP DELETE.
    pub fn delete_with_params(
        &self,
        url: &str,
        params: Option<&HashMap<String, String>>,
    ) -> Result<HttpResult, HttpError> {
        let mut form = params.cloned().unwrap_or_default();
        form.insert("_method".to_string(), "delete".to_string());
        self.post(url, None, Some(&form))
    }

    /// Multipart POST: one binary file part first, then one text part per
    /// form field.
    pub fn post_multipart(
        &self,
        url: &str,
        headers: Option<&HashMap<String, String>>,
        file: &[u8],
        file_name: &str,
        file_field: &str,
        form_fields: Option<&HashMap<String, String>>,
    ) -> Result<HttpResult, HttpError> {
        self.execute(build_post_multipart(url, headers, file, file_name, file_field, form_fields))
    }

    /// POST a raw JSON string. The `Content-Type` header is force-set to
    /// `application/json;charset=UTF-8` regardless of any caller-supplied
    /// value.
    pub fn post_json(
        &self,
        url: &str,
        headers: Option<&HashMap<String, String>>,
        json: &str,
    ) -> Result<HttpResult, HttpError> {
        self.execute(build_post_json(url, headers, json))
    }

    fn execute(&self, request: Request) -> Result<HttpResult, HttpError> {
        let transport = UreqTransport::new(&self.config);
        executor::run(transport, &request)
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

fn build_get(
    url: &str,
    headers: Option<&HashMap<String, String>>,
    params: Option<&HashMap<String, String>>,
) -> Request {
    Request {
        method: Method::Get,
        url: url.to_string(),
        headers: to_pairs(headers),
        query: to_pairs(params),
        body: Body::None,
    }
}

fn build_post(
    url: &str,
    headers: Option<&HashMap<String, String>>,
    params: Option<&HashMap<String, String>>,
) -> Request {
    Request {
        method: Method::Post,
        url: url.to_string(),
        headers: to_pairs(headers),
        query: Vec::new(),
        body: form_body(params),
    }
}

fn build_put(url: &str, params: Option<&HashMap<String, String>>) -> Request {
    Request {
        method: Method::Put,
        url: url.to_string(),
        headers: Vec::new(),
        query: Vec::new(),
        body: form_body(params),
    }
}

fn build_delete(url: &str) -> Request {
    Request {
        method: Method::Delete,
        url: url.to_string(),
        headers: Vec::new(),
        query: Vec::new(),
        body: Body::None,
    }
}

fn build_post_multipart(
    url: &str,
    headers: Option<&HashMap<String, String>>,
    file: &[u8],
    file_name: &str,
    file_field: &str,
    form_fields: Option<&HashMap<String, String>>,
) -> Request {
    Request {
        method: Method::Post,
        url: url.to_string(),
        headers: to_pairs(headers),
        query: Vec::new(),
        body: Body::Multipart {
            file_field: file_field.to_string(),
            file_name: file_name.to_string(),
            file: file.to_vec(),
            fields: to_pairs(form_fields),
        },
    }
}

fn build_post_json(url: &str, headers: Option<&HashMap<String, String>>, json: &str) -> Request {
    let mut headers = to_pairs(headers);
    encode::set_header(&mut headers, "Content-Type", JSON_CONTENT_TYPE);
    Request {
        method: Method::Post,
        url: url.to_string(),
        headers,
        query: Vec::new(),
        body: Body::Json(json.to_string()),
    }
}

/// An absent parameter mapping means no body at all; a supplied mapping
/// becomes a form body even when empty.
fn form_body(params: Option<&HashMap<String, String>>) -> Body {
    match params {
        Some(map) => Body::Form(map.iter().map(|(k, v)| (k.clone(), v.clone())).collect()),
        None => Body::None,
    }
}

fn to_pairs(map: Option<&HashMap<String, String>>) -> Vec<(String, String)> {
    map.map(|m| m.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
        .unwrap_or_default()
}
