use std::collections::HashMap;

use axum::{
    extract::{Multipart, Path, Query},
    http::{HeaderMap, Method, StatusCode},
    routing::{get, post},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// What the server saw on a bodiless request.
#[derive(Debug, Serialize, Deserialize)]
pub struct EchoReport {
    pub method: String,
    pub headers: HashMap<String, String>,
    pub query: HashMap<String, String>,
}

/// What the server saw on a form submission.
#[derive(Debug, Serialize, Deserialize)]
pub struct FormReport {
    pub method: String,
    pub headers: HashMap<String, String>,
    pub form: HashMap<String, String>,
}

/// What the server saw on a raw-body post.
#[derive(Debug, Serialize, Deserialize)]
pub struct RawReport {
    pub method: String,
    pub content_type: String,
    pub body: String,
}

/// One multipart part, in arrival order.
#[derive(Debug, Serialize, Deserialize)]
pub struct PartReport {
    pub name: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: usize,
    pub text: Option<String>,
}

pub fn app() -> Router {
    Router::new()
        .route("/echo", get(echo).delete(echo))
        .route("/form", post(form_echo).put(form_echo))
        .route("/raw", post(raw_echo))
        .route("/upload", post(multipart_echo))
        .route("/empty", get(empty))
        .route("/status/{code}", get(fixed_status))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn echo(
    method: Method,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Json<EchoReport> {
    Json(EchoReport {
        method: method.to_string(),
        headers: header_map(&headers),
        query,
    })
}

async fn form_echo(
    method: Method,
    headers: HeaderMap,
    Form(form): Form<HashMap<String, String>>,
) -> Json<FormReport> {
    Json(FormReport {
        method: method.to_string(),
        headers: header_map(&headers),
        form,
    })
}

async fn raw_echo(method: Method, headers: HeaderMap, body: String) -> Json<RawReport> {
    let content_type = headers
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
        .to_string();
    Json(RawReport {
        method: method.to_string(),
        content_type,
        body,
    })
}

async fn multipart_echo(mut multipart: Multipart) -> Result<Json<Vec<PartReport>>, StatusCode> {
    let mut parts = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| StatusCode::BAD_REQUEST)?
    {
        let name = field.name().unwrap_or("").to_string();
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await.map_err(|_| StatusCode::BAD_REQUEST)?;
        let text = std::str::from_utf8(&bytes).ok().map(str::to_string);
        parts.push(PartReport {
            name,
            file_name,
            content_type,
            bytes: bytes.len(),
            text,
        });
    }
    Ok(Json(parts))
}

async fn empty() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn fixed_status(Path(code): Path<u16>) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_REQUEST)
}

/// Flatten a `HeaderMap` to name → value with lowercase names. Repeated
/// header names keep the last value, which is all the tests need.
fn header_map(headers: &HeaderMap) -> HashMap<String, String> {
    headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                value.to_str().unwrap_or("").to_string(),
            )
        })
        .collect()
}
