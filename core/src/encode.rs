//! Header, parameter, and body encoding.
//!
//! # Design
//! Everything here turns caller-supplied pairs into wire-ready pieces of
//! a request: a folded header list, a percent-encoded query string, an
//! `application/x-www-form-urlencoded` body, or a multipart body. The
//! functions are pure so they can be asserted on byte-for-byte without a
//! transport in the loop.

use uuid::Uuid;

use crate::error::HttpError;

/// Set `name` to `value` in a header list, replacing an existing entry
/// whose key matches case-insensitively. The first-seen spelling and
/// position of the key are kept; only the value changes.
pub fn set_header(headers: &mut Vec<(String, String)>, name: &str, value: &str) {
    match headers.iter_mut().find(|(key, _)| key.eq_ignore_ascii_case(name)) {
        Some((_, existing)) => *existing = value.to_string(),
        None => headers.push((name.to_string(), value.to_string())),
    }
}

/// Fold a header list so every key appears exactly once, last value
/// winning under case-insensitive duplicates.
pub fn fold_headers(headers: &[(String, String)]) -> Vec<(String, String)> {
    let mut folded = Vec::with_capacity(headers.len());
    for (name, value) in headers {
        set_header(&mut folded, name, value);
    }
    folded
}

/// Append `params` to `url` as a percent-encoded query string. Returns
/// the URL unchanged when there are no parameters; appends with `&` when
/// the URL already carries a query.
pub fn append_query(url: &str, params: &[(String, String)]) -> String {
    if params.is_empty() {
        return url.to_string();
    }
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}{}", pair_encode(params))
}

/// Serialize pairs as an `application/x-www-form-urlencoded` body.
pub fn form_urlencoded(params: &[(String, String)]) -> String {
    pair_encode(params)
}

fn pair_encode(params: &[(String, String)]) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// A fresh boundary for one multipart body.
pub fn multipart_boundary() -> String {
    format!("----unihttp-{}", Uuid::new_v4().simple())
}

/// The `Content-Type` header value announcing `boundary`.
pub fn multipart_content_type(boundary: &str) -> String {
    format!("multipart/form-data; boundary={boundary}")
}

/// Build a multipart body: the binary file part first, then one
/// `text/plain` part per form field, in field order.
///
/// Part names and filenames are embedded in framing headers and must not
/// contain CR, LF, or `"`; offending input fails with
/// [`HttpError::Encoding`]. Part values are raw payload and carry no such
/// restriction.
pub fn multipart_body(
    boundary: &str,
    file_field: &str,
    file_name: &str,
    file: &[u8],
    fields: &[(String, String)],
) -> Result<Vec<u8>, HttpError> {
    frame_token(file_field)?;
    frame_token(file_name)?;

    let mut body = Vec::with_capacity(file.len() + 256);
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"{file_field}\"; filename=\"{file_name}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(file);
    body.extend_from_slice(b"\r\n");

    for (name, value) in fields {
        frame_token(name)?;
        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"\r\n").as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: text/plain; charset=utf-8\r\n\r\n");
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());
    Ok(body)
}

/// Reject tokens that would break out of a framing header.
fn frame_token(token: &str) -> Result<(), HttpError> {
    if token.contains(['\r', '\n', '"']) {
        return Err(HttpError::Encoding(format!(
            "multipart name {token:?} contains framing characters"
        )));
    }
    Ok(())
}
