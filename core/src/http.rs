//! Request and result types for the façade.
//!
//! # Design
//! A request is described as plain data before anything touches the
//! network: a method, a target URL, header and query pairs, and exactly
//! one body variant. The executor consumes the descriptor with an
//! exhaustive match, so adding a body kind is a compile-time-checked
//! change rather than a new overload.
//!
//! All fields use owned types (`String`, `Vec`) so descriptors can be
//! built, logged, and asserted on without lifetime concerns.

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// The body carried by a request. Exactly one variant per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// No entity at all (GET, DELETE, bodiless POST/PUT).
    None,

    /// `application/x-www-form-urlencoded` pairs, serialized by the encoder.
    Form(Vec<(String, String)>),

    /// A caller-supplied raw JSON string sent verbatim.
    Json(String),

    /// One binary file part followed by zero or more text parts.
    Multipart {
        file_field: String,
        file_name: String,
        file: Vec<u8>,
        fields: Vec<(String, String)>,
    },
}

/// An HTTP request described as plain data.
///
/// Built by the `client` module, executed once by the `executor`, and
/// never mutated after construction.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
    pub body: Body,
}

/// The uniform outcome of every request kind: a status code and the
/// response entity drained into a string. `body` is empty when the
/// response carried no entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResult {
    pub status: u16,
    pub body: String,
}

impl HttpResult {
    pub fn new(status: u16, body: String) -> Self {
        Self { status, body }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_names_match_wire_form() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Post.as_str(), "POST");
        assert_eq!(Method::Put.as_str(), "PUT");
        assert_eq!(Method::Delete.as_str(), "DELETE");
    }

    #[test]
    fn result_holds_status_and_body() {
        let result = HttpResult::new(204, String::new());
        assert_eq!(result.status, 204);
        assert!(result.body.is_empty());
    }
}
