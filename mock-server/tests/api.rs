use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, EchoReport, FormReport, PartReport, RawReport};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

// --- echo ---

#[tokio::test]
async fn echo_reports_method_headers_and_query() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/echo?q=rust%20http&page=2")
                .header("x-probe", "sentinel")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let report: EchoReport = body_json(resp).await;
    assert_eq!(report.method, "GET");
    assert_eq!(report.headers.get("x-probe").map(String::as_str), Some("sentinel"));
    assert_eq!(report.query.get("q").map(String::as_str), Some("rust http"));
    assert_eq!(report.query.get("page").map(String::as_str), Some("2"));
}

#[tokio::test]
async fn echo_answers_delete() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/echo")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let report: EchoReport = body_json(resp).await;
    assert_eq!(report.method, "DELETE");
}

// --- form ---

#[tokio::test]
async fn form_echo_parses_urlencoded_body() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/form")
                .header(
                    http::header::CONTENT_TYPE,
                    "application/x-www-form-urlencoded; charset=UTF-8",
                )
                .body("name=ada&role=engineer".to_string())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let report: FormReport = body_json(resp).await;
    assert_eq!(report.method, "POST");
    assert_eq!(report.form.get("name").map(String::as_str), Some("ada"));
    assert_eq!(report.form.get("role").map(String::as_str), Some("engineer"));
}

#[tokio::test]
async fn form_echo_accepts_put() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/form")
                .header(http::header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body("k=v".to_string())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let report: FormReport = body_json(resp).await;
    assert_eq!(report.method, "PUT");
    assert_eq!(report.form.get("k").map(String::as_str), Some("v"));
}

// --- raw ---

#[tokio::test]
async fn raw_echo_reports_content_type_and_body() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/raw")
                .header(http::header::CONTENT_TYPE, "application/json;charset=UTF-8")
                .body(r#"{"a":1}"#.to_string())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let report: RawReport = body_json(resp).await;
    assert_eq!(report.content_type, "application/json;charset=UTF-8");
    assert_eq!(report.body, r#"{"a":1}"#);
}

// --- multipart ---

#[tokio::test]
async fn multipart_echo_reports_parts_in_order() {
    let boundary = "TESTBOUNDARY";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"upload\"; filename=\"doc.bin\"\r\n\
         Content-Type: application/octet-stream\r\n\r\n\
         \x01\x02\x03\r\n\
         --{boundary}\r\n\
         Content-Disposition: form-data; name=\"title\"\r\n\
         Content-Type: text/plain; charset=utf-8\r\n\r\n\
         quarterly\r\n\
         --{boundary}--\r\n"
    );
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/upload")
                .header(
                    http::header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={boundary}"),
                )
                .body(body)
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let parts: Vec<PartReport> = body_json(resp).await;
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0].name, "upload");
    assert_eq!(parts[0].file_name.as_deref(), Some("doc.bin"));
    assert_eq!(parts[0].content_type.as_deref(), Some("application/octet-stream"));
    assert_eq!(parts[0].bytes, 3);
    assert_eq!(parts[1].name, "title");
    assert_eq!(parts[1].text.as_deref(), Some("quarterly"));
}

// --- empty and status ---

#[tokio::test]
async fn empty_returns_204_with_no_body() {
    let resp = app()
        .oneshot(Request::builder().uri("/empty").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let bytes = body_bytes(resp).await;
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn fixed_status_passes_code_through() {
    let resp = app()
        .oneshot(Request::builder().uri("/status/503").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}
