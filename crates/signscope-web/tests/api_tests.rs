//! Router tests driven through `tower::ServiceExt::oneshot`.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use signscope_web::config::ServerConfig;
use signscope_web::server::build_app;
use tower::ServiceExt;

const BOUNDARY: &str = "signscope-test-boundary";

fn test_config(dir: &tempfile::TempDir) -> ServerConfig {
    ServerConfig {
        // Nothing listens here; provisioning fails fast.
        model_url: "http://127.0.0.1:9/model.safetensors".to_string(),
        model_path: dir.path().join("model.safetensors"),
        download_timeout_secs: 2,
        ..ServerConfig::default()
    }
}

fn multipart_request(field_name: &str, payload: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{field_name}\"; filename=\"sign.png\"\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: image/png\r\n\r\n");
    body.extend_from_slice(payload);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri("/api/predict")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_is_ok() {
    let dir = tempfile::tempdir().unwrap();
    let app = build_app(test_config(&dir));

    let response = app
        .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["status"], "ok");
}

#[tokio::test]
async fn labels_exposes_the_full_table() {
    let dir = tempfile::tempdir().unwrap();
    let app = build_app(test_config(&dir));

    let response = app
        .oneshot(Request::get("/api/labels").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["count"], 43);
    assert_eq!(body["labels"].as_array().unwrap().len(), 43);
    assert_eq!(body["labels"][14], "Stop");
}

#[tokio::test]
async fn model_status_reports_missing_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let app = build_app(test_config(&dir));

    let response = app
        .oneshot(Request::get("/api/model").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["present"], false);
    assert_eq!(body["loaded"], false);
}

#[tokio::test]
async fn index_serves_the_upload_page() {
    let dir = tempfile::tempdir().unwrap();
    let app = build_app(test_config(&dir));

    let response = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let page = String::from_utf8_lossy(&bytes);
    assert!(page.contains("Signscope"));
    assert!(page.contains("/api/predict"));
}

#[tokio::test]
async fn predict_without_image_field_is_bad_request() {
    let dir = tempfile::tempdir().unwrap();
    let app = build_app(test_config(&dir));

    let response = app
        .oneshot(multipart_request("attachment", b"some bytes"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(body["error"].as_str().unwrap().contains("image"));
}

#[tokio::test]
async fn predict_with_unreachable_model_source_is_service_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let app = build_app(test_config(&dir));

    let response = app
        .oneshot(multipart_request("image", b"pretend png bytes"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = json_body(response).await;
    assert!(body["error"].as_str().unwrap().contains("download error"));
}
