//! HTTP tests for the documentation server router.

use std::fs;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tempfile::TempDir;
use teamified::docs::router;
use tower::ServiceExt;

fn site() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("docs")).unwrap();
    fs::create_dir_all(root.join("template-setup/config")).unwrap();
    fs::create_dir_all(root.join("assets/img")).unwrap();
    fs::write(root.join("docs/guide.md"), "# Guide\n").unwrap();
    fs::write(
        root.join("template-setup/config/setup-config.yml"),
        "tools: {}\n",
    )
    .unwrap();
    fs::write(root.join("assets/site.css"), "body { margin: 0; }\n").unwrap();
    fs::write(root.join("secret.txt"), "do not serve through docs\n").unwrap();
    temp
}

async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, String::from_utf8_lossy(&body).into_owned())
}

#[tokio::test]
async fn structure_returns_exact_body() {
    let temp = site();
    let (status, content_type, body) = get(router(temp.path()), "/api/structure").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(
        body,
        r#"{"name": "ats-teamified", "type": "template", "description": "Repository template for development environment setup"}"#
    );
}

#[tokio::test]
async fn root_and_index_serve_landing_page() {
    let temp = site();
    for uri in ["/", "/index.html"] {
        let (status, content_type, body) = get(router(temp.path()), uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(content_type.as_deref(), Some("text/html"), "{uri}");
        assert!(body.contains("ATS Teamified"), "{uri}");
    }
}

#[tokio::test]
async fn docs_file_is_served_as_plain_text() {
    let temp = site();
    let (status, content_type, body) = get(router(temp.path()), "/docs/guide.md").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("text/plain"));
    assert_eq!(body, "# Guide\n");
}

#[tokio::test]
async fn missing_docs_file_is_not_found() {
    let temp = site();
    let (status, _, body) = get(router(temp.path()), "/docs/nonexistent.md").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "File not found");
}

#[tokio::test]
async fn template_setup_file_is_served() {
    let temp = site();
    let (status, content_type, body) = get(
        router(temp.path()),
        "/template-setup/config/setup-config.yml",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("text/plain"));
    assert_eq!(body, "tools: {}\n");
}

#[tokio::test]
async fn traversal_out_of_docs_is_rejected() {
    let temp = site();
    for uri in ["/docs/../secret.txt", "/docs/%2e%2e/secret.txt"] {
        let (status, _, body) = get(router(temp.path()), uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert!(!body.contains("do not serve"), "{uri}");
    }
}

#[tokio::test]
async fn other_paths_fall_back_to_static_files() {
    let temp = site();
    let (status, content_type, body) = get(router(temp.path()), "/assets/site.css").await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/css"));
    assert_eq!(body, "body { margin: 0; }\n");
}

#[tokio::test]
async fn directory_without_index_is_listed() {
    let temp = site();
    let (status, content_type, body) = get(router(temp.path()), "/assets/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/html"));
    assert!(body.contains("Directory listing for /assets/"));
    assert!(body.contains("<a href=\"img/\">img/</a>"));
    assert!(body.contains("<a href=\"site.css\">site.css</a>"));
}

#[tokio::test]
async fn directory_with_index_serves_it() {
    let temp = site();
    fs::write(temp.path().join("assets/index.html"), "<p>assets</p>").unwrap();
    let (status, _, body) = get(router(temp.path()), "/assets/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "<p>assets</p>");
}

#[tokio::test]
async fn unknown_static_path_is_not_found() {
    let temp = site();
    let (status, _, _) = get(router(temp.path()), "/missing.html").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
