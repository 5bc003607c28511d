use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::util::ServiceExt;

use super::*;

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn healthz_returns_ok() {
    let dir = tempfile::tempdir().unwrap();
    let resp = base_routes(dir.path()).oneshot(get_request("/healthz")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn root_redirects_to_home_page() {
    let dir = tempfile::tempdir().unwrap();
    let resp = base_routes(dir.path()).oneshot(get_request("/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/index.html");
}

#[tokio::test]
async fn static_pages_are_served_from_static_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>home</h1>").unwrap();

    let resp = base_routes(dir.path()).oneshot(get_request("/index.html")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn missing_static_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let resp = base_routes(dir.path()).oneshot(get_request("/cart.html")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
