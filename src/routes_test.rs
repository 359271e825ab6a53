use super::*;

use axum::body::Body;
use axum::http::Request;
use http_body_util::BodyExt;
use tower::ServiceExt;

fn test_options() -> LeptosOptions {
    LeptosOptions::builder().output_name("portal").build()
}

async fn get_page(router: Router, path: &str) -> (StatusCode, String) {
    let response = router
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

// =============================================================================
// health
// =============================================================================

#[tokio::test]
async fn healthz_returns_ok() {
    let (status, body) = get_page(health_routes(), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
}

#[tokio::test]
async fn health_router_has_no_pages() {
    let (status, _) = get_page(health_routes(), "/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// SSR pages
// =============================================================================

#[tokio::test]
async fn home_renders_inside_navbar() {
    let (status, body) = get_page(app(test_options()), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("class=\"navbar\""), "{body}");
    assert!(body.contains("class=\"home\""), "{body}");
    assert!(body.contains("id=\"root\""), "{body}");
}

#[tokio::test]
async fn login_renders_inside_navbar() {
    let (status, body) = get_page(app(test_options()), "/login").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("class=\"navbar\""), "{body}");
    assert!(body.contains("class=\"login-page\""), "{body}");
}

#[tokio::test]
async fn admin_renders_inside_navbar_while_session_pending() {
    let (status, body) = get_page(app(test_options()), "/admin").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("class=\"navbar\""), "{body}");
    assert!(body.contains("class=\"admin\""), "{body}");
    assert!(body.contains("Checking session"), "{body}");
}

#[tokio::test]
async fn undeclared_path_renders_not_found_inside_navbar() {
    let (status, body) = get_page(app(test_options()), "/nonexistent").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("class=\"navbar\""), "{body}");
    assert!(body.contains("Page not found"), "{body}");
}

// =============================================================================
// trailing slash
// =============================================================================

fn uri(raw: &str) -> Uri {
    raw.parse().unwrap()
}

#[test]
fn canonical_path_trims_trailing_slash() {
    assert_eq!(canonical_path(&uri("/admin/")).as_deref(), Some("/admin"));
    assert_eq!(canonical_path(&uri("/login//")).as_deref(), Some("/login"));
}

#[test]
fn canonical_path_keeps_query() {
    assert_eq!(canonical_path(&uri("/login/?next=/admin")).as_deref(), Some("/login?next=/admin"));
}

#[test]
fn canonical_path_leaves_canonical_paths_alone() {
    assert_eq!(canonical_path(&uri("/")), None);
    assert_eq!(canonical_path(&uri("/admin")), None);
    assert_eq!(canonical_path(&uri("/login?next=/admin/")), None);
}

#[test]
fn canonical_path_never_yields_protocol_relative_location() {
    assert_eq!(canonical_path(&uri("//evil.example/")), None);
    assert_eq!(canonical_path(&uri("///")).as_deref(), Some("/"));
}

async fn get_redirect(path: &str) -> (StatusCode, Option<String>) {
    let response = app(test_options())
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let location = response
        .headers()
        .get(axum::http::header::LOCATION)
        .map(|v| v.to_str().unwrap().to_owned());
    (response.status(), location)
}

#[tokio::test]
async fn trailing_slash_routes_redirect_to_declared_route() {
    for (path, target) in [("/admin/", "/admin"), ("/login/", "/login")] {
        let (status, location) = get_redirect(path).await;
        assert_eq!(status, StatusCode::PERMANENT_REDIRECT, "{path}");
        assert_eq!(location.as_deref(), Some(target), "{path}");
    }
}

#[tokio::test]
async fn redirected_targets_render_with_ok_status() {
    for path in ["/admin", "/login"] {
        let (status, body) = get_page(app(test_options()), path).await;
        assert_eq!(status, StatusCode::OK, "{path}");
        assert!(body.contains("class=\"navbar\""), "{path}");
    }
}

#[tokio::test]
async fn trailing_slash_redirect_preserves_login_next() {
    let (status, location) = get_redirect("/login/?next=/admin").await;
    assert_eq!(status, StatusCode::PERMANENT_REDIRECT);
    assert_eq!(location.as_deref(), Some("/login?next=/admin"));
}
