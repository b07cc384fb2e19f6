//! Public page rendering over fallback data.
//!
//! With every upstream unreachable, the storefront must still serve a
//! complete site from its built-in catalog and content defaults.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use toymix_integration_tests::test_app;

async fn get_page(path: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .uri(path)
        .body(Body::empty())
        .expect("request should build");
    let response = test_app().oneshot(request).await.expect("app should respond");

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body should be readable");
    (status, String::from_utf8(body.to_vec()).expect("page should be UTF-8"))
}

#[tokio::test]
async fn home_page_shows_the_fallback_catalog() {
    let (status, body) = get_page("/").await;

    assert_eq!(status, StatusCode::OK);
    // Trending products come from the fallback catalog when the API is down.
    assert!(body.contains("Magnitli Konstruktor"), "home page missing trending toys");
}

#[tokio::test]
async fn htmx_runtime_is_pinned_and_allowed_by_csp() {
    let request = Request::builder()
        .uri("/")
        .body(Body::empty())
        .expect("request should build");
    let response = test_app().oneshot(request).await.expect("app should respond");

    assert_eq!(response.status(), StatusCode::OK);
    let csp = response
        .headers()
        .get("content-security-policy")
        .and_then(|v| v.to_str().ok())
        .expect("CSP header should be present")
        .to_owned();
    assert!(
        csp.contains("script-src 'self' https://unpkg.com/htmx.org@2.0.4"),
        "CSP must allow the pinned htmx script"
    );

    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body should be readable");
    let page = String::from_utf8(body.to_vec()).expect("page should be UTF-8");
    assert!(page.contains(r#"src="https://unpkg.com/htmx.org@2.0.4""#));
    assert!(page.contains("integrity=\"sha384-"), "htmx script must carry an SRI hash");
}

#[tokio::test]
async fn header_cart_badge_marks_an_empty_cart() {
    let (status, body) = get_page("/").await;

    assert_eq!(status, StatusCode::OK);
    // Anonymous visitors start with an empty cart, so the header badge
    // renders with the muted modifier and a zero count.
    assert!(body.contains("cart-button__badge--empty"));
    assert!(body.contains(r#"id="cart-count""#));
}

#[tokio::test]
async fn catalog_search_filters_by_name() {
    let (status, body) = get_page("/catalog?q=ayiqcha").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Gapiradigan Ayiqcha Teddy"));
    assert!(
        !body.contains("Magnitli Konstruktor"),
        "search result leaked a non-matching toy"
    );
}

#[tokio::test]
async fn catalog_category_filter_narrows_the_grid() {
    let (status, body) = get_page("/catalog?category=soft").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Gapiradigan Ayiqcha Teddy"));
    assert!(!body.contains("Lego City"), "category filter leaked another category");
}

#[tokio::test]
async fn product_detail_renders_from_the_fallback_catalog() {
    let (status, body) = get_page("/products/1").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Magnitli Konstruktor"));
}

#[tokio::test]
async fn unknown_product_renders_the_404_page() {
    let (status, _body) = get_page("/products/99999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_route_renders_the_404_page() {
    let (status, body) = get_page("/no-such-page").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("topilmadi"), "404 page should be in Uzbek");
}

#[tokio::test]
async fn blog_index_shows_the_default_posts() {
    let (status, body) = get_page("/blog").await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body.is_empty());
}

#[tokio::test]
async fn content_pages_render_the_defaults() {
    let (status, body) = get_page("/about").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.is_empty());

    let (status, body) = get_page("/delivery").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.is_empty());
}
