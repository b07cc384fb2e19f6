//! Route protection tests.
//!
//! Cart, checkout and account pages require a signed-in session; public
//! pages must render for anonymous visitors. Nobody is ever signed in
//! here, so every gated request must bounce without touching state.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use toymix_integration_tests::test_app;

fn get(path: &str) -> Request<Body> {
    Request::builder()
        .uri(path)
        .body(Body::empty())
        .expect("request should build")
}

fn location(response: &axum::response::Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .expect("redirect must carry a Location header")
}

// =============================================================================
// Gated pages redirect to login
// =============================================================================

#[tokio::test]
async fn cart_page_redirects_anonymous_visitors_to_login() {
    let response = test_app().oneshot(get("/cart")).await.expect("app should respond");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/auth/login?notice=cart");
}

#[tokio::test]
async fn checkout_page_redirects_anonymous_visitors_to_login() {
    let response = test_app()
        .oneshot(get("/checkout"))
        .await
        .expect("app should respond");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/auth/login?notice=cart");
}

#[tokio::test]
async fn profile_page_redirects_anonymous_visitors_to_login() {
    let response = test_app()
        .oneshot(get("/profile"))
        .await
        .expect("app should respond");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/auth/login");
}

// =============================================================================
// Add-to-cart without a session
// =============================================================================

#[tokio::test]
async fn anonymous_add_to_cart_redirects_to_login() {
    let request = Request::builder()
        .method("POST")
        .uri("/cart/add")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("product_id=1"))
        .expect("request should build");

    let response = test_app().oneshot(request).await.expect("app should respond");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/auth/login?notice=cart");
}

#[tokio::test]
async fn anonymous_htmx_add_to_cart_gets_a_full_page_redirect() {
    let request = Request::builder()
        .method("POST")
        .uri("/cart/add")
        .header("hx-request", "true")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("product_id=1"))
        .expect("request should build");

    let response = test_app().oneshot(request).await.expect("app should respond");

    // A 303 would make HTMX swap the login page into the fragment
    // target; the HX-Redirect header navigates the whole page instead.
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response
            .headers()
            .get("hx-redirect")
            .and_then(|value| value.to_str().ok()),
        Some("/auth/login?notice=cart")
    );
}

#[tokio::test]
async fn anonymous_add_to_cart_leaves_the_cart_empty() {
    let app = test_app();

    let add = Request::builder()
        .method("POST")
        .uri("/cart/add")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("product_id=1"))
        .expect("request should build");
    let response = app.clone().oneshot(add).await.expect("app should respond");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    // The badge fragment is public; a fresh session shows zero items.
    let response = app.oneshot(get("/cart/count")).await.expect("app should respond");
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("body should be readable");
    let body = String::from_utf8(body.to_vec()).expect("fragment should be UTF-8");
    assert!(body.contains(">0<"), "cart badge should show zero: {body}");
}

// =============================================================================
// Public pages stay public
// =============================================================================

#[tokio::test]
async fn public_pages_render_for_anonymous_visitors() {
    for path in ["/", "/catalog", "/blog", "/about", "/delivery", "/advisor"] {
        let response = test_app().oneshot(get(path)).await.expect("app should respond");
        assert_eq!(response.status(), StatusCode::OK, "{path} should be public");
    }
}

#[tokio::test]
async fn auth_pages_render_for_anonymous_visitors() {
    for path in ["/auth/login", "/auth/register"] {
        let response = test_app().oneshot(get(path)).await.expect("app should respond");
        assert_eq!(response.status(), StatusCode::OK, "{path} should be public");
    }
}
