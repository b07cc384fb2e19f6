//! Cart route handlers.
//!
//! The cart page and its HTMX fragments. Quantity changes swap the cart
//! items fragment in place; every mutation also fires a `cart-updated`
//! trigger so the header badge refreshes itself. The cart lives in the
//! session, and every mutation requires a signed-in user.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use toymix_core::ProductId;

use crate::error::add_breadcrumb;
use crate::filters;
use crate::middleware::RequireAuth;
use crate::models::{Cart, Toy, session_keys};
use crate::state::AppState;

use super::PageContext;

// ============================================================================
// Session helpers
// ============================================================================

/// Load the cart from the session. A missing or unreadable cart is an
/// empty cart.
pub async fn load_cart(session: &Session) -> Cart {
    session
        .get::<Cart>(session_keys::CART)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Write the cart back to the session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn save_cart(
    session: &Session,
    cart: &Cart,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CART, cart).await
}

/// Drop the cart from the session (after checkout).
pub async fn clear_cart(session: &Session) {
    if let Err(e) = session.remove::<Cart>(session_keys::CART).await {
        tracing::error!("Failed to clear cart from session: {e}");
    }
}

// ============================================================================
// Forms
// ============================================================================

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: i32,
    /// `checkout` sends the buyer straight to the checkout page (the
    /// one-click buy button on product pages).
    pub next: Option<String>,
}

/// Quantity delta form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: i32,
    pub delta: i32,
}

/// Remove line form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: i32,
}

// ============================================================================
// Templates
// ============================================================================

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub ctx: PageContext,
    pub cart: Cart,
}

/// Cart items fragment (HTMX swap target on the cart page).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: Cart,
}

/// Header cart badge fragment.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Toast fragment returned by cart mutations.
#[derive(Template, WebTemplate)]
#[template(path = "partials/toast.html")]
pub struct ToastTemplate {
    pub message: String,
    pub is_error: bool,
}

// ============================================================================
// Handlers
// ============================================================================

/// Display the cart page.
#[instrument(skip_all)]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    RequireAuth(_user): RequireAuth,
) -> CartShowTemplate {
    let ctx = PageContext::build(&state, &session).await;
    let cart = load_cart(&session).await;

    CartShowTemplate { ctx, cart }
}

/// Add a toy to the cart (HTMX).
///
/// Snapshots the toy from the catalog into the session cart. HTMX posts
/// get a toast fragment plus a `cart-updated` trigger; plain form posts
/// are redirected to the cart page, and `next=checkout` sends the buyer
/// straight to checkout.
#[instrument(skip_all, fields(product_id = form.product_id))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    RequireAuth(_user): RequireAuth,
    headers: HeaderMap,
    Form(form): Form<AddToCartForm>,
) -> Response {
    let id = ProductId::new(form.product_id);
    let Some(toy) = find_toy(&state, id).await else {
        tracing::warn!(%id, "Add to cart for unknown product");
        return if is_htmx(&headers) {
            (StatusCode::NOT_FOUND, error_toast("Mahsulot topilmadi")).into_response()
        } else {
            Redirect::to("/catalog").into_response()
        };
    };

    let name = toy.name.clone();
    let mut cart = load_cart(&session).await;
    cart.add(toy);

    if let Err(e) = save_cart(&session, &cart).await {
        tracing::error!("Failed to save cart to session: {e}");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            error_toast("Savatga qo'shishda xatolik yuz berdi"),
        )
            .into_response();
    }

    add_breadcrumb(
        "cart",
        "Added product to cart",
        Some(&[("product_id", &id.to_string())]),
    );

    if form.next.as_deref() == Some("checkout") {
        return Redirect::to("/checkout").into_response();
    }

    if is_htmx(&headers) {
        (
            AppendHeaders([("HX-Trigger", "cart-updated")]),
            ToastTemplate {
                message: format!("{name} savatga qo'shildi"),
                is_error: false,
            },
        )
            .into_response()
    } else {
        Redirect::to("/cart").into_response()
    }
}

/// Change a line quantity by a signed delta (HTMX).
///
/// A quantity that would reach zero removes the line. HTMX posts get the
/// cart items fragment the cart page swaps in; plain form posts are
/// redirected back to the cart page.
#[instrument(skip_all, fields(product_id = form.product_id, delta = form.delta))]
pub async fn update(
    session: Session,
    RequireAuth(_user): RequireAuth,
    headers: HeaderMap,
    Form(form): Form<UpdateCartForm>,
) -> Response {
    let mut cart = load_cart(&session).await;
    cart.update_quantity(ProductId::new(form.product_id), form.delta);

    if let Err(e) = save_cart(&session, &cart).await {
        tracing::error!("Failed to save cart to session: {e}");
    }

    if is_htmx(&headers) {
        (
            AppendHeaders([("HX-Trigger", "cart-updated")]),
            CartItemsTemplate { cart },
        )
            .into_response()
    } else {
        Redirect::to("/cart").into_response()
    }
}

/// Remove a line from the cart (HTMX).
#[instrument(skip_all, fields(product_id = form.product_id))]
pub async fn remove(
    session: Session,
    RequireAuth(_user): RequireAuth,
    headers: HeaderMap,
    Form(form): Form<RemoveFromCartForm>,
) -> Response {
    let mut cart = load_cart(&session).await;
    cart.remove(ProductId::new(form.product_id));

    if let Err(e) = save_cart(&session, &cart).await {
        tracing::error!("Failed to save cart to session: {e}");
    }

    if is_htmx(&headers) {
        (
            AppendHeaders([("HX-Trigger", "cart-updated")]),
            CartItemsTemplate { cart },
        )
            .into_response()
    } else {
        Redirect::to("/cart").into_response()
    }
}

/// Header cart badge fragment (HTMX).
///
/// Public: signed-out visitors simply get a zero badge.
#[instrument(skip_all)]
pub async fn count(session: Session) -> CartCountTemplate {
    let cart = load_cart(&session).await;

    CartCountTemplate {
        count: cart.item_count(),
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Whether the request came from the HTMX runtime.
fn is_htmx(headers: &HeaderMap) -> bool {
    headers.contains_key("hx-request")
}

fn error_toast(message: &str) -> ToastTemplate {
    ToastTemplate {
        message: message.to_string(),
        is_error: true,
    }
}

/// Look a toy up in the cached catalog, falling back to a direct fetch
/// for products the list has not seen yet.
async fn find_toy(state: &AppState, id: ProductId) -> Option<Toy> {
    let toys = state.bot_api().products().await;
    if let Some(toy) = toys.iter().find(|toy| toy.id == id) {
        return Some(toy.clone());
    }

    state.bot_api().product(id).await
}
