//! Checkout route handlers.
//!
//! Orders are not persisted anywhere: the confirmation page shows an
//! order number and the structured order log is what the operator works
//! from when calling the buyer back.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::{info, instrument};

use toymix_core::Price;

use crate::error::add_breadcrumb;
use crate::filters;
use crate::middleware::RequireAuth;
use crate::models::Cart;
use crate::state::AppState;

use super::PageContext;
use super::cart::{clear_cart, load_cart};

/// Delivery fee below the free-delivery threshold.
const DELIVERY_FEE: Price = Price::new(25_000);

#[derive(Debug, Deserialize)]
pub struct CheckoutPageQuery {
    error: Option<String>,
}

/// Checkout form fields.
#[derive(Debug, Deserialize)]
pub struct CheckoutForm {
    full_name: String,
    phone: String,
    city: String,
    address: String,
    #[serde(default)]
    notes: String,
    payment_method: String,
}

/// Checkout form page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/show.html")]
pub struct CheckoutTemplate {
    pub ctx: PageContext,
    pub cart: Cart,
    pub delivery_fee: Price,
    pub total: Price,
    pub error: Option<&'static str>,
}

/// Empty-cart checkout page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/empty.html")]
pub struct CheckoutEmptyTemplate {
    pub ctx: PageContext,
}

/// Order confirmation page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/confirmation.html")]
pub struct ConfirmationTemplate {
    pub ctx: PageContext,
    pub order_number: String,
}

/// Display the checkout form, or the empty-cart page.
#[instrument(skip_all)]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    RequireAuth(_user): RequireAuth,
    Query(query): Query<CheckoutPageQuery>,
) -> Response {
    let cart = load_cart(&session).await;
    let ctx = PageContext::build(&state, &session).await;

    if cart.is_empty() {
        return CheckoutEmptyTemplate { ctx }.into_response();
    }

    let fee = delivery_fee(cart.subtotal(), ctx.settings.free_delivery_threshold);
    let total = cart.subtotal().saturating_add(fee);
    let error = match query.error.as_deref() {
        Some("missing") => Some("Iltimos, barcha majburiy maydonlarni to'ldiring"),
        _ => None,
    };

    CheckoutTemplate {
        ctx,
        cart,
        delivery_fee: fee,
        total,
        error,
    }
    .into_response()
}

/// Place the order: log it for the operator, clear the cart, render the
/// confirmation page.
#[instrument(skip_all)]
pub async fn submit(
    State(state): State<AppState>,
    session: Session,
    RequireAuth(user): RequireAuth,
    Form(form): Form<CheckoutForm>,
) -> Response {
    let cart = load_cart(&session).await;
    if cart.is_empty() {
        return Redirect::to("/checkout").into_response();
    }

    if form.full_name.trim().is_empty()
        || form.phone.trim().is_empty()
        || form.address.trim().is_empty()
    {
        return Redirect::to("/checkout?error=missing").into_response();
    }

    let content = state.bot_api().site_content().await;
    let subtotal = cart.subtotal();
    let fee = delivery_fee(subtotal, content.settings.free_delivery_threshold);
    let total = subtotal.saturating_add(fee);
    let order_number = order_number(Utc::now().timestamp_millis());

    // The operator picks orders up from this log entry.
    info!(
        order = %order_number,
        user_id = %user.id,
        customer = %form.full_name.trim(),
        phone = %form.phone.trim(),
        city = %form.city,
        address = %form.address.trim(),
        notes = %form.notes.trim(),
        payment = %form.payment_method,
        items = cart.item_count(),
        subtotal = subtotal.as_som(),
        delivery = fee.as_som(),
        total = total.as_som(),
        "Order placed"
    );
    add_breadcrumb("checkout", "Order placed", Some(&[("order", &order_number)]));

    clear_cart(&session).await;

    let ctx = PageContext::build(&state, &session).await;
    ConfirmationTemplate { ctx, order_number }.into_response()
}

/// The delivery fee for a subtotal: zero at or above the free-delivery
/// threshold.
fn delivery_fee(subtotal: Price, threshold: u64) -> Price {
    if subtotal.as_som() >= threshold {
        Price::ZERO
    } else {
        DELIVERY_FEE
    }
}

/// Six-digit order number from the tail of a millisecond timestamp.
fn order_number(timestamp_millis: i64) -> String {
    format!("{:06}", timestamp_millis.rem_euclid(1_000_000))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_waived_at_threshold() {
        assert_eq!(delivery_fee(Price::new(300_000), 300_000), Price::ZERO);
        assert_eq!(delivery_fee(Price::new(450_000), 300_000), Price::ZERO);
    }

    #[test]
    fn test_fee_charged_below_threshold() {
        assert_eq!(delivery_fee(Price::new(299_999), 300_000), DELIVERY_FEE);
        assert_eq!(delivery_fee(Price::ZERO, 300_000), DELIVERY_FEE);
    }

    #[test]
    fn test_order_number_is_six_digits() {
        assert_eq!(order_number(1_724_400_123_456), "123456");
        assert_eq!(order_number(1_724_400_000_007), "000007");
        assert_eq!(order_number(0), "000000");
    }
}
