//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                   - Home page
//!
//! # Catalog
//! GET  /catalog            - Product grid (category/search/sort filters)
//! GET  /products/{id}      - Product detail
//!
//! # Cart (requires auth; HTMX fragments)
//! GET  /cart               - Cart page
//! POST /cart/add           - Add to cart (toast fragment, triggers cart-updated)
//! POST /cart/update        - Change quantity (cart items fragment)
//! POST /cart/remove        - Remove line (cart items fragment)
//! GET  /cart/count         - Header badge fragment (public)
//!
//! # Checkout (requires auth)
//! GET  /checkout           - Order form (empty-cart page when the cart is empty)
//! POST /checkout           - Place the order, render the confirmation
//!
//! # Auth
//! GET  /auth/login         - Login page
//! POST /auth/login         - Login action
//! GET  /auth/register      - Registration page
//! POST /auth/register      - Registration action
//! POST /auth/logout        - Logout action
//!
//! # Content
//! GET  /blog               - Blog index
//! GET  /blog/{id}          - Blog post
//! GET  /about              - About page
//! GET  /delivery           - Delivery info page
//!
//! # Advisor
//! GET  /advisor            - Gift advisor form
//! POST /advisor            - Ask for advice, render the reply
//!
//! # Account (requires auth)
//! GET  /profile            - Profile page
//! ```

pub mod account;
pub mod advisor;
pub mod auth;
pub mod blog;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod home;
pub mod pages;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};
use tower_sessions::Session;

use crate::models::{CurrentUser, SiteSettings, session_keys};
use crate::state::AppState;

// ============================================================================
// Page context
// ============================================================================

/// A transient corner notification ("savatga qo'shildi" and friends).
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub is_error: bool,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: true,
        }
    }
}

/// Everything the shared page shell needs: the signed-in user for the
/// header menu, the cart badge count, and the bot-managed settings that
/// feed the promo banner and footer.
#[derive(Clone)]
pub struct PageContext {
    pub user: Option<CurrentUser>,
    pub cart_count: u32,
    pub settings: SiteSettings,
    pub base_url: String,
    pub toast: Option<Toast>,
}

impl PageContext {
    /// Assemble the context for a page render. Settings come from the
    /// content cache, so this stays cheap per request.
    pub async fn build(state: &AppState, session: &Session) -> Self {
        let user = session
            .get::<CurrentUser>(session_keys::CURRENT_USER)
            .await
            .ok()
            .flatten();
        let cart_count = cart::load_cart(session).await.item_count();
        let settings = state.bot_api().site_content().await.settings.clone();

        Self {
            user,
            cart_count,
            settings,
            base_url: state.config().base_url.clone(),
            toast: None,
        }
    }

    /// Attach a transient notification to this render.
    #[must_use]
    pub fn with_toast(mut self, toast: Toast) -> Self {
        self.toast = Some(toast);
        self
    }
}

// ============================================================================
// Routers
// ============================================================================

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/register", get(auth::register_page).post(auth::register))
        .route("/logout", post(auth::logout))
}

/// Create the blog routes router.
pub fn blog_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(blog::index))
        .route("/{id}", get(blog::show))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Catalog and product detail
        .route("/catalog", get(catalog::index))
        .route("/products/{id}", get(products::show))
        // Cart
        .nest("/cart", cart_routes())
        // Checkout
        .route("/checkout", get(checkout::show).post(checkout::submit))
        // Auth
        .nest("/auth", auth_routes())
        // Bot-managed content
        .nest("/blog", blog_routes())
        .route("/about", get(pages::about))
        .route("/delivery", get(pages::delivery))
        // Gift advisor
        .route("/advisor", get(advisor::show).post(advisor::ask))
        // Account
        .route("/profile", get(account::profile))
}
