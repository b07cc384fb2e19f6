//! Bot-managed content pages (about, delivery).

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tower_sessions::Session;
use tracing::instrument;

use crate::filters;
use crate::models::{AboutPageContent, DeliveryPageContent};
use crate::state::AppState;

use super::PageContext;

/// About page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/about.html")]
pub struct AboutTemplate {
    pub ctx: PageContext,
    pub content: AboutPageContent,
}

/// Delivery info page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/delivery.html")]
pub struct DeliveryTemplate {
    pub ctx: PageContext,
    pub content: DeliveryPageContent,
}

/// Display the about page.
#[instrument(skip(state, session))]
pub async fn about(State(state): State<AppState>, session: Session) -> AboutTemplate {
    let content = state.bot_api().site_content().await;
    let ctx = PageContext::build(&state, &session).await;

    AboutTemplate {
        ctx,
        content: content.about.clone(),
    }
}

/// Display the delivery info page.
#[instrument(skip(state, session))]
pub async fn delivery(State(state): State<AppState>, session: Session) -> DeliveryTemplate {
    let content = state.bot_api().site_content().await;
    let ctx = PageContext::build(&state, &session).await;

    DeliveryTemplate {
        ctx,
        content: content.delivery.clone(),
    }
}
