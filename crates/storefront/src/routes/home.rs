//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::filters;
use crate::models::Toy;
use crate::state::AppState;

use super::{PageContext, Toast};

/// Catalog toys shown as trending when none are flagged popular.
const TRENDING_FALLBACK_COUNT: usize = 4;

#[derive(Debug, Deserialize)]
pub struct HomeQuery {
    /// Transient notice code set by redirects (`logout`).
    notice: Option<String>,
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub ctx: PageContext,
    pub trending: Vec<Toy>,
}

/// Display the home page.
#[instrument(skip(state, session))]
pub async fn home(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<HomeQuery>,
) -> HomeTemplate {
    let toys = state.bot_api().products().await;

    let mut trending: Vec<Toy> = toys.iter().filter(|toy| toy.is_popular).cloned().collect();
    if trending.is_empty() {
        trending = toys.iter().take(TRENDING_FALLBACK_COUNT).cloned().collect();
    }

    let mut ctx = PageContext::build(&state, &session).await;
    ctx = match query.notice.as_deref() {
        Some("logout") => ctx.with_toast(Toast::success("Muvaffaqiyatli chiqdingiz")),
        Some("logout-failed") => ctx.with_toast(Toast::error("Chiqishda xatolik yuz berdi")),
        _ => ctx,
    };

    HomeTemplate { ctx, trending }
}
