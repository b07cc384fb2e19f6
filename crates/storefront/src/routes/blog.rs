//! Blog route handlers.
//!
//! Posts come from the bot-managed site content; there is no local blog
//! storage. The fallback posts keep the section alive when the API is
//! down.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::AppError;
use crate::filters;
use crate::models::BlogPost;
use crate::state::AppState;

use super::PageContext;

/// Blog index template.
#[derive(Template, WebTemplate)]
#[template(path = "blog/index.html")]
pub struct BlogIndexTemplate {
    pub ctx: PageContext,
    pub posts: Vec<BlogPost>,
}

/// Single blog post template.
#[derive(Template, WebTemplate)]
#[template(path = "blog/show.html")]
pub struct BlogShowTemplate {
    pub ctx: PageContext,
    pub post: BlogPost,
}

/// Display the blog index.
#[instrument(skip(state, session))]
pub async fn index(State(state): State<AppState>, session: Session) -> BlogIndexTemplate {
    let content = state.bot_api().site_content().await;
    let ctx = PageContext::build(&state, &session).await;

    BlogIndexTemplate {
        ctx,
        posts: content.blog_posts.clone(),
    }
}

/// Display a single blog post.
///
/// # Errors
///
/// Returns `AppError::NotFound` for unknown post IDs.
#[instrument(skip(state, session))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<BlogShowTemplate, AppError> {
    let content = state.bot_api().site_content().await;
    let post = content
        .blog_post(&id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("blog post {id}")))?;

    let ctx = PageContext::build(&state, &session).await;

    Ok(BlogShowTemplate { ctx, post })
}
