//! Authentication route handlers.
//!
//! Form posts follow the redirect-on-error pattern: failures bounce back
//! to the form with a short `?error=` code that the page resolves to an
//! Uzbek message, so credentials never ride in a URL.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::{instrument, warn};

use crate::error::{clear_sentry_user, set_sentry_user};
use crate::filters;
use crate::middleware::set_current_user;
use crate::services::auth::{self, AuthError};
use crate::state::AppState;

use super::PageContext;

#[derive(Debug, Deserialize)]
pub struct AuthPageQuery {
    error: Option<String>,
    notice: Option<String>,
}

/// Login form fields. No `Debug`: the password must never reach a log.
#[derive(Deserialize)]
pub struct LoginForm {
    email: String,
    password: String,
}

/// Registration form fields. No `Debug`: the password must never reach
/// a log.
#[derive(Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    name: String,
    email: String,
    password: String,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub ctx: PageContext,
    pub error: Option<&'static str>,
    pub notice: Option<&'static str>,
}

/// Registration page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/register.html")]
pub struct RegisterTemplate {
    pub ctx: PageContext,
    pub error: Option<&'static str>,
}

/// Display the login page. Signed-in users are sent home.
#[instrument(skip(state, session))]
pub async fn login_page(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<AuthPageQuery>,
) -> Response {
    let ctx = PageContext::build(&state, &session).await;
    if ctx.user.is_some() {
        return Redirect::to("/").into_response();
    }

    LoginTemplate {
        ctx,
        error: query.error.as_deref().and_then(AuthError::message_for_code),
        notice: match query.notice.as_deref() {
            Some("cart") => Some("Savatga qo'shish uchun tizimga kiring"),
            _ => None,
        },
    }
    .into_response()
}

/// Sign a user in.
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Response {
    match auth::sign_in(state.identity(), &form.email, &form.password).await {
        Ok(user) => {
            if let Err(e) = set_current_user(&session, &user).await {
                tracing::error!("Failed to store user in session: {e}");
                return Redirect::to("/auth/login?error=provider").into_response();
            }
            set_sentry_user(&user.id, Some(user.email.as_str()));
            Redirect::to("/").into_response()
        }
        Err(e) => {
            warn!(error = %e, "Login failed");
            Redirect::to(&format!("/auth/login?error={}", e.code())).into_response()
        }
    }
}

/// Display the registration page. Signed-in users are sent home.
#[instrument(skip(state, session))]
pub async fn register_page(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<AuthPageQuery>,
) -> Response {
    let ctx = PageContext::build(&state, &session).await;
    if ctx.user.is_some() {
        return Redirect::to("/").into_response();
    }

    RegisterTemplate {
        ctx,
        error: query.error.as_deref().and_then(AuthError::message_for_code),
    }
    .into_response()
}

/// Register a new account and sign it in.
#[instrument(skip_all)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RegisterForm>,
) -> Response {
    match auth::sign_up(
        state.identity(),
        Some(&form.name),
        &form.email,
        &form.password,
    )
    .await
    {
        Ok(user) => {
            if let Err(e) = set_current_user(&session, &user).await {
                tracing::error!("Failed to store user in session: {e}");
                return Redirect::to("/auth/register?error=provider").into_response();
            }
            set_sentry_user(&user.id, Some(user.email.as_str()));
            Redirect::to("/").into_response()
        }
        Err(e) => {
            warn!(error = %e, "Registration failed");
            Redirect::to(&format!("/auth/register?error={}", e.code())).into_response()
        }
    }
}

/// Sign the user out: wipe the whole session, cart included, and land
/// on the home page with a toast.
#[instrument(skip_all)]
pub async fn logout(session: Session) -> Redirect {
    session.clear().await;
    clear_sentry_user();

    if let Err(e) = session.flush().await {
        tracing::error!("Failed to flush session on logout: {e}");
        return Redirect::to("/?notice=logout-failed");
    }

    Redirect::to("/?notice=logout")
}
