//! Authentication middleware and extractors.
//!
//! Provides extractors for requiring a signed-in user in route handlers.

use axum::{
    extract::FromRequestParts,
    http::{HeaderName, StatusCode, request::Parts},
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::models::{CurrentUser, session_keys};

/// Marks requests issued by the HTMX runtime rather than navigation.
const HTMX_REQUEST: HeaderName = HeaderName::from_static("hx-request");

/// Tells the HTMX runtime to perform a full-page redirect.
const HTMX_REDIRECT: HeaderName = HeaderName::from_static("hx-redirect");

/// Extractor that requires a signed-in user.
///
/// If nobody is logged in, returns a redirect to the login page.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAuth(user): RequireAuth,
/// ) -> impl IntoResponse {
///     format!("Salom, {}!", user.display_name())
/// }
/// ```
pub struct RequireAuth(pub CurrentUser);

/// Error returned when authentication is required but nobody is logged in.
pub enum AuthRejection {
    /// Redirect to the login page (for full-page requests).
    RedirectToLogin(&'static str),
    /// 401 with an `HX-Redirect` header, so the HTMX runtime navigates
    /// the whole page instead of swapping the fragment.
    HtmxRedirect(&'static str),
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin(target) => Redirect::to(target).into_response(),
            Self::HtmxRedirect(target) => {
                (StatusCode::UNAUTHORIZED, AppendHeaders([(HTMX_REDIRECT, target)])).into_response()
            }
        }
    }
}

impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Get the session from extensions (set by SessionManagerLayer)
        let session = parts
            .extensions
            .get::<Session>()
            .ok_or_else(|| rejection_for(parts))?;

        // Get the current user from the session
        let user: CurrentUser = session
            .get(session_keys::CURRENT_USER)
            .await
            .ok()
            .flatten()
            .ok_or_else(|| rejection_for(parts))?;

        Ok(Self(user))
    }
}

/// Build the rejection for an unauthenticated request. Cart and
/// checkout pages get a login notice explaining why they landed there.
fn rejection_for(parts: &Parts) -> AuthRejection {
    let path = parts.uri.path();
    let target = if path.starts_with("/cart") || path.starts_with("/checkout") {
        "/auth/login?notice=cart"
    } else {
        "/auth/login"
    };

    if parts.headers.contains_key(&HTMX_REQUEST) {
        AuthRejection::HtmxRedirect(target)
    } else {
        AuthRejection::RedirectToLogin(target)
    }
}

/// Extractor that optionally gets the current user.
///
/// Unlike `RequireAuth`, this does not reject the request if nobody is
/// logged in.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(
///     OptionalAuth(user): OptionalAuth,
/// ) -> impl IntoResponse {
///     match user {
///         Some(u) => format!("Salom, {}!", u.display_name()),
///         None => "Salom, mehmon!".to_string(),
///     }
/// }
/// ```
pub struct OptionalAuth(pub Option<CurrentUser>);

impl<S> FromRequestParts<S> for OptionalAuth
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = match parts.extensions.get::<Session>() {
            Some(session) => session
                .get::<CurrentUser>(session_keys::CURRENT_USER)
                .await
                .ok()
                .flatten(),
            None => None,
        };

        Ok(Self(user))
    }
}

/// Helper to set the current user in the session.
///
/// Logout needs no counterpart: it flushes the whole session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_user(
    session: &Session,
    user: &CurrentUser,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CURRENT_USER, user).await
}
