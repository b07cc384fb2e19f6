//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures errors to Sentry before
//! responding to the client. All route handlers should return `Result<T, AppError>`.
//! Server-side failures render a standalone recovery page with reload and
//! home actions instead of a bare status line, so an unexpected fault never
//! strands the visitor on a blank screen.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::services::auth::AuthError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Template rendering failed.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// User is not authenticated.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Standalone recovery page. Deliberately renders without the site shell so
/// it still works when the shell itself is what failed.
#[derive(Template)]
#[template(path = "error/recovery.html")]
struct RecoveryTemplate;

/// Themed 404 page.
#[derive(Template)]
#[template(path = "error/not_found.html")]
struct NotFoundTemplate;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Internal(_) | Self::Template(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Internal(_) | Self::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials
                | AuthError::WrongPassword
                | AuthError::UserNotFound => StatusCode::UNAUTHORIZED,
                AuthError::EmailExists => StatusCode::CONFLICT,
                AuthError::WeakPassword | AuthError::InvalidEmail | AuthError::MissingFields => {
                    StatusCode::BAD_REQUEST
                }
                AuthError::Provider(_) => StatusCode::BAD_GATEWAY,
            },
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        match status {
            StatusCode::INTERNAL_SERVER_ERROR | StatusCode::BAD_GATEWAY => {
                recovery_page(status).into_response()
            }
            StatusCode::NOT_FOUND => not_found_page().into_response(),
            // Don't expose internal error details to clients
            _ => {
                let message = match &self {
                    Self::Auth(err) => err.user_message().to_string(),
                    other => other.to_string(),
                };
                (status, message).into_response()
            }
        }
    }
}

/// Render the recovery page, degrading to plain text if even that fails.
fn recovery_page(status: StatusCode) -> (StatusCode, Html<String>) {
    let body = RecoveryTemplate.render().unwrap_or_else(|_| {
        "Nimadir xato ketdi. Sahifani qayta yuklang yoki bosh sahifaga qayting.".to_string()
    });
    (status, Html(body))
}

/// Render the themed 404 page.
fn not_found_page() -> (StatusCode, Html<String>) {
    let body = NotFoundTemplate
        .render()
        .unwrap_or_else(|_| "Sahifa topilmadi.".to_string());
    (StatusCode::NOT_FOUND, Html(body))
}

/// Fallback handler for unmatched routes.
pub async fn handle_not_found() -> Response {
    not_found_page().into_response()
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Set the Sentry user context from a user ID.
///
/// Call this after successful authentication to associate errors with users.
pub fn set_sentry_user(user_id: &impl ToString, email: Option<&str>) {
    sentry::configure_scope(|scope| {
        scope.set_user(Some(sentry::User {
            id: Some(user_id.to_string()),
            email: email.map(String::from),
            ..Default::default()
        }));
    });
}

/// Clear the Sentry user context.
///
/// Call this on logout to stop associating errors with the user.
pub fn clear_sentry_user() {
    sentry::configure_scope(|scope| {
        scope.set_user(None);
    });
}

/// Add a breadcrumb for user actions.
///
/// Breadcrumbs appear in Sentry error reports to show the trail of user actions
/// leading up to an error.
///
/// # Example
///
/// ```rust,ignore
/// add_breadcrumb("cart", "Added product to cart", Some(&[("product_id", "123")]));
/// ```
pub fn add_breadcrumb(category: &str, message: &str, data: Option<&[(&str, &str)]>) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    if let Some(pairs) = data {
        for (key, value) in pairs {
            breadcrumb.data.insert(
                (*key).to_string(),
                serde_json::Value::String((*value).to_string()),
            );
        }
    }

    sentry::add_breadcrumb(breadcrumb);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("product-123".to_string());
        assert_eq!(err.to_string(), "Not found: product-123");

        let err = AppError::BadRequest("invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid input");
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            let response = err.into_response();
            response.status()
        }

        assert_eq!(
            get_status(AppError::NotFound("test".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::Unauthorized("test".to_string())),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            get_status(AppError::BadRequest("test".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Internal("test".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            get_status(AppError::Auth(AuthError::EmailExists)),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_recovery_page_renders() {
        let (status, Html(body)) = recovery_page(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("bosh sahifa") || body.contains("Bosh sahifa"));
    }
}
