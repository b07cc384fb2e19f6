//! Email/password authentication on top of the identity provider.
//!
//! Validates credentials locally before hitting the provider, then
//! translates provider error codes into [`AuthError`] variants that
//! carry Uzbek-language messages for the login form.

use thiserror::Error;
use tracing::{info, instrument, warn};
use toymix_core::Email;

use crate::models::CurrentUser;
use crate::services::identity::{IdentityClient, IdentityError};

/// Provider enforces this too; checking locally gives the user an
/// immediate message instead of a round trip.
pub const MIN_PASSWORD_LENGTH: usize = 6;

// ============================================================================
// Errors
// ============================================================================

/// Errors that can occur during sign-in or registration.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email or password was left empty.
    #[error("email or password missing")]
    MissingFields,

    /// Email does not look like an email address.
    #[error("invalid email format")]
    InvalidEmail,

    /// Password is shorter than [`MIN_PASSWORD_LENGTH`].
    #[error("password too short")]
    WeakPassword,

    /// No account with this email.
    #[error("user not found")]
    UserNotFound,

    /// Account exists but the password is wrong.
    #[error("wrong password")]
    WrongPassword,

    /// Provider rejected the email/password pair without saying which
    /// part is wrong.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Registration attempted with an email that already has an account.
    #[error("email already registered")]
    EmailExists,

    /// Provider failure that does not map to a known code.
    #[error("identity provider error: {0}")]
    Provider(#[from] IdentityError),
}

const PROVIDER_MESSAGE: &str =
    "Xatolik yuz berdi. Iltimos, birozdan so'ng qayta urinib ko'ring.";

impl AuthError {
    /// Message shown on the login form. Everything the storefront
    /// renders is Uzbek, including these.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::MissingFields => "Iltimos, email va parol kiriting!",
            Self::InvalidEmail => "Email formati noto'g'ri",
            Self::WeakPassword => "Parol kamida 6 ta belgidan iborat bo'lishi kerak",
            Self::UserNotFound => "Bunday foydalanuvchi topilmadi",
            Self::WrongPassword => "Noto'g'ri parol",
            Self::InvalidCredentials => "Email yoki parol noto'g'ri",
            Self::EmailExists => "Bu email allaqachon ro'yxatdan o'tgan",
            Self::Provider(_) => PROVIDER_MESSAGE,
        }
    }

    /// Short code carried in the `?error=` query parameter when a form
    /// submission redirects back to itself.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingFields => "missing",
            Self::InvalidEmail => "email",
            Self::WeakPassword => "password",
            Self::UserNotFound => "not-found",
            Self::WrongPassword => "wrong-password",
            Self::InvalidCredentials => "credentials",
            Self::EmailExists => "exists",
            Self::Provider(_) => "provider",
        }
    }

    /// Resolve a redirect code back to its form message. Unknown codes
    /// yield `None`, so a tampered query string renders nothing.
    #[must_use]
    pub fn message_for_code(code: &str) -> Option<&'static str> {
        let message = match code {
            "missing" => Self::MissingFields.user_message(),
            "email" => Self::InvalidEmail.user_message(),
            "password" => Self::WeakPassword.user_message(),
            "not-found" => Self::UserNotFound.user_message(),
            "wrong-password" => Self::WrongPassword.user_message(),
            "credentials" => Self::InvalidCredentials.user_message(),
            "exists" => Self::EmailExists.user_message(),
            "provider" => PROVIDER_MESSAGE,
            _ => return None,
        };
        Some(message)
    }
}

// ============================================================================
// Operations
// ============================================================================

/// Sign an existing user in.
///
/// # Errors
///
/// Returns `AuthError` when validation fails or the provider rejects
/// the credentials.
#[instrument(skip_all)]
pub async fn sign_in(
    identity: &IdentityClient,
    email: &str,
    password: &str,
) -> Result<CurrentUser, AuthError> {
    let email = validate_credentials(email, password)?;

    let account = identity
        .sign_in(email.as_str(), password)
        .await
        .map_err(map_provider_error)?;

    info!(user_id = %account.id, "User signed in");

    Ok(CurrentUser {
        id: account.id,
        email,
        name: account.display_name,
    })
}

/// Register a new account and sign it in.
///
/// # Errors
///
/// Returns `AuthError` when validation fails or the provider refuses
/// to create the account.
#[instrument(skip_all)]
pub async fn sign_up(
    identity: &IdentityClient,
    name: Option<&str>,
    email: &str,
    password: &str,
) -> Result<CurrentUser, AuthError> {
    let email = validate_credentials(email, password)?;

    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword);
    }

    let display_name = normalize_name(name);
    let account = identity
        .sign_up(email.as_str(), password, display_name.as_deref())
        .await
        .map_err(map_provider_error)?;

    info!(user_id = %account.id, "User registered");

    Ok(CurrentUser {
        id: account.id,
        email,
        name: account.display_name.or(display_name),
    })
}

// ============================================================================
// Helpers
// ============================================================================

fn validate_credentials(email: &str, password: &str) -> Result<Email, AuthError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(AuthError::MissingFields);
    }

    Email::parse(email).map_err(|_| AuthError::InvalidEmail)
}

fn normalize_name(name: Option<&str>) -> Option<String> {
    name.map(str::trim)
        .filter(|trimmed| !trimmed.is_empty())
        .map(ToOwned::to_owned)
}

/// Translate a provider error code into the matching variant. Codes
/// like `WEAK_PASSWORD : Password should be at least 6 characters`
/// carry a trailing explanation, so only the leading token counts.
fn map_provider_error(err: IdentityError) -> AuthError {
    let Some(code) = err.provider_code() else {
        warn!(error = %err, "Identity provider call failed");
        return AuthError::Provider(err);
    };

    match code {
        "EMAIL_NOT_FOUND" => AuthError::UserNotFound,
        "INVALID_PASSWORD" => AuthError::WrongPassword,
        "INVALID_LOGIN_CREDENTIALS" => AuthError::InvalidCredentials,
        "EMAIL_EXISTS" => AuthError::EmailExists,
        "WEAK_PASSWORD" => AuthError::WeakPassword,
        "INVALID_EMAIL" => AuthError::InvalidEmail,
        _ => {
            warn!(code, "Unrecognized identity provider error code");
            AuthError::Provider(err)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_empty_fields() {
        assert!(matches!(
            validate_credentials("", "secret"),
            Err(AuthError::MissingFields)
        ));
        assert!(matches!(
            validate_credentials("aziza@toymix.uz", ""),
            Err(AuthError::MissingFields)
        ));
        assert!(matches!(
            validate_credentials("   ", "secret"),
            Err(AuthError::MissingFields)
        ));
    }

    #[test]
    fn test_validate_rejects_malformed_email() {
        assert!(matches!(
            validate_credentials("not-an-email", "secret"),
            Err(AuthError::InvalidEmail)
        ));
    }

    #[test]
    fn test_validate_accepts_valid_credentials() {
        let email = validate_credentials("Aziza@ToyMix.uz", "secret").unwrap();
        assert_eq!(email.as_str(), "aziza@toymix.uz");
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name(Some("  Aziza  ")), Some("Aziza".to_string()));
        assert_eq!(normalize_name(Some("   ")), None);
        assert_eq!(normalize_name(None), None);
    }

    #[test]
    fn test_maps_known_provider_codes() {
        let cases = [
            ("EMAIL_NOT_FOUND", "Bunday foydalanuvchi topilmadi"),
            ("INVALID_PASSWORD", "Noto'g'ri parol"),
            ("INVALID_LOGIN_CREDENTIALS", "Email yoki parol noto'g'ri"),
            ("EMAIL_EXISTS", "Bu email allaqachon ro'yxatdan o'tgan"),
            (
                "WEAK_PASSWORD : Password should be at least 6 characters",
                "Parol kamida 6 ta belgidan iborat bo'lishi kerak",
            ),
            ("INVALID_EMAIL", "Email formati noto'g'ri"),
        ];

        for (code, message) in cases {
            let mapped = map_provider_error(IdentityError::Provider(code.to_string()));
            assert_eq!(mapped.user_message(), message, "code {code}");
        }
    }

    #[test]
    fn test_unknown_code_stays_provider_error() {
        let mapped = map_provider_error(IdentityError::Provider("TOO_MANY_ATTEMPTS".to_string()));
        assert!(matches!(mapped, AuthError::Provider(_)));
        assert_eq!(
            mapped.user_message(),
            "Xatolik yuz berdi. Iltimos, birozdan so'ng qayta urinib ko'ring."
        );
    }

    #[test]
    fn test_missing_fields_message_matches_form() {
        assert_eq!(
            AuthError::MissingFields.user_message(),
            "Iltimos, email va parol kiriting!"
        );
    }

    #[test]
    fn test_every_code_resolves_to_its_message() {
        let errors = [
            AuthError::MissingFields,
            AuthError::InvalidEmail,
            AuthError::WeakPassword,
            AuthError::UserNotFound,
            AuthError::WrongPassword,
            AuthError::InvalidCredentials,
            AuthError::EmailExists,
            AuthError::Provider(IdentityError::Provider("OPERATION_NOT_ALLOWED".to_string())),
        ];

        for err in errors {
            assert_eq!(
                AuthError::message_for_code(err.code()),
                Some(err.user_message()),
                "code {}",
                err.code()
            );
        }
    }

    #[test]
    fn test_unknown_code_resolves_to_none() {
        assert_eq!(AuthError::message_for_code("nonsense"), None);
        assert_eq!(AuthError::message_for_code(""), None);
    }
}
