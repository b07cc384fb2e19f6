//! Session-related types.
//!
//! Types stored in the session for authentication state.

use serde::{Deserialize, Serialize};

use toymix_core::Email;

/// Session-stored user identity.
///
/// Minimal data stored in the session to identify the logged-in user.
/// The `id` is the identity provider's opaque account ID, not a local
/// database key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Identity provider account ID.
    pub id: String,
    /// User's email address.
    pub email: Email,
    /// Display name, if the account has one.
    pub name: Option<String>,
}

impl CurrentUser {
    /// Name shown in the header and on the profile page.
    ///
    /// Falls back to the email local part for accounts that never set
    /// a display name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => self.email.local_part(),
        }
    }
}

/// Session keys for authentication and cart data.
pub mod keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";

    /// Key for storing the shopping cart.
    pub const CART: &str = "cart";
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn user(name: Option<&str>) -> CurrentUser {
        CurrentUser {
            id: "abc123".to_string(),
            email: Email::parse("aziza@toymix.uz").unwrap(),
            name: name.map(str::to_string),
        }
    }

    #[test]
    fn test_display_name_prefers_profile_name() {
        assert_eq!(user(Some("Aziza")).display_name(), "Aziza");
    }

    #[test]
    fn test_display_name_falls_back_to_email_local_part() {
        assert_eq!(user(None).display_name(), "aziza");
        assert_eq!(user(Some("")).display_name(), "aziza");
    }

    #[test]
    fn test_current_user_roundtrips_through_serde() {
        let original = user(Some("Aziza"));
        let json = serde_json::to_string(&original).unwrap();
        let restored: CurrentUser = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.id, original.id);
        assert_eq!(restored.email, original.email);
        assert_eq!(restored.name, original.name);
    }
}
