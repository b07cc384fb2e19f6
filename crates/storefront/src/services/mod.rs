//! Business logic services for the storefront.
//!
//! # Services
//!
//! - [`auth`] - Email/password sign-in and registration, validation and
//!   provider error mapping
//! - [`identity`] - REST client for the hosted identity provider
//! - [`advisor`] - AI gift advisor client with canned Uzbek fallbacks

pub mod advisor;
pub mod auth;
pub mod identity;

pub use advisor::AdvisorClient;
pub use identity::IdentityClient;
