//! ToyMix storefront library.
//!
//! The storefront as a library, so integration tests can drive the
//! routers, clients and domain logic without the binary.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod botapi;
pub mod config;
pub mod content;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
