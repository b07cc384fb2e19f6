//! Cache types for bot API responses.

use std::sync::Arc;

use crate::models::content::SiteContent;
use crate::models::product::Toy;

/// Cache key for the two cached fetches.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum CacheKey {
    /// The full product list.
    Products,
    /// The assembled site content.
    Content,
}

/// Cached value types.
///
/// Values are `Arc`-wrapped so a cache hit is a pointer clone, not a
/// copy of the whole catalog.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Products(Arc<Vec<Toy>>),
    Content(Arc<SiteContent>),
}
