//! Product types.

use serde::{Deserialize, Serialize};

use toymix_core::{Category, CategoryId, Price, ProductId};

/// A toy in the catalog.
///
/// Built either from the bot API (normalized in `crate::botapi`) or from
/// the static fallback catalog in `crate::content`. Serializable because
/// cart lines embed a snapshot of the toy in the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Toy {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub category: Category,
    /// Primary image URL.
    pub image: String,
    /// Additional gallery images. Empty when only `image` exists.
    #[serde(default)]
    pub images: Vec<String>,
    /// Star rating on a 0.0 to 5.0 scale, one decimal.
    pub rating: f64,
    #[serde(default)]
    pub reviews_count: u32,
    /// Human-readable age recommendation, e.g. "4-7 yosh".
    pub age_range: String,
    /// Units in stock.
    #[serde(default)]
    pub in_stock: u32,
    /// Discount percentage, when the toy is on sale.
    #[serde(default)]
    pub discount: Option<u32>,
    /// Available colors, when the toy comes in variants.
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_popular: bool,
}

impl Toy {
    /// Gallery images for the detail page.
    ///
    /// Falls back to the primary image when no gallery was provided.
    #[must_use]
    pub fn gallery(&self) -> Vec<&str> {
        if self.images.is_empty() {
            vec![self.image.as_str()]
        } else {
            self.images.iter().map(String::as_str).collect()
        }
    }

    /// Price before discount, when a discount applies.
    #[must_use]
    pub fn original_price(&self) -> Option<Price> {
        let discount = self.discount?;
        if discount == 0 || discount >= 100 {
            return None;
        }
        // price = original * (100 - discount) / 100
        let original = self
            .price
            .as_som()
            .saturating_mul(100)
            .checked_div(u64::from(100 - discount))?;
        Some(Price::new(original))
    }

    /// Whether the toy can currently be added to the cart.
    #[must_use]
    pub const fn available(&self) -> bool {
        self.in_stock > 0
    }
}

/// A bot-database category with its live toy count.
///
/// The remote taxonomy is mapped onto [`Category`] with the same keyword
/// heuristic products use, so counts can be pinned to the catalog pills.
#[derive(Debug, Clone)]
pub struct CategoryCount {
    pub id: CategoryId,
    pub category: Category,
    pub toy_count: u32,
}
