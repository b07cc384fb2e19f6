//! Wire types for bot API responses.
//!
//! Content payloads deserialize every field as optional: the backend
//! returns `{}` for sections the bot admin has not filled in yet, and
//! partial objects for half-filled ones. The merge rules that turn
//! these into complete domain values live in `super::conversions`.

use serde::Deserialize;

use crate::models::content::{
    AboutStat, AboutValue, BlogPost, DeliveryOption, DeliveryStep, FaqItem, PaymentMethod,
    TeamMember,
};

/// A product as the bot API returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiProduct {
    pub id: i32,
    pub title: String,
    /// Free-text price: "350 000", "350,000 so'm" and the like.
    pub price: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category_id: Option<i32>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Primary image URL, absolutized by the server from the `base_url`
    /// query parameter.
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Paginated product list response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiProductList {
    pub products: Vec<ApiProduct>,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub page_size: u32,
    #[serde(default)]
    pub total_pages: u32,
}

/// A category as the bot database defines it.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiCategory {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub toy_count: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiCategoryList {
    pub categories: Vec<ApiCategory>,
}

/// Blog feed response (`{"posts": [...]}`).
#[derive(Debug, Clone, Deserialize)]
pub struct ApiBlogFeed {
    #[serde(default)]
    pub posts: Vec<BlogPost>,
}

/// Partial site settings payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiSiteSettings {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub working_hours: Option<String>,
    pub instagram_url: Option<String>,
    pub telegram_url: Option<String>,
    pub whatsapp_url: Option<String>,
    pub promo_banner_text: Option<String>,
    pub free_delivery_threshold: Option<u64>,
    pub site_description: Option<String>,
}

/// Partial about page payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiAboutContent {
    pub hero_title: Option<String>,
    pub hero_description: Option<String>,
    pub mission_text: Option<String>,
    pub stats: Option<Vec<AboutStat>>,
    pub values: Option<Vec<AboutValue>>,
    pub team_members: Option<Vec<TeamMember>>,
}

/// Partial delivery page payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiDeliveryContent {
    pub hero_title: Option<String>,
    pub hero_description: Option<String>,
    pub delivery_options: Option<Vec<DeliveryOption>>,
    pub steps: Option<Vec<DeliveryStep>>,
    pub payment_methods: Option<Vec<PaymentMethod>>,
    pub faq: Option<Vec<FaqItem>>,
}

/// Combined content payload from `/api/content`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiSiteContent {
    pub settings: Option<ApiSiteSettings>,
    pub about: Option<ApiAboutContent>,
    pub delivery: Option<ApiDeliveryContent>,
    pub blog_posts: Option<Vec<BlogPost>>,
}
