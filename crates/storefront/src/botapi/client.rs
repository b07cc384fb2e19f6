//! HTTP client for the bot API.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use tracing::{debug, instrument, warn};

use toymix_core::ProductId;

use crate::config::BotApiConfig;
use crate::content;
use crate::models::content::{
    AboutPageContent, BlogPost, DeliveryPageContent, SiteContent, SiteSettings,
};
use crate::models::product::{CategoryCount, Toy};

use super::BotApiError;
use super::cache::{CacheKey, CacheValue};
use super::conversions::{
    convert_about, convert_category, convert_content, convert_delivery, convert_product,
    convert_product_list, convert_settings,
};
use super::types::{
    ApiAboutContent, ApiBlogFeed, ApiCategoryList, ApiDeliveryContent, ApiProduct, ApiProductList,
    ApiSiteContent, ApiSiteSettings,
};

/// Timeout for content endpoints.
const CONTENT_TIMEOUT: Duration = Duration::from_secs(8);

/// Timeout for the product list endpoint, the largest payload.
const PRODUCTS_TIMEOUT: Duration = Duration::from_secs(10);

/// Timeout for small single-resource endpoints.
const SHORT_TIMEOUT: Duration = Duration::from_secs(5);

/// Page size requested from the product list endpoint. One page covers
/// the whole catalog at this size.
const PRODUCTS_PAGE_SIZE: u32 = 200;

/// Client for the ToyMix bot API.
///
/// The product list and site content are cached for 5 minutes; both
/// degrade to the fallback data in `crate::content` when the API is
/// unreachable, so callers never handle errors.
#[derive(Clone)]
pub struct BotApiClient {
    inner: Arc<BotApiClientInner>,
}

struct BotApiClientInner {
    client: reqwest::Client,
    base_url: String,
    image_base_url: String,
    cache: Cache<CacheKey, CacheValue>,
}

impl BotApiClient {
    /// Create a new bot API client.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &BotApiConfig) -> Result<Self, reqwest::Error> {
        let cache = Cache::builder()
            .max_capacity(16)
            .time_to_live(Duration::from_secs(300)) // 5 minutes
            .build();

        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            inner: Arc::new(BotApiClientInner {
                client,
                base_url: config.base_url.clone(),
                image_base_url: config.image_base_url.clone(),
                cache,
            }),
        })
    }

    /// Execute a GET request and parse the JSON response.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        timeout: Duration,
    ) -> Result<T, BotApiError> {
        let url = format!("{}{path}", self.inner.base_url);

        let response = self
            .inner
            .client
            .get(&url)
            .query(query)
            .timeout(timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(BotApiError::Api { status, message });
        }

        let body = response.text().await?;
        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(e) => {
                warn!(
                    error = %e,
                    body = %body.chars().take(500).collect::<String>(),
                    "Failed to parse bot API response"
                );
                Err(BotApiError::Parse(e))
            }
        }
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// The full catalog, from cache, the API, or the fallback data.
    ///
    /// Only successful fetches are cached, so the store recovers from an
    /// outage as soon as the API does.
    #[instrument(skip(self))]
    pub async fn products(&self) -> Arc<Vec<Toy>> {
        if let Some(CacheValue::Products(toys)) = self.inner.cache.get(&CacheKey::Products).await {
            debug!("Cache hit for product list");
            return toys;
        }

        match self.fetch_products().await {
            Ok(toys) if !toys.is_empty() => {
                let toys = Arc::new(toys);
                self.inner
                    .cache
                    .insert(CacheKey::Products, CacheValue::Products(Arc::clone(&toys)))
                    .await;
                tracing::info!(count = toys.len(), "Loaded products from bot API");
                toys
            }
            Ok(_) => {
                warn!("Bot API returned no products, using fallback catalog");
                Arc::new(content::fallback_toys())
            }
            Err(e) => {
                warn!("Failed to fetch products, using fallback catalog: {e}");
                Arc::new(content::fallback_toys())
            }
        }
    }

    async fn fetch_products(&self) -> Result<Vec<Toy>, BotApiError> {
        let page_size = PRODUCTS_PAGE_SIZE.to_string();
        let response: ApiProductList = self
            .get_json(
                "/api/products",
                &[
                    ("page", "1"),
                    ("page_size", page_size.as_str()),
                    ("base_url", self.inner.image_base_url.as_str()),
                ],
                PRODUCTS_TIMEOUT,
            )
            .await?;

        Ok(convert_product_list(response.products))
    }

    /// A single product, or `None` when it doesn't exist or the call
    /// fails. Detail pages fall back to the cached catalog themselves.
    #[instrument(skip(self))]
    pub async fn product(&self, id: ProductId) -> Option<Toy> {
        let path = format!("/api/products/{id}");
        let result: Result<ApiProduct, BotApiError> = self
            .get_json(
                &path,
                &[("base_url", self.inner.image_base_url.as_str())],
                SHORT_TIMEOUT,
            )
            .await;

        match result {
            Ok(product) => Some(convert_product(product)),
            Err(e) => {
                debug!("Failed to fetch product {id}: {e}");
                None
            }
        }
    }

    /// Categories as the bot database defines them, mapped onto the
    /// local taxonomy. Empty on failure.
    #[instrument(skip(self))]
    pub async fn categories(&self) -> Vec<CategoryCount> {
        match self
            .get_json::<ApiCategoryList>("/api/categories", &[], SHORT_TIMEOUT)
            .await
        {
            Ok(list) => list.categories.into_iter().map(convert_category).collect(),
            Err(e) => {
                warn!("Failed to fetch categories: {e}");
                Vec::new()
            }
        }
    }

    // =========================================================================
    // Site Content
    // =========================================================================

    /// Full site content: the combined endpoint first, individual
    /// sections when that fails, defaults for whatever is left.
    ///
    /// The assembled result is cached even when parts of it are
    /// defaults; a content outage settles into one upstream attempt per
    /// TTL instead of four per page view.
    #[instrument(skip(self))]
    pub async fn site_content(&self) -> Arc<SiteContent> {
        if let Some(CacheValue::Content(site)) = self.inner.cache.get(&CacheKey::Content).await {
            debug!("Cache hit for site content");
            return site;
        }

        let site = match self
            .get_json::<ApiSiteContent>("/api/content", &[], CONTENT_TIMEOUT)
            .await
        {
            Ok(payload) => {
                tracing::info!("Loaded site content from bot API");
                convert_content(payload)
            }
            Err(e) => {
                debug!("Combined content endpoint failed, fetching sections: {e}");
                self.content_from_sections().await
            }
        };

        let site = Arc::new(site);
        self.inner
            .cache
            .insert(CacheKey::Content, CacheValue::Content(Arc::clone(&site)))
            .await;
        site
    }

    /// Fetch the four content sections in parallel.
    async fn content_from_sections(&self) -> SiteContent {
        let (settings, about, delivery, blog_posts) = tokio::join!(
            self.settings(),
            self.about_content(),
            self.delivery_content(),
            self.blog_posts(),
        );

        SiteContent {
            settings,
            about,
            delivery,
            blog_posts,
        }
    }

    async fn settings(&self) -> SiteSettings {
        match self
            .get_json::<ApiSiteSettings>("/api/settings", &[], CONTENT_TIMEOUT)
            .await
        {
            Ok(payload) => convert_settings(payload),
            Err(e) => {
                warn!("Failed to fetch site settings: {e}");
                content::default_settings()
            }
        }
    }

    async fn about_content(&self) -> AboutPageContent {
        match self
            .get_json::<ApiAboutContent>("/api/content/about", &[], CONTENT_TIMEOUT)
            .await
        {
            Ok(payload) => convert_about(payload),
            Err(e) => {
                warn!("Failed to fetch about page content: {e}");
                content::default_about()
            }
        }
    }

    async fn delivery_content(&self) -> DeliveryPageContent {
        match self
            .get_json::<ApiDeliveryContent>("/api/content/delivery", &[], CONTENT_TIMEOUT)
            .await
        {
            Ok(payload) => convert_delivery(payload),
            Err(e) => {
                warn!("Failed to fetch delivery page content: {e}");
                content::default_delivery()
            }
        }
    }

    async fn blog_posts(&self) -> Vec<BlogPost> {
        match self
            .get_json::<ApiBlogFeed>("/api/blog", &[], CONTENT_TIMEOUT)
            .await
        {
            Ok(feed) if !feed.posts.is_empty() => feed.posts,
            Ok(_) => {
                debug!("Bot API returned no blog posts, using fallback posts");
                content::default_blog_posts()
            }
            Err(e) => {
                warn!("Failed to fetch blog posts: {e}");
                content::default_blog_posts()
            }
        }
    }

    /// Drop cached data so the next call re-fetches.
    ///
    /// Used when the bot signals a content change.
    pub async fn invalidate(&self) {
        self.inner.cache.invalidate(&CacheKey::Products).await;
        self.inner.cache.invalidate(&CacheKey::Content).await;
    }
}
