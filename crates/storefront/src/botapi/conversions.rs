//! Conversions from bot API payloads to domain types.
//!
//! The bot database knows much less about a toy than the site displays:
//! no ratings, no inventory, no age recommendations. This module fills
//! those gaps with the same heuristics the merchandising copy was
//! written around, and merges partial content payloads over the
//! defaults from `crate::content`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rand::Rng;

use toymix_core::{Category, CategoryId, Price, ProductId};

use crate::content;
use crate::models::content::{AboutPageContent, DeliveryPageContent, SiteContent, SiteSettings};
use crate::models::product::{CategoryCount, Toy};

use super::types::{
    ApiAboutContent, ApiCategory, ApiDeliveryContent, ApiProduct, ApiSiteContent, ApiSiteSettings,
};

/// How many leading products get the popular badge.
const POPULAR_COUNT: usize = 4;

/// Products created within this many days count as new.
const NEW_PRODUCT_DAYS: i64 = 14;

/// Convert a product list, marking the first few entries popular.
///
/// The bot does not track popularity, so the site treats the products
/// the admin listed first as the featured ones.
pub fn convert_product_list(products: Vec<ApiProduct>) -> Vec<Toy> {
    let mut toys: Vec<Toy> = products.into_iter().map(convert_product).collect();
    for toy in toys.iter_mut().take(POPULAR_COUNT) {
        toy.is_popular = true;
    }
    toys
}

/// Convert a single product.
pub fn convert_product(product: ApiProduct) -> Toy {
    let category = Category::from_remote_name(product.category_name.as_deref());
    let age_range = guess_age_range(&product.title, &product.description, category);
    let is_new = is_recent(product.created_at.as_deref());

    let mut rng = rand::rng();

    Toy {
        id: ProductId::new(product.id),
        name: product.title,
        description: product.description,
        price: Price::from_text(&product.price),
        category,
        image: product.image,
        images: product.images,
        // The bot tracks neither ratings nor reviews; show plausible
        // store-wide numbers instead of empty stars.
        rating: round_to_tenth(4.5 + rng.random_range(0.0..0.5)),
        reviews_count: rng.random_range(10..110),
        age_range,
        in_stock: 50,
        discount: None,
        colors: Vec::new(),
        is_new,
        is_popular: false,
    }
}

/// Convert a category, mapping the remote name onto the local taxonomy.
pub fn convert_category(category: ApiCategory) -> CategoryCount {
    CategoryCount {
        id: CategoryId::new(category.id),
        category: Category::from_remote_name(Some(&category.name)),
        toy_count: category.toy_count,
    }
}

/// Merge a settings payload over the defaults.
///
/// Field presence wins: a key the bot admin has set replaces the
/// default even when set to an empty string.
pub fn convert_settings(payload: ApiSiteSettings) -> SiteSettings {
    let base = content::default_settings();
    SiteSettings {
        phone: payload.phone.unwrap_or(base.phone),
        email: payload.email.unwrap_or(base.email),
        address: payload.address.unwrap_or(base.address),
        working_hours: payload.working_hours.unwrap_or(base.working_hours),
        instagram_url: payload.instagram_url.unwrap_or(base.instagram_url),
        telegram_url: payload.telegram_url.unwrap_or(base.telegram_url),
        whatsapp_url: payload.whatsapp_url.unwrap_or(base.whatsapp_url),
        promo_banner_text: payload.promo_banner_text.unwrap_or(base.promo_banner_text),
        free_delivery_threshold: payload
            .free_delivery_threshold
            .unwrap_or(base.free_delivery_threshold),
        site_description: payload.site_description.unwrap_or(base.site_description),
    }
}

/// Merge an about page payload over the defaults.
///
/// Unlike settings, empty values fall back too: a blank hero title
/// would render as a blank page header.
pub fn convert_about(payload: ApiAboutContent) -> AboutPageContent {
    let base = content::default_about();
    AboutPageContent {
        hero_title: non_empty(payload.hero_title).unwrap_or(base.hero_title),
        hero_description: non_empty(payload.hero_description).unwrap_or(base.hero_description),
        mission_text: non_empty(payload.mission_text).unwrap_or(base.mission_text),
        stats: non_empty_list(payload.stats).unwrap_or(base.stats),
        values: non_empty_list(payload.values).unwrap_or(base.values),
        team_members: non_empty_list(payload.team_members).unwrap_or(base.team_members),
    }
}

/// Merge a delivery page payload over the defaults.
pub fn convert_delivery(payload: ApiDeliveryContent) -> DeliveryPageContent {
    let base = content::default_delivery();
    DeliveryPageContent {
        hero_title: non_empty(payload.hero_title).unwrap_or(base.hero_title),
        hero_description: non_empty(payload.hero_description).unwrap_or(base.hero_description),
        delivery_options: non_empty_list(payload.delivery_options).unwrap_or(base.delivery_options),
        steps: non_empty_list(payload.steps).unwrap_or(base.steps),
        payment_methods: non_empty_list(payload.payment_methods).unwrap_or(base.payment_methods),
        faq: non_empty_list(payload.faq).unwrap_or(base.faq),
    }
}

/// Assemble full site content from the combined endpoint's payload.
pub fn convert_content(payload: ApiSiteContent) -> SiteContent {
    SiteContent {
        settings: convert_settings(payload.settings.unwrap_or_default()),
        about: convert_about(payload.about.unwrap_or_default()),
        delivery: convert_delivery(payload.delivery.unwrap_or_default()),
        blog_posts: non_empty_list(payload.blog_posts)
            .unwrap_or_else(content::default_blog_posts),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn non_empty_list<T>(value: Option<Vec<T>>) -> Option<Vec<T>> {
    value.filter(|v| !v.is_empty())
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Guess an age recommendation from the product text, then from its
/// category.
fn guess_age_range(title: &str, description: &str, category: Category) -> String {
    let text = format!("{title} {description}").to_lowercase();

    let from_text = if contains_any(&text, &["0-3", "chaqaloq", "baby"]) {
        Some("0-3 yosh")
    } else if contains_any(&text, &["4-7", "4-6", "5-7"]) {
        Some("4-7 yosh")
    } else if contains_any(&text, &["8+", "8-12", "katta"]) {
        Some("8+ yosh")
    } else if contains_any(&text, &["3-10", "3-8"]) {
        Some("3-10 yosh")
    } else {
        None
    };

    let range = from_text.unwrap_or(match category {
        Category::Age0To3 | Category::Soft => "0-3 yosh",
        Category::Age4To7 => "4-7 yosh",
        Category::Age8Plus | Category::Tech => "8+ yosh",
        Category::Construction => "3-10 yosh",
        _ => "3+ yosh",
    });
    range.to_string()
}

fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| text.contains(needle))
}

/// Whether the product was created within the last two weeks.
///
/// Accepts RFC 3339 as well as the bare `SQLite` timestamp formats the
/// backend actually emits.
fn is_recent(created_at: Option<&str>) -> bool {
    let Some(created) = created_at.and_then(parse_timestamp) else {
        return false;
    };
    Utc::now().signed_duration_since(created).num_days() <= NEW_PRODUCT_DAYS
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn api_product() -> ApiProduct {
        ApiProduct {
            id: 7,
            title: "Robot konstruktor".to_string(),
            price: "450,000 so'm".to_string(),
            description: "8-12 yosh uchun dasturlash to'plami".to_string(),
            category_id: Some(2),
            category_name: Some("Robotlar".to_string()),
            is_active: true,
            created_at: None,
            updated_at: None,
            image: "https://cdn.example/robot.jpg".to_string(),
            images: vec!["a.jpg".to_string()],
        }
    }

    #[test]
    fn test_convert_product_maps_core_fields() {
        let toy = convert_product(api_product());

        assert_eq!(toy.id, ProductId::new(7));
        assert_eq!(toy.name, "Robot konstruktor");
        assert_eq!(toy.price, Price::new(450_000));
        assert_eq!(toy.category, Category::Tech);
        assert_eq!(toy.images, vec!["a.jpg".to_string()]);
        assert_eq!(toy.in_stock, 50);
        assert!(!toy.is_popular);
    }

    #[test]
    fn test_convert_category_maps_onto_local_taxonomy() {
        let count = convert_category(ApiCategory {
            id: 3,
            name: "Yumshoq o'yinchoqlar".to_string(),
            toy_count: 12,
        });

        assert_eq!(count.id, CategoryId::new(3));
        assert_eq!(count.category, Category::Soft);
        assert_eq!(count.toy_count, 12);
    }

    #[test]
    fn test_convert_product_synthesizes_rating_and_reviews() {
        let toy = convert_product(api_product());

        assert!((4.5..=5.0).contains(&toy.rating), "rating {}", toy.rating);
        assert!(
            (10..110).contains(&toy.reviews_count),
            "reviews {}",
            toy.reviews_count
        );
    }

    #[test]
    fn test_convert_list_marks_first_four_popular() {
        let products: Vec<ApiProduct> = (1..=6)
            .map(|id| {
                let mut product = api_product();
                product.id = id;
                product
            })
            .collect();

        let toys = convert_product_list(products);
        let popular: Vec<bool> = toys.iter().map(|toy| toy.is_popular).collect();
        assert_eq!(popular, vec![true, true, true, true, false, false]);
    }

    #[test]
    fn test_age_range_from_product_text_wins() {
        // Text mentions an age band, category says otherwise.
        assert_eq!(
            guess_age_range("Chaqaloq uchun shaqildoq", "", Category::Tech),
            "0-3 yosh"
        );
        assert_eq!(guess_age_range("Puzzle 5-7", "", Category::All), "4-7 yosh");
        assert_eq!(
            guess_age_range("Katta bolalar uchun", "", Category::Soft),
            "8+ yosh"
        );
        assert_eq!(guess_age_range("Mozaika 3-8", "", Category::All), "3-10 yosh");
    }

    #[test]
    fn test_age_range_falls_back_to_category() {
        assert_eq!(guess_age_range("Ayiqcha", "", Category::Soft), "0-3 yosh");
        assert_eq!(guess_age_range("Dron", "", Category::Tech), "8+ yosh");
        assert_eq!(
            guess_age_range("Lego", "", Category::Construction),
            "3-10 yosh"
        );
        assert_eq!(guess_age_range("Kubik", "", Category::All), "3+ yosh");
    }

    #[test]
    fn test_recent_products_are_new() {
        let yesterday = (Utc::now() - Duration::days(1))
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();
        let last_month = (Utc::now() - Duration::days(30))
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();

        assert!(is_recent(Some(&yesterday)));
        assert!(!is_recent(Some(&last_month)));
        assert!(!is_recent(None));
        assert!(!is_recent(Some("not a date")));
    }

    #[test]
    fn test_timestamp_parsing_accepts_backend_formats() {
        assert!(parse_timestamp("2024-05-12T10:30:00Z").is_some());
        assert!(parse_timestamp("2024-05-12 10:30:00").is_some());
        assert!(parse_timestamp("2024-05-12").is_some());
        assert!(parse_timestamp("12-May-2024").is_none());
    }

    #[test]
    fn test_settings_merge_is_presence_based() {
        let payload = ApiSiteSettings {
            phone: Some("+998 71 200 00 00".to_string()),
            promo_banner_text: Some(String::new()),
            ..ApiSiteSettings::default()
        };

        let settings = convert_settings(payload);
        assert_eq!(settings.phone, "+998 71 200 00 00");
        // Explicitly blanked by the admin: hides the banner.
        assert_eq!(settings.promo_banner_text, "");
        // Untouched fields keep their defaults.
        assert_eq!(settings.email, "info@toymix.uz");
        assert_eq!(settings.free_delivery_threshold, 300_000);
    }

    #[test]
    fn test_about_merge_rejects_empty_values() {
        let payload = ApiAboutContent {
            hero_title: Some(String::new()),
            mission_text: Some("Yangi missiya".to_string()),
            stats: Some(Vec::new()),
            ..ApiAboutContent::default()
        };

        let about = convert_about(payload);
        let base = content::default_about();
        assert_eq!(about.hero_title, base.hero_title);
        assert_eq!(about.mission_text, "Yangi missiya");
        assert_eq!(about.stats.len(), base.stats.len());
    }

    #[test]
    fn test_combined_content_with_empty_sections_yields_defaults() {
        let payload = ApiSiteContent::default();
        let combined = convert_content(payload);
        let defaults = content::default_site_content();

        assert_eq!(combined.settings.phone, defaults.settings.phone);
        assert_eq!(combined.about.hero_title, defaults.about.hero_title);
        assert_eq!(combined.delivery.steps.len(), defaults.delivery.steps.len());
        assert_eq!(combined.blog_posts.len(), defaults.blog_posts.len());
    }

    #[test]
    fn test_combined_content_keeps_api_blog_posts() {
        let payload: ApiSiteContent = serde_json::from_str(
            r#"{"blog_posts": [{"id": "9", "title": "Yangi maqola"}]}"#,
        )
        .unwrap();

        let combined = convert_content(payload);
        assert_eq!(combined.blog_posts.len(), 1);
        assert_eq!(combined.blog_posts.first().unwrap().id, "9");
    }
}
