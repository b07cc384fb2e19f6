//! Bot-managed site content types.
//!
//! Everything here is editable through the Telegram bot that fronts the
//! content API: contact details, the about and delivery pages, and blog
//! posts. Field names mirror the API's JSON keys. The fallback values
//! used when the API is unreachable live in `crate::content`.

use serde::{Deserialize, Serialize};

/// Site-wide settings: contacts, social links, promo banner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSettings {
    pub phone: String,
    pub email: String,
    pub address: String,
    pub working_hours: String,
    pub instagram_url: String,
    pub telegram_url: String,
    pub whatsapp_url: String,
    /// Text for the banner above the header. Empty hides the banner.
    pub promo_banner_text: String,
    /// Order subtotal (in som) from which delivery is free.
    pub free_delivery_threshold: u64,
    pub site_description: String,
}

/// A headline figure on the about page ("5000+ Mamnun mijozlar").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutStat {
    pub number: String,
    pub label: String,
}

/// A company value card on the about page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutValue {
    pub title: String,
    pub description: String,
    /// Icon key: "shield", "heart", "users" and the like.
    pub icon_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub image: String,
}

/// Content of the about page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutPageContent {
    pub hero_title: String,
    pub hero_description: String,
    pub mission_text: String,
    pub stats: Vec<AboutStat>,
    pub values: Vec<AboutValue>,
    pub team_members: Vec<TeamMember>,
}

/// Accent color for a delivery option card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryColor {
    Blue,
    /// Catch-all so unrecognized colors from the bot render with the
    /// red styling rather than failing the whole payload.
    #[serde(other)]
    Red,
}

impl DeliveryColor {
    #[must_use]
    pub const fn is_blue(self) -> bool {
        matches!(self, Self::Blue)
    }
}

/// A delivery option card (city delivery, regional post, and so on).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryOption {
    pub title: String,
    pub items: Vec<String>,
    pub color: DeliveryColor,
}

/// One step of the "how ordering works" strip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryStep {
    pub step: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub title: String,
    pub description: String,
    /// Icon key: "cash", "card", "phone".
    pub icon_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

/// Content of the delivery page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryPageContent {
    pub hero_title: String,
    pub hero_description: String,
    pub delivery_options: Vec<DeliveryOption>,
    pub steps: Vec<DeliveryStep>,
    pub payment_methods: Vec<PaymentMethod>,
    pub faq: Vec<FaqItem>,
}

/// A blog post.
///
/// IDs are strings: API posts carry stringified database IDs while the
/// fallback posts use "b1", "b2".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub image: String,
    /// Publication date, displayed as-is.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub author: String,
}

/// Everything the bot manages, fetched together and cached together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteContent {
    pub settings: SiteSettings,
    pub about: AboutPageContent,
    pub delivery: DeliveryPageContent,
    pub blog_posts: Vec<BlogPost>,
}

impl SiteContent {
    /// Find a blog post by its ID.
    #[must_use]
    pub fn blog_post(&self, id: &str) -> Option<&BlogPost> {
        self.blog_posts.iter().find(|post| post.id == id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_color_parses_known_values() {
        let blue: DeliveryColor = serde_json::from_str("\"blue\"").unwrap();
        let red: DeliveryColor = serde_json::from_str("\"red\"").unwrap();
        assert!(blue.is_blue());
        assert!(!red.is_blue());
    }

    #[test]
    fn test_delivery_color_unknown_falls_back_to_red() {
        let color: DeliveryColor = serde_json::from_str("\"chartreuse\"").unwrap();
        assert_eq!(color, DeliveryColor::Red);
    }

    #[test]
    fn test_blog_post_tolerates_sparse_payload() {
        let post: BlogPost = serde_json::from_str(r#"{"id":"7","title":"Yangilik"}"#).unwrap();
        assert_eq!(post.id, "7");
        assert_eq!(post.excerpt, "");
        assert!(post.content.is_none());
        assert_eq!(post.author, "");
    }

    #[test]
    fn test_blog_post_lookup_by_id() {
        let content = crate::content::default_site_content();
        assert!(content.blog_post("b1").is_some());
        assert!(content.blog_post("missing").is_none());
    }
}
