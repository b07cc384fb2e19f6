//! The fixed toy category taxonomy.
//!
//! The bot API stores free-form category names; the storefront maps them
//! onto this fixed set of categories with Uzbek display labels. Mapping is
//! a best-effort keyword heuristic, not authoritative.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A storefront category.
///
/// `All` is both the "no filter" catalog state and the bucket for remote
/// category names that match no keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "all")]
    All,
    #[serde(rename = "age-0-3")]
    Age0To3,
    #[serde(rename = "age-4-7")]
    Age4To7,
    #[serde(rename = "age-8-plus")]
    Age8Plus,
    #[serde(rename = "educational")]
    Educational,
    #[serde(rename = "tech")]
    Tech,
    #[serde(rename = "girls")]
    Girls,
    #[serde(rename = "boys")]
    Boys,
    #[serde(rename = "soft")]
    Soft,
    #[serde(rename = "construction")]
    Construction,
}

/// Keyword table for mapping remote category names. First match wins.
const KEYWORDS: &[(&[&str], Category)] = &[
    (&["konstruktor", "lego", "building"], Category::Construction),
    (&["yumshoq", "soft", "plush"], Category::Soft),
    (&["robot", "texnik", "tech", "elektron"], Category::Tech),
    (&["qiz", "girl", "barbie", "kukla"], Category::Girls),
    (&["o'g'il", "boy", "mashina", "car"], Category::Boys),
    (&["ta'lim", "educ", "learning"], Category::Educational),
    (&["0-3", "baby", "chaqaloq"], Category::Age0To3),
    (&["4-7", "kichkina"], Category::Age4To7),
    (&["8+", "katta"], Category::Age8Plus),
];

impl Category {
    /// All categories in display order, `All` first.
    pub const ALL: [Self; 10] = [
        Self::All,
        Self::Age0To3,
        Self::Age4To7,
        Self::Age8Plus,
        Self::Educational,
        Self::Tech,
        Self::Girls,
        Self::Boys,
        Self::Soft,
        Self::Construction,
    ];

    /// The Uzbek display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "Barchasi",
            Self::Age0To3 => "0-3 yosh",
            Self::Age4To7 => "4-7 yosh",
            Self::Age8Plus => "8+ yosh",
            Self::Educational => "Ta'limiy",
            Self::Tech => "Robotlar / Texnika",
            Self::Girls => "Qizlar uchun",
            Self::Boys => "O'g'il bolalar uchun",
            Self::Soft => "Yumshoq",
            Self::Construction => "Konstruktor",
        }
    }

    /// URL-stable identifier used in catalog filter links.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Age0To3 => "age-0-3",
            Self::Age4To7 => "age-4-7",
            Self::Age8Plus => "age-8-plus",
            Self::Educational => "educational",
            Self::Tech => "tech",
            Self::Girls => "girls",
            Self::Boys => "boys",
            Self::Soft => "soft",
            Self::Construction => "construction",
        }
    }

    /// Parse a slug back into a category. Unknown slugs mean "no filter".
    #[must_use]
    pub fn from_slug(slug: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|c| c.slug() == slug)
            .unwrap_or(Self::All)
    }

    /// Map a free-form category name from the bot API onto the taxonomy.
    ///
    /// Case-insensitive substring matching against a fixed keyword table;
    /// no keyword match (or a missing name) falls back to [`Category::All`].
    #[must_use]
    pub fn from_remote_name(name: Option<&str>) -> Self {
        let Some(name) = name else {
            return Self::All;
        };
        let lower = name.to_lowercase();

        for (keywords, category) in KEYWORDS {
            if keywords.iter().any(|kw| lower.contains(kw)) {
                return *category;
            }
        }

        Self::All
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_name_maps_to_all() {
        assert_eq!(Category::from_remote_name(None), Category::All);
        assert_eq!(Category::from_remote_name(Some("")), Category::All);
    }

    #[test]
    fn test_keyword_matching_is_case_insensitive() {
        assert_eq!(
            Category::from_remote_name(Some("LEGO Technic")),
            Category::Construction
        );
        assert_eq!(
            Category::from_remote_name(Some("Yumshoq ayiqchalar")),
            Category::Soft
        );
    }

    #[test]
    fn test_substring_matching() {
        assert_eq!(
            Category::from_remote_name(Some("Elektron o'yinchoqlar")),
            Category::Tech
        );
        assert_eq!(
            Category::from_remote_name(Some("Barbie kolleksiyasi")),
            Category::Girls
        );
        assert_eq!(
            Category::from_remote_name(Some("Mashinalar")),
            Category::Boys
        );
        assert_eq!(
            Category::from_remote_name(Some("Ta'limiy to'plamlar")),
            Category::Educational
        );
    }

    #[test]
    fn test_age_buckets() {
        assert_eq!(
            Category::from_remote_name(Some("Chaqaloqlar uchun")),
            Category::Age0To3
        );
        assert_eq!(
            Category::from_remote_name(Some("Kichkinalar 4-7")),
            Category::Age4To7
        );
        assert_eq!(
            Category::from_remote_name(Some("Kattalar 8+")),
            Category::Age8Plus
        );
    }

    #[test]
    fn test_first_match_wins() {
        // "robot" appears before the girls keywords in the table
        assert_eq!(
            Category::from_remote_name(Some("Robot qiz")),
            Category::Tech
        );
    }

    #[test]
    fn test_unmatched_name_falls_back_to_all() {
        assert_eq!(
            Category::from_remote_name(Some("Sport anjomlari")),
            Category::All
        );
    }

    #[test]
    fn test_slug_roundtrip() {
        for category in Category::ALL {
            assert_eq!(Category::from_slug(category.slug()), category);
        }
        assert_eq!(Category::from_slug("no-such"), Category::All);
    }

    #[test]
    fn test_labels_are_uzbek() {
        assert_eq!(Category::All.label(), "Barchasi");
        assert_eq!(Category::Construction.label(), "Konstruktor");
        assert_eq!(Category::Boys.label(), "O'g'il bolalar uchun");
    }

    #[test]
    fn test_serde_uses_slugs() {
        let json = serde_json::to_string(&Category::Age8Plus).unwrap();
        assert_eq!(json, "\"age-8-plus\"");
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::Age8Plus);
    }
}
