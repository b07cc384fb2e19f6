//! Catalog route handler.
//!
//! One grid over the whole cached catalog, narrowed by a category slug,
//! a case-insensitive name search and an optional sort order, all from
//! the query string so filtered views stay linkable.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use toymix_core::Category;

use crate::filters;
use crate::models::{CategoryCount, Toy};
use crate::state::AppState;

use super::PageContext;

/// Sort orders the `sort` query parameter accepts.
const SORT_OPTIONS: &[&str] = &["price-asc", "price-desc", "rating"];

#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    /// Case-insensitive name search.
    q: Option<String>,
    /// Category filter slug.
    category: Option<String>,
    /// Sort order; anything unrecognized means catalog order.
    sort: Option<String>,
}

/// A filter pill with the live toy count when the bot API provided one.
#[derive(Debug)]
pub struct CategoryPill {
    pub category: Category,
    pub count: Option<u32>,
}

/// Catalog page template.
#[derive(Template, WebTemplate)]
#[template(path = "catalog.html")]
pub struct CatalogTemplate {
    pub ctx: PageContext,
    pub toys: Vec<Toy>,
    pub pills: Vec<CategoryPill>,
    pub active_category: Category,
    pub query: String,
    pub sort: String,
}

/// One pill per local category, carrying counts from the bot database.
///
/// Several remote categories can map onto the same local one, so their
/// counts add up; the "all" pill totals everything. Counts disappear
/// entirely when the categories endpoint was unreachable.
fn build_pills(counts: &[CategoryCount]) -> Vec<CategoryPill> {
    Category::ALL
        .into_iter()
        .map(|category| {
            let count = if category == Category::All {
                counts.iter().map(|c| c.toy_count).fold(0, u32::saturating_add)
            } else {
                counts
                    .iter()
                    .filter(|c| c.category == category)
                    .map(|c| c.toy_count)
                    .fold(0, u32::saturating_add)
            };
            CategoryPill { category, count: (count > 0).then_some(count) }
        })
        .collect()
}

/// Display the catalog with category, search and sort filters applied.
#[instrument(skip(state, session))]
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CatalogQuery>,
) -> CatalogTemplate {
    let active_category = params
        .category
        .as_deref()
        .map_or(Category::All, Category::from_slug);
    let query = params.q.unwrap_or_default().trim().to_string();
    let sort = params
        .sort
        .filter(|sort| SORT_OPTIONS.contains(&sort.as_str()))
        .unwrap_or_default();

    let (catalog, category_counts) =
        tokio::join!(state.bot_api().products(), state.bot_api().categories());
    let needle = query.to_lowercase();
    let mut toys: Vec<Toy> = catalog
        .iter()
        .filter(|toy| active_category == Category::All || toy.category == active_category)
        .filter(|toy| needle.is_empty() || toy.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    match sort.as_str() {
        "price-asc" => toys.sort_by_key(|toy| toy.price),
        "price-desc" => toys.sort_by_key(|toy| std::cmp::Reverse(toy.price)),
        "rating" => toys.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        _ => {}
    }

    let ctx = PageContext::build(&state, &session).await;

    CatalogTemplate {
        ctx,
        toys,
        pills: build_pills(&category_counts),
        active_category,
        query,
        sort,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use toymix_core::CategoryId;

    use super::*;

    fn count(id: i32, category: Category, toy_count: u32) -> CategoryCount {
        CategoryCount { id: CategoryId::new(id), category, toy_count }
    }

    #[test]
    fn test_pills_cover_every_category_without_counts_on_failure() {
        let pills = build_pills(&[]);

        assert_eq!(pills.len(), Category::ALL.len());
        assert!(pills.iter().all(|pill| pill.count.is_none()));
    }

    #[test]
    fn test_pills_sum_remote_categories_sharing_a_local_one() {
        let counts = [
            count(1, Category::Soft, 5),
            count(2, Category::Soft, 3),
            count(3, Category::Tech, 7),
        ];

        let pills = build_pills(&counts);
        let soft = pills.iter().find(|p| p.category == Category::Soft).unwrap();
        let all = pills.iter().find(|p| p.category == Category::All).unwrap();
        let girls = pills.iter().find(|p| p.category == Category::Girls).unwrap();

        assert_eq!(soft.count, Some(8));
        assert_eq!(all.count, Some(15));
        assert_eq!(girls.count, None);
    }
}
