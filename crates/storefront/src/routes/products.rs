//! Product detail route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use tower_sessions::Session;
use tracing::instrument;

use toymix_core::ProductId;

use crate::error::AppError;
use crate::filters;
use crate::models::Toy;
use crate::state::AppState;

use super::PageContext;

/// Similar products shown under the detail page.
const SIMILAR_COUNT: usize = 4;

/// Gallery thumbnails shown on the detail page.
const GALLERY_LIMIT: usize = 8;

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub ctx: PageContext,
    pub toy: Toy,
    pub gallery: Vec<String>,
    pub similar: Vec<Toy>,
}

/// Display a product detail page.
///
/// # Errors
///
/// Returns `AppError::NotFound` when the product exists neither in the
/// cached catalog nor upstream.
#[instrument(skip(state, session))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<ProductShowTemplate, AppError> {
    let id = ProductId::new(id);
    let catalog = state.bot_api().products().await;

    let toy = match catalog.iter().find(|toy| toy.id == id).cloned() {
        Some(toy) => toy,
        None => state
            .bot_api()
            .product(id)
            .await
            .ok_or_else(|| AppError::NotFound(format!("product {id}")))?,
    };

    let gallery: Vec<String> = toy
        .gallery()
        .into_iter()
        .take(GALLERY_LIMIT)
        .map(str::to_string)
        .collect();

    let similar = similar_toys(&catalog, &toy);
    let ctx = PageContext::build(&state, &session).await;

    Ok(ProductShowTemplate {
        ctx,
        toy,
        gallery,
        similar,
    })
}

/// Up to four related toys: same category first, padded with the rest of
/// the catalog, never repeating a toy.
fn similar_toys(catalog: &[Toy], current: &Toy) -> Vec<Toy> {
    let mut similar: Vec<Toy> = catalog
        .iter()
        .filter(|toy| toy.id != current.id && toy.category == current.category)
        .take(SIMILAR_COUNT)
        .cloned()
        .collect();

    if similar.len() < SIMILAR_COUNT {
        let filler: Vec<Toy> = catalog
            .iter()
            .filter(|toy| toy.id != current.id)
            .filter(|toy| similar.iter().all(|seen| seen.id != toy.id))
            .take(SIMILAR_COUNT - similar.len())
            .cloned()
            .collect();
        similar.extend(filler);
    }

    similar
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use toymix_core::{Category, Price};

    use super::*;

    fn toy(id: i32, category: Category) -> Toy {
        Toy {
            id: ProductId::new(id),
            name: format!("O'yinchoq {id}"),
            description: String::new(),
            price: Price::new(100_000),
            category,
            image: String::new(),
            images: Vec::new(),
            rating: 4.5,
            reviews_count: 0,
            age_range: "3+ yosh".to_string(),
            in_stock: 10,
            discount: None,
            colors: Vec::new(),
            is_new: false,
            is_popular: false,
        }
    }

    #[test]
    fn test_same_category_comes_first() {
        let catalog = vec![
            toy(1, Category::Soft),
            toy(2, Category::Tech),
            toy(3, Category::Soft),
            toy(4, Category::Soft),
        ];

        let similar = similar_toys(&catalog, &catalog[0]);
        let ids: Vec<i32> = similar.iter().map(|t| t.id.as_i32()).collect();
        assert_eq!(ids, vec![3, 4, 2]);
    }

    #[test]
    fn test_padding_never_repeats_a_toy() {
        let catalog = vec![
            toy(1, Category::Soft),
            toy(2, Category::Soft),
            toy(3, Category::Tech),
            toy(4, Category::Girls),
            toy(5, Category::Boys),
            toy(6, Category::Tech),
        ];

        let similar = similar_toys(&catalog, &catalog[0]);
        assert_eq!(similar.len(), 4);

        let mut ids: Vec<i32> = similar.iter().map(|t| t.id.as_i32()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 4, "similar list repeated a toy");
        assert!(!ids.contains(&1), "similar list included the toy itself");
    }

    #[test]
    fn test_caps_at_four() {
        let catalog: Vec<Toy> = (1..=8).map(|id| toy(id, Category::Construction)).collect();
        let similar = similar_toys(&catalog, &catalog[0]);
        assert_eq!(similar.len(), 4);
    }

    #[test]
    fn test_small_catalog_yields_what_exists() {
        let catalog = vec![toy(1, Category::Soft), toy(2, Category::Tech)];
        let similar = similar_toys(&catalog, &catalog[0]);
        let ids: Vec<i32> = similar.iter().map(|t| t.id.as_i32()).collect();
        assert_eq!(ids, vec![2]);
    }
}
