//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Formats a price with the so'm currency suffix.
///
/// `Price` displays with space-grouped thousands, so this renders
/// `350 000 so'm`.
///
/// Usage in templates: `{{ toy.price|som }}`
#[askama::filter_fn]
pub fn som(price: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format!("{price} so'm"))
}

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Returns the content hash for main.css.
///
/// The hash is computed at build time from the CSS file content.
///
/// Usage in templates: `{{ ""|css_hash }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn css_hash(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<&'static str> {
    Ok(env!("CSS_HASH"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use toymix_core::Price;

    use super::*;

    #[test]
    fn test_som_groups_thousands() {
        let rendered = som::default().execute(Price::new(350_000), &()).unwrap();
        assert_eq!(rendered, "350 000 so'm");
    }

    #[test]
    fn test_som_zero() {
        let rendered = som::default().execute(Price::ZERO, &()).unwrap();
        assert_eq!(rendered, "0 so'm");
    }
}
