use core::str::FromStr;
use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, ValueObject};

use crate::product::{Category, Product};

/// Category filter: everything, or exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(CategoryFilter::All);
        }
        Category::from_str(s).map(CategoryFilter::Only)
    }
}

/// Sort order for the visible product list.
///
/// Tokens match the UI select values; anything unrecognized falls back to the
/// name sort, which is also the default when no key is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    #[serde(rename = "name")]
    NameAsc,
    #[serde(rename = "price-low")]
    PriceAsc,
    #[serde(rename = "price-high")]
    PriceDesc,
    #[serde(rename = "rating")]
    RatingDesc,
}

impl SortKey {
    /// Total parse: unknown tokens default to `NameAsc` rather than failing.
    pub fn parse(token: &str) -> Self {
        match token {
            "price-low" => SortKey::PriceAsc,
            "price-high" => SortKey::PriceDesc,
            "rating" => SortKey::RatingDesc,
            _ => SortKey::NameAsc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::NameAsc => "name",
            SortKey::PriceAsc => "price-low",
            SortKey::PriceDesc => "price-high",
            SortKey::RatingDesc => "rating",
        }
    }
}

/// The tuple of search term, category filter, and sort key that determines
/// the visible product subset and order. Ephemeral; recomputed per change.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CatalogQuery {
    pub search_term: String,
    pub category: CategoryFilter,
    pub sort: SortKey,
}

impl ValueObject for CatalogQuery {}

/// Filtered, sorted view of the catalog.
///
/// A product matches iff the category filter passes and, when the search term
/// is non-empty, the lowercased term is a substring of the lowercased name or
/// description. Case folding uses Unicode simple case mapping
/// (`str::to_lowercase`); name ordering compares lowercased keys by code
/// point. All sorts are stable, so ties keep their catalog order.
///
/// Returns a new `Vec`; the input catalog is never reordered. An empty result
/// is a normal value, not an error.
pub fn query(catalog: &[Product], q: &CatalogQuery) -> Vec<Product> {
    let needle = q.search_term.to_lowercase();

    let mut hits: Vec<Product> = catalog
        .iter()
        .filter(|p| q.category.matches(p.category))
        .filter(|p| needle.is_empty() || p.matches_search(&needle))
        .cloned()
        .collect();

    match q.sort {
        SortKey::NameAsc => hits.sort_by_cached_key(|p| p.name.to_lowercase()),
        SortKey::PriceAsc => hits.sort_by_key(|p| p.price_cents),
        SortKey::PriceDesc => hits.sort_by(|a, b| b.price_cents.cmp(&a.price_cents)),
        SortKey::RatingDesc => hits.sort_by(|a, b| b.rating.cmp(&a.rating)),
    }

    hits
}
