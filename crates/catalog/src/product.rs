use core::str::FromStr;
use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Entity, ProductId, ValueObject};

/// Product category (fixed set; "all" is a filter sentinel, not a category).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Electronics,
    Clothing,
    Home,
    Books,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "electronics",
            Category::Clothing => "clothing",
            Category::Home => "home",
            Category::Books => "books",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "electronics" => Ok(Category::Electronics),
            "clothing" => Ok(Category::Clothing),
            "home" => Ok(Category::Home),
            "books" => Ok(Category::Books),
            other => Err(DomainError::validation(format!(
                "unknown category: {other}"
            ))),
        }
    }
}

/// Star rating in tenths (0..=50, i.e. 0.0 through 5.0 stars).
///
/// Stored as an integer so ordering and equality stay exact.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    pub const MAX_TENTHS: u8 = 50;

    pub fn from_tenths(tenths: u8) -> DomainResult<Self> {
        if tenths > Self::MAX_TENTHS {
            return Err(DomainError::validation(format!(
                "rating must be between 0.0 and 5.0 (got {}.{} stars)",
                tenths / 10,
                tenths % 10
            )));
        }
        Ok(Self(tenths))
    }

    pub const fn tenths(&self) -> u8 {
        self.0
    }
}

impl core::fmt::Display for Rating {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

impl ValueObject for Rating {}

/// Immutable catalog entry.
///
/// Created once at catalog load and never mutated afterwards; the cart
/// snapshots the display fields it needs at add time instead of holding a
/// reference back into the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Price in smallest currency unit (e.g., cents).
    pub price_cents: u64,
    pub category: Category,
    pub description: String,
    pub image: String,
    pub rating: Rating,
    pub in_stock: bool,
}

impl Product {
    /// Validate the record at catalog load.
    ///
    /// Rating and price validity are already enforced by their types; the only
    /// remaining check is a non-empty name.
    pub fn validated(self) -> DomainResult<Self> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        Ok(self)
    }

    /// Check if the product can be added to a cart from the shop view.
    pub fn purchasable(&self) -> bool {
        self.in_stock
    }

    /// Case-insensitive substring match against name or description.
    ///
    /// `needle` must already be lowercased by the caller (the query engine
    /// folds the search term once per query).
    pub(crate) fn matches_search(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(name: &str) -> Product {
        Product {
            id: ProductId::new(1),
            name: name.to_string(),
            price_cents: 19_999,
            category: Category::Electronics,
            description: "Premium wireless headphones with noise cancellation".to_string(),
            image: "https://example.com/p/1.jpg".to_string(),
            rating: Rating::from_tenths(45).unwrap(),
            in_stock: true,
        }
    }

    #[test]
    fn validated_accepts_well_formed_product() {
        let product = test_product("Wireless Headphones").validated().unwrap();
        assert_eq!(product.name, "Wireless Headphones");
    }

    #[test]
    fn validated_rejects_blank_name() {
        let err = test_product("   ").validated().unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for blank name"),
        }
    }

    #[test]
    fn rating_rejects_out_of_range_tenths() {
        let err = Rating::from_tenths(51).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for rating above 5.0"),
        }
    }

    #[test]
    fn rating_displays_as_stars() {
        assert_eq!(Rating::from_tenths(45).unwrap().to_string(), "4.5");
        assert_eq!(Rating::from_tenths(50).unwrap().to_string(), "5.0");
        assert_eq!(Rating::from_tenths(0).unwrap().to_string(), "0.0");
    }

    #[test]
    fn category_round_trips_through_tokens() {
        for token in ["electronics", "clothing", "home", "books"] {
            let category: Category = token.parse().unwrap();
            assert_eq!(category.as_str(), token);
        }
    }

    #[test]
    fn category_rejects_unknown_token() {
        let err = "garden".parse::<Category>().unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for unknown category"),
        }
    }

    #[test]
    fn search_matches_name_and_description_case_insensitively() {
        let product = test_product("Wireless Headphones");
        assert!(product.matches_search("wireless"));
        assert!(product.matches_search("noise cancellation"));
        assert!(!product.matches_search("speaker"));
    }
}
