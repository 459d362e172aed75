//! Seed catalog: the fixed product list the shop is loaded with.

use storefront_catalog::{Category, Product, Rating};
use storefront_core::{DomainResult, ProductId};

fn product(
    id: u64,
    name: &str,
    price_cents: u64,
    category: Category,
    description: &str,
    image: &str,
    rating_tenths: u8,
    in_stock: bool,
) -> DomainResult<Product> {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        price_cents,
        category,
        description: description.to_string(),
        image: image.to_string(),
        rating: Rating::from_tenths(rating_tenths)?,
        in_stock,
    }
    .validated()
}

/// The demo catalog, in seed order (the order ties are broken by).
pub fn seed_catalog() -> DomainResult<Vec<Product>> {
    Ok(vec![
        product(
            1,
            "Wireless Headphones",
            19_999,
            Category::Electronics,
            "Premium wireless headphones with noise cancellation",
            "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=400&h=300&fit=crop",
            45,
            true,
        )?,
        product(
            2,
            "Smart Watch",
            29_999,
            Category::Electronics,
            "Advanced fitness tracking and notifications",
            "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=400&h=300&fit=crop",
            43,
            true,
        )?,
        product(
            3,
            "Cotton T-Shirt",
            2_999,
            Category::Clothing,
            "Comfortable 100% cotton t-shirt",
            "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=400&h=300&fit=crop",
            47,
            true,
        )?,
        product(
            4,
            "Coffee Maker",
            14_999,
            Category::Home,
            "Programmable coffee maker with thermal carafe",
            "https://images.unsplash.com/photo-1495474472287-4d71bcdd2085?w=400&h=300&fit=crop",
            42,
            false,
        )?,
        product(
            5,
            "JavaScript Guide",
            3_999,
            Category::Books,
            "Complete guide to modern JavaScript development",
            "https://images.unsplash.com/photo-1544947950-fa07a98d237f?w=400&h=300&fit=crop",
            48,
            true,
        )?,
        product(
            6,
            "Bluetooth Speaker",
            7_999,
            Category::Electronics,
            "Portable speaker with excellent sound quality",
            "https://images.unsplash.com/photo-1608043152269-423dbba4e7e1?w=400&h=300&fit=crop",
            44,
            true,
        )?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_catalog_is_well_formed() {
        let catalog = seed_catalog().unwrap();
        assert_eq!(catalog.len(), 6);

        // Ids are unique.
        for (i, p) in catalog.iter().enumerate() {
            assert!(!catalog[..i].iter().any(|q| q.id == p.id));
        }
    }

    #[test]
    fn coffee_maker_is_out_of_stock() {
        let catalog = seed_catalog().unwrap();
        let coffee_maker = catalog.iter().find(|p| p.name == "Coffee Maker").unwrap();
        assert!(!coffee_maker.purchasable());
    }
}
