//! Scripted walkthrough of the storefront session.
//!
//! Runs a short search/filter/cart interaction against the seed catalog and
//! prints the resulting state. Useful as a smoke check and as a usage example.

use storefront_cart::{CartEvent, QuantitySet};
use storefront_catalog::{CategoryFilter, SortKey};
use storefront_core::ProductId;
use storefront_shop::{Session, seed_catalog};

fn cents(amount: u64) -> String {
    format!("${}.{:02}", amount / 100, amount % 100)
}

fn print_visible(session: &Session) {
    for product in session.visible_products() {
        println!(
            "  [{}] {} — {} ({}, {} stars{})",
            product.id,
            product.name,
            cents(product.price_cents),
            product.category,
            product.rating,
            if product.in_stock { "" } else { ", out of stock" },
        );
    }
}

fn main() -> anyhow::Result<()> {
    storefront_observability::init();

    let mut session = Session::new(seed_catalog()?);

    println!("Catalog, cheapest first:");
    session.set_sort(SortKey::PriceAsc);
    print_visible(&session);

    println!("\nElectronics matching \"wireless\":");
    session.set_category("electronics".parse::<CategoryFilter>()?);
    session.set_search_term("wireless");
    print_visible(&session);

    let headphones = ProductId::new(1);
    session.add_to_cart(headphones);
    session.add_to_cart(headphones);
    session.add_to_cart(ProductId::new(3));
    session.dispatch(CartEvent::QuantitySet(QuantitySet {
        product_id: ProductId::new(3),
        quantity: 3,
        occurred_at: chrono::Utc::now(),
    }));

    println!("\nCart:");
    for line in session.cart().lines() {
        println!(
            "  {} x{} — {}",
            line.name,
            line.quantity,
            cents(line.line_total())
        );
    }
    println!(
        "  {} items, total {}",
        session.cart_item_count(),
        cents(session.cart_total())
    );

    Ok(())
}
