//! A scripted day at the register
//!
//! Run with `RUST_LOG=engine=debug cargo run --example register_demo` to
//! watch the engine's structured events alongside the printed receipts.

use engine::{NewProduct, PosConfig, PosStore, PurchaseInput};
use rust_decimal::Decimal;
use shared::types::Category;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut store = PosStore::new(PosConfig::default());
    let currency = store.config().currency.clone();

    // Stock the menu
    let americano = store.add_product(NewProduct {
        name: "Café Americano".to_string(),
        description: "Café negro tradicional aromático".to_string(),
        category: Category::Beverages,
        unit_price: Decimal::new(250, 2),
        unit_cost: Some(Decimal::new(90, 2)),
        stock: 50,
    })?;
    let brownie = store.add_product(NewProduct {
        name: "Brownie".to_string(),
        description: "Brownie de chocolate con nueces".to_string(),
        category: Category::Desserts,
        unit_price: Decimal::new(400, 2),
        unit_cost: None,
        stock: 18,
    })?;

    // Ring up two americanos and a brownie
    store.add_to_cart(americano.id)?;
    store.add_to_cart(americano.id)?;
    store.add_to_cart(brownie.id)?;
    println!("Cart total: {}{}", currency, store.cart().total());

    let sale = store.commit_sale()?;
    println!("Sale #{} committed for {}{}", sale.id, currency, sale.total);

    // Restock from a supplier, then take the delivery back
    let purchase = store.commit_purchase(PurchaseInput {
        supplier: Some("Finca La Loma".to_string()),
        product: "Café Americano".to_string(),
        quantity: 10,
        unit_cost: Some(Decimal::new(120, 2)),
    })?;
    println!(
        "Purchase of {} x{} for {}{}",
        purchase.product, purchase.quantity, currency, purchase.total
    );
    store.delete_purchase(purchase.id)?;

    let summary = store.summary();
    println!(
        "Revenue {}{}, costs {}{}, net {}{} ({}% margin)",
        currency,
        summary.total_revenue,
        currency,
        summary.total_costs,
        currency,
        summary.net_profit,
        summary.profit_margin
    );
    for product in store.low_stock() {
        println!("Low stock: {} ({} left)", product.name, product.stock);
    }

    Ok(())
}
