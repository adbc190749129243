//! Sales flow tests
//!
//! Covers the cart accumulator and the sale side of the committer:
//! - Merge-on-add: one line per product, repeated adds increment quantity
//! - Stock guards at add time and quantity-change time
//! - All-or-nothing commit and the clamp-at-zero stock invariant
//! - Snapshot decoupling: committed sales ignore later product edits

use proptest::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use engine::{NewProduct, PosError, PosStore, ProductUpdate};
use shared::types::Category;

// Helper to create Decimal from string
fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn new_product(name: &str, price: &str, stock: u32) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        description: String::new(),
        category: Category::Beverages,
        unit_price: dec(price),
        unit_cost: None,
        stock,
    }
}

/// Store stocked with the core menu used across these tests
fn store_with_menu() -> PosStore {
    let mut store = PosStore::default();
    store
        .add_product(new_product("Café Americano", "2.50", 50))
        .unwrap();
    store
        .add_product(new_product("Cappuccino", "3.00", 30))
        .unwrap();
    store
        .add_product(new_product("Cheesecake", "5.25", 2))
        .unwrap();
    store
}

fn product_id(store: &PosStore, name: &str) -> uuid::Uuid {
    store
        .products()
        .iter()
        .find(|p| p.name == name)
        .map(|p| p.id)
        .unwrap()
}

fn stock_of(store: &PosStore, name: &str) -> u32 {
    store
        .products()
        .iter()
        .find(|p| p.name == name)
        .map(|p| p.stock)
        .unwrap()
}

// ============================================================================
// Cart Accumulator Tests
// ============================================================================

#[cfg(test)]
mod cart_tests {
    use super::*;

    #[test]
    fn test_repeated_adds_merge_into_one_line() {
        let mut store = store_with_menu();
        let id = product_id(&store, "Café Americano");

        store.add_to_cart(id).unwrap();
        store.add_to_cart(id).unwrap();

        assert_eq!(store.cart().len(), 1);
        let line = &store.cart().items()[0];
        assert_eq!(line.quantity, 2);
        assert_eq!(line.subtotal, dec("5.00"));
    }

    #[test]
    fn test_add_rejected_beyond_stock() {
        let mut store = store_with_menu();
        let id = product_id(&store, "Cheesecake"); // stock 2

        store.add_to_cart(id).unwrap();
        store.add_to_cart(id).unwrap();
        let err = store.add_to_cart(id).unwrap_err();

        assert!(matches!(err, PosError::InsufficientStock { .. }));
        // Cart unchanged by the rejected add
        assert_eq!(store.cart().items()[0].quantity, 2);
        // And the ledger was never touched
        assert_eq!(stock_of(&store, "Cheesecake"), 2);
    }

    #[test]
    fn test_add_out_of_stock_product_rejected() {
        let mut store = PosStore::default();
        let product = store.add_product(new_product("Croissant", "2.75", 0)).unwrap();

        let err = store.add_to_cart(product.id).unwrap_err();
        assert!(matches!(err, PosError::InsufficientStock { available: 0, .. }));
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_add_unknown_product_not_found() {
        let mut store = store_with_menu();
        let err = store.add_to_cart(uuid::Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, PosError::NotFound(_)));
    }

    #[test]
    fn test_change_quantity_recomputes_subtotal() {
        let mut store = store_with_menu();
        let id = product_id(&store, "Cappuccino");

        store.add_to_cart(id).unwrap();
        store.change_cart_quantity(id, 3).unwrap();

        let line = &store.cart().items()[0];
        assert_eq!(line.quantity, 4);
        assert_eq!(line.subtotal, dec("12.00"));
    }

    #[test]
    fn test_change_quantity_to_zero_removes_line() {
        let mut store = store_with_menu();
        let id = product_id(&store, "Café Americano");

        store.add_to_cart(id).unwrap();
        store.change_cart_quantity(id, -1).unwrap();
        assert!(store.cart().is_empty());

        // Going below zero also removes
        store.add_to_cart(id).unwrap();
        store.change_cart_quantity(id, -5).unwrap();
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_change_quantity_rejected_beyond_stock() {
        let mut store = store_with_menu();
        let id = product_id(&store, "Cheesecake"); // stock 2

        store.add_to_cart(id).unwrap();
        let err = store.change_cart_quantity(id, 5).unwrap_err();

        assert!(matches!(err, PosError::InsufficientStock { .. }));
        // Rejected change leaves the cart as it was
        assert_eq!(store.cart().items()[0].quantity, 1);
    }

    #[test]
    fn test_change_quantity_for_product_not_in_cart_is_noop() {
        let mut store = store_with_menu();
        let id = product_id(&store, "Cappuccino");

        store.change_cart_quantity(id, 2).unwrap();
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_remove_item_unconditional() {
        let mut store = store_with_menu();
        let id = product_id(&store, "Café Americano");

        store.add_to_cart(id).unwrap();
        store.add_to_cart(id).unwrap();
        store.remove_from_cart(id);
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_clear_cart_leaves_ledger_untouched() {
        let mut store = store_with_menu();
        let id = product_id(&store, "Café Americano");

        store.add_to_cart(id).unwrap();
        store.add_to_cart(id).unwrap();
        store.clear_cart();

        assert!(store.cart().is_empty());
        assert_eq!(stock_of(&store, "Café Americano"), 50);
        assert!(store.sales().is_empty());
    }

    #[test]
    fn test_cart_total_sums_lines() {
        let mut store = store_with_menu();
        let americano = product_id(&store, "Café Americano");
        let cappuccino = product_id(&store, "Cappuccino");

        store.add_to_cart(americano).unwrap();
        store.add_to_cart(americano).unwrap();
        store.add_to_cart(cappuccino).unwrap();

        // 2 x 2.50 + 1 x 3.00
        assert_eq!(store.cart().total(), dec("8.00"));
    }
}

// ============================================================================
// Sale Commit Tests
// ============================================================================

#[cfg(test)]
mod commit_tests {
    use super::*;

    #[test]
    fn test_commit_empty_cart_rejected() {
        let mut store = store_with_menu();
        let err = store.commit_sale().unwrap_err();
        assert!(matches!(err, PosError::EmptyCart));
        assert!(store.sales().is_empty());
    }

    #[test]
    fn test_commit_sale_decrements_stock_and_clears_cart() {
        let mut store = store_with_menu();
        let id = product_id(&store, "Café Americano");

        store.add_to_cart(id).unwrap();
        store.add_to_cart(id).unwrap();
        let sale = store.commit_sale().unwrap();

        assert_eq!(sale.total, dec("5.00"));
        assert_eq!(sale.items.len(), 1);
        assert_eq!(sale.items[0].quantity, 2);
        assert_eq!(stock_of(&store, "Café Americano"), 48);
        assert!(store.cart().is_empty());
        assert_eq!(store.sales().len(), 1);
    }

    #[test]
    fn test_sale_ids_are_monotonic() {
        let mut store = store_with_menu();
        let id = product_id(&store, "Cappuccino");

        store.add_to_cart(id).unwrap();
        let first = store.commit_sale().unwrap();
        store.add_to_cart(id).unwrap();
        let second = store.commit_sale().unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn test_commit_all_or_nothing_when_stock_shrank() {
        let mut store = store_with_menu();
        let americano = product_id(&store, "Café Americano");
        let cappuccino = product_id(&store, "Cappuccino");

        store.add_to_cart(americano).unwrap();
        store.add_to_cart(americano).unwrap();
        store.add_to_cart(cappuccino).unwrap();

        // Stock edited underneath the cart
        store
            .update_product(
                americano,
                ProductUpdate {
                    stock: Some(1),
                    ..Default::default()
                },
            )
            .unwrap();

        let err = store.commit_sale().unwrap_err();
        assert!(matches!(err, PosError::InsufficientStock { .. }));

        // Nothing moved: no partial decrement, no record, cart intact
        assert_eq!(stock_of(&store, "Café Americano"), 1);
        assert_eq!(stock_of(&store, "Cappuccino"), 30);
        assert!(store.sales().is_empty());
        assert_eq!(store.cart().len(), 2);
    }

    #[test]
    fn test_committed_sale_ignores_later_product_edits() {
        let mut store = store_with_menu();
        let id = product_id(&store, "Café Americano");

        store.add_to_cart(id).unwrap();
        let sale = store.commit_sale().unwrap();

        store
            .update_product(
                id,
                ProductUpdate {
                    name: Some("Americano Doble".to_string()),
                    unit_price: Some(dec("9.99")),
                    ..Default::default()
                },
            )
            .unwrap();

        let recorded = &store.sales()[0];
        assert_eq!(recorded.items[0].name, "Café Americano");
        assert_eq!(recorded.items[0].unit_price, dec("2.50"));
        assert_eq!(recorded.total, sale.total);
    }

    #[test]
    fn test_committed_sale_survives_product_deletion() {
        let mut store = store_with_menu();
        let id = product_id(&store, "Cappuccino");

        store.add_to_cart(id).unwrap();
        store.commit_sale().unwrap();
        store.remove_product(id).unwrap();

        assert_eq!(store.sales()[0].items[0].name, "Cappuccino");
    }

    #[test]
    fn test_line_for_deleted_product_does_not_block_commit() {
        let mut store = store_with_menu();
        let id = product_id(&store, "Cheesecake");

        store.add_to_cart(id).unwrap();
        store.remove_product(id).unwrap();

        // The line commits as a snapshot; its decrement matches nothing
        let sale = store.commit_sale().unwrap();
        assert_eq!(sale.items[0].name, "Cheesecake");
        assert_eq!(store.sales().len(), 1);
    }

    #[test]
    fn test_delete_sale_does_not_restock() {
        let mut store = store_with_menu();
        let id = product_id(&store, "Café Americano");

        store.add_to_cart(id).unwrap();
        store.add_to_cart(id).unwrap();
        let sale = store.commit_sale().unwrap();
        assert_eq!(stock_of(&store, "Café Americano"), 48);

        store.delete_sale(sale.id).unwrap();
        assert!(store.sales().is_empty());
        // No reversal path for sales
        assert_eq!(stock_of(&store, "Café Americano"), 48);

        let err = store.delete_sale(sale.id).unwrap_err();
        assert!(matches!(err, PosError::NotFound(_)));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    /// Strategy for prices in cents, 0.01 to 100.00
    fn price_strategy() -> impl Strategy<Value = Decimal> {
        (1i64..=10000i64).prop_map(|n| Decimal::new(n, 2))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Repeated adds accumulate into one line, capped at stock
        #[test]
        fn prop_adds_merge_and_cap_at_stock(stock in 1u32..50, attempts in 1u32..120) {
            let mut store = PosStore::default();
            let product = store
                .add_product(new_product("Café Americano", "2.50", stock))
                .unwrap();

            let mut rejected = 0u32;
            for _ in 0..attempts {
                if store.add_to_cart(product.id).is_err() {
                    rejected += 1;
                }
            }

            let expected = attempts.min(stock);
            prop_assert_eq!(store.cart().len(), 1);
            prop_assert_eq!(store.cart().items()[0].quantity, expected);
            prop_assert_eq!(rejected, attempts - expected);
        }

        /// Cart total always equals the sum of line subtotals
        #[test]
        fn prop_cart_total_is_sum_of_subtotals(
            lines in prop::collection::vec((price_strategy(), 1u32..20), 1..5)
        ) {
            let mut store = PosStore::default();
            let mut expected = Decimal::ZERO;
            for (i, (price, quantity)) in lines.iter().enumerate() {
                let product = store
                    .add_product(NewProduct {
                        name: format!("Product {}", i),
                        description: String::new(),
                        category: Category::Other,
                        unit_price: *price,
                        unit_cost: None,
                        stock: *quantity,
                    })
                    .unwrap();
                for _ in 0..*quantity {
                    store.add_to_cart(product.id).unwrap();
                }
                expected += *price * Decimal::from(*quantity);
            }
            prop_assert_eq!(store.cart().total(), expected);
        }

        /// Committing conserves stock: initial = remaining + sold
        #[test]
        fn prop_commit_conserves_stock(stock in 1u32..60, wanted in 1u32..80) {
            let mut store = PosStore::default();
            let product = store
                .add_product(new_product("Cappuccino", "3.00", stock))
                .unwrap();

            for _ in 0..wanted {
                let _ = store.add_to_cart(product.id);
            }
            let sold = wanted.min(stock);
            let sale = store.commit_sale().unwrap();

            prop_assert_eq!(sale.items[0].quantity, sold);
            prop_assert_eq!(sale.total, dec("3.00") * Decimal::from(sold));
            prop_assert_eq!(store.products()[0].stock, stock - sold);
        }
    }
}
