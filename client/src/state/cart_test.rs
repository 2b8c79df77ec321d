#![allow(clippy::float_cmp)]

use super::*;

fn knife(id: i64, price: f64) -> NewLineItem {
    NewLineItem {
        id: LineItemId::Product(id),
        title: format!("Cuchillo {id}"),
        price,
        image: "https://example.com/knife.jpg".to_owned(),
        is_custom: false,
        custom_summary: None,
    }
}

fn custom_knife(id: &str, price: f64) -> NewLineItem {
    NewLineItem {
        id: LineItemId::Custom(id.to_owned()),
        title: "Cuchillo Chef Personalizado".to_owned(),
        price,
        image: "https://example.com/custom.jpg".to_owned(),
        is_custom: true,
        custom_summary: Some("Cuchillo chef | Hoja: steel 20cm | Mango: wood".to_owned()),
    }
}

// =============================================================
// add_item
// =============================================================

#[test]
fn first_add_inserts_with_quantity_one() {
    let mut cart = CartState::default();
    cart.add_item(knife(1, 450.0));

    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].quantity, 1);
}

#[test]
fn repeated_add_increments_quantity() {
    let mut cart = CartState::default();
    cart.add_item(knife(1, 100.0));
    cart.add_item(knife(1, 100.0));

    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].quantity, 2);
    assert_eq!(cart.total_items(), 2);
    assert_eq!(cart.total_price(), 200.0);
}

#[test]
fn repeated_add_keeps_original_price_and_title() {
    let mut cart = CartState::default();
    cart.add_item(knife(1, 450.0));

    let mut repriced = knife(1, 999.0);
    repriced.title = "Renombrado".to_owned();
    cart.add_item(repriced);

    assert_eq!(cart.items[0].price, 450.0);
    assert_eq!(cart.items[0].title, "Cuchillo 1");
    assert_eq!(cart.total_price(), 900.0);
}

#[test]
fn distinct_ids_get_distinct_lines() {
    let mut cart = CartState::default();
    cart.add_item(knife(1, 450.0));
    cart.add_item(knife(2, 320.0));

    assert_eq!(cart.items.len(), 2);
    assert_eq!(cart.total_items(), 2);
    assert_eq!(cart.total_price(), 770.0);
}

#[test]
fn numeric_and_custom_ids_never_collide() {
    let mut cart = CartState::default();
    cart.add_item(knife(1, 450.0));
    cart.add_item(custom_knife("custom-knife-1", 1045.0));

    assert_eq!(cart.items.len(), 2);
    assert!(cart.items[1].is_custom);
    assert!(cart.items[1].custom_summary.is_some());
}

#[test]
fn insertion_order_is_preserved() {
    let mut cart = CartState::default();
    cart.add_item(knife(3, 1.0));
    cart.add_item(knife(1, 1.0));
    cart.add_item(knife(2, 1.0));

    let ids: Vec<_> = cart.items.iter().map(|line| line.id.clone()).collect();
    assert_eq!(
        ids,
        vec![LineItemId::Product(3), LineItemId::Product(1), LineItemId::Product(2)]
    );
}

// =============================================================
// update_quantity
// =============================================================

#[test]
fn update_quantity_sets_directly() {
    let mut cart = CartState::default();
    cart.add_item(knife(1, 100.0));
    cart.update_quantity(&LineItemId::Product(1), 5);

    assert_eq!(cart.items[0].quantity, 5);
    assert_eq!(cart.total_items(), 5);
    assert_eq!(cart.total_price(), 500.0);
}

#[test]
fn update_quantity_zero_removes_the_line() {
    let mut cart = CartState::default();
    cart.add_item(knife(1, 100.0));
    cart.update_quantity(&LineItemId::Product(1), 0);

    assert!(cart.is_empty());
    assert_eq!(cart.total_items(), 0);
    assert_eq!(cart.total_price(), 0.0);
}

#[test]
fn update_quantity_zero_equals_remove_item() {
    let mut by_update = CartState::default();
    by_update.add_item(knife(1, 100.0));
    by_update.add_item(knife(2, 50.0));
    by_update.update_quantity(&LineItemId::Product(1), 0);

    let mut by_remove = CartState::default();
    by_remove.add_item(knife(1, 100.0));
    by_remove.add_item(knife(2, 50.0));
    by_remove.remove_item(&LineItemId::Product(1));

    assert_eq!(by_update, by_remove);
}

#[test]
fn update_quantity_unknown_id_is_noop() {
    let mut cart = CartState::default();
    cart.add_item(knife(1, 100.0));
    cart.update_quantity(&LineItemId::Product(99), 3);

    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].quantity, 1);
}

// =============================================================
// remove_item / clear
// =============================================================

#[test]
fn remove_item_deletes_only_the_matching_line() {
    let mut cart = CartState::default();
    cart.add_item(knife(1, 100.0));
    cart.add_item(knife(2, 50.0));
    cart.remove_item(&LineItemId::Product(1));

    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].id, LineItemId::Product(2));
}

#[test]
fn remove_absent_id_is_noop() {
    let mut cart = CartState::default();
    cart.add_item(knife(1, 100.0));
    cart.remove_item(&LineItemId::Product(42));

    assert_eq!(cart.items.len(), 1);
}

#[test]
fn clear_empties_the_container() {
    let mut cart = CartState::default();
    cart.add_item(knife(1, 100.0));
    cart.add_item(custom_knife("custom-knife-9", 800.0));
    cart.clear();

    assert!(cart.is_empty());
    assert_eq!(cart.total_items(), 0);
    assert_eq!(cart.total_price(), 0.0);
}

// =============================================================
// Totals
// =============================================================

#[test]
fn totals_track_arbitrary_add_sequences() {
    let mut cart = CartState::default();
    cart.add_item(knife(1, 450.0));
    cart.add_item(knife(2, 320.0));
    cart.add_item(knife(1, 450.0));
    cart.add_item(knife(1, 450.0));
    cart.add_item(knife(2, 320.0));

    let expected_items: u32 = cart.items.iter().map(|line| line.quantity).sum();
    let expected_price: f64 = cart
        .items
        .iter()
        .map(|line| line.price * f64::from(line.quantity))
        .sum();

    assert_eq!(cart.total_items(), expected_items);
    assert_eq!(cart.total_items(), 5);
    assert_eq!(cart.total_price(), expected_price);
    assert_eq!(cart.total_price(), 3.0 * 450.0 + 2.0 * 320.0);
}

// =============================================================
// Persistence round-trip
// =============================================================

#[test]
fn serde_round_trip_preserves_lines_and_totals() {
    let mut cart = CartState::default();
    cart.add_item(knife(1, 450.0));
    cart.add_item(knife(1, 450.0));
    cart.add_item(custom_knife("custom-knife-1700000000000", 1045.0));

    let json = serde_json::to_string(&cart).unwrap();
    let restored: CartState = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, cart);
    assert_eq!(restored.total_items(), cart.total_items());
    assert_eq!(restored.total_price(), cart.total_price());
}

#[test]
fn line_ids_round_trip_as_plain_json_values() {
    let mut cart = CartState::default();
    cart.add_item(knife(7, 10.0));
    cart.add_item(custom_knife("custom-knife-1", 20.0));

    let json = serde_json::to_value(&cart).unwrap();
    assert_eq!(json["items"][0]["id"], 7);
    assert_eq!(json["items"][1]["id"], "custom-knife-1");
    assert_eq!(json["items"][1]["isCustom"], true);
}

#[test]
fn malformed_blob_loads_as_empty() {
    // `load` goes through storage (a no-op off-browser); the fail-soft
    // contract is that malformed JSON deserializes to None upstream.
    let parsed: Option<CartState> = serde_json::from_str("not json").ok();
    assert!(parsed.is_none());
    assert!(load().is_empty());
}
