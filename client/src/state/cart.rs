//! Cart state: the persisted container of purchasable line items.
//!
//! DESIGN
//! ======
//! One line item per distinct id; repeated adds increment the existing line's
//! quantity and keep its original price and title. Totals are derived from
//! the items on every read, so they can never drift from the container.
//! Mutations happen through the methods here; the UI layer calls [`save`]
//! after each one so the localStorage copy always mirrors the container.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use serde::{Deserialize, Serialize};

use crate::util::storage;

/// Storage key for the persisted cart container.
pub const CART_STORAGE_KEY: &str = "filosharp_cart";

/// Identifier for a cart line: catalog products carry numeric ids, customized
/// knives synthesized string ids. Serde-untagged so both round-trip as plain
/// JSON numbers/strings.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LineItemId {
    Product(i64),
    Custom(String),
}

/// One purchasable entry in the cart, unique by id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub id: LineItemId,
    pub title: String,
    /// Unit price, fixed at the time the line was created.
    pub price: f64,
    /// Always at least 1; a line that would reach 0 is removed instead.
    pub quantity: u32,
    pub image: String,
    #[serde(default, rename = "isCustom")]
    pub is_custom: bool,
    /// Human-readable customization summary for customized knives.
    #[serde(default, rename = "customSummary", skip_serializing_if = "Option::is_none")]
    pub custom_summary: Option<String>,
}

/// A line item before it enters the cart (no quantity yet).
#[derive(Clone, Debug, PartialEq)]
pub struct NewLineItem {
    pub id: LineItemId,
    pub title: String,
    pub price: f64,
    pub image: String,
    pub is_custom: bool,
    pub custom_summary: Option<String>,
}

/// The cart container: line items in insertion order plus derived totals.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CartState {
    pub items: Vec<CartLineItem>,
}

impl CartState {
    /// Add one unit of `item`. An existing line with the same id is
    /// incremented; its stored price and title win over the incoming ones.
    pub fn add_item(&mut self, item: NewLineItem) {
        if let Some(existing) = self.items.iter_mut().find(|line| line.id == item.id) {
            existing.quantity += 1;
            return;
        }
        self.items.push(CartLineItem {
            id: item.id,
            title: item.title,
            price: item.price,
            quantity: 1,
            image: item.image,
            is_custom: item.is_custom,
            custom_summary: item.custom_summary,
        });
    }

    /// Set a line's quantity directly. Zero removes the line; absent ids are
    /// no-ops.
    pub fn update_quantity(&mut self, id: &LineItemId, quantity: u32) {
        if quantity == 0 {
            self.remove_item(id);
            return;
        }
        if let Some(line) = self.items.iter_mut().find(|line| &line.id == id) {
            line.quantity = quantity;
        }
    }

    /// Delete the line with the given id; no-op when absent.
    pub fn remove_item(&mut self, id: &LineItemId) {
        self.items.retain(|line| &line.id != id);
    }

    /// Empty the container, e.g. on checkout completion.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of all quantities.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    /// Sum of quantity × unit price over all lines.
    #[must_use]
    pub fn total_price(&self) -> f64 {
        self.items
            .iter()
            .map(|line| line.price * f64::from(line.quantity))
            .sum()
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Load the persisted cart, treating missing or malformed data as empty.
#[must_use]
pub fn load() -> CartState {
    storage::load_json(CART_STORAGE_KEY).unwrap_or_default()
}

/// Persist the cart; called after every mutation.
pub fn save(state: &CartState) {
    storage::save_json(CART_STORAGE_KEY, state);
}
