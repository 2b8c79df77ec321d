//! DTOs for the hosted JSON-document product store.
//!
//! DESIGN
//! ======
//! The backing store is a single JSON document ("bin") fetched and rewritten
//! wholesale. These types mirror the document layout exactly so reads stay
//! lossless: older bins stored a bare product array, newer ones wrap it in
//! `{ "products": [...] }`, and reads must accept both.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A catalog product as stored in the bin document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Numeric product id, assigned on creation (`max existing + 1`).
    pub id: i64,
    /// Display title.
    pub title: String,
    /// Long-form description.
    #[serde(default)]
    pub description: String,
    /// Unit price.
    pub price: f64,
    /// Primary image URL.
    #[serde(default)]
    pub image1: String,
    /// Secondary image URL, possibly empty.
    #[serde(default)]
    pub image2: String,
    /// Category facet used by the shop filters.
    #[serde(default)]
    pub category: String,
    /// Material facet used by the shop filters.
    #[serde(default)]
    pub material: String,
    /// Knife-type facet used by the shop filters. Stored as `type` in JSON.
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// Product fields without an id, as edited in the admin form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub image1: String,
    #[serde(default)]
    pub image2: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub material: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl ProductDraft {
    /// Attach an id, producing a storable product.
    #[must_use]
    pub fn with_id(&self, id: i64) -> Product {
        Product {
            id,
            title: self.title.clone(),
            description: self.description.clone(),
            price: self.price,
            image1: self.image1.clone(),
            image2: self.image2.clone(),
            category: self.category.clone(),
            material: self.material.clone(),
            kind: self.kind.clone(),
        }
    }

    /// Seed the form from an existing product.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            description: product.description.clone(),
            price: product.price,
            image1: product.image1.clone(),
            image2: product.image2.clone(),
            category: product.category.clone(),
            material: product.material.clone(),
            kind: product.kind.clone(),
        }
    }
}

/// Read envelope returned by the bin service: `{ "record": ... }`.
#[derive(Debug, Clone, Deserialize)]
pub struct BinReadResponse {
    pub record: BinRecord,
}

/// The stored document: either `{ "products": [...] }` or a bare array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BinRecord {
    Wrapped { products: Vec<Product> },
    Bare(Vec<Product>),
}

impl BinRecord {
    /// Flatten either layout into the product list.
    #[must_use]
    pub fn into_products(self) -> Vec<Product> {
        match self {
            Self::Wrapped { products } | Self::Bare(products) => products,
        }
    }
}
