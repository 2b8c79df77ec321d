//! HTTP client for the hosted JSON-document product store.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since the bin is only reachable
//! from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics; messages are
//! user-facing storefront copy surfaced in retryable error banners. Nothing
//! here retries: every recovery is user-initiated.
//!
//! CONCURRENCY
//! ===========
//! The bin has no partial-update API. Every mutation reads the full document,
//! transforms it, and writes the full document back — last writer wins.
//! Concurrent admin sessions are an accepted non-requirement.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Product, ProductDraft};
#[cfg(feature = "hydrate")]
use super::types::{BinReadResponse, BinRecord};

/// Bin service root.
#[cfg(any(test, feature = "hydrate"))]
const JSONBIN_BASE_URL: &str = "https://api.jsonbin.io/v3";

/// Bin id holding the product document; overridable at build time.
#[cfg(any(test, feature = "hydrate"))]
const BIN_ID: &str = match option_env!("FILOSHARP_BIN_ID") {
    Some(id) => id,
    None => "6833275d8960c979a5a0ecf0",
};

/// Bin access key; empty builds target a public read-only bin.
#[cfg(feature = "hydrate")]
const MASTER_KEY: &str = match option_env!("FILOSHARP_BIN_KEY") {
    Some(key) => key,
    None => "",
};

#[cfg(any(test, feature = "hydrate"))]
fn read_url() -> String {
    format!("{JSONBIN_BASE_URL}/b/{BIN_ID}/latest")
}

#[cfg(any(test, feature = "hydrate"))]
fn write_url() -> String {
    format!("{JSONBIN_BASE_URL}/b/{BIN_ID}")
}

#[cfg(any(test, feature = "hydrate"))]
fn fetch_failed_message(status: u16) -> String {
    format!("Error al obtener productos ({status})")
}

#[cfg(any(test, feature = "hydrate"))]
fn update_failed_message(status: u16) -> String {
    format!("Error al actualizar datos ({status})")
}

/// Id for a newly created product: one past the highest existing id, starting
/// at 1 for an empty catalog.
#[cfg(any(test, feature = "hydrate"))]
fn next_product_id(products: &[Product]) -> i64 {
    products.iter().map(|p| p.id).max().map_or(1, |max| max + 1)
}

/// Fetch the full product list from the bin.
///
/// # Errors
///
/// Returns a user-facing message if the request fails or the document cannot
/// be parsed.
pub async fn fetch_products() -> Result<Vec<Product>, String> {
    #[cfg(feature = "hydrate")]
    {
        let mut request = gloo_net::http::Request::get(&read_url());
        if !MASTER_KEY.is_empty() {
            request = request.header("X-Master-Key", MASTER_KEY);
        }
        let resp = request.send().await.map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(fetch_failed_message(resp.status()));
        }
        let body: BinReadResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.record.into_products())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch a single product by id. Absent ids are `Ok(None)`, rendered as the
/// dedicated not-found view — never an error.
///
/// # Errors
///
/// Returns a user-facing message if the underlying fetch fails.
pub async fn fetch_product(id: i64) -> Result<Option<Product>, String> {
    let products = fetch_products().await?;
    Ok(products.into_iter().find(|p| p.id == id))
}

/// Rewrite the bin document wholesale with the given product list.
#[cfg(feature = "hydrate")]
async fn replace_bin(products: Vec<Product>) -> Result<(), String> {
    let payload = BinRecord::Wrapped { products };
    let mut request = gloo_net::http::Request::put(&write_url());
    if !MASTER_KEY.is_empty() {
        request = request.header("X-Master-Key", MASTER_KEY);
    }
    let resp = request
        .json(&payload)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(update_failed_message(resp.status()));
    }
    Ok(())
}

/// Create a product: read the document, assign the next id, append, rewrite.
///
/// # Errors
///
/// Returns a user-facing message if either the read or the write fails.
pub async fn create_product(draft: &ProductDraft) -> Result<Product, String> {
    #[cfg(feature = "hydrate")]
    {
        let mut products = fetch_products().await?;
        let created = draft.with_id(next_product_id(&products));
        products.push(created.clone());
        replace_bin(products).await?;
        Ok(created)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft;
        Err("not available on server".to_owned())
    }
}

/// Replace a product: read the document, swap the matching entry, rewrite.
///
/// # Errors
///
/// Returns a user-facing message if either the read or the write fails, or
/// if no product carries the given id.
pub async fn update_product(id: i64, draft: &ProductDraft) -> Result<Product, String> {
    #[cfg(feature = "hydrate")]
    {
        let mut products = fetch_products().await?;
        let updated = draft.with_id(id);
        let Some(slot) = products.iter_mut().find(|p| p.id == id) else {
            return Err("Producto no encontrado".to_owned());
        };
        *slot = updated.clone();
        replace_bin(products).await?;
        Ok(updated)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, draft);
        Err("not available on server".to_owned())
    }
}

/// Delete a product: read the document, filter it out, rewrite.
///
/// # Errors
///
/// Returns a user-facing message if either the read or the write fails.
pub async fn delete_product(id: i64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let mut products = fetch_products().await?;
        products.retain(|p| p.id != id);
        replace_bin(products).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err("not available on server".to_owned())
    }
}
