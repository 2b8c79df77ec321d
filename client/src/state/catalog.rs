//! Shop catalog state: the loaded product list, filters, and pagination.
//!
//! DESIGN
//! ======
//! The product list is fetched once per visit from the backing store; filter
//! and pagination are pure functions over the loaded list so the UI stays a
//! projection of `CatalogState` plus the current `Filters`.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::net::types::Product;

/// Products shown per shop page.
pub const PRODUCTS_PER_PAGE: usize = 12;

/// Shared catalog state backed by the product store.
#[derive(Clone, Debug, Default)]
pub struct CatalogState {
    pub products: Vec<Product>,
    pub loading: bool,
    pub error: Option<String>,
    /// Set after the first successful fetch so revisits skip the reload.
    pub loaded: bool,
}

/// Active shop filters; `None` means "all".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Filters {
    pub category: Option<String>,
    pub material: Option<String>,
    pub kind: Option<String>,
}

impl Filters {
    /// Whether no facet is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.material.is_none() && self.kind.is_none()
    }

    /// Whether a product passes every active facet.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        self.category.as_ref().is_none_or(|c| &product.category == c)
            && self.material.as_ref().is_none_or(|m| &product.material == m)
            && self.kind.as_ref().is_none_or(|k| &product.kind == k)
    }
}

/// Products passing the active filters, in catalog order.
#[must_use]
pub fn apply_filters(products: &[Product], filters: &Filters) -> Vec<Product> {
    products.iter().filter(|p| filters.matches(p)).cloned().collect()
}

/// Distinct non-empty values of one facet, in first-seen order.
#[must_use]
pub fn unique_values<F>(products: &[Product], facet: F) -> Vec<String>
where
    F: Fn(&Product) -> &str,
{
    let mut seen = Vec::new();
    for product in products {
        let value = facet(product);
        if !value.is_empty() && !seen.iter().any(|v| v == value) {
            seen.push(value.to_owned());
        }
    }
    seen
}

/// Number of pages needed for `count` products.
#[must_use]
pub fn total_pages(count: usize) -> usize {
    count.div_ceil(PRODUCTS_PER_PAGE).max(1)
}

/// The slice of products belonging to 1-based `page`.
#[must_use]
pub fn page_slice(products: &[Product], page: usize) -> &[Product] {
    let start = page.saturating_sub(1) * PRODUCTS_PER_PAGE;
    let end = (start + PRODUCTS_PER_PAGE).min(products.len());
    if start >= products.len() {
        return &[];
    }
    &products[start..end]
}

/// Page-picker entries around `current`: page numbers with `None` marking an
/// elided range. Always anchored at the first and last page, with a ±2 window
/// around the current one.
#[must_use]
pub fn visible_pages(current: usize, total: usize) -> Vec<Option<usize>> {
    const DELTA: usize = 2;

    if total <= 1 {
        return vec![Some(1)];
    }

    let window_start = current.saturating_sub(DELTA).max(2);
    let window_end = (current + DELTA).min(total - 1);

    let mut pages = Vec::new();
    if window_start > 2 {
        pages.push(Some(1));
        pages.push(None);
    } else {
        pages.push(Some(1));
    }
    for page in window_start..=window_end {
        pages.push(Some(page));
    }
    if current + DELTA < total - 1 {
        pages.push(None);
        pages.push(Some(total));
    } else {
        pages.push(Some(total));
    }
    pages
}
