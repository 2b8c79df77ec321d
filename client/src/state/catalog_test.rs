use super::*;

fn product(id: i64, category: &str, material: &str, kind: &str) -> Product {
    Product {
        id,
        title: format!("Cuchillo {id}"),
        description: String::new(),
        price: 100.0,
        image1: String::new(),
        image2: String::new(),
        category: category.to_owned(),
        material: material.to_owned(),
        kind: kind.to_owned(),
    }
}

fn sample_catalog() -> Vec<Product> {
    vec![
        product(1, "cocina", "acero", "chef"),
        product(2, "cocina", "damasco", "santoku"),
        product(3, "caza", "acero", "fillet"),
        product(4, "cocina", "acero", "chef"),
    ]
}

// =============================================================
// Filters
// =============================================================

#[test]
fn empty_filters_match_everything() {
    let filters = Filters::default();
    assert!(filters.is_empty());
    assert_eq!(apply_filters(&sample_catalog(), &filters).len(), 4);
}

#[test]
fn category_filter_narrows() {
    let filters = Filters { category: Some("caza".to_owned()), ..Default::default() };
    let filtered = apply_filters(&sample_catalog(), &filters);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, 3);
}

#[test]
fn facets_combine_conjunctively() {
    let filters = Filters {
        category: Some("cocina".to_owned()),
        material: Some("acero".to_owned()),
        kind: Some("chef".to_owned()),
    };
    let filtered = apply_filters(&sample_catalog(), &filters);
    assert_eq!(filtered.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 4]);
}

#[test]
fn unmatched_filter_yields_nothing() {
    let filters = Filters { kind: Some("bread".to_owned()), ..Default::default() };
    assert!(apply_filters(&sample_catalog(), &filters).is_empty());
}

// =============================================================
// unique_values
// =============================================================

#[test]
fn unique_values_dedupe_in_first_seen_order() {
    let categories = unique_values(&sample_catalog(), |p| &p.category);
    assert_eq!(categories, vec!["cocina".to_owned(), "caza".to_owned()]);
}

#[test]
fn unique_values_skip_empty_strings() {
    let mut products = sample_catalog();
    products.push(product(5, "", "acero", "chef"));
    let categories = unique_values(&products, |p| &p.category);
    assert_eq!(categories.len(), 2);
}

// =============================================================
// Pagination
// =============================================================

#[test]
fn total_pages_rounds_up() {
    assert_eq!(total_pages(0), 1);
    assert_eq!(total_pages(12), 1);
    assert_eq!(total_pages(13), 2);
    assert_eq!(total_pages(24), 2);
    assert_eq!(total_pages(25), 3);
}

#[test]
fn page_slice_splits_at_twelve() {
    let products: Vec<_> = (1..=30).map(|i| product(i, "c", "m", "k")).collect();
    assert_eq!(page_slice(&products, 1).len(), 12);
    assert_eq!(page_slice(&products, 2).len(), 12);
    assert_eq!(page_slice(&products, 3).len(), 6);
    assert_eq!(page_slice(&products, 2)[0].id, 13);
}

#[test]
fn page_slice_past_the_end_is_empty() {
    let products: Vec<_> = (1..=5).map(|i| product(i, "c", "m", "k")).collect();
    assert!(page_slice(&products, 2).is_empty());
    assert!(page_slice(&[], 1).is_empty());
}

// =============================================================
// visible_pages
// =============================================================

#[test]
fn single_page_shows_just_one() {
    assert_eq!(visible_pages(1, 1), vec![Some(1)]);
}

#[test]
fn small_totals_show_every_page() {
    assert_eq!(visible_pages(1, 2), vec![Some(1), Some(2)]);
    assert_eq!(visible_pages(2, 3), vec![Some(1), Some(2), Some(3)]);
}

#[test]
fn start_of_a_long_range_elides_the_tail() {
    assert_eq!(
        visible_pages(1, 10),
        vec![Some(1), Some(2), Some(3), None, Some(10)]
    );
}

#[test]
fn middle_of_a_long_range_elides_both_sides() {
    assert_eq!(
        visible_pages(5, 10),
        vec![Some(1), None, Some(3), Some(4), Some(5), Some(6), Some(7), None, Some(10)]
    );
}

#[test]
fn end_of_a_long_range_elides_the_head() {
    assert_eq!(
        visible_pages(10, 10),
        vec![Some(1), None, Some(8), Some(9), Some(10)]
    );
}

// =============================================================
// CatalogState defaults
// =============================================================

#[test]
fn catalog_defaults_to_unloaded() {
    let state = CatalogState::default();
    assert!(state.products.is_empty());
    assert!(!state.loading);
    assert!(!state.loaded);
    assert!(state.error.is_none());
}
