use super::*;

fn valid_draft() -> ProductDraft {
    ProductDraft {
        title: "Cuchillo Chef Clásico".to_owned(),
        description: "Hoja forjada a mano de 20cm".to_owned(),
        price: 450.0,
        image1: "https://example.com/chef.jpg".to_owned(),
        image2: String::new(),
        category: "cocina".to_owned(),
        material: "acero".to_owned(),
        kind: "chef".to_owned(),
    }
}

// =============================================================
// Whole-form
// =============================================================

#[test]
fn valid_draft_has_no_errors() {
    assert!(validate(&valid_draft()).is_empty());
}

#[test]
fn empty_draft_flags_every_required_field() {
    let errors = validate(&ProductDraft::default());
    assert!(errors.title.is_some());
    assert!(errors.description.is_some());
    assert!(errors.price.is_some());
    assert!(errors.image1.is_some());
    assert!(errors.image2.is_none()); // optional
    assert!(errors.category.is_some());
    assert!(errors.material.is_some());
    assert!(errors.kind.is_some());
}

// =============================================================
// Field rules
// =============================================================

#[test]
fn short_title_is_rejected() {
    let mut draft = valid_draft();
    draft.title = "ab".to_owned();
    assert_eq!(
        validate(&draft).title.unwrap(),
        "El título debe tener al menos 3 caracteres"
    );
}

#[test]
fn whitespace_only_title_counts_as_missing() {
    let mut draft = valid_draft();
    draft.title = "   ".to_owned();
    assert_eq!(validate(&draft).title.unwrap(), "El título es obligatorio");
}

#[test]
fn short_description_is_rejected() {
    let mut draft = valid_draft();
    draft.description = "corta".to_owned();
    assert!(validate(&draft).description.is_some());
}

#[test]
fn zero_and_negative_prices_are_rejected() {
    let mut draft = valid_draft();
    draft.price = 0.0;
    assert!(validate(&draft).price.is_some());
    draft.price = -5.0;
    assert!(validate(&draft).price.is_some());
}

#[test]
fn malformed_primary_image_is_rejected() {
    let mut draft = valid_draft();
    draft.image1 = "not a url".to_owned();
    assert_eq!(validate(&draft).image1.unwrap(), "Debe ser una URL válida");
}

#[test]
fn secondary_image_is_validated_only_when_present() {
    let mut draft = valid_draft();
    draft.image2 = "https://example.com/detail.jpg".to_owned();
    assert!(validate(&draft).image2.is_none());

    draft.image2 = "nope".to_owned();
    assert!(validate(&draft).image2.is_some());
}

// =============================================================
// is_valid_url
// =============================================================

#[test]
fn accepts_http_and_https() {
    assert!(is_valid_url("https://example.com/a.jpg"));
    assert!(is_valid_url("http://cdn.example.com/x"));
}

#[test]
fn rejects_missing_scheme() {
    assert!(!is_valid_url("example.com/a.jpg"));
    assert!(!is_valid_url("://example.com"));
}

#[test]
fn rejects_whitespace_and_empty_remainder() {
    assert!(!is_valid_url("https://exa mple.com"));
    assert!(!is_valid_url("https://"));
}
