//! Admin product form validation.
//!
//! Rules run before submission; while any field-level error remains the
//! submit is blocked. Messages are user-facing storefront copy (Spanish).

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use crate::net::types::ProductDraft;

/// Field-level validation errors for the product form. `None` means valid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub image1: Option<String>,
    pub image2: Option<String>,
    pub category: Option<String>,
    pub material: Option<String>,
    pub kind: Option<String>,
}

impl FormErrors {
    /// Whether every field passed validation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Validate a draft against the product form rules.
#[must_use]
pub fn validate(draft: &ProductDraft) -> FormErrors {
    let mut errors = FormErrors::default();

    let title = draft.title.trim();
    if title.is_empty() {
        errors.title = Some("El título es obligatorio".to_owned());
    } else if title.chars().count() < 3 {
        errors.title = Some("El título debe tener al menos 3 caracteres".to_owned());
    }

    let description = draft.description.trim();
    if description.is_empty() {
        errors.description = Some("La descripción es obligatoria".to_owned());
    } else if description.chars().count() < 10 {
        errors.description = Some("La descripción debe tener al menos 10 caracteres".to_owned());
    }

    if draft.price <= 0.0 {
        errors.price = Some("El precio debe ser mayor a 0".to_owned());
    }

    let image1 = draft.image1.trim();
    if image1.is_empty() {
        errors.image1 = Some("La imagen principal es obligatoria".to_owned());
    } else if !is_valid_url(image1) {
        errors.image1 = Some("Debe ser una URL válida".to_owned());
    }

    // The secondary image is optional but must be well-formed when present.
    let image2 = draft.image2.trim();
    if !image2.is_empty() && !is_valid_url(image2) {
        errors.image2 = Some("Debe ser una URL válida".to_owned());
    }

    if draft.category.trim().is_empty() {
        errors.category = Some("La categoría es obligatoria".to_owned());
    }
    if draft.material.trim().is_empty() {
        errors.material = Some("El material es obligatorio".to_owned());
    }
    if draft.kind.trim().is_empty() {
        errors.kind = Some("El tipo es obligatorio".to_owned());
    }

    errors
}

/// Minimal absolute-URL well-formedness check: a scheme, `://`, and a
/// non-empty remainder without whitespace.
#[must_use]
pub fn is_valid_url(raw: &str) -> bool {
    let Some((scheme, rest)) = raw.split_once("://") else {
        return false;
    };
    !scheme.is_empty()
        && scheme.chars().all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.')
        && !rest.is_empty()
        && !rest.chars().any(char::is_whitespace)
}
