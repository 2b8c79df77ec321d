//! Per-page SEO meta tags.
//!
//! Pages declare their title/description/keywords declaratively; `leptos_meta`
//! reconciles the document head on navigation.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

/// Inject the page title and the description/keywords meta tags.
#[component]
pub fn Seo(
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    #[prop(into)] keywords: String,
) -> impl IntoView {
    view! {
        <Title text=title/>
        <Meta name="description" content=description/>
        <Meta name="keywords" content=keywords/>
    }
}
