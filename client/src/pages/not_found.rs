//! Fallback route for unknown paths.

use leptos::prelude::*;

use crate::components::header::Header;
use crate::components::seo::Seo;

/// 404 page rendered for every unmatched route.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Seo
            title="Página no encontrada | FiloSharp"
            description="La página que buscas no existe."
            keywords="404, FiloSharp"
        />
        <Header/>

        <main class="not-found-page">
            <h1>"404"</h1>
            <p>"La página que buscas no existe."</p>
            <a href="/" class="btn btn--primary">"Volver a la tienda"</a>
        </main>
    }
}
