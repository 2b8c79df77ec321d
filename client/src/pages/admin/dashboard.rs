//! Admin dashboard: catalog stat cards.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::header::Header;
use crate::components::seo::Seo;
use crate::net::types::Product;
use crate::pages::shop::load_products;
use crate::state::auth::AuthState;
use crate::state::catalog::{CatalogState, unique_values};
use crate::util::format::price_label;
use crate::util::guard::install_admin_redirect;

/// Mean unit price across the catalog; 0 for an empty catalog.
#[must_use]
fn average_price(products: &[Product]) -> f64 {
    if products.is_empty() {
        return 0.0;
    }
    let total: f64 = products.iter().map(|p| p.price).sum();
    total / products.len() as f64
}

/// Admin dashboard — routed as `/admin`.
#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let navigate = use_navigate();

    install_admin_redirect(auth, navigate);

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        if !catalog.get_untracked().loaded {
            load_products(catalog);
        }
    });

    let count = move || catalog.get().products.len();
    let average = move || average_price(&catalog.get().products);
    let categories = move || unique_values(&catalog.get().products, |p| &p.category).len();

    view! {
        <Seo
            title="Panel de Administración | FiloSharp"
            description="Resumen del catálogo de FiloSharp."
            keywords="admin, panel, FiloSharp"
        />
        <Header/>

        <main class="admin-page">
            <h1>"Panel de administración"</h1>

            <div class="admin-page__stats">
                <div class="stat-card">
                    <span class="stat-card__value">{count}</span>
                    <span class="stat-card__label">"Productos"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__value">{move || price_label(average())}</span>
                    <span class="stat-card__label">"Precio promedio"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__value">{categories}</span>
                    <span class="stat-card__label">"Categorías"</span>
                </div>
            </div>

            <div class="admin-page__links">
                <a href="/admin/products" class="btn btn--primary">
                    "Gestionar productos"
                </a>
            </div>
        </main>
    }
}
