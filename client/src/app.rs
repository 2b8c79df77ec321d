//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::admin::{dashboard::AdminDashboardPage, product_form::ProductFormPage, products::AdminProductsPage};
use crate::pages::{
    cart::CartPage, checkout::CheckoutPage, customizer::CustomizerPage, login::LoginPage,
    not_found::NotFoundPage, product_detail::ProductDetailPage, shop::ShopPage,
};
use crate::state::{auth, cart};
use crate::state::{catalog::CatalogState, configurator::ConfiguratorState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content="Cuchillos artesanales de alta calidad"/>
                <meta name="keywords" content="cuchillos, artesanales, forjados"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing. The
/// cart and auth session are rehydrated from localStorage exactly once, here.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(auth::load_session());
    let cart = RwSignal::new(cart::load());
    let catalog = RwSignal::new(CatalogState::default());
    let configurator = RwSignal::new(ConfiguratorState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(cart);
    provide_context(catalog);
    provide_context(configurator);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/filosharp.css"/>
        <Title text="FiloSharp - Cuchillos Artesanales"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("") view=ShopPage/>
                <Route path=(StaticSegment("products"), ParamSegment("id")) view=ProductDetailPage/>
                <Route path=StaticSegment("custom") view=CustomizerPage/>
                <Route path=StaticSegment("cart") view=CartPage/>
                <Route path=StaticSegment("checkout") view=CheckoutPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("admin") view=AdminDashboardPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("products")) view=AdminProductsPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("products"), StaticSegment("new")) view=ProductFormPage/>
                <Route
                    path=(
                        StaticSegment("admin"),
                        StaticSegment("products"),
                        ParamSegment("id"),
                        StaticSegment("edit"),
                    )
                    view=ProductFormPage
                />
            </Routes>
        </Router>
    }
}
