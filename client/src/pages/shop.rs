//! Shop page: the product grid with facet filters and pagination.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the storefront landing route. Products load once per session from
//! the backing store; filtering and pagination are client-side projections,
//! so facet changes never refetch.

use leptos::prelude::*;

use crate::components::cart_notification::CartNotification;
use crate::components::header::Header;
use crate::components::pagination::Pagination;
use crate::components::product_card::ProductCard;
use crate::components::seo::Seo;
use crate::net::types::Product;
use crate::state::cart::{self, CartState, LineItemId, NewLineItem};
use crate::state::catalog::{self, CatalogState, Filters};
use crate::state::ui::UiState;

/// Kick off a product fetch, flagging loading/error state on the way.
pub(crate) fn load_products(catalog: RwSignal<CatalogState>) {
    #[cfg(feature = "hydrate")]
    {
        catalog.update(|s| {
            s.loading = true;
            s.error = None;
        });
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_products().await {
                Ok(products) => catalog.update(|s| {
                    s.products = products;
                    s.loading = false;
                    s.loaded = true;
                }),
                Err(message) => catalog.update(|s| {
                    s.error = Some(message);
                    s.loading = false;
                }),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = catalog;
    }
}

/// Shop page — filterable, paginated product grid.
#[component]
pub fn ShopPage() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let cart = expect_context::<RwSignal<CartState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let filters = RwSignal::new(Filters::default());
    let page = RwSignal::new(1_usize);

    // One fetch per visit; a failed fetch waits for the retry button instead
    // of looping.
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

    // Facet changes restart from the first page.
    Effect::new(move || {
        let _ = filters.get();
        page.set(1);
    });

    let filtered = Memo::new(move |_| catalog::apply_filters(&catalog.get().products, &filters.get()));
    let total = Signal::derive(move || catalog::total_pages(filtered.get().len()));
    let current = Signal::derive(move || page.get());
    let visible = move || catalog::page_slice(&filtered.get(), page.get()).to_vec();

    let categories = Memo::new(move |_| catalog::unique_values(&catalog.get().products, |p| &p.category));
    let materials = Memo::new(move |_| catalog::unique_values(&catalog.get().products, |p| &p.material));
    let kinds = Memo::new(move |_| catalog::unique_values(&catalog.get().products, |p| &p.kind));

    let on_add = Callback::new(move |product: Product| {
        let title = product.title.clone();
        cart.update(|c| {
            c.add_item(NewLineItem {
                id: LineItemId::Product(product.id),
                title: product.title,
                price: product.price,
                image: product.image1,
                is_custom: false,
                custom_summary: None,
            });
            cart::save(c);
        });
        ui.update(|u| u.notify("Producto agregado al carrito", Some(title)));
    });

    let on_page = Callback::new(move |next: usize| page.set(next));
    let on_retry = move |_| load_products(catalog);

    view! {
        <Seo
            title="Tienda - Cuchillos Artesanales | FiloSharp"
            description="Explora nuestra colección de cuchillos artesanales forjados a mano. Filtra por categoría, material y tipo."
            keywords="cuchillos artesanales, tienda de cuchillos, cuchillos forjados, acero damasco"
        />
        <Header/>
        <CartNotification/>

        <main class="shop-page">
            <Show when=move || catalog.get().error.is_some()>
                <div class="banner banner--error">
                    <span>{move || catalog.get().error.unwrap_or_default()}</span>
                    <button class="btn banner__retry" on:click=on_retry>
                        "Reintentar"
                    </button>
                </div>
            </Show>

            <aside class="shop-page__filters">
                <FacetSelect
                    label="Todas las categorías"
                    options=categories
                    on_select=Callback::new(move |value| {
                        filters.update(|f| f.category = value);
                    })
                />
                <FacetSelect
                    label="Todos los materiales"
                    options=materials
                    on_select=Callback::new(move |value| {
                        filters.update(|f| f.material = value);
                    })
                />
                <FacetSelect
                    label="Todos los tipos"
                    options=kinds
                    on_select=Callback::new(move |value| {
                        filters.update(|f| f.kind = value);
                    })
                />
            </aside>

            <Show
                when=move || !catalog.get().loading
                fallback=|| view! { <p class="shop-page__loading">"Cargando productos..."</p> }
            >
                <div class="shop-page__grid">
                    {move || {
                        visible()
                            .into_iter()
                            .map(|product| view! { <ProductCard product=product on_add=on_add/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
                <Show when=move || filtered.get().is_empty() && catalog.get().loaded>
                    <p class="shop-page__empty">"No hay productos que coincidan con los filtros."</p>
                </Show>
                <Pagination current=current total=total on_page=on_page/>
            </Show>
        </main>
    }
}

/// One facet dropdown: an empty selection means "all".
#[component]
fn FacetSelect(
    label: &'static str,
    options: Memo<Vec<String>>,
    on_select: Callback<Option<String>>,
) -> impl IntoView {
    view! {
        <select
            class="shop-page__facet"
            on:change=move |ev| {
                let value = event_target_value(&ev);
                on_select.run(if value.is_empty() { None } else { Some(value) });
            }
        >
            <option value="">{label}</option>
            {move || {
                options
                    .get()
                    .into_iter()
                    .map(|option| view! { <option value=option.clone()>{option.clone()}</option> })
                    .collect::<Vec<_>>()
            }}
        </select>
    }
}
