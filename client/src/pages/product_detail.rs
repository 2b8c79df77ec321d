//! Product detail page.
//!
//! ERROR HANDLING
//! ==============
//! A missing product id is its own terminal state rendered as a dedicated
//! not-found view; only transport failures surface the retryable error
//! banner.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_params_map;

use crate::components::cart_notification::CartNotification;
use crate::components::header::Header;
use crate::components::seo::Seo;
use crate::net::types::Product;
use crate::state::cart::{self, CartState, LineItemId, NewLineItem};
use crate::state::ui::UiState;
use crate::util::format::price_label;

/// Fetch lifecycle for the routed product.
#[derive(Clone, Debug, Default, PartialEq)]
enum DetailState {
    #[default]
    Loading,
    Found(Product),
    NotFound,
    Failed(String),
}

fn load_product(id: Option<i64>, detail: RwSignal<DetailState>) {
    #[cfg(feature = "hydrate")]
    {
        let Some(id) = id else {
            detail.set(DetailState::NotFound);
            return;
        };
        detail.set(DetailState::Loading);
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_product(id).await {
                Ok(Some(product)) => detail.set(DetailState::Found(product)),
                Ok(None) => detail.set(DetailState::NotFound),
                Err(message) => detail.set(DetailState::Failed(message)),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, detail);
    }
}

/// Product detail page — routed as `/products/:id`.
#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let params = use_params_map();

    let product_id = Memo::new(move |_| {
        params
            .read()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok())
    });
    let detail = RwSignal::new(DetailState::default());

    Effect::new(move || {
        load_product(product_id.get(), detail);
    });

    let on_add = move |_| {
        let DetailState::Found(product) = detail.get() else {
            return;
        };
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
    };

    let page_title = move || match detail.get() {
        DetailState::Found(product) => format!("{} | FiloSharp", product.title),
        _ => "Producto | FiloSharp".to_owned(),
    };

    view! {
        <Seo
            title=page_title()
            description="Detalle de cuchillo artesanal forjado a mano."
            keywords="cuchillo artesanal, detalle de producto, FiloSharp"
        />
        <Header/>
        <CartNotification/>

        <main class="product-detail">
            {move || match detail.get() {
                DetailState::Loading => view! {
                    <p class="product-detail__loading">"Cargando producto..."</p>
                }
                .into_any(),
                DetailState::NotFound => view! {
                    <div class="product-detail__not-found">
                        <h1>"Producto no encontrado"</h1>
                        <p>"El producto que buscas no existe o fue retirado."</p>
                        <a href="/" class="btn btn--primary">"Volver a la tienda"</a>
                    </div>
                }
                .into_any(),
                DetailState::Failed(message) => view! {
                    <div class="banner banner--error">
                        <span>{message}</span>
                        <button
                            class="btn banner__retry"
                            on:click=move |_| load_product(product_id.get_untracked(), detail)
                        >
                            "Reintentar"
                        </button>
                    </div>
                }
                .into_any(),
                DetailState::Found(product) => {
                    let secondary_src = product.image2.clone();
                    let secondary_alt = product.title.clone();
                    view! {
                    <div class="product-detail__layout">
                        <div class="product-detail__media">
                            <img
                                class="product-detail__image"
                                src=product.image1.clone()
                                alt=product.title.clone()
                            />
                            <Show when={
                                let has_second = !product.image2.is_empty();
                                move || has_second
                            }>
                                <img
                                    class="product-detail__image product-detail__image--secondary"
                                    src=secondary_src.clone()
                                    alt=secondary_alt.clone()
                                />
                            </Show>
                        </div>
                        <div class="product-detail__info">
                            <h1 class="product-detail__title">{product.title.clone()}</h1>
                            <p class="product-detail__facets">
                                {product.category.clone()} " · " {product.material.clone()} " · "
                                {product.kind.clone()}
                            </p>
                            <p class="product-detail__description">{product.description.clone()}</p>
                            <div class="product-detail__buy">
                                <span class="product-detail__price">{price_label(product.price)}</span>
                                <button class="btn btn--primary" on:click=on_add>
                                    "Añadir al carrito"
                                </button>
                            </div>
                        </div>
                    </div>
                }
                .into_any()
                }
            }}
        </main>
    }
}
