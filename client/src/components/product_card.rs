//! Shop grid card for one catalog product.

use leptos::prelude::*;

use crate::net::types::Product;
use crate::util::format::price_label;

/// Product card with image, facets, price, and an add-to-cart action.
#[component]
pub fn ProductCard(product: Product, on_add: Callback<Product>) -> impl IntoView {
    let detail_href = format!("/products/{}", product.id);
    let product_for_add = product.clone();

    view! {
        <div class="product-card">
            <a href=detail_href class="product-card__media">
                <img class="product-card__image" src=product.image1.clone() alt=product.title.clone()/>
            </a>
            <div class="product-card__body">
                <h3 class="product-card__title">{product.title.clone()}</h3>
                <p class="product-card__facets">
                    {product.category.clone()} " · " {product.material.clone()}
                </p>
                <div class="product-card__footer">
                    <span class="product-card__price">{price_label(product.price)}</span>
                    <button
                        class="btn btn--primary product-card__add"
                        on:click=move |_| on_add.run(product_for_add.clone())
                    >
                        "Añadir al carrito"
                    </button>
                </div>
            </div>
        </div>
    }
}
