//! Cart page: line items, quantity steppers, and totals.

use leptos::prelude::*;

use crate::components::header::Header;
use crate::components::seo::Seo;
use crate::state::cart::{self, CartLineItem, CartState};
use crate::util::format::{line_total, price_label};

/// Cart page — routed as `/cart`.
#[component]
pub fn CartPage() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();

    let on_clear = move |_| {
        cart.update(|c| {
            c.clear();
            cart::save(c);
        });
    };

    view! {
        <Seo
            title="Carrito de Compras | FiloSharp"
            description="Revisa los cuchillos en tu carrito antes de completar tu pedido."
            keywords="carrito, compra de cuchillos, FiloSharp"
        />
        <Header/>

        <main class="cart-page">
            <h1>"Tu carrito"</h1>

            <Show
                when=move || !cart.get().is_empty()
                fallback=|| {
                    view! {
                        <div class="cart-page__empty">
                            <p>"Tu carrito está vacío."</p>
                            <a href="/" class="btn btn--primary">"Ir a la tienda"</a>
                        </div>
                    }
                }
            >
                <div class="cart-page__lines">
                    <For
                        each=move || cart.get().items
                        key=|line| line.id.clone()
                        children=move |line: CartLineItem| {
                            let id_minus = line.id.clone();
                            let id_plus = line.id.clone();
                            let id_remove = line.id.clone();
                            let quantity = line.quantity;
                            view! {
                                <div class="cart-line">
                                    <img class="cart-line__image" src=line.image.clone() alt=line.title.clone()/>
                                    <div class="cart-line__info">
                                        <h3 class="cart-line__title">{line.title.clone()}</h3>
                                        <Show when={
                                            let is_custom = line.is_custom;
                                            move || is_custom
                                        }>
                                            <p class="cart-line__summary">
                                                {line.custom_summary.clone().unwrap_or_default()}
                                            </p>
                                        </Show>
                                        <span class="cart-line__unit">{price_label(line.price)}</span>
                                    </div>
                                    <div class="cart-line__quantity">
                                        <button
                                            class="btn cart-line__step"
                                            on:click=move |_| {
                                                cart.update(|c| {
                                                    c.update_quantity(&id_minus, quantity.saturating_sub(1));
                                                    cart::save(c);
                                                });
                                            }
                                        >
                                            "−"
                                        </button>
                                        <span class="cart-line__count">{quantity}</span>
                                        <button
                                            class="btn cart-line__step"
                                            on:click=move |_| {
                                                cart.update(|c| {
                                                    c.update_quantity(&id_plus, quantity + 1);
                                                    cart::save(c);
                                                });
                                            }
                                        >
                                            "+"
                                        </button>
                                    </div>
                                    <span class="cart-line__total">
                                        {price_label(line_total(line.price, line.quantity))}
                                    </span>
                                    <button
                                        class="btn btn--danger cart-line__remove"
                                        on:click=move |_| {
                                            cart.update(|c| {
                                                c.remove_item(&id_remove);
                                                cart::save(c);
                                            });
                                        }
                                    >
                                        "Eliminar"
                                    </button>
                                </div>
                            }
                        }
                    />
                </div>

                <div class="cart-page__footer">
                    <div class="cart-page__totals">
                        <span>
                            {move || format!("{} artículos", cart.get().total_items())}
                        </span>
                        <span class="cart-page__total-price">
                            {move || price_label(cart.get().total_price())}
                        </span>
                    </div>
                    <div class="cart-page__actions">
                        <button class="btn cart-page__clear" on:click=on_clear>
                            "Vaciar carrito"
                        </button>
                        <a href="/checkout" class="btn btn--primary cart-page__checkout">
                            "Proceder al pago"
                        </a>
                    </div>
                </div>
            </Show>
        </main>
    }
}
