//! Checkout page: authenticated order review and mock completion.
//!
//! Completing the order is the one place that clears the cart wholesale;
//! there is no real payment processing behind it.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::header::Header;
use crate::components::seo::Seo;
use crate::state::auth::AuthState;
use crate::state::cart::{self, CartState};
use crate::util::format::{line_total, price_label};
use crate::util::guard::install_unauth_redirect;

/// Checkout page — routed as `/checkout`, requires a session.
#[component]
pub fn CheckoutPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let cart = expect_context::<RwSignal<CartState>>();
    let navigate = use_navigate();

    install_unauth_redirect(auth, navigate);

    let completed = RwSignal::new(false);

    let on_confirm = move |_| {
        cart.update(|c| {
            c.clear();
            cart::save(c);
        });
        completed.set(true);
    };

    view! {
        <Seo
            title="Finalizar Compra | FiloSharp"
            description="Completa tu pedido de cuchillos artesanales."
            keywords="checkout, pedido, FiloSharp"
        />
        <Header/>

        <main class="checkout-page">
            <Show
                when=move || !completed.get()
                fallback=|| {
                    view! {
                        <div class="checkout-page__done">
                            <h1>"¡Pedido realizado!"</h1>
                            <p>"Gracias por tu compra. Recibirás un correo con los detalles."</p>
                            <a href="/" class="btn btn--primary">"Volver a la tienda"</a>
                        </div>
                    }
                }
            >
                <h1>"Finalizar compra"</h1>

                <Show
                    when=move || !cart.get().is_empty()
                    fallback=|| {
                        view! {
                            <div class="checkout-page__empty">
                                <p>"No hay nada que pagar: tu carrito está vacío."</p>
                                <a href="/" class="btn btn--primary">"Ir a la tienda"</a>
                            </div>
                        }
                    }
                >
                    <div class="checkout-page__summary">
                        {move || {
                            cart.get()
                                .items
                                .into_iter()
                                .map(|line| {
                                    view! {
                                        <div class="checkout-line">
                                            <span class="checkout-line__title">
                                                {format!("{} × {}", line.quantity, line.title)}
                                            </span>
                                            <span class="checkout-line__total">
                                                {price_label(line_total(line.price, line.quantity))}
                                            </span>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                        <div class="checkout-page__grand-total">
                            <span>"Total"</span>
                            <span>{move || price_label(cart.get().total_price())}</span>
                        </div>
                    </div>

                    <button class="btn btn--primary checkout-page__confirm" on:click=on_confirm>
                        "Confirmar pedido"
                    </button>
                </Show>
            </Show>
        </main>
    }
}
