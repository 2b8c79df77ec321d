//! Storefront header: brand, navigation, cart badge, and session controls.

use leptos::prelude::*;

use crate::state::auth::{self, AuthState};
use crate::state::cart::CartState;

/// Shared page header. The cart badge tracks `total_items` reactively; the
/// session block switches between login link and user/logout controls.
#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let cart = expect_context::<RwSignal<CartState>>();

    let username = move || {
        auth.get()
            .user
            .map(|user| user.username)
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        auth::clear_session();
        auth.set(AuthState::default());
    };

    view! {
        <header class="site-header">
            <a href="/" class="site-header__brand">
                "FILO" <span class="site-header__brand-accent">"SHARP"</span>
            </a>

            <nav class="site-header__nav">
                <a href="/" class="site-header__link">"Tienda"</a>
                <a href="/custom" class="site-header__link">"Personalizar"</a>
                <a href="/cart" class="site-header__link site-header__cart">
                    "Carrito"
                    <Show when=move || { cart.get().total_items() > 0 }>
                        <span class="site-header__cart-badge">
                            {move || cart.get().total_items()}
                        </span>
                    </Show>
                </a>
                <Show when=move || auth.get().is_admin()>
                    <a href="/admin" class="site-header__link">"Admin"</a>
                </Show>
            </nav>

            <div class="site-header__session">
                <Show
                    when=move || auth.get().is_authenticated()
                    fallback=|| {
                        view! {
                            <a href="/login" class="btn site-header__login">
                                "Iniciar sesión"
                            </a>
                        }
                    }
                >
                    <span class="site-header__user">{username}</span>
                    <button class="btn site-header__logout" on:click=on_logout>
                        "Cerrar sesión"
                    </button>
                </Show>
            </div>
        </header>
    }
}
