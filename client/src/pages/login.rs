//! Login / registration page backed by the credential port.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::header::Header;
use crate::components::seo::Seo;
use crate::state::auth::{self, AuthState};
use crate::util::credentials::{CredentialStore, MockCredentials};

/// Milliseconds since the Unix epoch, used as the registered-user id seed.
fn now_ms() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now() as i64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}

/// Login page — routed as `/login`. Toggles between sign-in (verified by the
/// credential port) and registration (which mints a regular user).
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let registering = RwSignal::new(false);
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let navigate_after = navigate.clone();
    let finish_sign_in = move |state: AuthState| {
        auth::save_session(&state);
        let target = if state.is_admin() { "/admin/products" } else { "/" };
        auth.set(state);
        navigate_after(target, NavigateOptions::default());
    };

    let finish_login = finish_sign_in.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        if registering.get() {
            let user = MockCredentials.register(username.get().trim(), email.get().trim(), now_ms());
            finish_sign_in(AuthState::signed_in(user, auth::mint_token()));
            return;
        }

        match MockCredentials.verify(username.get().trim(), &password.get()) {
            Some(user) => finish_login(AuthState::signed_in(user, auth::mint_token())),
            None => error.set(Some("Credenciales incorrectas".to_owned())),
        }
    };

    view! {
        <Seo
            title="Iniciar Sesión | FiloSharp"
            description="Accede a tu cuenta de FiloSharp."
            keywords="login, cuenta, FiloSharp"
        />
        <Header/>

        <main class="login-page">
            <h1>{move || if registering.get() { "Crear cuenta" } else { "Iniciar sesión" }}</h1>

            <form class="login-page__form" on:submit=on_submit>
                <label class="login-page__field">
                    "Usuario"
                    <input
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>

                <Show when=move || registering.get()>
                    <label class="login-page__field">
                        "Correo electrónico"
                        <input
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                </Show>

                <Show when=move || !registering.get()>
                    <label class="login-page__field">
                        "Contraseña"
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                </Show>

                <Show when=move || error.get().is_some()>
                    <p class="login-page__error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <button class="btn btn--primary login-page__submit" type="submit">
                    {move || if registering.get() { "Registrarse" } else { "Entrar" }}
                </button>
            </form>

            <button
                class="btn login-page__toggle"
                on:click=move |_| {
                    registering.update(|r| *r = !*r);
                    error.set(None);
                }
            >
                {move || {
                    if registering.get() {
                        "¿Ya tienes cuenta? Inicia sesión"
                    } else {
                        "¿No tienes cuenta? Regístrate"
                    }
                }}
            </button>
        </main>
    }
}
