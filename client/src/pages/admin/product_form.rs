//! Admin product form: validated create and edit.
//!
//! Validation runs on submit; field-level messages block the submission
//! until fixed. A successful save shows a confirmation and returns to the
//! product table.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::header::Header;
use crate::components::seo::Seo;
use crate::net::types::ProductDraft;
use crate::state::auth::AuthState;
use crate::util::guard::install_admin_redirect;
use crate::util::validation::{FormErrors, validate};

fn load_draft(id: i64, draft: RwSignal<ProductDraft>, error: RwSignal<Option<String>>, loading: RwSignal<bool>) {
    #[cfg(feature = "hydrate")]
    {
        loading.set(true);
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_product(id).await {
                Ok(Some(product)) => {
                    draft.set(ProductDraft::from_product(&product));
                    loading.set(false);
                }
                Ok(None) => {
                    error.set(Some("Producto no encontrado".to_owned()));
                    loading.set(false);
                }
                Err(message) => {
                    error.set(Some(message));
                    loading.set(false);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, draft, error, loading);
    }
}

fn submit_draft(
    editing_id: Option<i64>,
    draft: ProductDraft,
    error: RwSignal<Option<String>>,
    success: RwSignal<Option<String>>,
    submitting: RwSignal<bool>,
    on_saved: impl Fn() + 'static,
) {
    #[cfg(feature = "hydrate")]
    {
        submitting.set(true);
        leptos::task::spawn_local(async move {
            let result = match editing_id {
                Some(id) => crate::net::api::update_product(id, &draft).await.map(|_| ()),
                None => crate::net::api::create_product(&draft).await.map(|_| ()),
            };
            submitting.set(false);
            match result {
                Ok(()) => {
                    success.set(Some(
                        if editing_id.is_some() {
                            "Producto actualizado exitosamente"
                        } else {
                            "Producto creado exitosamente"
                        }
                        .to_owned(),
                    ));
                    on_saved();
                }
                Err(message) => error.set(Some(message)),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (editing_id, draft, error, success, submitting, &on_saved);
    }
}

/// Product form — routed as `/admin/products/new` and
/// `/admin/products/:id/edit`.
#[component]
pub fn ProductFormPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let params = use_params_map();

    install_admin_redirect(auth, navigate.clone());

    let editing_id = Memo::new(move |_| {
        params
            .read()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok())
    });

    let draft = RwSignal::new(ProductDraft::default());
    let errors = RwSignal::new(FormErrors::default());
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);
    let submitting = RwSignal::new(false);

    Effect::new(move || {
        if let Some(id) = editing_id.get() {
            load_draft(id, draft, error, loading);
        }
    });

    let navigate_back = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        success.set(None);

        let current = draft.get();
        let found = validate(&current);
        if !found.is_empty() {
            errors.set(found);
            error.set(Some("Por favor, corrige los errores en el formulario".to_owned()));
            return;
        }
        errors.set(FormErrors::default());

        let navigate_done = navigate_back.clone();
        submit_draft(editing_id.get_untracked(), current, error, success, submitting, move || {
            navigate_done("/admin/products", NavigateOptions::default());
        });
    };

    let navigate_cancel = navigate.clone();
    let on_cancel = move |_| {
        navigate_cancel("/admin/products", NavigateOptions::default());
    };

    let heading = move || {
        if editing_id.get().is_some() {
            "Editar producto"
        } else {
            "Nuevo producto"
        }
    };

    view! {
        <Seo
            title="Formulario de Producto - Administración | FiloSharp"
            description="Crea o edita productos del catálogo."
            keywords="admin, formulario, producto, FiloSharp"
        />
        <Header/>

        <main class="admin-page">
            <h1>{heading}</h1>

            <Show when=move || error.get().is_some()>
                <div class="banner banner--error">
                    <span>{move || error.get().unwrap_or_default()}</span>
                </div>
            </Show>
            <Show when=move || success.get().is_some()>
                <div class="banner banner--success">
                    <span>{move || success.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p>"Cargando producto..."</p> }
            >
                <form class="product-form" on:submit=on_submit.clone()>
                    <FormField
                        label="Título"
                        error=Signal::derive(move || errors.get().title)
                    >
                        <input
                            type="text"
                            prop:value=move || draft.get().title
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.title = value);
                            }
                        />
                    </FormField>

                    <FormField
                        label="Descripción"
                        error=Signal::derive(move || errors.get().description)
                    >
                        <textarea
                            prop:value=move || draft.get().description
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.description = value);
                            }
                        ></textarea>
                    </FormField>

                    <FormField
                        label="Precio"
                        error=Signal::derive(move || errors.get().price)
                    >
                        <input
                            type="number"
                            step="0.01"
                            prop:value=move || draft.get().price.to_string()
                            on:input=move |ev| {
                                let value = event_target_value(&ev).parse().unwrap_or(0.0);
                                draft.update(|d| d.price = value);
                            }
                        />
                    </FormField>

                    <FormField
                        label="Imagen principal (URL)"
                        error=Signal::derive(move || errors.get().image1)
                    >
                        <input
                            type="text"
                            prop:value=move || draft.get().image1
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.image1 = value);
                            }
                        />
                    </FormField>

                    <FormField
                        label="Imagen secundaria (URL, opcional)"
                        error=Signal::derive(move || errors.get().image2)
                    >
                        <input
                            type="text"
                            prop:value=move || draft.get().image2
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.image2 = value);
                            }
                        />
                    </FormField>

                    <FormField
                        label="Categoría"
                        error=Signal::derive(move || errors.get().category)
                    >
                        <input
                            type="text"
                            prop:value=move || draft.get().category
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.category = value);
                            }
                        />
                    </FormField>

                    <FormField
                        label="Material"
                        error=Signal::derive(move || errors.get().material)
                    >
                        <input
                            type="text"
                            prop:value=move || draft.get().material
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.material = value);
                            }
                        />
                    </FormField>

                    <FormField
                        label="Tipo"
                        error=Signal::derive(move || errors.get().kind)
                    >
                        <input
                            type="text"
                            prop:value=move || draft.get().kind
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.kind = value);
                            }
                        />
                    </FormField>

                    <div class="product-form__actions">
                        <button class="btn" type="button" on:click=on_cancel.clone()>
                            "Cancelar"
                        </button>
                        <button
                            class="btn btn--primary"
                            type="submit"
                            disabled=move || submitting.get()
                        >
                            {move || if submitting.get() { "Guardando..." } else { "Guardar" }}
                        </button>
                    </div>
                </form>
            </Show>
        </main>
    }
}

/// One labelled form field with its validation message slot.
#[component]
fn FormField(
    label: &'static str,
    error: Signal<Option<String>>,
    children: Children,
) -> impl IntoView {
    view! {
        <label class="product-form__field" class:product-form__field--invalid=move || error.get().is_some()>
            <span class="product-form__label">{label}</span>
            {children()}
            <Show when=move || error.get().is_some()>
                <span class="product-form__error">{move || error.get().unwrap_or_default()}</span>
            </Show>
        </label>
    }
}
