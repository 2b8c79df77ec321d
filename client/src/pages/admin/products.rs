//! Admin product table with edit and delete actions.
//!
//! ERROR HANDLING
//! ==============
//! Store failures surface as a retryable banner above the table; deletes go
//! through a confirmation dialog and reload the list on success.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::header::Header;
use crate::components::seo::Seo;
use crate::net::types::Product;
use crate::state::auth::AuthState;
use crate::util::format::price_label;
use crate::util::guard::install_admin_redirect;

/// Admin-local product list state; always fetched fresh, never shared with
/// the shop catalog, so edits are visible immediately after navigation.
#[derive(Clone, Debug, Default)]
struct AdminListState {
    items: Vec<Product>,
    loading: bool,
    error: Option<String>,
}

fn load_list(list: RwSignal<AdminListState>) {
    #[cfg(feature = "hydrate")]
    {
        list.update(|s| {
            s.loading = true;
            s.error = None;
        });
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_products().await {
                Ok(items) => list.update(|s| {
                    s.items = items;
                    s.loading = false;
                }),
                Err(message) => list.update(|s| {
                    s.error = Some(message);
                    s.loading = false;
                }),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = list;
    }
}

fn delete_and_reload(id: i64, list: RwSignal<AdminListState>) {
    #[cfg(feature = "hydrate")]
    {
        list.update(|s| s.loading = true);
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_product(id).await {
                Ok(()) => load_list(list),
                Err(message) => list.update(|s| {
                    s.error = Some(message);
                    s.loading = false;
                }),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, list);
    }
}

/// Admin product table — routed as `/admin/products`.
#[component]
pub fn AdminProductsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    install_admin_redirect(auth, navigate);

    let list = RwSignal::new(AdminListState::default());
    let delete_target = RwSignal::new(None::<Product>);

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        load_list(list);
    });

    let on_retry = move |_| load_list(list);
    let on_delete_cancel = Callback::new(move |()| delete_target.set(None));
    let on_delete_confirm = Callback::new(move |()| {
        if let Some(product) = delete_target.get_untracked() {
            delete_and_reload(product.id, list);
        }
        delete_target.set(None);
    });

    view! {
        <Seo
            title="Productos - Administración | FiloSharp"
            description="Gestiona el catálogo de productos de FiloSharp."
            keywords="admin, productos, FiloSharp"
        />
        <Header/>

        <main class="admin-page">
            <div class="admin-page__toolbar">
                <h1>"Productos"</h1>
                <a href="/admin/products/new" class="btn btn--primary">
                    "+ Nuevo producto"
                </a>
            </div>

            <Show when=move || list.get().error.is_some()>
                <div class="banner banner--error">
                    <span>{move || list.get().error.unwrap_or_default()}</span>
                    <button class="btn banner__retry" on:click=on_retry>
                        "Reintentar"
                    </button>
                </div>
            </Show>

            <Show
                when=move || !list.get().loading
                fallback=|| view! { <p>"Cargando productos..."</p> }
            >
                <table class="admin-table">
                    <thead>
                        <tr>
                            <th>"Id"</th>
                            <th>"Título"</th>
                            <th>"Categoría"</th>
                            <th>"Precio"</th>
                            <th>"Acciones"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            list.get()
                                .items
                                .into_iter()
                                .map(|product| {
                                    let edit_href =
                                        format!("/admin/products/{}/edit", product.id);
                                    let product_for_delete = product.clone();
                                    view! {
                                        <tr>
                                            <td>{product.id}</td>
                                            <td>{product.title.clone()}</td>
                                            <td>{product.category.clone()}</td>
                                            <td>{price_label(product.price)}</td>
                                            <td class="admin-table__actions">
                                                <a href=edit_href class="btn">"Editar"</a>
                                                <button
                                                    class="btn btn--danger"
                                                    on:click=move |_| {
                                                        delete_target
                                                            .set(Some(product_for_delete.clone()));
                                                    }
                                                >
                                                    "Eliminar"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
                <Show when=move || list.get().items.is_empty() && list.get().error.is_none()>
                    <p class="admin-page__empty">"No hay productos en el catálogo."</p>
                </Show>
            </Show>

            <Show when=move || delete_target.get().is_some()>
                <DeleteProductDialog
                    title=Signal::derive(move || {
                        delete_target.get().map(|p| p.title).unwrap_or_default()
                    })
                    on_cancel=on_delete_cancel
                    on_confirm=on_delete_confirm
                />
            </Show>
        </main>
    }
}

/// Confirmation dialog for a product delete.
#[component]
fn DeleteProductDialog(
    title: Signal<String>,
    on_cancel: Callback<()>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Eliminar producto"</h2>
                <p class="dialog__danger">
                    {move || format!("Se eliminará \"{}\" de forma permanente.", title.get())}
                </p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancelar"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                        "Eliminar"
                    </button>
                </div>
            </div>
        </div>
    }
}
