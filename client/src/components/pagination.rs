//! Shop pagination control.
//!
//! Renders prev/next plus a page window computed by
//! [`crate::state::catalog::visible_pages`]; hidden entirely for a single
//! page.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::catalog::visible_pages;

/// Page picker. `current` and `total` are 1-based.
#[component]
pub fn Pagination(
    current: Signal<usize>,
    total: Signal<usize>,
    on_page: Callback<usize>,
) -> impl IntoView {
    view! {
        <Show when=move || { total.get() > 1 }>
            <div class="pagination">
                <button
                    class="btn pagination__prev"
                    disabled=move || current.get() == 1
                    on:click=move |_| {
                        let page = current.get();
                        if page > 1 {
                            on_page.run(page - 1);
                        }
                    }
                >
                    "Anterior"
                </button>

                <div class="pagination__pages">
                    {move || {
                        visible_pages(current.get(), total.get())
                            .into_iter()
                            .map(|entry| match entry {
                                Some(page) => {
                                    let is_current = page == current.get();
                                    view! {
                                        <button
                                            class="btn pagination__page"
                                            class:pagination__page--current=is_current
                                            on:click=move |_| on_page.run(page)
                                        >
                                            {page}
                                        </button>
                                    }
                                    .into_any()
                                }
                                None => view! { <span class="pagination__dots">"..."</span> }.into_any(),
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>

                <button
                    class="btn pagination__next"
                    disabled=move || current.get() == total.get()
                    on:click=move |_| {
                        let page = current.get();
                        if page < total.get() {
                            on_page.run(page + 1);
                        }
                    }
                >
                    "Siguiente"
                </button>
            </div>
        </Show>
    }
}
