//! Auto-dismissing toast shown after cart mutations.
//!
//! TIMERS
//! ======
//! Each notification arms a single fire-once timeout. Replacing the
//! notification re-arms it, and unmounting the component drops the pending
//! timeout before it fires — the only cancellation semantic in the app.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Milliseconds before the toast dismisses itself.
#[cfg(feature = "hydrate")]
const AUTO_CLOSE_MS: u32 = 3000;

/// Toast overlay bound to [`UiState::notification`].
#[component]
pub fn CartNotification() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    #[cfg(feature = "hydrate")]
    {
        use gloo_timers::callback::Timeout;
        use std::cell::RefCell;
        use std::rc::Rc;

        let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
        let pending_effect = Rc::clone(&pending);
        Effect::new(move || {
            let state = ui.get();
            if state.notification.is_none() {
                // Dropping a pending timeout cancels it.
                pending_effect.borrow_mut().take();
                return;
            }
            let timer = Timeout::new(AUTO_CLOSE_MS, move || {
                ui.update(|u| u.dismiss());
            });
            *pending_effect.borrow_mut() = Some(timer);
        });
        on_cleanup(move || {
            pending.borrow_mut().take();
        });
    }

    let message = move || {
        ui.get()
            .notification
            .map(|n| n.message)
            .unwrap_or_default()
    };
    let subtitle = move || ui.get().notification.and_then(|n| n.subtitle);

    view! {
        <Show when=move || ui.get().notification.is_some()>
            <div class="toast-backdrop" on:click=move |_| ui.update(|u| u.dismiss())>
                <div class="toast" on:click=move |ev| ev.stop_propagation()>
                    <h3 class="toast__message">{message}</h3>
                    <Show when=move || subtitle().is_some()>
                        <p class="toast__subtitle">{move || subtitle().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn toast__accept" on:click=move |_| ui.update(|u| u.dismiss())>
                        "Aceptar"
                    </button>
                </div>
            </div>
        </Show>
    }
}
