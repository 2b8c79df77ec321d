//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical redirect behavior: checkout needs
//! an authenticated session, admin routes additionally need the admin role.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && !state.is_authenticated() {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Redirect authenticated non-admins home and unauthenticated visitors to
/// `/login`. Used by every `/admin/**` route.
pub fn install_admin_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        let state = auth.get();
        if state.loading {
            return;
        }
        if !state.is_authenticated() {
            navigate("/login", NavigateOptions::default());
        } else if !state.is_admin() {
            navigate("/", NavigateOptions::default());
        }
    });
}
