//! Transient UI chrome state: the cart notification toast.
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of domain state (`cart`, `catalog`) so the
//! toast can evolve independently of container data. The sequence counter
//! lets the toast restart its auto-dismiss timer when a new notification
//! replaces one that is still visible.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// A toast notification shown after cart mutations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub subtitle: Option<String>,
}

/// UI state for transient chrome.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub notification: Option<Notification>,
    /// Bumped on every `notify` so timers can key off it.
    pub notification_seq: u64,
}

impl UiState {
    /// Show (or replace) the toast.
    pub fn notify(&mut self, message: impl Into<String>, subtitle: Option<String>) {
        self.notification = Some(Notification { message: message.into(), subtitle });
        self.notification_seq += 1;
    }

    /// Hide the toast.
    pub fn dismiss(&mut self) {
        self.notification = None;
    }
}
