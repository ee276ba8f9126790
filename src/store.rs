//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use market_core::{SocialState, SocialStore, Viewer};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Signed-in user, if any
    pub viewer: Option<Viewer>,
    /// Whether the current-user lookup has finished
    pub viewer_checked: bool,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Record the outcome of the current-user lookup
pub fn store_set_viewer(store: &AppStore, viewer: Option<Viewer>) {
    *store.viewer().write() = viewer;
    *store.viewer_checked().write() = true;
}

/// Social state kept in a signal, for the round-trip helpers
#[derive(Clone, Copy)]
pub struct SignalSocial(pub RwSignal<SocialState>);

impl SocialStore for SignalSocial {
    fn with_social<R>(&self, f: impl FnOnce(&mut SocialState) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}
