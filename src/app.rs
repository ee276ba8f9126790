//! Idea Market Frontend App
//!
//! Resolves the current user and mounts the view matching the location.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::browser;
use crate::commands::SupabaseBackend;
use crate::components::{InvalidIdeaPanel, ItemDetails, Marketplace};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::navigation::{self, Page};
use crate::store::{store_set_viewer, AppState};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let backend = Rc::new(SupabaseBackend::new(config));
    let ctx = AppContext::new(backend);
    provide_context(ctx);

    let store = Store::new(AppState::default());
    provide_context(store);

    // Current user, once per page load
    spawn_local(async move {
        let viewer = match ctx.backend().current_user().await {
            Ok(viewer) => viewer,
            Err(e) => {
                log::error!("current user lookup failed: {e}");
                None
            }
        };
        log::info!("viewer: {:?}", viewer.as_ref().map(|v| &v.id));
        store_set_viewer(&store, viewer);
    });

    let (pathname, search) = browser::location();
    let page = Page::from_location(&pathname, &search);
    log::debug!("mounting {page:?} for {pathname}{search}");

    view! {
        <div class="app-shell">
            {match page {
                Page::Marketplace => view! { <Marketplace /> }.into_any(),
                Page::Details(Some(idea_id)) => view! {
                    <ItemDetails
                        idea_id=idea_id
                        on_back=Callback::new(|_| browser::navigate(navigation::MARKETPLACE_PAGE))
                    />
                }.into_any(),
                Page::Details(None) => view! { <InvalidIdeaPanel /> }.into_any(),
            }}
        </div>
    }
}
