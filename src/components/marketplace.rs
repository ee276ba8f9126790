//! Marketplace Listing View
//!
//! Search, category, sort and filter controls over the listing grid.

use leptos::prelude::*;
use leptos::task::spawn_local;

use market_core::{FilterState, ListingPhase, ListingView};

use crate::browser;
use crate::components::{CategoryDropdown, FilterMenu, ListingCard, LoadingPanel, SortMenu};
use crate::context::use_app_context;
use crate::navigation;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Marketplace() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let filters = RwSignal::new(FilterState::new());
    let listing = RwSignal::new(ListingView::new());

    // Issue a fetch for the current filters; a newer fetch supersedes it
    let fetch_items = move || {
        let query = filters.with_untracked(FilterState::query);
        let Some(ticket) = listing.try_update(ListingView::begin) else {
            return;
        };
        let backend = ctx.backend();
        spawn_local(async move {
            let result = backend.list_listings(&query).await;
            listing.try_update(|view| view.complete(ticket, result));
        });
    };

    let refetch = Callback::new(move |_: ()| fetch_items());

    // Run a filter mutation and fetch if it changed anything
    let apply = move |change: &dyn Fn(&mut FilterState) -> bool| {
        if filters.try_update(|f| change(f)).unwrap_or(false) {
            fetch_items();
        }
    };

    fetch_items();

    let signed_in = move || store.viewer().get().is_some();

    let on_add_listing = move |_| {
        browser::navigate(navigation::add_listing_target(signed_in()));
    };

    view! {
        <div class="marketplace">
            <div class="marketplace-header">
                <div>
                    <h1>"Marketplace"</h1>
                    <p class="subtitle">
                        "Discover verified business concepts, IP, and franchise opportunities ready for acquisition."
                    </p>
                </div>
                <button class="add-listing-btn" on:click=on_add_listing>
                    "+ Add new listing"
                </button>
            </div>

            <div class="toolbar">
                <input
                    class="search-input"
                    type="text"
                    placeholder="Search assets, industries, or keywords..."
                    prop:value=move || filters.with(|f| f.search_input().to_string())
                    on:input=move |ev| filters.update(|f| f.set_search_input(event_target_value(&ev)))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            apply(&|f| f.submit_search());
                        }
                    }
                />

                <CategoryDropdown
                    value=Signal::derive(move || filters.with(|f| f.category().to_string()))
                    on_change=Callback::new(move |category: String| {
                        apply(&|f| f.set_category(category.clone()));
                    })
                    placeholder="All Categories"
                />

                <div class="toolbar-menus">
                    <SortMenu filters=filters on_refetch=refetch />
                    <FilterMenu filters=filters on_refetch=refetch />
                </div>
            </div>

            {move || listing.with(|state| match state.phase() {
                ListingPhase::Loading => view! {
                    <LoadingPanel message="Loading marketplace..." />
                }.into_any(),
                ListingPhase::Failed(message) => view! {
                    <div class="error-panel">
                        <p class="error-text">{message.clone()}</p>
                        <button class="retry-btn" on:click=move |_| fetch_items()>"Try Again"</button>
                    </div>
                }.into_any(),
                ListingPhase::Ready(records) if records.is_empty() => view! {
                    <div class="empty-state">
                        <p class="empty-title">"No matching results found"</p>
                        <p class="empty-hint">"Try adjusting your filters or search terms."</p>
                        <button class="clear-all-btn" on:click=move |_| apply(&|f| f.clear_all())>
                            "Clear all filters"
                        </button>
                    </div>
                }.into_any(),
                ListingPhase::Ready(records) => {
                    let cards = records
                        .iter()
                        .cloned()
                        .enumerate()
                        .map(|(index, record)| {
                            let on_open = Callback::new(move |idea_id: String| {
                                browser::navigate(&navigation::listing_target(signed_in(), &idea_id));
                            });
                            view! { <ListingCard record=record index=index on_open=on_open /> }
                        })
                        .collect_view();
                    view! { <div class="listing-grid">{cards}</div> }.into_any()
                }
            })}
        </div>
    }
}
