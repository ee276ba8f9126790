//! Sort Menu Component
//!
//! Popover with the four sort choices and a clear action.

use leptos::prelude::*;

use market_core::filters::SORT_CHOICES;
use market_core::{FilterState, SortOption};

#[component]
pub fn SortMenu(
    filters: RwSignal<FilterState>,
    /// Called once per effective sort change
    #[prop(into)] on_refetch: Callback<()>,
) -> impl IntoView {
    let (open, set_open) = signal(false);

    let choose = move |sort: Option<SortOption>| {
        if filters.try_update(|f| f.set_sort(sort)).unwrap_or(false) {
            on_refetch.run(());
        }
        set_open.set(false);
    };

    let button_class = move || {
        if open.get() || filters.with(|f| f.sort().is_some()) {
            "menu-btn active"
        } else {
            "menu-btn"
        }
    };

    view! {
        <div class="menu-anchor">
            <button class=button_class on:click=move |_| set_open.update(|o| *o = !*o)>
                "Sort"
            </button>

            <Show when=move || open.get()>
                <div class="menu-backdrop" on:click=move |_| set_open.set(false)></div>
                <div class="menu-popover">
                    <h3 class="menu-heading">"Sort By"</h3>
                    {SORT_CHOICES.iter().map(|(label, option)| {
                        let option = *option;
                        view! {
                            <label class="menu-option">
                                <input
                                    type="checkbox"
                                    prop:checked=move || filters.with(|f| f.sort() == Some(option))
                                    on:change=move |_| choose(Some(option))
                                />
                                <span>{*label}</span>
                            </label>
                        }
                    }).collect_view()}
                    <Show when=move || filters.with(|f| f.sort().is_some())>
                        <button class="menu-clear" on:click=move |_| choose(None)>"Clear Sort"</button>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
