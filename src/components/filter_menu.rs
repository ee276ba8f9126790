//! Filter Menu Component
//!
//! Feature checkboxes and the max-price slider. The slider only commits
//! when the pointer or touch is released.

use leptos::prelude::*;

use market_core::filters::{MAX_PRICE, PRICE_STEP};
use market_core::FilterState;

use crate::format::format_price;

#[component]
pub fn FilterMenu(
    filters: RwSignal<FilterState>,
    /// Called once per effective filter change
    #[prop(into)] on_refetch: Callback<()>,
) -> impl IntoView {
    let (open, set_open) = signal(false);

    let apply = move |change: &dyn Fn(&mut FilterState) -> bool| {
        if filters.try_update(|f| change(f)).unwrap_or(false) {
            on_refetch.run(());
        }
    };

    let commit_price = move || apply(&|f| f.commit_price());

    let button_class = move || {
        if open.get() || filters.with(FilterState::is_filtering) {
            "menu-btn active"
        } else {
            "menu-btn"
        }
    };

    view! {
        <div class="menu-anchor">
            <button class=button_class on:click=move |_| set_open.update(|o| *o = !*o)>
                "Filter"
            </button>

            <Show when=move || open.get()>
                <div class="menu-backdrop" on:click=move |_| set_open.set(false)></div>
                <div class="menu-popover wide">
                    <h3 class="menu-heading">"Features"</h3>
                    <label class="menu-option">
                        <input
                            type="checkbox"
                            prop:checked=move || filters.with(FilterState::has_mvp)
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                apply(&|f| f.set_has_mvp(checked));
                            }
                        />
                        <span>"MVP Available"</span>
                    </label>
                    <label class="menu-option">
                        <input
                            type="checkbox"
                            prop:checked=move || filters.with(FilterState::has_docs)
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                apply(&|f| f.set_has_docs(checked));
                            }
                        />
                        <span>"Additional Documents"</span>
                    </label>

                    <div class="price-header">
                        <h3 class="menu-heading">"Max Price"</h3>
                        <span class="price-value">
                            {move || format_price(filters.with(FilterState::max_price) as f64)}
                        </span>
                    </div>
                    <input
                        class="price-slider"
                        type="range"
                        min="0"
                        max=MAX_PRICE
                        step=PRICE_STEP
                        prop:value=move || filters.with(FilterState::max_price).to_string()
                        on:input=move |ev| {
                            if let Ok(value) = event_target_value(&ev).parse::<u32>() {
                                filters.update(|f| f.drag_price(value));
                            }
                        }
                        on:mouseup=move |_| commit_price()
                        on:touchend=move |_| commit_price()
                        // Keyboard adjustments end with a change event
                        on:change=move |_| commit_price()
                    />
                    <div class="price-scale">
                        <span>"$0"</span>
                        <span>{format!("{}+", format_price(MAX_PRICE as f64))}</span>
                    </div>

                    <button class="menu-reset" on:click=move |_| apply(&|f| f.reset_filters())>
                        "Reset Filters"
                    </button>
                </div>
            </Show>
        </div>
    }
}
