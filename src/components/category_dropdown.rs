//! Category Dropdown Component

use leptos::prelude::*;

use market_core::categories::CATEGORIES;

/// Category picker; the empty value means all categories
#[component]
pub fn CategoryDropdown(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(into)] placeholder: String,
) -> impl IntoView {
    view! {
        <select
            class="category-dropdown"
            prop:value=move || value.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <option value="">{placeholder}</option>
            {CATEGORIES.iter().map(|category| view! {
                <option value=*category>{*category}</option>
            }).collect_view()}
        </select>
    }
}
