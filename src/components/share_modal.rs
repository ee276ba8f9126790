//! Share Modal Component
//!
//! Shows the page link with a copy action.

use leptos::prelude::*;

#[component]
pub fn ShareModal(
    /// Link being shared
    url: String,
    copied: ReadSignal<bool>,
    #[prop(into)] on_copy: Callback<()>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <button class="modal-close" on:click=move |_| on_close.run(())>"×"</button>
                <h3>"Share this Idea"</h3>
                <input class="share-url" type="text" readonly=true prop:value=url />
                <button
                    class=move || if copied.get() { "copy-btn copied" } else { "copy-btn" }
                    on:click=move |_| on_copy.run(())
                >
                    {move || if copied.get() { "Copied to Clipboard!" } else { "Copy Link" }}
                </button>
            </div>
        </div>
    }
}
