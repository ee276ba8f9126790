//! Loading and error panels shared by the views.

use leptos::prelude::*;

use crate::navigation;

#[component]
pub fn LoadingPanel(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="loading-panel">
            <div class="spinner"></div>
            <p>{message}</p>
        </div>
    }
}

/// Detail page opened without an idea id
#[component]
pub fn InvalidIdeaPanel() -> impl IntoView {
    view! {
        <div class="invalid-idea">
            <h1>"Invalid Idea ID"</h1>
            <a href=navigation::MARKETPLACE_PAGE>"Return to Marketplace"</a>
        </div>
    }
}
