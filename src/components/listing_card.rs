//! Listing Card Component
//!
//! One grid card: seller, rating, title, three score gauges and price.

use leptos::prelude::*;

use market_core::categories::card_accent;
use market_core::ListingRecord;

use crate::format::{display_username, format_price, gauge_value, radial_dash, radial_tone, RADIAL_RADIUS};

/// Circular 0..100 score gauge
#[component]
pub fn MiniRadial(value: u32) -> impl IntoView {
    let (circumference, offset) = radial_dash(value);
    let tone = radial_tone(value);

    view! {
        <div class="mini-radial">
            <svg viewBox="0 0 40 40">
                <circle class="radial-track" cx="20" cy="20" r=RADIAL_RADIUS fill="transparent" stroke-width="3" />
                <circle
                    class=format!("radial-value {}", tone)
                    cx="20"
                    cy="20"
                    r=RADIAL_RADIUS
                    fill="transparent"
                    stroke-width="3"
                    stroke-dasharray=circumference
                    stroke-dashoffset=offset
                    stroke-linecap="round"
                />
            </svg>
            <span class=format!("radial-label {}", tone)>{value}</span>
        </div>
    }
}

#[component]
pub fn ListingCard(
    record: ListingRecord,
    /// Position in the grid, picks the accent colour
    index: usize,
    #[prop(into)] on_open: Callback<String>,
) -> impl IntoView {
    let idea_id = record.idea_id.clone();
    let overall_gauge = (record.overall_score * 10.0).round().clamp(0.0, 100.0) as u32;
    let mvp = record.mvp;

    view! {
        <div class="listing-card" on:click=move |_| on_open.run(idea_id.clone())>
            <div class=format!("card-accent {}", card_accent(index))></div>

            <div class="card-header">
                <span class="card-username">{display_username(&record.username)}</span>
                <span class="card-rating">"★ " {format!("{:.1}", record.overall_score)}</span>
            </div>

            <h4 class="card-title">{record.title.clone()}</h4>
            <p class="card-description">{record.description.clone()}</p>

            <div class="card-gauges">
                <MiniRadial value=gauge_value(record.uniqueness) />
                <MiniRadial value=gauge_value(record.viability) />
                <MiniRadial value=overall_gauge />
            </div>

            <div class="card-footer">
                <div>
                    <div class="card-price-label">"Asking price"</div>
                    <div class="card-price">{format_price(record.price)}</div>
                </div>
                <Show when=move || mvp>
                    <span class="mvp-badge">"MVP"</span>
                </Show>
            </div>
        </div>
    }
}
