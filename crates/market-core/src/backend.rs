//! Backend Contract
//!
//! Queries and mutations the marketplace needs from the hosted backend.
//! Futures are `?Send`: the only runtime is the browser event loop.

use async_trait::async_trait;

use crate::error::MarketResult;
use crate::filters::ListingQuery;
use crate::models::{DetailRecord, LikeStatus, LikeToggle, ListingRecord, Viewer};

#[async_trait(?Send)]
pub trait MarketBackend {
    /// Filtered, sorted listing page
    async fn list_listings(&self, query: &ListingQuery) -> MarketResult<Vec<ListingRecord>>;

    /// One idea by id; `None` when it does not exist
    async fn fetch_detail(&self, idea_id: &str) -> MarketResult<Option<DetailRecord>>;

    /// Global like count, plus whether `viewer_id` liked it when given
    async fn like_status(&self, idea_id: &str, viewer_id: Option<&str>) -> MarketResult<LikeStatus>;

    /// Flip the viewer's like. `Err` only when the flip itself failed; a
    /// recount that fails after a successful flip comes back as `count: None`.
    async fn toggle_like(&self, idea_id: &str, viewer_id: &str) -> MarketResult<LikeToggle>;

    async fn save_status(&self, idea_id: &str, viewer_id: &str) -> MarketResult<bool>;

    /// Flip the viewer's save; returns the authoritative flag afterwards
    async fn toggle_save(&self, idea_id: &str, viewer_id: &str) -> MarketResult<bool>;

    async fn share_count(&self, idea_id: &str) -> MarketResult<u32>;

    /// Record one share; anonymous shares are allowed
    async fn track_share(&self, idea_id: &str, viewer_id: Option<&str>) -> MarketResult<()>;

    /// The signed-in user, if any
    async fn current_user(&self) -> MarketResult<Option<Viewer>>;
}
