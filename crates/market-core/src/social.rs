//! Social Actions
//!
//! Like/save/share state of the detail page.
//!
//! Likes are optimistic: the flag and count flip before the backend
//! answers, the server's status replaces them on success, and the snapshot
//! taken at trigger time is restored on failure. Saves and shares only
//! change after the backend accepted them.

use std::cell::RefCell;

use crate::backend::MarketBackend;
use crate::error::{MarketError, MarketResult};
use crate::models::{LikeStatus, LikeToggle, Viewer};

/// Social flags and counters for one idea and viewer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialState {
    liked: bool,
    like_count: u32,
    saved: bool,
    share_count: u32,
    /// Pre-trigger values of the like toggle in flight
    like_in_flight: Option<LikeStatus>,
}

/// Proof that a like toggle was started; consumed when it resolves.
#[derive(Debug)]
#[must_use]
pub struct LikeTicket {
    previous: LikeStatus,
}

impl SocialState {
    pub fn new(like: LikeStatus, saved: bool, share_count: u32) -> Self {
        Self {
            liked: like.liked,
            like_count: like.count,
            saved,
            share_count,
            like_in_flight: None,
        }
    }

    pub fn liked(&self) -> bool {
        self.liked
    }

    pub fn like_count(&self) -> u32 {
        self.like_count
    }

    pub fn saved(&self) -> bool {
        self.saved
    }

    pub fn share_count(&self) -> u32 {
        self.share_count
    }

    pub fn like_pending(&self) -> bool {
        self.like_in_flight.is_some()
    }

    fn like_status(&self) -> LikeStatus {
        LikeStatus {
            liked: self.liked,
            count: self.like_count,
        }
    }

    /// Apply the optimistic flip. `None` while another like is in flight.
    pub fn begin_like(&mut self) -> Option<LikeTicket> {
        if self.like_pending() {
            return None;
        }
        let previous = self.like_status();
        self.like_in_flight = Some(previous);
        self.liked = !previous.liked;
        self.like_count = if self.liked {
            previous.count + 1
        } else {
            previous.count.saturating_sub(1)
        };
        Some(LikeTicket { previous })
    }

    /// Reconcile with the backend: adopt its status, or roll back.
    ///
    /// A flip the backend applied but could not recount keeps the server's
    /// flag, with the count derived from the pre-trigger snapshot.
    pub fn finish_like(&mut self, ticket: LikeTicket, result: &MarketResult<LikeToggle>) {
        self.like_in_flight = None;
        let previous = ticket.previous;
        let status = match result {
            Ok(LikeToggle { liked, count: Some(count) }) => LikeStatus {
                liked: *liked,
                count: *count,
            },
            Ok(LikeToggle { liked, count: None }) => {
                log::warn!("like recount unavailable, keeping local count");
                let count = match (previous.liked, *liked) {
                    (false, true) => previous.count + 1,
                    (true, false) => previous.count.saturating_sub(1),
                    _ => previous.count,
                };
                LikeStatus { liked: *liked, count }
            }
            Err(err) => {
                log::warn!("like toggle failed, reverting: {err}");
                previous
            }
        };
        self.liked = status.liked;
        self.like_count = status.count;
    }

    pub fn set_saved(&mut self, saved: bool) {
        self.saved = saved;
    }

    pub fn add_share(&mut self) {
        self.share_count += 1;
    }
}

/// Somewhere the view keeps its `SocialState`.
///
/// Returns `None` when the state is gone, e.g. the view was unmounted
/// while a request was in flight.
pub trait SocialStore {
    fn with_social<R>(&self, f: impl FnOnce(&mut SocialState) -> R) -> Option<R>;
}

impl SocialStore for RefCell<SocialState> {
    fn with_social<R>(&self, f: impl FnOnce(&mut SocialState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Optimistic like round trip.
///
/// No viewer: rejected with the login prompt before any state change or
/// request. A trigger while a like is already in flight is ignored.
pub async fn toggle_like<B, S>(
    backend: &B,
    store: &S,
    idea_id: &str,
    viewer: Option<&Viewer>,
) -> MarketResult<()>
where
    B: MarketBackend + ?Sized,
    S: SocialStore,
{
    let viewer = viewer.ok_or_else(MarketError::login_to_like)?;
    let Some(ticket) = store.with_social(SocialState::begin_like).flatten() else {
        log::debug!("like for {idea_id} already in flight");
        return Ok(());
    };

    let result = backend.toggle_like(idea_id, &viewer.id).await;
    store.with_social(|social| social.finish_like(ticket, &result));
    result.map(|_| ())
}

/// Save round trip; the flag changes only to the backend's answer.
pub async fn toggle_save<B, S>(
    backend: &B,
    store: &S,
    idea_id: &str,
    viewer: Option<&Viewer>,
) -> MarketResult<()>
where
    B: MarketBackend + ?Sized,
    S: SocialStore,
{
    let viewer = viewer.ok_or_else(MarketError::login_to_save)?;
    let saved = backend.toggle_save(idea_id, &viewer.id).await?;
    store.with_social(|social| social.set_saved(saved));
    Ok(())
}

/// Record a share; counted locally once the backend accepted it.
pub async fn record_share<B, S>(
    backend: &B,
    store: &S,
    idea_id: &str,
    viewer: Option<&Viewer>,
) -> MarketResult<()>
where
    B: MarketBackend + ?Sized,
    S: SocialStore,
{
    backend
        .track_share(idea_id, viewer.map(|v| v.id.as_str()))
        .await?;
    store.with_social(SocialState::add_share);
    Ok(())
}
