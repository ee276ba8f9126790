//! Like, save and share rows.

use serde::Serialize;

use market_core::models::{LikeStatus, LikeToggle};
use market_core::postgrest::{eq, LIKES_TABLE, SAVES_TABLE, SHARES_TABLE};
use market_core::MarketResult;

use super::SupabaseBackend;

#[derive(Serialize)]
struct ViewerRow<'a> {
    idea_id: &'a str,
    user_id: &'a str,
}

#[derive(Serialize)]
struct ShareRow<'a> {
    idea_id: &'a str,
    user_id: Option<&'a str>,
}

fn idea_filter(idea_id: &str) -> Vec<(&'static str, String)> {
    vec![("idea_id", eq(idea_id))]
}

fn viewer_filter(idea_id: &str, viewer_id: &str) -> Vec<(&'static str, String)> {
    vec![("idea_id", eq(idea_id)), ("user_id", eq(viewer_id))]
}

impl SupabaseBackend {
    async fn has_row(&self, table: &str, idea_id: &str, viewer_id: &str) -> MarketResult<bool> {
        let mut params = viewer_filter(idea_id, viewer_id);
        params.push(("select", "idea_id".to_string()));
        params.push(("limit", "1".to_string()));
        let rows: Vec<serde_json::Value> = self.select(table, &params).await?;
        Ok(!rows.is_empty())
    }

    /// Insert or delete the viewer's row; returns whether it now exists.
    async fn flip_row(&self, table: &str, idea_id: &str, viewer_id: &str) -> MarketResult<bool> {
        if self.has_row(table, idea_id, viewer_id).await? {
            self.delete(table, &viewer_filter(idea_id, viewer_id)).await?;
            Ok(false)
        } else {
            self.insert(table, &ViewerRow { idea_id, user_id: viewer_id }).await?;
            Ok(true)
        }
    }

    pub(super) async fn likes(&self, idea_id: &str, viewer_id: Option<&str>) -> MarketResult<LikeStatus> {
        let liked = match viewer_id {
            Some(viewer_id) => self.has_row(LIKES_TABLE, idea_id, viewer_id).await?,
            None => false,
        };
        let count = self.count(LIKES_TABLE, &idea_filter(idea_id)).await?;
        Ok(LikeStatus { liked, count })
    }

    /// The flip is already stored once `flip_row` returns, so a failed
    /// recount is logged and reported as an unknown count.
    pub(super) async fn flip_like(&self, idea_id: &str, viewer_id: &str) -> MarketResult<LikeToggle> {
        let liked = self.flip_row(LIKES_TABLE, idea_id, viewer_id).await?;
        let count = match self.count(LIKES_TABLE, &idea_filter(idea_id)).await {
            Ok(count) => Some(count),
            Err(e) => {
                log::warn!("idea {idea_id}: like stored but recount failed: {e}");
                None
            }
        };
        log::info!("idea {idea_id} liked={liked}, {count:?} likes");
        Ok(LikeToggle { liked, count })
    }

    pub(super) async fn is_saved(&self, idea_id: &str, viewer_id: &str) -> MarketResult<bool> {
        self.has_row(SAVES_TABLE, idea_id, viewer_id).await
    }

    pub(super) async fn flip_save(&self, idea_id: &str, viewer_id: &str) -> MarketResult<bool> {
        let saved = self.flip_row(SAVES_TABLE, idea_id, viewer_id).await?;
        log::info!("idea {idea_id} saved={saved}");
        Ok(saved)
    }

    pub(super) async fn shares(&self, idea_id: &str) -> MarketResult<u32> {
        self.count(SHARES_TABLE, &idea_filter(idea_id)).await
    }

    pub(super) async fn add_share(&self, idea_id: &str, viewer_id: Option<&str>) -> MarketResult<()> {
        self.insert(SHARES_TABLE, &ShareRow { idea_id, user_id: viewer_id }).await
    }
}
