//! Supabase Backend
//!
//! `MarketBackend` over the Supabase REST (PostgREST) and auth endpoints,
//! organized by domain.

mod auth;
mod ideas;
mod social;

use async_trait::async_trait;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use market_core::models::{DetailRecord, LikeStatus, LikeToggle, ListingRecord, Viewer};
use market_core::postgrest::parse_content_range;
use market_core::{ListingQuery, MarketBackend, MarketError, MarketResult};

use crate::config::AppConfig;

/// REST client for one Supabase project
#[derive(Clone)]
pub struct SupabaseBackend {
    client: reqwest::Client,
    config: AppConfig,
}

impl SupabaseBackend {
    pub fn new(config: AppConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn rest_url(&self, relation: &str) -> String {
        format!("{}/rest/v1/{}", self.config.supabase_url, relation)
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.config.supabase_url, path)
    }

    /// API key plus the viewer's token, or the anon key when signed out.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let token = auth::stored_access_token(&self.config.auth_storage_key)
            .unwrap_or_else(|| self.config.anon_key.clone());
        request
            .header("apikey", &self.config.anon_key)
            .bearer_auth(token)
    }

    async fn send(&self, request: RequestBuilder) -> MarketResult<Response> {
        self.config.validate()?;
        let response = self.authorize(request).send().await.map_err(transport)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        log::warn!("backend answered {status}: {message}");
        Err(MarketError::Http {
            status: status.as_u16(),
            message,
        })
    }

    async fn select<T: DeserializeOwned>(
        &self,
        relation: &str,
        params: &[(&str, String)],
    ) -> MarketResult<Vec<T>> {
        let request = self.client.get(self.rest_url(relation)).query(params);
        self.send(request)
            .await?
            .json()
            .await
            .map_err(|e| MarketError::Decode(e.to_string()))
    }

    /// Exact row count of a filtered relation
    async fn count(&self, relation: &str, params: &[(&str, String)]) -> MarketResult<u32> {
        let request = self
            .client
            .head(self.rest_url(relation))
            .query(params)
            .header("Prefer", "count=exact");
        let response = self.send(request).await?;
        response
            .headers()
            .get("content-range")
            .and_then(|value| value.to_str().ok())
            .and_then(parse_content_range)
            .ok_or_else(|| MarketError::Decode(format!("no row count for {relation}")))
    }

    async fn insert<T: Serialize + ?Sized>(&self, relation: &str, row: &T) -> MarketResult<()> {
        let request = self
            .client
            .post(self.rest_url(relation))
            .header("Prefer", "return=minimal")
            .json(row);
        self.send(request).await.map(|_| ())
    }

    async fn delete(&self, relation: &str, params: &[(&str, String)]) -> MarketResult<()> {
        let request = self.client.delete(self.rest_url(relation)).query(params);
        self.send(request).await.map(|_| ())
    }
}

fn transport(err: reqwest::Error) -> MarketError {
    MarketError::Transport(err.to_string())
}

#[async_trait(?Send)]
impl MarketBackend for SupabaseBackend {
    async fn list_listings(&self, query: &ListingQuery) -> MarketResult<Vec<ListingRecord>> {
        self.listings(query).await
    }

    async fn fetch_detail(&self, idea_id: &str) -> MarketResult<Option<DetailRecord>> {
        self.detail(idea_id).await
    }

    async fn like_status(&self, idea_id: &str, viewer_id: Option<&str>) -> MarketResult<LikeStatus> {
        self.likes(idea_id, viewer_id).await
    }

    async fn toggle_like(&self, idea_id: &str, viewer_id: &str) -> MarketResult<LikeToggle> {
        self.flip_like(idea_id, viewer_id).await
    }

    async fn save_status(&self, idea_id: &str, viewer_id: &str) -> MarketResult<bool> {
        self.is_saved(idea_id, viewer_id).await
    }

    async fn toggle_save(&self, idea_id: &str, viewer_id: &str) -> MarketResult<bool> {
        self.flip_save(idea_id, viewer_id).await
    }

    async fn share_count(&self, idea_id: &str) -> MarketResult<u32> {
        self.shares(idea_id).await
    }

    async fn track_share(&self, idea_id: &str, viewer_id: Option<&str>) -> MarketResult<()> {
        self.add_share(idea_id, viewer_id).await
    }

    async fn current_user(&self) -> MarketResult<Option<Viewer>> {
        self.viewer().await
    }
}
