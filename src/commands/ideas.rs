//! Listing and detail queries.

use market_core::models::{DetailRecord, ListingRecord};
use market_core::postgrest::{self, DETAIL_VIEW, LISTING_VIEW};
use market_core::{ListingQuery, MarketResult};

use super::SupabaseBackend;

impl SupabaseBackend {
    pub(super) async fn listings(&self, query: &ListingQuery) -> MarketResult<Vec<ListingRecord>> {
        let params = postgrest::listing_params(query);
        log::debug!("listing query: {params:?}");
        let records: Vec<ListingRecord> = self.select(LISTING_VIEW, &params).await?;
        log::info!("loaded {} listings", records.len());
        Ok(records)
    }

    pub(super) async fn detail(&self, idea_id: &str) -> MarketResult<Option<DetailRecord>> {
        let params = [
            ("select", "*".to_string()),
            ("idea_id", postgrest::eq(idea_id)),
            ("limit", "1".to_string()),
        ];
        let rows: Vec<DetailRecord> = self.select(DETAIL_VIEW, &params).await?;
        Ok(rows.into_iter().next())
    }
}
