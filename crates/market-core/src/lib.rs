//! Market Core
//!
//! Domain layer of the idea marketplace front-end:
//! - models: records returned by the backend
//! - filters: listing filter/sort state and fetch triggers
//! - listing: listing fetch phases and supersession
//! - social: like/save/share state with optimistic like toggling
//! - detail: detail page loading and seller contact rules
//! - backend: the backend contract
//! - postgrest: query encoding for a PostgREST backend

pub mod backend;
pub mod categories;
pub mod detail;
pub mod error;
pub mod filters;
pub mod listing;
pub mod models;
pub mod postgrest;
pub mod social;

#[cfg(test)]
mod tests;

pub use backend::MarketBackend;
pub use error::{MarketError, MarketResult};
pub use filters::{FilterState, ListingQuery, SortDirection, SortField, SortOption};
pub use listing::{FetchTicket, ListingPhase, ListingView};
pub use models::{DetailRecord, LikeStatus, LikeToggle, ListingRecord, Viewer};
pub use social::{SocialState, SocialStore};
