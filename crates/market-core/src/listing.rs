//! Listing fetch state.
//!
//! Loading, failure and results are mutually exclusive. Each fetch gets a
//! ticket; only the most recently issued ticket may publish its result, so
//! a slow stale response never overwrites a newer one.

use crate::error::MarketResult;
use crate::models::ListingRecord;

const FALLBACK_ERROR: &str = "Failed to load marketplace items";

#[derive(Debug, Clone, PartialEq)]
pub enum ListingPhase {
    Loading,
    Failed(String),
    Ready(Vec<ListingRecord>),
}

/// Identifies one issued fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct ListingView {
    phase: ListingPhase,
    issued: u64,
}

impl Default for ListingView {
    fn default() -> Self {
        Self {
            phase: ListingPhase::Loading,
            issued: 0,
        }
    }
}

impl ListingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &ListingPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, ListingPhase::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            ListingPhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn records(&self) -> &[ListingRecord] {
        match &self.phase {
            ListingPhase::Ready(records) => records,
            _ => &[],
        }
    }

    /// Number of fetches issued so far
    pub fn issued(&self) -> u64 {
        self.issued
    }

    /// Start a fetch: enter `Loading` and hand out its ticket.
    pub fn begin(&mut self) -> FetchTicket {
        self.issued += 1;
        self.phase = ListingPhase::Loading;
        FetchTicket(self.issued)
    }

    /// Publish a fetch result. Returns false when the ticket was superseded
    /// and the result is dropped.
    pub fn complete(&mut self, ticket: FetchTicket, result: MarketResult<Vec<ListingRecord>>) -> bool {
        if ticket.0 != self.issued {
            log::debug!("dropping stale listing result #{} (latest #{})", ticket.0, self.issued);
            return false;
        }
        self.phase = match result {
            Ok(records) => ListingPhase::Ready(records),
            Err(err) => {
                log::error!("listing fetch failed: {err}");
                let message = err.to_string();
                ListingPhase::Failed(if message.is_empty() {
                    FALLBACK_ERROR.to_string()
                } else {
                    message
                })
            }
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MarketError;

    fn record(id: &str) -> ListingRecord {
        ListingRecord {
            idea_id: id.to_string(),
            title: format!("Idea {}", id),
            description: String::new(),
            price: 100.0,
            username: "seller".to_string(),
            overall_score: 7.5,
            uniqueness: Some(80.0),
            viability: Some(60.0),
            mvp: false,
            has_additional_docs: false,
            category: None,
        }
    }

    #[test]
    fn test_starts_loading() {
        let view = ListingView::new();
        assert!(view.is_loading());
        assert!(view.records().is_empty());
        assert_eq!(view.error(), None);
    }

    #[test]
    fn test_complete_success() {
        let mut view = ListingView::new();
        let ticket = view.begin();
        assert!(view.complete(ticket, Ok(vec![record("a")])));
        assert!(!view.is_loading());
        assert_eq!(view.records().len(), 1);
    }

    #[test]
    fn test_failure_clears_results() {
        let mut view = ListingView::new();
        let ticket = view.begin();
        view.complete(ticket, Ok(vec![record("a")]));

        let ticket = view.begin();
        assert!(view.records().is_empty());
        view.complete(ticket, Err(MarketError::Transport("offline".into())));
        assert_eq!(view.error(), Some("Network error: offline"));
        assert!(view.records().is_empty());
        assert!(!view.is_loading());
    }

    #[test]
    fn test_retry_clears_error() {
        let mut view = ListingView::new();
        let ticket = view.begin();
        view.complete(ticket, Err(MarketError::Transport("offline".into())));
        view.begin();
        assert_eq!(view.error(), None);
        assert!(view.is_loading());
    }

    #[test]
    fn test_stale_result_is_dropped() {
        let mut view = ListingView::new();
        let first = view.begin();
        let second = view.begin();

        assert!(view.complete(second, Ok(vec![record("new")])));
        assert!(!view.complete(first, Ok(vec![record("old")])));
        assert_eq!(view.records()[0].idea_id, "new");
        assert_eq!(view.issued(), 2);
    }
}
