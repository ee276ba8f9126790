//! Listing Filters
//!
//! Filter/sort/search state of the marketplace grid. Every mutator reports
//! whether the change must re-issue the listing fetch, so the view issues
//! exactly one fetch per effective change.

use serde::{Deserialize, Serialize};

/// Upper bound of the price slider; also the "no limit" default.
pub const MAX_PRICE: u32 = 10_000;
pub const PRICE_STEP: u32 = 100;
/// Rows requested per listing fetch
pub const LISTING_LIMIT: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Price,
    OverallScore,
}

impl SortField {
    pub fn column(&self) -> &'static str {
        match self {
            SortField::Price => "price",
            SortField::OverallScore => "overall_score",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOption {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortOption {
    pub const fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }
}

/// Sort menu entries
pub const SORT_CHOICES: [(&str, SortOption); 4] = [
    ("Price: Low to High", SortOption::new(SortField::Price, SortDirection::Asc)),
    ("Price: High to Low", SortOption::new(SortField::Price, SortDirection::Desc)),
    ("Rating: Low to High", SortOption::new(SortField::OverallScore, SortDirection::Asc)),
    ("Rating: High to Low", SortOption::new(SortField::OverallScore, SortDirection::Desc)),
];

/// Parameters of one listing fetch
#[derive(Debug, Clone, PartialEq)]
pub struct ListingQuery {
    pub limit: u32,
    pub search_term: Option<String>,
    pub category: Option<String>,
    pub max_price: u32,
    pub has_mvp: bool,
    pub has_docs: bool,
    pub sort: Option<SortOption>,
}

impl Default for ListingQuery {
    fn default() -> Self {
        FilterState::default().query()
    }
}

/// Filter state of the listing view
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    search_input: String,
    category: String,
    max_price: u32,
    /// Price used by the last price commit
    committed_price: u32,
    has_mvp: bool,
    has_docs: bool,
    sort: Option<SortOption>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_input: String::new(),
            category: String::new(),
            max_price: MAX_PRICE,
            committed_price: MAX_PRICE,
            has_mvp: false,
            has_docs: false,
            sort: None,
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn max_price(&self) -> u32 {
        self.max_price
    }

    pub fn has_mvp(&self) -> bool {
        self.has_mvp
    }

    pub fn has_docs(&self) -> bool {
        self.has_docs
    }

    pub fn sort(&self) -> Option<SortOption> {
        self.sort
    }

    /// Whether the filter menu holds anything beyond the defaults.
    pub fn is_filtering(&self) -> bool {
        self.has_mvp || self.has_docs || self.max_price < MAX_PRICE
    }

    /// Typing never fetches.
    pub fn set_search_input(&mut self, value: impl Into<String>) {
        self.search_input = value.into();
    }

    /// Explicit search submit. Always fetches.
    #[must_use]
    pub fn submit_search(&mut self) -> bool {
        true
    }

    #[must_use]
    pub fn set_category(&mut self, category: impl Into<String>) -> bool {
        replace(&mut self.category, category.into())
    }

    #[must_use]
    pub fn set_sort(&mut self, sort: Option<SortOption>) -> bool {
        replace(&mut self.sort, sort)
    }

    #[must_use]
    pub fn set_has_mvp(&mut self, value: bool) -> bool {
        replace(&mut self.has_mvp, value)
    }

    #[must_use]
    pub fn set_has_docs(&mut self, value: bool) -> bool {
        replace(&mut self.has_docs, value)
    }

    /// Intermediate slider value. Never fetches.
    pub fn drag_price(&mut self, value: u32) {
        self.max_price = snap_price(value);
    }

    /// End of a slider interaction. Fetches only if the price moved since
    /// the previous commit.
    #[must_use]
    pub fn commit_price(&mut self) -> bool {
        replace(&mut self.committed_price, self.max_price)
    }

    /// Clears the feature flags and the price limit.
    #[must_use]
    pub fn reset_filters(&mut self) -> bool {
        let mvp = self.set_has_mvp(false);
        let docs = self.set_has_docs(false);
        self.max_price = MAX_PRICE;
        let price = self.commit_price();
        mvp || docs || price
    }

    /// Clears every filter, the search term and the sort.
    #[must_use]
    pub fn clear_all(&mut self) -> bool {
        let search = !self.search_input.is_empty();
        self.search_input.clear();
        let category = self.set_category(String::new());
        let sort = self.set_sort(None);
        let filters = self.reset_filters();
        search || category || sort || filters
    }

    pub fn query(&self) -> ListingQuery {
        let term = self.search_input.trim();
        ListingQuery {
            limit: LISTING_LIMIT,
            search_term: (!term.is_empty()).then(|| term.to_string()),
            category: (!self.category.is_empty()).then(|| self.category.clone()),
            max_price: self.max_price,
            has_mvp: self.has_mvp,
            has_docs: self.has_docs,
            sort: self.sort,
        }
    }
}

/// Assigns and reports whether the value changed.
fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

/// Clamp to the slider range and round to the nearest step.
pub fn snap_price(value: u32) -> u32 {
    let clamped = value.min(MAX_PRICE);
    ((clamped + PRICE_STEP / 2) / PRICE_STEP) * PRICE_STEP
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRICE_DESC: SortOption = SortOption::new(SortField::Price, SortDirection::Desc);

    #[test]
    fn test_default_query() {
        let query = FilterState::new().query();
        assert_eq!(query.limit, 100);
        assert_eq!(query.search_term, None);
        assert_eq!(query.category, None);
        assert_eq!(query.max_price, MAX_PRICE);
        assert!(!query.has_mvp && !query.has_docs);
        assert_eq!(query.sort, None);
    }

    #[test]
    fn test_each_change_fetches_once() {
        let mut filters = FilterState::new();
        assert!(filters.set_category("SaaS"));
        assert!(!filters.set_category("SaaS"));
        assert!(filters.set_sort(Some(PRICE_DESC)));
        assert!(!filters.set_sort(Some(PRICE_DESC)));
        assert!(filters.set_has_mvp(true));
        assert!(!filters.set_has_mvp(true));
        assert!(filters.set_has_docs(true));
        assert!(filters.set_has_docs(false));
        assert!(filters.set_sort(None));
    }

    #[test]
    fn test_typing_does_not_fetch_but_submit_does() {
        let mut filters = FilterState::new();
        filters.set_search_input("pet ");
        filters.set_search_input("pet food ");
        assert_eq!(filters.search_input(), "pet food ");
        assert!(filters.submit_search());
        assert_eq!(filters.query().search_term.as_deref(), Some("pet food"));
    }

    #[test]
    fn test_blank_search_is_omitted() {
        let mut filters = FilterState::new();
        filters.set_search_input("   ");
        assert_eq!(filters.query().search_term, None);
    }

    #[test]
    fn test_price_drag_commits_once() {
        let mut filters = FilterState::new();
        filters.drag_price(9_000);
        filters.drag_price(7_000);
        filters.drag_price(5_000);
        assert_eq!(filters.max_price(), 5_000);
        assert!(filters.commit_price());
        // Second release without movement
        assert!(!filters.commit_price());
        assert_eq!(filters.query().max_price, 5_000);
    }

    #[test]
    fn test_price_drag_back_to_start_does_not_fetch() {
        let mut filters = FilterState::new();
        filters.drag_price(4_000);
        filters.drag_price(MAX_PRICE);
        assert!(!filters.commit_price());
    }

    #[test]
    fn test_snap_price() {
        assert_eq!(snap_price(0), 0);
        assert_eq!(snap_price(149), 100);
        assert_eq!(snap_price(150), 200);
        assert_eq!(snap_price(25_000), MAX_PRICE);
    }

    #[test]
    fn test_reset_filters() {
        let mut filters = FilterState::new();
        assert!(!filters.reset_filters());

        assert!(filters.set_has_mvp(true));
        filters.drag_price(3_000);
        assert!(filters.commit_price());
        assert!(filters.is_filtering());

        assert!(filters.reset_filters());
        assert!(!filters.is_filtering());
        assert_eq!(filters.max_price(), MAX_PRICE);
    }

    #[test]
    fn test_clear_all() {
        let mut filters = FilterState::new();
        filters.set_search_input("crm");
        assert!(filters.clear_all());
        assert_eq!(filters, FilterState::new());
        assert!(!filters.clear_all());

        assert!(filters.set_category("EdTech"));
        assert!(filters.set_sort(Some(PRICE_DESC)));
        assert!(filters.clear_all());
        assert_eq!(filters.query(), ListingQuery::default());
    }
}
