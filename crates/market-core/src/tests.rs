//! Round-trip tests against an in-memory backend.

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use async_trait::async_trait;

    use crate::backend::MarketBackend;
    use crate::detail::load_detail;
    use crate::error::{MarketError, MarketResult};
    use crate::filters::{FilterState, ListingQuery, SortDirection, SortField, SortOption, MAX_PRICE};
    use crate::listing::ListingView;
    use crate::models::{DetailRecord, LikeStatus, LikeToggle, ListingRecord, Viewer};
    use crate::social::{record_share, toggle_like, toggle_save, SocialState};

    /// In-memory backend that counts calls and can be told to fail.
    #[derive(Default)]
    struct MockBackend {
        viewer: Option<Viewer>,
        detail: Option<DetailRecord>,
        likers: RefCell<Vec<String>>,
        /// Likes by other users
        other_likes: u32,
        saved: Cell<bool>,
        shares: Cell<u32>,
        fail_mutations: bool,
        /// Mutations apply, but the follow-up like count fails
        fail_recount: bool,
        calls: Cell<u32>,
        queries: RefCell<Vec<ListingQuery>>,
    }

    impl MockBackend {
        fn call(&self) -> MarketResult<()> {
            self.calls.set(self.calls.get() + 1);
            Ok(())
        }

        fn mutation(&self) -> MarketResult<()> {
            self.call()?;
            if self.fail_mutations {
                return Err(MarketError::Http {
                    status: 500,
                    message: "boom".into(),
                });
            }
            Ok(())
        }

        fn like_count(&self) -> u32 {
            self.other_likes + self.likers.borrow().len() as u32
        }
    }

    #[async_trait(?Send)]
    impl MarketBackend for MockBackend {
        async fn list_listings(&self, query: &ListingQuery) -> MarketResult<Vec<ListingRecord>> {
            self.call()?;
            self.queries.borrow_mut().push(query.clone());
            Ok(Vec::new())
        }

        async fn fetch_detail(&self, _idea_id: &str) -> MarketResult<Option<DetailRecord>> {
            self.call()?;
            Ok(self.detail.clone())
        }

        async fn like_status(&self, _idea_id: &str, viewer_id: Option<&str>) -> MarketResult<LikeStatus> {
            self.call()?;
            let liked = viewer_id.is_some_and(|id| self.likers.borrow().iter().any(|l| l == id));
            Ok(LikeStatus {
                liked,
                count: self.like_count(),
            })
        }

        async fn toggle_like(&self, _idea_id: &str, viewer_id: &str) -> MarketResult<LikeToggle> {
            self.mutation()?;
            let mut likers = self.likers.borrow_mut();
            let liked = if let Some(pos) = likers.iter().position(|l| l == viewer_id) {
                likers.remove(pos);
                false
            } else {
                likers.push(viewer_id.to_string());
                true
            };
            drop(likers);
            Ok(LikeToggle {
                liked,
                count: (!self.fail_recount).then(|| self.like_count()),
            })
        }

        async fn save_status(&self, _idea_id: &str, _viewer_id: &str) -> MarketResult<bool> {
            self.call()?;
            Ok(self.saved.get())
        }

        async fn toggle_save(&self, _idea_id: &str, _viewer_id: &str) -> MarketResult<bool> {
            self.mutation()?;
            self.saved.set(!self.saved.get());
            Ok(self.saved.get())
        }

        async fn share_count(&self, _idea_id: &str) -> MarketResult<u32> {
            self.call()?;
            Ok(self.shares.get())
        }

        async fn track_share(&self, _idea_id: &str, _viewer_id: Option<&str>) -> MarketResult<()> {
            self.mutation()?;
            self.shares.set(self.shares.get() + 1);
            Ok(())
        }

        async fn current_user(&self) -> MarketResult<Option<Viewer>> {
            self.call()?;
            Ok(self.viewer.clone())
        }
    }

    fn viewer() -> Viewer {
        Viewer {
            id: "user-1".into(),
            email: Some("user@example.com".into()),
        }
    }

    fn detail() -> DetailRecord {
        DetailRecord {
            idea_id: "idea-1".into(),
            title: "Meal planner".into(),
            username: "@Chef".into(),
            user_id: Some("seller-1".into()),
            ..Default::default()
        }
    }

    fn social(liked: bool, count: u32) -> RefCell<SocialState> {
        RefCell::new(SocialState::new(LikeStatus { liked, count }, false, 0))
    }

    #[tokio::test]
    async fn test_like_success_adopts_server_count() {
        let backend = MockBackend {
            other_likes: 7,
            ..Default::default()
        };
        let store = social(false, 3);

        toggle_like(&backend, &store, "idea-1", Some(&viewer())).await.unwrap();

        let state = store.borrow();
        assert!(state.liked());
        assert_eq!(state.like_count(), 8);
        assert!(!state.like_pending());
    }

    #[tokio::test]
    async fn test_like_failure_restores_exact_state() {
        let backend = MockBackend {
            fail_mutations: true,
            ..Default::default()
        };
        let store = social(false, 3);

        let result = toggle_like(&backend, &store, "idea-1", Some(&viewer())).await;

        assert!(result.is_err());
        assert_eq!(*store.borrow(), SocialState::new(LikeStatus { liked: false, count: 3 }, false, 0));
    }

    #[tokio::test]
    async fn test_stored_like_survives_failed_recount() {
        let backend = MockBackend {
            other_likes: 3,
            fail_recount: true,
            ..Default::default()
        };
        let store = social(false, 3);
        let me = viewer();

        toggle_like(&backend, &store, "idea-1", Some(&me)).await.unwrap();
        assert_eq!((store.borrow().liked(), store.borrow().like_count()), (true, 4));
        assert_eq!(*backend.likers.borrow(), vec![me.id.clone()]);

        // The next click unlikes instead of liking again
        toggle_like(&backend, &store, "idea-1", Some(&me)).await.unwrap();
        assert_eq!((store.borrow().liked(), store.borrow().like_count()), (false, 3));
        assert!(backend.likers.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_like_sequence_with_failures() {
        let mut backend = MockBackend::default();
        let store = social(false, 0);
        let me = viewer();

        toggle_like(&backend, &store, "idea-1", Some(&me)).await.unwrap();
        assert_eq!((store.borrow().liked(), store.borrow().like_count()), (true, 1));

        backend.fail_mutations = true;
        let before = store.borrow().clone();
        assert!(toggle_like(&backend, &store, "idea-1", Some(&me)).await.is_err());
        assert_eq!(*store.borrow(), before);

        backend.fail_mutations = false;
        toggle_like(&backend, &store, "idea-1", Some(&me)).await.unwrap();
        assert_eq!((store.borrow().liked(), store.borrow().like_count()), (false, 0));
    }

    #[tokio::test]
    async fn test_like_without_viewer_is_rejected_silently() {
        let backend = MockBackend::default();
        let store = social(false, 3);

        let err = toggle_like(&backend, &store, "idea-1", None).await.unwrap_err();

        assert_eq!(err, MarketError::login_to_like());
        assert_eq!(backend.calls.get(), 0);
        assert_eq!((store.borrow().liked(), store.borrow().like_count()), (false, 3));
    }

    #[tokio::test]
    async fn test_save_uses_server_flag() {
        let backend = MockBackend::default();
        let store = social(false, 0);

        toggle_save(&backend, &store, "idea-1", Some(&viewer())).await.unwrap();
        assert!(store.borrow().saved());

        toggle_save(&backend, &store, "idea-1", Some(&viewer())).await.unwrap();
        assert!(!store.borrow().saved());
    }

    #[tokio::test]
    async fn test_save_failure_and_login_prompt() {
        let backend = MockBackend {
            fail_mutations: true,
            ..Default::default()
        };
        let store = social(false, 0);

        assert!(toggle_save(&backend, &store, "idea-1", Some(&viewer())).await.is_err());
        assert!(!store.borrow().saved());

        let calls = backend.calls.get();
        let err = toggle_save(&backend, &store, "idea-1", None).await.unwrap_err();
        assert_eq!(err, MarketError::login_to_save());
        assert_eq!(backend.calls.get(), calls);
    }

    #[tokio::test]
    async fn test_share_counts_only_after_backend_accepts() {
        let mut backend = MockBackend::default();
        let store = social(false, 0);

        record_share(&backend, &store, "idea-1", None).await.unwrap();
        assert_eq!(store.borrow().share_count(), 1);

        backend.fail_mutations = true;
        assert!(record_share(&backend, &store, "idea-1", Some(&viewer())).await.is_err());
        assert_eq!(store.borrow().share_count(), 1);
    }

    #[tokio::test]
    async fn test_load_detail_with_viewer() {
        let backend = MockBackend {
            viewer: Some(viewer()),
            detail: Some(detail()),
            likers: RefCell::new(vec!["user-1".into()]),
            other_likes: 4,
            saved: Cell::new(true),
            shares: Cell::new(2),
            ..Default::default()
        };

        let snapshot = load_detail(&backend, "idea-1").await.unwrap();

        assert_eq!(snapshot.record.title, "Meal planner");
        assert_eq!(snapshot.viewer, Some(viewer()));
        assert!(snapshot.social.liked());
        assert_eq!(snapshot.social.like_count(), 5);
        assert!(snapshot.social.saved());
        assert_eq!(snapshot.social.share_count(), 2);
    }

    #[tokio::test]
    async fn test_load_detail_anonymous() {
        let backend = MockBackend {
            detail: Some(detail()),
            other_likes: 4,
            ..Default::default()
        };

        let snapshot = load_detail(&backend, "idea-1").await.unwrap();

        assert_eq!(snapshot.viewer, None);
        assert!(!snapshot.social.liked());
        assert!(!snapshot.social.saved());
        assert_eq!(snapshot.social.like_count(), 4);
    }

    #[tokio::test]
    async fn test_load_detail_missing_record() {
        let backend = MockBackend::default();
        let err = load_detail(&backend, "nope").await.unwrap_err();
        assert_eq!(err, MarketError::NotFound);
        assert_eq!(err.to_string(), "Idea not found");
    }

    /// Mirrors the listing view: every effective filter change issues one
    /// fetch, price drags issue none until released.
    #[tokio::test]
    async fn test_filter_changes_issue_one_fetch_each() {
        let backend = MockBackend::default();
        let mut filters = FilterState::new();
        let mut view = ListingView::new();

        async fn refetch(backend: &MockBackend, filters: &FilterState, view: &mut ListingView) {
            let ticket = view.begin();
            let result = backend.list_listings(&filters.query()).await;
            view.complete(ticket, result);
        }

        let sort = Some(SortOption::new(SortField::Price, SortDirection::Asc));

        if filters.set_category("FinTech") {
            refetch(&backend, &filters, &mut view).await;
        }
        if filters.set_category("FinTech") {
            refetch(&backend, &filters, &mut view).await;
        }
        if filters.set_sort(sort) {
            refetch(&backend, &filters, &mut view).await;
        }
        if filters.set_has_mvp(true) {
            refetch(&backend, &filters, &mut view).await;
        }
        if filters.set_has_docs(true) {
            refetch(&backend, &filters, &mut view).await;
        }

        {
            let queries = backend.queries.borrow();
            assert_eq!(queries.len(), 4);

            assert_eq!(queries[0].category.as_deref(), Some("FinTech"));
            assert_eq!(queries[0].sort, None);
            assert!(!queries[0].has_mvp);

            assert_eq!(queries[1].sort, sort);
            assert!(!queries[1].has_mvp);

            assert!(queries[2].has_mvp);
            assert!(!queries[2].has_docs);

            assert!(queries[3].has_docs);
            assert_eq!(queries[3].max_price, MAX_PRICE);
        }

        for price in [9_000, 6_500, 4_200] {
            filters.drag_price(price);
        }
        assert_eq!(backend.queries.borrow().len(), 4);
        if filters.commit_price() {
            refetch(&backend, &filters, &mut view).await;
        }
        assert_eq!(backend.queries.borrow().len(), 5);
        assert_eq!(backend.queries.borrow()[4].max_price, 4_200);
        assert_eq!(view.records().len(), 0);
        assert!(!view.is_loading());
    }
}
