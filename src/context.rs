//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;

use market_core::MarketBackend;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Backend client; browser-local, hence the local storage
    backend: StoredValue<Rc<dyn MarketBackend>, LocalStorage>,
}

impl AppContext {
    pub fn new(backend: Rc<dyn MarketBackend>) -> Self {
        Self {
            backend: StoredValue::new_local(backend),
        }
    }

    pub fn backend(&self) -> Rc<dyn MarketBackend> {
        self.backend.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
