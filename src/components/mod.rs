//! UI Components
//!
//! Leptos components of the marketplace and detail views.

mod category_dropdown;
mod detail_sections;
mod filter_menu;
mod item_details;
mod listing_card;
mod marketplace;
mod share_modal;
mod sort_menu;
mod status;

pub use category_dropdown::CategoryDropdown;
pub use detail_sections::IdeaOverview;
pub use filter_menu::FilterMenu;
pub use item_details::ItemDetails;
pub use listing_card::ListingCard;
pub use marketplace::Marketplace;
pub use share_modal::ShareModal;
pub use sort_menu::SortMenu;
pub use status::{InvalidIdeaPanel, LoadingPanel};
