//! Page routes and view selection.

use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};

pub const MARKETPLACE_PAGE: &str = "/pages/marketplace.html";
pub const DETAILS_PAGE: &str = "/pages/details.html";
pub const LOGIN_PAGE: &str = "/pages/login.html";
pub const SELL_PAGE: &str = "/pages/sell.html";
pub const PROFILE_PAGE: &str = "/pages/profile.html";

/// Which view to mount
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Marketplace,
    /// `None` when the `id` parameter is missing or empty
    Details(Option<String>),
}

impl Page {
    pub fn from_location(pathname: &str, search: &str) -> Self {
        if pathname.trim_end_matches('/').ends_with("details.html") {
            Page::Details(query_param(search, "id").filter(|id| !id.is_empty()))
        } else {
            Page::Marketplace
        }
    }
}

/// Decoded value of `key` in a `?a=1&b=2` search string.
pub fn query_param(search: &str, key: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| {
            percent_decode_str(&v.replace('+', " "))
                .decode_utf8_lossy()
                .into_owned()
        })
}

pub fn details_url(idea_id: &str) -> String {
    format!("{}?id={}", DETAILS_PAGE, utf8_percent_encode(idea_id, NON_ALPHANUMERIC))
}

pub fn profile_url(user_id: &str) -> String {
    format!("{}?id={}", PROFILE_PAGE, utf8_percent_encode(user_id, NON_ALPHANUMERIC))
}

/// Target of a listing card click
pub fn listing_target(signed_in: bool, idea_id: &str) -> String {
    if signed_in {
        details_url(idea_id)
    } else {
        LOGIN_PAGE.to_string()
    }
}

/// Target of "Add new listing"
pub fn add_listing_target(signed_in: bool) -> &'static str {
    if signed_in {
        SELL_PAGE
    } else {
        LOGIN_PAGE
    }
}
