//! PostgREST query encoding
//!
//! Turns a `ListingQuery` into PostgREST query parameters and reads exact
//! counts back from `Content-Range`.

use crate::filters::ListingQuery;

pub const LISTING_VIEW: &str = "marketplace_view";
pub const DETAIL_VIEW: &str = "idea_detail_view";
pub const LIKES_TABLE: &str = "idea_likes";
pub const SAVES_TABLE: &str = "idea_saves";
pub const SHARES_TABLE: &str = "idea_shares";

/// Characters with meaning inside PostgREST logic trees
const RESERVED: &[char] = &[',', '(', ')', '.', ':', '"', '\\', '*', '%'];

pub fn eq(value: &str) -> String {
    format!("eq.{value}")
}

/// Query pairs for the listing view
pub fn listing_params(query: &ListingQuery) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("select", "*".to_string()),
        ("price", format!("lte.{}", query.max_price)),
    ];

    if let Some(category) = &query.category {
        params.push(("category", eq(category)));
    }
    if query.has_mvp {
        params.push(("mvp", "is.true".to_string()));
    }
    if query.has_docs {
        params.push(("has_additional_docs", "is.true".to_string()));
    }
    if let Some(term) = query.search_term.as_deref().map(sanitize_term) {
        if !term.is_empty() {
            params.push((
                "or",
                format!("(title.ilike.*{term}*,description.ilike.*{term}*)"),
            ));
        }
    }
    if let Some(sort) = query.sort {
        params.push((
            "order",
            format!("{}.{}", sort.field.column(), sort.direction.as_str()),
        ));
    }
    params.push(("limit", query.limit.to_string()));
    params
}

/// Replace reserved characters with spaces and collapse whitespace.
pub fn sanitize_term(term: &str) -> String {
    term.replace(RESERVED, " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Total from a `Content-Range` header such as `0-24/312` or `*/0`.
pub fn parse_content_range(header: &str) -> Option<u32> {
    let (_, total) = header.trim().rsplit_once('/')?;
    total.parse().ok()
}
