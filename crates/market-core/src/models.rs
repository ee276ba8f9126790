//! Marketplace Models
//!
//! View records as returned by the backend. They are replaced wholesale on
//! every fetch; only the social state is ever changed locally.

use serde::{Deserialize, Deserializer, Serialize};

/// Read a nullable column, taking `null` as the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Summary record shown in the marketplace grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingRecord {
    pub idea_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub username: String,
    /// 0..10
    #[serde(default, deserialize_with = "null_as_default")]
    pub overall_score: f64,
    /// 0..100
    #[serde(default)]
    pub uniqueness: Option<f64>,
    /// 0..100
    #[serde(default)]
    pub viability: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mvp: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_additional_docs: bool,
    #[serde(default)]
    pub category: Option<String>,
}

/// Full record shown on an idea's page
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub idea_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    pub one_line_description: Option<String>,
    pub category: Option<String>,
    pub stage: Option<String>,

    // Problem
    pub problem_description: Option<String>,
    pub who_faces_problem: Option<String>,
    pub pain_level: Option<u8>,

    // Solution
    pub solution_summary: Option<String>,
    pub primary_advantage: Option<String>,

    // Market
    pub market_size: Option<String>,
    pub market_growth_trend: Option<String>,
    pub geographic_scope: Option<String>,

    // Business model
    pub revenue_model_type: Option<String>,
    pub expected_price_per_customer: Option<String>,
    pub cost_intensity: Option<String>,

    // Execution
    pub build_difficulty: Option<String>,
    pub time_to_first_version: Option<String>,
    pub validation_level: Option<String>,
    pub validation_notes: Option<String>,

    // Scores
    #[serde(deserialize_with = "null_as_default")]
    pub uniqueness: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub demand: String,
    #[serde(deserialize_with = "null_as_default")]
    pub problem_impact: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub viability: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub scalability: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub overall_score: f64,
    pub profitability: Option<String>,

    // Documents
    pub document_url: Option<String>,
    pub additional_doc_1: Option<String>,
    pub additional_doc_2: Option<String>,
    pub additional_doc_3: Option<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mvp: bool,
    /// Seller id; some rows of the detail view come back without it.
    pub user_id: Option<String>,
}

impl DetailRecord {
    /// Additional document links that are present, in display order.
    pub fn additional_docs(&self) -> Vec<&str> {
        [&self.additional_doc_1, &self.additional_doc_2, &self.additional_doc_3]
            .into_iter()
            .filter_map(|doc| doc.as_deref())
            .filter(|doc| !doc.trim().is_empty())
            .collect()
    }
}

/// The signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewer {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Like flag for one viewer plus the global count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LikeStatus {
    pub liked: bool,
    pub count: u32,
}

/// Outcome of flipping a like. `count` is `None` when the flip went
/// through but the recount did not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeToggle {
    pub liked: bool,
    pub count: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_record_defaults() {
        let json = r#"{"idea_id":"a1","title":"Pet app","price":2500}"#;
        let record: ListingRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.idea_id, "a1");
        assert_eq!(record.uniqueness, None);
        assert!(!record.mvp);
        assert!(!record.has_additional_docs);
    }

    #[test]
    fn test_detail_record_missing_seller() {
        let json = r#"{"idea_id":"a1","title":"Pet app","price":10,"username":"@Sam","demand":"High"}"#;
        let record: DetailRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.user_id, None);
        assert_eq!(record.demand, "High");
    }

    #[test]
    fn test_listing_rows_with_null_columns() {
        let json = r#"[
            {"idea_id":"a1","title":"Pet app","description":null,"price":2500,
             "username":null,"overall_score":null,"uniqueness":null,"viability":72,
             "mvp":null,"has_additional_docs":true,"category":null},
            {"idea_id":"a2","title":"Meal kit","description":"Weekly boxes","price":900}
        ]"#;
        let records: Vec<ListingRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].description, "");
        assert_eq!(records[0].username, "");
        assert_eq!(records[0].overall_score, 0.0);
        assert_eq!(records[0].viability, Some(72.0));
        assert!(!records[0].mvp);
        assert!(records[0].has_additional_docs);
        assert_eq!(records[0].category, None);
        assert_eq!(records[1].description, "Weekly boxes");
    }

    #[test]
    fn test_detail_record_with_null_scores() {
        let json = r#"{"idea_id":"a1","title":"Pet app","demand":null,"uniqueness":null,
            "problem_impact":null,"viability":null,"scalability":null,"overall_score":null,
            "price":null,"username":null,"mvp":null,"user_id":null,"stage":null}"#;
        let record: DetailRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.demand, "");
        assert_eq!(record.uniqueness, 0.0);
        assert_eq!(record.price, 0.0);
        assert_eq!(record.username, "");
        assert!(!record.mvp);
        assert_eq!(record.user_id, None);
    }

    #[test]
    fn test_additional_docs_skips_empty() {
        let record = DetailRecord {
            additional_doc_1: Some("https://a".into()),
            additional_doc_2: Some("  ".into()),
            additional_doc_3: Some("https://c".into()),
            ..Default::default()
        };
        assert_eq!(record.additional_docs(), vec!["https://a", "https://c"]);
    }
}
