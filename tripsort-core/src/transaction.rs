//! Transaction record types for expense categorization

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Confidence below this flags a result for manual review.
pub const REVIEW_THRESHOLD: f64 = 0.7;

/// Raw input record as delivered by an upstream connector.
/// Amounts are already sign-normalized: expenses are positive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawRecord {
    /// Transaction date as YYYY-MM-DD
    pub date: String,
    /// Merchant description
    pub description: String,
    /// Positive expense amount in currency units
    pub amount: f64,
    /// Optional "City, Region" string
    #[serde(default)]
    pub location: Option<String>,
}

/// A categorized transaction. Date/description/amount/location come from the
/// raw record unchanged; the engine only annotates category and confidence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    /// Parsed date; None when the raw string was unparseable
    pub date: Option<NaiveDate>,
    /// Original date string, kept for reporting
    pub date_raw: String,
    pub description: String,
    pub amount: f64,
    pub location: Option<String>,
    pub category: Category,
    /// Heuristic certainty in [0, 1]
    pub confidence: f64,
    pub needs_review: bool,
}

/// Closed expense category set
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    #[serde(rename = "AIRFARE")]
    Airfare,
    #[serde(rename = "HOTEL")]
    Hotel,
    #[serde(rename = "MEALS")]
    Meals,
    #[serde(rename = "TRANSPORTATION")]
    Transportation,
    #[serde(rename = "SUPPLIES")]
    Supplies,
    #[serde(rename = "ENTERTAINMENT")]
    Entertainment,
    #[serde(rename = "OTHER")]
    Other,
}

impl Category {
    /// Declaration order, used for deterministic dominant-category tie-breaks
    pub const ALL: [Category; 7] = [
        Category::Airfare,
        Category::Hotel,
        Category::Meals,
        Category::Transportation,
        Category::Supplies,
        Category::Entertainment,
        Category::Other,
    ];

    /// Canonical uppercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Airfare => "AIRFARE",
            Category::Hotel => "HOTEL",
            Category::Meals => "MEALS",
            Category::Transportation => "TRANSPORTATION",
            Category::Supplies => "SUPPLIES",
            Category::Entertainment => "ENTERTAINMENT",
            Category::Other => "OTHER",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Transaction {
    /// City portion of the location (text before the first comma)
    pub fn city(&self) -> Option<&str> {
        self.location
            .as_deref()
            .and_then(|loc| loc.split(',').next())
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}
