//! Business purpose narrative types

use crate::transaction::{Category, REVIEW_THRESHOLD};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inclusive date span of a trip's parseable transaction dates
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub duration_days: i64,
}

/// Supporting context recorded alongside an inferred purpose
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PurposeMetadata {
    /// Distinct cities in first-seen order
    pub cities: Vec<String>,
    pub dates: DateRange,
    pub total_amount: f64,
    /// Category with the largest spend
    pub primary_category: Category,
}

/// An inferred business-purpose narrative for one trip
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BusinessPurpose {
    pub primary_purpose: String,
    /// At most three alternative phrasings
    pub alternatives: Vec<String>,
    pub confidence: f64,
    pub evidence: Vec<String>,
    pub needs_review: bool,
    pub metadata: PurposeMetadata,
}

impl BusinessPurpose {
    pub fn new(
        primary_purpose: String,
        alternatives: Vec<String>,
        confidence: f64,
        evidence: Vec<String>,
        metadata: PurposeMetadata,
    ) -> Self {
        Self {
            primary_purpose,
            alternatives,
            confidence,
            evidence,
            needs_review: confidence < REVIEW_THRESHOLD,
            metadata,
        }
    }
}
